use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that overrides where designs are stored.
pub const DESIGNS_DIR_ENV: &str = "LANDSCAPE_DESIGNS_DIR";

/// Directory created under the user's documents folder.
pub const DEFAULT_DIR_NAME: &str = "LandscapeDesigns";

/// Where the design store lives.
///
/// Resolution order: explicit root, then `LANDSCAPE_DESIGNS_DIR`, then
/// `<documents>/LandscapeDesigns`, then `./LandscapeDesigns`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub root: Option<PathBuf>,
}

impl StoreConfig {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn resolve(&self) -> PathBuf {
        self.resolve_with(std::env::var_os(DESIGNS_DIR_ENV), dirs::document_dir())
    }

    fn resolve_with(&self, env: Option<OsString>, documents: Option<PathBuf>) -> PathBuf {
        if let Some(root) = &self.root {
            return root.clone();
        }
        if let Some(dir) = env.filter(|value| !value.is_empty()) {
            return PathBuf::from(dir);
        }
        documents
            .map(|docs| docs.join(DEFAULT_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR_NAME))
    }
}
