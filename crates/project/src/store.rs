use crate::StoreConfig;
use chrono::{DateTime, Utc};
use design::{Design, DesignError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Version of the design file format
pub const DESIGN_FORMAT_VERSION: u32 = 1;

const EXTENSION: &str = "json";

#[derive(Serialize)]
struct DesignFileRef<'a> {
    version: u32,
    design: &'a Design,
}

#[derive(Deserialize)]
struct DesignFile {
    version: u32,
    design: serde_json::Value,
}

/// File name used for a design, derived from its name.
///
/// Path separators and other unsafe characters become `_`, so distinct names
/// may share a file; the last save wins.
pub fn file_name_for(name: &str) -> Result<String> {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '(' | ')' | '\'' | '&' | ',') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        return Err(DesignError::InvalidConfiguration(
            "design name must not be empty".into(),
        ));
    }
    Ok(format!("{stem}.{EXTENSION}"))
}

/// A directory of design files.
///
/// Shareable across threads. Saves of the same design name are serialized so
/// two writers never interleave on one file.
#[derive(Debug)]
pub struct DesignStore {
    root: PathBuf,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl DesignStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.resolve())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        Ok(self.root.join(file_name_for(name)?))
    }

    fn lock_for(&self, file_name: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks.entry(file_name.to_string()).or_default().clone()
    }

    /// Write a design to `<root>/<name>.json` and refresh its modified time.
    ///
    /// The timestamp only changes once the file is in place.
    pub fn save(&self, design: &mut Design) -> Result<PathBuf> {
        let (path, modified_at) = self.save_snapshot(design)?;
        design.modified_at = modified_at;
        Ok(path)
    }

    /// Write a design without touching it. Returns the path and the modified
    /// time recorded in the file.
    ///
    /// The file is written to a temporary sibling first and renamed into
    /// place, so a failed save never leaves a half-written design behind.
    pub fn save_snapshot(&self, design: &Design) -> Result<(PathBuf, DateTime<Utc>)> {
        design.validate()?;
        design.check_finite()?;
        let file_name = file_name_for(&design.name)?;
        let path = self.root.join(&file_name);

        let mut snapshot = design.clone();
        snapshot.touch();
        let json = serde_json::to_string_pretty(&DesignFileRef {
            version: DESIGN_FORMAT_VERSION,
            design: &snapshot,
        })
        .map_err(|e| DesignError::Encoding {
            name: design.name.clone(),
            reason: e.to_string(),
        })?;

        let lock = self.lock_for(&file_name);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        std::fs::create_dir_all(&self.root).map_err(|e| DesignError::io(&self.root, e))?;
        let tmp = self.root.join(format!(".{file_name}.tmp"));
        let written = std::fs::write(&tmp, json)
            .map_err(|e| DesignError::io(&tmp, e))
            .and_then(|()| std::fs::rename(&tmp, &path).map_err(|e| DesignError::io(&path, e)));
        if let Err(e) = written {
            if let Err(cleanup) = std::fs::remove_file(&tmp) {
                if cleanup.kind() != io::ErrorKind::NotFound {
                    log::warn!("could not remove {}: {cleanup}", tmp.display());
                }
            }
            return Err(e);
        }

        log::info!("saved design {:?} to {}", design.name, path.display());
        Ok((path, snapshot.modified_at))
    }

    pub fn load(&self, name: &str) -> Result<Design> {
        let path = self.path_for(name)?;
        let contents = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DesignError::NotFound(name.to_string()),
            _ => DesignError::io(&path, e),
        })?;
        let design = decode(&path, &contents)?;
        log::info!("loaded design {:?} from {}", design.name, path.display());
        Ok(design)
    }

    /// Every readable design in the store, most recently modified first.
    ///
    /// Files that fail to parse are skipped. A missing root is an empty store.
    pub fn list_all(&self) -> Result<Vec<Design>> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(DesignError::io(&self.root, e)),
        };

        let mut designs = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    log::warn!("skipping unreadable entry in {}: {e}", self.root.display());
                    continue;
                }
            };
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            let decoded = std::fs::read_to_string(&path)
                .map_err(|e| DesignError::io(&path, e))
                .and_then(|contents| decode(&path, &contents));
            match decoded {
                Ok(design) => designs.push(design),
                Err(e) => log::warn!("skipping {}: {e}", path.display()),
            }
        }

        designs.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
        Ok(designs)
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        let file_name = file_name_for(name)?;
        let path = self.root.join(&file_name);
        let lock = self.lock_for(&file_name);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        std::fs::remove_file(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DesignError::NotFound(name.to_string()),
            _ => DesignError::io(&path, e),
        })?;
        log::info!("deleted design {name:?}");
        Ok(())
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).map(|path| path.is_file()).unwrap_or(false)
    }

    /// Save on the blocking pool. Hands the design back with its refreshed
    /// timestamp.
    pub async fn save_in_background(self: Arc<Self>, mut design: Design) -> Result<(Design, PathBuf)> {
        smol::unblock(move || {
            let path = self.save(&mut design)?;
            Ok((design, path))
        })
        .await
    }

    pub async fn load_in_background(self: Arc<Self>, name: String) -> Result<Design> {
        smol::unblock(move || self.load(&name)).await
    }

    pub async fn list_in_background(self: Arc<Self>) -> Result<Vec<Design>> {
        smol::unblock(move || self.list_all()).await
    }
}

fn decode(path: &Path, contents: &str) -> Result<Design> {
    let file: DesignFile =
        serde_json::from_str(contents).map_err(|e| DesignError::corrupt(path, e))?;
    if file.version > DESIGN_FORMAT_VERSION {
        return Err(DesignError::corrupt(
            path,
            format!(
                "design file version {} is newer than supported version {}",
                file.version, DESIGN_FORMAT_VERSION
            ),
        ));
    }
    let design: Design =
        serde_json::from_value(file.design).map_err(|e| DesignError::corrupt(path, e))?;
    design.validate().map_err(|e| DesignError::corrupt(path, e))?;
    Ok(design)
}

#[cfg(test)]
mod tests {
    use super::*;
    use design::{Catalog, DesignPoint, HexColor, PlacedItem, Stroke, SurfacePoint};
    use std::time::Duration;

    fn sample_design(name: &str) -> Design {
        let catalog = Catalog::builtin();
        let mut design = Design::new(name, 40.0, 30.0).unwrap();
        design.push_item(PlacedItem::new(
            catalog.items()[0].clone(),
            DesignPoint::new(12.345678901234, 7.1),
        ));
        design.push_item(
            PlacedItem::new(catalog.items()[3].clone(), DesignPoint::new(-2.0, 31.5))
                .with_quantity(3),
        );
        design.push_stroke(Stroke::new(
            vec![SurfacePoint::new(1.0, 2.0), SurfacePoint::new(3.5, 4.25)],
            HexColor::new(0x12, 0xAB, 0xEF),
            2.5,
        ));
        design.notes = "Full sun along the south fence".into();
        design.collaborators.push("pat@example.com".into());
        design
    }

    #[test]
    fn test_save_then_load_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let store = DesignStore::new(dir.path());

        let mut design = sample_design("Front Yard");
        let path = store.save(&mut design).unwrap();
        assert_eq!(path, dir.path().join("Front Yard.json"));

        let loaded = store.load("Front Yard").unwrap();
        assert_eq!(loaded, design);
    }

    #[test]
    fn test_save_refreshes_modified_time() {
        let dir = tempfile::tempdir().unwrap();
        let store = DesignStore::new(dir.path());
        let mut design = sample_design("Patio");
        let before = design.modified_at;
        std::thread::sleep(Duration::from_millis(2));
        store.save(&mut design).unwrap();
        assert!(design.modified_at > before);
        assert_eq!(design.created_at, store.load("Patio").unwrap().created_at);
    }

    #[test]
    fn test_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let store = DesignStore::new(dir.path());
        let mut design = sample_design("Side Bed");
        let path = store.save(&mut design).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["design"]["name"], "Side Bed");
        assert_eq!(value["design"]["extent"]["width"], 40.0);
        assert_eq!(value["design"]["strokes"][0]["color"], "#12ABEF");
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = DesignStore::new(dir.path());
        assert!(matches!(store.load("Nope"), Err(DesignError::NotFound(name)) if name == "Nope"));
    }

    #[test]
    fn test_load_corrupt_data() {
        let dir = tempfile::tempdir().unwrap();
        let store = DesignStore::new(dir.path());

        std::fs::write(dir.path().join("Broken.json"), "{ not json").unwrap();
        assert!(matches!(store.load("Broken"), Err(DesignError::CorruptData { .. })));

        let mut design = sample_design("Future");
        store.save(&mut design).unwrap();
        let path = dir.path().join("Future.json");
        let bumped = std::fs::read_to_string(&path)
            .unwrap()
            .replacen("\"version\": 1", "\"version\": 2", 1);
        std::fs::write(&path, bumped).unwrap();
        assert!(matches!(store.load("Future"), Err(DesignError::CorruptData { .. })));

        let mut design = sample_design("Flat");
        store.save(&mut design).unwrap();
        let path = dir.path().join("Flat.json");
        let zeroed = std::fs::read_to_string(&path)
            .unwrap()
            .replacen("\"width\": 40.0", "\"width\": 0.0", 1);
        std::fs::write(&path, zeroed).unwrap();
        assert!(matches!(store.load("Flat"), Err(DesignError::CorruptData { .. })));
    }

    #[test]
    fn test_list_skips_bad_files_and_sorts_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = DesignStore::new(dir.path());
        for name in ["Alpha", "Beta", "Gamma"] {
            store.save(&mut sample_design(name)).unwrap();
            std::thread::sleep(Duration::from_millis(5));
        }
        std::fs::write(dir.path().join("garbage.json"), "[]").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

        let names: Vec<String> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|design| design.name)
            .collect();
        assert_eq!(names, ["Gamma", "Beta", "Alpha"]);
    }

    #[test]
    fn test_list_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = DesignStore::new(dir.path().join("does-not-exist"));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete_and_exists() {
        let dir = tempfile::tempdir().unwrap();
        let store = DesignStore::new(dir.path());
        store.save(&mut sample_design("Herbs")).unwrap();
        assert!(store.exists("Herbs"));

        store.delete("Herbs").unwrap();
        assert!(!store.exists("Herbs"));
        assert!(matches!(store.delete("Herbs"), Err(DesignError::NotFound(_))));
    }

    #[test]
    fn test_file_names_are_sanitized() {
        assert_eq!(file_name_for("Back Yard").unwrap(), "Back Yard.json");
        assert_eq!(file_name_for("a/b\\c:d").unwrap(), "a_b_c_d.json");
        assert_eq!(file_name_for("../etc").unwrap(), "___etc.json");
        assert!(file_name_for("   ").is_err());
    }

    #[test]
    fn test_same_sanitized_name_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = DesignStore::new(dir.path());
        store.save(&mut sample_design("a/b")).unwrap();
        store.save(&mut sample_design("a:b")).unwrap();
        assert_eq!(store.load("a/b").unwrap().name, "a:b");
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = DesignStore::new(dir.path());
        let mut design = sample_design("x");
        design.name = " ".into();
        assert!(matches!(
            store.save(&mut design),
            Err(DesignError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_background_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(DesignStore::new(dir.path()));

        smol::block_on(async {
            let (saved, _) = store
                .clone()
                .save_in_background(sample_design("Orchard"))
                .await
                .unwrap();
            let loaded = store
                .clone()
                .load_in_background("Orchard".into())
                .await
                .unwrap();
            assert_eq!(loaded, saved);
            assert_eq!(store.clone().list_in_background().await.unwrap().len(), 1);
        });
    }

    #[test]
    fn test_concurrent_saves_of_one_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(DesignStore::new(dir.path()));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    let mut design = sample_design("Shared");
                    design.notes = format!("writer {i}");
                    store.save(&mut design).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let loaded = store.load("Shared").unwrap();
        assert!(loaded.notes.starts_with("writer "));
    }

    #[test]
    fn test_failed_save_keeps_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        // A plain file where the store directory should be.
        let root = dir.path().join("not-a-dir");
        std::fs::write(&root, "").unwrap();
        let store = DesignStore::new(&root);

        let mut design = sample_design("Pond");
        let before = design.modified_at;
        std::thread::sleep(Duration::from_millis(2));
        assert!(matches!(store.save(&mut design), Err(DesignError::Io { .. })));
        assert_eq!(design.modified_at, before);
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = DesignStore::new(dir.path());
        // A directory occupying the target path makes the rename fail.
        std::fs::create_dir(dir.path().join("Terrace.json")).unwrap();

        let mut design = sample_design("Terrace");
        let before = design.modified_at;
        assert!(matches!(store.save(&mut design), Err(DesignError::Io { .. })));
        assert_eq!(design.modified_at, before);
        assert!(!dir.path().join(".Terrace.json.tmp").exists());
    }

    #[test]
    fn test_non_finite_values_are_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let store = DesignStore::new(dir.path());

        let mut design = sample_design("Meadow");
        let id = design.items[0].id;
        design.move_item(id, DesignPoint::new(f64::INFINITY, f64::INFINITY));
        assert!(matches!(store.save(&mut design), Err(DesignError::Encoding { .. })));

        let mut design = sample_design("Meadow");
        design.push_stroke(Stroke::new(
            vec![SurfacePoint::new(f64::NAN, 0.0), SurfacePoint::new(1.0, 1.0)],
            HexColor::BLACK,
            2.0,
        ));
        assert!(matches!(store.save(&mut design), Err(DesignError::Encoding { .. })));

        assert!(!store.exists("Meadow"));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_leaves_design_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = DesignStore::new(dir.path());
        let design = sample_design("Rockery");
        let (path, modified_at) = store.save_snapshot(&design).unwrap();

        assert!(modified_at >= design.modified_at);
        let loaded = store.load("Rockery").unwrap();
        assert_eq!(loaded.modified_at, modified_at);
        assert_eq!(path, dir.path().join("Rockery.json"));
    }
}
