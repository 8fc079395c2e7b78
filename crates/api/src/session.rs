use canvas::{Canvas, CanvasConfig};
use design::{Catalog, Design, Result};
use project::DesignStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Everything commands run against: the catalog, the editing canvas and the
/// design store.
pub struct Session {
    pub catalog: Arc<Catalog>,
    pub canvas: Canvas,
    pub store: Arc<DesignStore>,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>, store: Arc<DesignStore>, config: CanvasConfig) -> Self {
        Self {
            catalog,
            canvas: Canvas::new(Design::untitled(), config),
            store,
        }
    }

    pub fn design(&self) -> &Design {
        self.canvas.design()
    }

    /// Load a saved design with its placements bound to this session's
    /// catalog. The canvas is left alone.
    pub fn load_design(&self, name: &str) -> Result<Design> {
        let mut design = self.store.load(name)?;
        design.rebind(&self.catalog)?;
        Ok(design)
    }

    /// Save the current design and record the new modified time.
    pub fn save_design(&mut self) -> Result<PathBuf> {
        let (path, modified_at) = self.store.save_snapshot(self.canvas.design())?;
        self.canvas.mark_saved(modified_at);
        Ok(path)
    }
}
