//! Saving and loading designs, one JSON file per design.

mod config;
mod store;

pub use config::{StoreConfig, DEFAULT_DIR_NAME, DESIGNS_DIR_ENV};
pub use store::{file_name_for, DesignStore, DESIGN_FORMAT_VERSION};
