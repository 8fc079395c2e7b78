//! Landscape commands - all operations that modify session state.
//!
//! Commands are intent-based: they describe what the user wants,
//! not how to achieve it.

use crate::{CatalogRef, Target};
use canvas::{Tool, ViewMode};
use design::{
    DesignPoint, HexColor, PlacementId, SurfacePoint, DEFAULT_DESIGN_HEIGHT, DEFAULT_DESIGN_NAME,
    DEFAULT_DESIGN_WIDTH,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A command that modifies the session.
///
/// Commands are serializable for:
/// - Recording scripts
/// - Replaying sessions from the CLI
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    // === Items ===
    /// Place a catalog item. Without a position it lands near the design
    /// center with a random offset.
    AddItem {
        item: CatalogRef,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<DesignPoint>,
    },

    /// Remove target items.
    RemoveItem {
        #[serde(default)]
        target: Target,
    },

    /// Remove every placed item.
    ClearItems,

    /// Remove every freehand stroke.
    ClearStrokes,

    // === Pointer ===
    PointerDown { point: SurfacePoint },
    PointerMove { point: SurfacePoint },
    PointerUp,

    // === Tool ===
    /// Switch the active tool.
    SetTool { tool: Tool },
    SetPenColor { color: HexColor },
    SetPenWidth { width: f64 },

    // === View ===
    /// Change the rendering surface size in pixels.
    ResizeSurface { width: f64, height: f64 },
    SetViewMode { mode: ViewMode },
    /// Turn the preview camera by 15 degree steps (negative turns back).
    RotatePreview {
        #[serde(default = "default_rotate_steps")]
        steps: i32,
    },

    // === Design ===
    /// Start a fresh design, discarding the current one.
    NewDesign {
        #[serde(default = "default_design_name")]
        name: String,
        #[serde(default = "default_design_width")]
        width: f64,
        #[serde(default = "default_design_height")]
        height: f64,
    },
    Rename { name: String },
    SetNotes { notes: String },

    // === Persistence ===
    /// Save the current design under its name.
    Save,
    /// Replace the current design with a saved one.
    Load { name: String },
    /// Delete a saved design file.
    Delete { name: String },

    // === Batch ===
    /// Execute multiple commands in sequence.
    Batch { commands: Vec<Command> },
}

fn default_rotate_steps() -> i32 {
    1
}

fn default_design_name() -> String {
    DEFAULT_DESIGN_NAME.to_string()
}

fn default_design_width() -> f64 {
    DEFAULT_DESIGN_WIDTH
}

fn default_design_height() -> f64 {
    DEFAULT_DESIGN_HEIGHT
}

/// Result of executing a command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandResult {
    /// Command succeeded.
    Success {
        /// IDs of items created, if any.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        created: Vec<PlacementId>,
        /// IDs of items modified, if any.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        modified: Vec<PlacementId>,
        /// IDs of items deleted, if any.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        deleted: Vec<PlacementId>,
        /// File written, for saves.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<PathBuf>,
        /// Short human-readable outcome.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Command failed.
    Error { message: String },
}

impl CommandResult {
    pub fn success() -> Self {
        Self::Success {
            created: vec![],
            modified: vec![],
            deleted: vec![],
            path: None,
            message: None,
        }
    }

    pub fn created(ids: Vec<PlacementId>) -> Self {
        Self::Success {
            created: ids,
            modified: vec![],
            deleted: vec![],
            path: None,
            message: None,
        }
    }

    pub fn modified(ids: Vec<PlacementId>) -> Self {
        Self::Success {
            created: vec![],
            modified: ids,
            deleted: vec![],
            path: None,
            message: None,
        }
    }

    pub fn deleted(ids: Vec<PlacementId>) -> Self {
        Self::Success {
            created: vec![],
            modified: vec![],
            deleted: ids,
            path: None,
            message: None,
        }
    }

    pub fn saved(path: PathBuf) -> Self {
        Self::Success {
            created: vec![],
            modified: vec![],
            deleted: vec![],
            path: Some(path),
            message: None,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self::success().with_message(message)
    }

    /// Attach a message to a successful result. Errors are returned as-is.
    pub fn with_message(self, text: impl Into<String>) -> Self {
        match self {
            Self::Success {
                created,
                modified,
                deleted,
                path,
                ..
            } => Self::Success {
                created,
                modified,
                deleted,
                path,
                message: Some(text.into()),
            },
            error => error,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
