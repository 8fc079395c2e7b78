//! Command and query execution against a Session.
//!
//! This module connects the abstract Command/Query types to the canvas and
//! the design store, executing operations and returning results. Failures
//! come back as `Error` results; nothing here panics or aborts the session.

use crate::{
    CatalogRef, Command, CommandResult, DesignSummary, ItemInfo, Query, QueryResult, Session,
    Target,
};
use canvas::Canvas;
use design::{Design, DesignError, PlacementId, SurfaceSize};

/// Execute a command against a session.
pub fn execute_command(session: &mut Session, command: Command) -> CommandResult {
    match command {
        Command::AddItem { item, position } => {
            let Some(entry) = item.resolve(&session.catalog).cloned() else {
                return CommandResult::error(unknown_catalog_item(&item));
            };
            let id = match position {
                Some(position) => session.canvas.add_item_at(entry, position),
                None => session.canvas.add_item(entry),
            };
            CommandResult::created(vec![id])
        }

        Command::RemoveItem { target } => {
            let ids = resolve_target(&session.canvas, &target);
            let mut deleted = Vec::new();
            for id in ids {
                if let Err(e) = session.canvas.remove_item(id) {
                    return CommandResult::error(e.to_string());
                }
                deleted.push(id);
            }
            CommandResult::deleted(deleted)
        }

        Command::ClearItems => {
            let ids: Vec<PlacementId> = session.design().items.iter().map(|item| item.id).collect();
            session.canvas.remove_all_items();
            CommandResult::deleted(ids)
        }

        Command::ClearStrokes => {
            let count = session.canvas.clear_strokes();
            CommandResult::message(format!("cleared {count} strokes"))
        }

        Command::PointerDown { point } => match session.canvas.pointer_down(point) {
            Some(id) => CommandResult::modified(vec![id]).with_message("selected"),
            None => CommandResult::success(),
        },

        Command::PointerMove { point } => match session.canvas.pointer_move(point) {
            Some(id) => CommandResult::modified(vec![id]),
            None => CommandResult::success(),
        },

        Command::PointerUp => match session.canvas.pointer_up() {
            Some(index) => CommandResult::message(format!("stroke {index} committed")),
            None => CommandResult::success(),
        },

        Command::SetTool { tool } => into_result(session.canvas.set_tool(tool)),

        Command::SetPenColor { color } => {
            session.canvas.set_pen_color(color);
            CommandResult::success()
        }

        Command::SetPenWidth { width } => match session.canvas.set_pen_width(width) {
            Ok(applied) => CommandResult::message(format!("pen width {applied}")),
            Err(e) => CommandResult::error(e.to_string()),
        },

        Command::ResizeSurface { width, height } => into_result(
            session
                .canvas
                .set_surface_size(SurfaceSize::new(width, height)),
        ),

        Command::SetViewMode { mode } => into_result(session.canvas.set_view_mode(mode)),

        Command::RotatePreview { steps } => match session.canvas.rotate_preview(steps) {
            Ok(angle) => CommandResult::message(format!("camera {angle}°")),
            Err(e) => CommandResult::error(e.to_string()),
        },

        Command::NewDesign {
            name,
            width,
            height,
        } => match Design::new(name, width, height).and_then(|design| {
            design.validate()?;
            Ok(design)
        }) {
            Ok(design) => {
                session.canvas.replace_design(design);
                CommandResult::success()
            }
            Err(e) => CommandResult::error(e.to_string()),
        },

        Command::Rename { name } => into_result(session.canvas.rename(name)),

        Command::SetNotes { notes } => {
            session.canvas.set_notes(notes);
            CommandResult::success()
        }

        Command::Save => match session.save_design() {
            Ok(path) => CommandResult::saved(path),
            Err(e) => CommandResult::error(e.to_string()),
        },

        Command::Load { name } => match session.load_design(&name) {
            Ok(design) => {
                session.canvas.replace_design(design);
                CommandResult::success()
            }
            Err(e) => CommandResult::error(e.to_string()),
        },

        Command::Delete { name } => into_result(session.store.delete(&name)),

        Command::Batch { commands } => {
            let mut all_created = Vec::new();
            let mut all_modified = Vec::new();
            let mut all_deleted = Vec::new();
            let mut last_path = None;

            for cmd in commands {
                match execute_command(session, cmd) {
                    CommandResult::Success {
                        created,
                        modified,
                        deleted,
                        path,
                        ..
                    } => {
                        all_created.extend(created);
                        all_modified.extend(modified);
                        all_deleted.extend(deleted);
                        last_path = path.or(last_path);
                    }
                    CommandResult::Error { message } => {
                        return CommandResult::error(format!("Batch failed: {}", message));
                    }
                }
            }

            CommandResult::Success {
                created: all_created,
                modified: all_modified,
                deleted: all_deleted,
                path: last_path,
                message: None,
            }
        }
    }
}

/// Execute a query against a session.
pub fn execute_query(session: &Session, query: Query) -> QueryResult {
    let canvas = &session.canvas;
    match query {
        Query::GetDesign => QueryResult::Design {
            design: canvas.design().clone(),
        },

        Query::GetItems { target } => {
            let transform = canvas.transform();
            let ids = target.map(|target| resolve_target(canvas, &target));
            QueryResult::Items {
                items: canvas
                    .design()
                    .items
                    .iter()
                    .filter(|item| ids.as_ref().map_or(true, |ids| ids.contains(&item.id)))
                    .map(|item| ItemInfo::new(item, transform.to_screen(item.position)))
                    .collect(),
            }
        }

        Query::GetStrokes => QueryResult::Strokes {
            strokes: canvas.design().strokes.clone(),
        },

        Query::GetInventory => QueryResult::Inventory {
            inventory: canvas.inventory(),
        },

        Query::GetInventoryReport => QueryResult::Report {
            text: canvas.inventory_report(),
        },

        Query::ListDesigns => match session.store.list_all() {
            Ok(designs) => QueryResult::Designs {
                designs: designs.iter().map(DesignSummary::from).collect(),
            },
            Err(e) => QueryResult::error(e.to_string()),
        },

        Query::GetCatalog { category } => QueryResult::Catalog {
            items: match category {
                Some(category) => session
                    .catalog
                    .by_category(&category)
                    .map(|item| item.as_ref().clone())
                    .collect(),
                None => session
                    .catalog
                    .items()
                    .iter()
                    .map(|item| item.as_ref().clone())
                    .collect(),
            },
        },

        Query::GetCategories => QueryResult::Categories {
            categories: session
                .catalog
                .categories()
                .into_iter()
                .map(str::to_string)
                .collect(),
        },

        Query::GetInteraction => QueryResult::Interaction {
            interaction: canvas.interaction(),
            tool: canvas.tool(),
            view_mode: canvas.view_mode(),
            pen: canvas.pen(),
            camera_angle: canvas.camera_angle(),
        },

        Query::GetScene => QueryResult::Scene {
            scene: canvas.scene(),
        },
    }
}

fn into_result(result: Result<(), DesignError>) -> CommandResult {
    match result {
        Ok(()) => CommandResult::success(),
        Err(e) => CommandResult::error(e.to_string()),
    }
}

fn unknown_catalog_item(item: &CatalogRef) -> String {
    match item {
        CatalogRef::Id(id) => DesignError::UnknownCatalogItem(*id).to_string(),
        CatalogRef::Name(name) => format!("unknown catalog item {name:?}"),
    }
}

/// Resolve a target to concrete item IDs, in z-order.
fn resolve_target(canvas: &Canvas, target: &Target) -> Vec<PlacementId> {
    let items = &canvas.design().items;
    match target {
        Target::Selection => canvas.selected().into_iter().collect(),
        Target::Item(id) => items
            .iter()
            .filter(|item| item.id == *id)
            .map(|item| item.id)
            .collect(),
        Target::Items(ids) => items
            .iter()
            .filter(|item| ids.contains(&item.id))
            .map(|item| item.id)
            .collect(),
        Target::Catalog(catalog_id) => items
            .iter()
            .filter(|item| item.catalog_id() == *catalog_id)
            .map(|item| item.id)
            .collect(),
        Target::All => items.iter().map(|item| item.id).collect(),
    }
}
