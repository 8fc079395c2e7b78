//! JSON line protocol.
//!
//! Each message is one JSON object: a [`Command`] or a [`Query`]. The reply is
//! the serialized result, also on one line.

use crate::{execute_command, execute_query, Command, Query, Session};
use serde::Serialize;

/// Process a JSON message (command or query).
pub fn process_message(session: &mut Session, json: &str) -> String {
    // Try to parse as command first
    let command_error = match serde_json::from_str::<Command>(json) {
        Ok(cmd) => return to_line(&execute_command(session, cmd)),
        Err(e) => e,
    };

    // Try to parse as query
    let query_error = match serde_json::from_str::<Query>(json) {
        Ok(query) => return to_line(&execute_query(session, query)),
        Err(e) => e,
    };

    // Neither - report why
    error_line(&format!(
        "Invalid JSON: not a valid command ({command_error}) or query ({query_error})"
    ))
}

fn to_line(result: &impl Serialize) -> String {
    serde_json::to_string(result)
        .unwrap_or_else(|e| error_line(&format!("Serialization failed: {e}")))
}

fn error_line(message: &str) -> String {
    serde_json::json!({ "status": "error", "message": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas::CanvasConfig;
    use design::Catalog;
    use project::DesignStore;
    use std::sync::Arc;

    fn session(dir: &tempfile::TempDir) -> Session {
        Session::new(
            Arc::new(Catalog::builtin()),
            Arc::new(DesignStore::new(dir.path())),
            CanvasConfig::default(),
        )
    }

    #[test]
    fn commands_and_queries_share_one_channel() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);

        let reply = process_message(
            &mut session,
            r#"{"type": "add_item", "item": 1, "position": [20, 15]}"#,
        );
        let reply: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(reply["status"], "success");
        assert_eq!(reply["created"].as_array().unwrap().len(), 1);

        let reply = process_message(&mut session, r#"{"type": "get_items"}"#);
        let reply: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(reply["type"], "items");
        assert_eq!(reply["items"][0]["screen"], serde_json::json!([400.0, 300.0]));
    }

    #[test]
    fn malformed_command_reports_the_reason() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);
        let reply: serde_json::Value = serde_json::from_str(&process_message(
            &mut session,
            r##"{"type": "set_pen_color", "color": "#12"}"##,
        ))
        .unwrap();
        assert_eq!(reply["status"], "error");
        assert!(reply["message"].as_str().unwrap().contains("invalid hex color"));
    }

    #[test]
    fn garbage_is_an_error_reply() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);
        for input in ["not json", r#"{"type": "fly_away"}"#] {
            let reply: serde_json::Value =
                serde_json::from_str(&process_message(&mut session, input)).unwrap();
            assert_eq!(reply["status"], "error");
        }
    }
}
