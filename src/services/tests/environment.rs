//! Tests for child-process environment and log file conventions

use tempfile::TempDir;

use crate::services::environment::{frontend_environment, frontend_logfile};
use crate::types::EntryPoint;

#[test]
fn test_environment_carries_component_identity_and_address() {
    let entry = EntryPoint::file("apps/dashboard.py");
    let env = frontend_environment("home", &entry, "127.0.0.1", 9000);

    assert_eq!(env.get("FRONTEND_NAME").unwrap(), "home");
    assert_eq!(env.get("FRONTEND_HOST").unwrap(), "127.0.0.1");
    assert_eq!(env.get("FRONTEND_PORT").unwrap(), "9000");
}

#[test]
fn test_file_entry_point_adds_no_render_variables() {
    let entry = EntryPoint::file("apps/dashboard.py");
    let env = frontend_environment("home", &entry, "127.0.0.1", 9000);

    assert!(!env.contains_key("PANEL_RENDER_MODULE"));
    assert!(!env.contains_key("PANEL_RENDER_FUNCTION"));
}

#[test]
fn test_render_fn_entry_point_exports_module_and_function() {
    let entry = EntryPoint::render_fn("dashboards.sales:render_page").unwrap();
    let env = frontend_environment("home", &entry, "127.0.0.1", 9000);

    assert_eq!(env.get("PANEL_RENDER_MODULE").unwrap(), "dashboards.sales");
    assert_eq!(env.get("PANEL_RENDER_FUNCTION").unwrap(), "render_page");
}

#[test]
fn test_logfile_path_is_scoped_to_component() {
    let log_dir = TempDir::new().unwrap();
    let path = frontend_logfile(log_dir.path(), "home", "error.log").unwrap();

    assert_eq!(path, log_dir.path().join("home").join("error.log"));
    // The component directory is created eagerly so the file can be opened.
    assert!(log_dir.path().join("home").is_dir());
}
