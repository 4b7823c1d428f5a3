//! File-backed state through `initialize`, using temporary directories.

use docnav::domain::{NavTree, NodeSpec, TreeView};
use docnav::{initialize, Config, FolderIdentity};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn tree() -> NavTree {
    NavTree::from_json(
        r#"[
            {"kind": "folder", "title": " Guides ", "children": [
                {"kind": "item", "title": "Install"},
                {"kind": "item", "title": "Quickstart"}
            ]},
            {"kind": "folder", "title": "API", "expanded": true, "children": [
                {"kind": "item", "title": "Types", "active": true}
            ]}
        ]"#,
    )
    .unwrap()
}

fn config(path: &Path) -> Config {
    Config {
        state_file: Some(path.to_path_buf()),
        ..Config::default()
    }
}

fn expanded(tree: &NavTree, title: &str) -> bool {
    tree.node(tree.find_by_title(title).unwrap()).unwrap().expanded
}

#[test]
fn toggles_survive_a_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("state.json");

    {
        let mut nav = initialize(&config(&path), tree());
        assert!(!expanded(nav.tree(), "Guides"));
        let guides = nav.tree().find_by_title("Guides").unwrap();
        assert!(nav.toggle_folder(guides));
    }
    assert!(path.exists());

    let nav = initialize(&config(&path), tree());
    assert!(expanded(nav.tree(), "Guides"));
    assert!(expanded(nav.tree(), "API"));
    assert_eq!(nav.expand_state().get("Guides"), Some(true));
}

#[test]
fn custom_storage_key_is_honoured() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    let config = Config {
        storage_key: "my-site-nav".to_string(),
        ..config(&path)
    };

    {
        let mut nav = initialize(&config, tree());
        let guides = nav.tree().find_by_title("Guides").unwrap();
        nav.toggle_folder(guides);
    }

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("my-site-nav"));
    assert!(!raw.contains("tree-nav-state"));
}

#[test]
fn corrupt_state_file_is_replaced_on_next_toggle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "garbage{").unwrap();

    {
        let mut nav = initialize(&config(&path), tree());
        assert!(nav.expand_state().is_empty());
        assert!(expanded(nav.tree(), "API"));
        assert!(!expanded(nav.tree(), "Guides"));

        let guides = nav.tree().find_by_title("Guides").unwrap();
        assert!(nav.toggle_folder(guides));
    }
    assert_ne!(fs::read_to_string(&path).unwrap(), "garbage{");

    let nav = initialize(&config(&path), tree());
    assert!(expanded(nav.tree(), "Guides"));
    assert_eq!(nav.expand_state().get("Guides"), Some(true));
}

#[test]
fn newer_state_format_runs_in_memory_and_is_kept() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    let newer = r#"{"version": 99, "entries": {}}"#;
    fs::write(&path, newer).unwrap();

    {
        let mut nav = initialize(&config(&path), tree());
        let guides = nav.tree().find_by_title("Guides").unwrap();
        assert!(nav.toggle_folder(guides));
        assert!(expanded(nav.tree(), "Guides"));
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), newer);
}

#[test]
fn config_file_drives_identity_and_debounce() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state.json");
    let config_path = dir.path().join("docnav.toml");
    fs::write(
        &config_path,
        format!(
            "folder_identity = \"path\"\ndebounce_ms = 75\nstate_file = {:?}\n",
            state.to_string_lossy()
        ),
    )
    .unwrap();

    let config = Config::from_toml_file(&config_path).unwrap();
    assert_eq!(config.folder_identity, FolderIdentity::Path);
    assert_eq!(config.state_path(), state);

    let nav = initialize(&config, tree());
    assert_eq!(nav.options().identity, FolderIdentity::Path);
    assert_eq!(nav.options().debounce.as_millis(), 75);
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = Config::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, docnav::DocnavError::Io(_)));
}
