//! Markup rendering of navigation state.
//!
//! Emits the observable DOM contract the page stylesheet relies on:
//!
//! - `display:none` on hidden nodes
//! - `expanded` class on open folders
//! - `search-match` class on matched items, with the match wrapped in `<mark>`
//! - `active` class on the current page item
//! - for the legacy list, the `no-search-results` placeholder and clear button
//!
//! # Example
//!
//! ```rust
//! use docnav::domain::{NavTree, NodeSpec};
//! use docnav::nav::{NavOptions, StatePersistence, TreeNavController};
//! use docnav::storage::MemoryStorage;
//! use docnav::ui::render_tree;
//!
//! let tree = NavTree::from_specs(vec![NodeSpec::folder("Guides", vec![NodeSpec::item("Install")])])?;
//! let nav = TreeNavController::new(tree, StatePersistence::new(MemoryStorage::new()), NavOptions::default());
//! let html = render_tree(&nav.compute_viewmodel());
//! assert!(html.contains(r#"<li class="tree-folder" data-node="0">"#));
//! # Ok::<(), docnav::DocnavError>(())
//! ```

use crate::domain::NodeKind;
use crate::nav::flat::FlatListSearch;
use crate::ui::helpers::{escape_html, highlighted_title};
use crate::ui::viewmodel::{NavViewModel, RowView};
use std::fmt::Write as _;

const HIDDEN_STYLE: &str = r#" style="display:none""#;

/// Renders the tree view model as nested `<ul>`/`<li>` markup.
#[must_use]
pub fn render_tree(vm: &NavViewModel) -> String {
    let mut out = String::from(r#"<ul class="tree-nav">"#);
    let mut open_folders: Vec<usize> = Vec::new();

    for row in &vm.rows {
        while open_folders.last().is_some_and(|depth| *depth >= row.depth) {
            open_folders.pop();
            out.push_str("</ul></li>");
        }

        match row.kind {
            NodeKind::Folder => {
                open_folder(&mut out, row);
                open_folders.push(row.depth);
            }
            NodeKind::Item => item(&mut out, row),
        }
    }

    for _ in open_folders {
        out.push_str("</ul></li>");
    }
    out.push_str("</ul>");
    out
}

fn classes(base: &str, flags: &[(bool, &str)]) -> String {
    flags
        .iter()
        .filter(|(on, _)| *on)
        .fold(base.to_string(), |mut acc, (_, class)| {
            acc.push(' ');
            acc.push_str(class);
            acc
        })
}

fn hidden(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        HIDDEN_STYLE
    }
}

fn open_folder(out: &mut String, row: &RowView) {
    let _ = write!(
        out,
        r#"<li class="{}" data-node="{}"{}><div class="tree-folder-header"><span class="tree-title">{}</span></div><ul class="tree-children">"#,
        classes("tree-folder", &[(row.expanded, "expanded")]),
        row.id.0,
        hidden(row.visible),
        escape_html(&row.title),
    );
}

fn item(out: &mut String, row: &RowView) {
    let _ = write!(
        out,
        r#"<li class="{}" data-node="{}"{}><span class="tree-title">{}</span></li>"#,
        classes(
            "tree-item",
            &[(row.active, "active"), (row.search_match, "search-match")]
        ),
        row.id.0,
        hidden(row.visible),
        highlighted_title(&row.title, row.highlight.as_ref()),
    );
}

/// Renders the legacy flat list with its placeholder and clear button.
#[must_use]
pub fn render_flat_list(list: &FlatListSearch) -> String {
    let mut out = String::new();

    let _ = write!(
        out,
        r#"<button class="search-clear"{}>×</button>"#,
        hidden(list.clear_button_visible())
    );

    if let Some(placeholder) = list.placeholder() {
        let _ = write!(
            out,
            r#"<div id="{}" class="{}">{}</div>"#,
            placeholder.id,
            placeholder.class,
            escape_html(&placeholder.message)
        );
    }

    out.push_str(r#"<ul class="nav-list">"#);
    for entry in list.items() {
        let _ = write!(
            out,
            r#"<li class="{}"{}>{}</li>"#,
            classes("nav-item", &[(entry.search_match, "search-match")]),
            hidden(entry.visible),
            escape_html(&entry.title)
        );
    }
    out.push_str("</ul>");
    out
}
