//! Presentation layer: view models and markup rendering.
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! TreeNavController → compute_viewmodel → NavViewModel → render_tree → markup
//! FlatListSearch ───────────────────────────────────────▶ render_flat_list
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable sidebar state
//! - [`renderer`]: Markup emitters for the tree and the legacy flat list
//! - [`helpers`]: Escaping and match highlighting

pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use renderer::{render_flat_list, render_tree};
pub use viewmodel::{NavViewModel, RowView};
