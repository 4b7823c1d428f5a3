//! Domain layer for the navigation state library.
//!
//! This module contains the core types the rest of the crate operates on,
//! independent of any storage medium or rendering toolkit.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`node`]: Node model and the renderer's nested input format
//! - [`tree`]: Arena-backed [`NavTree`]
//! - [`view`]: The [`TreeView`] abstraction and folder identity schemes
//!
//! # Examples
//!
//! ```
//! use docnav::domain::{NavTree, NodeSpec, Result};
//!
//! fn sidebar() -> Result<NavTree> {
//!     NavTree::from_specs(vec![NodeSpec::folder("Guides", vec![NodeSpec::item("Install")])])
//! }
//! # sidebar().unwrap();
//! ```

pub mod error;
pub mod node;
pub mod tree;
pub mod view;

pub use error::{DocnavError, Result};
pub use node::{NodeId, NodeKind, NodeSpec, TreeNode};
pub use tree::NavTree;
pub use view::{FolderIdentity, TreeView};
