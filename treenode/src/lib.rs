//! Tree-node renderer for tree views.
//!
//! A [`TreeNode`] renders one entry of a tree (disclosure arrow, optional
//! checkbox or radio glyph, label, child content) into a [`webdom::Element`]
//! and turns clicks into intents: proposed next values for the node's
//! `expanded`, `selected` and `checked` flags, delivered to the owner's
//! callbacks. The owner commits the change and renders again.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use treenode::{Expanded, NodeProps, TreeNode};
//! use webdom::{Element, Event};
//!
//! let next = Rc::new(Cell::new(None));
//! let seen = next.clone();
//!
//! let node = TreeNode::new(
//!     NodeProps::new("docs", "Documents")
//!         .children([Element::li().text("a.txt")])
//!         .on_expand(move |state, _| seen.set(Some(state))),
//! );
//!
//! node.dispatch(&Event::double_click("docs").at_part("label"));
//! assert_eq!(next.get(), Some(Expanded::Expanded));
//! ```

mod config;
mod error;
mod events;
mod node;
mod owner;
mod props;
mod state;
mod view;

pub use config::{DEFAULT_PREFIX_CLS, DisabledPolicy, TreeNodeConfig, UpdateGate};
pub use error::{ConfigError, StateError};
pub use events::{EventResult, Intent};
pub use node::TreeNode;
pub use owner::TreeOwner;
pub use props::{Callback, Children, NodeProps};
pub use state::{Checked, Expanded, Selected};
pub use view::{NodeView, should_update};
