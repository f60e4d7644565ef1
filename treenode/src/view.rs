//! Retained node output with a selective re-render gate.

use std::rc::Rc;

use log::trace;
use webdom::{Element, Event};

use crate::config::UpdateGate;
use crate::events::EventResult;
use crate::node::TreeNode;
use crate::props::NodeProps;

/// Whether moving from `prev` to `next` requires recomputing output.
///
/// Only child content (by identity) and the three flags are compared. A
/// label or tooltip change on its own does not count.
pub fn should_update(prev: &NodeProps, next: &NodeProps) -> bool {
    let children_changed = match (&prev.children, &next.children) {
        (Some(a), Some(b)) => !Rc::ptr_eq(a, b),
        (None, None) => false,
        _ => true,
    };

    children_changed
        || prev.checked != next.checked
        || prev.selected != next.selected
        || prev.expanded != next.expanded
}

/// A node together with its last rendered output.
///
/// Updates always replace the props, so intents use the latest values and
/// callbacks, but the output is only recomputed when the configured gate
/// lets it through.
#[derive(Debug)]
pub struct NodeView {
    node: TreeNode,
    rendered: Element,
}

impl NodeView {
    pub fn new(node: TreeNode) -> Self {
        let rendered = node.render();
        Self { node, rendered }
    }

    pub fn node(&self) -> &TreeNode {
        &self.node
    }

    pub fn rendered(&self) -> &Element {
        &self.rendered
    }

    /// Apply new props. Returns true if the output was recomputed.
    pub fn update(&mut self, next: NodeProps) -> bool {
        let rerender = match self.node.config().update_gate {
            UpdateGate::Always => true,
            UpdateGate::Props => should_update(self.node.props(), &next),
        };

        self.node.set_props(next);

        if rerender {
            self.rendered = self.node.render();
        } else {
            trace!("node {} kept previous output", self.node.value());
        }
        rerender
    }

    /// Handle an event against the retained output.
    pub fn dispatch(&self, event: &Event) -> EventResult {
        self.node.dispatch_on(&self.rendered, event)
    }
}
