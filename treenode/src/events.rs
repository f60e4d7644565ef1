//! Routing pointer events to a node's intents.

use log::trace;
use webdom::{Element, Event};

use crate::node::TreeNode;

/// Data key naming a node's own interactive parts.
pub(crate) const PART_KEY: &str = "part";

/// A state transition a node proposes to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Expand,
    Select,
    Check,
}

impl Intent {
    /// Listener name attached to rendered elements.
    pub fn handler(self) -> &'static str {
        match self {
            Intent::Expand => "expand",
            Intent::Select => "select",
            Intent::Check => "check",
        }
    }

    pub fn from_handler(name: &str) -> Option<Self> {
        match name {
            "expand" => Some(Intent::Expand),
            "select" => Some(Intent::Select),
            "check" => Some(Intent::Check),
            _ => None,
        }
    }

    /// `data-part` name of the element that primarily raises this intent.
    pub fn part(self) -> &'static str {
        match self {
            Intent::Expand => "arrow",
            Intent::Select => "label",
            Intent::Check => "commbox",
        }
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Not aimed at one of this node's own elements, or no listener there.
    Ignored,
    /// A listener matched and the intent was raised.
    Consumed(Intent),
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

impl TreeNode {
    /// Handle an event against a fresh render of this node.
    pub fn dispatch(&self, event: &Event) -> EventResult {
        self.dispatch_on(&self.render(), event)
    }

    /// Handle an event against previously rendered output.
    ///
    /// The event must target this node's root id and name one of its own
    /// parts. Child content is never searched, so parts of nested nodes
    /// cannot reach this node's handlers.
    pub fn dispatch_on(&self, rendered: &Element, event: &Event) -> EventResult {
        let (Some(target), Some(part), Some(kind)) = (event.target(), event.part(), event.kind())
        else {
            return EventResult::Ignored;
        };
        if target != self.value() || rendered.id.as_deref() != Some(target) {
            trace!("event target {target} is not node {}", self.value());
            return EventResult::Ignored;
        }

        let intent = self
            .own_parts(rendered)
            .iter()
            .find(|el| el.get_data(PART_KEY).is_some_and(|p| p == part))
            .and_then(|el| el.listener(kind))
            .and_then(Intent::from_handler);

        match intent {
            Some(intent) => {
                self.raise(intent);
                EventResult::Consumed(intent)
            }
            None => EventResult::Ignored,
        }
    }

    /// Rendered elements that precede the child content.
    fn own_parts<'a>(&self, rendered: &'a Element) -> &'a [Element] {
        let all = rendered.child_elements();
        let nested = self.props().children.as_ref().map_or(0, |c| c.len());
        &all[..all.len().saturating_sub(nested)]
    }
}
