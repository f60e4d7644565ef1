//! Properties a tree owner passes to each node.

use std::fmt;
use std::rc::Rc;

use webdom::Element;

use crate::node::TreeNode;
use crate::state::{Checked, Expanded, Selected};

/// Intent callback: the proposed next state and the node raising it.
pub type Callback<T> = Rc<dyn Fn(T, &TreeNode)>;

/// Child content, shared so that re-renders can compare it by identity.
pub type Children = Rc<[Element]>;

fn noop<T: 'static>() -> Callback<T> {
    Rc::new(|_: T, _: &TreeNode| {})
}

#[derive(Clone)]
pub struct NodeProps {
    pub value: String,
    pub text: String,
    pub qtip: Option<String>,
    pub selected: Selected,
    pub checked: Checked,
    pub expanded: Expanded,
    pub multiple: bool,
    pub commbox: bool,
    pub leaf: bool,
    pub disabled: bool,
    pub children: Option<Children>,
    /// Extra class placed before the component's own classes.
    pub class_name: Option<String>,
    /// Position of this node in the tree, handed back to the owner when
    /// rendering children.
    pub path: String,
    /// Business payload for the owner. Not read here.
    pub data: Option<serde_json::Value>,
    pub on_select: Callback<Selected>,
    pub on_check: Callback<Checked>,
    pub on_expand: Callback<Expanded>,
}

impl NodeProps {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            qtip: None,
            selected: Selected::default(),
            checked: Checked::default(),
            expanded: Expanded::default(),
            multiple: false,
            commbox: false,
            leaf: false,
            disabled: false,
            children: None,
            class_name: None,
            path: String::new(),
            data: None,
            on_select: noop(),
            on_check: noop(),
            on_expand: noop(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn qtip(mut self, qtip: impl Into<String>) -> Self {
        self.qtip = Some(qtip.into());
        self
    }

    pub fn selected(mut self, selected: Selected) -> Self {
        self.selected = selected;
        self
    }

    pub fn checked(mut self, checked: Checked) -> Self {
        self.checked = checked;
        self
    }

    pub fn expanded(mut self, expanded: Expanded) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn commbox(mut self, commbox: bool) -> Self {
        self.commbox = commbox;
        self
    }

    pub fn leaf(mut self, leaf: bool) -> Self {
        self.leaf = leaf;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children = Some(children.into_iter().collect());
        self
    }

    /// Reuse already shared child content, keeping its identity.
    pub fn shared_children(mut self, children: Children) -> Self {
        self.children = Some(children);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn on_select(mut self, f: impl Fn(Selected, &TreeNode) + 'static) -> Self {
        self.on_select = Rc::new(f);
        self
    }

    pub fn on_check(mut self, f: impl Fn(Checked, &TreeNode) + 'static) -> Self {
        self.on_check = Rc::new(f);
        self
    }

    pub fn on_expand(mut self, f: impl Fn(Expanded, &TreeNode) + 'static) -> Self {
        self.on_expand = Rc::new(f);
        self
    }

    /// Tooltip text, falling back to the label.
    pub fn tooltip(&self) -> &str {
        self.qtip.as_deref().unwrap_or(&self.text)
    }
}

impl fmt::Debug for NodeProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeProps")
            .field("value", &self.value)
            .field("text", &self.text)
            .field("qtip", &self.qtip)
            .field("selected", &self.selected)
            .field("checked", &self.checked)
            .field("expanded", &self.expanded)
            .field("multiple", &self.multiple)
            .field("commbox", &self.commbox)
            .field("leaf", &self.leaf)
            .field("disabled", &self.disabled)
            .field("children", &self.children.as_ref().map(|c| c.len()))
            .field("class_name", &self.class_name)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
