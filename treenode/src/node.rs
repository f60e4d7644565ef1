use log::{debug, trace};
use webdom::{ClassNames, Element};

use crate::config::{DisabledPolicy, TreeNodeConfig};
use crate::error::ConfigError;
use crate::events::{Intent, PART_KEY};
use crate::owner::TreeOwner;
use crate::props::NodeProps;

/// Renderer for a single tree entry.
///
/// Rendering is a pure function of the props and config. The three intent
/// handlers only propose the next state to the owner's callbacks; the node
/// never changes its own flags.
#[derive(Debug, Clone)]
pub struct TreeNode {
    props: NodeProps,
    config: TreeNodeConfig,
}

impl TreeNode {
    pub fn new(props: NodeProps) -> Self {
        Self {
            props,
            config: TreeNodeConfig::default(),
        }
    }

    /// Fails if the config does not validate, e.g. an empty `prefix_cls`.
    pub fn with_config(props: NodeProps, config: TreeNodeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { props, config })
    }

    pub fn props(&self) -> &NodeProps {
        &self.props
    }

    pub fn config(&self) -> &TreeNodeConfig {
        &self.config
    }

    pub fn value(&self) -> &str {
        &self.props.value
    }

    pub(crate) fn set_props(&mut self, props: NodeProps) {
        self.props = props;
    }

    /// Leaf when flagged as one or when there is no child content at all.
    pub fn is_leaf(&self) -> bool {
        self.props.leaf || self.props.children.is_none()
    }

    pub fn root_classes(&self) -> ClassNames {
        let props = &self.props;
        let config = &self.config;
        ClassNames::new()
            .add_opt(props.class_name.as_deref())
            .add(config.prefix_cls.as_str())
            .add_if(config.prefixed("expanded"), props.expanded.is_expanded())
            .add_if(
                config.prefixed("selected"),
                !props.commbox && props.selected.is_selected(),
            )
            .add_if(config.prefixed("checked"), props.checked.is_set())
    }

    pub fn render(&self) -> Element {
        let props = &self.props;

        let disclosure = if self.is_leaf() {
            Element::i()
        } else {
            Element::i()
                .data(PART_KEY, Intent::Expand.part())
                .class("icon-arrow")
                .on_click(Intent::Expand.handler())
        };

        let label = Element::a()
            .data(PART_KEY, Intent::Select.part())
            .title(props.tooltip())
            .on_click(Intent::Select.handler())
            .on_double_click(Intent::Expand.handler())
            .text(props.text.as_str());

        let mut root = Element::li()
            .id(props.value.as_str())
            .classes(self.root_classes())
            .child(disclosure)
            .child_opt(self.render_commbox())
            .child(label);

        if let Some(children) = &props.children {
            root = root.children(children.iter().cloned());
        }

        root
    }

    /// Checkbox or radio glyph, only when `commbox` is on.
    ///
    /// The class encodes the variant and the raw check state, e.g.
    /// `icon-checkbox-2` for an indeterminate checkbox.
    pub fn render_commbox(&self) -> Option<Element> {
        let props = &self.props;
        if !props.commbox {
            return None;
        }

        let variant = if props.multiple {
            "icon-checkbox"
        } else {
            "icon-radio"
        };

        Some(
            Element::i()
                .data(PART_KEY, Intent::Check.part())
                .class(format!("{variant}-{}", props.checked))
                .on_click(Intent::Check.handler()),
        )
    }

    /// Nested list of child nodes, rendered by the owner.
    ///
    /// Nothing is rendered unless an owner is given, there is child content,
    /// and the node is expanded.
    pub fn render_children(&self, owner: Option<&dyn TreeOwner>) -> Option<Element> {
        let owner = owner?;
        let children = self.props.children.as_ref()?;
        if !self.props.expanded.is_expanded() {
            return None;
        }

        let items = children
            .iter()
            .enumerate()
            .map(|(index, child)| owner.render_tree_node(child, index, self, &self.props.path));
        Some(Element::ul().children(items))
    }

    fn intents_blocked(&self, intent: Intent) -> bool {
        let blocked = self.props.disabled
            && self.config.disabled_policy == DisabledPolicy::BlockIntents;
        if blocked {
            trace!("{intent:?} intent on disabled node {} blocked", self.props.value);
        }
        blocked
    }

    pub fn on_expand(&self) {
        if self.intents_blocked(Intent::Expand) {
            return;
        }
        let next = self.props.expanded.toggled();
        debug!("expand intent on {}: {} -> {}", self.props.value, self.props.expanded, next);
        (self.props.on_expand)(next, self);
    }

    /// Plain selection, suppressed while a checkbox or radio is shown.
    pub fn on_select(&self) {
        if self.props.commbox {
            trace!("select intent on {} ignored: commbox shown", self.props.value);
            return;
        }
        if self.intents_blocked(Intent::Select) {
            return;
        }
        let next = self.props.selected.toggled();
        debug!("select intent on {}: {} -> {}", self.props.value, self.props.selected, next);
        (self.props.on_select)(next, self);
    }

    pub fn on_check(&self) {
        if self.intents_blocked(Intent::Check) {
            return;
        }
        let next = self.props.checked.toggled();
        debug!("check intent on {}: {} -> {}", self.props.value, self.props.checked, next);
        (self.props.on_check)(next, self);
    }

    pub fn raise(&self, intent: Intent) {
        match intent {
            Intent::Expand => self.on_expand(),
            Intent::Select => self.on_select(),
            Intent::Check => self.on_check(),
        }
    }
}
