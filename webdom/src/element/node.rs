use std::collections::BTreeMap;

use super::Content;
use crate::event::EventKind;

/// Markup tag of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    Ul,
    #[default]
    Li,
    I,
    A,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::I => "i",
            Tag::A => "a",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    // Identity
    pub tag: Tag,
    pub id: Option<String>,

    // Content
    pub content: Content,

    // Visual
    /// Class list in insertion order, without duplicates.
    pub classes: Vec<String>,
    pub title: Option<String>,

    // Interaction
    /// Handler name per event kind. The owner of the tree resolves names to
    /// actions when an event targets this element.
    pub listeners: BTreeMap<EventKind, String>,

    // Custom data storage, serialized as `data-*` attributes
    pub data: BTreeMap<String, String>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    pub fn ul() -> Self {
        Self::new(Tag::Ul)
    }

    pub fn li() -> Self {
        Self::new(Tag::Li)
    }

    pub fn i() -> Self {
        Self::new(Tag::I)
    }

    pub fn a() -> Self {
        Self::new(Tag::A)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Visual
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn classes(mut self, classes: impl IntoIterator<Item = String>) -> Self {
        for class in classes {
            self = self.class(class);
        }
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The class list joined with single spaces, as a `class` attribute.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    // Text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(s) => Some(s),
            _ => None,
        }
    }

    // Interaction
    pub fn on(mut self, kind: EventKind, handler: impl Into<String>) -> Self {
        self.listeners.insert(kind, handler.into());
        self
    }

    pub fn on_click(self, handler: impl Into<String>) -> Self {
        self.on(EventKind::Click, handler)
    }

    pub fn on_double_click(self, handler: impl Into<String>) -> Self {
        self.on(EventKind::DoubleClick, handler)
    }

    pub fn listener(&self, kind: EventKind) -> Option<&str> {
        self.listeners.get(&kind).map(String::as_str)
    }

    /// Whether any pointer listener is attached.
    pub fn is_clickable(&self) -> bool {
        !self.listeners.is_empty()
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Append a child only when one is given.
    pub fn child_opt(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
