/// Pointer events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Single click, targeted at the element under the pointer
    Click {
        target: Option<String>,
        /// `data-part` of the sub-element hit inside the target, if any
        part: Option<String>,
        button: MouseButton,
    },
    /// Double click, targeted at the element under the pointer
    DoubleClick {
        target: Option<String>,
        part: Option<String>,
    },
}

impl Event {
    /// Left-button click on the element with the given id.
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: Some(target.into()),
            part: None,
            button: MouseButton::Left,
        }
    }

    pub fn double_click(target: impl Into<String>) -> Self {
        Event::DoubleClick {
            target: Some(target.into()),
            part: None,
        }
    }

    /// Narrow the event to a named part inside the target.
    pub fn at_part(mut self, name: impl Into<String>) -> Self {
        match &mut self {
            Event::Click { part, .. } | Event::DoubleClick { part, .. } => {
                *part = Some(name.into());
            }
        }
        self
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Click { target, .. } | Event::DoubleClick { target, .. } => target.as_deref(),
        }
    }

    pub fn part(&self) -> Option<&str> {
        match self {
            Event::Click { part, .. } | Event::DoubleClick { part, .. } => part.as_deref(),
        }
    }

    /// Listener slot this event is delivered to. Only left clicks are routed.
    pub fn kind(&self) -> Option<EventKind> {
        match self {
            Event::Click {
                button: MouseButton::Left,
                ..
            } => Some(EventKind::Click),
            Event::Click { .. } => None,
            Event::DoubleClick { .. } => Some(EventKind::DoubleClick),
        }
    }
}

/// Listener slot on an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Click,
    DoubleClick,
}

impl EventKind {
    /// Attribute name used when serializing listeners.
    pub fn attr(&self) -> &'static str {
        match self {
            EventKind::Click => "onclick",
            EventKind::DoubleClick => "ondblclick",
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}
