//! Node flags.
//!
//! Owners exchange these as small integers (`0`, `1`, and `2` for an
//! indeterminate check). Conversions from `u8` reject anything else.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// Whether a node's children are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Expanded {
    #[default]
    Collapsed,
    Expanded,
}

impl Expanded {
    pub fn is_expanded(self) -> bool {
        self == Expanded::Expanded
    }

    pub fn toggled(self) -> Self {
        match self {
            Expanded::Expanded => Expanded::Collapsed,
            Expanded::Collapsed => Expanded::Expanded,
        }
    }
}

impl From<bool> for Expanded {
    fn from(expanded: bool) -> Self {
        if expanded {
            Expanded::Expanded
        } else {
            Expanded::Collapsed
        }
    }
}

impl From<Expanded> for u8 {
    fn from(state: Expanded) -> u8 {
        match state {
            Expanded::Collapsed => 0,
            Expanded::Expanded => 1,
        }
    }
}

impl TryFrom<u8> for Expanded {
    type Error = StateError;

    fn try_from(value: u8) -> Result<Self, StateError> {
        match value {
            0 => Ok(Expanded::Collapsed),
            1 => Ok(Expanded::Expanded),
            value => Err(StateError::OutOfRange {
                flag: "expanded",
                allowed: "0 or 1",
                value,
            }),
        }
    }
}

/// Whether a node's row is highlighted as selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Selected {
    #[default]
    Unselected,
    Selected,
}

impl Selected {
    pub fn is_selected(self) -> bool {
        self == Selected::Selected
    }

    pub fn toggled(self) -> Self {
        match self {
            Selected::Selected => Selected::Unselected,
            Selected::Unselected => Selected::Selected,
        }
    }
}

impl From<bool> for Selected {
    fn from(selected: bool) -> Self {
        if selected {
            Selected::Selected
        } else {
            Selected::Unselected
        }
    }
}

impl From<Selected> for u8 {
    fn from(state: Selected) -> u8 {
        match state {
            Selected::Unselected => 0,
            Selected::Selected => 1,
        }
    }
}

impl TryFrom<u8> for Selected {
    type Error = StateError;

    fn try_from(value: u8) -> Result<Self, StateError> {
        match value {
            0 => Ok(Selected::Unselected),
            1 => Ok(Selected::Selected),
            value => Err(StateError::OutOfRange {
                flag: "selected",
                allowed: "0 or 1",
                value,
            }),
        }
    }
}

/// Check state of a node's checkbox or radio glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Checked {
    #[default]
    Unchecked,
    Checked,
    /// Some but not all descendants are checked. Only the owner sets this.
    Indeterminate,
}

impl Checked {
    /// True for both `Checked` and `Indeterminate`.
    pub fn is_set(self) -> bool {
        self != Checked::Unchecked
    }

    /// Next state for a click: only a full check is cleared, everything
    /// else (including `Indeterminate`) becomes `Checked`.
    pub fn toggled(self) -> Self {
        match self {
            Checked::Checked => Checked::Unchecked,
            Checked::Unchecked | Checked::Indeterminate => Checked::Checked,
        }
    }
}

impl From<Checked> for u8 {
    fn from(state: Checked) -> u8 {
        match state {
            Checked::Unchecked => 0,
            Checked::Checked => 1,
            Checked::Indeterminate => 2,
        }
    }
}

impl TryFrom<u8> for Checked {
    type Error = StateError;

    fn try_from(value: u8) -> Result<Self, StateError> {
        match value {
            0 => Ok(Checked::Unchecked),
            1 => Ok(Checked::Checked),
            2 => Ok(Checked::Indeterminate),
            value => Err(StateError::OutOfRange {
                flag: "checked",
                allowed: "0, 1 or 2",
                value,
            }),
        }
    }
}

macro_rules! display_as_digit {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", u8::from(*self))
                }
            }
        )*
    };
}

display_as_digit!(Expanded, Selected, Checked);
