//! Conditional class-name composition.
//!
//! ```
//! use webdom::ClassNames;
//!
//! let classes = ClassNames::new()
//!     .add("node")
//!     .add_if("node-expanded", true)
//!     .add_if("node-selected", false);
//! assert_eq!(classes.to_string(), "node node-expanded");
//! ```

use std::fmt;

/// Ordered set of class names assembled from conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames {
    names: Vec<String>,
}

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class unconditionally. Empty names and duplicates are skipped.
    pub fn add(self, name: impl Into<String>) -> Self {
        self.add_if(name, true)
    }

    pub fn add_if(mut self, name: impl Into<String>, condition: bool) -> Self {
        let name = name.into();
        if condition && !name.is_empty() && !self.names.contains(&name) {
            self.names.push(name);
        }
        self
    }

    pub fn add_opt(self, name: Option<&str>) -> Self {
        match name {
            Some(name) => self.add(name),
            None => self,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl IntoIterator for ClassNames {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

impl fmt::Display for ClassNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(" "))
    }
}
