pub mod classes;
pub mod element;
pub mod event;
pub mod markup;

pub use classes::ClassNames;
pub use element::{find_element, Content, Element, Tag};
pub use event::{Event, EventKind, MouseButton};
pub use markup::to_markup;
