pub mod element;
pub mod registry;

pub use element::{Capability, Element, ElementKind, Role};
pub use registry::Registry;
