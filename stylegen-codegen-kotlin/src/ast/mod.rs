//! Kotlin AST nodes.

mod class;
mod fun;
mod interface;
mod local;
mod property;

pub use class::{Class, ClassFlavor};
pub use fun::{Fun, FunBody, Param};
pub use interface::Interface;
pub use local::CompositionLocal;
pub use property::Property;
