//! Interpreter for generated builder semantics.
//!
//! The declarations produced by the generator describe builders only as
//! data. This module runs them: a [`PartialRecord`] holds one optional slot
//! per property and resolves unset slots through the category defaults,
//! a [`StyleBuilder`] adds the colors/dimensions delegation, and a
//! [`StyleModel`] exposes the lazily computed default instance.

mod default_instance;
mod record;
mod style;

pub use default_instance::{DefaultInstance, StyleScope};
pub use record::{PartialRecord, Record};
pub use style::{ResolvedStyle, StyleBuilder, StyleModel};
