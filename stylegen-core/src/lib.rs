//! Core types for the stylegen style family generator.
//!
//! This crate provides the property categories, the semantic value model,
//! the component schema handed over by declaration scanners, and the sinks
//! that accept rendered source units.

mod category;
mod file;
mod scan;
mod schema;
mod utils;
mod value;

// Categories
pub use category::Category;
// File sinks
pub use file::{DirectorySink, MemorySink, Sink, SourceUnit, Target, WriteResult};
// Scanner contract
pub use scan::{DeclarationScanner, ScanNote, ScanOutcome};
// Input schema
pub use schema::{ComponentProperties, ComponentSchema, PropertyDescriptor, STYLE_GROUP_ORDER};
// String utilities
pub use utils::{derive_base_name, is_identifier, pluralize};
// Values
pub use value::{Color, InteractionState, InteractiveColor, Shadow, Shape, TextStyle, Value, ValueType};
