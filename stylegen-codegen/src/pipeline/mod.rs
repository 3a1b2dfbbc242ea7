//! From a scanned schema to an assembled artifact set.
//!
//! A phase that records an error diagnostic stops the [`Pipeline`]; the
//! caller gets the context back with its diagnostics and no artifacts.
//!
//! ```
//! use stylegen_codegen::pipeline::Pipeline;
//! use stylegen_core::{Category, ComponentSchema};
//!
//! let schema = ComponentSchema::new("Button").with(Category::Shape, ["shape"]);
//! let ctx = Pipeline::new().run(schema).unwrap();
//!
//! assert!(!ctx.has_errors());
//! assert!(ctx.artifacts.is_some());
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
