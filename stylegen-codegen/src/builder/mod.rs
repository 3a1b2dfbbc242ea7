//! Code generation building blocks.
//!
//! AST nodes of a target language implement [`Renderable`], lowering to
//! [`CodeFragment`]s that a [`CodeBuilder`] writes out with indentation.
//!
//! The declaration specs ([`InterfaceSpec`], [`ClassSpec`], [`FunSpec`],
//! [`AccessorSpec`]) describe what the generated unit contains without
//! committing to a syntax; a [`TypeMapper`] supplies the language's names
//! for [`TypeRef`]s and default values.

mod code_builder;
mod decl;
mod function;
mod indent;
mod renderable;
mod types;

pub use code_builder::CodeBuilder;
pub use decl::{
    AccessorSpec, ClassKind, ClassSpec, CompanionSpec, Initializer, InterfaceSpec, PropertySpec,
};
pub use function::{Body, ConstructArg, Conversion, FunSpec, ParamSpec};
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use types::{TypeMapper, TypeRef, Visibility};
