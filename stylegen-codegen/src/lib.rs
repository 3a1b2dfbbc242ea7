//! Language-agnostic style family generation.
//!
//! This crate turns a [`ComponentSchema`](stylegen_core::ComponentSchema)
//! into the declarations of a style family and hands the rendered unit to a
//! sink. Language crates (e.g., `stylegen-codegen-kotlin`) only decide how
//! those declarations are spelled.
//!
//! # Module Organization
//!
//! - [`builder`] - Code building blocks and the declaration model
//! - [`naming`] - Artifact names derived from a component base name
//! - [`generator`] - Builder pattern generator and style family assembler
//! - [`pipeline`] - Validation and assembly phases with diagnostics
//! - [`eval`] - Interpreter for the generated builder semantics
//! - [`emit`] - Orchestration from scan outcome to sink
//! - [`language`] - Language-specific abstractions

pub mod builder;
pub mod emit;
pub mod eval;
pub mod generator;
pub mod language;
pub mod naming;
pub mod pipeline;
