//! Kotlin code generator for stylegen.
//!
//! Spells the declarations of a style family as Kotlin targeting Jetpack
//! Compose and the SDDS UI kit.

mod generator;
mod imports;
mod kotlin_file;
mod naming;
mod renderer;
mod type_mapper;

pub mod ast;

pub use generator::KotlinGenerator;
pub use imports::ImportCollector;
pub use kotlin_file::KotlinFile;
pub use naming::KOTLIN_NAMING;
pub use renderer::{GENERATED_HEADER, KotlinRenderer};
pub use stylegen_codegen::language::LanguageCodegen;
pub use type_mapper::KotlinTypeMapper;
