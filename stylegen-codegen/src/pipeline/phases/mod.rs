//! The two built-in phases: [`ValidatePhase`] then [`AssemblePhase`].

mod assemble;
mod validate;

pub use assemble::AssemblePhase;
pub use validate::{
    AmbiguousCategoryLint, ComponentNameLint, DuplicatePropertyLint, EmptyGroupLint, Lint,
    PropertyNamingLint, ReservedMemberLint, ValidatePhase,
};
