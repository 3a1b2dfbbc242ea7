//! What a target language plugs into the orchestrator.

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::LanguageCodegen;
