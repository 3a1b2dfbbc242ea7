//! Style family generation.
//!
//! - [`BuilderPattern`] - builder contract and default implementation for a property group
//! - [`assemble`] - the Style, Colors and Dimensions triads for a schema

mod artifacts;
mod builder;
mod family;

pub use artifacts::{Declaration, StyleArtifactSet, Triad, TriadKind};
pub use builder::{BuilderPattern, CONFIGURE_PARAM, Delegate, Member, PropertyGroup};
pub use family::assemble;
