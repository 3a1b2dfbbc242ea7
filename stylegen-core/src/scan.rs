//! Contract between declaration scanners and the generator.

use serde::Serialize;

use crate::schema::ComponentSchema;

/// Non-fatal observation made while scanning, e.g. a parameter whose type
/// matched no category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanNote {
    pub message: String,
    pub location: Option<String>,
}

impl ScanNote {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Result of looking for a properties holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A holder was found and turned into a schema.
    Found {
        schema: ComponentSchema,
        notes: Vec<ScanNote>,
    },
    /// No declaration has the owner marker among its supertypes.
    NoQualifyingDeclaration,
    /// A holder was found but its name does not carry the expected suffix.
    UnderivableName { declaration: String, suffix: String },
}

/// Something that can produce a component schema.
pub trait DeclarationScanner {
    fn scan(&self) -> ScanOutcome;
}
