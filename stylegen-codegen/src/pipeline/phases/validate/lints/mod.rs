//! Built-in lints for schema validation.

mod ambiguous_category;
mod component_name;
mod duplicate_property;
mod empty_group;
mod property_naming;
mod reserved_member;

pub use ambiguous_category::AmbiguousCategoryLint;
pub use component_name::ComponentNameLint;
pub use duplicate_property::DuplicatePropertyLint;
pub use empty_group::EmptyGroupLint;
pub use property_naming::PropertyNamingLint;
pub use reserved_member::ReservedMemberLint;
use stylegen_core::Category;

/// Location of a property in the schema, e.g. `color_props.background`.
fn property_location(category: Category, name: &str) -> String {
    format!("{}_props.{}", category, name)
}
