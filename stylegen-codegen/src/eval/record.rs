//! Partial records: builders modeled as optional slots with an explicit
//! resolve step.

use std::collections::HashMap;

use eyre::{Result, bail, eyre};
use indexmap::IndexMap;
use stylegen_core::{Color, Value};

use crate::{
    builder::{Body, ConstructArg, Conversion, Initializer},
    generator::Triad,
    naming::{BUILD_FN, NESTED_BUILDER},
};

/// A fully resolved record: every property has a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    type_name: String,
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Debug, Clone)]
struct Slot {
    default: Value,
    value: Option<Value>,
}

/// A delegated member of a record: built by another triad's builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DelegateRef {
    pub property: String,
    /// Result type of the delegate, e.g. `ButtonColors`.
    pub contract: String,
}

/// The state of a generated builder: one optional slot per flat property.
///
/// Built by interpreting the declarations of a triad, so it behaves exactly
/// like the emitted builder: the same setters, the same plain-color
/// overloads, and the same fallbacks in `resolve`.
#[derive(Debug, Clone)]
pub struct PartialRecord {
    type_name: String,
    slots: IndexMap<String, Slot>,
    /// Setter name -> slot it assigns.
    setters: HashMap<String, String>,
    /// Plain-color overload name -> setter it converts into.
    color_overloads: HashMap<String, String>,
    delegates: Vec<DelegateRef>,
}

impl PartialRecord {
    /// Interpret the builder of a triad.
    ///
    /// # Errors
    ///
    /// Fails if the default implementation has no nested builder or its
    /// `build()` does not construct the record.
    pub fn from_triad(triad: &Triad) -> Result<Self> {
        let builder = triad
            .default_impl
            .find_nested(NESTED_BUILDER)
            .ok_or_else(|| eyre!("{} has no nested builder", triad.default_impl.name))?;
        let build = builder
            .find_function(BUILD_FN)
            .ok_or_else(|| eyre!("{} builder has no {}()", triad.contract.name, BUILD_FN))?;

        let mut slots = IndexMap::new();
        let mut delegates = Vec::new();
        match &build.body {
            Body::Singleton { .. } => {}
            Body::Construct { args, .. } => {
                for arg in args {
                    match arg {
                        ConstructArg::Resolve { field, default, .. } => {
                            slots.insert(
                                field.clone(),
                                Slot {
                                    default: default.clone(),
                                    value: None,
                                },
                            );
                        }
                        ConstructArg::BuildDelegate {
                            property,
                            builder_field,
                        } => {
                            let contract = builder
                                .properties
                                .iter()
                                .find(|p| &p.name == builder_field)
                                .and_then(|p| match &p.initializer {
                                    Some(Initializer::NewBuilder { contract }) => Some(contract.clone()),
                                    _ => None,
                                })
                                .ok_or_else(|| {
                                    eyre!("no builder field '{}' for '{}'", builder_field, property)
                                })?;
                            delegates.push(DelegateRef {
                                property: property.clone(),
                                contract,
                            });
                        }
                    }
                }
            }
            other => bail!(
                "{} builder {}() has an unexpected body: {:?}",
                triad.contract.name,
                BUILD_FN,
                other
            ),
        }

        let setters = builder
            .functions
            .iter()
            .filter_map(|f| match &f.body {
                Body::AssignField { field, .. } => Some((f.name.clone(), field.clone())),
                _ => None,
            })
            .collect();

        let color_overloads = triad
            .builder
            .functions
            .iter()
            .filter_map(|f| match &f.body {
                Body::Convert {
                    target,
                    conversion: Conversion::Interactive,
                    ..
                } => Some((f.name.clone(), target.clone())),
                _ => None,
            })
            .collect();

        Ok(Self {
            type_name: triad.contract.name.clone(),
            slots,
            setters,
            color_overloads,
            delegates,
        })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Set a property. Later calls overwrite earlier ones.
    ///
    /// # Errors
    ///
    /// Fails if there is no setter of that name or the value has the wrong type.
    pub fn set(&mut self, name: &str, value: Value) -> Result<&mut Self> {
        let field = self
            .setters
            .get(name)
            .ok_or_else(|| eyre!("{} has no property '{}'", self.type_name, name))?;
        let slot = self
            .slots
            .get_mut(field)
            .ok_or_else(|| eyre!("{} has no slot for '{}'", self.type_name, name))?;
        let expected = slot.default.value_type();
        if value.value_type() != expected {
            bail!(
                "{}.{} expects a {}, got a {}",
                self.type_name,
                name,
                expected,
                value.value_type()
            );
        }
        slot.value = Some(value);
        Ok(self)
    }

    /// Set a color property from a plain color through its convenience
    /// overload.
    pub fn set_color(&mut self, name: &str, color: Color) -> Result<&mut Self> {
        let target = self
            .color_overloads
            .get(name)
            .cloned()
            .ok_or_else(|| eyre!("{} has no plain color setter '{}'", self.type_name, name))?;
        self.set(&target, Value::Color(color.as_interactive()))
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.slots.get(name).is_some_and(|s| s.value.is_some())
    }

    /// Flat property names in declaration order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    pub(crate) fn delegates(&self) -> &[DelegateRef] {
        &self.delegates
    }

    /// Resolve every slot: the set value, or the category default.
    pub fn resolve(&self) -> Record {
        Record {
            type_name: self.type_name.clone(),
            fields: self
                .slots
                .iter()
                .map(|(name, slot)| {
                    let value = slot.value.clone().unwrap_or_else(|| slot.default.clone());
                    (name.clone(), value)
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use stylegen_core::{Category, ComponentSchema, Shape};

    use super::*;
    use crate::generator::assemble;

    fn colors() -> PartialRecord {
        let set = assemble(
            &ComponentSchema::new("Button").with(Category::Color, ["background", "content"]),
        );
        PartialRecord::from_triad(&set.colors).unwrap()
    }

    #[test]
    fn test_unset_resolves_to_defaults() {
        let record = colors().resolve();
        assert_eq!(record.type_name(), "ButtonColors");
        assert_eq!(record.len(), 2);
        assert_eq!(
            record.get("background"),
            Some(&Value::Color(Color::BLACK.as_interactive()))
        );
    }

    #[test]
    fn test_set_chains_and_last_wins() {
        let mut builder = colors();
        builder
            .set("background", Value::Color(Color::WHITE.as_interactive()))
            .unwrap()
            .set("background", Value::Color(Color::TRANSPARENT.as_interactive()))
            .unwrap();

        assert!(builder.is_set("background"));
        assert!(!builder.is_set("content"));
        assert_eq!(
            builder.resolve().get("background"),
            Some(&Value::Color(Color::TRANSPARENT.as_interactive()))
        );
    }

    #[test]
    fn test_set_returns_same_builder() {
        let mut builder = colors();
        let before: *const PartialRecord = &builder;
        let after: *const PartialRecord = builder
            .set("content", Value::Color(Color::WHITE.into()))
            .unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_plain_color_overload() {
        let mut builder = colors();
        builder.set_color("content", Color(0xFF33_6699)).unwrap();

        assert_eq!(
            builder.resolve().get("content"),
            Some(&Value::Color(Color(0xFF33_6699).as_interactive()))
        );
    }

    #[test]
    fn test_rejects_unknown_and_mistyped() {
        let mut builder = colors();
        assert!(builder.set("border", Value::Dp(1.0)).is_err());
        assert!(builder.set("background", Value::Dp(1.0)).is_err());
        assert!(!builder.is_set("background"));
    }

    #[test]
    fn test_shape_has_no_color_overload() {
        let set = assemble(&ComponentSchema::new("Button").with(Category::Shape, ["shape"]));
        let mut style = PartialRecord::from_triad(&set.style).unwrap();

        assert!(style.set_color("shape", Color::BLACK).is_err());
        style.set("shape", Value::Shape(Shape::Circle)).unwrap();
        assert_eq!(style.resolve().get("shape"), Some(&Value::Shape(Shape::Circle)));
    }

    #[test]
    fn test_empty_group_resolves_to_empty_record() {
        let set = assemble(&ComponentSchema::new("Divider"));
        let record = PartialRecord::from_triad(&set.dimensions).unwrap().resolve();
        assert!(record.is_empty());
    }
}
