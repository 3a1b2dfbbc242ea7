//! Builder pattern generator.
//!
//! For any group of properties and a result type `T` this produces the
//! abstract builder contract for `T` and the private default implementation
//! of `T` with its nested builder.

use serde::Serialize;
use stylegen_core::{Category, PropertyDescriptor, ValueType};

use crate::{
    builder::{
        Body, ClassKind, ClassSpec, ConstructArg, Conversion, FunSpec, Initializer, InterfaceSpec,
        ParamSpec, PropertySpec, TypeRef,
    },
    naming::{BUILD_FN, NESTED_BUILDER, builder_field},
};

/// Name of the callback parameter of delegating setters.
pub const CONFIGURE_PARAM: &str = "configure";

/// A member whose value is built by another family's builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delegate {
    /// Member name on the result type, e.g. `colors`.
    pub member: String,
    /// Type of the member, e.g. `ButtonColors`.
    pub contract: String,
    /// Builder of that type, e.g. `ButtonColorsBuilder`.
    pub builder: String,
    pub doc: String,
}

/// A member of a property group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    /// A flat property resolved through its category default.
    Flat(PropertyDescriptor),
    Delegate(Delegate),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Self::Flat(p) => &p.name,
            Self::Delegate(d) => &d.member,
        }
    }

    /// Type of the member on the result type.
    pub fn ty(&self) -> TypeRef {
        match self {
            Self::Flat(p) => TypeRef::value(p.category.value_type()),
            Self::Delegate(d) => TypeRef::named(&d.contract),
        }
    }

    pub fn doc(&self) -> &str {
        match self {
            Self::Flat(p) => p.category.description(),
            Self::Delegate(d) => &d.doc,
        }
    }
}

/// A group of members sharing one result type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyGroup {
    /// Result type `T`.
    pub result: String,
    /// Builder contract of `T`.
    pub builder: String,
    /// Private default implementation of `T`.
    pub default_impl: String,
    pub builder_doc: String,
    pub members: Vec<Member>,
}

/// Generates the builder contract and default implementation of a group.
pub struct BuilderPattern<'a> {
    group: &'a PropertyGroup,
}

impl<'a> BuilderPattern<'a> {
    pub fn new(group: &'a PropertyGroup) -> Self {
        Self { group }
    }

    /// The builder interface: one setter per member, a plain-color overload
    /// per color property, and the terminal `build()`.
    pub fn contract(&self) -> InterfaceSpec {
        InterfaceSpec::new(&self.group.builder)
            .doc(&self.group.builder_doc)
            .functions(self.setters())
            .function(
                FunSpec::new(BUILD_FN, TypeRef::named(&self.group.result))
                    .doc(format!("Returns [{}]", self.group.result)),
            )
    }

    /// The private record implementing the result type, with its nested
    /// `Builder`.
    pub fn default_implementation(&self) -> ClassSpec {
        let group = self.group;
        if group.members.is_empty() {
            return ClassSpec::new(&group.default_impl, ClassKind::DataObject)
                .private()
                .implements(&group.result)
                .nested(self.nested_builder());
        }

        group
            .members
            .iter()
            .fold(
                ClassSpec::new(&group.default_impl, ClassKind::Data)
                    .private()
                    .implements(&group.result),
                |class, member| {
                    class.constructor_property(
                        PropertySpec::new(member.name(), member.ty()).overriding(),
                    )
                },
            )
            .nested(self.nested_builder())
    }

    fn setters(&self) -> Vec<FunSpec> {
        let returns = TypeRef::named(&self.group.builder);
        let mut setters = Vec::new();
        for member in &self.group.members {
            match member {
                Member::Flat(prop) => {
                    setters.push(
                        FunSpec::new(&prop.name, returns.clone())
                            .doc(format!("Sets [{}]", prop.name))
                            .param(ParamSpec::new(
                                &prop.name,
                                TypeRef::value(prop.category.value_type()),
                            )),
                    );
                    if prop.category == Category::Color {
                        setters.push(
                            FunSpec::new(&prop.name, returns.clone())
                                .doc(format!("Sets [{}] from a plain color", prop.name))
                                .param(ParamSpec::new(&prop.name, TypeRef::value(ValueType::Color)))
                                .body(Body::Convert {
                                    target: prop.name.clone(),
                                    param: prop.name.clone(),
                                    conversion: Conversion::Interactive,
                                }),
                        );
                    }
                }
                Member::Delegate(delegate) => setters.push(
                    FunSpec::new(&delegate.member, returns.clone())
                        .doc(format!("Configures [{}.{}]", self.group.result, delegate.member))
                        .param(ParamSpec::new(
                            CONFIGURE_PARAM,
                            TypeRef::configure(TypeRef::named(&delegate.builder)),
                        )),
                ),
            }
        }
        setters
    }

    fn nested_builder(&self) -> ClassSpec {
        let group = self.group;
        let mut class = ClassSpec::new(NESTED_BUILDER, ClassKind::Plain).implements(&group.builder);

        for member in &group.members {
            class = class.property(match member {
                Member::Flat(prop) => PropertySpec::new(
                    &prop.name,
                    TypeRef::optional(TypeRef::value(prop.category.value_type())),
                )
                .private()
                .mutable()
                .initializer(Initializer::Null),
                Member::Delegate(delegate) => PropertySpec::new(
                    builder_field(&delegate.member),
                    TypeRef::named(&delegate.builder),
                )
                .private()
                .initializer(Initializer::NewBuilder {
                    contract: delegate.contract.clone(),
                }),
            });
        }

        for (setter, member) in self.abstract_setters() {
            let body = match member {
                Member::Flat(prop) => Body::AssignField {
                    field: prop.name.clone(),
                    param: prop.name.clone(),
                },
                Member::Delegate(delegate) => Body::Configure {
                    builder_field: builder_field(&delegate.member),
                    callback: CONFIGURE_PARAM.to_string(),
                },
            };
            class = class.function(setter.implementation(body));
        }

        let build = FunSpec::new(BUILD_FN, TypeRef::named(&group.result));
        let body = if group.members.is_empty() {
            Body::Singleton {
                object: group.default_impl.clone(),
            }
        } else {
            Body::Construct {
                class: group.default_impl.clone(),
                args: group.members.iter().map(construct_arg).collect(),
            }
        };
        class.function(build.implementation(body))
    }

    /// Abstract setters paired with the member they set.
    fn abstract_setters(&self) -> Vec<(FunSpec, &'a Member)> {
        let setters = self.setters();
        let group: &'a PropertyGroup = self.group;
        setters
            .into_iter()
            .filter(FunSpec::is_abstract)
            .zip(group.members.iter())
            .collect()
    }
}

fn construct_arg(member: &Member) -> ConstructArg {
    match member {
        Member::Flat(prop) => ConstructArg::Resolve {
            property: prop.name.clone(),
            field: prop.name.clone(),
            category: prop.category,
            default: prop.category.default_value(),
        },
        Member::Delegate(delegate) => ConstructArg::BuildDelegate {
            property: delegate.member.clone(),
            builder_field: builder_field(&delegate.member),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors_group(names: &[&str]) -> PropertyGroup {
        PropertyGroup {
            result: "ButtonColors".into(),
            builder: "ButtonColorsBuilder".into(),
            default_impl: "DefaultButtonColors".into(),
            builder_doc: "Builder for [ButtonColors]".into(),
            members: names
                .iter()
                .map(|n| Member::Flat(PropertyDescriptor::new(*n, Category::Color)))
                .collect(),
        }
    }

    fn fun_names(contract: &InterfaceSpec) -> Vec<&str> {
        contract.functions.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_contract_has_setter_overload_and_build() {
        let group = colors_group(&["background", "content"]);
        let contract = BuilderPattern::new(&group).contract();

        assert_eq!(
            fun_names(&contract),
            vec!["background", "background", "content", "content", "build"]
        );
        let abstract_count = contract.functions.iter().filter(|f| f.is_abstract()).count();
        assert_eq!(abstract_count, 3);

        let overload = &contract.functions[1];
        assert_eq!(overload.params[0].ty, TypeRef::value(ValueType::Color));
        assert_eq!(
            overload.body,
            Body::Convert {
                target: "background".into(),
                param: "background".into(),
                conversion: Conversion::Interactive,
            }
        );
    }

    #[test]
    fn test_nested_builder_fields_start_null() {
        let group = colors_group(&["background"]);
        let class = BuilderPattern::new(&group).default_implementation();
        assert_eq!(class.kind, ClassKind::Data);
        assert_eq!(class.constructor.len(), 1);
        assert!(class.constructor[0].is_override);

        let builder = class.find_nested(NESTED_BUILDER).unwrap();
        assert_eq!(builder.supertypes, vec!["ButtonColorsBuilder".to_string()]);
        let field = &builder.properties[0];
        assert!(field.mutable);
        assert!(field.ty.is_optional());
        assert_eq!(field.initializer, Some(Initializer::Null));
    }

    #[test]
    fn test_nested_builder_implements_only_abstract_setters() {
        let group = colors_group(&["background"]);
        let class = BuilderPattern::new(&group).default_implementation();
        let builder = class.find_nested(NESTED_BUILDER).unwrap();

        let names: Vec<_> = builder.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["background", "build"]);
        assert_eq!(
            builder.functions[0].body,
            Body::AssignField {
                field: "background".into(),
                param: "background".into(),
            }
        );
        assert!(builder.functions.iter().all(|f| f.is_override));
    }

    #[test]
    fn test_build_resolves_category_default() {
        let group = colors_group(&["background"]);
        let class = BuilderPattern::new(&group).default_implementation();
        let build = class
            .find_nested(NESTED_BUILDER)
            .and_then(|b| b.find_function(BUILD_FN))
            .unwrap();

        match &build.body {
            Body::Construct { class, args } => {
                assert_eq!(class, "DefaultButtonColors");
                assert_eq!(
                    args,
                    &vec![ConstructArg::Resolve {
                        property: "background".into(),
                        field: "background".into(),
                        category: Category::Color,
                        default: Category::Color.default_value(),
                    }]
                );
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_empty_group_is_data_object() {
        let group = colors_group(&[]);
        let pattern = BuilderPattern::new(&group);

        assert_eq!(fun_names(&pattern.contract()), vec!["build"]);

        let class = pattern.default_implementation();
        assert_eq!(class.kind, ClassKind::DataObject);
        assert!(class.constructor.is_empty());
        let build = class
            .find_nested(NESTED_BUILDER)
            .and_then(|b| b.find_function(BUILD_FN))
            .unwrap();
        assert_eq!(
            build.body,
            Body::Singleton {
                object: "DefaultButtonColors".into()
            }
        );
    }

    #[test]
    fn test_delegate_member() {
        let group = PropertyGroup {
            result: "ButtonStyle".into(),
            builder: "ButtonStyleBuilder".into(),
            default_impl: "DefaultButtonStyle".into(),
            builder_doc: "Component style builder".into(),
            members: vec![Member::Delegate(Delegate {
                member: "colors".into(),
                contract: "ButtonColors".into(),
                builder: "ButtonColorsBuilder".into(),
                doc: "Component colors".into(),
            })],
        };
        let pattern = BuilderPattern::new(&group);

        let contract = pattern.contract();
        assert_eq!(
            contract.functions[0].params[0].ty,
            TypeRef::configure(TypeRef::named("ButtonColorsBuilder"))
        );

        let class = pattern.default_implementation();
        let builder = class.find_nested(NESTED_BUILDER).unwrap();
        assert_eq!(builder.properties[0].name, "colorsBuilder");
        assert!(!builder.properties[0].mutable);
        assert_eq!(
            builder.properties[0].initializer,
            Some(Initializer::NewBuilder {
                contract: "ButtonColors".into()
            })
        );
        assert_eq!(
            builder.functions[0].body,
            Body::Configure {
                builder_field: "colorsBuilder".into(),
                callback: "configure".into(),
            }
        );
    }
}
