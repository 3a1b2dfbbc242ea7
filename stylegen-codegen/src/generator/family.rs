//! Style family assembler.
//!
//! Builds the Colors and Dimensions triads from their property lists and the
//! Style triad from the remaining flat properties plus two members that
//! delegate to the other triads.

use stylegen_core::ComponentSchema;

use super::{
    artifacts::{StyleArtifactSet, Triad, TriadKind},
    builder::{BuilderPattern, Delegate, Member, PropertyGroup},
};
use crate::{
    builder::{AccessorSpec, Body, CompanionSpec, FunSpec, InterfaceSpec, ParamSpec, PropertySpec, TypeRef},
    naming::{COLORS_MEMBER, DIMENSIONS_MEMBER, FACTORY_FN, NESTED_BUILDER, StyleNames},
};

const STYLE_DOC: &str = "Component style";
const COLORS_DOC: &str = "Component colors";
const DIMENSIONS_DOC: &str = "Component dimensions and paddings";

/// Assemble the full artifact set for a schema.
///
/// Pure: the same schema always yields an equal artifact set.
pub fn assemble(schema: &ComponentSchema) -> StyleArtifactSet {
    let names = StyleNames::new(&schema.name);

    let colors = triad(
        TriadKind::Colors,
        PropertyGroup {
            result: names.colors.clone(),
            builder: names.colors_builder.clone(),
            default_impl: names.default_colors.clone(),
            builder_doc: format!("Builder for [{}]", names.colors),
            members: schema.color_props().into_iter().map(Member::Flat).collect(),
        },
        COLORS_DOC,
        false,
    );

    let dimensions = triad(
        TriadKind::Dimensions,
        PropertyGroup {
            result: names.dimensions.clone(),
            builder: names.dimensions_builder.clone(),
            default_impl: names.default_dimensions.clone(),
            builder_doc: format!("Builder for [{}]", names.dimensions),
            members: schema
                .dimension_props()
                .into_iter()
                .map(Member::Flat)
                .collect(),
        },
        DIMENSIONS_DOC,
        false,
    );

    let mut style_members: Vec<Member> = schema.style_props().into_iter().map(Member::Flat).collect();
    style_members.push(Member::Delegate(Delegate {
        member: COLORS_MEMBER.to_string(),
        contract: names.colors.clone(),
        builder: names.colors_builder.clone(),
        doc: COLORS_DOC.to_string(),
    }));
    style_members.push(Member::Delegate(Delegate {
        member: DIMENSIONS_MEMBER.to_string(),
        contract: names.dimensions.clone(),
        builder: names.dimensions_builder.clone(),
        doc: DIMENSIONS_DOC.to_string(),
    }));

    let style = triad(
        TriadKind::Style,
        PropertyGroup {
            result: names.style.clone(),
            builder: names.style_builder.clone(),
            default_impl: names.default_style.clone(),
            builder_doc: format!("{} builder", STYLE_DOC),
            members: style_members,
        },
        STYLE_DOC,
        true,
    );

    let accessor = AccessorSpec {
        name: names.accessor.clone(),
        doc: Some(format!(
            "Provides the current [{}], computed once from an unconfigured builder by default",
            names.style
        )),
        style: names.style.clone(),
    };

    StyleArtifactSet {
        names,
        accessor,
        style,
        colors,
        dimensions,
    }
}

fn triad(kind: TriadKind, group: PropertyGroup, doc: &str, takes_receiver: bool) -> Triad {
    let pattern = BuilderPattern::new(&group);

    let mut factory = FunSpec::new(FACTORY_FN, TypeRef::named(&group.builder))
        .doc(format!("Returns an instance of [{}]", group.builder))
        .body(Body::Instantiate {
            path: vec![group.default_impl.clone(), NESTED_BUILDER.to_string()],
        });
    if takes_receiver {
        factory.params.push(ParamSpec::new("receiver", TypeRef::Any).nullable_default());
    }

    let mut contract = InterfaceSpec::new(&group.result).doc(doc).immutable();
    if kind == TriadKind::Style {
        contract = contract.extends(TypeRef::StyleBase);
    }
    let contract = group
        .members
        .iter()
        .fold(contract, |iface, member| {
            iface.property(PropertySpec::new(member.name(), member.ty()).doc(member.doc()))
        })
        .companion(CompanionSpec {
            functions: vec![factory],
        });

    Triad {
        kind,
        builder: pattern.contract(),
        default_impl: pattern.default_implementation(),
        contract,
    }
}
