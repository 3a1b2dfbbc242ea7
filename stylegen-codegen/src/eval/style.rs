//! The style builder: flat properties plus the colors and dimensions
//! sub-builders it delegates to.

use eyre::{Result, eyre};
use stylegen_core::Value;

use super::{
    default_instance::{DefaultInstance, StyleScope},
    record::{PartialRecord, Record},
};
use crate::{
    generator::{StyleArtifactSet, Triad},
    naming::{COLORS_MEMBER, DIMENSIONS_MEMBER},
};

/// A built style.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub properties: Record,
    pub colors: Record,
    pub dimensions: Record,
}

/// Interpreter for a generated style builder.
#[derive(Debug, Clone)]
pub struct StyleBuilder {
    style: PartialRecord,
    colors: PartialRecord,
    dimensions: PartialRecord,
}

impl StyleBuilder {
    /// Interpret the builders of an artifact set.
    ///
    /// # Errors
    ///
    /// Fails if the style's `build()` does not build both the colors and
    /// the dimensions sub-builder.
    pub fn new(artifacts: &StyleArtifactSet) -> Result<Self> {
        let style = PartialRecord::from_triad(&artifacts.style)?;
        let colors = delegate(&style, COLORS_MEMBER, &artifacts.colors)?;
        let dimensions = delegate(&style, DIMENSIONS_MEMBER, &artifacts.dimensions)?;
        Ok(Self {
            style,
            colors,
            dimensions,
        })
    }

    /// Set a flat style property.
    pub fn set(&mut self, name: &str, value: Value) -> Result<&mut Self> {
        self.style.set(name, value)?;
        Ok(self)
    }

    /// Run `configure` once against the colors sub-builder.
    pub fn colors<F>(&mut self, configure: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut PartialRecord) -> Result<()>,
    {
        configure(&mut self.colors)?;
        Ok(self)
    }

    /// Run `configure` once against the dimensions sub-builder.
    pub fn dimensions<F>(&mut self, configure: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut PartialRecord) -> Result<()>,
    {
        configure(&mut self.dimensions)?;
        Ok(self)
    }

    pub fn build(&self) -> ResolvedStyle {
        ResolvedStyle {
            properties: self.style.resolve(),
            colors: self.colors.resolve(),
            dimensions: self.dimensions.resolve(),
        }
    }
}

fn delegate(style: &PartialRecord, member: &str, triad: &Triad) -> Result<PartialRecord> {
    let found = style
        .delegates()
        .iter()
        .find(|d| d.property == member)
        .ok_or_else(|| eyre!("{} does not build '{}'", style.type_name(), member))?;
    if found.contract != triad.contract.name {
        return Err(eyre!(
            "{}.{} is built as {}, expected {}",
            style.type_name(),
            member,
            found.contract,
            triad.contract.name
        ));
    }
    PartialRecord::from_triad(triad)
}

/// A style family ready to be instantiated: fresh builders on demand and a
/// lazily computed default.
#[derive(Debug)]
pub struct StyleModel {
    prototype: StyleBuilder,
    default: DefaultInstance<ResolvedStyle>,
}

impl StyleModel {
    pub fn new(artifacts: &StyleArtifactSet) -> Result<Self> {
        Ok(Self {
            prototype: StyleBuilder::new(artifacts)?,
            default: DefaultInstance::new(),
        })
    }

    /// A builder with nothing set.
    pub fn builder(&self) -> StyleBuilder {
        self.prototype.clone()
    }

    /// The style built from an unconfigured builder, computed once.
    pub fn default_style(&self) -> &ResolvedStyle {
        self.default.get_or_compute(|| self.builder().build())
    }

    /// A scope whose current style starts as the default.
    pub fn scope(&self) -> StyleScope<'_, ResolvedStyle> {
        StyleScope::new(self.default_style())
    }
}
