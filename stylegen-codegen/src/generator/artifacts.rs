use serde::Serialize;

use crate::{
    builder::{AccessorSpec, ClassSpec, InterfaceSpec},
    naming::StyleNames,
};

/// Which of the three families a triad belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriadKind {
    Style,
    Colors,
    Dimensions,
}

/// A result interface, its builder contract, and its default implementation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Triad {
    pub kind: TriadKind,
    pub contract: InterfaceSpec,
    pub builder: InterfaceSpec,
    pub default_impl: ClassSpec,
}

/// One generated declaration.
#[derive(Debug, Clone, Copy)]
pub enum Declaration<'a> {
    Interface(&'a InterfaceSpec),
    Class(&'a ClassSpec),
}

impl Declaration<'_> {
    pub fn name(&self) -> &str {
        match self {
            Self::Interface(i) => &i.name,
            Self::Class(c) => &c.name,
        }
    }
}

/// Everything generated for one component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleArtifactSet {
    pub names: StyleNames,
    pub accessor: AccessorSpec,
    pub style: Triad,
    pub colors: Triad,
    pub dimensions: Triad,
}

impl StyleArtifactSet {
    pub fn triads(&self) -> [&Triad; 3] {
        [&self.style, &self.colors, &self.dimensions]
    }

    /// The nine declarations in emission order.
    pub fn declarations(&self) -> Vec<Declaration<'_>> {
        self.triads()
            .into_iter()
            .flat_map(|t| {
                [
                    Declaration::Interface(&t.contract),
                    Declaration::Interface(&t.builder),
                    Declaration::Class(&t.default_impl),
                ]
            })
            .collect()
    }
}
