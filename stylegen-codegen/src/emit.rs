//! Emission orchestrator: scan outcome in, explicit [`Outcome`] out.

use std::path::PathBuf;

use eyre::Result;
use stylegen_core::{ScanOutcome, Sink, SourceUnit, Target, WriteResult};

use crate::{
    generator::StyleArtifactSet,
    language::LanguageCodegen,
    pipeline::{CompilationContext, Diagnostic, Pipeline},
};

/// Why nothing was generated because no schema was available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanMiss {
    NoQualifyingDeclaration,
    UnderivableName { declaration: String, suffix: String },
}

impl std::fmt::Display for ScanMiss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoQualifyingDeclaration => f.write_str("no properties holder declaration found"),
            Self::UnderivableName {
                declaration,
                suffix,
            } => write!(
                f,
                "cannot derive a component name from '{}': it does not end with '{}'",
                declaration, suffix
            ),
        }
    }
}

/// A unit handed to the sink.
#[derive(Debug, Clone)]
pub struct Emission {
    pub unit: SourceUnit,
    pub path: PathBuf,
    pub write: WriteResult,
    pub artifacts: StyleArtifactSet,
    pub diagnostics: Vec<Diagnostic>,
}

/// What happened to one generation request.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The scanner found nothing to generate from. The sink was not called.
    NoDeclaration(ScanMiss),
    /// The schema failed validation. The sink was not called.
    Rejected { diagnostics: Vec<Diagnostic> },
    /// The unit was rendered and accepted by the sink.
    Emitted(Box<Emission>),
}

impl Outcome {
    pub fn is_emitted(&self) -> bool {
        matches!(self, Self::Emitted(_))
    }

    /// Diagnostics gathered on the way, if the schema got that far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::NoDeclaration(_) => &[],
            Self::Rejected { diagnostics } => diagnostics,
            Self::Emitted(emission) => &emission.diagnostics,
        }
    }
}

/// Runs the pipeline on a scan outcome, renders the unit, and hands it to
/// a sink.
///
/// Emission is all-or-nothing: the sink sees exactly one complete unit or
/// nothing at all.
pub struct Orchestrator<'a> {
    language: &'a dyn LanguageCodegen,
    pipeline: Pipeline,
}

impl<'a> Orchestrator<'a> {
    pub fn new(language: &'a dyn LanguageCodegen) -> Self {
        Self {
            language,
            pipeline: Pipeline::new(),
        }
    }

    /// Use a customized pipeline (extra lints, plugins, phases).
    pub fn pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Validate and assemble without rendering or emitting.
    pub fn compile(&self, scan: ScanOutcome) -> Result<std::result::Result<CompilationContext, ScanMiss>> {
        let (schema, notes) = match scan {
            ScanOutcome::Found { schema, notes } => (schema, notes),
            ScanOutcome::NoQualifyingDeclaration => {
                return Ok(Err(ScanMiss::NoQualifyingDeclaration));
            }
            ScanOutcome::UnderivableName {
                declaration,
                suffix,
            } => {
                return Ok(Err(ScanMiss::UnderivableName {
                    declaration,
                    suffix,
                }));
            }
        };

        let ctx = CompilationContext::new(schema).with_diagnostics(notes.into_iter().map(|note| {
            let diagnostic = Diagnostic::warning("scan", note.message);
            match note.location {
                Some(location) => diagnostic.at(location),
                None => diagnostic,
            }
        }));
        Ok(Ok(self.pipeline.run_context(ctx)?))
    }

    /// Generate one unit and hand it to `sink`.
    ///
    /// # Errors
    ///
    /// Fails if a pipeline phase or the sink fails. Scanner misses and
    /// rejected schemas are reported through [`Outcome`] instead.
    pub fn run(&self, scan: ScanOutcome, target: &Target, sink: &mut dyn Sink) -> Result<Outcome> {
        let mut ctx = match self.compile(scan)? {
            Ok(ctx) => ctx,
            Err(miss) => return Ok(Outcome::NoDeclaration(miss)),
        };

        let artifacts = match ctx.artifacts.take() {
            Some(artifacts) if !ctx.has_errors() => artifacts,
            _ => {
                return Ok(Outcome::Rejected {
                    diagnostics: ctx.diagnostics,
                });
            }
        };

        let unit = self.language.unit(&artifacts, &target.package);
        let (path, write) = sink.accept(&unit, target)?;

        Ok(Outcome::Emitted(Box::new(Emission {
            unit,
            path,
            write,
            artifacts,
            diagnostics: ctx.diagnostics,
        })))
    }
}
