//! Records the compilation context after every phase, for `--visualize`.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use eyre::{Result, eyre};
use serde::Serialize;
use stylegen_core::ComponentSchema;

use super::{CompilationContext, Diagnostic, Plugin};
use crate::generator::StyleArtifactSet;

/// The context as it stood when `phase` finished.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,
    pub schema: ComponentSchema,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<StyleArtifactSet>,
    pub diagnostics: Vec<Diagnostic>,
}

impl PhaseSnapshot {
    fn capture(phase: &str, ctx: &CompilationContext) -> Self {
        Self {
            phase: phase.to_string(),
            schema: ctx.schema.clone(),
            artifacts: ctx.artifacts.clone(),
            diagnostics: ctx.diagnostics.clone(),
        }
    }

    /// Pretty JSON at `<dir>/<index>-<phase>.json`.
    fn write(&self, dir: &Path, index: usize) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}-{}.json", index, self.phase));
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }
}

/// Keeps a [`PhaseSnapshot`] per finished phase and, when given a
/// directory, writes each one out as soon as it is taken.
#[derive(Debug, Default)]
pub struct SnapshotPlugin {
    dir: Option<PathBuf>,
    taken: Mutex<Vec<PhaseSnapshot>>,
}

impl SnapshotPlugin {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn writing_to(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            ..Self::default()
        }
    }

    pub fn snapshots(&self) -> Result<Vec<PhaseSnapshot>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<PhaseSnapshot>>> {
        self.taken.lock().map_err(|_| eyre!("snapshot lock poisoned"))
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn after(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = PhaseSnapshot::capture(phase, ctx);
        let mut taken = self.lock()?;
        if let Some(dir) = &self.dir {
            snapshot.write(dir, taken.len())?;
        }
        taken.push(snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use stylegen_core::Category;

    use super::*;
    use crate::pipeline::Pipeline;

    #[test]
    fn test_starts_empty() {
        assert!(SnapshotPlugin::in_memory().snapshots().unwrap().is_empty());
    }

    #[test]
    fn test_captures_each_phase() {
        let plugin = SnapshotPlugin::in_memory();
        let mut ctx =
            CompilationContext::new(ComponentSchema::new("Button").with(Category::Shape, ["shape"]));

        plugin.after("validate", &mut ctx).unwrap();
        ctx.artifacts = Some(crate::generator::assemble(&ctx.schema));
        plugin.after("assemble", &mut ctx).unwrap();

        let snapshots = plugin.snapshots().unwrap();
        let phases: Vec<_> = snapshots.iter().map(|s| s.phase.as_str()).collect();
        assert_eq!(phases, ["validate", "assemble"]);
        assert!(snapshots[0].artifacts.is_none());
        assert!(snapshots[1].artifacts.is_some());
    }

    #[test]
    fn test_writes_numbered_json_files() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("debug");
        let schema = ComponentSchema::new("Button").with(Category::Color, ["background"]);

        Pipeline::new()
            .plugin(SnapshotPlugin::writing_to(&dir))
            .run(schema)
            .unwrap();

        let validate = fs::read_to_string(dir.join("0-validate.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&validate).unwrap();
        assert_eq!(value["phase"], "validate");
        assert_eq!(value["schema"]["name"], "Button");
        assert!(value.get("artifacts").is_none());
        assert!(dir.join("1-assemble.json").exists());
    }
}
