use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// A rendered source file, not yet written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// File stem, e.g. `ButtonStyle`.
    pub name: String,
    /// Package the unit declares, e.g. `com.sdds.compose.uikit`.
    pub package: String,
    pub extension: &'static str,
    pub content: String,
}

impl SourceUnit {
    pub fn new(
        name: impl Into<String>,
        package: impl Into<String>,
        extension: &'static str,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            extension,
            content: content.into(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }

    /// Path relative to a source root: one directory per package segment.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self
            .package
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect();
        path.push(self.file_name());
        path
    }
}

/// Where a unit should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub package: String,
    /// Source root the package directories are created under.
    pub output_dir: PathBuf,
}

impl Target {
    pub fn new(package: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            package: package.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn path_of(&self, unit: &SourceUnit) -> PathBuf {
        self.output_dir.join(unit.relative_path())
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had identical content
    Unchanged,
}

/// Destination for rendered units.
pub trait Sink {
    /// Accept a unit. Returns the path it was placed at and what happened.
    fn accept(&mut self, unit: &SourceUnit, target: &Target) -> Result<(PathBuf, WriteResult)>;
}

/// Writes units below the target's output directory.
///
/// Every unit is a full replacement of the previous file. The content is
/// written to a temporary sibling first and renamed into place, so a failed
/// write never leaves a truncated file behind.
#[derive(Debug, Default)]
pub struct DirectorySink;

impl Sink for DirectorySink {
    fn accept(&mut self, unit: &SourceUnit, target: &Target) -> Result<(PathBuf, WriteResult)> {
        let path = target.path_of(unit);
        if std::fs::read_to_string(&path).is_ok_and(|existing| existing == unit.content) {
            return Ok((path, WriteResult::Unchanged));
        }
        write_file(&path, &unit.content)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        Ok((path, WriteResult::Written))
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    write_via_temp(path, |tmp| std::fs::write(tmp, content))
}

/// Runs `write` against a `.tmp` sibling of `path`, then renames it into
/// place. The sibling is removed if either step fails.
fn write_via_temp(path: &Path, write: impl FnOnce(&Path) -> std::io::Result<()>) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    if let Err(e) = write(&tmp).and_then(|()| std::fs::rename(&tmp, path)) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

/// Keeps units in memory. Used for previews and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Vec<(PathBuf, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[(PathBuf, String)] {
        &self.files
    }

    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, content)| content.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Sink for MemorySink {
    fn accept(&mut self, unit: &SourceUnit, target: &Target) -> Result<(PathBuf, WriteResult)> {
        let path = target.path_of(unit);
        match self.files.iter_mut().find(|(p, _)| *p == path) {
            Some((_, content)) if *content == unit.content => {
                return Ok((path, WriteResult::Unchanged));
            }
            Some((_, content)) => *content = unit.content.clone(),
            None => self.files.push((path.clone(), unit.content.clone())),
        }
        Ok((path, WriteResult::Written))
    }
}
