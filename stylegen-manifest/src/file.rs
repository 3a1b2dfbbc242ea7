use std::path::{Path, PathBuf};

use stylegen_core::Target;

use crate::{Error, Manifest, Result, TomlScanner};

/// A stylegen.toml file with both raw content and parsed manifest.
pub struct StyleToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl StyleToml {
    /// Open and parse a stylegen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Output directory, resolved against the directory holding the file.
    pub fn output_dir(&self) -> PathBuf {
        let dir = &self.manifest.output.dir;
        if dir.is_absolute() {
            return dir.clone();
        }
        match self.path.parent() {
            Some(parent) => parent.join(dir),
            None => dir.clone(),
        }
    }

    /// Emission target described by the `[output]` table. `dir_override`
    /// replaces the configured directory as-is.
    pub fn target(&self, dir_override: Option<&Path>) -> Target {
        let dir = match dir_override {
            Some(dir) => dir.to_path_buf(),
            None => self.output_dir(),
        };
        Target::new(&self.manifest.output.package, dir)
    }

    /// Scanner over the declarations of this file.
    pub fn scanner(&self) -> TomlScanner<'_> {
        TomlScanner::new(&self.manifest)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_open_resolves_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stylegen.toml");
        fs::write(&path, "[output]\ndir = \"gen/kotlin\"\n").unwrap();

        let file = StyleToml::open(&path).unwrap();
        assert_eq!(file.path(), path.as_path());
        assert!(file.content().contains("gen/kotlin"));
        assert_eq!(file.output_dir(), dir.path().join("gen/kotlin"));

        let target = file.target(None);
        assert_eq!(target.package, "com.sdds.compose.uikit");
        assert_eq!(target.output_dir, dir.path().join("gen/kotlin"));

        let target = file.target(Some(Path::new("elsewhere")));
        assert_eq!(target.output_dir, PathBuf::from("elsewhere"));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = StyleToml::open(dir.path().join("stylegen.toml"))
            .err()
            .unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
