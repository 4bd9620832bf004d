//! The front-end project the component is generated into: framework
//! detection from `package.json` and the on-disk component store.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::convert::ComponentStore;
use crate::emit::{self, ComponentFile, EmissionBackend, ProjectTarget};
use crate::{FigcompError, Result};

pub const PACKAGE_MANIFEST: &str = "package.json";
pub const TS_CONFIG: &str = "tsconfig.json";

/// Parsed `package.json`, or `None` if it is missing or unreadable.
pub fn read_manifest(project_dir: &Path) -> Option<serde_json::Value> {
    let path = project_dir.join(PACKAGE_MANIFEST);
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read package.json to detect framework");
            return None;
        }
    };
    match serde_json::from_str(&contents) {
        Ok(manifest) => Some(manifest),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "package.json is not valid JSON");
            None
        }
    }
}

pub fn is_typescript(project_dir: &Path) -> bool {
    project_dir.join(TS_CONFIG).is_file()
}

/// Framework and extension for the project in `project_dir`.
pub fn detect_project(project_dir: &Path) -> ProjectTarget {
    let typescript = is_typescript(project_dir);
    let target = read_manifest(project_dir)
        .map(|manifest| emit::detect(&manifest, typescript))
        .unwrap_or_else(ProjectTarget::unknown);
    debug!(?target, typescript, "detected project target");
    target
}

/// Components stored as files below `root`, laid out by the backend.
pub struct FsComponentStore {
    project_dir: PathBuf,
    root: PathBuf,
    backend: Arc<dyn EmissionBackend>,
}

impl FsComponentStore {
    /// `root` is where component files live; scaffolding commands run in `project_dir`.
    pub fn new(
        project_dir: impl Into<PathBuf>,
        root: impl Into<PathBuf>,
        backend: Arc<dyn EmissionBackend>,
    ) -> Self {
        Self {
            project_dir: project_dir.into(),
            root: root.into(),
            backend,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, name: &str, extension: &str) -> PathBuf {
        self.root.join(self.backend.relative_path(name, extension))
    }

    fn run_scaffold(&self, file: &ComponentFile) -> Result<()> {
        let Some(scaffold) = &file.scaffold else {
            return Ok(());
        };
        info!(command = %scaffold, "running scaffolding command");

        let status = Command::new(&scaffold.program)
            .args(&scaffold.args)
            .current_dir(&self.project_dir)
            .status()
            .map_err(|err| FigcompError::Scaffold {
                command: scaffold.to_string(),
                message: err.to_string(),
            })?;

        if !status.success() {
            return Err(FigcompError::Scaffold {
                command: scaffold.to_string(),
                message: status.to_string(),
            });
        }
        Ok(())
    }
}

impl ComponentStore for FsComponentStore {
    fn exists(&self, name: &str, extension: &str) -> bool {
        self.path_for(name, extension).is_file()
    }

    fn write(&self, file: &ComponentFile) -> Result<PathBuf> {
        self.run_scaffold(file)?;

        let path = self.root.join(&file.relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.contents)?;
        Ok(path)
    }
}
