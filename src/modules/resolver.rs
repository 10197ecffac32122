//! Locates module artifacts across the search path
//!
//! Per root `R` and module `M` two layouts are recognised, in this order:
//!
//! * standalone: `R/M/M.<platform>`, a single executable file
//! * packaged: `R/M/M/exec`, an entry point inside a directory whose other
//!   files are shipped alongside it

use crate::modules::error::ModuleError;
use crate::modules::module::Module;
use crate::modules::search_path::SearchPath;
use crate::types::Platform;
use serde::Serialize;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Entry point file inside a packaged module directory
pub const PACKAGED_ENTRY_POINT: &str = "exec";

/// Trait for locating the artifact implementing a module
pub trait ArtifactResolver: Send + Sync {
    fn resolve(&self, module: &Module, platform: &Platform)
        -> Result<ResolvedArtifact, ModuleError>;
}

/// Location of a module artifact on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedArtifact {
    pub path: PathBuf,
    pub standalone: bool,
}

impl ResolvedArtifact {
    /// File the execution engine invokes on the target.
    pub fn entry_point(&self) -> PathBuf {
        if self.standalone {
            self.path.clone()
        } else {
            self.path.join(PACKAGED_ENTRY_POINT)
        }
    }

    /// Files that must be transferred to the target, sorted by path.
    pub fn payload_files(&self) -> Result<Vec<PathBuf>, ModuleError> {
        if self.standalone {
            return Ok(vec![self.path.clone()]);
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.path).sort_by_file_name() {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.path.clone());
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
                ModuleError::ResolveFailed { path, source }
            })?;

            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

/// Resolves modules against an ordered set of filesystem roots
#[derive(Debug, Clone)]
pub struct FileSystemResolver {
    search_path: SearchPath,
}

impl FileSystemResolver {
    pub fn new(search_path: SearchPath) -> Self {
        Self { search_path }
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    fn resolve_in_root(
        &self,
        root: &Path,
        name: &str,
        platform: &Platform,
    ) -> Result<Option<ResolvedArtifact>, ModuleError> {
        if !is_dir(root)? {
            debug!(root = %root.display(), "skipping missing search root");
            return Ok(None);
        }

        let module_dir = root.join(name);
        if !is_dir(&module_dir)? {
            return Ok(None);
        }

        let standalone = module_dir.join(format!("{name}.{platform}"));
        debug!(module = name, path = %standalone.display(), "checking standalone artifact");
        if stat_entry(&standalone)?.is_some_and(|meta| meta.is_file()) {
            return Ok(Some(ResolvedArtifact {
                path: standalone,
                standalone: true,
            }));
        }

        let package_dir = module_dir.join(name);
        if !is_dir(&package_dir)? {
            return Ok(None);
        }

        let entry_point = package_dir.join(PACKAGED_ENTRY_POINT);
        debug!(module = name, path = %entry_point.display(), "checking packaged artifact");
        if stat_entry(&entry_point)?.is_some() {
            return Ok(Some(ResolvedArtifact {
                path: package_dir,
                standalone: false,
            }));
        }

        Ok(None)
    }
}

impl ArtifactResolver for FileSystemResolver {
    fn resolve(
        &self,
        module: &Module,
        platform: &Platform,
    ) -> Result<ResolvedArtifact, ModuleError> {
        platform.validate()?;

        for root in self.search_path.iter() {
            if let Some(artifact) = self.resolve_in_root(root, module.name(), platform)? {
                info!(
                    module = module.name(),
                    %platform,
                    path = %artifact.path.display(),
                    standalone = artifact.standalone,
                    "resolved module artifact"
                );
                return Ok(artifact);
            }
        }

        Err(ModuleError::ModuleNotFound {
            name: module.name().to_string(),
            platform: platform.to_string(),
            searched: self.search_path.roots().to_vec(),
        })
    }
}

/// `Ok(None)` when nothing exists at `path`, including when some component
/// along it is not a directory; other I/O failures are errors.
fn stat_entry(path: &Path) -> Result<Option<Metadata>, ModuleError> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta)),
        Err(err)
            if matches!(
                err.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
        {
            Ok(None)
        }
        Err(source) => Err(ModuleError::ResolveFailed {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn is_dir(path: &Path) -> Result<bool, ModuleError> {
    Ok(stat_entry(path)?.is_some_and(|meta| meta.is_dir()))
}
