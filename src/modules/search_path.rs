use std::path::{Path, PathBuf};

/// Ordered list of root directories scanned for module artifacts.
///
/// Roots are checked front to back and the first match wins, so a module in
/// an earlier root shadows one with the same name further down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    roots: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Built-in roots: `~/.rustle/modules` then `/usr/local/share/rustle/modules`.
    pub fn with_defaults() -> Self {
        let mut roots = Vec::new();
        if let Some(home) = dirs::home_dir() {
            roots.push(home.join(".rustle").join("modules"));
        }
        roots.push(PathBuf::from("/usr/local/share/rustle/modules"));

        Self { roots }
    }

    /// Add a root after all existing ones.
    pub fn push(&mut self, root: impl Into<PathBuf>) {
        self.roots.push(root.into());
    }

    /// Add a root ahead of all existing ones.
    pub fn prepend(&mut self, root: impl Into<PathBuf>) {
        self.roots.insert(0, root.into());
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.roots.iter().map(PathBuf::as_path)
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for SearchPath {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
