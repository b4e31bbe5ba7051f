use super::Backend;
use crate::error::{PriceListError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: std::io::Error) -> PriceListError {
        PriceListError::SourceUnavailable {
            path: self.path.clone(),
            source,
        }
    }

    /// Where writes land: the resolved target when `path` is a symlink, so the
    /// link survives a save. A path that does not resolve is used as is.
    fn target(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    fn tmp_path(target: &Path) -> PathBuf {
        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "pricelist".to_string());
        target.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
    }

    /// Writes a temp sibling of `target` carrying the target's permissions,
    /// then renames it over the target.
    fn replace(target: &Path, tmp: &Path, text: &str) -> std::io::Result<()> {
        fs::write(tmp, text)?;
        if let Ok(meta) = fs::metadata(target) {
            fs::set_permissions(tmp, meta.permissions())?;
        }
        fs::rename(tmp, target)
    }
}

impl Backend for FileBackend {
    fn read(&self) -> Result<String> {
        let bytes = fs::read(&self.path).map_err(|e| self.unavailable(e))?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "Read price list");
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        let target = self.target();
        let tmp = Self::tmp_path(&target);
        if let Err(e) = Self::replace(&target, &tmp, text) {
            let _ = fs::remove_file(&tmp);
            return Err(self.unavailable(e));
        }
        debug!(path = %target.display(), bytes = text.len(), "Wrote price list");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }
}
