use std::path::{Path, PathBuf};

use codex_logging::codex_debug;

use crate::persist::{AtomicFileWriter, PersistError, StagedBlob};

const FALLBACK_FILE_NAME: &str = "download";

/// Hands a staged download to the platform under a suggested name.
pub trait SaveTrigger: Send + Sync {
    fn save(&self, blob: &StagedBlob, suggested_name: &str) -> Result<PathBuf, PersistError>;
}

/// Saves downloads into a fixed directory, replacing files of the same name.
#[derive(Debug, Clone)]
pub struct DirectorySaveTrigger {
    dir: PathBuf,
}

impl DirectorySaveTrigger {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SaveTrigger for DirectorySaveTrigger {
    fn save(&self, blob: &StagedBlob, suggested_name: &str) -> Result<PathBuf, PersistError> {
        let file_name = sanitize_file_name(suggested_name);
        codex_debug!(
            "Saving {} bytes from {:?} as {:?}",
            blob.len(),
            blob.local_url(),
            file_name
        );
        let mut source = blob.open()?;
        AtomicFileWriter::new(self.dir.clone()).write_from(&file_name, &mut source)
    }
}

/// Keeps only the final path component so a suggested name cannot leave the directory.
pub fn sanitize_file_name(suggested: &str) -> String {
    let normalized = suggested.replace('\\', "/");
    let name = normalized
        .rsplit('/')
        .next()
        .map(str::trim)
        .unwrap_or_default();
    if name.is_empty() || name == "." || name == ".." {
        FALLBACK_FILE_NAME.to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_reduced_to_last_component() {
        assert_eq!(sanitize_file_name("comic.cbz"), "comic.cbz");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("dir\\file.pdf"), "file.pdf");
        assert_eq!(sanitize_file_name("  "), FALLBACK_FILE_NAME);
        assert_eq!(sanitize_file_name("a/.."), FALLBACK_FILE_NAME);
        assert_eq!(sanitize_file_name(""), FALLBACK_FILE_NAME);
    }
}
