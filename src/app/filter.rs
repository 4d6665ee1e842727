//! Pure include/exclude decisions for directories and files.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::app::config::FilterConfig;

/// Bytes sniffed from the head of a file when extension rules alone
/// cannot classify it.
const SNIFF_LEN: usize = 1024;

pub struct Filter {
    config: FilterConfig,
}

impl Filter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// The only gate for directories: an exact, case-sensitive name check
    /// against the excluded set. No extension logic applies here.
    pub fn is_traversable_directory(&self, name: &str) -> bool {
        !self.config.excluded_dirs.contains(name)
    }

    /// Decides whether a file's content belongs in the artifact.
    ///
    /// Name and extension rules run first as a cheap heuristic; the
    /// NUL-byte sniff is the authoritative fallback for extensionless
    /// files. Every uncertain outcome excludes the file.
    pub fn should_process_file(&self, path: &Path) -> bool {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return false,
        };

        if self.config.self_name.as_deref() == Some(name.as_ref()) {
            return false;
        }
        if self.config.excluded_files.contains(name.as_ref()) {
            return false;
        }

        // A trailing-dot name yields an empty extension; treat it like no
        // extension at all.
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .filter(|ext| !ext.is_empty());

        if let Some(ext) = extension {
            if self.config.binary_extensions.contains(ext.as_str()) {
                return false;
            }
            if !self.config.text_extensions.contains(ext.as_str()) {
                return false;
            }
        }

        has_text_prefix(path)
    }
}

/// Reads up to the first `SNIFF_LEN` bytes; a NUL byte means binary.
/// Read errors classify as binary too, never as a reported failure.
fn has_text_prefix(path: &Path) -> bool {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let mut prefix = Vec::with_capacity(SNIFF_LEN);
    match file.take(SNIFF_LEN as u64).read_to_end(&mut prefix) {
        Ok(_) => !prefix.contains(&0),
        Err(_) => false,
    }
}
