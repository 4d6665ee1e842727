use std::collections::HashSet;

// Compiled-in filter defaults. Edit these constants to change what the
// walk picks up; there is deliberately no flag or config file for them.

/// Directory names that are never traversed.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "venv",
    ".git",
    "__pycache__",
    "build",
    "dist",
    "target",
];

/// File names excluded by exact match: lock files and the tool's own
/// default artifact.
pub const EXCLUDED_FILES: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    "Cargo.lock",
    "project-context.txt",
];

/// Extensions recognized as text content (lower-case, no leading dot).
pub const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "rs", "toml", "py", "js", "ts", "jsx", "tsx", "cpp", "h", "hpp", "c", "cs",
    "java", "html", "css", "scss", "sass", "json", "yml", "yaml", "xml", "env", "config",
    "dockerfile", "sh", "bat", "ps1",
];

/// Extensions excluded as binary or opaque: images, archives,
/// executables, compiled artifacts.
pub const BINARY_EXTENSIONS: &[&str] = &[
    "svg", "png", "jpg", "jpeg", "gif", "ico", "pdf", "zip", "tar", "gz", "rar", "exe", "dll",
    "pdb", "pyc", "so", "o", "a",
];

/// The resolved filter sets, immutable once constructed. The binary set
/// is consulted before the text set, so the two stay disjoint in effect.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub excluded_dirs: HashSet<&'static str>,
    pub excluded_files: HashSet<String>,
    pub text_extensions: HashSet<&'static str>,
    pub binary_extensions: HashSet<&'static str>,
    /// File name of the running executable, excluded from the walk.
    pub self_name: Option<String>,
}

impl FilterConfig {
    /// Builds the compiled-in defaults, folding in the actual output file
    /// name so a partially written artifact never ingests itself.
    pub fn with_defaults(self_name: Option<String>, output_name: Option<String>) -> Self {
        let mut excluded_files: HashSet<String> =
            EXCLUDED_FILES.iter().map(|name| name.to_string()).collect();
        if let Some(name) = output_name {
            excluded_files.insert(name);
        }

        Self {
            excluded_dirs: EXCLUDED_DIRS.iter().copied().collect(),
            excluded_files,
            text_extensions: TEXT_EXTENSIONS.iter().copied().collect(),
            binary_extensions: BINARY_EXTENSIONS.iter().copied().collect(),
            self_name,
        }
    }
}
