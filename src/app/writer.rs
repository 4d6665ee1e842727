//! Serializes one project walk into the aggregated context artifact: a
//! visual tree section followed by a content section, streamed to a sink.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pathdiff::diff_paths;

use crate::app::filter::Filter;
use crate::app::models::WalkResult;
use crate::app::text::{self, estimate_tokens};

pub struct ContextWriter<W: Write> {
    out: W,
    filter: Filter,
    result: WalkResult,
}

/// One directory child, resolved enough to sort and dispatch on.
struct Entry {
    name: String,
    is_dir: bool,
    path: PathBuf,
}

impl<W: Write> ContextWriter<W> {
    pub fn new(out: W, filter: Filter) -> Self {
        Self {
            out,
            filter,
            result: WalkResult::default(),
        }
    }

    /// Runs both passes over `root` and writes the full artifact. Write
    /// errors on the sink are fatal; everything per-file is reported
    /// inline and the walk continues.
    pub fn write_project(mut self, root: &Path) -> io::Result<WalkResult> {
        let root_name = dir_name(root);

        writeln!(self.out, "<project_overview>")?;
        writeln!(self.out, "<generated_at>{root_name}</generated_at>")?;
        writeln!(self.out)?;

        writeln!(self.out, "<directory_structure>")?;
        self.write_tree(root, "")?;
        writeln!(self.out, "</directory_structure>")?;
        writeln!(self.out)?;

        writeln!(self.out, "<file_contents>")?;
        self.write_contents(root, root)?;
        writeln!(self.out, "</file_contents>")?;
        write!(self.out, "</project_overview>")?;

        self.out.flush()?;
        Ok(self.result)
    }

    /// Structure pass: depth-first, directories sorted before files and
    /// each group ordered case-insensitively. File lines carry a branch
    /// glyph; directory lines are emitted by the recursive call with the
    /// accumulated prefix. Excluded entries are omitted silently but
    /// still occupy their position when deciding which child is last.
    fn write_tree(&mut self, dir: &Path, prefix: &str) -> io::Result<()> {
        let name = dir_name(dir);
        if !self.filter.is_traversable_directory(&name) {
            return Ok(());
        }

        writeln!(self.out, "{prefix}{name}/")?;

        let mut entries = match list_dir(dir) {
            Ok(entries) => entries,
            Err(_) => {
                writeln!(self.out, "{prefix}[ACCESS DENIED]")?;
                return Ok(());
            }
        };
        entries.sort_by_cached_key(|entry| (!entry.is_dir, entry.name.to_lowercase()));

        let last = entries.len().saturating_sub(1);
        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == last;
            if entry.is_dir {
                let next_prefix = format!("{prefix}{}", if is_last { "   " } else { "│  " });
                self.write_tree(&entry.path, &next_prefix)?;
            } else if self.filter.should_process_file(&entry.path) {
                let glyph = if is_last { "└─ " } else { "├─ " };
                writeln!(self.out, "{prefix}{glyph}{}", entry.name)?;
            }
        }

        Ok(())
    }

    /// Content pass: files of a directory first, sorted case-insensitively,
    /// then subdirectories in listing order. Deliberately a different
    /// ordering than the tree pass; both are part of the artifact format.
    fn write_contents(&mut self, dir: &Path, root: &Path) -> io::Result<()> {
        let name = dir_name(dir);
        if !self.filter.is_traversable_directory(&name) {
            return Ok(());
        }

        let entries = match list_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("skipping unreadable directory {}: {err}", dir.display());
                return Ok(());
            }
        };

        let (dirs, mut files): (Vec<&Entry>, Vec<&Entry>) =
            entries.iter().partition(|entry| entry.is_dir);
        files.sort_by_cached_key(|entry| entry.name.to_lowercase());

        for file in files {
            if self.filter.should_process_file(&file.path) {
                self.write_file_block(&file.path, root)?;
            }
        }
        for sub in dirs {
            self.write_contents(&sub.path, root)?;
        }

        Ok(())
    }

    fn write_file_block(&mut self, path: &Path, root: &Path) -> io::Result<()> {
        let relative = diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
        let relative = relative.to_string_lossy().replace('\\', "/");

        match text::read_file(path) {
            Ok(content) => {
                write!(self.out, "\n<file path=\"{relative}\">\n{content}\n</file>\n")?;
                self.result.total_lines += content.matches('\n').count() + 1;
                self.result.total_tokens += estimate_tokens(&content);
                self.result.file_count += 1;
            }
            Err(err) => {
                log::warn!("failed to read {relative}: {err}");
                write!(self.out, "\n<error file=\"{relative}\">{err}</error>\n")?;
            }
        }

        Ok(())
    }
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Lists a directory's children; entries that cannot be stat'd are
/// dropped, a failed listing bubbles up to the caller.
fn list_dir(dir: &Path) -> io::Result<Vec<Entry>> {
    let entries = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| {
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            Entry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
                path: entry.path(),
            }
        })
        .collect();
    Ok(entries)
}
