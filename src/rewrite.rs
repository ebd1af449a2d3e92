use anyhow::Context;
use glob::MatchOptions;
use log::{debug, info};
use std::{
    fs::OpenOptions,
    io::{Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use crate::{
    config::{RewriteConfig, WriteMode},
    utils::display_path,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileRewrite {
    pub path: PathBuf,
    pub replacements: usize,
    pub bytes_before: u64,
    pub bytes_after: u64,
}

impl FileRewrite {
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    }
}

/// Lists the regular files matching the configured pattern, in the order `glob` yields them.
///
/// The listing is taken once, up front, so files created while rewriting are never picked up.
pub fn find_project_files(config: &RewriteConfig) -> anyhow::Result<Vec<PathBuf>> {
    let pattern = config.full_pattern();
    debug!("Searching for project files with pattern {pattern}");

    let mut paths = vec![];
    for entry in glob::glob_with(&pattern, match_options())
        .with_context(|| format!("Invalid project file pattern '{pattern}'"))?
    {
        let path = entry.context("Failed to list project files")?;
        if path.is_file() {
            paths.push(path);
        }
    }

    debug!("Found {} project files", paths.len());
    Ok(paths)
}

/// Replaces every non-overlapping occurrence of `source`, scanning left to right, and
/// returns the new text with the number of occurrences replaced.
pub fn replace_text(content: &str, source: &str, target: &str) -> (String, usize) {
    if source.is_empty() {
        return (content.to_owned(), 0);
    }
    let count = content.matches(source).count();
    if count == 0 {
        (content.to_owned(), 0)
    } else {
        (content.replace(source, target), count)
    }
}

/// Reads the whole file, substitutes the configured text and writes the result back over
/// the same handle. The file is always rewritten, even when nothing matched.
pub fn rewrite_file(path: &Path, config: &RewriteConfig) -> anyhow::Result<FileRewrite> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .with_context(|| format!("Failed to open {} for rewriting", path.display()))?;

    let mut old = String::new();
    file.read_to_string(&mut old)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let (new, replacements) = replace_text(&old, &config.source, &config.target);

    file.seek(SeekFrom::Start(0))
        .with_context(|| format!("Failed to rewind {}", path.display()))?;
    file.write_all(new.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let bytes_before = old.len() as u64;
    let written = new.len() as u64;
    let bytes_after = match config.write_mode {
        WriteMode::Truncate => {
            file.set_len(written)
                .with_context(|| format!("Failed to truncate {}", path.display()))?;
            written
        }
        WriteMode::Overlay => written.max(bytes_before),
    };
    file.flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    if replacements == 0 {
        debug!("No occurrences of {:?} in {}", config.source, path.display());
    } else {
        info!("Replaced {replacements} occurrence(s) in {}", path.display());
    }
    if bytes_after > written {
        debug!(
            "{} keeps {} stale trailing bytes",
            path.display(),
            bytes_after - written
        );
    }

    Ok(FileRewrite {
        path: path.to_path_buf(),
        replacements,
        bytes_before,
        bytes_after,
    })
}

/// Rewrites every matching project file, writing `modifying: <path>` to `out` before each.
///
/// Stops at the first error. Files handled before the failure keep their new content.
pub fn run<W: Write>(config: &RewriteConfig, out: &mut W) -> anyhow::Result<Vec<FileRewrite>> {
    let paths = find_project_files(config)?;

    let mut rewrites = Vec::with_capacity(paths.len());
    for path in paths {
        writeln!(out, "modifying: {}", display_path(&config.root, &path))?;
        rewrites.push(rewrite_file(&path, config)?);
    }
    out.flush()?;

    Ok(rewrites)
}
