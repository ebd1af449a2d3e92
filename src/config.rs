use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "retarget";

/// Project files one directory below the root, as laid out by the project generator.
pub const DEFAULT_PATTERN: &str = "*/*.vcxproj";
pub const DEFAULT_SOURCE: &str = "<PlatformToolset>v110</PlatformToolset>";
pub const DEFAULT_TARGET: &str = "<PlatformToolset>v120_CTP_Nov2012</PlatformToolset>";

/// How the rewritten content is stored back into the file.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WriteMode {
    /// Write from the start of the file, then cut the file to the length of the new content.
    #[default]
    Truncate,
    /// Write from the start of the file without changing its length. If the new content is
    /// shorter than the old, the tail of the old content stays in the file.
    Overlay,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewriteConfig {
    /// Directory the pattern is resolved against
    pub root: PathBuf,
    /// Glob relative to `root`. `*` does not cross path separators
    pub pattern: String,
    pub source: String,
    pub target: String,
    pub write_mode: WriteMode,
}

impl RewriteConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pattern: DEFAULT_PATTERN.to_owned(),
            source: DEFAULT_SOURCE.to_owned(),
            target: DEFAULT_TARGET.to_owned(),
            write_mode: WriteMode::default(),
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn with_replacement(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.source = source.into();
        self.target = target.into();
        self
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    /// The pattern joined onto the root, with any glob metacharacters in the root escaped
    pub fn full_pattern(&self) -> String {
        let root = glob::Pattern::escape(&self.root.to_string_lossy());
        Path::new(&root)
            .join(&self.pattern)
            .to_string_lossy()
            .into_owned()
    }
}
