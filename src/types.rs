//! Entry point and run mode types
//!
//! The entry point is resolved into a tagged variant once at construction so
//! the launcher never has to re-inspect what kind of target it is serving.

use std::path::{Path, PathBuf};

use crate::error::{FrontendError, FrontendResult};

/// The user-supplied code that defines the UI to serve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryPoint {
    /// Path to a `.py` or `.ipynb` source file, served directly
    FilePath(PathBuf),

    /// Reference to a free render function (`"pkg.module:function"`), served
    /// through the bundled renderer script
    RenderFn { module: String, function: String },
}

impl EntryPoint {
    /// Entry point backed by a source file
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::FilePath(path.into())
    }

    /// Entry point backed by a free function reference of the form
    /// `"pkg.module:function"`.
    ///
    /// Instance methods are rejected: the child process re-imports the
    /// function by name and has no receiver to bind it to, so only free
    /// functions are accepted.
    pub fn render_fn(reference: &str) -> FrontendResult<Self> {
        let (module, function) = reference.split_once(':').ok_or_else(|| {
            FrontendError::invalid_entry_point(format!(
                "expected 'module:function', got '{reference}'"
            ))
        })?;

        if module.is_empty() || function.is_empty() {
            return Err(FrontendError::invalid_entry_point(format!(
                "empty module or function in '{reference}'"
            )));
        }

        // A dot-qualified function part ("module:Class.method") names a bound
        // method rather than a free function.
        if function.contains('.') {
            return Err(FrontendError::invalid_entry_point(format!(
                "'{function}' is a method reference; only free functions are supported"
            )));
        }

        Ok(Self::RenderFn {
            module: module.to_string(),
            function: function.to_string(),
        })
    }

    /// Whether this entry point is served through the renderer script
    pub fn is_render_fn(&self) -> bool {
        matches!(self, Self::RenderFn { .. })
    }
}

/// Where the owning framework is executing
///
/// Locally the child's output is inherited to ease debugging; in a hosted
/// deployment it is redirected to log files instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Local,
    Hosted,
}

impl RunMode {
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }
}

/// Absolutize a path against the current working directory without touching
/// the filesystem (the target may not exist until the child starts).
pub(crate) fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
