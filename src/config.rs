//! Run configuration built from process arguments.
//!
//! Nothing is persisted: every run derives its [`RunConfig`] from the
//! command line once, before any file is touched.
//!
//! ```no_run
//! use average_color::RunConfig;
//!
//! let args: Vec<_> = std::env::args_os().skip(1).collect();
//! if let Some(config) = RunConfig::from_args(&args)? {
//!     println!("{}", config.to_json()?);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::cli::{FORMAT_FLAG, FORMAT_FLAG_LONG};
use crate::error::Result;
use crate::image_loader::DecodeStrategy;

/// Flag values collected from the argument list.
///
/// Only the format override is recognized; it is stored under `-f` whichever
/// spelling was used. Values are kept as raw OS strings, so arguments need
/// not be valid UTF-8.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    values: HashMap<String, OsString>,
}

impl Flags {
    /// Scan arguments (program name excluded) for `-f` / `--format <value>`.
    ///
    /// The token after the flag is taken verbatim, even if it looks like a
    /// flag itself, and a later occurrence replaces an earlier one. A trailing
    /// flag with nothing after it is dropped. Every other token is ignored.
    pub fn parse_from<S: AsRef<OsStr>>(args: &[S]) -> Self {
        let mut values = HashMap::with_capacity(1);
        let mut pending = false;

        for arg in args {
            let arg: &OsStr = arg.as_ref();
            if pending {
                values.insert(FORMAT_FLAG.to_string(), arg.to_os_string());
                pending = false;
            } else if arg == FORMAT_FLAG || arg == FORMAT_FLAG_LONG {
                pending = true;
            }
        }

        if pending {
            debug!("format flag given without a value, ignoring it");
        }
        Self { values }
    }

    /// The format override, if one was given
    pub fn format(&self) -> Option<&OsStr> {
        self.get(FORMAT_FLAG)
    }

    pub fn get(&self, key: &str) -> Option<&OsStr> {
        self.values.get(key).map(OsString::as_os_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Everything needed to analyze one image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Image to analyze
    pub image_path: PathBuf,

    /// Decoder selected from the override or the extension
    pub strategy: DecodeStrategy,
}

impl RunConfig {
    pub fn new(image_path: impl Into<PathBuf>, strategy: DecodeStrategy) -> Self {
        Self {
            image_path: image_path.into(),
            strategy,
        }
    }

    /// Build a configuration from arguments (program name excluded).
    ///
    /// Returns `Ok(None)` when there are no arguments at all. The first
    /// argument is the image path.
    ///
    /// # Errors
    ///
    /// Fails when no override is given and the path extension is missing or
    /// unsupported.
    pub fn from_args<S: AsRef<OsStr>>(args: &[S]) -> Result<Option<Self>> {
        let Some(path) = args.first() else {
            return Ok(None);
        };
        let path: &OsStr = path.as_ref();
        let image_path = PathBuf::from(path);
        let flags = Flags::parse_from(args);
        let strategy = DecodeStrategy::resolve(&image_path, flags.format())?;
        Ok(Some(Self::new(image_path, strategy)))
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
