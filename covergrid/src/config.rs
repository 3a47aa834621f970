// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session options.
//!
//! Options come from a JSON document with camel-cased keys. Block comments
//! (`/* ... */`) are allowed and stripped before parsing, and every key is
//! optional.
//!
//! ```
//! use covergrid::config::Config;
//!
//! let config = Config::from_json_str(r#"{
//!     /* restore the cursor faster */
//!     "cursorRestoreMs": 50
//! }"#).unwrap();
//! assert_eq!(config.cursor_restore_ms, 50);
//! assert_eq!(config.card_stack_depth, 3);
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

use covergrid_overlay::hit::{HitPolicy, OverlayConfig};
use covergrid_search::SearchConfig;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("invalid regex"));

/// Failures while loading options.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The options file could not be read.
    #[error("cannot read options from {path}: {source}")]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The options document is not valid JSON, or a value has the wrong type.
    #[error("malformed options: {0}")]
    Json(#[from] serde_json::Error),
    /// The card slot does not fall inside the stack.
    #[error("card slot {slot} is outside a stack of depth {depth}")]
    CardSlotOutOfRange {
        /// Configured slot.
        slot: usize,
        /// Configured stack depth.
        depth: usize,
    },
}

/// Options for one page session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Number of stacked elements a pointer resolution to a card has.
    pub card_stack_depth: usize,
    /// Position of the card in that stack, topmost first.
    pub card_slot: usize,
    /// Delay before a positioned tooltip is revealed.
    pub reveal_delay_ms: u64,
    /// Delay before the cursor is restored after leaving a card.
    pub cursor_restore_ms: u64,
    /// Delay before the query is re-read after the search box loses focus.
    pub blur_refresh_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            card_stack_depth: HitPolicy::OVERLAY_CARD_ROOT.stack_depth,
            card_slot: HitPolicy::OVERLAY_CARD_ROOT.card_slot,
            reveal_delay_ms: 1,
            cursor_restore_ms: 100,
            blur_refresh_ms: 10,
        }
    }
}

impl Config {
    /// Parse an options document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(&strip_comments(text))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse an options file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Read an options file, falling back to defaults.
    ///
    /// A missing file is not an error. Any other failure is logged.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no options file, using defaults");
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring options file");
            Self::default()
        })
    }

    /// Hit testing and tooltip timing.
    pub fn overlay(&self) -> OverlayConfig {
        OverlayConfig {
            policy: HitPolicy {
                stack_depth: self.card_stack_depth,
                card_slot: self.card_slot,
            },
            reveal_delay: Duration::from_millis(self.reveal_delay_ms),
            cursor_restore_delay: Duration::from_millis(self.cursor_restore_ms),
        }
    }

    /// Search input timing.
    pub fn search(&self) -> SearchConfig {
        SearchConfig {
            blur_refresh_delay: Duration::from_millis(self.blur_refresh_ms),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.card_slot >= self.card_stack_depth {
            return Err(ConfigError::CardSlotOutOfRange {
                slot: self.card_slot,
                depth: self.card_stack_depth,
            });
        }
        Ok(())
    }
}

fn strip_comments(text: &str) -> Cow<'_, str> {
    BLOCK_COMMENT.replace_all(text, "")
}
