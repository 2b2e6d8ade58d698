//! Lyrics module for LyricPane
//!
//! Timed lyric storage and LRC parsing. An LRC file carries one line per
//! timestamp, `[mm:ss.xx]text`, plus metadata tags such as `[ar:artist]`
//! that are skipped here.

pub mod time;

pub use time::LyricTime;

use crate::utils::error::{LyricPaneError, Result};
use std::fs;
use std::path::Path;

/// One timed lyric line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LrcEntry {
    pub time: LyricTime,
    pub text: String,
}

/// A parsed lyric sheet, entries sorted by timestamp.
#[derive(Debug, Clone, Default)]
pub struct Lyrics {
    entries: Vec<LrcEntry>,
}

impl Lyrics {
    pub fn new(mut entries: Vec<LrcEntry>) -> Self {
        entries.sort_by_key(|entry| entry.time);
        Self { entries }
    }

    pub fn entries(&self) -> &[LrcEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse_lrc(&contents)
    }

    /// Parse LRC text. Lines without a leading `[...]` block and
    /// metadata tags whose timestamp does not parse are skipped.
    pub fn parse_lrc(contents: &str) -> Result<Self> {
        let mut entries = Vec::new();

        for line in contents.lines() {
            let line = line.trim();
            let Some(rest) = line.strip_prefix('[') else {
                continue;
            };
            let Some((stamp, text)) = rest.split_once(']') else {
                continue;
            };

            let time = LyricTime::parse(stamp, "%M:%S.%m")
                .or_else(|_| LyricTime::parse(stamp, "%M:%S"));
            let Ok(time) = time else {
                // Metadata tag such as [ar:...] or [ti:...].
                continue;
            };

            entries.push(LrcEntry {
                time,
                text: text.trim().to_string(),
            });
        }

        if entries.is_empty() {
            return Err(LyricPaneError::Lyrics(
                "No timed lines found in LRC input".to_string(),
            ));
        }

        Ok(Self::new(entries))
    }

    /// The lyric line active at `position_ms`, the last entry whose
    /// timestamp is at or before the position. None before the first
    /// entry.
    pub fn line_at(&self, position_ms: u64) -> Option<&LrcEntry> {
        let idx = self
            .entries
            .partition_point(|entry| entry.time.to_millis() <= position_ms);
        idx.checked_sub(1).map(|i| &self.entries[i])
    }

    /// The next line change strictly after `position_ms`, for scheduling
    /// the following wakeup.
    pub fn next_change_after(&self, position_ms: u64) -> Option<u64> {
        let idx = self
            .entries
            .partition_point(|entry| entry.time.to_millis() <= position_ms);
        self.entries.get(idx).map(|entry| entry.time.to_millis())
    }
}
