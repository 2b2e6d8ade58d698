//! Lyric timestamp type and format-string parsing

use crate::utils::error::{LyricPaneError, Result};
use std::fmt;

/// A timestamp within a track, split into minutes, seconds, and
/// milliseconds. Each field is range-checked on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LyricTime {
    mins: u32,
    secs: u32,
    millis: u32,
}

impl LyricTime {
    pub fn new(mins: u32, secs: u32, millis: u32) -> Result<Self> {
        if mins > 59 {
            return Err(LyricPaneError::Lyrics(format!(
                "Minutes out of range: {mins}"
            )));
        }
        if secs > 59 {
            return Err(LyricPaneError::Lyrics(format!(
                "Seconds out of range: {secs}"
            )));
        }
        if millis > 999 {
            return Err(LyricPaneError::Lyrics(format!(
                "Milliseconds out of range: {millis}"
            )));
        }
        Ok(Self { mins, secs, millis })
    }

    pub fn mins(&self) -> u32 {
        self.mins
    }

    pub fn secs(&self) -> u32 {
        self.secs
    }

    pub fn millis(&self) -> u32 {
        self.millis
    }

    /// Total offset from the start of the track, in milliseconds.
    pub fn to_millis(&self) -> u64 {
        (self.mins as u64 * 60 + self.secs as u64) * 1000 + self.millis as u64
    }

    pub fn from_millis(total: u64) -> Result<Self> {
        let millis = (total % 1000) as u32;
        let total_secs = total / 1000;
        let secs = (total_secs % 60) as u32;
        let mins_wide = total_secs / 60;
        let mins = u32::try_from(mins_wide)
            .ok()
            .filter(|m| *m <= 59)
            .ok_or_else(|| LyricPaneError::Lyrics(format!("Minutes out of range: {mins_wide}")))?;
        Self::new(mins, secs, millis)
    }

    /// Parse `time_str` against a format string with the placeholders
    /// `%M` (minutes), `%S` (seconds), `%m` (milliseconds), and `%%`
    /// (a literal percent). All other format characters must match the
    /// input exactly, and both strings must be consumed in full.
    ///
    /// Omitted placeholders default to zero; a repeated placeholder is
    /// an error. The millisecond field is read as a plain integer, so
    /// `"50:20.09"` with `"%M:%S.%m"` yields 9 milliseconds.
    pub fn parse(time_str: &str, format: &str) -> Result<Self> {
        let mut input = time_str.chars().peekable();
        let mut spec = format.chars();

        let mut mins: Option<u32> = None;
        let mut secs: Option<u32> = None;
        let mut millis: Option<u32> = None;

        while let Some(c) = spec.next() {
            if c != '%' {
                match input.next() {
                    Some(actual) if actual == c => {}
                    _ => {
                        return Err(LyricPaneError::Lyrics(format!(
                            "Time '{time_str}' does not match format '{format}'"
                        )));
                    }
                }
                continue;
            }

            let placeholder = spec.next().ok_or_else(|| {
                LyricPaneError::Lyrics(format!("Dangling '%' in format '{format}'"))
            })?;

            let (field, max_digits) = match placeholder {
                'M' => (&mut mins, 2),
                'S' => (&mut secs, 2),
                'm' => (&mut millis, 3),
                '%' => {
                    match input.next() {
                        Some('%') => {}
                        _ => {
                            return Err(LyricPaneError::Lyrics(format!(
                                "Time '{time_str}' does not match format '{format}'"
                            )));
                        }
                    }
                    continue;
                }
                other => {
                    return Err(LyricPaneError::Lyrics(format!(
                        "Unknown placeholder '%{other}' in format '{format}'"
                    )));
                }
            };

            if field.is_some() {
                return Err(LyricPaneError::Lyrics(format!(
                    "Duplicate placeholder '%{placeholder}' in format '{format}'"
                )));
            }

            let mut value: u32 = 0;
            let mut digits = 0;
            while digits < max_digits {
                let Some(c) = input.next_if(|c| c.is_ascii_digit()) else {
                    break;
                };
                value = value * 10 + (c as u32 - '0' as u32);
                digits += 1;
            }
            if digits == 0 {
                return Err(LyricPaneError::Lyrics(format!(
                    "Expected digits for '%{placeholder}' in '{time_str}'"
                )));
            }
            *field = Some(value);
        }

        if input.next().is_some() {
            return Err(LyricPaneError::Lyrics(format!(
                "Trailing input after format '{format}' in '{time_str}'"
            )));
        }

        Self::new(
            mins.unwrap_or(0),
            secs.unwrap_or(0),
            millis.unwrap_or(0),
        )
    }
}

impl fmt::Display for LyricTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}.{:03}", self.mins, self.secs, self.millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_format() {
        let time = LyricTime::parse("50:20.09", "%M:%S.%m").unwrap();
        assert_eq!(time.mins(), 50);
        assert_eq!(time.secs(), 20);
        assert_eq!(time.millis(), 9);
    }

    #[test]
    fn test_missing_placeholders_default_to_zero() {
        let time = LyricTime::parse("03:07", "%M:%S").unwrap();
        assert_eq!(time.mins(), 3);
        assert_eq!(time.secs(), 7);
        assert_eq!(time.millis(), 0);
    }

    #[test]
    fn test_literal_percent() {
        let time = LyricTime::parse("12%34", "%M%%%S").unwrap();
        assert_eq!((time.mins(), time.secs()), (12, 34));
    }

    #[test]
    fn test_duplicate_placeholder_rejected() {
        assert!(LyricTime::parse("10:10", "%M:%M").is_err());
    }

    #[test]
    fn test_trailing_input_rejected() {
        assert!(LyricTime::parse("10:20.300x", "%M:%S.%m").is_err());
    }

    #[test]
    fn test_mismatched_literal_rejected() {
        assert!(LyricTime::parse("10-20", "%M:%S").is_err());
    }

    #[test]
    fn test_out_of_range_fields_rejected() {
        assert!(LyricTime::parse("99:20", "%M:%S").is_err());
        assert!(LyricTime::new(0, 60, 0).is_err());
        assert!(LyricTime::new(0, 0, 1000).is_err());
    }

    #[test]
    fn test_millis_round_trip() {
        let time = LyricTime::new(50, 20, 9).unwrap();
        assert_eq!(time.to_millis(), 3_020_009);
        assert_eq!(LyricTime::from_millis(3_020_009).unwrap(), time);
    }

    #[test]
    fn test_ordering_follows_offset() {
        let early = LyricTime::new(1, 59, 999).unwrap();
        let late = LyricTime::new(2, 0, 0).unwrap();
        assert!(early < late);
    }

    #[test]
    fn test_display() {
        let time = LyricTime::new(5, 3, 42).unwrap();
        assert_eq!(time.to_string(), "05:03.042");
    }
}
