// Timestamp formats used by the signal API
use crate::domain::errors::TimestampFormatError;
use chrono::{DateTime, NaiveDateTime};

/// How a series spells its timestamps. Each series declares exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// ISO-8601 with a trailing `+HH:MM`, `-HH:MM` or `Z` offset. The offset is
    /// dropped and the wall-clock value is kept.
    OffsetIso,
    /// Strict `YYYY-MM-DDTHH:MM:SSZ`.
    UtcZulu,
}

const ZULU: &str = "%Y-%m-%dT%H:%M:%SZ";

impl TimestampFormat {
    pub fn parse(self, series: &'static str, raw: &str) -> Result<NaiveDateTime, TimestampFormatError> {
        let parsed = match self {
            TimestampFormat::OffsetIso => DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.naive_local())
                .ok(),
            TimestampFormat::UtcZulu => NaiveDateTime::parse_from_str(raw, ZULU).ok(),
        };

        parsed.ok_or_else(|| TimestampFormatError {
            series,
            raw: raw.to_string(),
        })
    }
}
