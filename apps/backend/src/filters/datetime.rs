//! Human-readable rendering of show start times.

use std::str::FromStr;

use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateFormatError {
    #[error("unrecognized timestamp '{0}'")]
    InvalidTimestamp(String),
    #[error("unknown date style '{0}' (expected full or medium)")]
    UnknownStyle(String),
    #[error("failed to render timestamp: {0}")]
    Render(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateStyle {
    Full,
    #[default]
    Medium,
}

impl DateStyle {
    /// `Tuesday January, 1, 2030 at 8:00PM` or `Tue 01, 01, 2030 8:00PM`
    pub fn render(self, at: PrimitiveDateTime) -> Result<String, DateFormatError> {
        let rendered = match self {
            DateStyle::Full => at.format(format_description!(
                "[weekday] [month repr:long], [day padding:none], [year] at [hour repr:12 padding:none]:[minute][period]"
            )),
            DateStyle::Medium => at.format(format_description!(
                "[weekday repr:short] [month], [day], [year] [hour repr:12 padding:none]:[minute][period]"
            )),
        };
        rendered.map_err(|e| DateFormatError::Render(e.to_string()))
    }
}

impl FromStr for DateStyle {
    type Err = DateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "full" => Ok(DateStyle::Full),
            "medium" => Ok(DateStyle::Medium),
            other => Err(DateFormatError::UnknownStyle(other.to_string())),
        }
    }
}

/// Canonical text form of a start time, as the pages and forms carry it.
pub fn to_timestamp_string(value: PrimitiveDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    value
        .format(&format)
        .unwrap_or_else(|_| value.to_string())
}

/// Parse a submitted or stored timestamp.
///
/// Accepts `YYYY-MM-DD HH:MM[:SS[.f]]`, the `T`-separated form sent by
/// `datetime-local` inputs, `YYYY/MM/DD HH:MM:SS`, and RFC 3339 (converted to UTC).
pub fn parse_timestamp(raw: &str) -> Result<PrimitiveDateTime, DateFormatError> {
    let raw = raw.trim();
    if let Ok(with_offset) = OffsetDateTime::parse(raw, &Rfc3339) {
        let utc = with_offset.to_offset(UtcOffset::UTC);
        return Ok(PrimitiveDateTime::new(utc.date(), utc.time()));
    }

    let invalid = || DateFormatError::InvalidTimestamp(raw.to_string());
    let (date, clock) = raw
        .split_once(' ')
        .or_else(|| raw.split_once('T'))
        .ok_or_else(invalid)?;
    let date = date.replace('/', "-");
    let clock = clock.trim();
    let clock = if clock.matches(':').count() == 1 {
        format!("{clock}:00")
    } else {
        clock.to_string()
    };
    let normalized = format!("{date} {clock}");

    let whole = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let fractional =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]");
    PrimitiveDateTime::parse(&normalized, &whole)
        .or_else(|_| PrimitiveDateTime::parse(&normalized, &fractional))
        .map_err(|_| invalid())
}

/// Parse `value` and render it in `style`; `None` means medium.
pub fn format_datetime(value: &str, style: Option<&str>) -> Result<String, DateFormatError> {
    let style = match style {
        Some(s) => s.parse::<DateStyle>()?,
        None => DateStyle::default(),
    };
    style.render(parse_timestamp(value)?)
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn full_style() {
        assert_eq!(
            format_datetime("2030-01-01 20:00:00", Some("full")).unwrap(),
            "Tuesday January, 1, 2030 at 8:00PM"
        );
    }

    #[test]
    fn medium_is_the_default() {
        assert_eq!(
            format_datetime("2030-01-01 20:00:00", None).unwrap(),
            "Tue 01, 01, 2030 8:00PM"
        );
        assert_eq!(
            format_datetime("2030-01-01 20:00:00", Some("medium")).unwrap(),
            "Tue 01, 01, 2030 8:00PM"
        );
    }

    #[test]
    fn morning_and_midnight_hours() {
        assert_eq!(
            format_datetime("2019-05-21T09:05", Some("full")).unwrap(),
            "Tuesday May, 21, 2019 at 9:05AM"
        );
        assert_eq!(
            format_datetime("2035-04-15 00:30:00", Some("medium")).unwrap(),
            "Sun 04, 15, 2035 12:30AM"
        );
    }

    #[test]
    fn unknown_style_is_rejected() {
        assert_eq!(
            format_datetime("2030-01-01 20:00:00", Some("short")),
            Err(DateFormatError::UnknownStyle("short".into()))
        );
    }

    #[test]
    fn garbage_timestamp_is_rejected() {
        assert!(matches!(
            format_datetime("next tuesday", None),
            Err(DateFormatError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn parses_accepted_input_forms() {
        let expected = datetime!(2030-01-01 20:00:00);
        for raw in [
            "2030-01-01 20:00:00",
            "2030-01-01 20:00",
            "2030-01-01T20:00",
            "2030-01-01T20:00:00",
            "2030/01/01 20:00:00",
            "2030-01-01 20:00:00.0",
            "2030-01-01T21:00:00+01:00",
            "2030-01-01T20:00:00Z",
        ] {
            assert_eq!(parse_timestamp(raw).unwrap(), expected, "input {raw}");
        }
    }

    #[test]
    fn styles_render_directly() {
        let at = datetime!(2024-03-09 07:04:05);
        assert_eq!(
            DateStyle::Full.render(at).unwrap(),
            "Saturday March, 9, 2024 at 7:04AM"
        );
        assert_eq!(DateStyle::Medium.render(at).unwrap(), "Sat 03, 09, 2024 7:04AM");
    }

    #[test]
    fn timestamp_string_round_trips() {
        let at = datetime!(2030-01-01 20:00:00);
        assert_eq!(to_timestamp_string(at), "2030-01-01 20:00:00");
        assert_eq!(parse_timestamp(&to_timestamp_string(at)).unwrap(), at);
    }
}
