use time::PrimitiveDateTime;

use super::{FormErrors, FormFields};
use crate::filters::datetime::{parse_timestamp, to_timestamp_string};
use crate::repos::shows::NewShow;

/// Booking form as rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    /// Empty form with the start time pre-filled.
    pub fn starting_at(now: PrimitiveDateTime) -> Self {
        Self {
            start_time: to_timestamp_string(now),
            ..Self::default()
        }
    }

    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            artist_id: fields.text("artist_id"),
            venue_id: fields.text("venue_id"),
            start_time: fields.text("start_time"),
        }
    }

    pub fn bind(fields: &FormFields) -> Result<NewShow, FormErrors> {
        let mut errors = FormErrors::new();

        let artist_id = id_field(fields, &mut errors, "artist_id");
        let venue_id = id_field(fields, &mut errors, "venue_id");

        let raw = fields.text("start_time");
        let start_time = if raw.is_empty() {
            errors.add("start_time", "This field is required.");
            None
        } else {
            match parse_timestamp(&raw) {
                Ok(at) => Some(at),
                Err(_) => {
                    errors.add("start_time", "Not a valid datetime value.");
                    None
                }
            }
        };

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => {
                Ok(NewShow {
                    artist_id,
                    venue_id,
                    start_time,
                })
            }
            _ => Err(errors),
        }
    }
}

fn id_field(fields: &FormFields, errors: &mut FormErrors, name: &'static str) -> Option<i32> {
    let raw = fields.text(name);
    if raw.is_empty() {
        errors.add(name, "This field is required.");
        return None;
    }
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(name, "Not a valid integer value.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn binds_booking() {
        let fields = FormFields::parse(b"artist_id=1&venue_id=2&start_time=2030-01-01+20%3A00%3A00");
        let show = ShowForm::bind(&fields).unwrap();
        assert_eq!(
            show,
            NewShow {
                artist_id: 1,
                venue_id: 2,
                start_time: datetime!(2030-01-01 20:00:00),
            }
        );
    }

    #[test]
    fn accepts_datetime_local_input() {
        let fields = FormFields::parse(b"artist_id=1&venue_id=2&start_time=2030-01-01T20%3A00");
        assert_eq!(
            ShowForm::bind(&fields).unwrap().start_time,
            datetime!(2030-01-01 20:00:00)
        );
    }

    #[test]
    fn rejects_non_integer_ids_and_bad_time() {
        let fields = FormFields::parse(b"artist_id=abc&venue_id=-3&start_time=soon");
        let errors = ShowForm::bind(&fields).unwrap_err();
        assert_eq!(errors.get("artist_id"), Some("Not a valid integer value."));
        assert_eq!(errors.get("venue_id"), Some("Not a valid integer value."));
        assert_eq!(errors.get("start_time"), Some("Not a valid datetime value."));
    }

    #[test]
    fn everything_missing() {
        let errors = ShowForm::bind(&FormFields::default()).unwrap_err();
        assert_eq!(errors.messages().len(), 3);
    }

    #[test]
    fn prefills_start_time() {
        let form = ShowForm::starting_at(datetime!(2024-06-01 12:00:00));
        assert_eq!(form.start_time, "2024-06-01 12:00:00");
        assert!(form.artist_id.is_empty());
    }
}
