//! Upcoming/past classification of shows, computed at read time.

use time::{OffsetDateTime, PrimitiveDateTime};

/// Anything with a start time can be scheduled.
pub trait Scheduled {
    fn start_time(&self) -> PrimitiveDateTime;
}

/// Shows of one listing split around a reference instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Partitioned<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> Partitioned<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

/// Current UTC wall-clock time without offset, matching stored `start_time`s.
pub fn now_utc() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}

/// `start_time > now` is upcoming; everything else is past. Input order is kept.
pub fn partition<T: Scheduled>(shows: Vec<T>, now: PrimitiveDateTime) -> Partitioned<T> {
    let (upcoming, past) = shows.into_iter().partition(|s| s.start_time() > now);
    Partitioned { past, upcoming }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Slot(PrimitiveDateTime);

    impl Scheduled for Slot {
        fn start_time(&self) -> PrimitiveDateTime {
            self.0
        }
    }

    #[test]
    fn splits_around_now() {
        let now = datetime!(2024-06-01 12:00:00);
        let shows = vec![
            Slot(datetime!(2019-05-21 21:30:00)),
            Slot(datetime!(2030-01-01 20:00:00)),
            Slot(datetime!(2024-06-01 12:00:01)),
        ];

        let split = partition(shows, now);
        assert_eq!(split.past, vec![Slot(datetime!(2019-05-21 21:30:00))]);
        assert_eq!(
            split.upcoming,
            vec![
                Slot(datetime!(2030-01-01 20:00:00)),
                Slot(datetime!(2024-06-01 12:00:01))
            ]
        );
    }

    #[test]
    fn show_starting_exactly_now_is_past() {
        let now = datetime!(2024-06-01 12:00:00);
        let split = partition(vec![Slot(now)], now);
        assert_eq!(split.past_count(), 1);
        assert_eq!(split.upcoming_count(), 0);
    }

    #[test]
    fn counts_cover_every_show() {
        let now = datetime!(2024-06-01 12:00:00);
        let shows: Vec<Slot> = (0..10)
            .map(|d| Slot(datetime!(2024-05-28 12:00:00) + time::Duration::days(d)))
            .collect();
        let split = partition(shows, now);
        assert_eq!(split.past_count() + split.upcoming_count(), 10);
        assert_eq!(split.past_count(), 5);
    }
}
