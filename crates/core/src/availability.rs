//! # Slot Availability
//!
//! This module computes which start times are still bookable on a given
//! day. It is the one genuinely interesting calculation in the system
//! and is kept free of I/O so it can be tested in isolation.
//!
//! ## Algorithm
//!
//! Availability is computed in three steps:
//!
//! 1. Generate the full candidate slot list from the shop's opening and
//!    closing times, at a fixed 30-minute granularity.
//! 2. Convert the day's blocking appointments (status `pending` or
//!    `confirmed`) into `[start, end)` intervals.
//! 3. Filter the candidate list: a slot survives only if the booking
//!    would finish by closing time and its occupied interval overlaps
//!    no existing booking.
//!
//! Parse failures are handled asymmetrically, and deliberately so:
//!
//! - A slot label that cannot be resolved to a start time is dropped
//!   from the output: it fails closed, so an unintelligible slot is
//!   never offered.
//! - An appointment whose date/time cannot be parsed is skipped when
//!   building the blocking set: it fails open and does not block
//!   anything. See DESIGN.md for the discussion of this choice.
//! - Malformed shop opening/closing times yield an empty slot list
//!   rather than an error.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::appointment::Appointment;

/// Granularity of the booking calendar, in minutes.
pub const SLOT_INTERVAL_MINUTES: i64 = 30;

/// Opening time used when the shop has not configured one.
pub const DEFAULT_OPENING_TIME: &str = "09:00";

/// Closing time used when the shop has not configured one.
pub const DEFAULT_CLOSING_TIME: &str = "18:00";

/// The half-open time range `[start, end)` an existing appointment
/// occupies on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BookedInterval {
    /// Builds the interval an appointment occupies from its date, its
    /// slot label ("9:30 AM"), and its total duration in minutes.
    ///
    /// Returns `None` when the label does not parse or the duration is
    /// out of range; callers skip such records rather than letting them
    /// block the whole day.
    pub fn from_booking(date: NaiveDate, time: &str, total_duration: i64) -> Option<Self> {
        let start = slot_start(date, time)?;
        let span = Duration::try_minutes(total_duration)?;
        Some(Self {
            start,
            end: start.checked_add_signed(span)?,
        })
    }

    /// Half-open overlap test against a candidate `[start, end)` range.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start < self.end && end > self.start
    }
}

/// Parses a "HH:MM" shop-configuration time.
pub fn parse_shop_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Resolves a slot label to a concrete start time on `date`.
pub fn slot_start(date: NaiveDate, label: &str) -> Option<NaiveDateTime> {
    let time = NaiveTime::parse_from_str(label, "%I:%M %p").ok()?;
    Some(date.and_time(time))
}

/// Formats a time-of-day as a slot label, e.g. "9:00 AM" or "5:30 PM".
pub fn slot_label(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Produces the full candidate slot list for the shop's operating
/// hours, independent of any bookings.
///
/// Labels run at [`SLOT_INTERVAL_MINUTES`] granularity from opening
/// (inclusive) up to, but not including, closing. The output is empty
/// when opening >= closing or when either time is malformed.
pub fn generate_time_slots(opening_time: &str, closing_time: &str) -> Vec<String> {
    let (Some(opening), Some(closing)) = (
        parse_shop_time(opening_time),
        parse_shop_time(closing_time),
    ) else {
        return Vec::new();
    };

    let mut slots = Vec::new();
    let mut cursor = opening;
    while cursor < closing {
        slots.push(slot_label(cursor));
        let (next, wrapped) = cursor.overflowing_add_signed(Duration::minutes(SLOT_INTERVAL_MINUTES));
        if wrapped != 0 {
            // Stepped past midnight; the day is over.
            break;
        }
        cursor = next;
    }
    slots
}

/// Converts a day's appointments into blocking intervals.
///
/// Only appointments whose status blocks slots (`pending` or
/// `confirmed`) contribute; cancelled, completed, and no-show records
/// never do. Appointments with unparseable date/time combinations are
/// skipped entirely.
pub fn booked_intervals(appointments: &[Appointment]) -> Vec<BookedInterval> {
    appointments
        .iter()
        .filter(|a| a.status.blocks_slots())
        .filter_map(|a| BookedInterval::from_booking(a.date, &a.time, a.total_duration))
        .collect()
}

/// Narrows a generated slot list to the starts that can fit a booking
/// of `total_duration` minutes on `date`.
///
/// A zero duration (nothing selected yet) returns the full list
/// unfiltered, so a booking form can still show slot options before a
/// service is chosen. Otherwise a slot survives only if:
///
/// - the booking would end by `closing_time`, and
/// - its `[start, start + total_duration)` interval overlaps none of
///   `booked`.
///
/// Output preserves the chronological order of `all_slots`. Slots that
/// fail to parse are excluded; a malformed `closing_time` or a duration
/// too large for the calendar to represent empties the output.
pub fn available_time_slots(
    date: NaiveDate,
    all_slots: &[String],
    booked: &[BookedInterval],
    total_duration: i64,
    closing_time: &str,
) -> Vec<String> {
    if total_duration == 0 {
        return all_slots.to_vec();
    }

    let Some(closing) = parse_shop_time(closing_time) else {
        return Vec::new();
    };
    // A duration outside chrono's range can never fit inside a day.
    let Some(span) = Duration::try_minutes(total_duration) else {
        return Vec::new();
    };
    let shop_close = date.and_time(closing);

    all_slots
        .iter()
        .filter(|slot| {
            let Some(start) = slot_start(date, slot) else {
                return false;
            };
            let Some(end) = start.checked_add_signed(span) else {
                return false;
            };

            if end > shop_close {
                return false;
            }
            !booked.iter().any(|interval| interval.overlaps(start, end))
        })
        .cloned()
        .collect()
}
