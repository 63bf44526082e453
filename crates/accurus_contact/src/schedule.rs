// --- File: crates/accurus_contact/src/schedule.rs ---
//! Audit scheduling: the bookable time slots and the selectable date range.

use accurus_config::ContactConfig;
use chrono::{Months, NaiveDate, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::warn;

/// First bookable hour (9 AM).
pub const FIRST_SLOT_HOUR: u32 = 9;
/// Hour at which the business window closes (5 PM); no slot starts at or after it.
pub const CLOSING_HOUR: u32 = 17;
pub const SLOT_STEP_MINUTES: u32 = 15;
/// How far ahead an audit can be booked.
pub const BOOKING_WINDOW_MONTHS: u32 = 3;

/// One bookable 15-minute start time, displayed as `"9:00 AM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Looks a display label up in the generated slots.
    ///
    /// Only exact labels of offered slots are accepted.
    pub fn parse(label: &str) -> Option<TimeSlot> {
        generate_time_slots()
            .into_iter()
            .find(|slot| slot.to_string() == label)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.0.hour();
        let period = if hour < 12 { "AM" } else { "PM" };
        let display_hour = if hour > 12 { hour - 12 } else { hour };
        write!(f, "{}:{:02} {}", display_hour, self.0.minute(), period)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// All bookable slots of a business day, 9:00 AM through 4:45 PM, in order.
pub fn generate_time_slots() -> Vec<TimeSlot> {
    (FIRST_SLOT_HOUR..CLOSING_HOUR)
        .flat_map(|hour| {
            (0..60)
                .step_by(SLOT_STEP_MINUTES as usize)
                .filter_map(move |minute| NaiveTime::from_hms_opt(hour, minute, 0))
        })
        .map(TimeSlot)
        .collect()
}

/// Display labels of [`generate_time_slots`].
pub fn time_slot_labels() -> Vec<String> {
    generate_time_slots()
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Inclusive range offered by the audit date picker.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DateBounds {
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-05"))]
    pub min: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(example = "2025-08-05"))]
    pub max: NaiveDate,
}

impl DateBounds {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }
}

/// `[today, today + 3 months]`.
///
/// When the target month is shorter the day is clamped to its last day
/// (Nov 30 + 3 months = Feb 28/29).
pub fn date_bounds(today: NaiveDate) -> DateBounds {
    let max = today
        .checked_add_months(Months::new(BOOKING_WINDOW_MONTHS))
        .unwrap_or(NaiveDate::MAX);
    DateBounds { min: today, max }
}

/// [`date_bounds`] for the current calendar day in `tz`.
pub fn date_bounds_now(tz: Tz) -> DateBounds {
    date_bounds(Utc::now().with_timezone(&tz).date_naive())
}

/// The business time zone, Eastern Time unless configured otherwise.
pub fn business_time_zone(config: &ContactConfig) -> Tz {
    config.time_zone().parse::<Tz>().unwrap_or_else(|_| {
        warn!(
            "Unknown contact.time_zone {:?}, falling back to {}",
            config.time_zone(),
            ContactConfig::DEFAULT_TIME_ZONE
        );
        chrono_tz::America::New_York
    })
}
