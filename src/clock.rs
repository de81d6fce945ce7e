use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use leptos::logging::log;

use crate::error::ReadingsError;
use crate::render::Slots;

pub const UPDATE_TIME_ID: &str = "update-time";

/// `D/M/YYYY at H:MM:SS`. Only minutes and seconds are zero-padded.
pub fn format_update_time<T: Datelike + Timelike>(t: &T) -> String {
    format!(
        "{}/{}/{} at {}:{:02}:{:02}",
        t.day(),
        t.month(),
        t.year(),
        t.hour(),
        t.minute(),
        t.second()
    )
}

/// Current wall-clock time in the browser's local timezone.
pub fn local_now() -> Option<NaiveDateTime> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())?
        .and_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds())
}

/// Paint the time of this render into `update-time`.
pub fn update_date_time<S: Slots + ?Sized>(slots: &mut S) -> Result<(), ReadingsError> {
    let Some(now) = local_now() else {
        return Ok(());
    };
    stamp(slots, &now)
}

pub(crate) fn stamp<S: Slots + ?Sized>(slots: &mut S, at: &NaiveDateTime) -> Result<(), ReadingsError> {
    let datetime = format_update_time(at);
    slots.paint(UPDATE_TIME_ID, &datetime)?;
    log!("{}", datetime);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::FakePage;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, s).unwrap()
    }

    #[test]
    fn pads_minutes_and_seconds_only() {
        assert_eq!(format_update_time(&at(2024, 3, 5, 9, 7, 3)), "5/3/2024 at 9:07:03");
    }

    #[test]
    fn two_digit_parts_are_unchanged() {
        assert_eq!(format_update_time(&at(2023, 12, 31, 23, 59, 58)), "31/12/2023 at 23:59:58");
    }

    #[test]
    fn midnight_has_a_single_zero_hour() {
        assert_eq!(format_update_time(&at(2025, 1, 1, 0, 0, 0)), "1/1/2025 at 0:00:00");
    }

    #[test]
    fn stamp_writes_update_time() {
        let mut page = FakePage::with_slots(0);
        stamp(&mut page, &at(2024, 3, 5, 9, 7, 3)).unwrap();
        assert_eq!(page.get(UPDATE_TIME_ID), "5/3/2024 at 9:07:03");
    }

    #[test]
    fn stamp_without_target_fails() {
        let mut page = FakePage::default();
        let err = stamp(&mut page, &at(2024, 3, 5, 9, 7, 3)).unwrap_err();
        assert_eq!(err, ReadingsError::MissingSlot(UPDATE_TIME_ID.into()));
    }
}
