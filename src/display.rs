use chrono::NaiveDateTime;

use crate::clock;
use crate::error::ReadingsError;
use crate::render::{render_readings, Slots};
use crate::types::ReadingsPayload;

/// Render a snapshot, then stamp the update time. Both the initial fetch and
/// the event stream end here.
pub fn show<S: Slots + ?Sized>(slots: &mut S, payload: &ReadingsPayload) -> Result<(), ReadingsError> {
    show_at(slots, payload, clock::local_now)
}

pub(crate) fn show_at<S, F>(slots: &mut S, payload: &ReadingsPayload, now: F) -> Result<(), ReadingsError>
where
    S: Slots + ?Sized,
    F: FnOnce() -> Option<NaiveDateTime>,
{
    render_readings(slots, &payload.readings)?;
    match now() {
        Some(at) => clock::stamp(slots, &at),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::{reading, FakePage};
    use chrono::NaiveDate;

    fn fixed() -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2024, 3, 5)?.and_hms_opt(9, 7, 3)
    }

    #[test]
    fn renders_then_stamps() {
        let mut page = FakePage::with_slots(2);
        let payload = ReadingsPayload { readings: vec![reading(0), reading(1)] };

        show_at(&mut page, &payload, fixed).unwrap();

        assert_eq!(page.get("sessionTitleArray1"), "Room 1");
        assert_eq!(page.get(clock::UPDATE_TIME_ID), "5/3/2024 at 9:07:03");
    }

    #[test]
    fn failed_render_leaves_update_time() {
        let mut page = FakePage::with_slots(1);
        let payload = ReadingsPayload { readings: vec![reading(0), reading(1)] };

        assert!(show_at(&mut page, &payload, fixed).is_err());
        assert_eq!(page.get(clock::UPDATE_TIME_ID), "");
    }
}
