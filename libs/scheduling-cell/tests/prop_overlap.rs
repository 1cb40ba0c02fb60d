//! Property-based tests for the slot occupation rule.
//!
//! The production code decides occupation with the simplified half-open
//! interval test (`slot_start < appt_end && slot_end > appt_start`). The
//! behavior it has to reproduce was originally stated as three literal
//! conditions: slot start inside `[appt_start, appt_end)`, slot end inside
//! `(appt_start, appt_end]`, or the slot fully containing the appointment.
//! These properties pin the two forms together across boundary-adjacent
//! intervals.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use uuid::Uuid;

use scheduling_cell::models::{Appointment, AppointmentStatus, SlotGridConfig};
use scheduling_cell::services::slots::compute_slots;

fn test_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
}

fn day_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 20, 0, 0, 0).unwrap()
}

fn appointment(start_minutes: i64, duration_minutes: i32) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        patient_id: Uuid::new_v4(),
        practitioner_id: Uuid::new_v4(),
        date: day_start() + Duration::minutes(start_minutes),
        duration_minutes,
        status: AppointmentStatus::Scheduled,
        notes: None,
        created_at: day_start(),
        updated_at: day_start(),
    }
}

/// The literal three-condition rule, verbatim.
fn literal_overlap(
    slot_start: DateTime<Utc>,
    slot_end: DateTime<Utc>,
    appt_start: DateTime<Utc>,
    appt_end: DateTime<Utc>,
) -> bool {
    (slot_start >= appt_start && slot_start < appt_end)
        || (slot_end > appt_start && slot_end <= appt_end)
        || (slot_start <= appt_start && slot_end >= appt_end)
}

// ---------------------------------------------------------------------------
// Strategies — bias toward slot-boundary-aligned instants
// ---------------------------------------------------------------------------

/// Appointment start, in minutes from midnight. Mixes arbitrary instants with
/// exact 30-minute boundaries and off-by-one-minute neighbors, so that
/// shared-start and shared-end cases are exercised constantly.
fn arb_start_minutes() -> impl Strategy<Value = i64> {
    prop_oneof![
        -120i64..26 * 60,
        (0i64..=52).prop_map(|k| k * 30),
        (1i64..=52).prop_map(|k| k * 30 - 1),
        (0i64..=51).prop_map(|k| k * 30 + 1),
    ]
}

fn arb_duration_minutes() -> impl Strategy<Value = i32> {
    prop_oneof![
        1i32..=480,
        (1i32..=16).prop_map(|k| k * 30),
    ]
}

proptest! {
    /// Each slot's availability matches the literal three-condition rule.
    #[test]
    fn simplified_rule_matches_literal_rule(
        start_minutes in arb_start_minutes(),
        duration_minutes in arb_duration_minutes(),
    ) {
        let appt = appointment(start_minutes, duration_minutes);
        let appt_start = appt.date;
        let appt_end = appt.scheduled_end_time();

        let slots = compute_slots(
            test_day(),
            FixedOffset::east_opt(0).unwrap(),
            std::slice::from_ref(&appt),
            &SlotGridConfig::default(),
        ).unwrap();

        for slot in &slots {
            let expected = literal_overlap(slot.start_time, slot.end_time, appt_start, appt_end);
            prop_assert_eq!(
                !slot.available,
                expected,
                "slot {} disagrees with the literal rule for appointment {}..{}",
                slot.start_time, appt_start, appt_end
            );
        }
    }

    /// The grid shape is independent of the appointments scanned.
    #[test]
    fn grid_shape_is_invariant(
        start_minutes in arb_start_minutes(),
        duration_minutes in arb_duration_minutes(),
    ) {
        let appt = appointment(start_minutes, duration_minutes);

        let slots = compute_slots(
            test_day(),
            FixedOffset::east_opt(0).unwrap(),
            &[appt],
            &SlotGridConfig::default(),
        ).unwrap();

        prop_assert_eq!(slots.len(), 20);
        for pair in slots.windows(2) {
            prop_assert!(pair[0].start_time < pair[1].start_time);
            prop_assert_eq!(pair[0].end_time, pair[1].start_time);
        }
    }
}
