use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use tracing::debug;

use crate::models::{Appointment, SchedulingError, SlotGridConfig, TimeSlot};

/// Compute the full slot grid for one working day.
///
/// Produces every `slot_duration_minutes`-wide window from `work_start_hour`
/// up to (excluding) `work_end_hour`, anchored at midnight of `day` in the
/// caller's `offset`, in chronological order. Each slot is marked occupied by
/// the first appointment in input order that overlaps it; cancelled and
/// missed appointments never occupy time. Inputs are not mutated and the
/// result is recomputed from scratch on every call.
pub fn compute_slots(
    day: NaiveDate,
    offset: FixedOffset,
    appointments: &[Appointment],
    config: &SlotGridConfig,
) -> Result<Vec<TimeSlot>, SchedulingError> {
    config.validate()?;

    for appointment in appointments {
        if appointment.duration_minutes <= 0 {
            return Err(SchedulingError::InvalidArgument(format!(
                "appointment {} has non-positive duration {}",
                appointment.id, appointment.duration_minutes
            )));
        }
    }

    // Anchor for every generated timestamp: midnight of the requested day in
    // the caller's offset.
    let midnight = day
        .and_time(NaiveTime::MIN)
        .and_local_timezone(offset)
        .single()
        .ok_or_else(|| {
            SchedulingError::InvalidArgument(format!(
                "day {} is not representable at offset {}",
                day, offset
            ))
        })?
        .with_timezone(&Utc);

    let window_start = midnight + Duration::hours(config.work_start_hour as i64);
    let window_end = midnight + Duration::hours(config.work_end_hour as i64);
    let step = Duration::minutes(config.slot_duration_minutes as i64);

    let mut slots = Vec::new();
    let mut current = window_start;

    while current + step <= window_end {
        let slot_end = current + step;

        // First overlapping appointment in input order wins.
        let occupying = appointments.iter().find(|appointment| {
            appointment.status.occupies_time()
                && overlaps(
                    current,
                    slot_end,
                    appointment.date,
                    appointment.scheduled_end_time(),
                )
        });

        slots.push(TimeSlot {
            start_time: current,
            end_time: slot_end,
            available: occupying.is_none(),
            occupying_appointment_id: occupying.map(|appointment| appointment.id),
        });

        current = slot_end;
    }

    debug!(
        "Computed {} slots for {} ({} occupied)",
        slots.len(),
        day,
        slots.iter().filter(|slot| !slot.available).count()
    );

    Ok(slots)
}

/// Half-open interval intersection: `[slot_start, slot_end)` meets
/// `[appointment_start, appointment_end)`.
fn overlaps(
    slot_start: DateTime<Utc>,
    slot_end: DateTime<Utc>,
    appointment_start: DateTime<Utc>,
    appointment_end: DateTime<Utc>,
) -> bool {
    slot_start < appointment_end && slot_end > appointment_start
}
