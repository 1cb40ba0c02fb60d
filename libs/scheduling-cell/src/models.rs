// libs/scheduling-cell/src/models.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use std::fmt;

use shared_config::AppConfig;

// ==============================================================================
// CORE SCHEDULING MODELS
// ==============================================================================

/// An appointment as stored in the backend. Read-only from this cell's point
/// of view; bookings and edits happen elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub practitioner_id: Uuid,
    pub date: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// End of the occupied interval `[date, date + duration_minutes)`.
    pub fn scheduled_end_time(&self) -> DateTime<Utc> {
        self.date + chrono::Duration::minutes(self.duration_minutes as i64)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    Missed,
    Rescheduled,
}

impl AppointmentStatus {
    /// Whether an appointment in this status blocks time on the schedule.
    /// Cancelled and missed appointments occupy nothing.
    pub fn occupies_time(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled | AppointmentStatus::Missed)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::Missed => write!(f, "missed"),
            AppointmentStatus::Rescheduled => write!(f, "rescheduled"),
        }
    }
}

// ==============================================================================
// SLOT GRID MODELS
// ==============================================================================

/// A bookable window on the day grid. Derived on every computation, never
/// persisted. The interval is half-open: `[start_time, end_time)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub available: bool,
    pub occupying_appointment_id: Option<Uuid>,
}

/// Working-day parameters for slot generation. Hours are local to the
/// caller-supplied offset; `work_end_hour` is exclusive.
#[derive(Debug, Clone)]
pub struct SlotGridConfig {
    pub work_start_hour: u32,
    pub work_end_hour: u32,
    pub slot_duration_minutes: u32,
}

impl Default for SlotGridConfig {
    fn default() -> Self {
        Self {
            work_start_hour: 8,
            work_end_hour: 18,
            slot_duration_minutes: 30,
        }
    }
}

impl SlotGridConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            work_start_hour: config.work_start_hour,
            work_end_hour: config.work_end_hour,
            slot_duration_minutes: config.slot_duration_minutes,
        }
    }

    pub fn validate(&self) -> Result<(), SchedulingError> {
        if self.work_end_hour > 24 {
            return Err(SchedulingError::InvalidArgument(format!(
                "work_end_hour must be at most 24, got {}",
                self.work_end_hour
            )));
        }
        if self.work_start_hour >= self.work_end_hour {
            return Err(SchedulingError::InvalidArgument(format!(
                "work_start_hour {} must be before work_end_hour {}",
                self.work_start_hour, self.work_end_hour
            )));
        }
        if self.slot_duration_minutes == 0 {
            return Err(SchedulingError::InvalidArgument(
                "slot_duration_minutes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum SchedulingError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
