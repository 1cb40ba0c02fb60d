use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{FixedOffset, NaiveDate};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::SlotGridConfig;
use crate::services::appointments::AppointmentService;
use crate::services::slots::compute_slots;

#[derive(Debug, Deserialize)]
pub struct DayScheduleQuery {
    pub date: NaiveDate,
    pub utc_offset_minutes: Option<i32>,
}

fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, AppError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            AppError::BadRequest(format!("utc_offset_minutes out of range: {}", minutes))
        })
}

/// Slot grid for a single day: every bookable window between the working
/// hours, occupied ones included, in display order.
#[axum::debug_handler]
pub async fn get_day_schedule(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<DayScheduleQuery>,
) -> Result<Json<Value>, AppError> {
    let offset_minutes = query.utc_offset_minutes.unwrap_or(0);
    let offset = offset_from_minutes(offset_minutes)?;

    let appointment_service = AppointmentService::new(&state);
    let appointments = appointment_service
        .appointments_for_day(query.date, offset)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let grid_config = SlotGridConfig::from_app_config(&state);
    let slots = compute_slots(query.date, offset, &appointments, &grid_config)
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let available_slots = slots.iter().filter(|slot| slot.available).count();

    Ok(Json(json!({
        "date": query.date,
        "utc_offset_minutes": offset_minutes,
        "total_slots": slots.len(),
        "available_slots": available_slots,
        "slots": slots,
    })))
}

/// The raw appointment list the grid is derived from.
#[axum::debug_handler]
pub async fn list_day_appointments(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<DayScheduleQuery>,
) -> Result<Json<Value>, AppError> {
    let offset = offset_from_minutes(query.utc_offset_minutes.unwrap_or(0))?;

    let appointment_service = AppointmentService::new(&state);
    let appointments = appointment_service
        .appointments_for_day(query.date, offset)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!({
        "date": query.date,
        "total": appointments.len(),
        "appointments": appointments,
    })))
}
