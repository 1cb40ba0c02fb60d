use anyhow::{Result, anyhow};
use chrono::{Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::Appointment;

pub struct AppointmentService {
    supabase: SupabaseClient,
}

impl AppointmentService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    /// Fetch every appointment starting on `date` in the caller's offset,
    /// ordered by start time.
    ///
    /// All statuses are returned; excluding cancelled and missed
    /// appointments is the slot computation's responsibility.
    pub async fn appointments_for_day(
        &self,
        date: NaiveDate,
        offset: FixedOffset,
    ) -> Result<Vec<Appointment>> {
        debug!("Fetching appointments for {}", date);

        let day_start = date
            .and_time(NaiveTime::MIN)
            .and_local_timezone(offset)
            .single()
            .ok_or_else(|| anyhow!("day {} is not representable at offset {}", date, offset))?
            .with_timezone(&Utc);
        let day_end = day_start + Duration::days(1);

        let path = format!(
            "/rest/v1/appointments?date=gte.{}&date=lt.{}&order=date.asc",
            urlencoding::encode(&day_start.to_rfc3339()),
            urlencoding::encode(&day_end.to_rfc3339())
        );

        let result: Vec<Value> = self.supabase.request(
            Method::GET,
            &path,
            None,
            None,
        ).await?;

        let appointments: Vec<Appointment> = result.into_iter()
            .map(|appointment| serde_json::from_value(appointment))
            .collect::<std::result::Result<Vec<Appointment>, _>>()?;

        debug!("Found {} appointments for {}", appointments.len(), date);
        Ok(appointments)
    }
}
