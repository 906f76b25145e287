use crate::base::{APIError, APIResponse, BaseClient};
use clinic_scheduler_api_structs::*;
use clinic_scheduler_domain::date::local_day_window;
use clinic_scheduler_domain::{
    booked_timestamps, resolve_time_slots, Appointment, TimeSlot, Tz, ID, UTC,
};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppointmentClient {
    base: Arc<BaseClient>,
}

pub struct GetAvailableSlotsInput {
    pub doctor_id: ID,
    /// Calendar date "YYYY-MM-DD"
    pub date: String,
}

pub struct GetDayAvailabilityInput {
    pub doctor_id: ID,
    /// Calendar date "YYYY-MM-DD"
    pub date: String,
    /// Timezone the day window is computed in, UTC when unset
    pub timezone: Option<Tz>,
}

impl AppointmentClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self) -> APIResponse<Vec<Appointment>> {
        let dtos: get_appointments::APIResponse =
            self.base.get("appointments".into(), StatusCode::OK).await?;
        Ok(dtos.into_iter().map(Appointment::from).collect())
    }

    pub async fn get_available_slots(
        &self,
        input: GetAvailableSlotsInput,
    ) -> APIResponse<get_available_slots::APIResponse> {
        self.base
            .get(
                format!(
                    "appointments/doctors/available-slots?doctorId={}&date={}",
                    input.doctor_id, input.date
                ),
                StatusCode::OK,
            )
            .await
    }

    /// Every candidate slot for the doctor on the given date, annotated
    /// with whether an appointment already occupies it. The offered-slot
    /// template and the appointment list are fetched concurrently since
    /// neither depends on the other.
    pub async fn get_day_availability(
        &self,
        input: GetDayAvailabilityInput,
    ) -> APIResponse<Vec<TimeSlot>> {
        let timezone = input.timezone.unwrap_or(UTC);
        let window =
            local_day_window(&input.date, &timezone).map_err(APIError::bad_client_data)?;

        let slots = self.get_available_slots(GetAvailableSlotsInput {
            doctor_id: input.doctor_id.clone(),
            date: input.date.clone(),
        });
        let appointments = self.list();
        let (slots, appointments) = futures::try_join!(slots, appointments)?;

        let candidates = slots.iter().map(|slot| slot.time).collect::<Vec<_>>();
        let booked = booked_timestamps(&appointments, &input.doctor_id, &window);

        let out_of_template = booked
            .iter()
            .filter(|&ts| !candidates.contains(ts))
            .count();
        if out_of_template > 0 {
            tracing::warn!(
                "Doctor {} has {} booked appointment(s) outside the offered slot template on {}",
                input.doctor_id,
                out_of_template,
                input.date
            );
        }

        Ok(resolve_time_slots(&input.doctor_id, &candidates, &booked))
    }
}
