use crate::dtos::{AppointmentDTO, AvailableSlotDTO};
use clinic_scheduler_domain::ID;
use serde::{Deserialize, Serialize};

pub mod get_appointments {
    use super::*;

    pub type APIResponse = Vec<AppointmentDTO>;
}

pub mod get_available_slots {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub doctor_id: ID,
        pub date: String,
    }

    pub type APIResponse = Vec<AvailableSlotDTO>;
}
