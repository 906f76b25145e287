mod appointment;
mod base;
mod work_schedule;

use appointment::AppointmentClient;
use std::sync::Arc;
use work_schedule::WorkScheduleClient;

pub(crate) use base::BaseClient;

pub use base::{APIError, APIErrorVariant, APIResponse};

pub use appointment::{GetAvailableSlotsInput, GetDayAvailabilityInput};
pub use work_schedule::{
    CreateWorkScheduleInput, QuickCreateBatchError, QuickCreateFailure, QuickCreateReport,
    UpdateWorkScheduleInput,
};

pub use clinic_scheduler_api_structs::dtos::*;
pub use clinic_scheduler_domain::{
    Appointment, AppointmentStatus, QuickCreateError, QuickSchedulePlan, ScheduleOwner,
    ShiftTemplate, ShiftTime, TimeSlot, WorkSchedule, WorkScheduleDraft, ID,
};

pub use clinic_scheduler_domain::Tz;
pub use clinic_scheduler_domain::Weekday;

/// Clinic Scheduler SDK
///
/// The SDK contains methods for interacting with the clinic management
/// server's scheduling API.
#[derive(Clone)]
pub struct ClinicSDK {
    pub appointment: AppointmentClient,
    pub work_schedule: WorkScheduleClient,
}

impl ClinicSDK {
    pub fn new<T: Into<String>>(address: String, api_token: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_api_token(api_token.into());
        let base = Arc::new(base);
        let appointment = AppointmentClient::new(base.clone());
        let work_schedule = WorkScheduleClient::new(base);

        Self {
            appointment,
            work_schedule,
        }
    }
}
