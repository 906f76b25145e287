use crate::dtos::WorkScheduleDTO;
use clinic_scheduler_domain::date::weekday_index;
use clinic_scheduler_domain::{ScheduleOwner, ShiftTime, WorkScheduleDraft, ID};
use serde::{Deserialize, Serialize};

pub mod get_work_schedules {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub owner_id: ID,
    }

    pub type APIResponse = Vec<WorkScheduleDTO>;
}

pub mod create_work_schedule {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub doctor_id: Option<ID>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub lab_nurse_id: Option<ID>,
        pub day_of_week: u8,
        pub shift_start: ShiftTime,
        pub shift_end: ShiftTime,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub note: Option<String>,
    }

    impl RequestBody {
        pub fn new(draft: &WorkScheduleDraft) -> Self {
            let (doctor_id, lab_nurse_id) = match &draft.owner {
                ScheduleOwner::Doctor(id) => (Some(id.clone()), None),
                ScheduleOwner::LabNurse(id) => (None, Some(id.clone())),
            };
            Self {
                doctor_id,
                lab_nurse_id,
                day_of_week: weekday_index(&draft.day_of_week),
                shift_start: draft.shift_start,
                shift_end: draft.shift_end,
                note: draft.note.clone(),
            }
        }
    }

    pub type APIResponse = WorkScheduleDTO;
}

pub mod update_work_schedule {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub schedule_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub day_of_week: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub shift_start: Option<ShiftTime>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub shift_end: Option<ShiftTime>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub note: Option<String>,
    }

    pub type APIResponse = WorkScheduleDTO;
}

pub mod delete_work_schedule {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub schedule_id: ID,
    }
}
