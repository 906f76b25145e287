use clinic_scheduler_domain::date::{weekday_from_index, weekday_index};
use clinic_scheduler_domain::{ScheduleOwner, ShiftTime, WorkSchedule, ID};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use thiserror::Error;

/// A work schedule as the backend sends it. The owner arrives as a
/// `doctorId`/`labNurseId` pair of which exactly one must be set;
/// decoding into the domain type fails loudly otherwise.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorkScheduleDTO {
    pub id: ID,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<ID>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lab_nurse_id: Option<ID>,
    pub day_of_week: u8,
    pub shift_start: ShiftTime,
    pub shift_end: ShiftTime,
    #[serde(default)]
    pub note: Option<String>,
}

impl WorkScheduleDTO {
    pub fn new(schedule: WorkSchedule) -> Self {
        let (doctor_id, lab_nurse_id) = match &schedule.owner {
            ScheduleOwner::Doctor(id) => (Some(id.clone()), None),
            ScheduleOwner::LabNurse(id) => (None, Some(id.clone())),
        };
        Self {
            id: schedule.id,
            doctor_id,
            lab_nurse_id,
            day_of_week: weekday_index(&schedule.day_of_week),
            shift_start: schedule.shift_start,
            shift_end: schedule.shift_end,
            note: schedule.note,
        }
    }
}

#[derive(Error, Debug)]
pub enum InvalidWorkScheduleDTOError {
    #[error("Work schedule: {0} has no owner")]
    MissingOwner(ID),
    #[error("Work schedule: {0} has both a doctor and a lab nurse owner")]
    AmbiguousOwner(ID),
    #[error("Work schedule: {0} has invalid day of week: {1}")]
    InvalidDayOfWeek(ID, u8),
}

impl TryFrom<WorkScheduleDTO> for WorkSchedule {
    type Error = InvalidWorkScheduleDTOError;

    fn try_from(dto: WorkScheduleDTO) -> Result<Self, Self::Error> {
        let owner = match (dto.doctor_id, dto.lab_nurse_id) {
            (Some(id), None) => ScheduleOwner::Doctor(id),
            (None, Some(id)) => ScheduleOwner::LabNurse(id),
            (Some(_), Some(_)) => {
                return Err(InvalidWorkScheduleDTOError::AmbiguousOwner(dto.id))
            }
            (None, None) => return Err(InvalidWorkScheduleDTOError::MissingOwner(dto.id)),
        };
        let day_of_week = weekday_from_index(dto.day_of_week).ok_or(
            InvalidWorkScheduleDTOError::InvalidDayOfWeek(dto.id.clone(), dto.day_of_week),
        )?;
        Ok(WorkSchedule {
            id: dto.id,
            owner,
            day_of_week,
            shift_start: dto.shift_start,
            shift_end: dto.shift_end,
            note: dto.note,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clinic_scheduler_domain::Weekday;

    fn dto(doctor_id: Option<ID>, lab_nurse_id: Option<ID>, day_of_week: u8) -> WorkScheduleDTO {
        WorkScheduleDTO {
            id: ID::new(),
            doctor_id,
            lab_nurse_id,
            day_of_week,
            shift_start: "08:00".parse().unwrap(),
            shift_end: "12:00".parse().unwrap(),
            note: None,
        }
    }

    #[test]
    fn it_decodes_a_doctor_owned_schedule() {
        let doctor_id = ID::new();
        let schedule = WorkSchedule::try_from(dto(Some(doctor_id.clone()), None, 1)).unwrap();
        assert_eq!(schedule.owner, ScheduleOwner::Doctor(doctor_id));
        assert_eq!(schedule.day_of_week, Weekday::Mon);
    }

    #[test]
    fn it_decodes_a_nurse_owned_schedule() {
        let nurse_id = ID::new();
        let schedule = WorkSchedule::try_from(dto(None, Some(nurse_id.clone()), 0)).unwrap();
        assert_eq!(schedule.owner, ScheduleOwner::LabNurse(nurse_id));
        assert_eq!(schedule.day_of_week, Weekday::Sun);
    }

    #[test]
    fn it_rejects_missing_and_ambiguous_owners() {
        assert!(WorkSchedule::try_from(dto(None, None, 1)).is_err());
        assert!(WorkSchedule::try_from(dto(Some(ID::new()), Some(ID::new()), 1)).is_err());
    }

    #[test]
    fn it_rejects_out_of_range_day_of_week() {
        assert!(WorkSchedule::try_from(dto(Some(ID::new()), None, 7)).is_err());
    }

    #[test]
    fn owner_roundtrips_through_the_wire_pair() {
        let schedule = WorkSchedule {
            id: ID::new(),
            owner: ScheduleOwner::LabNurse(ID::new()),
            day_of_week: Weekday::Sat,
            shift_start: "13:00".parse().unwrap(),
            shift_end: "17:00".parse().unwrap(),
            note: Some("Afternoon shift".into()),
        };
        let dto = WorkScheduleDTO::new(schedule.clone());
        assert!(dto.doctor_id.is_none());
        assert_eq!(dto.day_of_week, 6);
        let decoded = WorkSchedule::try_from(dto).unwrap();
        assert_eq!(decoded, schedule);
    }
}
