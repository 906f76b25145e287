use crate::shared::entity::{Entity, ID};
use crate::shift::{InvalidShiftSpanError, ShiftTime};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// The staff member a recurring shift belongs to. A schedule always has
/// exactly one owner kind, never both, never neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ScheduleOwner {
    Doctor(ID),
    LabNurse(ID),
}

impl ScheduleOwner {
    pub fn id(&self) -> &ID {
        match self {
            Self::Doctor(id) => id,
            Self::LabNurse(id) => id,
        }
    }

    pub fn is_doctor(&self) -> bool {
        matches!(self, Self::Doctor(_))
    }

    pub fn is_lab_nurse(&self) -> bool {
        matches!(self, Self::LabNurse(_))
    }
}

/// A recurring weekly commitment for one staff member, as the backend
/// holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkSchedule {
    pub id: ID,
    pub owner: ScheduleOwner,
    pub day_of_week: Weekday,
    pub shift_start: ShiftTime,
    pub shift_end: ShiftTime,
    pub note: Option<String>,
}

impl Entity for WorkSchedule {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// A schedule the client intends to create. Drafts have no id, the
/// backend assigns one on creation.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkScheduleDraft {
    pub owner: ScheduleOwner,
    pub day_of_week: Weekday,
    pub shift_start: ShiftTime,
    pub shift_end: ShiftTime,
    pub note: Option<String>,
}

impl WorkScheduleDraft {
    pub fn new(
        owner: ScheduleOwner,
        day_of_week: Weekday,
        shift_start: ShiftTime,
        shift_end: ShiftTime,
        note: Option<String>,
    ) -> Result<Self, InvalidShiftSpanError> {
        ShiftTime::validate_span(&shift_start, &shift_end)?;
        Ok(Self {
            owner,
            day_of_week,
            shift_start,
            shift_end,
            note,
        })
    }
}
