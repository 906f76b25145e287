use crate::date::weekday_index;
use crate::shift::{InvalidShiftSpanError, ShiftTime};
use crate::work_schedule::{ScheduleOwner, WorkScheduleDraft};
use chrono::Weekday;
use itertools::Itertools;
use std::collections::HashSet;
use thiserror::Error;

/// One shift row of the quick-create form.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftTemplate {
    pub start: ShiftTime,
    pub end: ShiftTime,
    pub note: Option<String>,
}

#[derive(Error, Debug)]
pub enum QuickCreateError {
    #[error("No weekdays selected")]
    EmptyDays,
    #[error("No shifts provided")]
    EmptyShifts,
    #[error(transparent)]
    InvalidShift(#[from] InvalidShiftSpanError),
}

/// A compact day x shift selection that expands into individual
/// `WorkSchedule` creation drafts.
///
/// The owner is a tagged union, so a plan without an owner, or with
/// both a doctor and a lab nurse, cannot be represented. Replacing the
/// owner replaces it wholesale.
#[derive(Debug, Clone)]
pub struct QuickSchedulePlan {
    owner: ScheduleOwner,
    days: HashSet<Weekday>,
    shifts: Vec<ShiftTemplate>,
}

impl QuickSchedulePlan {
    pub fn new(owner: ScheduleOwner) -> Self {
        Self {
            owner,
            days: HashSet::new(),
            shifts: Vec::new(),
        }
    }

    pub fn owner(&self) -> &ScheduleOwner {
        &self.owner
    }

    pub fn set_owner(&mut self, owner: ScheduleOwner) {
        self.owner = owner;
    }

    /// Toggles a weekday's membership and reports whether it is now
    /// selected.
    pub fn toggle_day(&mut self, day: Weekday) -> bool {
        if self.days.remove(&day) {
            false
        } else {
            self.days.insert(day);
            true
        }
    }

    /// Selected weekdays, ordered Sunday first.
    pub fn selected_days(&self) -> Vec<Weekday> {
        self.days
            .iter()
            .copied()
            .sorted_by_key(weekday_index)
            .collect()
    }

    pub fn add_shift(&mut self, shift: ShiftTemplate) {
        self.shifts.push(shift);
    }

    /// Removes a shift row. The last remaining shift cannot be removed.
    pub fn remove_shift(&mut self, index: usize) -> bool {
        if index >= self.shifts.len() || self.shifts.len() == 1 {
            return false;
        }
        self.shifts.remove(index);
        true
    }

    pub fn shifts(&self) -> &[ShiftTemplate] {
        &self.shifts
    }

    /// Number of records expansion will produce, shown to the user as a
    /// confirmation preview before submission.
    pub fn record_count(&self) -> usize {
        self.days.len() * self.shifts.len()
    }

    /// Expands the plan into the full day x shift cross-product of
    /// creation drafts. Validation failures produce no drafts at all.
    pub fn expand(&self) -> Result<Vec<WorkScheduleDraft>, QuickCreateError> {
        if self.days.is_empty() {
            return Err(QuickCreateError::EmptyDays);
        }
        if self.shifts.is_empty() {
            return Err(QuickCreateError::EmptyShifts);
        }

        let days = self.selected_days();

        let mut drafts = Vec::with_capacity(self.record_count());
        for (day, shift) in days.into_iter().cartesian_product(self.shifts.iter()) {
            drafts.push(WorkScheduleDraft::new(
                self.owner.clone(),
                day,
                shift.start,
                shift.end,
                shift.note.clone(),
            )?);
        }

        Ok(drafts)
    }
}
