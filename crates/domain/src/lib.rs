mod appointment;
pub mod availability;
pub mod date;
mod quick_create;
mod shared;
mod shift;
mod work_schedule;

pub use appointment::{Appointment, AppointmentStatus};
pub use availability::{booked_timestamps, resolve_time_slots, TimeSlot};
pub use quick_create::{QuickCreateError, QuickSchedulePlan, ShiftTemplate};
pub use shared::entity::{Entity, ID, InvalidIDError};
pub use shift::{InvalidShiftSpanError, InvalidShiftTimeError, ShiftTime};
pub use work_schedule::{ScheduleOwner, WorkSchedule, WorkScheduleDraft};

pub use chrono::Weekday;
pub use chrono_tz::{Tz, UTC};
