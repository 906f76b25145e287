use crate::appointment::Appointment;
use crate::date::DayWindow;
use crate::shared::entity::ID;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// A single bookable point in time for a doctor, annotated with whether
/// an appointment already occupies it.
#[derive(Serialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub time: i64,
    pub doctor_id: ID,
    pub is_booked: bool,
}

/// Timestamps of the doctor's appointments inside the day window that
/// still occupy a slot. Cancelled appointments never count.
pub fn booked_timestamps(
    appointments: &[Appointment],
    doctor_id: &ID,
    window: &DayWindow,
) -> BTreeSet<i64> {
    appointments
        .iter()
        .filter(|appointment| &appointment.doctor_id == doctor_id)
        .filter(|appointment| window.contains(appointment.appointment_date))
        .filter(|appointment| !appointment.status.is_cancelled())
        .map(|appointment| appointment.appointment_date)
        .collect()
}

/// Merges the offered slot template with the booked set.
///
/// Every candidate is kept and marked. A booked timestamp outside the
/// offered template (an appointment created outside the normal flow)
/// still takes up a slot, so it is appended as a booked entry of its
/// own. The result is sorted ascending by time.
pub fn resolve_time_slots(
    doctor_id: &ID,
    candidates: &[i64],
    booked: &BTreeSet<i64>,
) -> Vec<TimeSlot> {
    let offered = candidates.iter().copied().collect::<HashSet<_>>();

    let mut slots = candidates
        .iter()
        .map(|&time| TimeSlot {
            time,
            doctor_id: doctor_id.clone(),
            is_booked: booked.contains(&time),
        })
        .collect::<Vec<_>>();

    for &time in booked {
        if !offered.contains(&time) {
            slots.push(TimeSlot {
                time,
                doctor_id: doctor_id.clone(),
                is_booked: true,
            });
        }
    }

    slots.sort_by_key(|slot| slot.time);

    slots
}
