use crate::shared::entity::{Entity, ID};
use serde::{de::Visitor, Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    // Statuses this client does not know about still occupy their slot
    Unknown,
}

impl AppointmentStatus {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl<'de> Deserialize<'de> for AppointmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct StatusVisitor;

        impl<'de> Visitor<'de> for StatusVisitor {
            type Value = AppointmentStatus;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("An appointment status string")
            }

            fn visit_str<E>(self, value: &str) -> Result<AppointmentStatus, E>
            where
                E: serde::de::Error,
            {
                Ok(match value {
                    "pending" => AppointmentStatus::Pending,
                    "confirmed" => AppointmentStatus::Confirmed,
                    "completed" => AppointmentStatus::Completed,
                    "cancelled" => AppointmentStatus::Cancelled,
                    _ => AppointmentStatus::Unknown,
                })
            }
        }

        deserializer.deserialize_str(StatusVisitor)
    }
}

/// An appointment as seen by the scheduling subsystem. Read-only here,
/// consulted only to decide which slots are already taken.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: ID,
    pub doctor_id: ID,
    /// Absolute timestamp in millis.
    pub appointment_date: i64,
    pub status: AppointmentStatus,
}

impl Entity for Appointment {
    fn id(&self) -> &ID {
        &self.id
    }
}
