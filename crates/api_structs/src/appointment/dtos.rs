use clinic_scheduler_domain::{Appointment, AppointmentStatus, ID};
use serde::{Deserialize, Serialize};

/// The backend is inconsistent about the doctor field on appointments;
/// depending on the endpoint it is a bare id or an embedded object.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum DoctorRefDTO {
    Id(ID),
    Embedded(EmbeddedDoctorDTO),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedDoctorDTO {
    pub id: ID,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl DoctorRefDTO {
    pub fn id(&self) -> &ID {
        match self {
            Self::Id(id) => id,
            Self::Embedded(doctor) => &doctor.id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDTO {
    pub id: ID,
    pub doctor_id: DoctorRefDTO,
    pub appointment_date: i64,
    pub status: AppointmentStatus,
}

impl AppointmentDTO {
    pub fn new(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            doctor_id: DoctorRefDTO::Id(appointment.doctor_id),
            appointment_date: appointment.appointment_date,
            status: appointment.status,
        }
    }
}

impl From<AppointmentDTO> for Appointment {
    fn from(dto: AppointmentDTO) -> Self {
        Self {
            id: dto.id,
            doctor_id: dto.doctor_id.id().clone(),
            appointment_date: dto.appointment_date,
            status: dto.status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSlotDTO {
    pub time: i64,
    pub doctor_id: ID,
}
