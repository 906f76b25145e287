mod appointment;
mod envelope;
mod work_schedule;

pub mod dtos {
    pub use crate::appointment::dtos::*;
    pub use crate::work_schedule::dtos::*;
}

pub use crate::appointment::api::*;
pub use crate::envelope::Enveloped;
pub use crate::work_schedule::api::*;
