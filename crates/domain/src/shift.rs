use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Wall-clock time of day for a shift boundary, 24-hour "HH:MM".
///
/// The derived ordering (hours, then minutes) is equivalent to lexical
/// ordering on the zero-padded string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShiftTime {
    pub hours: u32,
    pub minutes: u32,
}

#[derive(Error, Debug)]
pub enum InvalidShiftTimeError {
    #[error("Shift time: {0} is malformed, expected HH:MM")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum InvalidShiftSpanError {
    #[error("Shift start: {start} must be before shift end: {end}")]
    Unordered { start: ShiftTime, end: ShiftTime },
}

impl ShiftTime {
    pub fn new(hours: u32, minutes: u32) -> Result<Self, InvalidShiftTimeError> {
        if hours >= 24 || minutes >= 60 {
            return Err(InvalidShiftTimeError::Malformed(format!(
                "{}:{}",
                hours, minutes
            )));
        }
        Ok(Self { hours, minutes })
    }

    /// Checks the `start < end` ordering every client-constructed
    /// shift span must satisfy.
    pub fn validate_span(start: &ShiftTime, end: &ShiftTime) -> Result<(), InvalidShiftSpanError> {
        if start >= end {
            return Err(InvalidShiftSpanError::Unordered {
                start: *start,
                end: *end,
            });
        }
        Ok(())
    }
}

impl Display for ShiftTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for ShiftTime {
    type Err = InvalidShiftTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(':').collect::<Vec<_>>();
        if parts.len() != 2 {
            return Err(InvalidShiftTimeError::Malformed(s.to_string()));
        }
        let hours = parts[0].parse::<u32>();
        let minutes = parts[1].parse::<u32>();
        match (hours, minutes) {
            (Ok(hours), Ok(minutes)) => {
                Self::new(hours, minutes).map_err(|_| InvalidShiftTimeError::Malformed(s.to_string()))
            }
            _ => Err(InvalidShiftTimeError::Malformed(s.to_string())),
        }
    }
}

impl Serialize for ShiftTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ShiftTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ShiftTimeVisitor;

        impl<'de> Visitor<'de> for ShiftTimeVisitor {
            type Value = ShiftTime;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A time of day in HH:MM form")
            }

            fn visit_str<E>(self, value: &str) -> Result<ShiftTime, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<ShiftTime>()
                    .map_err(|_| E::custom(format!("Malformed shift time: {}", value)))
            }
        }

        deserializer.deserialize_str(ShiftTimeVisitor)
    }
}
