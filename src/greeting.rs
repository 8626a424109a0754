//! Time-of-day greeting shown next to the current conditions.

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Greeting {
    /// Greeting for an hour of day (0-23). Hours outside that range fall into `Night`.
    #[must_use]
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            6..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            18..=21 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// Greeting for the current local wall-clock hour.
    #[must_use]
    pub fn now() -> Self {
        Self::for_hour(Local::now().hour())
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "Good Morning",
            Self::Afternoon => "Good Afternoon",
            Self::Evening => "Good Evening",
            Self::Night => "Good Night",
        }
    }

    /// Greeting line for the detail view, addressed to `name` when one is given.
    #[must_use]
    pub fn address(&self, name: Option<&str>) -> String {
        match name.map(str::trim) {
            Some(name) if !name.is_empty() => format!("{}, {}", self.as_str(), name),
            _ => self.as_str().to_string(),
        }
    }
}

impl Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
