use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Horario de entrega devuelto por el backend (inmutable en el cliente)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    /// Inicio del horario en ISO-8601
    pub time: String,
    #[serde(default)]
    pub display: String,
    pub available: bool,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub remaining_capacity: Option<u32>,
}

impl TimeSlot {
    pub fn starts_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.time).ok()
    }

    /// Etiqueta visible: `display` del backend o HH:MM derivado de `time`
    pub fn label(&self) -> String {
        if !self.display.trim().is_empty() {
            return self.display.clone();
        }
        match self.starts_at() {
            Some(start) => start.format("%H:%M").to_string(),
            None => self.time.clone(),
        }
    }
}
