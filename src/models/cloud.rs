use serde::{Deserialize, Serialize};

/// One row of the school-wide "today" recap served by the sheet backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudAttendance {
    pub timestamp: String,
    pub time: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
}

impl CloudAttendance {
    /// `HH:MM` part of the server time column.
    pub fn short_time(&self) -> &str {
        self.time.get(..5).unwrap_or(&self.time)
    }

    pub fn location_or_default(&self) -> &str {
        if self.location.trim().is_empty() {
            "Lokasi GPS"
        } else {
            &self.location
        }
    }
}
