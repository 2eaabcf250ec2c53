use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveType {
    #[serde(rename = "IJIN")]
    Ijin,
    #[serde(rename = "SAKIT")]
    Sakit,
}

impl LeaveType {
    pub fn as_tag(&self) -> &'static str {
        match self {
            LeaveType::Ijin => "IJIN",
            LeaveType::Sakit => "SAKIT",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "IJIN" | "IZIN" => Some(LeaveType::Ijin),
            "SAKIT" => Some(LeaveType::Sakit),
            _ => None,
        }
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}
