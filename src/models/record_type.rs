use serde::{Deserialize, Serialize};

/// Tag of an attendance record as stored locally and sent to the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    #[serde(rename = "DATANG")]
    CheckIn,
    #[serde(rename = "PULANG")]
    CheckOut,
    #[serde(rename = "SPPD")]
    Sppd,
    #[serde(rename = "IJIN")]
    Leave,
}

impl RecordType {
    /// Convert enum → wire tag
    pub fn as_tag(&self) -> &'static str {
        match self {
            RecordType::CheckIn => "DATANG",
            RecordType::CheckOut => "PULANG",
            RecordType::Sppd => "SPPD",
            RecordType::Leave => "IJIN",
        }
    }

    /// Convert wire tag (or CLI alias) → enum
    pub fn from_tag(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "DATANG" | "IN" | "CHECKIN" | "CHECK_IN" => Some(RecordType::CheckIn),
            "PULANG" | "OUT" | "CHECKOUT" | "CHECK_OUT" => Some(RecordType::CheckOut),
            "SPPD" => Some(RecordType::Sppd),
            "IJIN" | "LEAVE" => Some(RecordType::Leave),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordType::CheckIn => "Absen Datang",
            RecordType::CheckOut => "Absen Pulang",
            RecordType::Sppd => "Laporan SPPD",
            RecordType::Leave => "Ijin / Sakit",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}
