use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayStatus {
    pub has_checked_in_today: bool,
    pub has_checked_out_today: bool,
    pub last_check_in_time: Option<i64>,
}
