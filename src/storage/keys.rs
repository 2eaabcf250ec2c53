//! Keys of the local key-value area.

pub const RECORDS: &str = "guruhadir_records";
pub const PROFILE: &str = "guruhadir_user_profile";
pub const SCRIPT_URL: &str = "guruhadir_script_url";
pub const AUTHENTICATED: &str = "guruhadir_is_authenticated";
