use serde::{Deserialize, Serialize};

/// Identity of the teacher using this device. One per device, last write wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub nip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserProfile {
    /// Merge an update into an existing profile.
    /// `name`/`nip` always win; photo and role only when supplied.
    pub fn merged(
        current: Option<UserProfile>,
        name: &str,
        nip: &str,
        photo_url: Option<&str>,
        role: Option<&str>,
    ) -> Self {
        let (old_photo, old_role) = match current {
            Some(p) => (p.photo_url, p.role),
            None => (None, None),
        };

        Self {
            name: name.to_string(),
            nip: nip.to_string(),
            photo_url: photo_url.map(str::to_string).or(old_photo),
            role: role.map(str::to_string).or(old_role),
        }
    }
}
