pub mod cloud;
pub mod leave_type;
pub mod profile;
pub mod record;
pub mod record_type;
pub mod today;

pub use cloud::CloudAttendance;
pub use leave_type::LeaveType;
pub use profile::UserProfile;
pub use record::{LeaveDetails, Record, RecordKind, SppdDetails};
pub use record_type::RecordType;
pub use today::TodayStatus;
