pub mod auth;
pub mod compress;
pub mod log;
pub mod save;
pub mod store;

pub use auth::AuthLogic;
pub use save::{CompressOptions, SaveLogic, SaveReport};
pub use store::{AppendOutcome, RecordStore, StoreOptions};
