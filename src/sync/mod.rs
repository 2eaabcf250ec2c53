//! Best-effort mirror of local records to the spreadsheet backend.

pub mod client;
pub mod transport;

pub use client::{RemoteUser, SyncClient, SyncStatus};
pub use transport::{HttpTransport, Transport};
