pub mod initialize;
pub mod keys;
pub mod kv;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod sqlite;

pub use kv::{KeyValueStore, MemoryKv};
pub use pool::DbPool;
pub use sqlite::SqliteKv;
