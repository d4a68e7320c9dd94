pub mod client;
pub mod memory;
pub mod migrate;
pub mod mongo;
pub mod store;

#[cfg(feature = "test-utils")]
pub mod testutil;

pub use client::{shared_database, StoreClient};
pub use memory::MemoryStore;
pub use migrate::ensure_indexes;
pub use mongo::MongoStore;
pub use store::{BookingStore, EventStore};
