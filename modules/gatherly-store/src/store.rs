//! Store capability traits consumed by the writers.
//!
//! Implementations:
//! - `MongoStore`: production MongoDB storage
//! - `MemoryStore`: in-memory double for tests
//!
//! Every operation is an async I/O boundary. Uniqueness under
//! concurrent writers is decided by the store's own constraints, not
//! by these methods: `insert_event` and `insert_booking` must report a
//! constraint violation as `DuplicateSlug` / `AlreadyBooked`
//! respectively, so callers can treat a lost race as a normal
//! conflict outcome.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use gatherly_common::{BookingRecord, EventRecord, GatherlyError};

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Fetch an event by id.
    async fn find_event(&self, id: Uuid) -> Result<Option<EventRecord>, GatherlyError>;

    /// Cheap existence probe by id (referential checks).
    async fn event_exists(&self, id: Uuid) -> Result<bool, GatherlyError>;

    /// True if a live event other than `exclude` already holds `slug`.
    async fn slug_exists(&self, slug: &str, exclude: Option<Uuid>)
        -> Result<bool, GatherlyError>;

    /// Insert a new event. The unique slug index is the final guard;
    /// a violation surfaces as `DuplicateSlug`.
    async fn insert_event(&self, record: &EventRecord) -> Result<(), GatherlyError>;

    /// Replace an existing event by id. Slug uniqueness is still
    /// enforced by the index (`DuplicateSlug` on violation).
    async fn update_event(&self, record: &EventRecord) -> Result<(), GatherlyError>;
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Fetch the booking for an (event, email) pair, if any.
    async fn find_booking(
        &self,
        event_id: Uuid,
        email: &str,
    ) -> Result<Option<BookingRecord>, GatherlyError>;

    /// Insert a new booking. The compound unique index on
    /// (eventId, email) is the final guard; a violation surfaces as
    /// `AlreadyBooked`.
    async fn insert_booking(&self, record: &BookingRecord) -> Result<(), GatherlyError>;
}

// Arc delegation so a store can be shared between a writer and test
// assertions.

#[async_trait]
impl<T: EventStore> EventStore for Arc<T> {
    async fn find_event(&self, id: Uuid) -> Result<Option<EventRecord>, GatherlyError> {
        (**self).find_event(id).await
    }

    async fn event_exists(&self, id: Uuid) -> Result<bool, GatherlyError> {
        (**self).event_exists(id).await
    }

    async fn slug_exists(
        &self,
        slug: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, GatherlyError> {
        (**self).slug_exists(slug, exclude).await
    }

    async fn insert_event(&self, record: &EventRecord) -> Result<(), GatherlyError> {
        (**self).insert_event(record).await
    }

    async fn update_event(&self, record: &EventRecord) -> Result<(), GatherlyError> {
        (**self).update_event(record).await
    }
}

#[async_trait]
impl<T: BookingStore> BookingStore for Arc<T> {
    async fn find_booking(
        &self,
        event_id: Uuid,
        email: &str,
    ) -> Result<Option<BookingRecord>, GatherlyError> {
        (**self).find_booking(event_id, email).await
    }

    async fn insert_booking(&self, record: &BookingRecord) -> Result<(), GatherlyError> {
        (**self).insert_booking(record).await
    }
}
