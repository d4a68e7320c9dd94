use tracing::info;
use uuid::Uuid;

use gatherly_common::{normalize::normalize_email, BookingRecord, GatherlyError};
use gatherly_store::{BookingStore, EventStore};

/// Write side for bookings: at most one booking per (event, email).
pub struct BookingWriter<S: EventStore + BookingStore> {
    store: S,
}

impl<S: EventStore + BookingStore> BookingWriter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Book an event for an email address.
    ///
    /// Pipeline: validate email → duplicate pre-check → referential
    /// check on the event → persist. The pre-check is a fast path
    /// only; if a concurrent writer wins between the check and the
    /// insert, the compound unique index rejects the insert and that
    /// too surfaces as `AlreadyBooked`.
    pub async fn create_booking(
        &self,
        event_id: Uuid,
        email: &str,
    ) -> Result<BookingRecord, GatherlyError> {
        let email = normalize_email(email)?;

        if self.store.find_booking(event_id, &email).await?.is_some() {
            return Err(GatherlyError::AlreadyBooked);
        }

        if !self.store.event_exists(event_id).await? {
            return Err(GatherlyError::EventNotFound(event_id));
        }

        let record = BookingRecord::new(event_id, email);
        self.store.insert_booking(&record).await?;
        info!(id = %record.id, event_id = %record.event_id, "booking created");
        Ok(record)
    }
}
