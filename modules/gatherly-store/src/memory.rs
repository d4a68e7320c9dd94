//! In-memory store for testing. Mirrors the unique indexes the real
//! store declares (events.slug, bookings.(eventId, email)) so writer
//! code sees the same conflict outcomes without a database. Thread-safe
//! and shareable via `Arc` for concurrent-writer tests.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use gatherly_common::{BookingRecord, EventRecord, GatherlyError};

use crate::store::{BookingStore, EventStore};

#[derive(Default)]
pub struct MemoryStore {
    events: Mutex<Vec<EventRecord>>,
    bookings: Mutex<Vec<BookingRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of stored events (for test assertions).
    pub fn events(&self) -> Vec<EventRecord> {
        self.events.lock().unwrap().clone()
    }

    /// Snapshot of stored bookings (for test assertions).
    pub fn bookings(&self) -> Vec<BookingRecord> {
        self.bookings.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn find_event(&self, id: Uuid) -> Result<Option<EventRecord>, GatherlyError> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn event_exists(&self, id: Uuid) -> Result<bool, GatherlyError> {
        Ok(self.events.lock().unwrap().iter().any(|e| e.id == id))
    }

    async fn slug_exists(
        &self,
        slug: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, GatherlyError> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .any(|e| e.slug == slug && Some(e.id) != exclude))
    }

    async fn insert_event(&self, record: &EventRecord) -> Result<(), GatherlyError> {
        // Lock held for check + insert so the uniqueness decision is
        // atomic, like the real index.
        let mut events = self.events.lock().unwrap();
        if events.iter().any(|e| e.slug == record.slug) {
            return Err(GatherlyError::DuplicateSlug(record.slug.clone()));
        }
        events.push(record.clone());
        Ok(())
    }

    async fn update_event(&self, record: &EventRecord) -> Result<(), GatherlyError> {
        let mut events = self.events.lock().unwrap();
        if events
            .iter()
            .any(|e| e.slug == record.slug && e.id != record.id)
        {
            return Err(GatherlyError::DuplicateSlug(record.slug.clone()));
        }
        if let Some(existing) = events.iter_mut().find(|e| e.id == record.id) {
            *existing = record.clone();
        }
        Ok(())
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn find_booking(
        &self,
        event_id: Uuid,
        email: &str,
    ) -> Result<Option<BookingRecord>, GatherlyError> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.event_id == event_id && b.email == email)
            .cloned())
    }

    async fn insert_booking(&self, record: &BookingRecord) -> Result<(), GatherlyError> {
        let mut bookings = self.bookings.lock().unwrap();
        if bookings
            .iter()
            .any(|b| b.event_id == record.event_id && b.email == record.email)
        {
            return Err(GatherlyError::AlreadyBooked);
        }
        bookings.push(record.clone());
        Ok(())
    }
}
