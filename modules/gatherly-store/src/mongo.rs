use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::{Collection, Database};
use uuid::Uuid;

use gatherly_common::{BookingRecord, EventRecord, GatherlyError};

use crate::store::{BookingStore, EventStore};

pub(crate) const EVENTS: &str = "events";
pub(crate) const BOOKINGS: &str = "bookings";

/// Production store backed by MongoDB. Cheap to clone; collections are
/// handles to the shared underlying client.
#[derive(Clone)]
pub struct MongoStore {
    events: Collection<EventRecord>,
    bookings: Collection<BookingRecord>,
}

impl MongoStore {
    pub fn new(db: &Database) -> Self {
        Self {
            events: db.collection(EVENTS),
            bookings: db.collection(BOOKINGS),
        }
    }
}

/// A write rejected by a unique index reports server code 11000.
fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(*err.kind, ErrorKind::Write(WriteFailure::WriteError(ref e)) if e.code == 11000)
}

fn store_err(err: MongoError) -> GatherlyError {
    GatherlyError::Store(err.to_string())
}

#[async_trait]
impl EventStore for MongoStore {
    async fn find_event(&self, id: Uuid) -> Result<Option<EventRecord>, GatherlyError> {
        self.events
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(store_err)
    }

    async fn event_exists(&self, id: Uuid) -> Result<bool, GatherlyError> {
        Ok(self.find_event(id).await?.is_some())
    }

    async fn slug_exists(
        &self,
        slug: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, GatherlyError> {
        let filter = match exclude {
            Some(id) => doc! { "slug": slug, "_id": { "$ne": id.to_string() } },
            None => doc! { "slug": slug },
        };
        let found = self
            .events
            .find_one(filter)
            .await
            .map_err(store_err)?;
        Ok(found.is_some())
    }

    async fn insert_event(&self, record: &EventRecord) -> Result<(), GatherlyError> {
        self.events.insert_one(record).await.map_err(|e| {
            if is_duplicate_key(&e) {
                GatherlyError::DuplicateSlug(record.slug.clone())
            } else {
                store_err(e)
            }
        })?;
        Ok(())
    }

    async fn update_event(&self, record: &EventRecord) -> Result<(), GatherlyError> {
        self.events
            .replace_one(doc! { "_id": record.id.to_string() }, record)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    GatherlyError::DuplicateSlug(record.slug.clone())
                } else {
                    store_err(e)
                }
            })?;
        Ok(())
    }
}

#[async_trait]
impl BookingStore for MongoStore {
    async fn find_booking(
        &self,
        event_id: Uuid,
        email: &str,
    ) -> Result<Option<BookingRecord>, GatherlyError> {
        self.bookings
            .find_one(doc! { "eventId": event_id.to_string(), "email": email })
            .await
            .map_err(store_err)
    }

    async fn insert_booking(&self, record: &BookingRecord) -> Result<(), GatherlyError> {
        self.bookings.insert_one(record).await.map_err(|e| {
            if is_duplicate_key(&e) {
                GatherlyError::AlreadyBooked
            } else {
                store_err(e)
            }
        })?;
        Ok(())
    }
}
