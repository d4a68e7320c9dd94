use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use tracing::info;

use gatherly_common::{BookingRecord, EventRecord, GatherlyError};

use crate::mongo::{BOOKINGS, EVENTS};

/// Declare the indexes this core relies on. Idempotent — MongoDB
/// treats re-creating an identical index as a no-op.
///
/// The two unique indexes are the correctness authority for slug
/// uniqueness and booking dedup; everything the writers do beforehand
/// is a fast path that may race and lose.
pub async fn ensure_indexes(db: &Database) -> Result<(), GatherlyError> {
    info!("ensuring store indexes");

    let events: Collection<EventRecord> = db.collection(EVENTS);
    events
        .create_index(unique_index(doc! { "slug": 1 }))
        .await
        .map_err(|e| GatherlyError::Store(e.to_string()))?;
    info!("unique index on events.slug ensured");

    let bookings: Collection<BookingRecord> = db.collection(BOOKINGS);
    bookings
        .create_index(unique_index(doc! { "eventId": 1, "email": 1 }))
        .await
        .map_err(|e| GatherlyError::Store(e.to_string()))?;
    info!("unique compound index on bookings.(eventId, email) ensured");

    // Non-unique lookup index for bookings-by-event queries.
    bookings
        .create_index(IndexModel::builder().keys(doc! { "eventId": 1 }).build())
        .await
        .map_err(|e| GatherlyError::Store(e.to_string()))?;
    info!("lookup index on bookings.eventId ensured");

    Ok(())
}

fn unique_index(keys: Document) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().unique(true).build())
        .build()
}
