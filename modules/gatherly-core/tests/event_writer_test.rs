//! Behavior tests for the event write pipeline, driven through the
//! in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use gatherly_common::{EventDraft, EventRecord, GatherlyError};
use gatherly_core::EventWriter;
use gatherly_store::{EventStore, MemoryStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn draft(title: &str) -> EventDraft {
    EventDraft {
        id: None,
        title: title.into(),
        description: "An evening of talks".into(),
        overview: "Talks, demos and pizza".into(),
        image: "https://example.com/cover.png".into(),
        venue: "Main Hall".into(),
        location: "Lisbon".into(),
        date: "2026-04-22".into(),
        time: "9:00 AM".into(),
        mode: "in-person".into(),
        audience: "developers".into(),
        agenda: vec!["Doors open".into(), "Keynote".into()],
        organizer: "Rust Lisbon".into(),
        tags: vec!["rust".into()],
    }
}

fn setup() -> (Arc<MemoryStore>, EventWriter<Arc<MemoryStore>>) {
    let store = Arc::new(MemoryStore::new());
    (store.clone(), EventWriter::new(store))
}

// ---------------------------------------------------------------------------
// Create path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_normalizes_and_slugifies() {
    let (store, writer) = setup();

    let event = writer.write_event(draft("Rust Meetup 2026!")).await.unwrap();

    assert_eq!(event.slug, "rust-meetup-2026");
    assert_eq!(event.date, "2026-04-22");
    assert_eq!(event.time, "09:00");
    assert_eq!(event.created_at, event.updated_at);
    assert_eq!(store.events().len(), 1);
}

#[tokio::test]
async fn missing_fields_are_rejected_before_store_io() {
    let (store, writer) = setup();

    let mut d = draft("Rust Meetup");
    d.venue = "   ".into();
    let err = writer.write_event(d).await.unwrap_err();

    assert!(matches!(err, GatherlyError::MissingField("venue")));
    assert!(store.events().is_empty());
}

#[tokio::test]
async fn bad_date_and_time_are_rejected_before_store_io() {
    let (store, writer) = setup();

    let mut d = draft("Rust Meetup");
    d.date = "not-a-date".into();
    assert!(matches!(
        writer.write_event(d).await.unwrap_err(),
        GatherlyError::InvalidDateFormat(_)
    ));

    let mut d = draft("Rust Meetup");
    d.time = "13:75".into();
    assert!(matches!(
        writer.write_event(d).await.unwrap_err(),
        GatherlyError::InvalidTimeFormat(_)
    ));

    assert!(store.events().is_empty());
}

#[tokio::test]
async fn colliding_titles_get_increasing_suffixes() {
    let (_, writer) = setup();

    let a = writer.write_event(draft("Rust Meetup")).await.unwrap();
    let b = writer.write_event(draft("Rust Meetup")).await.unwrap();
    let c = writer.write_event(draft("Rust Meetup")).await.unwrap();

    assert_eq!(a.slug, "rust-meetup");
    assert_eq!(b.slug, "rust-meetup-1");
    assert_eq!(c.slug, "rust-meetup-2");
}

// ---------------------------------------------------------------------------
// Update path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_with_unchanged_title_keeps_slug() {
    let (store, writer) = setup();

    let created = writer.write_event(draft("Rust Meetup")).await.unwrap();

    let mut d = draft("Rust Meetup");
    d.id = Some(created.id);
    d.description = "Now with lightning talks".into();
    let updated = writer.write_event(d).await.unwrap();

    assert_eq!(updated.slug, created.slug);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(store.events().len(), 1);
    assert_eq!(store.events()[0].description, "Now with lightning talks");
}

#[tokio::test]
async fn update_with_changed_title_reallocates_slug() {
    let (_, writer) = setup();

    let created = writer.write_event(draft("Rust Meetup")).await.unwrap();

    let mut d = draft("Tokio Workshop");
    d.id = Some(created.id);
    let updated = writer.write_event(d).await.unwrap();

    assert_eq!(updated.slug, "tokio-workshop");
    assert_eq!(updated.id, created.id);
}

#[tokio::test]
async fn update_does_not_collide_with_own_slug() {
    let (_, writer) = setup();

    let created = writer.write_event(draft("Rust Meetup")).await.unwrap();

    // Same title re-slugified (e.g. punctuation change) must reuse the
    // record's own slug, not step to rust-meetup-1.
    let mut d = draft("Rust Meetup!");
    d.id = Some(created.id);
    let updated = writer.write_event(d).await.unwrap();

    assert_eq!(updated.slug, "rust-meetup");
}

#[tokio::test]
async fn update_of_unknown_event_fails() {
    let (_, writer) = setup();

    let mut d = draft("Rust Meetup");
    d.id = Some(Uuid::new_v4());

    assert!(matches!(
        writer.write_event(d).await.unwrap_err(),
        GatherlyError::EventNotFound(_)
    ));
}

// ---------------------------------------------------------------------------
// Race doubles: the unique index is the authority, not the pre-check
// ---------------------------------------------------------------------------

/// Store whose slug probe is blind, as if a concurrent allocator
/// claimed every candidate after we probed it. Inserts still enforce
/// uniqueness, like the real index.
struct BlindProbeStore {
    inner: MemoryStore,
}

#[async_trait]
impl EventStore for BlindProbeStore {
    async fn find_event(&self, id: Uuid) -> Result<Option<EventRecord>, GatherlyError> {
        self.inner.find_event(id).await
    }

    async fn event_exists(&self, id: Uuid) -> Result<bool, GatherlyError> {
        self.inner.event_exists(id).await
    }

    async fn slug_exists(&self, _: &str, _: Option<Uuid>) -> Result<bool, GatherlyError> {
        Ok(false)
    }

    async fn insert_event(&self, record: &EventRecord) -> Result<(), GatherlyError> {
        self.inner.insert_event(record).await
    }

    async fn update_event(&self, record: &EventRecord) -> Result<(), GatherlyError> {
        self.inner.update_event(record).await
    }
}

#[tokio::test]
async fn lost_slug_race_surfaces_as_duplicate_slug() {
    let writer = EventWriter::new(BlindProbeStore {
        inner: MemoryStore::new(),
    });

    writer.write_event(draft("Rust Meetup")).await.unwrap();
    let err = writer.write_event(draft("Rust Meetup")).await.unwrap_err();

    assert!(matches!(err, GatherlyError::DuplicateSlug(ref s) if s == "rust-meetup"));
    assert!(err.is_conflict());
}
