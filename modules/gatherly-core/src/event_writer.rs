use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use gatherly_common::{
    normalize::{normalize_date, normalize_time, slugify},
    EventDraft, EventRecord, GatherlyError,
};
use gatherly_store::EventStore;

use crate::slug::allocate_slug;

/// Write side for events: validate → normalize → allocate slug →
/// persist, as one explicit pipeline.
pub struct EventWriter<S: EventStore> {
    store: S,
}

impl<S: EventStore> EventWriter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create or update an event from caller input.
    ///
    /// The slug is recomputed only when the title changed or no slug
    /// exists yet; an update that re-submits the same title keeps the
    /// stored slug untouched. Date and time always land in canonical
    /// form. The unique slug index remains the final guard — a
    /// concurrent writer winning the same slug surfaces here as
    /// `DuplicateSlug`, and the caller may retry.
    pub async fn write_event(&self, draft: EventDraft) -> Result<EventRecord, GatherlyError> {
        for (name, value) in draft.required_fields() {
            if value.trim().is_empty() {
                return Err(GatherlyError::MissingField(name));
            }
        }

        // Normalization failures abort before any store I/O.
        let date = normalize_date(&draft.date)?;
        let time = normalize_time(&draft.time)?;

        match draft.id {
            None => {
                let id = Uuid::new_v4();
                let base = slugify(draft.title.trim());
                let slug = allocate_slug(&self.store, &base, Some(id)).await?;
                let now = Utc::now();
                let record = build_record(&draft, id, slug, date, time, now, now);
                self.store.insert_event(&record).await?;
                info!(id = %record.id, slug = %record.slug, "event created");
                Ok(record)
            }
            Some(id) => {
                let existing = self
                    .store
                    .find_event(id)
                    .await?
                    .ok_or(GatherlyError::EventNotFound(id))?;

                let slug = if draft.title.trim() == existing.title {
                    existing.slug.clone()
                } else {
                    let base = slugify(draft.title.trim());
                    allocate_slug(&self.store, &base, Some(id)).await?
                };

                let record =
                    build_record(&draft, id, slug, date, time, existing.created_at, Utc::now());
                self.store.update_event(&record).await?;
                info!(id = %record.id, slug = %record.slug, "event updated");
                Ok(record)
            }
        }
    }
}

fn build_record(
    draft: &EventDraft,
    id: Uuid,
    slug: String,
    date: String,
    time: String,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
) -> EventRecord {
    EventRecord {
        id,
        title: draft.title.trim().to_string(),
        slug,
        description: draft.description.trim().to_string(),
        overview: draft.overview.trim().to_string(),
        image: draft.image.trim().to_string(),
        venue: draft.venue.trim().to_string(),
        location: draft.location.trim().to_string(),
        date,
        time,
        mode: draft.mode.trim().to_string(),
        audience: draft.audience.trim().to_string(),
        agenda: draft.agenda.clone(),
        organizer: draft.organizer.trim().to_string(),
        tags: draft.tags.clone(),
        created_at,
        updated_at,
    }
}
