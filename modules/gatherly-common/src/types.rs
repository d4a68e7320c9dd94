use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored event document. `date` and `time` are always in canonical
/// form (`YYYY-MM-DD` / 24-hour `HH:mm`), never raw user input, and
/// `slug` is unique across all live events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub mode: String,
    pub audience: String,
    pub agenda: Vec<String>,
    pub organizer: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied event fields, before validation and normalization.
/// `id` present means "update that record"; absent means create.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub mode: String,
    pub audience: String,
    pub agenda: Vec<String>,
    pub organizer: String,
    pub tags: Vec<String>,
}

impl EventDraft {
    /// Required string fields and their raw values, in the order they
    /// are validated. Agenda and tags may be empty and are not listed.
    pub fn required_fields(&self) -> [(&'static str, &str); 11] {
        [
            ("title", &self.title),
            ("description", &self.description),
            ("overview", &self.overview),
            ("image", &self.image),
            ("venue", &self.venue),
            ("location", &self.location),
            ("date", &self.date),
            ("time", &self.time),
            ("mode", &self.mode),
            ("audience", &self.audience),
            ("organizer", &self.organizer),
        ]
    }
}

/// A stored booking. Weak reference to its event by id only; at most
/// one booking may exist per (event, email) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub event_id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookingRecord {
    /// Build a new booking for an already-normalized email.
    pub fn new(event_id: Uuid, email: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            event_id,
            email,
            created_at: now,
            updated_at: now,
        }
    }
}
