use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum GatherlyError {
    #[error("{0} is required and cannot be empty")]
    MissingField(&'static str),

    #[error("invalid email format: {0}")]
    InvalidEmail(String),

    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("an event with slug '{0}' already exists")]
    DuplicateSlug(String),

    #[error("this email is already booked for this event")]
    AlreadyBooked,

    #[error("event {0} does not exist")]
    EventNotFound(Uuid),

    #[error("slug allocation gave up after {0} attempts")]
    SlugAllocationExhausted(u32),

    #[error("store error: {0}")]
    Store(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl GatherlyError {
    /// Conflict outcomes are expected business results, not faults:
    /// the caller reports them to the user instead of treating the
    /// request as failed infrastructure.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            GatherlyError::AlreadyBooked | GatherlyError::DuplicateSlug(_)
        )
    }
}
