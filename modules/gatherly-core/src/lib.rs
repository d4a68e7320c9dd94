//! Write path for events and bookings: validation, normalization,
//! slug allocation and dedup over a store the caller provides. The
//! pipeline is explicit — validate, normalize, allocate, persist —
//! with store-level unique indexes as the final word on uniqueness.

pub mod booking_writer;
pub mod event_writer;
pub mod slug;

pub use booking_writer::BookingWriter;
pub use event_writer::EventWriter;
pub use slug::{allocate_slug, MAX_SLUG_ATTEMPTS};
