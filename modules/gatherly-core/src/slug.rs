use tracing::warn;
use uuid::Uuid;

use gatherly_common::GatherlyError;
use gatherly_store::EventStore;

/// Probe cap for slug allocation. Past this many taken variants the
/// data is pathological and the request fails instead of spinning.
pub const MAX_SLUG_ATTEMPTS: u32 = 10_000;

/// Find the first free variant of `base`: `base`, `base-1`, `base-2`…
/// `exclude` is the id of the record being updated, so an event keeps
/// its own slug without colliding with itself.
///
/// The result is advisory — a concurrent allocator can claim the same
/// candidate between this probe and the insert. The store's unique
/// index settles that race; callers translate its violation into
/// `DuplicateSlug`.
pub async fn allocate_slug<S: EventStore + ?Sized>(
    store: &S,
    base: &str,
    exclude: Option<Uuid>,
) -> Result<String, GatherlyError> {
    let mut candidate = base.to_string();
    for suffix in 1..=MAX_SLUG_ATTEMPTS {
        if !store.slug_exists(&candidate, exclude).await? {
            return Ok(candidate);
        }
        candidate = format!("{base}-{suffix}");
    }
    warn!(base, attempts = MAX_SLUG_ATTEMPTS, "slug allocation exhausted");
    Err(GatherlyError::SlugAllocationExhausted(MAX_SLUG_ATTEMPTS))
}
