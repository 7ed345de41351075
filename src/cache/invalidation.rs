//! Event-driven cache invalidation.
//!
//! Maps domain events to the ordered set of cache-domain prefixes they purge.
//! Model-layer writers call [`purge`] after a successful write; the mapping of
//! business event to prefix set is policy layered on top of the store, which
//! only exposes `delete_pattern`.

use tracing::info;

use super::store::TieredStore;

const SOURCE: &str = "cache::invalidation";

/// A domain write that invalidates cached reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainEvent {
    /// A user's identity record changed (profile, permissions, limits).
    UserUpdated,
    /// A post was created.
    PostCreated,
    /// A post was updated.
    PostUpdated,
    /// A post was deleted.
    PostDeleted,
    /// The category lists changed.
    CategoryUpdated,
}

impl DomainEvent {
    pub fn name(self) -> &'static str {
        match self {
            Self::UserUpdated => "user_update",
            Self::PostCreated => "post_create",
            Self::PostUpdated => "post_update",
            Self::PostDeleted => "post_delete",
            Self::CategoryUpdated => "category_update",
        }
    }

    /// Cache-domain prefixes purged for this event, in purge order.
    pub fn purged_prefixes(self) -> &'static [&'static str] {
        match self {
            Self::UserUpdated => &["user", "user_can_write", "user_posting_limit"],
            Self::PostCreated => &["posts_meta", "post_count"],
            Self::PostUpdated | Self::PostDeleted => &["posts_meta", "post_detail", "post_count"],
            Self::CategoryUpdated => &["categories_read", "categories_write"],
        }
    }
}

/// Purge every cache prefix associated with the event.
///
/// Prefixes are purged in order with no atomicity across them; entries missed
/// by a partial purge are still bounded by their TTL.
pub fn purge(store: &TieredStore, event: DomainEvent) {
    for prefix in event.purged_prefixes() {
        store.delete_pattern(prefix);
    }
    info!(
        target = SOURCE,
        op = "purge",
        event = event.name(),
        prefixes = event.purged_prefixes().len(),
        "Invalidated cache prefixes for domain event"
    );
}
