//! Cache key derivation for item lookups.
//!
//! Keys are `prefix + ":" + operation name`. The prefix used when an entry
//! is written must lexically match the prefix handed to
//! [`invalidate_prefix`](super::CacheReadThrough::invalidate_prefix), or
//! the invalidation will not match anything.

use curio_core::ItemId;

/// Prefix under which the item listing is cached.
pub const ITEMS_LIST_PREFIX: &str = "items_list";

/// Cache key for the item listing.
///
/// All listing requests share this single key: pagination and title
/// filters do not participate in key derivation.
#[must_use]
pub fn items_list() -> String {
    format!("{}:list_items", ITEMS_LIST_PREFIX)
}

/// Prefix under which a single item's lookups are cached.
#[must_use]
pub fn item_detail_prefix(id: ItemId) -> String {
    format!("item_detail:item_id:{}", id)
}

/// Cache key for a single item lookup.
#[must_use]
pub fn item_detail(id: ItemId) -> String {
    format!("{}:get_item", item_detail_prefix(id))
}
