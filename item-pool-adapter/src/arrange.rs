use alloc::vec::Vec;

use item_pool::PooledItem;

/// One past the highest slot id in `items`, i.e. the dense arrangement length.
pub fn slot_span<K, P>(items: &[PooledItem<K, P>]) -> usize {
    items
        .iter()
        .map(|item| item.slot_id + 1)
        .max()
        .unwrap_or(0)
}

/// Arranges pooled records into slot order.
///
/// The pool returns records in snapshot order, but a renderer that keeps one
/// element per slot wants element `i` to always describe slot `i`: that way an
/// element's position in the render tree never changes while its slot
/// survives, and only its content is refilled. Slots with no record this
/// frame come out as `None` (the renderer typically hides those elements
/// rather than destroying them).
///
/// This clears `out` first.
pub fn arrange_by_slot<K: Clone, P: Clone>(
    items: &[PooledItem<K, P>],
    out: &mut Vec<Option<PooledItem<K, P>>>,
) {
    out.clear();
    out.resize(slot_span(items), None);
    for item in items {
        debug_assert!(
            out[item.slot_id].is_none(),
            "two records claim slot {}",
            item.slot_id
        );
        out[item.slot_id] = Some(item.clone());
    }
}
