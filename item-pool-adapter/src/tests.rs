use crate::*;

use item_pool::{PoolOptions, PooledItem};

fn pairs(keys: &[&str]) -> Vec<(String, u32)> {
    keys.iter()
        .enumerate()
        .map(|(i, key)| ((*key).to_string(), i as u32))
        .collect()
}

#[test]
fn controller_defers_cleanup_until_end_frame() {
    let mut c = PoolController::new(PoolOptions::new(2, 5));
    c.render(&pairs(&["a", "b", "c", "d"])).unwrap();
    assert_eq!(c.end_frame(), 0); // everything rendered is still visible

    c.render(&pairs(&["a", "b"])).unwrap();
    // Mid-frame the scrolled-away entries are still pooled.
    assert_eq!(c.pool().occupied_len(), 4);

    assert_eq!(c.end_frame(), 2);
    assert_eq!(c.pool().occupied_len(), 2);
    assert!(!c.pool().cleanup_pending());
}

#[test]
fn frame_is_render_plus_end_frame() {
    let mut c = PoolController::new(PoolOptions::new(1, 4));
    c.frame(&pairs(&["a", "b", "c"])).unwrap();
    let items = c.frame(&pairs(&["a"])).unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(c.pool().occupied_len(), 1);
    assert!(!c.pool().cleanup_pending());
}

#[test]
fn arrange_by_slot_keeps_element_positions_stable_across_scroll() {
    let mut c = PoolController::new(PoolOptions::new(3, 3));
    let mut arranged: Vec<Option<PooledItem<String, u32>>> = Vec::new();

    let first = c.frame(&pairs(&["a", "b", "c"])).unwrap();
    arrange_by_slot(&first, &mut arranged);
    let position_of = |arranged: &[Option<PooledItem<String, u32>>], key: &str| {
        arranged
            .iter()
            .position(|entry| entry.as_ref().is_some_and(|item| item.key == key))
    };
    let slot_a = position_of(&arranged, "a").unwrap();
    let slot_b = position_of(&arranged, "b").unwrap();

    // a scrolls away, d scrolls in: b and c hold their positions and d fills
    // the element a vacated.
    let second = c.frame(&pairs(&["b", "c", "d"])).unwrap();
    arrange_by_slot(&second, &mut arranged);
    assert_eq!(position_of(&arranged, "b"), Some(slot_b));
    assert_eq!(position_of(&arranged, "d"), Some(slot_a));
    assert_eq!(position_of(&arranged, "a"), None);
}

#[test]
fn slot_span_covers_the_highest_assigned_slot() {
    let mut c = PoolController::new(PoolOptions::new(4, 4));
    let items = c.frame(&pairs(&["a", "b", "c"])).unwrap();
    assert_eq!(slot_span(&items), 3);
    assert_eq!(slot_span::<String, u32>(&[]), 0);

    // A partial window still spans up to its highest surviving slot.
    let items = c.frame(&pairs(&["c"])).unwrap();
    assert_eq!(slot_span(&items), items[0].slot_id + 1);
}
