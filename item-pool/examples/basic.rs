// Example: stable slot identities across two snapshots.
use item_pool::{ItemPool, PoolOptions};

fn main() {
    let mut pool = ItemPool::new(PoolOptions::new(4, 8));

    let visible: Vec<(String, u64)> = ["alpha", "beta", "gamma"]
        .iter()
        .enumerate()
        .map(|(i, key)| (key.to_string(), i as u64))
        .collect();

    let items = pool.compute_pooled_items(&visible).expect("window fits");
    for item in &items {
        println!("{} -> slot {}", item.key, item.slot_id);
    }

    // Recomputing the same window changes nothing: a renderer keying
    // elements by slot id reuses every one of them.
    let again = pool.compute_pooled_items(&visible).expect("window fits");
    println!("stable={}", items == again);
    println!("stats={:?}", pool.stats());
}
