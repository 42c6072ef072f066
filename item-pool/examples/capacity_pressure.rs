// Example: eviction under capacity pressure, and the explicit exhaustion error.
use item_pool::{ItemPool, PoolError, PoolOptions};

fn main() {
    let mut pool = ItemPool::new(PoolOptions::new(3, 3));

    let first: Vec<(String, ())> = ["a", "b", "c"]
        .iter()
        .map(|key| (key.to_string(), ()))
        .collect();
    pool.compute_pooled_items(&first).expect("window fits");

    // c scrolls away; d takes over its slot because a and b are still visible.
    let second: Vec<(String, ())> = ["a", "b", "d"]
        .iter()
        .map(|key| (key.to_string(), ()))
        .collect();
    for item in pool.compute_pooled_items(&second).expect("window fits") {
        println!("{} -> slot {}", item.key, item.slot_id);
    }

    // A window larger than the capacity cannot be fully placed: the pool
    // reports which entry missed out instead of corrupting a live slot.
    let oversized: Vec<(String, ())> = ["a", "b", "d", "e"]
        .iter()
        .map(|key| (key.to_string(), ()))
        .collect();
    match pool.compute_pooled_items(&oversized) {
        Ok(_) => unreachable!("the window exceeds max_pool_size"),
        Err(PoolError::Exhausted { index, capacity }) => {
            println!("entry {index} skipped this cycle (capacity {capacity})");
        }
    }
}
