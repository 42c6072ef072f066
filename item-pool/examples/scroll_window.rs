// Example: a window sliding over a large list, with per-frame cleanup.
//
// The pool keeps occupancy bounded while the overlap between consecutive
// windows keeps its slots, so only the rows entering the window get (re)filled
// slots each frame.
use item_pool::{ItemPool, PoolOptions};

fn main() {
    let mut pool = ItemPool::new(PoolOptions::new(12, 24));

    for frame in 0..30u64 {
        let first_row = frame * 3;
        let visible: Vec<(u64, String)> = (first_row..first_row + 10)
            .map(|row| (row, format!("row {row}")))
            .collect();

        let items = pool.compute_pooled_items(&visible).expect("window fits");
        let slots: Vec<_> = items.iter().map(|item| item.slot_id).collect();
        println!(
            "frame {frame:>2}: rows {first_row}..{} slots {slots:?} occupied={}",
            first_row + 10,
            pool.occupied_len()
        );

        // The render loop commits the frame, then releases what scrolled away.
        pool.run_pending_cleanup();
    }

    println!("final stats={:?}", pool.stats());
}
