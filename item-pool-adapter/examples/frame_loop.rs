use item_pool::PoolOptions;
use item_pool_adapter::{PoolController, arrange_by_slot};

fn main() {
    // Example: a render loop driving the pool through whole frames.
    //
    // The adapter flow is typically:
    // 1) compute the visible window (virtualization layer)
    // 2) render(visible) and paint elements keyed by slot id
    // 3) end_frame() once the frame is committed, releasing stale entries
    let mut c = PoolController::new(PoolOptions::new(6, 12));
    let mut arranged = Vec::new();

    for frame in 0..6u64 {
        let first_row = frame * 2;
        let visible: Vec<(u64, String)> = (first_row..first_row + 5)
            .map(|row| (row, format!("row {row}")))
            .collect();

        let items = c.render(&visible).expect("window fits");
        arrange_by_slot(&items, &mut arranged);

        let cells: Vec<String> = arranged
            .iter()
            .map(|entry| match entry {
                Some(item) => item.key.to_string(),
                None => "-".to_string(),
            })
            .collect();
        let released = c.end_frame();
        println!("frame {frame}: elements by slot {cells:?} released={released}");
    }

    println!("final occupancy={}", c.pool().occupied_len());
}
