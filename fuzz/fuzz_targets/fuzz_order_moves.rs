#![no_main]

use libfuzzer_sys::fuzz_target;
use tilegrid_reorder::Order;

fuzz_target!(|data: &[u8]| {
    // First byte picks the size (1..=64); the rest drive moves pairwise.
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let len = usize::from(first % 64) + 1;
    let mut order = Order::new((0..len as u32).collect::<Vec<_>>());

    for pair in rest.chunks_exact(2) {
        let from = usize::from(pair[0]) % (len + 8);
        let to = usize::from(pair[1]) % (len + 8);
        order.move_item(from, to);

        // Post-conditions that must always hold:
        assert_eq!(order.len(), len, "length changed");
    }

    // Every element survives every sequence of moves exactly once.
    let mut seen = vec![false; len];
    for &item in order.iter() {
        let idx = item as usize;
        assert!(!seen[idx], "duplicate element");
        seen[idx] = true;
    }
    assert!(seen.iter().all(|&s| s), "element lost");
});
