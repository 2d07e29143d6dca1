#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tilegrid_core::geometry::{DragRect, Span, TileRect};
use tilegrid_reorder::{PositionRegistry, ReorderConfig, ReorderEngine};

#[derive(Debug, Arbitrary)]
struct Slot {
    measured: bool,
    left: i16,
    top: i16,
    width: u8,
    height: u8,
}

#[derive(Debug, Arbitrary)]
struct Case {
    slots: Vec<Slot>,
    source_seed: u8,
    drag_x: i16,
    drag_y: i16,
    margin: u8,
    invalidate: bool,
}

fuzz_target!(|case: Case| {
    if case.slots.is_empty() || case.slots.len() > 128 {
        return;
    }

    let mut registry = PositionRegistry::new();
    for (i, slot) in case.slots.iter().enumerate() {
        if slot.measured {
            registry.update_position(
                i,
                TileRect::new(
                    f64::from(slot.left),
                    f64::from(slot.top),
                    f64::from(slot.width),
                    f64::from(slot.height),
                ),
            );
        }
    }
    if case.invalidate {
        registry.begin_layout_pass();
    }

    let source = usize::from(case.source_seed) % case.slots.len();
    let cx = f64::from(case.drag_x);
    let cy = f64::from(case.drag_y);
    let drag = DragRect::new(Span::new(cx - 40.0, cx + 40.0), Span::new(cy - 30.0, cy + 30.0));

    let engine = ReorderEngine::new(ReorderConfig {
        row_margin: f64::from(case.margin),
    });

    // Post-conditions that must always hold:
    match engine.compute_target_index(source, drag, &registry) {
        Ok(target) => {
            assert!(target <= registry.len(), "target OOB");
            // Pure function: a second identical query agrees.
            let again = engine
                .compute_target_index(source, drag, &registry)
                .expect("second query must succeed");
            assert_eq!(target, again, "decision not idempotent");
        }
        Err(_) => {
            // Only legal when the source itself is unmeasured or stale.
            assert!(
                case.invalidate || !case.slots[source].measured,
                "error for a fresh source"
            );
        }
    }
});
