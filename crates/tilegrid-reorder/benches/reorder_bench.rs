//! Benchmarks for the reorder decision.
//!
//! Run with: cargo bench -p tilegrid-reorder
//!
//! The row-change branches scan every fresh slot, so the decision is O(n)
//! per drag tick; these benches track how that scan scales with grid size.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tilegrid_core::geometry::{DragRect, Span};
use tilegrid_reorder::{GridTemplate, PositionRegistry, ReorderConfig, ReorderEngine};

const COLUMNS: usize = 4;

fn measured_registry(count: usize) -> (PositionRegistry, GridTemplate) {
    let template = GridTemplate::new(COLUMNS).tile_size(90.0, 60.0).gaps(10.0, 20.0);
    let mut registry = PositionRegistry::with_capacity(count);
    template.measure_into(&mut registry, count);
    (registry, template)
}

fn drag_at(cx: f64, cy: f64) -> DragRect {
    DragRect::new(Span::new(cx - 45.0, cx + 45.0), Span::new(cy - 30.0, cy + 30.0))
}

fn bench_same_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/same_row");
    for n in [12, 48, 96] {
        let (registry, template) = measured_registry(n);
        let engine = ReorderEngine::new(ReorderConfig::from_template(&template));
        // Crossing the right neighbor's midpoint from slot 1.
        let drag = drag_at(template.slot(2).mid_x() + 5.0, template.slot(1).mid_y());
        group.bench_with_input(BenchmarkId::from_parameter(n), &registry, |b, registry| {
            b.iter(|| black_box(engine.compute_target_index(1, drag, registry)))
        });
    }
    group.finish();
}

fn bench_row_change(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/row_change");
    for n in [12, 48, 96] {
        let (registry, template) = measured_registry(n);
        let engine = ReorderEngine::new(ReorderConfig::from_template(&template));
        // From the middle of the grid up one row: worst case, the column
        // scan touches every slot.
        let source = n / 2;
        let slot = template.slot(source);
        let drag = drag_at(slot.mid_x(), slot.top - 40.0);
        group.bench_with_input(BenchmarkId::from_parameter(n), &registry, |b, registry| {
            b.iter(|| black_box(engine.compute_target_index(source, drag, registry)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_same_row, bench_row_change);
criterion_main!(benches);
