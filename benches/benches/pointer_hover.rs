// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use covergrid_overlay::hit::{HitTester, OverlayConfig};
use covergrid_overlay::tooltip::place;
use covergrid_overlay::types::PointerSample;
use covergrid_scene::Page;
use kurbo::{Point, Rect, Size};

const CARD: Size = Size::new(120.0, 180.0);
const SPACING: f64 = 8.0;

/// A page with `cols * rows` cards, each with a tooltip.
fn gen_page(cols: usize, rows: usize) -> Page {
    let mut page = Page::new(Size::new(1600.0, 900.0));
    for y in 0..rows {
        for x in 0..cols {
            let x0 = x as f64 * (CARD.width + SPACING);
            let y0 = y as f64 * (CARD.height + SPACING);
            let card = page.add_card(Rect::from_origin_size((x0, y0), CARD));
            let _ = page.add_tooltip(card, Size::new(240.0, 120.0));
        }
    }
    page
}

/// A horizontal sweep across the first row, crossing cards and gaps.
fn gen_sweep(steps: usize) -> Vec<Point> {
    (0..steps)
        .map(|i| Point::new(i as f64 * 3.7, CARD.height * 0.5))
        .collect()
}

fn bench_elements_from_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("elements_from_point");
    for &n in &[8usize, 16, 32] {
        let page = gen_page(n, n);
        let sweep = gen_sweep(400);
        group.throughput(Throughput::Elements(sweep.len() as u64));
        group.bench_function(format!("sweep_grid_n{}", n), |b| {
            b.iter(|| {
                let mut total = 0;
                for &pt in &sweep {
                    total += page.elements_from_point(pt).len();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

fn bench_hover_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover_sweep");
    for &n in &[8usize, 16] {
        let page = gen_page(n, n);
        let sweep = gen_sweep(400);
        group.throughput(Throughput::Elements(sweep.len() as u64));
        group.bench_function(format!("pointer_moves_n{}", n), |b| {
            b.iter_batched(
                || (page.clone(), HitTester::new(OverlayConfig::default())),
                |(mut page, mut hits)| {
                    for (i, &pt) in sweep.iter().enumerate() {
                        let now = Duration::from_millis(i as u64 * 16);
                        let _ = hits.on_pointer_sample(&mut page, PointerSample::Move(pt), now);
                        let _ = hits.advance(&mut page, now);
                    }
                    black_box(hits.hovered());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_place(c: &mut Criterion) {
    let viewport = Size::new(1600.0, 900.0);
    let size = Size::new(240.0, 120.0);
    c.bench_function("place_edge_sweep", |b| {
        b.iter(|| {
            for i in 0..256 {
                let pt = Point::new(f64::from(i) * 6.25, f64::from(i) * 3.5);
                black_box(place(pt, size, viewport));
            }
        })
    });
}

criterion_group!(benches, bench_elements_from_point, bench_hover_sweep, bench_place);
criterion_main!(benches);
