//! Benchmarks for the menubar dispatch hot path.
//!
//! Run with: cargo bench -p navkit-menubar

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use navkit_core::event::{Key, KeyEvent};
use navkit_harness::{ItemFixture, MenuFixture, SyntheticTree};
use navkit_menubar::MenubarController;
use std::hint::black_box;

fn wide_menu(top: usize, nested: usize) -> MenuFixture {
    MenuFixture {
        label: None,
        items: (0..top)
            .map(|i| {
                ItemFixture::submenu(
                    format!("Section {i}"),
                    (0..nested)
                        .map(|j| ItemFixture::link(format!("Entry {j}"), format!("/{i}/{j}")))
                        .collect(),
                )
            })
            .collect(),
    }
}

fn bench_mount(c: &mut Criterion) {
    let mut group = c.benchmark_group("menubar/mount");

    for (top, nested) in [(5, 5), (10, 20), (25, 40)] {
        let fixture = wide_menu(top, nested);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{top}x{nested}")),
            &fixture,
            |b, fixture| {
                b.iter(|| {
                    let (mut tree, root) = fixture.build();
                    let mut controller = MenubarController::new();
                    controller.mount(&mut tree, root);
                    black_box(controller.registry().menu_count());
                })
            },
        );
    }

    group.finish();
}

fn bench_arrow_travel(c: &mut Criterion) {
    let mut group = c.benchmark_group("menubar/arrow_travel");

    for (top, nested) in [(5, 5), (25, 40)] {
        let fixture = wide_menu(top, nested);
        let (mut tree, root) = fixture.build();
        let mut controller = MenubarController::new();
        controller.mount(&mut tree, root);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{top}x{nested}")),
            &(),
            |b, _| {
                b.iter(|| {
                    let target = controller.focused_item().unwrap();
                    let result =
                        controller.handle_key(&mut tree, target, KeyEvent::new(Key::Right));
                    black_box(result);
                })
            },
        );
    }

    group.finish();
}

fn bench_type_ahead(c: &mut Criterion) {
    let mut group = c.benchmark_group("menubar/type_ahead");

    let fixture = wide_menu(25, 1);
    let (mut tree, root) = fixture.build();
    let mut controller = MenubarController::new();
    controller.mount(&mut tree, root);

    group.bench_function("25_items", |b| {
        b.iter(|| {
            let target = controller.focused_item().unwrap();
            let result = controller.handle_key(&mut tree, target, KeyEvent::new(Key::Char('s')));
            black_box(result);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_mount, bench_arrow_travel, bench_type_ahead);
criterion_main!(benches);
