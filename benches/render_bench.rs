use criterion::{Criterion, criterion_group, criterion_main};
use shopping_list::api::ShoppingListController;
use shopping_list::core::{LineItem, ShoppingList, coerce_number, format_number};
use shopping_list::render::{ListRenderer, MemorySink, build_frame};
use std::hint::black_box;

fn sample_list(len: usize) -> ShoppingList {
    let mut list = ShoppingList::new();
    for i in 0..len {
        list.add_item(LineItem::new(
            format!("item-{i}"),
            (i % 12) as f64,
            0.25 + (i % 400) as f64 / 100.0,
        ));
    }
    list
}

fn bench_build_frame_1k(c: &mut Criterion) {
    let list = sample_list(1_000);

    c.bench_function("build_frame_1k", |b| {
        b.iter(|| {
            let frame = build_frame(black_box(&list));
            black_box(frame.rows().len());
        })
    });
}

fn bench_render_into_memory_sink_1k(c: &mut Criterion) {
    let list = sample_list(1_000);
    let mut renderer = ListRenderer::new(MemorySink::new());

    c.bench_function("render_memory_sink_1k", |b| {
        b.iter(|| {
            renderer.render(black_box(&list)).expect("render");
        })
    });
}

fn bench_controller_add_remove(c: &mut Criterion) {
    c.bench_function("controller_add_remove_100", |b| {
        b.iter(|| {
            let mut controller = ShoppingListController::new(MemorySink::new());
            for i in 0..100 {
                controller
                    .add_item(format!("item-{i}"), 1.0, 2.5)
                    .expect("add");
            }
            while let Some(id) = controller.list().id_at(0) {
                controller.remove_item(id).expect("remove");
            }
        })
    });
}

fn bench_number_text_round_trip(c: &mut Criterion) {
    c.bench_function("number_text_round_trip", |b| {
        b.iter(|| {
            let text = format_number(black_box(1234.5678));
            let _ = coerce_number(&text);
        })
    });
}

criterion_group!(
    benches,
    bench_build_frame_1k,
    bench_render_into_memory_sink_1k,
    bench_controller_add_remove,
    bench_number_text_round_trip
);
criterion_main!(benches);
