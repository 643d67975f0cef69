//! Performance benchmarks for valtree

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use valtree::test_utils::{deep, kitchen_sink, wide};
use valtree::{
    BuildConfig, Decoder, DepthLimit, RenderConfig, TreeFormatter, build_tree, copy_text,
    plan_expansion,
};

const TAGGED_INPUT: &str = r#"{
    "user": {"name": "John", "joined": {"$date": "2024-01-15T10:30:00Z"}},
    "ids": {"$set": [1, 2, 3, 4, 5]},
    "lookup": {"$map": [["a", 1], ["b", 2]]},
    "big": {"$bigint": "123456789012345678901234567890"},
    "pattern": {"$regexp": "/^[a-z]+$/i"},
    "render": {"$function": {"name": "render", "props": {"displayName": "Render"}}},
    "rows": [[1, 2, 3], [4, 5, 6], [7, 8, 9]]
}"#;

fn bench_build_tree(c: &mut Criterion) {
    let config = BuildConfig::default();
    let mut group = c.benchmark_group("build_tree");

    for width in [10, 100, 1000] {
        let value = wide(width);
        group.bench_function(format!("wide_{}", width), |b| {
            b.iter(|| build_tree(black_box(&value), &config))
        });
    }

    let nested = deep(200);
    group.bench_function("deep_200", |b| {
        b.iter(|| build_tree(black_box(&nested), &config))
    });

    let mixed = kitchen_sink();
    group.bench_function("kitchen_sink", |b| {
        b.iter(|| build_tree(black_box(&mixed), &config))
    });

    group.finish();
}

fn bench_plan_expansion(c: &mut Criterion) {
    let Ok(Some(root)) = build_tree(&deep(200), &BuildConfig::default()) else {
        return;
    };
    let mut group = c.benchmark_group("plan_expansion");

    group.bench_function("depth_2", |b| {
        b.iter(|| plan_expansion(black_box(&root), true, DepthLimit::Levels(2)))
    });
    group.bench_function("unbounded", |b| {
        b.iter(|| plan_expansion(black_box(&root), true, DepthLimit::Unbounded))
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.bench_function("tagged", |b| {
        b.iter(|| Decoder::tagged().decode_str(black_box(TAGGED_INPUT)))
    });
    group.bench_function("plain", |b| {
        b.iter(|| Decoder::plain().decode_str(black_box(TAGGED_INPUT)))
    });
    group.finish();
}

fn bench_render_and_copy(c: &mut Criterion) {
    let value = wide(500);
    let Ok(Some(root)) = build_tree(&value, &BuildConfig::default()) else {
        return;
    };
    let expanded = plan_expansion(&root, true, DepthLimit::Unbounded);
    let formatter = TreeFormatter::new(RenderConfig {
        use_color: false,
        ..Default::default()
    });

    c.bench_function("format_wide_500", |b| {
        b.iter(|| formatter.format(black_box(&root), &expanded))
    });
    c.bench_function("copy_wide_500", |b| b.iter(|| copy_text(black_box(&value))));
}

criterion_group!(
    benches,
    bench_build_tree,
    bench_plan_expansion,
    bench_decode,
    bench_render_and_copy
);
criterion_main!(benches);
