use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use spectrum::render::{
    LayoutCache, LayoutOptions, SvgRenderOptions, layout_spectrum, render_svg,
};
use spectrum::{InteractionState, Level, LevelCatalog, LevelId};
use std::sync::Arc;

fn synthetic_catalog(n: u32) -> LevelCatalog {
    let levels = (1..=n)
        .map(|id| Level {
            id: LevelId(id),
            title: format!("Level {id} — Synthetic"),
            short_title: format!("Synthetic Level {id}"),
            task_profile: vec![],
            examples: vec![],
            ai_tools: vec![],
            engineering_involvement: vec![],
            key_characteristics: vec![],
            color: "#0ea5e9".to_string(),
        })
        .collect();
    LevelCatalog::new(levels).unwrap()
}

fn fixtures() -> Vec<(&'static str, LevelCatalog)> {
    vec![
        ("reference", LevelCatalog::reference()),
        ("levels_24", synthetic_catalog(24)),
        ("levels_200", synthetic_catalog(200)),
    ]
}

fn bench_layout(c: &mut Criterion) {
    let options = LayoutOptions::default();

    let mut group = c.benchmark_group("layout_spectrum");
    for (name, catalog) in fixtures() {
        group.bench_function(name, |b| {
            b.iter(|| {
                let _ = layout_spectrum(&catalog, &options).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_cached_layout(c: &mut Criterion) {
    let options = LayoutOptions::default();

    let mut group = c.benchmark_group("layout_cache_hit");
    for (name, catalog) in fixtures() {
        let catalog = Arc::new(catalog);
        let mut cache = LayoutCache::new();
        cache.get(&catalog, &options).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| {
                let _ = cache.get(&catalog, &options).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_render_svg(c: &mut Criterion) {
    let options = LayoutOptions::default();
    let svg_options = SvgRenderOptions::default();

    let mut group = c.benchmark_group("render_svg");
    for (name, catalog) in fixtures() {
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    let mut state = InteractionState::for_catalog(&catalog, None);
                    state.hover(LevelId(2));
                    state
                },
                |state| {
                    let _svg = render_svg(&catalog, &state, &options, &svg_options).unwrap();
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_cached_layout, bench_render_svg);
criterion_main!(benches);
