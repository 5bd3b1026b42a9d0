//! Benchmarks for the full layout pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use furnikit_catalog::ProductRegistry;
use furnikit_core::{Dimensions, MaterialChoice, MaterialLibrary};
use furnikit_layout::{
    compute_layout, validate, Density, ProductConfiguration, RowHeight, StyleName, StyleRegistry,
};

fn bench_pipeline(c: &mut Criterion) {
    let registry = ProductRegistry::standard();
    let library = MaterialLibrary::standard();
    let styles = StyleRegistry::standard();
    let profile = registry.get("bookcase").unwrap();

    let mut config = ProductConfiguration::new(
        "bookcase",
        Dimensions::new(100.0, 175.0, 30.0),
        MaterialChoice::new("oak-veneer", "oak"),
    );
    config.row_heights = vec![RowHeight::Medium; 5];

    c.bench_function("validate_bookcase", |b| {
        b.iter(|| validate(profile, &library, &styles, black_box(&config)).unwrap())
    });

    let validated = validate(profile, &library, &styles, &config).unwrap();
    c.bench_function("compute_layout_bookcase", |b| {
        b.iter(|| compute_layout(profile, &styles, black_box(&validated)).unwrap())
    });

    let mut wide = ProductConfiguration::new(
        "bookcase",
        Dimensions::new(280.0, 250.0, 35.0),
        MaterialChoice::new("mdf-lacquer", "white"),
    );
    wide.style = StyleName::Mosaic;
    wide.density = Density::Medium;
    wide.row_heights = furnikit_layout::derive_row_heights(250.0, RowHeight::Medium);
    let wide_validated = validate(profile, &library, &styles, &wide).unwrap();
    c.bench_function("compute_layout_wide_mosaic", |b| {
        b.iter(|| compute_layout(profile, &styles, black_box(&wide_validated)).unwrap())
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
