use content_pipeline::{
    extract_headings, inject_anchors, rewrite_content_images, AssetPaths, AssetResolver,
    ContentPipeline, PublicUrl,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn prepare_body(sections: usize) -> String {
    (0..sections)
        .map(|i| {
            format!(
                "<h2>Section <em>{i}</em></h2>\n<p>Lorem ipsum dolor sit amet, <a href=\"#\">consectetur</a> adipiscing elit.</p>\n<p><img src=\"storage/assets/images/uploads/{i}.png\" alt=\"figure {i}\"></p>\n"
            )
        })
        .collect()
}

fn bench_stages(c: &mut Criterion) {
    let body = prepare_body(200);
    let resolver = AssetResolver::new(AssetPaths::default(), PublicUrl::new("https://blog.example.com"));

    let mut group = c.benchmark_group("stages");

    group.bench_function("extract_headings", |b| {
        b.iter(|| extract_headings(black_box(&body), "h2"))
    });
    group.bench_function("inject_anchors", |b| {
        b.iter(|| inject_anchors(black_box(&body)))
    });
    group.bench_function("rewrite_content_images", |b| {
        b.iter(|| rewrite_content_images(black_box(&body), &resolver))
    });

    group.finish();
}

fn bench_process(c: &mut Criterion) {
    let pipeline = ContentPipeline::new(AssetResolver::new(
        AssetPaths::default(),
        PublicUrl::new("https://blog.example.com"),
    ));

    let mut group = c.benchmark_group("process");

    for sections in [10, 100, 1000] {
        let body = prepare_body(sections);
        group.bench_function(format!("sections_{sections}"), |b| {
            b.iter(|| pipeline.process(black_box(&body)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stages, bench_process);
criterion_main!(benches);
