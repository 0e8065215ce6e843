//! Benchmarks for page rendering performance.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use std::sync::Arc;

use atomdocs_config::{NavigationTree, Section};
use atomdocs_renderer::MarkdownRenderer;
use atomdocs_site::{PageRequest, Site, SiteConfig};
use atomdocs_storage::MockStorage;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate markdown content with the given number of sections and code blocks.
fn generate_markdown(sections: usize, paragraphs_per_section: usize) -> String {
    let mut md = String::with_capacity(sections * 50 + sections * paragraphs_per_section * 200);
    md.push_str("# Document Title\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        for j in 0..paragraphs_per_section {
            md.push_str(&format!(
                "This is paragraph {j} in section {i}. It contains **bold** and *italic* text.\n\n"
            ));
        }
        md.push_str("```php\nRoute::get('/', fn () => view('welcome'));\n```\n\n");
    }
    md
}

fn bench_render_simple(c: &mut Criterion) {
    let renderer = MarkdownRenderer::new();

    c.bench_function("render_simple_markdown", |b| {
        b.iter(|| renderer.render_markdown("# Hello\n\nSimple content."));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let renderer = MarkdownRenderer::new();
    let mut group = c.benchmark_group("render_by_size");

    for (sections, paragraphs) in [(5, 2), (20, 3), (50, 5)] {
        let markdown = generate_markdown(sections, paragraphs);

        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("markdown", format!("{sections}s_{paragraphs}p")),
            &markdown,
            |b, md| b.iter(|| renderer.render_markdown(md)),
        );
    }

    group.finish();
}

fn bench_render_code_blocks(c: &mut Criterion) {
    let markdown = r#"# Code Examples

```php
Route::get('/user/{id}', function (string $id) {
    return 'User '.$id;
});
```

```
plain text block
```

```javascript
function fibonacci(n) {
    if (n <= 1) return n;
    return fibonacci(n - 1) + fibonacci(n - 2);
}
```
"#;
    let renderer = MarkdownRenderer::new();

    c.bench_function("render_code_blocks", |b| {
        b.iter(|| renderer.render_markdown(markdown));
    });
}

fn bench_site_render(c: &mut Criterion) {
    let navigation = NavigationTree::new().with_version(
        "beta",
        Section::new()
            .with_leaf("index", "Introduction")
            .with_leaf("routing", "Routing"),
    );
    let storage = MockStorage::new()
        .with_file("beta/index.md", "# Introduction")
        .with_file("beta/routing.md", generate_markdown(20, 3));
    let site = Site::new(
        Arc::new(storage),
        Arc::new(navigation),
        SiteConfig::default(),
    );

    let found = PageRequest::new("beta").with_page1("routing");
    let missing = PageRequest::new("beta").with_page1("missing");

    let mut group = c.benchmark_group("site_render");
    group.bench_function("found", |b| b.iter(|| site.render(&found)));
    group.bench_function("not_found", |b| b.iter(|| site.render(&missing)));
    group.finish();
}

criterion_group!(
    benches,
    bench_render_simple,
    bench_render_varying_sizes,
    bench_render_code_blocks,
    bench_site_render,
);

criterion_main!(benches);
