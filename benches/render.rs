use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use doctree_rst::{to_string, to_string_with_options, Doctree, RstOptions};

fn article() -> Doctree {
    let mut tree = Doctree::new();
    let section = tree.add_element(tree.root(), "section");
    let title = tree.add_element(section, "title");
    tree.add_text(title, "Release notes");
    let para = tree.add_element(section, "paragraph");
    tree.add_text(para, "This release focuses on stability.");
    let list = tree.add_element(section, "bullet_list");
    tree.set_attr(list, "bullet", "-");
    for text in ["Faster startup.", "Fewer crashes.", "Smaller binaries."] {
        let item = tree.add_element(list, "list_item");
        let para = tree.add_element(item, "paragraph");
        tree.add_text(para, text);
    }
    let comment = tree.add_element(section, "comment");
    tree.add_text(comment, "drafted by the release bot");
    let para = tree.add_element(section, "paragraph");
    tree.add_text(para, "Details in the changelog.");
    tree
}

fn wide_document(paragraphs: usize) -> Doctree {
    let mut tree = Doctree::new();
    for i in 0..paragraphs {
        let para = tree.add_element(tree.root(), "paragraph");
        tree.add_text(para, format!("Paragraph number {} of the flat body.", i));
    }
    tree
}

fn deep_document(depth: usize) -> Doctree {
    let mut tree = Doctree::new();
    let mut parent = tree.root();
    for _ in 0..depth {
        let list = tree.add_element(parent, "bullet_list");
        tree.set_attr(list, "bullet", "-");
        let item = tree.add_element(list, "list_item");
        let para = tree.add_element(item, "paragraph");
        tree.add_text(para, "level");
        parent = item;
    }
    tree
}

fn inline_heavy(spans: usize) -> Doctree {
    let mut tree = Doctree::new();
    let para = tree.add_element(tree.root(), "paragraph");
    for i in 0..spans {
        let decoration = match i % 3 {
            0 => "emphasis",
            1 => "strong",
            _ => "literal",
        };
        let span = tree.add_element(para, decoration);
        tree.add_text(span, "styled");
        tree.add_text(para, " and *plain* text. ");
    }
    tree
}

fn table_document(rows: usize) -> Doctree {
    let mut tree = Doctree::new();
    let table = tree.add_element(tree.root(), "table");
    let tgroup = tree.add_element(table, "tgroup");
    for _ in 0..3 {
        let colspec = tree.add_element(tgroup, "colspec");
        tree.set_attr(colspec, "colwidth", 8);
    }
    let thead = tree.add_element(tgroup, "thead");
    let row = tree.add_element(thead, "row");
    for name in ["Key", "Value", "Notes"] {
        let entry = tree.add_element(row, "entry");
        let para = tree.add_element(entry, "paragraph");
        tree.add_text(para, name);
    }
    let tbody = tree.add_element(tgroup, "tbody");
    for i in 0..rows {
        let row = tree.add_element(tbody, "row");
        for col in 0..3 {
            let entry = tree.add_element(row, "entry");
            let para = tree.add_element(entry, "paragraph");
            tree.add_text(para, format!("cell {}-{}", i, col));
        }
    }
    tree
}

fn benchmark_render_article(c: &mut Criterion) {
    let tree = article();

    c.bench_function("render_article", |b| {
        b.iter(|| to_string(black_box(&tree)))
    });
}

fn benchmark_render_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_wide");

    for size in [10, 50, 100, 500].iter() {
        let tree = wide_document(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| to_string(black_box(tree)))
        });
    }
    group.finish();
}

fn benchmark_render_deep(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_deep");

    for size in [4, 16, 64].iter() {
        let tree = deep_document(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| to_string(black_box(tree)))
        });
    }
    group.finish();
}

fn benchmark_render_inline_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_inline");

    for size in [10, 100, 1000].iter() {
        let tree = inline_heavy(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| to_string(black_box(tree)))
        });
    }
    group.finish();
}

fn benchmark_render_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_table");

    for size in [5, 25, 100].iter() {
        let tree = table_document(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| to_string(black_box(tree)))
        });
    }
    group.finish();
}

fn benchmark_escaping_modes(c: &mut Criterion) {
    let tree = inline_heavy(100);
    let plain = RstOptions::new().with_escape_text(false);

    let mut group = c.benchmark_group("escaping");

    group.bench_function("escape_on", |b| b.iter(|| to_string(black_box(&tree))));

    group.bench_function("escape_off", |b| {
        b.iter(|| to_string_with_options(black_box(&tree), plain.clone()))
    });

    group.finish();
}

fn benchmark_parse_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_tree");

    for size in [10, 50, 100, 500].iter() {
        let json = serde_json::to_string(&wide_document(*size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            b.iter(|| serde_json::from_str::<Doctree>(black_box(json)))
        });
    }
    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let json = serde_json::to_string(&article()).unwrap();

    c.bench_function("roundtrip_article", |b| {
        b.iter(|| {
            let tree: Doctree = serde_json::from_str(black_box(&json)).unwrap();
            to_string(black_box(&tree)).unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_render_article,
    benchmark_render_wide,
    benchmark_render_deep,
    benchmark_render_inline_heavy,
    benchmark_render_tables,
    benchmark_escaping_modes,
    benchmark_parse_tree,
    benchmark_roundtrip
);
criterion_main!(benches);
