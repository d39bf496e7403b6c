//! Search indexer benchmarks.
//!
//! Measures typing-time searches over a long article, the cost of a
//! content change with an active query, and painting one frame of
//! highlights over a dense result set.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use artv::markup::{MarkdownProjector, MarkupProjector};
use artv::search::{SearchDecorations, SearchIndexer, find_matches};
use artv::view::{HighlightStyles, highlighted_lines};
use ratatui::style::{Modifier, Style};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

/// Roughly 2MB of markdown: headings, paragraphs and lists.
fn generate_article() -> String {
    const SECTIONS: usize = 2_000;

    let paragraph = "Ownership is a set of rules that govern how a program manages memory. \
        Borrowing lets code refer to a value without taking **ownership** of it. ";
    let mut article = String::from("# The Book\n\n");
    for i in 0..SECTIONS {
        article.push_str(&format!("## Section {i}\n\n"));
        article.push_str(&paragraph.repeat(6));
        article.push_str("\n\n- first point\n- second point with `code`\n\n");
    }
    article
}

fn benchmark_search(c: &mut Criterion) {
    let article = generate_article();
    let projection = MarkdownProjector.strip(&article);
    println!(
        "Benchmark article: {} bytes markdown, {} bytes projected",
        article.len(),
        projection.len()
    );

    c.bench_function("find_matches_common_term", |b| {
        b.iter(|| black_box(find_matches(black_box(&projection), black_box("ownership"))))
    });

    c.bench_function("find_matches_rare_term", |b| {
        b.iter(|| black_box(find_matches(black_box(&projection), black_box("Section 1999"))))
    });

    c.bench_function("find_matches_no_match", |b| {
        b.iter(|| black_box(find_matches(black_box(&projection), black_box("XYZNONEXISTENT"))))
    });

    let mut indexer = SearchIndexer::new();
    indexer.set_content(&article, &MarkdownProjector);

    // Each keystroke re-runs the query with the cursor kept.
    c.bench_function("indexer_incremental_typing", |b| {
        b.iter(|| {
            for query in ["B", "Bo", "Bor", "Borr", "Borro", "Borrow"] {
                black_box(indexer.search(black_box(query)).len());
            }
        })
    });

    c.bench_function("indexer_content_change_with_query", |b| {
        let edited = format!("{article}\nBorrowing again.\n");
        let mut flip = false;
        b.iter(|| {
            let mut indexer = SearchIndexer::new();
            indexer.search("Borrow");
            flip = !flip;
            let content = if flip { &article } else { &edited };
            black_box(indexer.set_content(black_box(content), &MarkdownProjector))
        })
    });
}

fn benchmark_highlight(c: &mut Criterion) {
    let content = MarkdownProjector.render(&generate_article());
    let spans = find_matches(content.plain(), "e");
    let mut decorations = SearchDecorations::new();
    decorations.apply(&spans, spans.len() / 2);
    let styles = HighlightStyles {
        search_match: Style::default().add_modifier(Modifier::UNDERLINED),
        search_focus: Style::default().add_modifier(Modifier::REVERSED),
    };
    let middle = content.lines().len() / 2;

    c.bench_function("highlight_one_frame_dense_matches", |b| {
        b.iter(|| {
            black_box(highlighted_lines(
                black_box(&content),
                &decorations,
                middle..middle + 50,
                styles,
            ))
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(10));
    targets = benchmark_search, benchmark_highlight
}

criterion_main!(benches);
