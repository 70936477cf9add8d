//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use terminal_size::{terminal_size, Width};

use crate::engine::{SearchReport, SortReport};
use crate::record::{Record, RecordSet};
use crate::registry::AlgorithmRegistry;
use crate::sorting::SortStrategy;
use crate::utils::bench::{BenchmarkResult, Cell};

/// Below this many records insertion sort is the suggested strategy
pub const INSERTION_THRESHOLD: usize = 200;

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Strategy suggested for a data set of `n` records
pub fn recommend_strategy(n: usize) -> SortStrategy {
    if n < INSERTION_THRESHOLD {
        SortStrategy::InsertionIterative
    } else {
        SortStrategy::QuickIterative
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

fn format_cell(cell: Option<&Cell>) -> String {
    match cell.and_then(Cell::millis) {
        Some(ms) => format!("{:.3}", ms),
        None => "-".to_string(),
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " Sort & Search Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!("║{}{}{}║", " ".repeat(padding), title, " ".repeat(right_padding));
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!("  {:<16} [{}] - {}", algo.name(), algo.category(), algo.description());
        for variant in algo.algorithms() {
            println!("      {:<22} {}", variant.name(), variant.description());
        }
    }
}

/// Print the benchmark table, one row per size, `-` for skipped cells
pub fn print_benchmark_table(result: &BenchmarkResult) {
    if result.rows.is_empty() {
        return;
    }

    let term_width = get_term_width();
    let size_width = 8;
    let col_width = term_width
        .saturating_sub(size_width + 4)
        .checked_div(result.columns.len())
        .unwrap_or(0)
        .clamp(10, 22);
    let table_width = size_width + result.columns.len() * (col_width + 1);

    println!("  Key: {}   Search target: {}", result.key, result.search_target);
    println!("  {}", "─".repeat(table_width));
    print!("  {:>size_width$}", "N");
    for algorithm in &result.columns {
        print!(" {:>col_width$}", truncate(algorithm.label(), col_width));
    }
    println!();
    println!("  {}", "─".repeat(table_width));

    for row in &result.rows {
        print!("  {:>size_width$}", row.size);
        for &algorithm in &result.columns {
            print!(" {:>col_width$}", format_cell(row.cell(algorithm)));
        }
        println!();
    }
    println!();

    let skips: Vec<_> = result
        .samples()
        .filter_map(|s| match s.cell {
            Cell::Skipped { reason } => {
                Some(format!("{} at N={}: {}", s.algorithm, s.size, reason))
            }
            Cell::Measured { .. } => None,
        })
        .collect();
    if !skips.is_empty() {
        println!("  Skipped:");
        for skip in skips {
            println!("    {}", skip);
        }
        println!();
    }
}

/// Print up to `limit` records as a table
pub fn print_records(records: &RecordSet, limit: usize) {
    let term_width = get_term_width();
    let title_width = term_width.saturating_sub(48).max(16);

    println!(
        "  {:>4}  {:<title_width$} {:>6} {:>6} {:>10}  {}",
        "#", "Title", "Rating", "Year", "Votes", "Genre"
    );
    let rule_width = (title_width + 48).min(term_width.saturating_sub(2));
    println!("  {}", "─".repeat(rule_width));
    for (i, record) in records.iter().take(limit).enumerate() {
        print_record_line(i, record, title_width);
    }
    if records.len() > limit {
        println!("  ... {} more", records.len() - limit);
    }
    println!();
}

fn print_record_line(index: usize, record: &Record, title_width: usize) {
    let year = record.year.map_or_else(|| "-".to_string(), |y| format!("{:.0}", y));
    println!(
        "  {:>4}  {:<title_width$} {:>6.1} {:>6} {:>10.0}  {}",
        index,
        truncate(&record.title, title_width),
        record.rating,
        year,
        record.votes,
        record.genre
    );
}

/// Print the outcome of a single sort
pub fn print_sort_report(report: &SortReport, limit: usize) {
    let n = report.records.len();
    let suggested = recommend_strategy(n);
    println!("  Records: {}   Key: {}", n, report.key);
    if suggested != report.strategy {
        println!("  Suggested strategy for {} records: {}", n, suggested);
    }
    println!("  {} took {:.3} ms", report.strategy, report.elapsed_ms());
    println!();
    print_records(&report.records, limit);
}

/// Print the outcome of a single search
pub fn print_search_report(report: &SearchReport) {
    match report.found() {
        Some(record) => {
            println!(
                "  Found {} = {} at index {}",
                report.key,
                report.target,
                report.index_or_sentinel()
            );
            let title_width = get_term_width().saturating_sub(48).max(16);
            print_record_line(report.index_or_sentinel() as usize, record, title_width);
        }
        None => println!(
            "  No record with {} = {} (index {})",
            report.key,
            report.target,
            report.index_or_sentinel()
        ),
    }
    println!("  Search took {:.6} ms", report.search_elapsed_ms());
    println!();
}

/// Print each family's verification outcome; returns whether all passed
pub fn print_verification(registry: &AlgorithmRegistry) -> bool {
    let mut all_ok = true;
    for algo in registry.all() {
        match algo.verify() {
            Ok(()) => println!("  ✅ {:<16} passed", algo.name()),
            Err(e) => {
                all_ok = false;
                println!("  ❌ {:<16} failed: {}", algo.name(), e);
            }
        }
    }
    all_ok
}
