//! Report generation for match rankings.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::entry::{MatchEntry, Ranking};

/// CSV exporter for match rankings.
///
/// One row per entry, in rank order, with columns for position,
/// participant, solver, cost, note, evaluations and elapsed microseconds.
///
/// # Example
///
/// ```
/// use salesman_config::SolverKind;
/// use salesman_core::{Tour, TourResult};
/// use salesman_match::{CsvExporter, MatchEntry, Ranking};
///
/// let ranking = Ranking::new(3, vec![
///     MatchEntry::new(0, "Ana", SolverKind::HeldKarp, TourResult::found(Tour::identity(3), 12.0)),
/// ]);
///
/// let csv = CsvExporter::to_string(&ranking);
/// assert!(csv.starts_with("position,participant,solver,cost,note,evaluations,elapsed_us\n"));
/// assert!(csv.contains("1,Ana,held_karp,12,"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports a ranking to a CSV string.
    pub fn to_string(ranking: &Ranking) -> String {
        let mut output = String::new();

        writeln!(
            output,
            "position,participant,solver,cost,note,evaluations,elapsed_us"
        )
        .unwrap();

        for (position, entry) in ranking.iter().enumerate() {
            let note = entry
                .result
                .note()
                .map(ToString::to_string)
                .unwrap_or_default();
            let statistics = entry.result.statistics();
            writeln!(
                output,
                "{},{},{},{},{},{},{}",
                position + 1,
                csv_field(&entry.name),
                entry.kind.name(),
                entry.cost(),
                csv_field(&note),
                statistics.evaluations,
                statistics.elapsed.as_micros(),
            )
            .unwrap();
        }

        output
    }

    /// Exports a ranking to a CSV file.
    pub fn to_file(ranking: &Ranking, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(ranking))
    }

    /// Writes a ranking as CSV to a writer.
    pub fn write<W: Write>(ranking: &Ranking, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(ranking).as_bytes())
    }
}

/// Markdown report generator.
///
/// Produces a title, the match summary and a ranking table. Entries
/// without a tour show `N/A` as their cost.
///
/// # Example
///
/// ```
/// use salesman_config::SolverKind;
/// use salesman_core::{Tour, TourResult};
/// use salesman_match::{MarkdownReport, MatchEntry, Ranking};
///
/// let ranking = Ranking::new(12, vec![
///     MatchEntry::new(0, "Ana", SolverKind::HeldKarp, TourResult::found(Tour::identity(12), 40.0)),
///     MatchEntry::new(1, "Bo", SolverKind::BruteForce, TourResult::capacity_exceeded("exhaustive search", 12, 9)),
/// ]);
///
/// let md = MarkdownReport::to_string("Demo", &ranking);
/// assert!(md.contains("# Match: Demo"));
/// assert!(md.contains("| 1 | Ana | Held-Karp | 40.00 |"));
/// assert!(md.contains("| 2 | Bo | Brute force | N/A |"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(title: &str, ranking: &Ranking) -> String {
        let mut output = String::new();

        writeln!(output, "# Match: {}", title).unwrap();
        writeln!(output).unwrap();

        writeln!(output, "- **Points**: {}", ranking.points()).unwrap();
        writeln!(output, "- **Participants**: {}", ranking.len()).unwrap();
        match ranking.winner() {
            Some(winner) => writeln!(
                output,
                "- **Winner**: {} ({}, {:.2})",
                winner.name,
                winner.kind.label(),
                winner.cost()
            )
            .unwrap(),
            None => writeln!(output, "- **Winner**: none").unwrap(),
        }
        writeln!(output).unwrap();

        writeln!(output, "## Ranking").unwrap();
        writeln!(output).unwrap();

        if ranking.is_empty() {
            writeln!(output, "*No participants.*").unwrap();
            return output;
        }

        writeln!(output, "| # | Participant | Solver | Cost | Note | Time (ms) |").unwrap();
        writeln!(output, "|---|-------------|--------|------|------|-----------|").unwrap();
        for (position, entry) in ranking.iter().enumerate() {
            writeln!(
                output,
                "| {} | {} | {} | {} | {} | {:.3} |",
                position + 1,
                entry.name,
                entry.kind.label(),
                format_cost(entry),
                entry
                    .result
                    .note()
                    .map_or_else(|| "-".to_string(), ToString::to_string),
                entry.result.statistics().elapsed.as_secs_f64() * 1000.0,
            )
            .unwrap();
        }

        output
    }

    /// Writes a Markdown report to a file.
    pub fn to_file(title: &str, ranking: &Ranking, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(title, ranking))
    }

    /// Writes a Markdown report to a writer.
    pub fn write<W: Write>(title: &str, ranking: &Ranking, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(title, ranking).as_bytes())
    }
}

fn format_cost(entry: &MatchEntry) -> String {
    if entry.is_feasible() {
        format!("{:.2}", entry.cost())
    } else {
        "N/A".to_string()
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
