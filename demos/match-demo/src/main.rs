//! Match Demo
//!
//! Loads a match configuration (TOML or YAML), runs every participant over
//! the same cities and prints the ranking as Markdown.
//!
//! ```text
//! cargo run -p match-demo -- demos/match-demo/match.toml [ranking.csv]
//! ```

use std::env;
use std::process::ExitCode;

use salesman::{console, run_match_from_file, CsvExporter, MatchOutcome};

fn main() -> ExitCode {
    console::init();

    let mut args = env::args().skip(1);
    let config_path = args
        .next()
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/match.toml").to_string());
    let csv_path = args.next();

    let outcome = match run_match_from_file(&config_path) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    print_winning_tour(&outcome);
    println!();
    println!("{}", outcome.to_markdown());

    if let Some(path) = csv_path {
        if let Err(err) = CsvExporter::to_file(&outcome.ranking, &path) {
            eprintln!("error: could not write {}: {}", path, err);
            return ExitCode::FAILURE;
        }
        println!("Ranking written to {}", path);
    }

    ExitCode::SUCCESS
}

/// Reveals the winner's tour one edge at a time.
fn print_winning_tour(outcome: &MatchOutcome) {
    let Some(winner) = outcome.ranking.winner() else {
        println!("No participant produced a tour.");
        return;
    };
    let Some(tour) = winner.result.tour() else {
        return;
    };

    println!("\nWinning tour by {} ({}):", winner.name, winner.kind.label());
    for (step, (from, to)) in tour.edges().enumerate() {
        println!(
            "  {:>2}. {} -> {}",
            step + 1,
            outcome.points.display_name(from),
            outcome.points.display_name(to)
        );
    }
}
