//! Colorful console output for solver and match events.
//!
//! Provides a custom `tracing` layer that formats Salesman events with colors.
//! Available with the `console` feature.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVE: &str = "salesman=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. The
/// `RUST_LOG` environment variable overrides the default `salesman=info`
/// filter.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // Another subscriber may already be installed by the host program.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SalesmanConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats Salesman events with colors.
pub struct SalesmanConsoleLayer;

impl<S: Subscriber> Layer<S> for SalesmanConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();
        if !target.starts_with("salesman") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    name: Option<String>,
    solver: Option<String>,
    kind: Option<String>,
    participant: Option<String>,
    winner: Option<String>,
    n: Option<u64>,
    limit: Option<u64>,
    index: Option<u64>,
    participants: Option<u64>,
    evaluations: Option<u64>,
    duration_ms: Option<u64>,
    cost: Option<f64>,
    best_cost: Option<f64>,
    feasible: Option<bool>,
}

impl EventVisitor {
    fn set_str(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "name" => self.name = Some(value),
            "solver" => self.solver = Some(value),
            "kind" => self.kind = Some(value),
            "participant" => self.participant = Some(value),
            "winner" => self.winner = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_str(field, s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_str(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "n" => self.n = Some(value),
            "limit" => self.limit = Some(value),
            "index" => self.index = Some(value),
            "participants" => self.participants = Some(value),
            "evaluations" => self.evaluations = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "cost" => self.cost = Some(value),
            "best_cost" => self.best_cost = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "feasible" {
            self.feasible = Some(value);
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "match_start" => format_match_start(v),
        "solve_end" => format_solve_end(v),
        "capacity_exceeded" => format_capacity_exceeded(v),
        "participant_end" => format_participant_end(v),
        "match_end" => format_match_end(v),
        _ => String::new(),
    }
}

fn format_match_start(v: &EventVisitor) -> String {
    let name = v.name.as_deref().unwrap_or("match");
    format!(
        "{} {} {} {} started: points ({}), participants ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Match]".bright_cyan(),
        name.white().bold(),
        v.n.unwrap_or(0).to_string().bright_yellow(),
        v.participants.unwrap_or(0).to_string().bright_yellow()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let solver = v.solver.as_deref().unwrap_or("solver");
    format!(
        "{} {} {} solved: cost ({}), time spent ({}), evaluations ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        format!("[{}]", solver).bright_cyan(),
        format_cost(v.cost, v.feasible.unwrap_or(false)),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        v.evaluations
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta()
    )
}

fn format_capacity_exceeded(v: &EventVisitor) -> String {
    let solver = v.solver.as_deref().unwrap_or("solver");
    format!(
        "{} {} {} declined: {} points exceeds the limit of {}",
        timestamp().bright_black(),
        "WARN".bright_yellow(),
        format!("[{}]", solver).bright_cyan(),
        v.n.unwrap_or(0).to_string().bright_red(),
        v.limit.unwrap_or(0).to_string().yellow()
    )
}

fn format_participant_end(v: &EventVisitor) -> String {
    let participant = v.participant.as_deref().unwrap_or("?");
    let kind = v.kind.as_deref().unwrap_or("?");
    format!(
        "    {} #{} {} ({}) | {}",
        "->".bright_blue(),
        (v.index.unwrap_or(0) + 1).to_string().white(),
        participant.white().bold(),
        kind,
        format_cost(v.cost, v.feasible.unwrap_or(false))
    )
}

fn format_match_end(v: &EventVisitor) -> String {
    let name = v.name.as_deref().unwrap_or("match");
    let mut output = format!(
        "{} {} {} {} ended",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Match]".bright_cyan(),
        name.white().bold()
    );

    let winner = match (&v.winner, v.best_cost) {
        (Some(winner), Some(cost)) if cost.is_finite() => Some(format!("{} with cost {:.2}", winner, cost)),
        _ => None,
    };
    let status = match &winner {
        Some(_) => format!("{:<54}", "WINNER").bright_green().bold().to_string(),
        None => format!("{:<54}", "NO FEASIBLE TOUR").bright_red().bold().to_string(),
    };
    let line = format!("{:<54}", winner.unwrap_or_default());

    output.push_str("\n\n");
    output.push_str(&"╔══════════════════════════════════════════════════════════╗".bright_cyan().to_string());
    output.push('\n');
    output.push_str(&format!("{}  {}  {}", "║".bright_cyan(), status, "║".bright_cyan()));
    output.push('\n');
    output.push_str(&format!("{}  {}  {}", "║".bright_cyan(), line, "║".bright_cyan()));
    output.push('\n');
    output.push_str(&"╚══════════════════════════════════════════════════════════╝".bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_cost(cost: Option<f64>, feasible: bool) -> String {
    match cost {
        Some(cost) if feasible && cost.is_finite() => format!("{:.2}", cost).bright_green().to_string(),
        _ => "N/A".bright_red().to_string(),
    }
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_events_are_silent() {
        let visitor = EventVisitor {
            event: Some("two_opt_move".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor).is_empty());
    }

    #[test]
    fn test_participant_line_mentions_name() {
        let visitor = EventVisitor {
            event: Some("participant_end".to_string()),
            participant: Some("Ana".to_string()),
            kind: Some("held_karp".to_string()),
            index: Some(0),
            cost: Some(12.0),
            feasible: Some(true),
            ..EventVisitor::default()
        };
        let line = format_event(&visitor);
        assert!(line.contains("Ana"));
        assert!(line.contains("held_karp"));
        assert!(line.contains("12.00"));
    }
}
