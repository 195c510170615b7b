//! Colorful console output for the phone risk service.
//!
//! Provides a custom `tracing` layer that formats service events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (listening/shutdown) and evaluations
//! - **WARN**: Rejected requests
//! - **DEBUG**: Health checks and per-request spans from `tower-http`
//!
//! Events from other targets are printed as plain `LEVEL target: message`
//! lines so that nothing the filter lets through is lost.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static EVALUATIONS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target prefix of events rendered with the service format.
const SERVICE_TARGET: &str = "phonerisk";

/// Initializes the service console output.
///
/// `default_filter` is used when `RUST_LOG` is unset or unparseable.
/// Safe to call multiple times - only the first call has effect.
pub fn init(default_filter: &str, banner: bool) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);

        if banner {
            print_banner();
        }

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ServiceConsoleLayer)
            .try_init();
    });
}

// Returns elapsed time since init.
fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

fn print_banner() {
    let banner = r#"
 ____  _                      ____  _     _
|  _ \| |__   ___  _ __   ___|  _ \(_)___| | __
| |_) | '_ \ / _ \| '_ \ / _ \ |_) | / __| |/ /
|  __/| | | | (_) | | | |  __/  _ <| \__ \   <
|_|   |_| |_|\___/|_| |_|\___|_| \_\_|___/_|\_\
"#;

    let version_line = format!(
        "              v{} - Phone Number Risk Assessment\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats service events with colors.
pub struct ServiceConsoleLayer;

impl<S: Subscriber> Layer<S> for ServiceConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level(), metadata.target());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    addr: Option<String>,
    shape: Option<String>,
    risk_score: Option<f64>,
    risk_level: Option<String>,
    reason: Option<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "message" => self.message = Some(s),
            "addr" => self.addr = Some(s),
            "shape" => self.shape = Some(s),
            "risk_level" => self.risk_level = Some(s),
            "reason" => self.reason = Some(s),
            _ => {}
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "risk_score" {
            self.risk_score = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "addr" => self.addr = Some(value.to_string()),
            "shape" => self.shape = Some(value.to_string()),
            "risk_level" => self.risk_level = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level, target: &str) -> String {
    if !target.starts_with(SERVICE_TARGET) {
        return format_foreign(v, level, target);
    }

    match v.event.as_deref().unwrap_or("") {
        "listening" => format_listening(v),
        "shutdown" => format_shutdown(),
        "evaluated" => format_evaluated(v),
        "rejected" => format_rejected(v),
        _ => format_foreign(v, level, target),
    }
}

fn format_elapsed() -> String {
    format!("{:>8.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_listening(v: &EventVisitor) -> String {
    let addr = v.addr.as_deref().unwrap_or("unknown");

    format!(
        "{} {} Listening on {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        format!("http://{}", addr).bright_cyan().underline()
    )
}

fn format_shutdown() -> String {
    let total = EVALUATIONS.load(Ordering::Relaxed);

    format!(
        "{} {} Shutting down │ {} evaluations served",
        format_elapsed(),
        "■".bright_cyan().bold(),
        total.to_formatted_string(&Locale::en).bright_yellow()
    )
}

fn format_evaluated(v: &EventVisitor) -> String {
    let count = EVALUATIONS.fetch_add(1, Ordering::Relaxed) + 1;
    let shape = v.shape.as_deref().unwrap_or("unknown");
    let level = v.risk_level.as_deref().unwrap_or("unknown");
    let score = v
        .risk_score
        .map(|s| format!("{:>5.1}", s))
        .unwrap_or_else(|| "  N/A".to_string());

    format!(
        "{} {} #{:<8} │ {:<8} │ score {} │ {}",
        format_elapsed(),
        "✓".bright_green(),
        count.to_formatted_string(&Locale::en).white(),
        shape.white(),
        score.bright_magenta().bold(),
        format_risk_level(level)
    )
}

fn format_rejected(v: &EventVisitor) -> String {
    let reason = v.reason.as_deref().unwrap_or("unknown");

    format!(
        "{} {} Rejected │ {}",
        format_elapsed(),
        "✗".bright_red(),
        reason.yellow()
    )
}

fn format_foreign(v: &EventVisitor, level: Level, target: &str) -> String {
    let Some(message) = v.message.as_deref() else {
        return String::new();
    };

    format!(
        "{} {:>5} {}: {}",
        format_elapsed(),
        format_level(level),
        target.bright_black(),
        message
    )
}

fn format_level(level: Level) -> String {
    match level {
        Level::ERROR => "ERROR".bright_red().bold().to_string(),
        Level::WARN => "WARN".yellow().bold().to_string(),
        Level::INFO => "INFO".bright_green().to_string(),
        Level::DEBUG => "DEBUG".bright_blue().to_string(),
        Level::TRACE => "TRACE".bright_black().to_string(),
    }
}

fn format_risk_level(level: &str) -> String {
    match level {
        "low" => level.bright_green().to_string(),
        "medium" => level.bright_yellow().to_string(),
        "high" => level.bright_red().bold().to_string(),
        _ => level.white().to_string(),
    }
}
