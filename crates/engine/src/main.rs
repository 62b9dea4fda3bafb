//! Calgrid - prints the week grid of a month.
//!
//! Usage: `calgrid [YYYY-MM]`. Without an argument the current month is shown.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use calgrid_domain::{DateValue, FormatKey};
use calgrid_engine::infrastructure::settings::AdapterSettings;
use calgrid_engine::{App, CalendarAdapter, DateInput};

fn main() -> anyhow::Result<()> {
    // Load environment from repo root, then from the working directory.
    load_dotenv_from_repo_root();
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calgrid_engine=info,calgrid=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = AdapterSettings::from_env()?;
    tracing::info!(locale = settings.locale_or_default(), "Starting calgrid");

    let app = App::with_system_ports(settings);
    let calendar = &app.calendar;

    let month = match std::env::args().nth(1) {
        Some(arg) => parse_month_arg(calendar, &arg)?,
        None => calendar
            .date(DateInput::Now)?
            .context("clock returned no date")?,
    };

    print!("{}", render_month(calendar, &month)?);
    Ok(())
}

/// `YYYY-MM` as the first day of that month.
fn parse_month_arg(calendar: &CalendarAdapter, arg: &str) -> anyhow::Result<DateValue> {
    calendar
        .parse(&format!("{}-01", arg.trim()), "YYYY-MM")?
        .with_context(|| format!("expected a month as YYYY-MM, got '{}'", arg))
}

fn render_month(calendar: &CalendarAdapter, month: &DateValue) -> anyhow::Result<String> {
    let mut out = String::new();

    let title = calendar
        .format(Some(month), FormatKey::MonthAndYear)
        .unwrap_or_default();
    out.push_str(&format!("{:^27}\n", title));

    let header: Vec<String> = calendar
        .get_weekdays()?
        .iter()
        .map(|name| format!("{:>3}", name))
        .collect();
    out.push_str(&header.join(" "));
    out.push('\n');

    for week in calendar.get_week_array(month)?.weeks() {
        let cells: Vec<String> = week
            .iter()
            .map(|day| {
                if calendar.is_same_month(day, month) {
                    format!("{:>3}", calendar.format_number(&day.day().to_string()))
                } else {
                    "   ".to_string()
                }
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }

    Ok(out)
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
