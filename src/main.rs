use anyhow::{Context, Result};
use tracing::info;
use tracing_appender::rolling;

use rona_attendance::calendar::Period;
use rona_attendance::config::Config;
use rona_attendance::report::DashboardReport;
use rona_attendance::store::InMemoryStore;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "report.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(data_file = %config.data_file.display(), "Report starting...");

    let store = InMemoryStore::load(&config.data_file)
        .with_context(|| format!("loading {}", config.data_file.display()))?;

    let period = Period::containing(config.report_date, config.granularity, config.week_starts_on);
    let report = DashboardReport::build(&store, period, config.policy)?;

    info!(
        workers = report.workers.len(),
        attendance_rate = report.organization.attendance_rate,
        "Report built"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
