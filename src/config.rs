use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate, Weekday};
use dotenvy::dotenv;
use tracing::Level;

use crate::analytics::AttendancePolicy;
use crate::calendar::{Granularity, week_start_from_index};

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: Level,

    // Reporting
    pub week_starts_on: Weekday,
    pub policy: AttendancePolicy,
    pub granularity: Granularity,
    pub report_date: NaiveDate,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let week_index: u32 = var("RONA_WEEK_STARTS_ON", "1")
            .trim()
            .parse()
            .context("RONA_WEEK_STARTS_ON must be a number from 0 (Sunday) to 6")?;
        let week_starts_on = week_start_from_index(week_index)
            .ok_or_else(|| anyhow!("RONA_WEEK_STARTS_ON out of range: {week_index}"))?;

        let late_counts: bool = var("RONA_LATE_COUNTS_AS_ATTENDED", "true")
            .trim()
            .parse()
            .context("RONA_LATE_COUNTS_AS_ATTENDED must be true or false")?;

        let granularity: Granularity = var("RONA_GRANULARITY", "month")
            .trim()
            .to_lowercase()
            .parse()
            .context("RONA_GRANULARITY must be month or week")?;

        let report_date = match lookup("RONA_REPORT_DATE") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("RONA_REPORT_DATE is not an ISO date: {raw}"))?,
            None => Local::now().date_naive(),
        };

        let log_level: Level = var("RONA_LOG_LEVEL", "info")
            .trim()
            .parse()
            .map_err(|_| anyhow!("RONA_LOG_LEVEL must be one of trace, debug, info, warn, error"))?;

        Ok(Self {
            data_file: var("RONA_DATA_FILE", "data/demo.json").into(),
            log_dir: var("RONA_LOG_DIR", "logs").into(),
            log_level,
            week_starts_on,
            policy: AttendancePolicy::from_late_counts_as_attended(late_counts),
            granularity,
            report_date,
        })
    }
}
