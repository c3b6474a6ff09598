//! `hourglass cost`: express a purchase price as working time.

use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use hg_types::{validation_error, HgResult};
use hg_worktime::{ProductCost, WorkProfile};

use crate::config::HourglassConfig;

const DEFAULT_WORKING_DAYS: u32 = 22;
const DEFAULT_HOURS_PER_DAY: i64 = 8;

#[derive(Debug, Clone, Default, Args)]
pub struct CostArgs {
    /// Purchase price
    pub price: Decimal,

    /// Monthly salary
    #[arg(long)]
    pub salary: Option<Decimal>,

    /// Working days per month
    #[arg(long)]
    pub days: Option<u32>,

    /// Working hours per day
    #[arg(long)]
    pub hours: Option<Decimal>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl CostArgs {
    /// Build the profile from flags, filling gaps from the configured profile
    /// and then from a 22-day, 8-hour month.
    pub fn resolve_profile(&self, configured: Option<&WorkProfile>) -> HgResult<WorkProfile> {
        let salary = self
            .salary
            .or_else(|| configured.map(|p| p.monthly_salary()))
            .ok_or_else(|| {
                validation_error!("no work profile configured; pass --salary or set one in the config file")
            })?;
        let days = self
            .days
            .or_else(|| configured.map(|p| p.working_days()))
            .unwrap_or(DEFAULT_WORKING_DAYS);
        let hours = self
            .hours
            .or_else(|| configured.map(|p| p.hours_per_day()))
            .unwrap_or_else(|| Decimal::new(DEFAULT_HOURS_PER_DAY, 0));

        Ok(WorkProfile::new(salary, days, hours)?)
    }
}

#[derive(Debug, Serialize)]
struct CostReport<'a> {
    profile: &'a WorkProfile,
    hourly_rate: Decimal,
    cost: &'a ProductCost,
    time: String,
    summary: String,
}

pub fn run(args: &CostArgs, config: &HourglassConfig) -> HgResult<()> {
    let profile = args.resolve_profile(config.profile.as_ref())?;
    info!("Using work profile {}", profile);

    let cost = profile.cost_of(args.price)?;

    if args.json {
        let report = CostReport {
            profile: &profile,
            hourly_rate: profile.hourly_rate().round_dp(2),
            cost: &cost,
            time: cost.formatted_time(&profile),
            summary: cost.describe(&profile),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&profile, &cost));
    }
    Ok(())
}

pub fn render_text(profile: &WorkProfile, cost: &ProductCost) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Hourly rate  ${:.2}/hour ({} hours per month)\n",
        profile.hourly_rate(),
        profile.hours_per_month()
    ));
    out.push_str(&format!(
        "Work time    {} ({:.1} total hours, {:.1} days)\n",
        cost.formatted_time(profile),
        cost.hours_needed,
        cost.days_needed
    ));
    out.push_str(&cost.describe(profile));
    out.push('\n');
    out
}
