//! Purchase prices expressed as working time.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::profile::WorkProfile;

/// Working time needed to pay for a purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCost {
    pub price: Decimal,
    pub hours_needed: Decimal,
    /// Working days, at the profile's hours per day.
    pub days_needed: Decimal,
}

impl ProductCost {
    /// Human-readable working time, e.g. "10h 34m" or "3d 2h".
    pub fn formatted_time(&self, profile: &WorkProfile) -> String {
        format_work_time(
            self.hours_needed.to_f64().unwrap_or(f64::MAX),
            profile.hours_per_day().to_f64().unwrap_or(8.0),
        )
    }

    /// One-sentence summary of what the purchase costs in work.
    pub fn describe(&self, profile: &WorkProfile) -> String {
        let mut sentence = format!(
            "To afford this ${:.2} purchase, you need to work {}",
            self.price,
            self.formatted_time(profile)
        );
        if self.days_needed >= Decimal::ONE {
            let plural = if self.days_needed >= Decimal::TWO { "s" } else { "" };
            sentence.push_str(&format!(
                " or about {:.1} working day{}",
                self.days_needed, plural
            ));
        }
        sentence.push_str(". Is it worth it?");
        sentence
    }
}

fn plural(n: u64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Render a number of working hours the way a person would say it.
///
/// Under an hour is given in minutes, under a day in hours and minutes, and
/// anything longer in working days of `hours_per_day` plus leftover hours.
pub fn format_work_time(hours: f64, hours_per_day: f64) -> String {
    let hours = hours.max(0.0);
    let total_minutes = (hours * 60.0).round() as u64;

    if total_minutes < 60 {
        return format!("{} minute{}", total_minutes, plural(total_minutes));
    }

    if hours < 24.0 {
        let whole_hours = total_minutes / 60;
        let minutes = total_minutes % 60;
        return if minutes > 0 {
            format!("{}h {}m", whole_hours, minutes)
        } else {
            format!("{} hour{}", whole_hours, plural(whole_hours))
        };
    }

    let mut days = (hours / hours_per_day).floor() as u64;
    let mut remaining = (hours % hours_per_day).round();
    if remaining >= hours_per_day {
        days += 1;
        remaining = 0.0;
    }
    let remaining = remaining as u64;

    if remaining > 0 {
        format!("{}d {}h", days, remaining)
    } else {
        format!("{} day{}", days, plural(days))
    }
}
