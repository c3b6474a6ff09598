//! Salary profile and the hourly rate derived from it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use hg_types::ProfileError;

use crate::cost::ProductCost;

/// Unvalidated work profile as stored or typed in by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkProfileRecord {
    pub monthly_salary: Decimal,
    pub working_days: u32,
    pub hours_per_day: Decimal,
}

/// A validated salary profile: every field is strictly positive and the
/// hourly rate is a non-zero `Decimal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WorkProfileRecord", into = "WorkProfileRecord")]
pub struct WorkProfile {
    monthly_salary: Decimal,
    working_days: u32,
    hours_per_day: Decimal,
    hours_per_month: Decimal,
    hourly_rate: Decimal,
}

impl WorkProfile {
    pub fn new(
        monthly_salary: Decimal,
        working_days: u32,
        hours_per_day: Decimal,
    ) -> Result<Self, ProfileError> {
        if monthly_salary <= Decimal::ZERO {
            return Err(ProfileError::NonPositive {
                field: "monthly_salary",
                value: monthly_salary,
            });
        }
        if working_days == 0 {
            return Err(ProfileError::NonPositive {
                field: "working_days",
                value: Decimal::ZERO,
            });
        }
        if hours_per_day <= Decimal::ZERO {
            return Err(ProfileError::NonPositive {
                field: "hours_per_day",
                value: hours_per_day,
            });
        }

        let hours_per_month = Decimal::from(working_days)
            .checked_mul(hours_per_day)
            .ok_or(ProfileError::OutOfRange {
                quantity: "hours_per_month",
            })?;
        let hourly_rate = monthly_salary
            .checked_div(hours_per_month)
            .filter(|rate| !rate.is_zero())
            .ok_or(ProfileError::OutOfRange {
                quantity: "hourly_rate",
            })?;

        Ok(Self {
            monthly_salary,
            working_days,
            hours_per_day,
            hours_per_month,
            hourly_rate,
        })
    }

    pub fn monthly_salary(&self) -> Decimal {
        self.monthly_salary
    }

    pub fn working_days(&self) -> u32 {
        self.working_days
    }

    pub fn hours_per_day(&self) -> Decimal {
        self.hours_per_day
    }

    /// Paid hours in a month.
    pub fn hours_per_month(&self) -> Decimal {
        self.hours_per_month
    }

    /// Salary earned per working hour. Never zero.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// How much working time a purchase at `price` costs.
    pub fn cost_of(&self, price: Decimal) -> Result<ProductCost, ProfileError> {
        if price <= Decimal::ZERO {
            return Err(ProfileError::InvalidPrice { price });
        }

        let rate = self.hourly_rate;
        let hours_needed = price.checked_div(rate).ok_or(ProfileError::OutOfRange {
            quantity: "hours_needed",
        })?;
        let days_needed = hours_needed
            .checked_div(self.hours_per_day)
            .ok_or(ProfileError::OutOfRange {
                quantity: "days_needed",
            })?;
        debug!(
            "Cost of {}: {} hours at {}/h ({} days)",
            price, hours_needed, rate, days_needed
        );

        Ok(ProductCost {
            price,
            hours_needed,
            days_needed,
        })
    }
}

impl TryFrom<WorkProfileRecord> for WorkProfile {
    type Error = ProfileError;

    fn try_from(record: WorkProfileRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.monthly_salary,
            record.working_days,
            record.hours_per_day,
        )
    }
}

impl From<WorkProfile> for WorkProfileRecord {
    fn from(profile: WorkProfile) -> Self {
        Self {
            monthly_salary: profile.monthly_salary,
            working_days: profile.working_days,
            hours_per_day: profile.hours_per_day,
        }
    }
}

impl fmt::Display for WorkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${}/month, {} days, {}h/day",
            self.monthly_salary, self.working_days, self.hours_per_day
        )
    }
}
