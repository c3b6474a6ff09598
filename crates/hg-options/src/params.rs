use serde::{Deserialize, Serialize};
use std::fmt;

use hg_types::{OptionField, PricingError};

/// Option type, call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "Call"),
            OptionKind::Put => write!(f, "Put"),
        }
    }
}

impl std::str::FromStr for OptionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            other => Err(format!("unknown option kind '{other}', expected call or put")),
        }
    }
}

/// Inputs for a single European option valuation.
///
/// Missing fields deserialize to the values of [`OptionParameters::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionParameters {
    /// Current underlying spot price.
    pub spot: f64,
    /// Contract strike price.
    pub strike: f64,
    /// Time to expiry in years.
    pub time_to_expiry: f64,
    /// Annualised, continuously compounded risk-free rate (e.g. 0.05 = 5 %).
    pub risk_free_rate: f64,
    /// Annualised volatility of log-returns (e.g. 0.20 = 20 %).
    pub volatility: f64,
    /// Call or put.
    pub kind: OptionKind,
}

impl OptionParameters {
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
        kind: OptionKind,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
            kind,
        }
    }

    /// Same market inputs, other payoff branch.
    pub fn with_kind(self, kind: OptionKind) -> Self {
        Self { kind, ..self }
    }

    /// Check every input, reporting the first offending field.
    ///
    /// Spot, strike, time to expiry and volatility must be finite and
    /// strictly positive; the rate only has to be finite.
    pub fn validate(&self) -> Result<(), PricingError> {
        let positive = [
            (OptionField::Spot, self.spot),
            (OptionField::Strike, self.strike),
            (OptionField::TimeToExpiry, self.time_to_expiry),
            (OptionField::Volatility, self.volatility),
        ];
        for (field, value) in positive {
            check_finite(field, value)?;
            if value <= 0.0 {
                return Err(PricingError::InvalidParameter {
                    field,
                    value,
                    reason: "must be positive",
                });
            }
        }
        check_finite(OptionField::RiskFreeRate, self.risk_free_rate)
    }

    /// Payoff if exercised immediately.
    pub fn intrinsic_value(&self) -> f64 {
        let iv = match self.kind {
            OptionKind::Call => self.spot - self.strike,
            OptionKind::Put => self.strike - self.spot,
        };
        iv.max(0.0)
    }

    /// True when the option is in-the-money.
    pub fn is_itm(&self) -> bool {
        self.intrinsic_value() > 0.0
    }
}

impl Default for OptionParameters {
    fn default() -> Self {
        Self::new(100.0, 100.0, 0.25, 0.05, 0.20, OptionKind::Call)
    }
}

impl fmt::Display for OptionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} S={} K={} T={}y r={:.2}% vol={:.2}%",
            self.kind,
            self.spot,
            self.strike,
            self.time_to_expiry,
            self.risk_free_rate * 100.0,
            self.volatility * 100.0,
        )
    }
}

fn check_finite(field: OptionField, value: f64) -> Result<(), PricingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::InvalidParameter {
            field,
            value,
            reason: "must be finite",
        })
    }
}
