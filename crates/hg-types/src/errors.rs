use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for Hourglass
#[derive(Error, Debug)]
pub enum HgError {
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Names an input of the option pricer, used to say which one was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionField {
    Spot,
    Strike,
    TimeToExpiry,
    RiskFreeRate,
    Volatility,
}

impl fmt::Display for OptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionField::Spot => "spot",
            OptionField::Strike => "strike",
            OptionField::TimeToExpiry => "time_to_expiry",
            OptionField::RiskFreeRate => "risk_free_rate",
            OptionField::Volatility => "volatility",
        };
        f.write_str(name)
    }
}

/// Option-pricing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("Invalid parameter {field}: {value} ({reason})")]
    InvalidParameter {
        field: OptionField,
        value: f64,
        reason: &'static str,
    },

    #[error("Numeric overflow: {quantity} is not finite")]
    NumericOverflow { quantity: &'static str },
}

impl PricingError {
    /// The rejected input, if this is a parameter error.
    pub fn field(&self) -> Option<OptionField> {
        match self {
            PricingError::InvalidParameter { field, .. } => Some(*field),
            PricingError::NumericOverflow { .. } => None,
        }
    }
}

/// Work-profile and purchase-cost errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Work profile field {field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: Decimal },

    #[error("Purchase price must be positive, got {price}")]
    InvalidPrice { price: Decimal },

    #[error("{quantity} is outside the representable decimal range")]
    OutOfRange { quantity: &'static str },
}

/// Result type alias for Hourglass operations
pub type HgResult<T> = Result<T, HgError>;

/// Macro for creating validation errors
#[macro_export]
macro_rules! validation_error {
    ($($arg:tt)*) => {
        $crate::HgError::Validation(format!($($arg)*))
    };
}

/// Macro for creating configuration errors
#[macro_export]
macro_rules! config_error {
    ($($arg:tt)*) => {
        $crate::HgError::Config(format!($($arg)*))
    };
}
