use serde::{Deserialize, Serialize};

/// Theoretical value and sensitivities of a single option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GreeksResult {
    /// Theoretical option value, in the currency of spot and strike.
    pub price: f64,
    /// Rate of change of option price w.r.t. underlying price.
    pub delta: f64,
    /// Rate of change of delta w.r.t. underlying price.
    pub gamma: f64,
    /// Rate of change of option price w.r.t. time (per calendar day).
    pub theta: f64,
    /// Rate of change of option price w.r.t. volatility (per 1% move).
    pub vega: f64,
    /// Rate of change of option price w.r.t. risk-free rate (per 1% move).
    pub rho: f64,
}

impl GreeksResult {
    /// Name and value of each field, in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("price", self.price),
            ("delta", self.delta),
            ("gamma", self.gamma),
            ("theta", self.theta),
            ("vega", self.vega),
            ("rho", self.rho),
        ]
    }

    /// First field that is NaN or infinite.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        self.fields()
            .into_iter()
            .find(|(_, v)| !v.is_finite())
            .map(|(name, _)| name)
    }
}
