//! Black-Scholes pricing and greeks for European options.

use tracing::{debug, warn};

use hg_types::PricingError;

use crate::greeks::GreeksResult;
use crate::normal::{norm_cdf, norm_pdf};
use crate::params::{OptionKind, OptionParameters};

/// Calendar days per year used to express theta per day.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Compute d1 and d2.
fn d1_d2(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * t.sqrt();
    let d1 = (s.ln() - k.ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    (d1, d2)
}

/// Price a European option and its greeks under Black-Scholes
/// (no dividends, constant rate and volatility).
///
/// Inputs are validated first, so a zero expiry or volatility is reported as
/// [`PricingError::InvalidParameter`] rather than dividing by zero. Any
/// non-finite output is reported as [`PricingError::NumericOverflow`].
///
/// Theta is per calendar day (annual value / 365), vega and rho are per one
/// percentage point move.
pub fn compute_option_greeks(params: &OptionParameters) -> Result<GreeksResult, PricingError> {
    if let Err(e) = params.validate() {
        warn!("Rejected option parameters: {}", e);
        return Err(e);
    }

    let s = params.spot;
    let k = params.strike;
    let r = params.risk_free_rate;
    let sigma = params.volatility;
    let t = params.time_to_expiry;

    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    for (quantity, value) in [("d1", d1), ("d2", d2)] {
        if !value.is_finite() {
            warn!("{} not finite for {}", quantity, params);
            return Err(PricingError::NumericOverflow { quantity });
        }
    }
    debug!("Pricing {}: d1={:.6}, d2={:.6}", params, d1, d2);

    let disc = (-r * t).exp();
    let sqrt_t = t.sqrt();
    let pdf_d1 = norm_pdf(d1);

    let (price, delta) = match params.kind {
        OptionKind::Call => (
            s * norm_cdf(d1) - k * disc * norm_cdf(d2),
            norm_cdf(d1),
        ),
        OptionKind::Put => (
            k * disc * norm_cdf(-d2) - s * norm_cdf(-d1),
            norm_cdf(d1) - 1.0,
        ),
    };

    let gamma = pdf_d1 / (s * sigma * sqrt_t);

    let theta_common = -(s * pdf_d1 * sigma) / (2.0 * sqrt_t);
    let theta = match params.kind {
        OptionKind::Call => theta_common - r * k * disc * norm_cdf(d2),
        OptionKind::Put => theta_common + r * k * disc * norm_cdf(-d2),
    };

    let vega = s * pdf_d1 * sqrt_t;

    let rho = match params.kind {
        OptionKind::Call => k * t * disc * norm_cdf(d2),
        OptionKind::Put => -k * t * disc * norm_cdf(-d2),
    };

    let result = GreeksResult {
        price,
        delta,
        gamma,
        theta: theta / DAYS_PER_YEAR,
        vega: vega / 100.0,
        rho: rho / 100.0,
    };

    if let Some(quantity) = result.first_non_finite() {
        warn!("Non-finite {} for {}", quantity, params);
        return Err(PricingError::NumericOverflow { quantity });
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hg_types::OptionField;

    fn exact_cdf(x: f64) -> f64 {
        0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
    }

    /// Same formulas with an erf-based CDF.
    fn reference(p: &OptionParameters) -> GreeksResult {
        let (s, k, r, v, t) = (p.spot, p.strike, p.risk_free_rate, p.volatility, p.time_to_expiry);
        let (d1, d2) = d1_d2(s, k, r, v, t);
        let disc = (-r * t).exp();
        let common = -(s * norm_pdf(d1) * v) / (2.0 * t.sqrt());
        let (price, delta, theta, rho) = match p.kind {
            OptionKind::Call => (
                s * exact_cdf(d1) - k * disc * exact_cdf(d2),
                exact_cdf(d1),
                common - r * k * disc * exact_cdf(d2),
                k * t * disc * exact_cdf(d2),
            ),
            OptionKind::Put => (
                k * disc * exact_cdf(-d2) - s * exact_cdf(-d1),
                exact_cdf(d1) - 1.0,
                common + r * k * disc * exact_cdf(-d2),
                -k * t * disc * exact_cdf(-d2),
            ),
        };
        GreeksResult {
            price,
            delta,
            gamma: norm_pdf(d1) / (s * v * t.sqrt()),
            theta: theta / 365.0,
            vega: s * norm_pdf(d1) * t.sqrt() / 100.0,
            rho: rho / 100.0,
        }
    }

    fn assert_close_to_reference(p: &OptionParameters) {
        let got = compute_option_greeks(p).unwrap();
        let want = reference(p);
        for ((name, g), (_, w)) in got.fields().into_iter().zip(want.fields()) {
            assert!((g - w).abs() < 1e-3, "{name}: got {g}, reference {w}");
        }
    }

    #[test]
    fn test_atm_call_scenario() {
        let p = OptionParameters::default();
        let res = compute_option_greeks(&p).unwrap();
        assert!((res.price - 4.6150).abs() < 1e-3, "call price = {}", res.price);
        assert!((res.delta - 0.5695).abs() < 1e-3, "delta = {}", res.delta);
        assert!((res.gamma - 0.0393).abs() < 1e-3, "gamma = {}", res.gamma);
        assert!((res.theta + 0.0287).abs() < 1e-3, "theta = {}", res.theta);
        assert!((res.vega - 0.1964).abs() < 1e-3, "vega = {}", res.vega);
        assert!((res.rho - 0.1308).abs() < 1e-3, "rho = {}", res.rho);
        assert_close_to_reference(&p);
    }

    #[test]
    fn test_atm_put_scenario() {
        let p = OptionParameters::default().with_kind(OptionKind::Put);
        let res = compute_option_greeks(&p).unwrap();
        assert!((res.price - 3.3728).abs() < 1e-3, "put price = {}", res.price);
        assert!((res.delta + 0.4305).abs() < 1e-3, "delta = {}", res.delta);
        assert_close_to_reference(&p);
    }

    #[test]
    fn test_matches_reference_off_the_money() {
        let cases = [
            OptionParameters::new(100.0, 110.0, 0.5, 0.03, 0.30, OptionKind::Put),
            OptionParameters::new(155.0, 150.0, 0.25, 0.05, 0.25, OptionKind::Call),
            OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.20, OptionKind::Call),
            OptionParameters::new(80.0, 100.0, 2.0, -0.01, 0.45, OptionKind::Put),
        ];
        for p in &cases {
            assert_close_to_reference(p);
        }
    }

    #[test]
    fn test_put_call_parity() {
        let call = OptionParameters::new(150.0, 150.0, 0.5, 0.05, 0.30, OptionKind::Call);
        let put = call.with_kind(OptionKind::Put);
        let c = compute_option_greeks(&call).unwrap().price;
        let p = compute_option_greeks(&put).unwrap().price;
        let lhs = c - p;
        let rhs = call.spot - call.strike * (-call.risk_free_rate * call.time_to_expiry).exp();
        assert!(
            (lhs - rhs).abs() < 1e-6 * rhs.abs().max(1.0),
            "put-call parity violated: lhs={lhs}, rhs={rhs}"
        );
    }

    #[test]
    fn test_gamma_and_vega_shared() {
        let call = OptionParameters::new(120.0, 100.0, 0.75, 0.02, 0.35, OptionKind::Call);
        let c = compute_option_greeks(&call).unwrap();
        let p = compute_option_greeks(&call.with_kind(OptionKind::Put)).unwrap();
        assert_eq!(c.gamma, p.gamma);
        assert_eq!(c.vega, p.vega);
        assert!((c.delta - p.delta - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_near_expiry_converges_to_intrinsic() {
        let itm = OptionParameters::new(120.0, 100.0, 0.001, 0.05, 0.20, OptionKind::Call);
        let otm = OptionParameters::new(80.0, 100.0, 0.001, 0.05, 0.20, OptionKind::Call);
        for p in [itm, otm] {
            let price = compute_option_greeks(&p).unwrap().price;
            assert!(
                (price - p.intrinsic_value()).abs() < 0.01,
                "price {price} vs intrinsic {}",
                p.intrinsic_value()
            );
        }
    }

    #[test]
    fn test_greeks_sign_call() {
        let p = OptionParameters::new(150.0, 150.0, 0.25, 0.05, 0.25, OptionKind::Call);
        let g = compute_option_greeks(&p).unwrap();
        assert!(g.delta > 0.0 && g.delta < 1.0, "call delta = {}", g.delta);
        assert!(g.gamma > 0.0, "gamma should be positive");
        assert!(g.theta < 0.0, "theta should be negative (time decay)");
        assert!(g.vega > 0.0, "vega should be positive");
        assert!(g.rho > 0.0, "call rho should be positive");
    }

    #[test]
    fn test_greeks_sign_put() {
        let p = OptionParameters::new(150.0, 150.0, 0.25, 0.05, 0.25, OptionKind::Put);
        let g = compute_option_greeks(&p).unwrap();
        assert!(g.delta < 0.0 && g.delta > -1.0, "put delta = {}", g.delta);
        assert!(g.gamma > 0.0, "gamma should be positive");
        assert!(g.vega > 0.0, "vega should be positive");
        assert!(g.rho < 0.0, "put rho should be negative");
    }

    #[test]
    fn test_zero_expiry_rejected() {
        let p = OptionParameters {
            time_to_expiry: 0.0,
            ..OptionParameters::default()
        };
        match compute_option_greeks(&p) {
            Err(PricingError::InvalidParameter { field, value, .. }) => {
                assert_eq!(field, OptionField::TimeToExpiry);
                assert_eq!(value, 0.0);
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_volatility_rejected() {
        let p = OptionParameters {
            volatility: 0.0,
            ..OptionParameters::default()
        };
        let err = compute_option_greeks(&p).unwrap_err();
        assert_eq!(err.field(), Some(OptionField::Volatility));
    }

    #[test]
    fn test_negative_spot_rejected() {
        let p = OptionParameters {
            spot: -100.0,
            ..OptionParameters::default()
        };
        let err = compute_option_greeks(&p).unwrap_err();
        assert_eq!(err.field(), Some(OptionField::Spot));
    }

    #[test]
    fn test_overflow_reported() {
        let p = OptionParameters::new(1e308, 1e308, 1.0, -800.0, 0.2, OptionKind::Call);
        match compute_option_greeks(&p) {
            Err(PricingError::NumericOverflow { .. }) => (),
            other => panic!("expected NumericOverflow, got {other:?}"),
        }
    }

    #[test]
    fn test_extreme_moneyness_stays_finite() {
        let p = OptionParameters::new(1e300, 1e-10, 0.25, 0.05, 0.20, OptionKind::Call);
        let g = compute_option_greeks(&p).unwrap();
        assert!((g.price / p.spot - 1.0).abs() < 1e-12, "price = {}", g.price);
        assert_eq!(g.delta, 1.0);
        assert!(g.fields().iter().all(|(_, v)| v.is_finite()));

        let put = compute_option_greeks(&p.with_kind(OptionKind::Put)).unwrap();
        assert!(put.price.abs() < 1e-9, "put price = {}", put.price);
    }

    #[test]
    fn test_overflow_names_d1() {
        let p = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 1e200, OptionKind::Call);
        assert_eq!(
            compute_option_greeks(&p).unwrap_err(),
            PricingError::NumericOverflow { quantity: "d1" }
        );
    }
}
