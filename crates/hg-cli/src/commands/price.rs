//! `hourglass price`: value a European option and its greeks.

use clap::Args;
use serde::Serialize;
use tracing::info;

use hg_options::{compute_option_greeks, GreeksResult, OptionKind, OptionParameters};
use hg_types::HgResult;

use crate::config::HourglassConfig;

#[derive(Debug, Clone, Default, Args)]
pub struct PriceArgs {
    /// Current underlying price
    #[arg(long)]
    pub spot: Option<f64>,

    /// Strike price
    #[arg(long)]
    pub strike: Option<f64>,

    /// Time to expiry in years
    #[arg(long)]
    pub expiry: Option<f64>,

    /// Risk-free rate as a decimal (0.05 = 5%)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Volatility as a decimal (0.20 = 20%)
    #[arg(long)]
    pub vol: Option<f64>,

    /// call or put
    #[arg(long)]
    pub kind: Option<OptionKind>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl PriceArgs {
    /// Flags override the configured defaults field by field.
    pub fn resolve(&self, defaults: &OptionParameters) -> OptionParameters {
        OptionParameters {
            spot: self.spot.unwrap_or(defaults.spot),
            strike: self.strike.unwrap_or(defaults.strike),
            time_to_expiry: self.expiry.unwrap_or(defaults.time_to_expiry),
            risk_free_rate: self.rate.unwrap_or(defaults.risk_free_rate),
            volatility: self.vol.unwrap_or(defaults.volatility),
            kind: self.kind.unwrap_or(defaults.kind),
        }
    }
}

#[derive(Debug, Serialize)]
struct PriceReport {
    inputs: OptionParameters,
    result: GreeksResult,
}

pub fn run(args: &PriceArgs, config: &HourglassConfig) -> HgResult<()> {
    let params = args.resolve(&config.pricing);
    info!("Pricing {}", params);

    let result = compute_option_greeks(&params)?;

    if args.json {
        let report = PriceReport {
            inputs: params,
            result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_table(&params, &result));
    }
    Ok(())
}

pub fn render_table(params: &OptionParameters, result: &GreeksResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("European option: {}\n", params));
    out.push_str(&format!("  Price  ${:.4}\n", result.price));
    out.push_str(&format!("  Delta  {:.4}\n", result.delta));
    out.push_str(&format!("  Gamma  {:.6}\n", result.gamma));
    out.push_str(&format!("  Theta  {:.4}  per day\n", result.theta));
    out.push_str(&format!("  Vega   {:.4}  per 1% vol\n", result.vega));
    out.push_str(&format!("  Rho    {:.4}  per 1% rate\n", result.rho));
    out
}
