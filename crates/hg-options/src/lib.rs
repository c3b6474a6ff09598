pub mod greeks;
pub mod normal;
pub mod params;
pub mod pricing;

pub use greeks::*;
pub use normal::*;
pub use params::*;
pub use pricing::*;
