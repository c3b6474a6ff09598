pub mod cost;
pub mod profile;

pub use cost::*;
pub use profile::*;
