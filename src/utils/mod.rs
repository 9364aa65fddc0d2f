pub mod constants;
pub mod units;

pub use constants::*;
pub use units::feet_to_km;
