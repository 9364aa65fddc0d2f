use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::units::feet_to_km;

/// Fixed geographic position of the local receiver installation.
///
/// Only consumed by the station-listing helper to rank candidate
/// stations by proximity; the polling path never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct ReceiverPosition {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude_deg: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude_deg: f64,

    /// Altitude above sea level in kilometres.
    pub altitude_km: f64,
}

impl ReceiverPosition {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_km: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_km,
        }
    }

    /// Build a position with the altitude given in feet, as most aviation
    /// and receiver documentation states it.
    pub fn from_feet(latitude_deg: f64, longitude_deg: f64, altitude_ft: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_km: feet_to_km(altitude_ft),
        }
    }
}
