/// Kilometres per foot
pub const FEET_TO_KM: f64 = 0.0003048;

/// Convert an altitude in feet to kilometres
pub fn feet_to_km(feet: f64) -> f64 {
    feet * FEET_TO_KM
}
