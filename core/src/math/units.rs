pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
pub const CM_IN_M: f64 = 100.0;
/// Approximate factor from km/h to m/s used by the walking formula.
pub const KMH_IN_MSEC: f64 = 0.278;

pub struct UnitHelper;

impl UnitHelper {
    /// Length covered by `units` repetitions of `length_m` metres, in km.
    pub fn units_to_km(units: u32, length_m: f64) -> f64 {
        f64::from(units) * length_m / M_IN_KM
    }

    pub fn cm_to_m(cm: f64) -> f64 {
        cm / CM_IN_M
    }

    pub fn kmh_to_msec(speed_kmh: f64) -> f64 {
        speed_kmh * KMH_IN_MSEC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_to_km_scales_by_length() {
        assert_eq!(UnitHelper::units_to_km(15000, 0.65), 9.75);
        assert_eq!(UnitHelper::units_to_km(0, 1.38), 0.0);
    }

    #[test]
    fn conversions_use_fixed_factors() {
        assert_eq!(UnitHelper::cm_to_m(180.0), 1.8);
        assert!((UnitHelper::kmh_to_msec(10.0) - 2.78).abs() < 1e-12);
    }
}
