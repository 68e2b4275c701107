//! Helpers for normalizing Helmert parameter units.

/// Converts a rotation parameter from arc-seconds to radians.
pub fn arcsec_to_radians(seconds: f64) -> f64 {
    (seconds / 3600.0).to_radians()
}

/// Converts a parts-per-million scale offset to a multiplicative factor.
pub fn ppm_to_factor(ppm: f64) -> f64 {
    ppm / 1e6 + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arcsec_to_radians() {
        // 3600 arc-seconds is one degree
        assert!((arcsec_to_radians(3600.0) - 1.0_f64.to_radians()).abs() < 1e-15);
        assert_eq!(arcsec_to_radians(0.0), 0.0);
    }

    #[test]
    fn test_ppm_to_factor() {
        assert!((ppm_to_factor(0.0) - 1.0).abs() < 1e-15);
        assert!((ppm_to_factor(20.4894) - 1.0000204894).abs() < 1e-12);
        assert!((ppm_to_factor(-8.15) - 0.99999185).abs() < 1e-12);
    }
}
