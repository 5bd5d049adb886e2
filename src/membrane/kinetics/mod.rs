//! Pure voltage and temperature dependent rate functions for channel gating.

/// Q10 multiplier applied per 10 celsius of temperature change
pub const Q10_BASE: f32 = 3.;
/// Temperature at which rate constants are used as published (celsius)
pub const REFERENCE_TEMPERATURE_C: f32 = 23.;

/// Logistic activation curve centered at 0 with the given slope (mV)
pub fn sigmoid(x: f32, slope: f32) -> f32 {
    1. / (1. + (-x / slope).exp())
}

/// Evaluates `x / (1 - exp(-x / y))` guarding the removable singularity at `x = 0`
/// with its analytic limit `y`, naive evaluation divides by zero there
pub fn vtrap(x: f32, y: f32) -> f32 {
    if (x / y).abs() < 1e-4 {
        y
    } else {
        x / (1. - (-x / y).exp())
    }
}

/// Temperature scaling factor for rate constants given a temperature in celsius
pub fn q10_factor(temperature_c: f32) -> f32 {
    Q10_BASE.powf((temperature_c - REFERENCE_TEMPERATURE_C) / 10.)
}

/// Sodium activation opening rate (1/ms)
pub fn alpha_m(voltage: f32) -> f32 {
    0.1 * vtrap(voltage + 40., 10.)
}

/// Sodium activation closing rate (1/ms)
pub fn beta_m(voltage: f32) -> f32 {
    4. * (-(voltage + 65.) / 18.).exp()
}

/// Sodium inactivation opening rate (1/ms)
pub fn alpha_h(voltage: f32) -> f32 {
    0.07 * (-(voltage + 65.) / 20.).exp()
}

/// Sodium inactivation closing rate (1/ms)
pub fn beta_h(voltage: f32) -> f32 {
    1. / (1. + (-(voltage + 35.) / 10.).exp())
}

/// Potassium activation opening rate (1/ms)
pub fn alpha_n(voltage: f32) -> f32 {
    0.01 * vtrap(voltage + 55., 10.)
}

/// Potassium activation closing rate (1/ms)
pub fn beta_n(voltage: f32) -> f32 {
    0.125 * (-(voltage + 65.) / 80.).exp()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sigmoid_midpoint_and_saturation() {
        assert_eq!(sigmoid(0., 6.), 0.5);
        assert!(sigmoid(60., 6.) > 0.99);
        assert!(sigmoid(-60., 6.) < 0.01);
    }

    #[test]
    fn test_vtrap_limit_is_continuous() {
        let at_singularity = vtrap(0., 10.);
        let near_singularity = vtrap(0.01, 10.);

        assert_eq!(at_singularity, 10.);
        assert!((at_singularity - near_singularity).abs() < 0.01);
        assert!(near_singularity.is_finite());
    }

    #[test]
    fn test_rate_functions_finite_at_singular_voltages() {
        // alpha_m is singular at -40 mV, alpha_n at -55 mV
        assert!((alpha_m(-40.) - 1.).abs() < 1e-3);
        assert!((alpha_n(-55.) - 0.1).abs() < 1e-4);

        for voltage in [-100., -55., -40., 0., 50.] {
            assert!(alpha_m(voltage).is_finite());
            assert!(beta_m(voltage).is_finite());
            assert!(alpha_h(voltage).is_finite());
            assert!(beta_h(voltage).is_finite());
            assert!(alpha_n(voltage).is_finite());
            assert!(beta_n(voltage).is_finite());
        }
    }

    #[test]
    fn test_q10_factor_reference_and_scaling() {
        assert_eq!(q10_factor(REFERENCE_TEMPERATURE_C), 1.);
        assert!((q10_factor(REFERENCE_TEMPERATURE_C + 10.) - Q10_BASE).abs() < 1e-5);
        assert!(q10_factor(6.) < 1.);
        assert!(q10_factor(40.) > 1.);
    }
}
