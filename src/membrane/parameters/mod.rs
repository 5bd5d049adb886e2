//! External parameter knobs and their mapping onto model coefficients.

use crate::error::ParameterError;
use super::kinetics::q10_factor;


/// Baseline extracellular calcium concentration (mM)
pub const BASELINE_CALCIUM_MM: f32 = 2.;
/// Neurotransmitter release probability at baseline calcium
pub const BASELINE_RELEASE_PROBABILITY: f32 = 0.5;

/// Externally writable simulation knobs, the core reads a coefficient
/// snapshot of these at the start of every step
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    /// Bath temperature (celsius)
    pub temperature_c: f32,
    /// Extracellular calcium concentration (mM)
    pub calcium_mm: f32,
    /// Fraction of sodium channels blocked
    pub sodium_block_fraction: f32,
    /// Baseline stimulus current (uA/cm^2)
    pub stimulus_current: f32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            temperature_c: 23.,
            calcium_mm: BASELINE_CALCIUM_MM,
            sodium_block_fraction: 0.,
            stimulus_current: 0.,
        }
    }
}

/// A partial parameter write, unset fields retain their previous values
#[derive(Debug, Clone, Default)]
pub struct ParameterUpdate {
    pub temperature_c: Option<f32>,
    pub calcium_mm: Option<f32>,
    pub sodium_block_fraction: Option<f32>,
    pub stimulus_current: Option<f32>,
}

/// Per step snapshot of the multipliers consumed by the membrane models
#[derive(Debug, Clone, Copy)]
pub struct ScalingCoefficients {
    /// Q10 multiplier applied to gating rate constants
    pub temperature_factor: f32,
    /// Fraction of sodium channels blocked
    pub sodium_block_fraction: f32,
    /// Amplitude multiplier for the additive noise current
    pub noise_scale: f32,
}

impl SimulationParameters {
    /// Checks every field against its documented domain
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(6.0..=40.0).contains(&self.temperature_c) {
            return Err(ParameterError::TemperatureOutOfRange);
        }
        if !(0.5..=4.0).contains(&self.calcium_mm) {
            return Err(ParameterError::CalciumOutOfRange);
        }
        if !(0.0..=1.0).contains(&self.sodium_block_fraction) {
            return Err(ParameterError::SodiumBlockFractionOutOfRange);
        }
        if !self.stimulus_current.is_finite() {
            return Err(ParameterError::StimulusNotFinite);
        }

        Ok(())
    }

    /// Applies a partial update, rejecting the whole write and retaining the
    /// previous values if any written field is outside its domain
    pub fn apply_update(&mut self, update: &ParameterUpdate) -> Result<(), ParameterError> {
        let mut updated = self.clone();

        if let Some(temperature_c) = update.temperature_c {
            updated.temperature_c = temperature_c;
        }
        if let Some(calcium_mm) = update.calcium_mm {
            updated.calcium_mm = calcium_mm;
        }
        if let Some(sodium_block_fraction) = update.sodium_block_fraction {
            updated.sodium_block_fraction = sodium_block_fraction;
        }
        if let Some(stimulus_current) = update.stimulus_current {
            updated.stimulus_current = stimulus_current;
        }

        updated.validate()?;
        *self = updated;

        Ok(())
    }

    /// Q10 multiplier for the current temperature
    pub fn temperature_factor(&self) -> f32 {
        q10_factor(self.temperature_c)
    }

    /// Extracellular calcium relative to baseline
    pub fn calcium_factor(&self) -> f32 {
        self.calcium_mm / BASELINE_CALCIUM_MM
    }

    /// Calcium scaled neurotransmitter release probability, consumed by the renderer
    pub fn release_probability(&self) -> f32 {
        (BASELINE_RELEASE_PROBABILITY * self.calcium_factor()).clamp(0., 1.)
    }

    /// Calcium scaled amplitude for the additive noise current
    pub fn noise_scale(&self) -> f32 {
        (1. - self.calcium_mm / 5.).max(0.)
    }

    /// Snapshot of the multipliers consumed by the models for one step
    pub fn coefficients(&self) -> ScalingCoefficients {
        ScalingCoefficients {
            temperature_factor: self.temperature_factor(),
            sodium_block_fraction: self.sodium_block_fraction,
            noise_scale: self.noise_scale(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults_are_neutral() {
        let parameters = SimulationParameters::default();

        assert!(parameters.validate().is_ok());
        assert_eq!(parameters.temperature_factor(), 1.);
        assert_eq!(parameters.calcium_factor(), 1.);
        assert_eq!(parameters.release_probability(), 0.5);
    }

    #[test]
    fn test_rejected_update_retains_previous_values() {
        let mut parameters = SimulationParameters::default();
        let update = ParameterUpdate {
            temperature_c: Some(30.),
            calcium_mm: Some(-1.),
            ..Default::default()
        };

        assert!(parameters.apply_update(&update).is_err());
        assert_eq!(parameters, SimulationParameters::default());
    }

    #[test]
    fn test_partial_update_leaves_unset_fields() {
        let mut parameters = SimulationParameters::default();
        let update = ParameterUpdate {
            calcium_mm: Some(3.),
            ..Default::default()
        };

        parameters.apply_update(&update).unwrap();

        assert_eq!(parameters.calcium_mm, 3.);
        assert_eq!(parameters.temperature_c, 23.);
        assert_eq!(parameters.temperature_factor(), 1.);
        assert_eq!(parameters.calcium_factor(), 1.5);
        assert_eq!(parameters.release_probability(), 0.75);
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let mut parameters = SimulationParameters::default();

        let update = ParameterUpdate {
            temperature_c: Some(f32::NAN),
            ..Default::default()
        };
        assert!(parameters.apply_update(&update).is_err());

        let update = ParameterUpdate {
            stimulus_current: Some(f32::INFINITY),
            ..Default::default()
        };
        assert!(parameters.apply_update(&update).is_err());
    }

    #[test]
    fn test_noise_scale_decreases_with_calcium() {
        let mut parameters = SimulationParameters::default();
        let low_calcium_scale = {
            parameters.calcium_mm = 0.5;
            parameters.noise_scale()
        };
        let high_calcium_scale = {
            parameters.calcium_mm = 4.;
            parameters.noise_scale()
        };

        assert!(low_calcium_scale > high_calcium_scale);
        assert!(high_calcium_scale >= 0.);
    }
}
