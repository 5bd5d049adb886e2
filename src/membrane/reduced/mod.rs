//! An implementation of a reduced single variable membrane with sigmoid
//! channel activations and a bounded voltage range.

use membrane_dynamics_traits::MembraneDynamicsBase;
use super::{
    CurrentVoltage, GaussianParameters, IsSpiking, LastFiringTime,
    MembraneDynamics, Timestep,
};
use super::kinetics::sigmoid;
use super::parameters::ScalingCoefficients;


/// A one variable approximation of membrane excitability, channel activations
/// are recomputed from sigmoids of voltage rather than integrated, and the
/// voltage is clamped to a fixed range as a compensating control against
/// parameter misuse
#[derive(Debug, Clone, MembraneDynamicsBase)]
pub struct ReducedMembrane {
    /// Membrane potential (mV)
    pub current_voltage: f32,
    /// Initial voltage (mV)
    pub v_init: f32,
    /// Timestep (ms)
    pub dt: f32,
    /// Voltage threshold for spike detection (mV)
    pub v_th: f32,
    /// Relaxation rate of the voltage toward its drive (1/ms)
    pub integration_rate: f32,
    /// Offset defining the passive rest point (mV)
    pub rest_offset: f32,
    /// Weight of the sodium activation drive (mV)
    pub na_weight: f32,
    /// Weight of the potassium activation drive (mV)
    pub k_weight: f32,
    /// Lower voltage bound (mV)
    pub v_min: f32,
    /// Upper voltage bound (mV)
    pub v_max: f32,
    /// Sodium activation, a sigmoid of voltage scaled by the block fraction
    pub na_activation: f32,
    /// Potassium activation, a sigmoid of voltage
    pub k_activation: f32,
    /// Fraction of sodium channels blocked
    pub sodium_block_fraction: f32,
    /// Amplitude multiplier for the additive noise current
    pub noise_scale: f32,
    /// Parameters used in generating noise
    pub noise_params: GaussianParameters,
    /// Whether the membrane is currently spiking
    pub is_spiking: bool,
    /// Last time the membrane crossed the spike threshold (ms)
    pub last_firing_time: Option<f32>,
}

impl Default for ReducedMembrane {
    fn default() -> Self {
        let mut membrane = ReducedMembrane {
            current_voltage: -55.,
            v_init: -55.,
            dt: 0.1,
            v_th: 0.,
            integration_rate: 0.02,
            rest_offset: 55.,
            na_weight: 30.,
            k_weight: 25.,
            v_min: -90.,
            v_max: 50.,
            na_activation: 0.,
            k_activation: 0.,
            sodium_block_fraction: 0.,
            noise_scale: 1.,
            noise_params: GaussianParameters {
                mean: 0.,
                std: 0.,
                max: 5.,
                min: -5.,
            },
            is_spiking: false,
            last_firing_time: None,
        };
        membrane.update_activations();

        membrane
    }
}

impl ReducedMembrane {
    /// Recomputes both channel activations from the current voltage
    pub fn update_activations(&mut self) {
        self.na_activation =
            (1. - self.sodium_block_fraction) * sigmoid(self.current_voltage + 20., 6.);
        self.k_activation = sigmoid(self.current_voltage - 10., 4.);
    }

    /// Calculates the change in voltage given an input current
    pub fn get_dv_change(&self, i: f32) -> f32 {
        self.integration_rate * (
            i - (self.current_voltage + self.rest_offset)
            + self.na_weight * self.na_activation
            - self.k_weight * self.k_activation
        ) * self.dt
    }

    fn handle_spiking(&mut self, last_voltage: f32) -> bool {
        let is_spiking = last_voltage < self.v_th && self.current_voltage >= self.v_th;
        self.is_spiking = is_spiking;

        is_spiking
    }
}

impl MembraneDynamics for ReducedMembrane {
    fn advance_and_detect(&mut self, input_current: f32) -> bool {
        self.update_activations();

        let noise = self.noise_params.get_random_number() * self.noise_scale;
        let last_voltage = self.current_voltage;
        let dv = self.get_dv_change(input_current + noise);

        self.current_voltage = (self.current_voltage + dv).clamp(self.v_min, self.v_max);

        self.handle_spiking(last_voltage)
    }

    fn apply_coefficients(&mut self, coefficients: &ScalingCoefficients) {
        self.sodium_block_fraction = coefficients.sodium_block_fraction;
        self.noise_scale = coefficients.noise_scale;
    }

    fn na_activation(&self) -> f32 {
        self.na_activation
    }

    fn k_activation(&self) -> f32 {
        self.k_activation
    }
}
