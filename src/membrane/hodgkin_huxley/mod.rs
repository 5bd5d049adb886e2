//! An implementation of a Hodgkin Huxley membrane with four state variables
//! and temperature scaled channel kinetics.

use std::collections::HashMap;
use membrane_dynamics_traits::MembraneDynamicsBase;
use super::{
    CurrentVoltage, GaussianParameters, IsSpiking, LastFiringTime,
    MembraneDynamics, Timestep,
};
use super::ion_channels::{
    NaIonChannel, KIonChannel, KLeakChannel, IonChannel, TimestepIndependentIonChannel,
};
use super::parameters::ScalingCoefficients;


#[derive(Debug, Clone, MembraneDynamicsBase)]
pub struct HodgkinHuxleyMembrane {
    /// Membrane potential (mV)
    pub current_voltage: f32,
    /// Initial voltage (mV)
    pub v_init: f32,
    /// Timestep (ms)
    pub dt: f32,
    /// Membrane capacitance (uF/cm^2)
    pub c_m: f32,
    /// Voltage threshold for spike detection (mV)
    pub v_th: f32,
    /// Sodium ion channel
    pub na_channel: NaIonChannel,
    /// Potassium ion channel
    pub k_channel: KIonChannel,
    /// Potassium leak channel
    pub k_leak_channel: KLeakChannel,
    /// Whether the membrane is currently spiking
    pub is_spiking: bool,
    /// Last time the membrane crossed the spike threshold (ms)
    pub last_firing_time: Option<f32>,
    /// Parameters used in generating noise
    pub gaussian_params: GaussianParameters,
}

impl Default for HodgkinHuxleyMembrane {
    fn default() -> Self {
        HodgkinHuxleyMembrane {
            current_voltage: -65.,
            v_init: -65.,
            dt: 0.01,
            c_m: 1.,
            v_th: 0.,
            na_channel: NaIonChannel::default(),
            k_channel: KIonChannel::default(),
            k_leak_channel: KLeakChannel::default(),
            is_spiking: false,
            last_firing_time: None,
            gaussian_params: GaussianParameters::default(),
        }
    }
}

impl HodgkinHuxleyMembrane {
    /// Updates the channel gating states and currents based on the current voltage
    pub fn update_gates(&mut self) {
        self.na_channel.update_current(self.current_voltage, self.dt);
        self.k_channel.update_current(self.current_voltage, self.dt);
        self.k_leak_channel.update_current(self.current_voltage);
    }

    /// Updates cell voltage given an input current
    pub fn update_cell_voltage(&mut self, input_current: f32) {
        let i_na = self.na_channel.current;
        let i_k = self.k_channel.current;
        let i_k_leak = self.k_leak_channel.current;

        let i_sum = input_current - (i_na + i_k + i_k_leak);
        self.current_voltage += self.dt * i_sum / self.c_m;
    }

    fn handle_spiking(&mut self, last_voltage: f32) -> bool {
        let is_spiking = last_voltage < self.v_th && self.current_voltage >= self.v_th;
        self.is_spiking = is_spiking;

        is_spiking
    }
}

impl MembraneDynamics for HodgkinHuxleyMembrane {
    fn advance_and_detect(&mut self, input_current: f32) -> bool {
        self.update_gates();

        let last_voltage = self.current_voltage;
        self.update_cell_voltage(input_current);

        self.handle_spiking(last_voltage)
    }

    fn apply_coefficients(&mut self, coefficients: &ScalingCoefficients) {
        // sodium blockade is not wired into this variant's rate equations
        self.na_channel.rate_scale = coefficients.temperature_factor;
        self.k_channel.rate_scale = coefficients.temperature_factor;
    }

    fn na_activation(&self) -> f32 {
        self.na_channel.open_fraction()
    }

    fn k_activation(&self) -> f32 {
        self.k_channel.open_fraction()
    }
}

/// Takes in a static current as an input and iterates the given membrane
/// for a given duration, set `gaussian` to true to multiply the input by
/// normally distributed noise as it iterates, returns state variables over
/// time with keys `"voltage"`, `"m"`, `"h"`, and `"n"`
pub fn run_static_input_hodgkin_huxley(
    hodgkin_huxley: &mut HodgkinHuxleyMembrane,
    input: f32,
    gaussian: bool,
    iterations: usize,
) -> HashMap<String, Vec<f32>> {
    let mut state_output = HashMap::new();
    state_output.insert("voltage".to_string(), vec![]);
    state_output.insert("m".to_string(), vec![]);
    state_output.insert("h".to_string(), vec![]);
    state_output.insert("n".to_string(), vec![]);

    for _ in 0..iterations {
        let current_input = if gaussian {
            input * hodgkin_huxley.gaussian_params.get_random_number()
        } else {
            input
        };

        let _threshold_crossed = hodgkin_huxley.advance_and_detect(current_input);

        state_output.get_mut("voltage").map(|val| val.push(hodgkin_huxley.current_voltage));
        state_output.get_mut("m").map(|val| val.push(hodgkin_huxley.na_channel.m.state));
        state_output.get_mut("h").map(|val| val.push(hodgkin_huxley.na_channel.h.state));
        state_output.get_mut("n").map(|val| val.push(hodgkin_huxley.k_channel.n.state));
    }

    state_output
}
