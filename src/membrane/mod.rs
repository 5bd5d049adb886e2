//! Membrane excitability models and the fixed step simulation clock that
//! drives them, including the shared [`MembraneDynamics`] trait implemented
//! by each model variant, parameter scaling, spike detection, and the
//! [`StepResult`] values consumed by a renderer.

pub mod kinetics;
pub mod ion_channels;
pub mod classifier;
pub mod parameters;
pub mod hodgkin_huxley;
pub mod reduced;
/// A set of macros to automatically derive traits necessary for the `MembraneDynamics` trait.
pub mod membrane_dynamics_traits {
    pub use membrane_dynamics_traits::*;
}
pub use classifier::{MembraneCategory, SpikeHistory};
pub use parameters::{ParameterUpdate, ScalingCoefficients, SimulationParameters};
use crate::error::{IntegrationError, MembraneExcitabilityError, ParameterError};


/// Magnitude beyond which a membrane voltage is treated as diverged (mV)
pub const VOLTAGE_ENVELOPE_MV: f32 = 500.;

/// Gets current voltage (mV) of model
pub trait CurrentVoltage {
    fn get_current_voltage(&self) -> f32;
}

/// Handles simulation timestep information
pub trait Timestep {
    /// Retrieves timestep value (ms)
    fn get_dt(&self) -> f32;
    /// Updates instance with new timestep information
    fn set_dt(&mut self, dt: f32);
}

/// Gets whether the membrane is spiking
pub trait IsSpiking {
    fn is_spiking(&self) -> bool;
}

/// Handles the firing times of the membrane
pub trait LastFiringTime {
    /// Gets the last firing time of the membrane (`None` if it has not fired yet)
    fn get_last_firing_time(&self) -> Option<f32>;
    /// Sets the last firing time of the membrane (use `None` to reset)
    fn set_last_firing_time(&mut self, time: Option<f32>);
}

/// Handles membrane models that advance one fixed step at a time under a
/// stimulus current
pub trait MembraneDynamics:
    CurrentVoltage + Timestep + IsSpiking + LastFiringTime + Clone + Send + Sync
{
    /// Takes in an input current, advances the membrane by one timestep, and
    /// returns whether the voltage crossed the spike threshold on this step
    fn advance_and_detect(&mut self, input_current: f32) -> bool;
    /// Applies the coefficient snapshot taken from the parameter layer at the
    /// start of the step
    fn apply_coefficients(&mut self, coefficients: &ScalingCoefficients);
    /// Fraction of sodium channels in the open conformation
    fn na_activation(&self) -> f32;
    /// Fraction of potassium channels in the open conformation
    fn k_activation(&self) -> f32;
}

/// A set of parameters to use in generating gaussian noise
#[derive(Debug, Clone)]
pub struct GaussianParameters {
    /// Mean of distribution
    pub mean: f32,
    /// Standard deviation of distribution
    pub std: f32,
    /// Maximum cutoff value
    pub max: f32,
    /// Minimum cutoff value
    pub min: f32,
}

impl Default for GaussianParameters {
    fn default() -> Self {
        GaussianParameters {
            mean: 1.0,
            std: 0.0,
            max: 2.0,
            min: 0.0,
        }
    }
}

impl GaussianParameters {
    /// Generates a normally distributed random number clamped between
    /// a minimum and a maximum
    pub fn get_random_number(&self) -> f32 {
        crate::distribution::clamped_normal(
            self.mean,
            self.std,
            self.min,
            self.max,
        )
    }
}

/// A discrete event emitted by a single simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// The voltage crossed the spike threshold outside the refractory window
    SpikeDetected,
    /// The membrane category changed on this step
    CategoryChanged {
        from: MembraneCategory,
        to: MembraneCategory,
    },
}

/// The state reported to the renderer after one simulation step
#[derive(Debug, Clone)]
pub struct StepResult {
    /// Simulated time after the step (ms)
    pub time: f32,
    /// Membrane potential (mV)
    pub voltage: f32,
    /// Fraction of sodium channels open
    pub na_activation: f32,
    /// Fraction of potassium channels open
    pub k_activation: f32,
    /// Phase band of the membrane potential
    pub category: MembraneCategory,
    /// Spikes per second over the retention window (Hz)
    pub firing_rate: f32,
    /// Calcium scaled neurotransmitter release probability
    pub release_probability: f32,
    /// Discrete events emitted this step
    pub events: Vec<StepEvent>,
}

/// A transient stimulus scheduled to revert at a fixed simulated time
#[derive(Debug, Clone, Copy)]
struct ScheduledPulse {
    magnitude: f32,
    revert_time: f32,
}

/// The fixed step clock that owns a membrane model, its parameters, and the
/// spike bookkeeping derived from the voltage trajectory, the only writer of
/// simulation state
#[derive(Debug, Clone)]
pub struct Simulation<M: MembraneDynamics> {
    model: M,
    parameters: SimulationParameters,
    spike_history: SpikeHistory,
    category: MembraneCategory,
    pulse: Option<ScheduledPulse>,
    time: f32,
}

impl<M: MembraneDynamics> Simulation<M> {
    /// Creates a clock around the given model, rejecting a non-positive
    /// timestep or out of domain parameters
    pub fn new(model: M, parameters: SimulationParameters) -> Result<Self, MembraneExcitabilityError> {
        let dt = model.get_dt();
        if !dt.is_finite() || dt <= 0. {
            return Err(IntegrationError::NonPositiveTimestep.into());
        }
        parameters.validate()?;

        let category = MembraneCategory::from_voltage(model.get_current_voltage());

        Ok(Simulation {
            model,
            parameters,
            spike_history: SpikeHistory::default(),
            category,
            pulse: None,
            time: 0.,
        })
    }

    /// Advances the simulation by exactly one timestep, reading the parameter
    /// values as of this invocation, and returns the resulting state along
    /// with any discrete events
    pub fn advance(&mut self) -> Result<StepResult, MembraneExcitabilityError> {
        let coefficients = self.parameters.coefficients();
        self.model.apply_coefficients(&coefficients);

        let stimulus = self.parameters.stimulus_current + self.pulse_contribution();

        let threshold_crossed = self.model.advance_and_detect(stimulus);
        self.time += self.model.get_dt();

        let voltage = self.model.get_current_voltage();
        if !voltage.is_finite() || voltage.abs() > VOLTAGE_ENVELOPE_MV {
            return Err(IntegrationError::VoltageDiverged.into());
        }

        let mut events = Vec::new();

        if threshold_crossed && self.spike_history.try_record(self.time) {
            self.model.set_last_firing_time(Some(self.time));
            events.push(StepEvent::SpikeDetected);
        }

        let category = MembraneCategory::from_voltage(voltage);
        if category != self.category {
            events.push(StepEvent::CategoryChanged {
                from: self.category,
                to: category,
            });
            self.category = category;
        }

        Ok(StepResult {
            time: self.time,
            voltage,
            na_activation: self.model.na_activation(),
            k_activation: self.model.k_activation(),
            category,
            firing_rate: self.spike_history.firing_rate(),
            release_probability: self.parameters.release_probability(),
            events,
        })
    }

    /// Advances the simulation for the given number of steps and collects
    /// every step result
    pub fn run(&mut self, steps: usize) -> Result<Vec<StepResult>, MembraneExcitabilityError> {
        (0..steps).map(|_| self.advance()).collect()
    }

    /// Applies a partial parameter write, unset fields retain previous values
    /// and the whole write is rejected if any field is out of its domain
    pub fn set_parameters(&mut self, update: &ParameterUpdate) -> Result<(), ParameterError> {
        self.parameters.apply_update(update)
    }

    /// Schedules a transient stimulus of the given magnitude that reverts to
    /// the baseline stimulus after `duration_ms` of simulated time, the
    /// revert is explicit state checked on each `advance` call
    pub fn trigger_pulse(&mut self, magnitude: f32, duration_ms: f32) {
        self.pulse = Some(ScheduledPulse {
            magnitude,
            revert_time: self.time + duration_ms.max(0.),
        });
    }

    /// Whether a scheduled pulse is still active
    pub fn pulse_active(&self) -> bool {
        self.pulse.map_or(false, |pulse| self.time < pulse.revert_time)
    }

    /// Simulated time (ms)
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Current phase band of the membrane potential
    pub fn category(&self) -> MembraneCategory {
        self.category
    }

    /// Spike times retained in the sliding window (ms)
    pub fn spike_timestamps(&self) -> &[f32] {
        self.spike_history.timestamps()
    }

    /// Spikes per second over the retention window (Hz)
    pub fn firing_rate(&self) -> f32 {
        self.spike_history.firing_rate()
    }

    /// Current parameter values
    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    /// The membrane model being driven
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the membrane model for configuration
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    fn pulse_contribution(&mut self) -> f32 {
        match self.pulse {
            Some(pulse) if self.time < pulse.revert_time => pulse.magnitude,
            Some(_) => {
                self.pulse = None;
                0.
            }
            None => 0.,
        }
    }
}

/// Returns indices of where a voltage trace peaks at or above a minimum
/// height, maxima closer than `min_separation` samples to the previously
/// accepted peak are skipped
pub fn find_peaks(voltages: &[f32], min_height: f32, min_separation: usize) -> Vec<usize> {
    let mut peaks: Vec<usize> = Vec::new();

    for i in 1..voltages.len().saturating_sub(1) {
        let is_local_maximum = voltages[i] > voltages[i - 1] && voltages[i] >= voltages[i + 1];
        if !is_local_maximum || voltages[i] < min_height {
            continue;
        }

        if peaks.last().map_or(true, |&last| i - last >= min_separation) {
            peaks.push(i);
        }
    }

    peaks
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_find_peaks_separation_guard() {
        let trace = vec![0., 1., 0., 1., 0., 0., 0., 2., 0.];

        assert_eq!(find_peaks(&trace, 0.5, 1), vec![1, 3, 7]);
        assert_eq!(find_peaks(&trace, 0.5, 4), vec![1, 7]);
        assert_eq!(find_peaks(&trace, 1.5, 1), vec![7]);
        assert_eq!(find_peaks(&[], 0.5, 1), Vec::<usize>::new());
    }

    #[test]
    fn test_gaussian_parameters_zero_std_is_deterministic() {
        let params = GaussianParameters::default();

        assert_eq!(params.get_random_number(), 1.);
    }
}
