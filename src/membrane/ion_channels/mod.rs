//! Voltage gated ion channels and the gating variables they integrate.

use super::kinetics::{alpha_h, alpha_m, alpha_n, beta_h, beta_m, beta_n};


/// An ion channel with gating state advanced over a timestep
pub trait IonChannel {
    /// Updates the current output based on the membrane potential (mV) over a timestep (ms)
    fn update_current(&mut self, voltage: f32, dt: f32);
    /// Returns the current output
    fn get_current(&self) -> f32;
}

/// An ion channel whose current depends on voltage alone
pub trait TimestepIndependentIonChannel {
    /// Updates the current output based on the membrane potential (mV)
    fn update_current(&mut self, voltage: f32);
    /// Returns the current output
    fn get_current(&self) -> f32;
}

/// A gating variable integrated with voltage dependent rate constants
#[derive(Debug, Clone, Copy)]
pub struct BasicGatingVariable {
    /// Opening rate (1/ms)
    pub alpha: f32,
    /// Closing rate (1/ms)
    pub beta: f32,
    /// Fraction of subunits in the conducting conformation
    pub state: f32,
}

impl Default for BasicGatingVariable {
    fn default() -> Self {
        BasicGatingVariable {
            alpha: 0.,
            beta: 0.,
            state: 0.,
        }
    }
}

impl BasicGatingVariable {
    /// Sets the state to its steady state value for the current rate constants
    pub fn init_state(&mut self) {
        self.state = self.alpha / (self.alpha + self.beta);
    }

    /// Advances the state one timestep, the state is clamped to [0, 1] as a
    /// compensating control for oversized steps relative to the fastest rate
    pub fn update(&mut self, dt: f32) {
        let alpha_state = self.alpha * (1. - self.state);
        let beta_state = self.beta * self.state;

        self.state += dt * (alpha_state - beta_state);
        self.state = self.state.clamp(0., 1.);
    }
}

/// A sodium channel with an activation and an inactivation gate
#[derive(Debug, Clone, Copy)]
pub struct NaIonChannel {
    /// Maximal conductance (mS/cm^2)
    pub g_na: f32,
    /// Reversal potential (mV)
    pub e_na: f32,
    /// Activation gate
    pub m: BasicGatingVariable,
    /// Inactivation gate
    pub h: BasicGatingVariable,
    /// Temperature scaling applied to every rate constant
    pub rate_scale: f32,
    /// Current output
    pub current: f32,
}

impl NaIonChannel {
    /// Sets both gates to their steady state values at the given voltage
    pub fn initialize_gates(&mut self, voltage: f32) {
        self.update_rates(voltage);
        self.m.init_state();
        self.h.init_state();
    }

    /// Fraction of channels in the open conformation
    pub fn open_fraction(&self) -> f32 {
        self.m.state.powi(3) * self.h.state
    }

    fn update_rates(&mut self, voltage: f32) {
        self.m.alpha = self.rate_scale * alpha_m(voltage);
        self.m.beta = self.rate_scale * beta_m(voltage);
        self.h.alpha = self.rate_scale * alpha_h(voltage);
        self.h.beta = self.rate_scale * beta_h(voltage);
    }
}

impl Default for NaIonChannel {
    fn default() -> Self {
        let mut na_channel = NaIonChannel {
            g_na: 120.,
            e_na: 50.,
            m: BasicGatingVariable::default(),
            h: BasicGatingVariable::default(),
            rate_scale: 1.,
            current: 0.,
        };
        na_channel.initialize_gates(-65.);

        na_channel
    }
}

impl IonChannel for NaIonChannel {
    fn update_current(&mut self, voltage: f32, dt: f32) {
        self.update_rates(voltage);
        self.m.update(dt);
        self.h.update(dt);

        self.current = self.g_na * self.open_fraction() * (voltage - self.e_na);
    }

    fn get_current(&self) -> f32 {
        self.current
    }
}

/// A delayed rectifier potassium channel with a single activation gate
#[derive(Debug, Clone, Copy)]
pub struct KIonChannel {
    /// Maximal conductance (mS/cm^2)
    pub g_k: f32,
    /// Reversal potential (mV)
    pub e_k: f32,
    /// Activation gate
    pub n: BasicGatingVariable,
    /// Temperature scaling applied to every rate constant
    pub rate_scale: f32,
    /// Current output
    pub current: f32,
}

impl KIonChannel {
    /// Sets the gate to its steady state value at the given voltage
    pub fn initialize_gates(&mut self, voltage: f32) {
        self.update_rates(voltage);
        self.n.init_state();
    }

    /// Fraction of channels in the open conformation
    pub fn open_fraction(&self) -> f32 {
        self.n.state.powi(4)
    }

    fn update_rates(&mut self, voltage: f32) {
        self.n.alpha = self.rate_scale * alpha_n(voltage);
        self.n.beta = self.rate_scale * beta_n(voltage);
    }
}

impl Default for KIonChannel {
    fn default() -> Self {
        let mut k_channel = KIonChannel {
            g_k: 36.,
            e_k: -77.,
            n: BasicGatingVariable::default(),
            rate_scale: 1.,
            current: 0.,
        };
        k_channel.initialize_gates(-65.);

        k_channel
    }
}

impl IonChannel for KIonChannel {
    fn update_current(&mut self, voltage: f32, dt: f32) {
        self.update_rates(voltage);
        self.n.update(dt);

        self.current = self.g_k * self.open_fraction() * (voltage - self.e_k);
    }

    fn get_current(&self) -> f32 {
        self.current
    }
}

/// An implementation of a leak channel
#[derive(Debug, Clone, Copy)]
pub struct KLeakChannel {
    /// Conductance (mS/cm^2)
    pub g_l: f32,
    /// Reversal potential (mV)
    pub e_l: f32,
    /// Current output
    pub current: f32,
}

impl Default for KLeakChannel {
    fn default() -> Self {
        KLeakChannel {
            g_l: 0.3,
            e_l: -54.4,
            current: 0.,
        }
    }
}

impl TimestepIndependentIonChannel for KLeakChannel {
    fn update_current(&mut self, voltage: f32) {
        self.current = self.g_l * (voltage - self.e_l);
    }

    fn get_current(&self) -> f32 {
        self.current
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_steady_state_initialization() {
        let na_channel = NaIonChannel::default();
        let k_channel = KIonChannel::default();

        assert!((na_channel.m.state - 0.053).abs() < 0.005);
        assert!((na_channel.h.state - 0.596).abs() < 0.005);
        assert!((k_channel.n.state - 0.318).abs() < 0.005);
    }

    #[test]
    fn test_gates_remain_bounded_with_oversized_step() {
        let mut na_channel = NaIonChannel::default();
        na_channel.rate_scale = 40.;

        for _ in 0..100 {
            na_channel.update_current(50., 0.1);

            assert!(na_channel.m.state >= 0. && na_channel.m.state <= 1.);
            assert!(na_channel.h.state >= 0. && na_channel.h.state <= 1.);
        }
    }

    #[test]
    fn test_rate_scale_speeds_relaxation() {
        let mut reference = KIonChannel::default();
        let mut scaled = KIonChannel::default();
        scaled.rate_scale = 3.;

        reference.update_current(-20., 0.01);
        scaled.update_current(-20., 0.01);

        // both relax toward the same steady state, the scaled channel moves further
        let mut target = KIonChannel::default();
        target.initialize_gates(-20.);

        let reference_gap = (target.n.state - reference.n.state).abs();
        let scaled_gap = (target.n.state - scaled.n.state).abs();

        assert!(scaled_gap < reference_gap);
    }

    #[test]
    fn test_leak_current_sign_follows_driving_force() {
        let mut leak_channel = KLeakChannel::default();

        leak_channel.update_current(-54.4);
        assert_eq!(leak_channel.get_current(), 0.);

        leak_channel.update_current(0.);
        assert!(leak_channel.get_current() > 0.);

        leak_channel.update_current(-80.);
        assert!(leak_channel.get_current() < 0.);
    }
}
