//! Discrete classification of the voltage trajectory and spike rate bookkeeping.


/// Physiological phase of the membrane, derived from voltage alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembraneCategory {
    /// Near the resting potential
    Resting,
    /// Above the 0 mV spike band
    Depolarizing,
    /// Between the resting band and the spike band
    Repolarizing,
    /// Below the resting band
    Hyperpolarizing,
}

impl MembraneCategory {
    /// Classifies a membrane potential (mV) into its phase band, this is a
    /// stateless mapping applied every tick rather than a transition table
    pub fn from_voltage(voltage: f32) -> Self {
        if voltage > 0. {
            MembraneCategory::Depolarizing
        } else if voltage > -60. {
            MembraneCategory::Repolarizing
        } else if voltage < -75. {
            MembraneCategory::Hyperpolarizing
        } else {
            MembraneCategory::Resting
        }
    }
}

/// A sliding window of recent spike times used to derive a firing rate,
/// timestamps are kept sorted ascending and entries older than the
/// retention window are evicted whenever a spike is recorded
#[derive(Debug, Clone)]
pub struct SpikeHistory {
    timestamps: Vec<f32>,
    firing_rate: f32,
    /// Retention window for recorded spikes (ms)
    pub window_ms: f32,
    /// Minimum spacing between counted spikes (ms)
    pub refractory_ms: f32,
}

impl Default for SpikeHistory {
    fn default() -> Self {
        SpikeHistory {
            timestamps: vec![],
            firing_rate: 0.,
            window_ms: 2000.,
            refractory_ms: 5.,
        }
    }
}

impl SpikeHistory {
    /// Records a spike at the given time (ms) unless it falls within the
    /// refractory window of the previous spike, returns whether the spike
    /// was counted, eviction and the firing rate are updated on every
    /// counted spike
    pub fn try_record(&mut self, time: f32) -> bool {
        if let Some(last) = self.timestamps.last() {
            if time - last < self.refractory_ms {
                return false;
            }
        }

        self.timestamps.push(time);

        let cutoff = time - self.window_ms;
        self.timestamps.retain(|&timestamp| timestamp >= cutoff);

        self.firing_rate = self.timestamps.len() as f32 / (self.window_ms / 1000.);

        true
    }

    /// Spikes counted per second over the retention window (Hz)
    pub fn firing_rate(&self) -> f32 {
        self.firing_rate
    }

    /// Retained spike times (ms), ascending
    pub fn timestamps(&self) -> &[f32] {
        &self.timestamps
    }

    /// Time of the most recent counted spike (ms)
    pub fn last_spike(&self) -> Option<f32> {
        self.timestamps.last().copied()
    }
}
