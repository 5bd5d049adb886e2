//! # Membrane Excitability
//!
//! `membrane_excitability` is a package for simulating neuronal membrane
//! excitability and spike dynamics to drive decorative generative visuals.
//! A membrane model is advanced on a fixed step clock and reports voltage,
//! channel activations, a discrete phase category, and spike events that a
//! renderer consumes to modulate color, stroke, and timing. Model dynamics
//! are made using traits so new membrane variants can be swapped in without
//! rewriting the clock, the parameter scaling, or the spike bookkeeping.
//!
//! Two variants are included: a four variable Hodgkin Huxley membrane with
//! temperature scaled channel kinetics, and a reduced single variable
//! membrane whose channel activations are sigmoids of voltage. Both are
//! driven through the same [`membrane::Simulation`] clock.
//!
//! ## Example Code
//!
//! ### Hodgkin Huxley membrane with static input
//!
//! ```rust
//! use membrane_excitability::membrane::{
//!     hodgkin_huxley::{HodgkinHuxleyMembrane, run_static_input_hodgkin_huxley},
//!     find_peaks,
//! };
//!
//!
//! let mut membrane = HodgkinHuxleyMembrane::default();
//!
//! // 100 ms of a suprathreshold current produces repetitive firing
//! let history = run_static_input_hodgkin_huxley(&mut membrane, 10., false, 10_000);
//!
//! let voltages = &history["voltage"];
//! let peaks = find_peaks(voltages, 0., 500);
//!
//! assert!(!peaks.is_empty());
//! ```
//!
//! ### Driving a membrane through the simulation clock
//!
//! ```rust
//! use membrane_excitability::membrane::{
//!     reduced::ReducedMembrane, ParameterUpdate, Simulation,
//!     SimulationParameters, StepEvent,
//! };
//!
//!
//! let membrane = ReducedMembrane::default();
//! let mut simulation = Simulation::new(membrane, SimulationParameters::default())
//!     .expect("Could not create simulation");
//!
//! // raise extracellular calcium, leaving every other knob in place
//! simulation.set_parameters(&ParameterUpdate {
//!     calcium_mm: Some(3.),
//!     ..Default::default()
//! }).expect("Could not update parameters");
//!
//! // schedule a 200 ms stimulus pulse that reverts on its own
//! simulation.trigger_pulse(40., 200.);
//!
//! let mut spikes = 0;
//! for _ in 0..3_000 {
//!     let result = simulation.advance().expect("Simulation step failed");
//!
//!     if result.events.contains(&StepEvent::SpikeDetected) {
//!         spikes += 1;
//!     }
//! }
//!
//! assert_eq!(spikes, 1);
//! ```

pub mod distribution;
pub mod error;
pub mod membrane;
