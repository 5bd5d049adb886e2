#[cfg(test)]
mod test {
    use membrane_excitability::membrane::{
        hodgkin_huxley::HodgkinHuxleyMembrane, reduced::ReducedMembrane,
        CurrentVoltage, IsSpiking, MembraneCategory, MembraneDynamics,
        Simulation, SimulationParameters, StepEvent,
    };


    const ITERATIONS: usize = 10_000;

    fn run_quiescent<M: MembraneDynamics>(model: M) -> Simulation<M> {
        let mut simulation = Simulation::new(model, SimulationParameters::default())
            .expect("Could not create simulation");

        for _ in 0..ITERATIONS {
            let result = simulation.advance().expect("Simulation step failed");

            assert!(!result.events.contains(&StepEvent::SpikeDetected));
        }

        simulation
    }

    #[test]
    fn test_hodgkin_huxley_rests_without_stimulus() {
        let simulation = run_quiescent(HodgkinHuxleyMembrane::default());
        let voltage = simulation.model().get_current_voltage();

        assert!((voltage + 65.).abs() <= 2., "voltage drifted to {}", voltage);
        assert_eq!(simulation.category(), MembraneCategory::Resting);
        assert_eq!(simulation.firing_rate(), 0.);
        assert!(simulation.spike_timestamps().is_empty());
        assert!(!simulation.model().is_spiking());
    }

    #[test]
    fn test_reduced_membrane_rests_without_stimulus() {
        let simulation = run_quiescent(ReducedMembrane::default());
        let voltage = simulation.model().get_current_voltage();

        assert!((voltage + 55.).abs() <= 2., "voltage drifted to {}", voltage);
        assert_eq!(simulation.firing_rate(), 0.);
    }

    #[test]
    fn test_reduced_membrane_relaxes_to_rest_from_displacement() {
        let mut membrane = ReducedMembrane::default();
        membrane.current_voltage = -80.;

        let simulation = run_quiescent(membrane);
        let voltage = simulation.model().get_current_voltage();

        assert!((voltage + 55.).abs() <= 2., "voltage settled at {}", voltage);
    }
}
