#[cfg(test)]
mod test {
    use membrane_excitability::membrane::{
        hodgkin_huxley::HodgkinHuxleyMembrane, ParameterUpdate, Simulation,
        SimulationParameters, SpikeHistory, StepEvent,
    };


    #[test]
    fn test_window_retains_only_recent_spikes() {
        let mut history = SpikeHistory::default();

        for time in [100., 300., 1200., 2500.] {
            assert!(history.try_record(time));
        }

        assert_eq!(history.timestamps(), &[1200., 2500.]);
        assert_eq!(history.firing_rate(), 1.);
        assert_eq!(history.last_spike(), Some(2500.));
    }

    #[test]
    fn test_refractory_window_prevents_double_counting() {
        let mut history = SpikeHistory::default();

        assert!(history.try_record(10.));
        assert!(!history.try_record(12.));
        assert!(!history.try_record(14.9));
        assert!(history.try_record(15.));

        assert_eq!(history.timestamps(), &[10., 15.]);
    }

    #[test]
    fn test_sustained_input_rate_matches_retained_spikes() {
        let membrane = HodgkinHuxleyMembrane::default();
        let mut simulation = Simulation::new(membrane, SimulationParameters::default())
            .expect("Could not create simulation");

        simulation.set_parameters(&ParameterUpdate {
            stimulus_current: Some(10.),
            ..Default::default()
        }).expect("Could not update parameters");

        let mut total_spikes = 0;
        // 2500 ms of simulated time at dt = 0.01 ms
        for _ in 0..250_000 {
            let result = simulation.advance().expect("Simulation step failed");

            if result.events.contains(&StepEvent::SpikeDetected) {
                total_spikes += 1;
            }
        }

        let retained = simulation.spike_timestamps();

        assert!(retained.len() >= 2, "expected repetitive firing");
        assert!(total_spikes > retained.len(), "expected old spikes to be evicted");

        // timestamps ascending, spaced beyond the refractory window, and windowed
        let last = *retained.last().unwrap();
        for pair in retained.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[1] - pair[0] >= 5.);
        }
        assert!(last - retained[0] <= 2000.);

        assert_eq!(
            simulation.firing_rate(),
            retained.len() as f32 / 2.,
        );
    }
}
