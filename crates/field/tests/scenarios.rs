//! End-to-end runs of the field integrator built from configuration.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use ndarray::Array2;
use ontologica_field::{
    Action, Error, Event, FieldIntegrator, Lattice, Params, Status, config::FieldConfig, init,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const PULSE_RUN: &str = "
lattice: { cols: 16 }
mass: 1.0
coupling: 0.1
dt: 0.01
steps: 100
sample_stride: 10
initial: { kind: pulse, from: 7, to: 9, value: 1.0 }
forcing: { kind: zero }
";

#[test]
fn pulse_on_a_line() {
    let config: FieldConfig = serde_yaml::from_str(PULSE_RUN).unwrap();
    let mut setup = config.build().unwrap();

    let run = setup
        .integrator
        .run_unobserved(setup.steps, &setup.forcing, setup.sample_stride)
        .unwrap();

    assert_eq!(run.status, Status::Complete);
    assert_eq!(run.steps, 100);
    assert_eq!(run.history.len(), 10);

    let steps: Vec<_> = run.history.iter().map(|s| s.step).collect();
    assert_eq!(steps, (0..100).step_by(10).collect::<Vec<_>>());

    // Two unit sites: each edge contributes one unit of squared gradient.
    let start = run.history[0].energy;
    assert_relative_eq!(start.potential, 1.0);
    assert_relative_eq!(start.gradient, 1.0);
    assert_relative_eq!(start.interaction, 0.05);
    assert_relative_eq!(start.total(), 2.05);

    assert!(run.final_field.iter().all(|v| v.is_finite()));
    assert_eq!(run.final_field, *setup.integrator.current());
}

#[test]
fn pulse_spreads_symmetrically() {
    let config: FieldConfig = serde_yaml::from_str(PULSE_RUN).unwrap();
    let mut setup = config.build().unwrap();

    setup
        .integrator
        .run_unobserved(setup.steps, &setup.forcing, setup.sample_stride)
        .unwrap();

    // The pulse sits on columns 7 and 8, so column 7 − k mirrors 8 + k.
    let field = setup.integrator.current();
    for k in 0..8 {
        assert_relative_eq!(field[[0, 7 - k]], field[[0, (8 + k) % 16]], epsilon = 1e-12);
    }
    assert!(field[[0, 6]] > 0.0);
    assert!(field[[0, 7]] < 1.0);
}

#[test]
fn free_field_conserves_discrete_energy_on_a_grid() {
    let lattice = Lattice::new(6, 10).unwrap();
    let params = Params::new(0.5, 0.0, 0.05).unwrap();
    let mut rng = StdRng::seed_from_u64(21);
    let mut integrator = FieldIntegrator::random(lattice, params, 0.3, &mut rng).unwrap();

    let forcing = lattice.zeros();
    let before = integrator.discrete_energy();
    integrator.run_unobserved(2000, &forcing, 500).unwrap();
    let after = integrator.discrete_energy();

    assert_relative_eq!(after, before, max_relative = 1e-8);
}

#[test]
fn constant_forcing_pushes_field_up() {
    let config: FieldConfig = serde_yaml::from_str(
        "
lattice: { rows: 3, cols: 3 }
mass: 1.0
coupling: 0.0
dt: 0.1
steps: 10
forcing: { kind: constant, value: 0.5 }
",
    )
    .unwrap();
    let mut setup = config.build().unwrap();

    let run = setup
        .integrator
        .run_unobserved(setup.steps, &setup.forcing, setup.sample_stride)
        .unwrap();

    assert_eq!(run.history.len(), 10);
    assert!(run.final_field.iter().all(|&v| v > 0.0));

    // A uniform field stays uniform.
    let first = run.final_field[[0, 0]];
    assert!(run.final_field.iter().all(|&v| (v - first).abs() < 1e-15));
}

#[test]
fn observer_stops_when_pulse_has_spread() {
    let lattice = Lattice::line(32).unwrap();
    let params = Params::new(0.0, 0.0, 0.1).unwrap();
    let initial = init::pulse(lattice, 15..17, 1.0).unwrap();
    let mut integrator = FieldIntegrator::new(lattice, params, initial).unwrap();

    let observer = |event: &Event<'_>| (event.field[[0, 12]] > 0.01).then_some(Action::StopEarly);
    let run = integrator
        .run(1000, &lattice.zeros(), 1, observer)
        .unwrap();

    assert_eq!(run.status, Status::StoppedByObserver);
    assert!(run.steps > 0 && run.steps < 1000);
    assert!(run.final_field[[0, 12]] > 0.01);
}

#[test]
fn strong_coupling_diverges_with_an_error() {
    let lattice = Lattice::line(8).unwrap();
    let params = Params::new(0.0, 50.0, 0.5).unwrap();
    let initial = Array2::from_elem(lattice.shape(), 2.0);
    let mut integrator = FieldIntegrator::new(lattice, params, initial).unwrap();

    let result = integrator.run_unobserved(500, &lattice.zeros(), 1);

    assert!(matches!(
        result,
        Err(Error::NonFinite { .. } | Error::EnergyOverflow { .. })
    ));
    assert!(integrator.current().iter().all(|v| v.is_finite()));
}

#[test]
fn diagnostics_of_a_random_field() {
    let lattice = Lattice::new(8, 8).unwrap();
    let params = Params::new(1.0, 0.0, 0.01).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let integrator = FieldIntegrator::random(lattice, params, 1.0, &mut rng).unwrap();

    let diagnostics = integrator.spectral_diagnostics();
    assert_eq!(diagnostics.power_spectrum.dim(), (8, 8));
    assert!(diagnostics.power_spectrum.iter().all(|&p| p >= 0.0));
    assert!(diagnostics.coherence_length <= 8);
    assert!(diagnostics.fluctuation > 0.5 && diagnostics.fluctuation < 1.5);

    // Parseval: Σ|Φ_k|² = N Σ φ².
    let sites = lattice.sites() as f64;
    let spatial: f64 = integrator.current().iter().map(|v| v * v).sum();
    assert_relative_eq!(
        diagnostics.power_spectrum.sum(),
        sites * spatial,
        max_relative = 1e-9
    );

    let activation = integrator.activation();
    assert_abs_diff_eq!(
        activation.total,
        activation.learning_capacity * activation.choice_capability * activation.participation,
        epsilon = 1e-12
    );
}
