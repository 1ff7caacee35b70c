use glam::DVec3;
use tumble::core::body::Cuboid;
use tumble::core::state::RotationalState;
use tumble::investigation::probe::{AngularMomentumProbe, Probe, RotationalEnergyProbe};
use tumble::{BodySpec, RunConfig, Simulation};

#[test]
fn test_explicit_euler_gains_energy() {
    // A brick tumbling about its intermediate axis.
    let body = BodySpec::Cuboid(Cuboid::new(1.8, 4.0, 0.4, 10.0));
    let config = RunConfig::new(body, DVec3::new(4.0, 0.3, 0.1), 10.0, 0.001);
    let sim = Simulation::new(config).unwrap();
    let inertia = *sim.inertia();
    let result = sim.run().unwrap();

    let state_of = |omega: DVec3| RotationalState { omega, ..Default::default() };
    let first = state_of(result.records.first().unwrap().omega);
    let last = state_of(result.records.last().unwrap().omega);

    let e0 = RotationalEnergyProbe.measure(&first, &inertia);
    let e1 = RotationalEnergyProbe.measure(&last, &inertia);
    let l0 = AngularMomentumProbe.measure(&first, &inertia);
    let l1 = AngularMomentumProbe.measure(&last, &inertia);
    println!("Energy: {e0:.6} -> {e1:.6}, |L|: {l0:.6} -> {l1:.6}");

    // Each explicit step adds dt^2/2 * sum(I a^2) to the energy; the drift is
    // reported, never corrected.
    assert!(e1 > e0, "explicit Euler should not lose rotational energy");
    assert!(l1 > l0, "explicit Euler should not lose angular momentum");
    assert!((e1 - e0) / e0 < 0.1, "energy drift unexpectedly large");
}
