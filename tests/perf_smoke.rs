use windtunnel_engine::{PointerSample, Quantity, Simulation, SimulationParameters};

#[test]
fn perf_smoke_frame() {
    let mut sim = Simulation::new(128, 64, SimulationParameters::default()).unwrap();
    sim.enable_perf_metrics(true);
    sim.advance_frame(PointerSample::idle());
    sim.set_quantity(Quantity::Curl);
    sim.render();

    let stats = sim.perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.collide_ms() >= 0.0);
    assert!(stats.project_ms() >= 0.0);
    assert_eq!(stats.substeps(), 3);
    assert_eq!(stats.grid_size(), 128 * 64);
    assert_eq!(stats.barrier_cells(), 17);
    assert!(stats.workers() >= 1);
}

#[test]
fn perf_disabled_reports_zeros() {
    let mut sim = Simulation::new(64, 64, SimulationParameters::default()).unwrap();
    sim.clear_barriers();
    sim.advance_frame(PointerSample::new(30.0, 30.0, true));
    sim.advance_frame(PointerSample::new(30.5, 30.0, true));
    let stats = sim.perf_stats();
    assert_eq!(stats.substeps(), 0);
    assert_eq!(stats.drag_applied(), 0);
    assert_eq!(stats.step_ms(), 0.0);
    assert_eq!(sim.substeps(), 6);
}

#[test]
fn perf_counters_cover_only_the_last_frame() {
    let mut sim = Simulation::new(64, 64, SimulationParameters::default()).unwrap();
    sim.enable_perf_metrics(true);
    for _ in 0..4 {
        sim.advance_frame(PointerSample::idle());
    }
    assert_eq!(sim.perf_stats().substeps(), 3);
    assert_eq!(sim.perf_stats().grid_size(), 64 * 64);
    assert_eq!(sim.substeps(), 12);
}
