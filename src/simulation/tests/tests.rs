use super::*;
use crate::core::error::ConfigError;

fn tunnel(width: u32, height: u32) -> Simulation {
    Simulation::new(width, height, SimulationParameters::default()).unwrap()
}

fn near_barrier(lattice: &Lattice, x: usize, y: usize) -> bool {
    for dy in -1isize..=1 {
        for dx in -1isize..=1 {
            let (nx, ny) = (x as isize + dx, y as isize + dy);
            if lattice.in_bounds(nx, ny) && lattice.is_barrier(nx as usize, ny as usize) {
                return true;
            }
        }
    }
    false
}

#[test]
fn line_barrier_frame_keeps_flow_physical() {
    let mut sim = tunnel(64, 64);
    assert_eq!(sim.advance_frame(PointerSample::idle()), FrameOutcome::Advanced);
    assert_eq!(sim.substeps(), 3);

    let lattice = sim.lattice();
    for y in 0..64 {
        assert_eq!(lattice.ux[lattice.index(0, y)], 0.1, "inlet ux at y={y}");
    }

    for y in 0..64 {
        for x in 0..64 {
            if lattice.is_barrier(x, y) {
                continue;
            }
            let rho = lattice.rho[lattice.index(x, y)];
            assert!((0.8..=1.2).contains(&rho), "rho {rho} at ({x}, {y})");
            if !near_barrier(lattice, x, y) {
                assert!((0.9..=1.1).contains(&rho), "rho {rho} at ({x}, {y})");
            }
        }
    }

    // Barrier spans x = 21, y = 24..=40; flow piles up right in front of it
    let upstream = lattice.ux[lattice.index(20, 32)];
    assert!(upstream < 0.08, "upstream ux {upstream}");
}

#[test]
fn diagnostics_report_barrier_forces() {
    let mut sim = tunnel(64, 64);
    sim.advance_frame(PointerSample::idle());
    let diag = sim.diagnostics();
    assert_eq!(diag.barrier_count, 17);
    assert_eq!(diag.barrier_centroid, Some((21.0, 32.0)));
    // Flow pushes the obstacle downstream
    assert!(diag.barrier_fx > 0.0, "fx {}", diag.barrier_fx);
    assert_eq!(diag.frames, 1);
    assert_eq!(diag.substeps, 3);
}

#[test]
fn paused_frames_do_nothing() {
    let mut sim = tunnel(32, 32);
    sim.set_paused(true);
    let before = sim.lattice().n_e.clone();
    assert_eq!(sim.advance_frame(PointerSample::new(5.0, 5.0, true)), FrameOutcome::Paused);
    assert_eq!(sim.frame(), 0);
    assert_eq!(sim.substeps(), 0);
    assert_eq!(sim.lattice().n_e, before);

    // Rendering still works while paused
    sim.set_quantity(Quantity::Speed);
    sim.render();
    assert_eq!(sim.frame_image().len(), 32 * 32);
}

#[test]
fn front_buffer_only_changes_on_render() {
    let mut sim = tunnel(48, 48);
    sim.set_quantity(Quantity::VelocityX);
    sim.render();
    let shown = sim.frame_image().to_vec();

    sim.advance_frame(PointerSample::idle());
    sim.advance_frame(PointerSample::idle());
    assert_eq!(sim.frame_image(), &shown[..]);

    sim.render();
    assert_ne!(sim.frame_image(), &shown[..]);
    assert_eq!(sim.frame_image().len(), 48 * 48);
}

#[test]
fn initial_image_is_presented() {
    let sim = tunnel(40, 40);
    // Density view: uniform rho = 1 maps to the middle of the ramp
    let fluid = sim.lattice().index(35, 5);
    let mid = sim.lattice().palette().packed(128);
    assert_eq!(sim.frame_image()[fluid], mid);
}

#[test]
fn drag_reaches_the_lattice_through_a_frame() {
    let mut sim = tunnel(64, 64);
    sim.clear_barriers();
    sim.enable_perf_metrics(true);

    sim.advance_frame(PointerSample::new(32.0, 40.0, true));
    assert_eq!(sim.perf_stats().drag_applied(), 0);

    sim.advance_frame(PointerSample::new(32.6, 40.0, true));
    let lattice = sim.lattice();
    let i = lattice.index(32, 40);
    assert_eq!(lattice.ux[i], 0.1);
    assert_eq!(lattice.uy[i], 0.0);
    assert_eq!(sim.perf_stats().drag_applied(), 3);
    assert_eq!(sim.perf_stats().substeps(), 3);
}

#[test]
fn divergence_is_recovered_and_counted() {
    let mut sim = tunnel(64, 64);
    let i = sim.lattice().index(10, 32);
    // Rest density never streams, so the NaN stays in the middle row
    sim.lattice_mut().n0[i] = f32::NAN;

    assert_eq!(sim.advance_frame(PointerSample::idle()), FrameOutcome::Recovered);
    assert_eq!(sim.divergences(), 1);
    assert!(sim.lattice().rho.iter().all(|r| r.is_finite()));
    assert_eq!(sim.lattice().barrier_count(), 17);

    assert_eq!(sim.advance_frame(PointerSample::idle()), FrameOutcome::Advanced);
    assert_eq!(sim.diagnostics().divergences, 1);
}

#[test]
fn quantity_cycles_through_every_view() {
    let mut sim = tunnel(24, 24);
    assert_eq!(sim.quantity(), Quantity::Density);
    let seen: Vec<Quantity> = (0..Quantity::ALL.len()).map(|_| sim.cycle_quantity()).collect();
    assert_eq!(seen.last(), Some(&Quantity::Density));
    assert_eq!(&seen[..4], &Quantity::ALL[1..]);
}

#[test]
fn invalid_settings_are_rejected() {
    let mut sim = tunnel(32, 32);
    assert!(matches!(sim.set_steps_per_frame(0), Err(ConfigError::ZeroStepsPerFrame)));
    assert!(matches!(
        sim.set_pixels_per_cell(0.0),
        Err(ConfigError::InvalidPixelsPerCell(_))
    ));
    assert!(matches!(
        sim.set_pixels_per_cell(f32::INFINITY),
        Err(ConfigError::InvalidPixelsPerCell(_))
    ));
    assert_eq!(sim.params().steps_per_frame, 3);
    assert_eq!(sim.pixels_per_cell(), DEFAULT_PIXELS_PER_CELL);

    sim.set_steps_per_frame(5).unwrap();
    sim.advance_frame(PointerSample::idle());
    assert_eq!(sim.substeps(), 5);
}

#[test]
fn failed_reconfigure_keeps_the_old_lattice() {
    let mut sim = tunnel(32, 32);
    sim.advance_frame(PointerSample::idle());
    let bad = SimulationParameters { flow_viscosity: -1.0, ..Default::default() };
    assert!(sim.reconfigure(64, 64, bad).is_err());
    assert!(matches!(
        sim.reconfigure(2, 64, SimulationParameters::default()),
        Err(ConfigError::GridTooSmall { .. })
    ));
    assert!(matches!(
        sim.reconfigure(u32::MAX, u32::MAX, SimulationParameters::default()),
        Err(ConfigError::GridTooLarge { .. })
    ));
    assert_eq!(sim.width(), 32);
    assert_eq!(sim.frame(), 1);

    let circle = SimulationParameters { barrier_shape: BarrierShape::Circle, ..Default::default() };
    sim.reconfigure(80, 60, circle).unwrap();
    assert_eq!((sim.width(), sim.height()), (80, 60));
    assert_eq!(sim.frame(), 0);
    assert_eq!(sim.frame_image().len(), 80 * 60);
    assert!(sim.lattice().is_barrier(20, 30));
}

#[test]
fn config_json_round_trips_through_the_simulation() {
    let sim = Simulation::from_config_json(
        r#"{"width": 96, "height": 48, "flow_velocity": 0.08, "barrier_shape": "circle"}"#,
    )
    .unwrap();
    let config = sim.config();
    assert_eq!((config.width, config.height), (96, 48));
    assert_eq!(config.flow_velocity, 0.08);
    assert_eq!(config.barrier_shape, BarrierShape::Circle);

    let again = SimulationConfig::from_json(&config.to_json().unwrap()).unwrap();
    assert_eq!(again, config);
}

#[test]
fn image_layout_describes_the_front_buffer() {
    let sim = tunnel(20, 10);
    let layout = sim.image_layout_data();
    assert_eq!(layout.ptr, sim.frame_image().as_ptr());
    assert_eq!(layout.len_elements, 200);
    assert_eq!(layout.len_bytes, 800);
    assert_eq!((layout.width, layout.height), (20, 10));
}
