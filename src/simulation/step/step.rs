use crate::systems::interaction::{apply_drag, DragIntent, PointerSample};
use crate::systems::{collision, stability, streaming, workers};

use super::{FrameOutcome, PerfTimer, Simulation};

pub(super) fn advance_frame(sim: &mut Simulation, sample: PointerSample) -> FrameOutcome {
    if sim.paused {
        return FrameOutcome::Paused;
    }

    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let frame_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Same intent for every sub-step of this frame
    let intent = sim
        .drag
        .compute_intent(sample, sim.pixels_per_cell, sim.params.steps_per_frame);

    for _ in 0..sim.params.steps_per_frame {
        substep(sim, intent.as_ref());
    }

    let status = PerfTimer::time_into(perf_on, &mut sim.perf_stats.stability_ms, || {
        stability::check_and_recover(&mut sim.lattice)
    });
    sim.frame += 1;

    let outcome = if status.is_diverged() {
        sim.divergences += 1;
        FrameOutcome::Recovered
    } else {
        FrameOutcome::Advanced
    };

    if perf_on {
        let lattice = &sim.lattice;
        let stats = &mut sim.perf_stats;
        stats.divergences = sim.divergences;
        stats.barrier_cells = lattice.forces().count;
        let cells = u32::try_from(lattice.size()).unwrap_or(u32::MAX);
        stats.grid_size = cells;
        stats.workers = u32::try_from(workers::worker_count()).unwrap_or(u32::MAX);
        // 13 f32 planes + barrier mask + two image buffers
        stats.memory_bytes = cells.saturating_mul(13 * 4 + 1 + 2 * 4);
        if let Some(start) = frame_start {
            stats.step_ms = start.elapsed_ms();
        }
    }

    outcome
}

pub(super) fn substep(sim: &mut Simulation, drag: Option<&DragIntent>) {
    let perf_on = sim.perf_enabled;
    let lattice = &mut sim.lattice;
    let stats = &mut sim.perf_stats;

    // Collision reads the border, so pin it first
    PerfTimer::time_into(perf_on, &mut stats.boundary_ms, || lattice.set_boundaries());
    PerfTimer::time_into(perf_on, &mut stats.collide_ms, || collision::collide(lattice));
    PerfTimer::time_into(perf_on, &mut stats.stream_ms, || {
        streaming::stream(lattice);
    });

    if let Some(intent) = drag {
        let applied = PerfTimer::time_into(perf_on, &mut stats.drag_ms, || apply_drag(lattice, intent));
        if perf_on && applied {
            stats.drag_applied += 1;
        }
    }

    if perf_on {
        stats.substeps += 1;
    }
    sim.substeps += 1;
}
