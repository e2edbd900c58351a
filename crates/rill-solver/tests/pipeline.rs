//! End-to-end pipeline behaviour: projection, transport, impulses,
//! hooks, and scrolling.

use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use rill_compute::ComputeContext;
use rill_core::{Axis, GridLayout, Impulse};
use rill_field::{FluidState, PhysicalProperties};
use rill_grid::GridExtents;
use rill_kernels::JacobiSweepKernel;
use rill_solver::stages::DiffusionStage;
use rill_solver::{FluidSolver, HookStage};
use rill_test_utils::{make_state_2d, make_state_3d, max_abs, CountingOperator};

fn fill_smooth_velocity(state: &mut FluidState) {
    let extents = *state.extents();
    let (nx, ny) = (
        extents.len(Axis::X) as f32,
        extents.len(Axis::Y) as f32,
    );
    for cell in extents.iter_cells().collect::<Vec<_>>() {
        let (x, y) = (cell[0] as f32, cell[1] as f32);
        // Wall faces (index 0) stay zero, keeping the net flux of the
        // closed domain zero — the Neumann solve needs a compatible
        // right-hand side.
        *state
            .velocity_mut(Axis::X)
            .input_mut()
            .at_mut(cell[0], cell[1], cell[2]) =
            0.5 * (std::f32::consts::PI * x / nx).sin() * (std::f32::consts::PI * y / ny).cos();
        *state
            .velocity_mut(Axis::Y)
            .input_mut()
            .at_mut(cell[0], cell[1], cell[2]) =
            -0.3 * (std::f32::consts::PI * x / nx).cos() * (std::f32::consts::PI * y / ny).sin();
    }
}

// ── Divergence-free projection ─────────────────────────────────────

#[test]
fn projection_drives_divergence_below_epsilon() {
    let mut state = make_state_2d(16, GridLayout::Staggered);
    fill_smooth_velocity(&mut state);

    let extents = *state.extents();
    let mut solver = FluidSolver::new(extents);
    solver.run_advection = false;
    solver.run_diffusion = false;
    solver.pressure_iterations = 1000;
    solver.verify_divergence = true;

    let mut ctx = ComputeContext::new();
    solver.advance(&mut ctx, &mut state, 0.016).unwrap();

    // The flow actually had divergence to remove...
    assert!(max_abs(state.divergence().as_slice()) > 1e-2);
    // ...and projection removed it everywhere.
    assert!(
        max_abs(state.divergence_check().as_slice()) < 1e-3,
        "post-projection divergence {} too large",
        max_abs(state.divergence_check().as_slice())
    );
}

#[test]
fn projection_drives_divergence_below_epsilon_in_3d() {
    let mut state = make_state_3d(8, GridLayout::Staggered);
    let extents = *state.extents();
    for cell in extents.iter_cells().collect::<Vec<_>>() {
        let (x, y, z) = (cell[0] as f32, cell[1] as f32, cell[2] as f32);
        let s = |v: f32| (std::f32::consts::PI * v / 8.0).sin();
        let c = |v: f32| (std::f32::consts::PI * v / 8.0).cos();
        *state
            .velocity_mut(Axis::X)
            .input_mut()
            .at_mut(cell[0], cell[1], cell[2]) = 0.4 * s(x) * c(y) * c(z);
        *state
            .velocity_mut(Axis::Y)
            .input_mut()
            .at_mut(cell[0], cell[1], cell[2]) = 0.2 * c(x) * s(y) * c(z);
        *state
            .velocity_mut(Axis::Z)
            .input_mut()
            .at_mut(cell[0], cell[1], cell[2]) = -0.3 * c(x) * c(y) * s(z);
    }

    let mut solver = FluidSolver::new(extents);
    solver.run_advection = false;
    solver.run_diffusion = false;
    solver.pressure_iterations = 600;
    solver.verify_divergence = true;

    let mut ctx = ComputeContext::new();
    solver.advance(&mut ctx, &mut state, 0.016).unwrap();

    assert!(max_abs(state.divergence_check().as_slice()) < 1e-3);
}

// ── Identity transport ─────────────────────────────────────────────

#[test]
fn uniform_field_survives_a_full_frame_at_rest() {
    let mut state = make_state_2d(12, GridLayout::Staggered);
    state.ink_mut().input_mut().as_mut_slice().fill(4.25);

    let extents = *state.extents();
    let mut solver = FluidSolver::new(extents);
    solver.diffusion_iterations = 10;
    solver.pressure_iterations = 10;

    let mut ctx = ComputeContext::new();
    solver.advance(&mut ctx, &mut state, 0.016).unwrap();

    for &v in state.ink().input().as_slice() {
        assert!((v - 4.25).abs() < 1e-5);
    }
    // At rest everything else stays at rest.
    assert!(max_abs(state.velocity(Axis::X).input().as_slice()) < 1e-6);
    assert!(max_abs(state.pressure().input().as_slice()) < 1e-6);
}

// ── Impulse locality ───────────────────────────────────────────────

#[test]
fn impulse_effect_is_local_to_a_few_radii() {
    let mut state = make_state_2d(64, GridLayout::Staggered);
    let extents = *state.extents();
    let mut solver = FluidSolver::new(extents);
    let mut ctx = ComputeContext::new();

    let radius = 3.0;
    let impulse = Impulse::at_2d(32.0, 32.0)
        .with_magnitude([10.0, 5.0, 0.0])
        .with_radius(radius)
        .with_ink(20.0);
    solver
        .apply_forces(&mut ctx, &mut state, &impulse, false, 0.1)
        .unwrap();

    let vx = state.velocity(Axis::X).input();
    assert!(vx.at(32, 32, 0) > 9.0);
    // A few radii out the splat has decayed to nearly nothing.
    let d = (6.0 * radius) as u32;
    assert!(vx.at(32 + d, 32, 0).abs() < 1e-6);
    assert!(vx.at(32, 32 + d, 0).abs() < 1e-6);
    // Far corners untouched to floating-point tolerance.
    assert_eq!(state.ink().input().at(0, 0, 0), 0.0);
    assert_eq!(state.ink().input().at(63, 63, 0), 0.0);
}

// ── Hook firing ────────────────────────────────────────────────────

#[test]
fn hooks_fire_in_checkpoint_order() {
    let mut state = make_state_2d(8, GridLayout::Staggered);
    let extents = *state.extents();
    let mut solver = FluidSolver::new(extents);
    solver.diffusion_iterations = 2;
    solver.pressure_iterations = 2;

    let order: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
    let stages = [
        (HookStage::Start, "start"),
        (HookStage::AfterAdvection, "advection"),
        (HookStage::AfterDiffusion, "diffusion"),
        (HookStage::AfterDivergence, "divergence"),
        (HookStage::AfterPressure, "pressure"),
        (HookStage::AfterProjection, "projection"),
    ];
    for (stage, label) in stages {
        let order = Arc::clone(&order);
        solver.register_hook(
            Box::new(move |_, _| order.lock().unwrap().push(label)),
            stage,
        );
    }

    let mut ctx = ComputeContext::new();
    solver.advance(&mut ctx, &mut state, 0.016).unwrap();

    assert_eq!(
        order.lock().unwrap().as_slice(),
        &[
            "start",
            "advection",
            "diffusion",
            "divergence",
            "pressure",
            "projection",
        ]
    );
}

#[test]
fn disabled_stage_still_fires_its_checkpoint() {
    let mut state = make_state_2d(8, GridLayout::Staggered);
    fill_smooth_velocity(&mut state);
    let extents = *state.extents();
    let mut solver = FluidSolver::new(extents);
    solver.diffusion_iterations = 2;
    solver.pressure_iterations = 2;
    solver.run_pressure = false;

    let fired = Arc::new(Mutex::new(0u32));
    let f = Arc::clone(&fired);
    solver.register_hook(
        Box::new(move |_, _| *f.lock().unwrap() += 1),
        HookStage::AfterPressure,
    );

    let pressure_before: Vec<f32> = state.pressure().input().as_slice().to_vec();
    let orientation_before = state.pressure().input_index();

    let mut ctx = ComputeContext::new();
    solver.advance(&mut ctx, &mut state, 0.016).unwrap();

    // The checkpoint fired even though the stage was skipped...
    assert_eq!(*fired.lock().unwrap(), 1);
    // ...and the pressure field is observably unchanged.
    assert_eq!(state.pressure().input_index(), orientation_before);
    assert_eq!(state.pressure().input().as_slice(), pressure_before.as_slice());
}

#[test]
fn hook_lifecycle_is_dynamic() {
    let mut state = make_state_2d(8, GridLayout::Staggered);
    let extents = *state.extents();
    let mut solver = FluidSolver::new(extents);
    solver.diffusion_iterations = 1;
    solver.pressure_iterations = 1;

    let count = Arc::new(Mutex::new(0u32));
    let c = Arc::clone(&count);
    let id = solver.register_hook(
        Box::new(move |_, _| *c.lock().unwrap() += 1),
        HookStage::Start,
    );

    let mut ctx = ComputeContext::new();
    solver.advance(&mut ctx, &mut state, 0.016).unwrap();
    assert_eq!(*count.lock().unwrap(), 1);

    // Park it, then move it to a real stage again.
    assert!(solver.set_hook_stage(id, HookStage::Never));
    solver.advance(&mut ctx, &mut state, 0.016).unwrap();
    assert_eq!(*count.lock().unwrap(), 1);

    assert!(solver.set_hook_stage(id, HookStage::AfterProjection));
    solver.advance(&mut ctx, &mut state, 0.016).unwrap();
    assert_eq!(*count.lock().unwrap(), 2);

    // Unknown ids fail softly; removal is idempotent.
    solver.remove_hook(id);
    assert!(!solver.set_hook_stage(id, HookStage::Start));
    solver.remove_hook(id);
}

// ── Grid scrolling ─────────────────────────────────────────────────

#[test]
fn full_period_scroll_is_the_identity_on_every_field() {
    let mut state = make_state_2d(8, GridLayout::Staggered);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for v in state.ink_mut().input_mut().as_mut_slice() {
        *v = rng.random_range(-1.0..1.0);
    }
    for v in state.velocity_mut(Axis::Y).input_mut().as_mut_slice() {
        *v = rng.random_range(-1.0..1.0);
    }
    for v in state.divergence_mut().as_mut_slice() {
        *v = rng.random_range(-1.0..1.0);
    }

    let ink: Vec<f32> = state.ink().input().as_slice().to_vec();
    let vy: Vec<f32> = state.velocity(Axis::Y).input().as_slice().to_vec();
    let div: Vec<f32> = state.divergence().as_slice().to_vec();

    let extents = *state.extents();
    let mut solver = FluidSolver::new(extents);
    let mut ctx = ComputeContext::new();
    solver
        .scroll_grid(&mut ctx, &mut state, [8, -8, 0])
        .unwrap();

    assert_eq!(state.ink().input().as_slice(), ink.as_slice());
    assert_eq!(state.velocity(Axis::Y).input().as_slice(), vy.as_slice());
    assert_eq!(state.divergence().as_slice(), div.as_slice());
}

#[test]
fn opposite_scrolls_cancel() {
    let mut state = make_state_2d(8, GridLayout::Staggered);
    *state.ink_mut().input_mut().at_mut(2, 5, 0) = 3.0;
    let before: Vec<f32> = state.ink().input().as_slice().to_vec();

    let extents = *state.extents();
    let mut solver = FluidSolver::new(extents);
    let mut ctx = ComputeContext::new();
    solver.scroll_grid(&mut ctx, &mut state, [3, 2, 0]).unwrap();
    solver
        .scroll_grid(&mut ctx, &mut state, [-3, -2, 0])
        .unwrap();

    assert_eq!(state.ink().input().as_slice(), before.as_slice());
}

// ── Determinism ────────────────────────────────────────────────────

#[test]
fn identical_inputs_produce_identical_frames() {
    let run = || {
        let mut state = make_state_2d(12, GridLayout::Staggered);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for axis in [Axis::X, Axis::Y] {
            for v in state.velocity_mut(axis).input_mut().as_mut_slice() {
                *v = rng.random_range(-0.5..0.5);
            }
        }
        let extents = *state.extents();
        let mut solver = FluidSolver::new(extents);
        solver.diffusion_iterations = 8;
        solver.pressure_iterations = 8;
        let mut ctx = ComputeContext::new();
        solver.advance(&mut ctx, &mut state, 0.016).unwrap();
        (
            state.velocity(Axis::X).input().as_slice().to_vec(),
            state.pressure().input().as_slice().to_vec(),
        )
    };

    let (vx_a, p_a) = run();
    let (vx_b, p_b) = run();
    assert_eq!(vx_a, vx_b);
    assert_eq!(p_a, p_b);
}

// ── Operator substitution ──────────────────────────────────────────

#[test]
fn stages_are_polymorphic_over_the_operator() {
    let mut state = make_state_2d(8, GridLayout::Collocated);
    state.physics = PhysicalProperties::new(1.0, 0.1);
    let extents = *state.extents();

    let (counting, count) =
        CountingOperator::wrapping("counted_jacobi", Box::new(JacobiSweepKernel));
    let mut stage = DiffusionStage::with_operator(extents, Box::new(counting));

    let mut ctx = ComputeContext::new();
    stage.compute(&mut ctx, &mut state, 0.1, 6).unwrap();

    // 6 sweeps × 2 axes, every one routed through the substitute.
    assert_eq!(count.load(Ordering::Relaxed), 12);
}

// ── Reset ──────────────────────────────────────────────────────────

#[test]
fn reset_restores_a_disturbed_state() {
    let mut state = make_state_2d(8, GridLayout::Staggered);
    let extents = *state.extents();
    let mut solver = FluidSolver::new(extents);
    solver.diffusion_iterations = 3;
    solver.pressure_iterations = 3;
    let mut ctx = ComputeContext::new();

    let impulse = Impulse::at_2d(4.0, 4.0)
        .with_magnitude([3.0, 1.0, 0.0])
        .with_radius(2.0)
        .with_ink(5.0);
    solver
        .apply_forces(&mut ctx, &mut state, &impulse, false, 0.1)
        .unwrap();
    solver.advance(&mut ctx, &mut state, 0.016).unwrap();

    state.reset();
    assert!(max_abs(state.velocity(Axis::X).input().as_slice()) == 0.0);
    assert!(max_abs(state.ink().input().as_slice()) == 0.0);
    assert!(max_abs(state.divergence().as_slice()) == 0.0);
    assert_eq!(state.ink().input_index(), 0);
    assert_eq!(state.pressure().input_index(), 0);
}

// ── Unknown state shapes ───────────────────────────────────────────

#[test]
fn mismatched_state_shape_is_rejected_at_dispatch() {
    // A solver built for one grid shape cannot silently run a state
    // of another shape: the pass validation catches it.
    let mut state = make_state_2d(8, GridLayout::Staggered);
    let other = GridExtents::new_2d(16, 16).unwrap();
    let mut solver = FluidSolver::new(other);
    let mut ctx = ComputeContext::new();
    let err = solver.advance(&mut ctx, &mut state, 0.016);
    assert!(err.is_err());
}
