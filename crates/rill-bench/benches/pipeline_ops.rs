//! Criterion benchmarks for the per-frame pipeline and its hottest
//! kernels.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rill_bench::{reference_profile, stress_profile};
use rill_compute::{ComputeContext, GridPass, Uniforms};
use rill_core::{Axis, Impulse};
use rill_grid::GridExtents;
use rill_kernels::{AdvectKernel, JacobiSweepKernel};

fn bench_full_frame(c: &mut Criterion) {
    let (mut state, mut solver) = reference_profile();
    let mut ctx = ComputeContext::new();
    let impulse = Impulse::at_2d(32.0, 32.0)
        .with_magnitude([4.0, 2.0, 0.0])
        .with_radius(6.0)
        .with_ink(5.0);
    solver
        .apply_forces(&mut ctx, &mut state, &impulse, false, 0.016)
        .unwrap();

    c.bench_function("advance_64x64", |b| {
        b.iter(|| {
            solver
                .advance(&mut ctx, &mut state, black_box(0.016))
                .unwrap();
        })
    });
}

fn bench_full_frame_stress(c: &mut Criterion) {
    let (mut state, mut solver) = stress_profile();
    let mut ctx = ComputeContext::new();

    c.bench_function("advance_256x256", |b| {
        b.iter(|| {
            solver
                .advance(&mut ctx, &mut state, black_box(0.016))
                .unwrap();
        })
    });
}

fn bench_jacobi_sweep(c: &mut Criterion) {
    let extents = GridExtents::new_2d(256, 256).unwrap();
    let n = extents.cell_count();
    let source = vec![0.1f32; n];
    let field_in = vec![0.5f32; n];
    let mut field_out = vec![0.0f32; n];

    let mut uniforms = Uniforms::new();
    uniforms
        .set_f32("alpha", -0.64)
        .set_f32("one_over_beta", 0.25)
        .set_f32("boundary_coeff", 1.0);
    let kernel = JacobiSweepKernel;
    let mut ctx = ComputeContext::new();

    c.bench_function("jacobi_sweep_256x256", |b| {
        b.iter(|| {
            let mut pass = GridPass::new(
                extents,
                &uniforms,
                vec![source.as_slice(), field_in.as_slice()],
                vec![field_out.as_mut_slice()],
            )
            .unwrap();
            ctx.dispatch(&kernel, &mut pass).unwrap();
        })
    });
}

fn bench_advection(c: &mut Criterion) {
    let (mut state, _) = stress_profile();
    let extents = *state.extents();
    state
        .velocity_mut(Axis::X)
        .input_mut()
        .as_mut_slice()
        .fill(0.8);

    let mut uniforms = Uniforms::new();
    uniforms
        .set_f32("dt", 0.016)
        .set_f32("one_over_dx", 1.25)
        .set_i32("staggered", 1)
        .set_vec3("field_offset", [0.0; 3]);
    let kernel = AdvectKernel;
    let mut ctx = ComputeContext::new();

    c.bench_function("advect_ink_256x256", |b| {
        b.iter(|| {
            let (velocity, source, output) =
                state.advection_views(rill_field::AdvectedField::Ink);
            let mut reads: Vec<&[f32]> = velocity.iter().map(|g| g.as_slice()).collect();
            reads.push(source.as_slice());
            let mut pass =
                GridPass::new(extents, &uniforms, reads, vec![output.as_mut_slice()]).unwrap();
            ctx.dispatch(&kernel, &mut pass).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_full_frame,
    bench_full_frame_stress,
    bench_jacobi_sweep,
    bench_advection
);
criterion_main!(benches);
