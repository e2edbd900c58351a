//! Reusable Jacobi relaxation driver.

use rill_compute::{ComputeContext, GridOperator, GridPass, Uniforms};
use rill_core::OperatorError;
use rill_field::{FieldBuffer, ScalarGrid};
use rill_grid::GridExtents;

/// Where one sweep reads from or writes to.
///
/// The target field's double buffer supplies `Input` (the last
/// confirmed values, read-only for the whole relaxation) and `Output`
/// (the designated destination of the final sweep). `Working` is the
/// iterator's own scratch grid, needed because the double buffer's two
/// halves are both spoken for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Role {
    Input,
    Working,
    Output,
}

/// The source term of the relaxation equation.
pub enum JacobiSource<'a> {
    /// The target field's own input buffer (viscous diffusion).
    FieldInput,
    /// An external field (the divergence grid, for pressure).
    External(&'a [f32]),
}

/// Drives N elementwise relaxation sweeps of
/// `x = (Σ neighbours(x) + α·source) / β` without ever reading and
/// writing the same storage in one sweep.
///
/// Sweep 1 reads only the field's input; the final sweep always writes
/// the field's output; intermediate sweeps bounce between the scratch
/// grid and the output. Whether the bouncing starts on the scratch or
/// the output side is fixed up front by the parity of N — that is what
/// guarantees the final sweep lands in the output regardless of N.
///
/// The caller issues a visibility barrier before each sweep (one
/// shared barrier can serve several interleaved iterators) and calls
/// [`JacobiIterator::reset`] after exactly N sweeps. Stepping past N,
/// beginning with a non-positive count, and finishing early are
/// programmer errors checked in debug builds.
pub struct JacobiIterator {
    working: ScalarGrid,
    total: u32,
    current: u32,
    write_to_working: bool,
    read_role: Role,
    write_role: Role,
    active: bool,
}

impl JacobiIterator {
    /// Allocate an iterator (and its scratch grid) for one grid shape.
    pub fn new(extents: GridExtents) -> Self {
        Self {
            working: ScalarGrid::new(extents),
            total: 0,
            current: 0,
            write_to_working: true,
            read_role: Role::Input,
            write_role: Role::Working,
            active: false,
        }
    }

    /// Start a relaxation of `iterations` sweeps.
    pub fn init(&mut self, iterations: u32) {
        debug_assert!(iterations > 0, "jacobi iteration count must be positive");
        debug_assert!(!self.active, "previous relaxation was not finished");
        self.total = iterations;
        self.current = 0;
        // Even counts must start on the scratch side so the last sweep
        // lands in the field's output buffer.
        self.write_to_working = iterations % 2 == 0;
        self.read_role = Role::Input;
        self.write_role = if self.write_to_working {
            Role::Working
        } else {
            Role::Output
        };
        self.active = true;
    }

    /// Execute one sweep through `kernel`.
    ///
    /// The caller must have issued a barrier since the previous sweep
    /// so this sweep's reads observe those writes.
    pub fn step(
        &mut self,
        ctx: &mut ComputeContext,
        kernel: &dyn GridOperator,
        uniforms: &Uniforms,
        source: JacobiSource<'_>,
        field: &mut FieldBuffer,
    ) -> Result<(), OperatorError> {
        debug_assert!(self.active, "step() before init()");
        debug_assert!(
            self.current < self.total,
            "stepped past the configured sweep count"
        );

        let extents = *field.extents();
        match (self.read_role, self.write_role) {
            (Role::Input, Role::Working) => {
                let iterate = field.input().as_slice();
                let src = match source {
                    JacobiSource::FieldInput => iterate,
                    JacobiSource::External(s) => s,
                };
                let mut pass = GridPass::new(
                    extents,
                    uniforms,
                    vec![src, iterate],
                    vec![self.working.as_mut_slice()],
                )?;
                ctx.dispatch(kernel, &mut pass)?;
            }
            (Role::Input, Role::Output) => {
                let (input, output) = field.split_mut();
                let iterate = input.as_slice();
                let src = match source {
                    JacobiSource::FieldInput => iterate,
                    JacobiSource::External(s) => s,
                };
                let mut pass = GridPass::new(
                    extents,
                    uniforms,
                    vec![src, iterate],
                    vec![output.as_mut_slice()],
                )?;
                ctx.dispatch(kernel, &mut pass)?;
            }
            (Role::Working, Role::Output) => {
                let (input, output) = field.split_mut();
                let src = match source {
                    JacobiSource::FieldInput => input.as_slice(),
                    JacobiSource::External(s) => s,
                };
                let mut pass = GridPass::new(
                    extents,
                    uniforms,
                    vec![src, self.working.as_slice()],
                    vec![output.as_mut_slice()],
                )?;
                ctx.dispatch(kernel, &mut pass)?;
            }
            (Role::Output, Role::Working) => {
                let src = match source {
                    JacobiSource::FieldInput => field.input().as_slice(),
                    JacobiSource::External(s) => s,
                };
                let mut pass = GridPass::new(
                    extents,
                    uniforms,
                    vec![src, field.output().as_slice()],
                    vec![self.working.as_mut_slice()],
                )?;
                ctx.dispatch(kernel, &mut pass)?;
            }
            // The read is always the previous sweep's write, the write
            // alternates between scratch and output, and the input is
            // never written: no other combination can arise.
            other => unreachable!("impossible sweep roles {other:?}"),
        }

        self.write_to_working = !self.write_to_working;
        self.read_role = self.write_role;
        self.write_role = if self.write_to_working {
            Role::Working
        } else {
            Role::Output
        };
        self.current += 1;
        Ok(())
    }

    /// Clear bookkeeping after a completed relaxation.
    ///
    /// Debug-asserts that all configured sweeps actually ran; the
    /// iterator is then ready for a different field or iteration
    /// count.
    pub fn reset(&mut self) {
        debug_assert_eq!(
            self.current, self.total,
            "relaxation finished before all sweeps ran"
        );
        self.total = 0;
        self.current = 0;
        self.write_to_working = true;
        self.read_role = Role::Input;
        self.write_role = Role::Working;
        self.active = false;
    }

    /// Sweeps executed since [`JacobiIterator::init`].
    pub fn sweeps_run(&self) -> u32 {
        self.current
    }

    /// Whether a relaxation is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }
}
