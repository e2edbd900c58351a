//! Double-buffered ping-pong field.

use crate::grid::ScalarGrid;
use rill_grid::GridExtents;

/// Two same-shaped grids alternating between "input" and "output"
/// roles.
///
/// Exactly one grid is input and the other output at any time.
/// [`FieldBuffer::swap`] exchanges the roles in O(1) without touching
/// cell data; [`FieldBuffer::clear`] zeroes both grids and restores
/// the canonical orientation (grid 0 = input). Stencil passes read the
/// input and write the output through [`FieldBuffer::split_mut`], then
/// swap, so no pass ever reads the storage it is writing.
#[derive(Clone, Debug)]
pub struct FieldBuffer {
    grids: [ScalarGrid; 2],
    input_index: usize,
}

impl FieldBuffer {
    /// Allocate a zero-filled double buffer.
    pub fn new(extents: GridExtents) -> Self {
        Self {
            grids: [ScalarGrid::new(extents), ScalarGrid::new(extents)],
            input_index: 0,
        }
    }

    /// Grid extents (identical for both halves).
    pub fn extents(&self) -> &GridExtents {
        self.grids[0].extents()
    }

    /// The current input grid: the last confirmed field values.
    pub fn input(&self) -> &ScalarGrid {
        &self.grids[self.input_index]
    }

    /// Mutable access to the current input grid, for in-place stages
    /// that perform pure additive updates (no stencil reads).
    pub fn input_mut(&mut self) -> &mut ScalarGrid {
        &mut self.grids[self.input_index]
    }

    /// The current output grid. Read access is only meaningful for
    /// relaxation sweeps that bounce between output and scratch.
    pub fn output(&self) -> &ScalarGrid {
        &self.grids[1 - self.input_index]
    }

    /// Mutable access to the current output grid.
    pub fn output_mut(&mut self) -> &mut ScalarGrid {
        &mut self.grids[1 - self.input_index]
    }

    /// Split borrow: `(input, output)` simultaneously, for passes that
    /// read the previous values while writing the next.
    pub fn split_mut(&mut self) -> (&ScalarGrid, &mut ScalarGrid) {
        let (a, b) = self.grids.split_at_mut(1);
        if self.input_index == 0 {
            (&a[0], &mut b[0])
        } else {
            (&b[0], &mut a[0])
        }
    }

    /// Exchange the input/output roles. O(1); cell data untouched.
    pub fn swap(&mut self) {
        self.input_index = 1 - self.input_index;
    }

    /// Zero both grids and restore the canonical orientation.
    pub fn clear(&mut self) {
        self.grids[0].clear();
        self.grids[1].clear();
        self.input_index = 0;
    }

    /// Index (0 or 1) of the physical grid currently acting as input.
    ///
    /// Instrumentation for tests that assert which physical buffer a
    /// pass wrote into; not part of the simulation contract.
    pub fn input_index(&self) -> usize {
        self.input_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn buffer() -> FieldBuffer {
        FieldBuffer::new(GridExtents::new_2d(4, 4).unwrap())
    }

    #[test]
    fn swap_exchanges_roles_without_copying() {
        let mut b = buffer();
        b.input_mut().as_mut_slice()[0] = 1.0;
        b.output_mut().as_mut_slice()[0] = 2.0;

        b.swap();
        assert_eq!(b.input().as_slice()[0], 2.0);
        b.swap();
        assert_eq!(b.input().as_slice()[0], 1.0);
    }

    #[test]
    fn clear_zeroes_both_and_resets_orientation() {
        let mut b = buffer();
        b.input_mut().as_mut_slice().fill(5.0);
        b.output_mut().as_mut_slice().fill(6.0);
        b.swap();

        b.clear();
        assert_eq!(b.input_index(), 0);
        assert!(b.input().as_slice().iter().all(|&v| v == 0.0));
        b.swap();
        assert!(b.input().as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn split_mut_pairs_input_with_output() {
        let mut b = buffer();
        b.input_mut().as_mut_slice()[3] = 7.0;
        {
            let (input, output) = b.split_mut();
            assert_eq!(input.as_slice()[3], 7.0);
            output.as_mut_slice()[3] = input.as_slice()[3] * 2.0;
        }
        b.swap();
        assert_eq!(b.input().as_slice()[3], 14.0);
    }

    proptest! {
        #[test]
        fn orientation_parity_after_clear_and_swaps(swaps in 0usize..64) {
            // After clear() then N swaps, the input identity matches the
            // canonical assignment iff N is even.
            let mut b = buffer();
            b.clear();
            for _ in 0..swaps {
                b.swap();
            }
            prop_assert_eq!(b.input_index() == 0, swaps % 2 == 0);
        }
    }
}
