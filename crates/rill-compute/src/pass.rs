//! One elementwise pass over the grid: extents, uniforms, and bound
//! buffers.

use crate::uniforms::Uniforms;
use rill_core::OperatorError;
use rill_grid::GridExtents;

/// Everything one [`GridOperator`](crate::GridOperator) dispatch needs:
/// the index range (grid extents), the uniform table, read bindings,
/// and write bindings.
///
/// Binding lengths are validated against the pass extents at
/// construction, so operators can index cells without re-checking.
/// Read and write slots are numbered independently; a stage that reads
/// and writes the *same* storage (a pure additive in-place update)
/// binds it as a write slot only.
pub struct GridPass<'a> {
    extents: GridExtents,
    uniforms: &'a Uniforms,
    reads: Vec<&'a [f32]>,
    writes: Vec<&'a mut [f32]>,
}

impl<'a> GridPass<'a> {
    /// Build a pass, validating that every binding covers exactly one
    /// value per cell.
    pub fn new(
        extents: GridExtents,
        uniforms: &'a Uniforms,
        reads: Vec<&'a [f32]>,
        writes: Vec<&'a mut [f32]>,
    ) -> Result<Self, OperatorError> {
        let expected = extents.cell_count();
        for (slot, read) in reads.iter().enumerate() {
            if read.len() != expected {
                return Err(OperatorError::BindingSizeMismatch {
                    slot,
                    len: read.len(),
                    expected,
                });
            }
        }
        for (slot, write) in writes.iter().enumerate() {
            if write.len() != expected {
                return Err(OperatorError::BindingSizeMismatch {
                    slot,
                    len: write.len(),
                    expected,
                });
            }
        }
        Ok(Self {
            extents,
            uniforms,
            reads,
            writes,
        })
    }

    /// Grid extents the pass covers.
    pub fn extents(&self) -> &GridExtents {
        &self.extents
    }

    /// The uniform table for this dispatch.
    pub fn uniforms(&self) -> &Uniforms {
        self.uniforms
    }

    /// Read binding at `slot`.
    pub fn read(&self, slot: usize) -> Result<&'a [f32], OperatorError> {
        self.reads
            .get(slot)
            .copied()
            .ok_or(OperatorError::MissingBinding {
                slot,
                writable: false,
            })
    }

    /// Take ownership of the write binding at `slot` for the remainder
    /// of the pass. A slot can only be taken once per dispatch.
    pub fn take_write(&mut self, slot: usize) -> Result<&'a mut [f32], OperatorError> {
        let buffer = self
            .writes
            .get_mut(slot)
            .map(std::mem::take)
            .ok_or(OperatorError::MissingBinding {
                slot,
                writable: true,
            })?;
        if buffer.is_empty() && self.extents.cell_count() != 0 {
            // Already taken earlier in this dispatch.
            return Err(OperatorError::MissingBinding {
                slot,
                writable: true,
            });
        }
        Ok(buffer)
    }

    /// Number of read bindings.
    pub fn read_count(&self) -> usize {
        self.reads.len()
    }

    /// Number of write bindings.
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extents() -> GridExtents {
        GridExtents::new_2d(2, 2).unwrap()
    }

    #[test]
    fn validates_binding_lengths() {
        let uniforms = Uniforms::new();
        let short = vec![0.0f32; 3];
        let result = GridPass::new(extents(), &uniforms, vec![short.as_slice()], vec![]);
        assert!(matches!(
            result,
            Err(OperatorError::BindingSizeMismatch {
                slot: 0,
                len: 3,
                expected: 4,
            })
        ));
    }

    #[test]
    fn reads_and_writes_resolve_by_slot() {
        let uniforms = Uniforms::new();
        let input = vec![1.0f32; 4];
        let mut output = vec![0.0f32; 4];
        let mut pass = GridPass::new(
            extents(),
            &uniforms,
            vec![input.as_slice()],
            vec![output.as_mut_slice()],
        )
        .unwrap();

        assert_eq!(pass.read(0).unwrap()[0], 1.0);
        let out = pass.take_write(0).unwrap();
        out[0] = 5.0;
        drop(pass);
        assert_eq!(output[0], 5.0);
    }

    #[test]
    fn missing_slots_error() {
        let uniforms = Uniforms::new();
        let mut pass = GridPass::new(extents(), &uniforms, vec![], vec![]).unwrap();
        assert!(matches!(
            pass.read(0),
            Err(OperatorError::MissingBinding {
                slot: 0,
                writable: false,
            })
        ));
        assert!(matches!(
            pass.take_write(0),
            Err(OperatorError::MissingBinding {
                slot: 0,
                writable: true,
            })
        ));
    }

    #[test]
    fn write_slot_can_only_be_taken_once() {
        let uniforms = Uniforms::new();
        let mut output = vec![0.0f32; 4];
        let mut pass =
            GridPass::new(extents(), &uniforms, vec![], vec![output.as_mut_slice()]).unwrap();
        assert!(pass.take_write(0).is_ok());
        assert!(pass.take_write(0).is_err());
    }
}
