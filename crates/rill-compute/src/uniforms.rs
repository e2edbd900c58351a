//! Named scalar/vector parameters for one operator dispatch.

use indexmap::IndexMap;
use rill_core::OperatorError;

/// A single uniform parameter value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    /// 32-bit float scalar.
    F32(f32),
    /// 32-bit signed integer scalar.
    I32(i32),
    /// Three-component float vector.
    Vec3([f32; 3]),
}

/// Insertion-ordered table of named uniforms.
///
/// Stages fill one of these per dispatch; operators read values back
/// by name and fail with [`OperatorError::MissingUniform`] /
/// [`OperatorError::UniformTypeMismatch`] when a pass is mis-bound.
#[derive(Clone, Debug, Default)]
pub struct Uniforms {
    entries: IndexMap<&'static str, UniformValue>,
}

impl Uniforms {
    /// Empty uniform table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a float uniform, replacing any previous value.
    pub fn set_f32(&mut self, name: &'static str, value: f32) -> &mut Self {
        self.entries.insert(name, UniformValue::F32(value));
        self
    }

    /// Set an integer uniform, replacing any previous value.
    pub fn set_i32(&mut self, name: &'static str, value: i32) -> &mut Self {
        self.entries.insert(name, UniformValue::I32(value));
        self
    }

    /// Set a vector uniform, replacing any previous value.
    pub fn set_vec3(&mut self, name: &'static str, value: [f32; 3]) -> &mut Self {
        self.entries.insert(name, UniformValue::Vec3(value));
        self
    }

    /// Read a float uniform.
    pub fn f32(&self, name: &'static str) -> Result<f32, OperatorError> {
        match self.entries.get(name) {
            Some(UniformValue::F32(v)) => Ok(*v),
            Some(_) => Err(OperatorError::UniformTypeMismatch { name }),
            None => Err(OperatorError::MissingUniform { name }),
        }
    }

    /// Read an integer uniform.
    pub fn i32(&self, name: &'static str) -> Result<i32, OperatorError> {
        match self.entries.get(name) {
            Some(UniformValue::I32(v)) => Ok(*v),
            Some(_) => Err(OperatorError::UniformTypeMismatch { name }),
            None => Err(OperatorError::MissingUniform { name }),
        }
    }

    /// Read a vector uniform.
    pub fn vec3(&self, name: &'static str) -> Result<[f32; 3], OperatorError> {
        match self.entries.get(name) {
            Some(UniformValue::Vec3(v)) => Ok(*v),
            Some(_) => Err(OperatorError::UniformTypeMismatch { name }),
            None => Err(OperatorError::MissingUniform { name }),
        }
    }

    /// Number of uniforms set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
