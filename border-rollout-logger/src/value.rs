//! Values stored by [`SampleLogger`](crate::SampleLogger).
//!
//! State samples are kept as [`StateValue`], which covers the shapes an
//! environment typically emits per step: a single number, a vector (e.g. one
//! entry per joint) or a small matrix. Reward terms arrive as [`RewardValue`],
//! either a plain number or a boxed scalar taken from a tensor.
use crate::error::LoggerError;

/// A single state sample.
///
/// # Variants
///
/// * `Scalar(f32)` - A single value, like the commanded forward velocity
/// * `Array1(Vec<f32>)` - A vector, like the positions of all joints
/// * `Array2(Vec<f32>, [usize; 2])` - A row-major matrix with its shape
#[derive(Debug, Clone, PartialEq)]
pub enum StateValue {
    /// A single floating-point value.
    Scalar(f32),

    /// A 1-dimensional array of floating-point values.
    Array1(Vec<f32>),

    /// A 2-dimensional array with shape information.
    Array2(Vec<f32>, [usize; 2]),
}

impl StateValue {
    /// Creates a matrix sample from row-major data.
    pub fn matrix(data: Vec<f32>, shape: [usize; 2]) -> Self {
        StateValue::Array2(data, shape)
    }

    /// Number of columns this sample occupies once flattened.
    pub fn width(&self) -> usize {
        match self {
            StateValue::Scalar(_) => 1,
            StateValue::Array1(v) => v.len(),
            StateValue::Array2(v, _) => v.len(),
        }
    }

    /// Returns the sample as a flat, row-major slice of values.
    pub fn flatten(&self) -> &[f32] {
        match self {
            StateValue::Scalar(v) => std::slice::from_ref(v),
            StateValue::Array1(v) => v.as_slice(),
            StateValue::Array2(v, _) => v.as_slice(),
        }
    }
}

impl From<f32> for StateValue {
    fn from(v: f32) -> Self {
        StateValue::Scalar(v)
    }
}

impl From<f64> for StateValue {
    fn from(v: f64) -> Self {
        StateValue::Scalar(v as f32)
    }
}

impl From<Vec<f32>> for StateValue {
    fn from(v: Vec<f32>) -> Self {
        StateValue::Array1(v)
    }
}

impl From<&[f32]> for StateValue {
    fn from(v: &[f32]) -> Self {
        StateValue::Array1(v.to_vec())
    }
}

impl<const N: usize> From<[f32; N]> for StateValue {
    fn from(v: [f32; N]) -> Self {
        StateValue::Array1(v.to_vec())
    }
}

/// A reward term passed to [`SampleLogger::log_rewards`](crate::SampleLogger::log_rewards).
///
/// Reward terms computed on the simulator side are frequently reduced tensors
/// holding a single element. Those are passed as [`RewardValue::Boxed`] and
/// unwrapped before being weighted by the number of episodes.
#[derive(Debug, Clone, PartialEq)]
pub enum RewardValue {
    /// A plain number.
    Plain(f32),

    /// A boxed scalar, i.e. the elements of a single-element tensor.
    Boxed(Vec<f32>),
}

impl RewardValue {
    /// Wraps the elements of a tensor.
    pub fn boxed(v: Vec<f32>) -> Self {
        RewardValue::Boxed(v)
    }

    /// Returns the plain number held by this value.
    ///
    /// `key` is only used in the error message.
    pub fn unwrap_scalar(&self, key: &str) -> Result<f32, LoggerError> {
        match self {
            RewardValue::Plain(v) => Ok(*v),
            RewardValue::Boxed(v) if v.len() == 1 => Ok(v[0]),
            RewardValue::Boxed(v) => Err(LoggerError::NotAScalar {
                key: key.to_string(),
                len: v.len(),
            }),
        }
    }
}

impl From<f32> for RewardValue {
    fn from(v: f32) -> Self {
        RewardValue::Plain(v)
    }
}

impl From<f64> for RewardValue {
    fn from(v: f64) -> Self {
        RewardValue::Plain(v as f32)
    }
}
