//! Normalization policies for raw weight vectors.

use crate::error::PrioritizeError;
use std::fmt;
use std::str::FromStr;

/// How a raw weight vector is rescaled before it is reported.
///
/// Every policy preserves length, element order and sign. The input is
/// never modified: [`apply`](PriorityType::apply) always returns an
/// independent `Vec<f64>`.
///
/// # Examples
///
/// ```
/// use u_ahp::priority::PriorityType;
///
/// let raw = [1.0, -2.0, 3.0];
/// assert_eq!(PriorityType::Idealize.apply(&raw), vec![1.0 / 3.0, -2.0 / 3.0, 1.0]);
///
/// // Integer input comes back as floats.
/// assert_eq!(PriorityType::Normalize.apply(&[1, 1]), vec![0.5, 0.5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PriorityType {
    /// Leave the values unchanged.
    #[default]
    Raw,

    /// Divide by the sum of absolute values, so that `Σ|x_i| = 1`.
    ///
    /// Signs are kept: a negative input stays negative.
    Normalize,

    /// Divide by the largest absolute value, so that `max |x_i| = 1`.
    Idealize,
}

impl PriorityType {
    /// All policies, in declaration order.
    pub const ALL: [PriorityType; 3] = [
        PriorityType::Raw,
        PriorityType::Normalize,
        PriorityType::Idealize,
    ];

    /// Returns a float copy of `vals` rescaled by this policy.
    ///
    /// A zero divisor (empty or all-zero input) leaves the copy unchanged.
    pub fn apply<T>(&self, vals: &[T]) -> Vec<f64>
    where
        T: Copy + Into<f64>,
    {
        let mut out: Vec<f64> = vals.iter().map(|&v| v.into()).collect();
        self.apply_in_place(&mut out);
        out
    }

    /// Rescales `vals` in place.
    pub fn apply_in_place(&self, vals: &mut [f64]) {
        let divisor = match self {
            PriorityType::Raw => return,
            PriorityType::Normalize => vals.iter().map(|v| v.abs()).sum::<f64>(),
            PriorityType::Idealize => vals.iter().fold(0.0_f64, |m, v| m.max(v.abs())),
        };
        if divisor == 0.0 {
            return;
        }
        for v in vals.iter_mut() {
            *v /= divisor;
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            PriorityType::Raw => "raw",
            PriorityType::Normalize => "normalize",
            PriorityType::Idealize => "idealize",
        }
    }
}

/// The policy used when a caller does not ask for one.
pub fn priority_type_default() -> PriorityType {
    PriorityType::default()
}

impl fmt::Display for PriorityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PriorityType {
    type Err = PrioritizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(PriorityType::Raw),
            "normalize" => Ok(PriorityType::Normalize),
            "idealize" => Ok(PriorityType::Idealize),
            _ => Err(PrioritizeError::InvalidPolicy { name: s.to_string() }),
        }
    }
}
