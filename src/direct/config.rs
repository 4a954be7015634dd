//! Direct-rating configuration.

use crate::priority::PriorityType;

/// What happens when an alternative or user name is registered twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuplicatePolicy {
    /// Fail with a duplicate error.
    #[default]
    Reject,

    /// Leave the existing entry and its scores as they are.
    Ignore,

    /// Keep the entry's position but clear every score recorded for it.
    Overwrite,
}

/// How per-user scores are combined into the group priority.
///
/// # References
///
/// Aczél & Saaty (1983), "Procedures for synthesizing ratio judgements"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Aggregation {
    /// Arithmetic mean of the users' scores.
    #[default]
    ArithmeticMean,

    /// Geometric mean of the users' scores.
    ///
    /// Any non-positive score makes the aggregate 0.
    GeometricMean,
}

/// Configuration for [`DirectPrioritizer`](super::DirectPrioritizer).
///
/// # Examples
///
/// ```
/// use u_ahp::direct::{Aggregation, DirectConfig, DuplicatePolicy};
/// use u_ahp::priority::PriorityType;
///
/// let config = DirectConfig::default()
///     .with_on_duplicate(DuplicatePolicy::Ignore)
///     .with_aggregation(Aggregation::GeometricMean)
///     .with_default_ptype(PriorityType::Normalize);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectConfig {
    /// Collision handling for `add_alt` / `add_user`.
    pub on_duplicate: DuplicatePolicy,

    /// Group aggregation across users.
    pub aggregation: Aggregation,

    /// Score used for an alternative a user has not rated.
    pub missing_value: f64,

    /// Policy applied when `priority` is called without one.
    pub default_ptype: PriorityType,
}

impl Default for DirectConfig {
    fn default() -> Self {
        Self {
            on_duplicate: DuplicatePolicy::default(),
            aggregation: Aggregation::default(),
            missing_value: 0.0,
            default_ptype: PriorityType::default(),
        }
    }
}

impl DirectConfig {
    pub fn with_on_duplicate(mut self, policy: DuplicatePolicy) -> Self {
        self.on_duplicate = policy;
        self
    }

    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    pub fn with_missing_value(mut self, value: f64) -> Self {
        self.missing_value = value;
        self
    }

    pub fn with_default_ptype(mut self, ptype: PriorityType) -> Self {
        self.default_ptype = ptype;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.missing_value.is_finite() {
            return Err(format!(
                "missing_value must be finite, got {}",
                self.missing_value
            ));
        }
        Ok(())
    }
}
