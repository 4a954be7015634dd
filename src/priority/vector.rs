//! Labeled priority vectors.

use super::types::PriorityType;
use crate::error::{PrioritizeError, Result};
use std::fmt;

/// Scores keyed by alternative name, in a stable order.
///
/// The order is the order in which entries were added (for prioritizers,
/// the order alternatives were registered). Names are unique.
///
/// # Examples
///
/// ```
/// use u_ahp::priority::{PriorityType, PriorityVector};
///
/// let pv = PriorityVector::from_pairs([("a", 1.0), ("b", 3.0)]).unwrap();
/// let norm = pv.normalized(PriorityType::Normalize);
///
/// assert_eq!(norm.get("b"), Some(0.75));
/// assert_eq!(norm.best(), Some(("b", 0.75)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<(String, f64)>", into = "Vec<(String, f64)>")
)]
pub struct PriorityVector {
    names: Vec<String>,
    values: Vec<f64>,
}

impl PriorityVector {
    /// Creates an empty vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a vector from `(name, score)` pairs, rejecting repeated names.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut pv = Self::new();
        for (name, value) in pairs {
            pv.push(name, value)?;
        }
        Ok(pv)
    }

    /// Appends an entry.
    pub fn push(&mut self, name: impl Into<String>, value: f64) -> Result<()> {
        let name = name.into();
        if self.position(&name).is_some() {
            return Err(PrioritizeError::DuplicateAlternative { name });
        }
        self.names.push(name);
        self.values.push(value);
        Ok(())
    }

    /// Builder form of [`push`](Self::push).
    pub fn with_entry(mut self, name: impl Into<String>, value: f64) -> Result<Self> {
        self.push(name, value)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Index of `name`, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Score of `name`, if present.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.position(name).map(|i| self.values[i])
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates `(name, score)` in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Returns a copy with `ptype` applied to the scores.
    pub fn normalized(&self, ptype: PriorityType) -> Self {
        Self {
            names: self.names.clone(),
            values: ptype.apply(&self.values),
        }
    }

    /// Highest-scoring entry. The earliest entry wins ties.
    pub fn best(&self) -> Option<(&str, f64)> {
        self.iter().fold(None, |best, (name, value)| match best {
            Some((_, b)) if b >= value => best,
            _ => Some((name, value)),
        })
    }

    /// Entries sorted by descending score; ties keep insertion order.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }

    /// Wraps names and values produced together by a prioritizer.
    ///
    /// Callers guarantee equal lengths and unique names.
    pub(crate) fn from_parts(names: Vec<String>, values: Vec<f64>) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Self { names, values }
    }
}

impl TryFrom<Vec<(String, f64)>> for PriorityVector {
    type Error = PrioritizeError;

    fn try_from(pairs: Vec<(String, f64)>) -> Result<Self> {
        Self::from_pairs(pairs)
    }
}

impl From<PriorityVector> for Vec<(String, f64)> {
    fn from(pv: PriorityVector) -> Self {
        pv.names.into_iter().zip(pv.values).collect()
    }
}

impl fmt::Display for PriorityVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}
