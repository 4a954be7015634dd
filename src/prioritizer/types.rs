//! Core trait for prioritizers.

use crate::error::Result;
use crate::priority::{PriorityType, PriorityVector};

/// Anything that turns judgments about a set of alternatives into a
/// priority vector.
///
/// Implementors own the alternatives (ordered, unique) and the users whose
/// judgments they record (ordered, unique). How scores are obtained is up
/// to the implementor: direct entry, pairwise comparison, a hierarchy of
/// criteria, and so on. Each implementor also decides what happens when a
/// name is registered twice.
///
/// The trait has no default methods and is object safe, so code can hold
/// a `Box<dyn Prioritizer>` while only concrete types can be constructed.
///
/// # Examples
///
/// ```ignore
/// struct Fixed { alts: Vec<String>, scores: Vec<f64> }
///
/// impl Prioritizer for Fixed {
///     fn add_alt(&mut self, alt_name: &str) -> Result<()> {
///         self.alts.push(alt_name.to_string());
///         self.scores.push(0.0);
///         Ok(())
///     }
///
///     fn priority(&self, _user: Option<&str>, ptype: Option<PriorityType>)
///         -> Result<PriorityVector>
///     {
///         let pv = PriorityVector::from_pairs(
///             self.alts.iter().cloned().zip(self.scores.iter().copied()))?;
///         Ok(pv.normalized(ptype.unwrap_or_default()))
///     }
///
///     // nalts, add_user, usernames, render_summary ...
/// }
/// ```
pub trait Prioritizer: Send + Sync {
    /// Registers a new alternative.
    fn add_alt(&mut self, alt_name: &str) -> Result<()>;

    /// Computes the priority vector for `username`, or for the group when
    /// `None`, rescaled by `ptype` (`None` means [`PriorityType::Raw`]).
    ///
    /// Entries follow the order in which alternatives were added.
    fn priority(
        &self,
        username: Option<&str>,
        ptype: Option<PriorityType>,
    ) -> Result<PriorityVector>;

    /// Number of registered alternatives.
    fn nalts(&self) -> usize;

    /// Registers a new user (evaluator).
    fn add_user(&mut self, uname: &str) -> Result<()>;

    /// Registered user names in registration order.
    fn usernames(&self) -> Vec<String>;

    /// Human-readable, indented description of this prioritizer.
    ///
    /// `indent` is one level of indentation; nested parts repeat it.
    fn render_summary(&self, indent: &str) -> String;
}
