//! Prioritizer fed with directly entered scores.

use super::config::{Aggregation, DirectConfig, DuplicatePolicy};
use crate::error::{PrioritizeError, Result};
use crate::prioritizer::{Prioritizer, SummaryWriter};
use crate::priority::{PriorityType, PriorityVector};
use tracing::{debug, trace};

/// A prioritizer whose scores are typed in rather than derived.
///
/// Scores can be recorded per user with [`set`](Self::set), or without any
/// user via [`set_direct`](Self::set_direct). The group priority is the
/// configured [`Aggregation`] of the users' scores; when no user has been
/// registered it is the directly entered table instead.
///
/// `add_alt` and `add_user` trim surrounding whitespace before storing a
/// name. Lookups in `set`, `score` and `priority` match stored names
/// exactly.
///
/// # Examples
///
/// ```
/// use u_ahp::direct::DirectPrioritizer;
/// use u_ahp::prioritizer::Prioritizer;
/// use u_ahp::priority::PriorityType;
///
/// let mut p = DirectPrioritizer::new();
/// p.add_alt("bus").unwrap();
/// p.add_alt("train").unwrap();
/// p.set_direct("bus", 1.0).unwrap();
/// p.set_direct("train", 3.0).unwrap();
///
/// let pv = p.priority(None, Some(PriorityType::Normalize)).unwrap();
/// assert_eq!(pv.get("train"), Some(0.75));
/// ```
#[derive(Debug, Clone)]
pub struct DirectPrioritizer {
    config: DirectConfig,
    alts: Vec<String>,
    users: Vec<String>,
    /// `user_scores[u][a]`, parallel to `users` and `alts`.
    user_scores: Vec<Vec<Option<f64>>>,
    direct_scores: Vec<Option<f64>>,
}

impl DirectPrioritizer {
    /// Creates an empty prioritizer with the default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(DirectConfig::default())
    }

    /// Creates an empty prioritizer, validating `config` first.
    pub fn with_config(config: DirectConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|reason| PrioritizeError::InvalidConfig { reason })?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: DirectConfig) -> Self {
        Self {
            config,
            alts: Vec::new(),
            users: Vec::new(),
            user_scores: Vec::new(),
            direct_scores: Vec::new(),
        }
    }

    pub fn config(&self) -> &DirectConfig {
        &self.config
    }

    /// Registered alternatives in registration order.
    pub fn alt_names(&self) -> &[String] {
        &self.alts
    }

    /// Records `user`'s score for `alt`.
    pub fn set(&mut self, user: &str, alt: &str, value: f64) -> Result<()> {
        let a = self.alt_index(alt)?;
        let u = self.user_index(user)?;
        check_finite(alt, value)?;
        self.user_scores[u][a] = Some(value);
        trace!(user, alt, value, "recorded user score");
        Ok(())
    }

    /// Records a score for `alt` that belongs to no user.
    pub fn set_direct(&mut self, alt: &str, value: f64) -> Result<()> {
        let a = self.alt_index(alt)?;
        check_finite(alt, value)?;
        self.direct_scores[a] = Some(value);
        trace!(alt, value, "recorded direct score");
        Ok(())
    }

    /// The score `user` gave `alt`, or the direct score when `user` is `None`.
    ///
    /// `Ok(None)` means nothing has been recorded yet.
    pub fn score(&self, user: Option<&str>, alt: &str) -> Result<Option<f64>> {
        let a = self.alt_index(alt)?;
        match user {
            Some(name) => Ok(self.user_scores[self.user_index(name)?][a]),
            None => Ok(self.direct_scores[a]),
        }
    }

    fn alt_index(&self, alt: &str) -> Result<usize> {
        self.alts
            .iter()
            .position(|n| n == alt)
            .ok_or_else(|| PrioritizeError::UnknownAlternative {
                name: alt.to_string(),
            })
    }

    fn user_index(&self, user: &str) -> Result<usize> {
        self.users
            .iter()
            .position(|n| n == user)
            .ok_or_else(|| PrioritizeError::UnknownUser {
                name: user.to_string(),
            })
    }

    fn filled(&self, row: &[Option<f64>]) -> Vec<f64> {
        row.iter()
            .map(|v| v.unwrap_or(self.config.missing_value))
            .collect()
    }

    /// Raw scores for one user, or the group aggregate.
    fn raw_scores(&self, username: Option<&str>) -> Result<Vec<f64>> {
        match username {
            Some(name) => {
                let u = self.user_index(name)?;
                Ok(self.filled(&self.user_scores[u]))
            }
            None => Ok(self.group_scores()),
        }
    }

    /// Aggregate over users, or the direct table when there are none.
    fn group_scores(&self) -> Vec<f64> {
        if self.users.is_empty() {
            return self.filled(&self.direct_scores);
        }

        let rows: Vec<Vec<f64>> = self.user_scores.iter().map(|r| self.filled(r)).collect();
        let n = rows.len() as f64;
        (0..self.alts.len())
            .map(|a| {
                let column = rows.iter().map(|r| r[a]);
                match self.config.aggregation {
                    Aggregation::ArithmeticMean => column.sum::<f64>() / n,
                    Aggregation::GeometricMean => geometric_mean(column, n),
                }
            })
            .collect()
    }
}

impl Default for DirectPrioritizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Prioritizer for DirectPrioritizer {
    fn add_alt(&mut self, alt_name: &str) -> Result<()> {
        let name = checked_name(alt_name, "alternative")?;
        if let Some(a) = self.alts.iter().position(|n| n == name) {
            return match self.config.on_duplicate {
                DuplicatePolicy::Reject => Err(PrioritizeError::DuplicateAlternative {
                    name: name.to_string(),
                }),
                DuplicatePolicy::Ignore => Ok(()),
                DuplicatePolicy::Overwrite => {
                    self.direct_scores[a] = None;
                    for row in &mut self.user_scores {
                        row[a] = None;
                    }
                    debug!(alt = name, "cleared alternative scores");
                    Ok(())
                }
            };
        }

        self.alts.push(name.to_string());
        self.direct_scores.push(None);
        for row in &mut self.user_scores {
            row.push(None);
        }
        debug!(alt = name, nalts = self.alts.len(), "registered alternative");
        Ok(())
    }

    fn priority(
        &self,
        username: Option<&str>,
        ptype: Option<PriorityType>,
    ) -> Result<PriorityVector> {
        let ptype = ptype.unwrap_or(self.config.default_ptype);
        let mut values = self.raw_scores(username)?;
        ptype.apply_in_place(&mut values);
        trace!(user = ?username, %ptype, "computed priority");
        Ok(PriorityVector::from_parts(self.alts.clone(), values))
    }

    fn nalts(&self) -> usize {
        self.alts.len()
    }

    fn add_user(&mut self, uname: &str) -> Result<()> {
        let name = checked_name(uname, "user")?;
        if let Some(u) = self.users.iter().position(|n| n == name) {
            return match self.config.on_duplicate {
                DuplicatePolicy::Reject => Err(PrioritizeError::DuplicateUser {
                    name: name.to_string(),
                }),
                DuplicatePolicy::Ignore => Ok(()),
                DuplicatePolicy::Overwrite => {
                    self.user_scores[u].fill(None);
                    debug!(user = name, "cleared user scores");
                    Ok(())
                }
            };
        }

        self.users.push(name.to_string());
        self.user_scores.push(vec![None; self.alts.len()]);
        debug!(user = name, nusers = self.users.len(), "registered user");
        Ok(())
    }

    fn usernames(&self) -> Vec<String> {
        self.users.clone()
    }

    fn render_summary(&self, indent: &str) -> String {
        let mut w = SummaryWriter::new(indent);
        w.line(format!(
            "DirectPrioritizer ({} alternatives, {} users)",
            self.alts.len(),
            self.users.len()
        ));
        let group = self.group_scores();
        w.nested(|w| {
            w.line("alternatives:").nested(|w| {
                for (name, value) in self.alts.iter().zip(&group) {
                    w.line(format!("{name}: {value}"));
                }
            });
            if !self.users.is_empty() {
                w.line("users:").nested(|w| {
                    for user in &self.users {
                        w.line(user);
                    }
                });
            }
        });
        w.finish()
    }
}

/// Trims surrounding whitespace; blank names are rejected.
fn checked_name<'n>(name: &'n str, kind: &'static str) -> Result<&'n str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PrioritizeError::EmptyName { kind });
    }
    Ok(name)
}

fn check_finite(alt: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PrioritizeError::NonFiniteScore {
            alt: alt.to_string(),
            value,
        });
    }
    Ok(())
}

fn geometric_mean(values: impl Iterator<Item = f64>, n: f64) -> f64 {
    let mut log_sum = 0.0;
    for v in values {
        if v <= 0.0 {
            return 0.0;
        }
        log_sum += v.ln();
    }
    (log_sum / n).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_alts(names: &[&str]) -> DirectPrioritizer {
        let mut p = DirectPrioritizer::new();
        for name in names {
            p.add_alt(name).unwrap();
        }
        p
    }

    #[test]
    fn test_empty() {
        let p = DirectPrioritizer::new();
        assert_eq!(p.nalts(), 0);
        assert!(p.usernames().is_empty());
        assert!(p.priority(None, None).unwrap().is_empty());
    }

    #[test]
    fn test_direct_scores_in_order() {
        let mut p = with_alts(&["a", "b", "c"]);
        p.set_direct("a", 1.0).unwrap();
        p.set_direct("b", -2.0).unwrap();
        p.set_direct("c", 3.0).unwrap();

        let raw = p.priority(None, None).unwrap();
        assert_eq!(raw.names(), &["a", "b", "c"]);
        assert_eq!(raw.values(), &[1.0, -2.0, 3.0]);

        let ideal = p.priority(None, Some(PriorityType::Idealize)).unwrap();
        assert!((ideal.get("a").unwrap() - 1.0 / 3.0).abs() < 1e-10);
        assert!((ideal.get("b").unwrap() + 2.0 / 3.0).abs() < 1e-10);
        assert!((ideal.get("c").unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_unset_uses_missing_value() {
        let config = DirectConfig::default().with_missing_value(0.5);
        let mut p = DirectPrioritizer::with_config(config).unwrap();
        p.add_alt("a").unwrap();
        p.add_alt("b").unwrap();
        p.set_direct("a", 2.0).unwrap();

        let pv = p.priority(None, None).unwrap();
        assert_eq!(pv.values(), &[2.0, 0.5]);
    }

    #[test]
    fn test_duplicate_alt_rejected_by_default() {
        let mut p = with_alts(&["a"]);
        let err = p.add_alt("a").unwrap_err();
        assert_eq!(err, PrioritizeError::DuplicateAlternative { name: "a".into() });
        assert_eq!(p.nalts(), 1);
    }

    #[test]
    fn test_duplicate_alt_ignored() {
        let config = DirectConfig::default().with_on_duplicate(DuplicatePolicy::Ignore);
        let mut p = DirectPrioritizer::with_config(config).unwrap();
        p.add_alt("a").unwrap();
        p.set_direct("a", 4.0).unwrap();
        p.add_alt("a").unwrap();

        assert_eq!(p.nalts(), 1);
        assert_eq!(p.score(None, "a").unwrap(), Some(4.0));
    }

    #[test]
    fn test_duplicate_alt_overwrite_clears_scores() {
        let config = DirectConfig::default().with_on_duplicate(DuplicatePolicy::Overwrite);
        let mut p = DirectPrioritizer::with_config(config).unwrap();
        p.add_alt("a").unwrap();
        p.add_alt("b").unwrap();
        p.add_user("ann").unwrap();
        p.set_direct("a", 4.0).unwrap();
        p.set("ann", "a", 2.0).unwrap();
        p.set("ann", "b", 1.0).unwrap();

        p.add_alt("a").unwrap();

        assert_eq!(p.alt_names(), &["a", "b"]);
        assert_eq!(p.score(None, "a").unwrap(), None);
        assert_eq!(p.score(Some("ann"), "a").unwrap(), None);
        assert_eq!(p.score(Some("ann"), "b").unwrap(), Some(1.0));
    }

    #[test]
    fn test_empty_names_rejected() {
        let mut p = DirectPrioritizer::new();
        assert_eq!(
            p.add_alt("  ").unwrap_err(),
            PrioritizeError::EmptyName { kind: "alternative" }
        );
        assert_eq!(
            p.add_user("").unwrap_err(),
            PrioritizeError::EmptyName { kind: "user" }
        );
    }

    #[test]
    fn test_users_in_order() {
        let mut p = DirectPrioritizer::new();
        p.add_user("zoe").unwrap();
        p.add_user("adam").unwrap();
        assert_eq!(p.usernames(), vec!["zoe".to_string(), "adam".to_string()]);

        let err = p.add_user("zoe").unwrap_err();
        assert_eq!(err, PrioritizeError::DuplicateUser { name: "zoe".into() });
    }

    #[test]
    fn test_duplicate_user_ignored() {
        let config = DirectConfig::default().with_on_duplicate(DuplicatePolicy::Ignore);
        let mut p = DirectPrioritizer::with_config(config).unwrap();
        p.add_alt("a").unwrap();
        p.add_user("ann").unwrap();
        p.add_user("bob").unwrap();
        p.set("ann", "a", 3.0).unwrap();

        p.add_user("ann").unwrap();

        assert_eq!(p.usernames(), vec!["ann".to_string(), "bob".to_string()]);
        assert_eq!(p.score(Some("ann"), "a").unwrap(), Some(3.0));
    }

    #[test]
    fn test_duplicate_user_overwrite_clears_scores() {
        let config = DirectConfig::default().with_on_duplicate(DuplicatePolicy::Overwrite);
        let mut p = DirectPrioritizer::with_config(config).unwrap();
        p.add_alt("a").unwrap();
        p.add_alt("b").unwrap();
        p.add_user("ann").unwrap();
        p.add_user("bob").unwrap();
        p.set("ann", "a", 3.0).unwrap();
        p.set("ann", "b", 1.0).unwrap();
        p.set("bob", "a", 2.0).unwrap();

        p.add_user("ann").unwrap();

        assert_eq!(p.usernames(), vec!["ann".to_string(), "bob".to_string()]);
        assert_eq!(p.score(Some("ann"), "a").unwrap(), None);
        assert_eq!(p.score(Some("ann"), "b").unwrap(), None);
        assert_eq!(p.score(Some("bob"), "a").unwrap(), Some(2.0));
    }

    #[test]
    fn test_names_are_trimmed() {
        let mut p = DirectPrioritizer::new();
        p.add_alt(" a ").unwrap();
        let err = p.add_alt("a").unwrap_err();
        assert_eq!(err, PrioritizeError::DuplicateAlternative { name: "a".into() });
        assert_eq!(p.alt_names(), &["a"]);

        p.add_user("ann\t").unwrap();
        assert_eq!(p.usernames(), vec!["ann".to_string()]);
        p.set("ann", "a", 1.0).unwrap();
    }

    #[test]
    fn test_summary_without_users_uses_direct_scores() {
        let mut p = with_alts(&["a"]);
        p.set_direct("a", 4.0).unwrap();
        assert_eq!(
            p.render_summary("  "),
            "DirectPrioritizer (1 alternatives, 0 users)\n  alternatives:\n    a: 4\n"
        );
    }

    #[test]
    fn test_user_added_before_alt() {
        let mut p = DirectPrioritizer::new();
        p.add_user("ann").unwrap();
        p.add_alt("a").unwrap();
        p.set("ann", "a", 5.0).unwrap();
        assert_eq!(p.priority(Some("ann"), None).unwrap().values(), &[5.0]);
    }

    #[test]
    fn test_per_user_priority() {
        let mut p = with_alts(&["a", "b"]);
        p.add_user("ann").unwrap();
        p.add_user("bob").unwrap();
        p.set("ann", "a", 1.0).unwrap();
        p.set("ann", "b", 3.0).unwrap();
        p.set("bob", "a", 2.0).unwrap();

        let ann = p.priority(Some("ann"), Some(PriorityType::Normalize)).unwrap();
        assert!((ann.get("a").unwrap() - 0.25).abs() < 1e-10);
        assert!((ann.get("b").unwrap() - 0.75).abs() < 1e-10);

        let bob = p.priority(Some("bob"), None).unwrap();
        assert_eq!(bob.values(), &[2.0, 0.0]);
    }

    #[test]
    fn test_group_arithmetic_mean() {
        let mut p = with_alts(&["a", "b"]);
        p.add_user("ann").unwrap();
        p.add_user("bob").unwrap();
        p.set("ann", "a", 1.0).unwrap();
        p.set("ann", "b", 3.0).unwrap();
        p.set("bob", "a", 3.0).unwrap();
        p.set("bob", "b", 5.0).unwrap();
        // ignored once users exist
        p.set_direct("a", 100.0).unwrap();

        let group = p.priority(None, None).unwrap();
        assert!((group.get("a").unwrap() - 2.0).abs() < 1e-10);
        assert!((group.get("b").unwrap() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_group_geometric_mean() {
        let config = DirectConfig::default().with_aggregation(Aggregation::GeometricMean);
        let mut p = DirectPrioritizer::with_config(config).unwrap();
        p.add_alt("a").unwrap();
        p.add_alt("b").unwrap();
        p.add_user("ann").unwrap();
        p.add_user("bob").unwrap();
        p.set("ann", "a", 2.0).unwrap();
        p.set("bob", "a", 8.0).unwrap();
        p.set("ann", "b", 4.0).unwrap();
        p.set("bob", "b", -1.0).unwrap();

        let group = p.priority(None, None).unwrap();
        assert!((group.get("a").unwrap() - 4.0).abs() < 1e-10);
        assert!(group.get("b").unwrap().abs() < 1e-15);
    }

    #[test]
    fn test_config_default_ptype() {
        let config = DirectConfig::default().with_default_ptype(PriorityType::Idealize);
        let mut p = DirectPrioritizer::with_config(config).unwrap();
        p.add_alt("a").unwrap();
        p.add_alt("b").unwrap();
        p.set_direct("a", 2.0).unwrap();
        p.set_direct("b", 4.0).unwrap();

        assert_eq!(p.priority(None, None).unwrap().values(), &[0.5, 1.0]);
        // explicit request wins
        assert_eq!(
            p.priority(None, Some(PriorityType::Raw)).unwrap().values(),
            &[2.0, 4.0]
        );
    }

    #[test]
    fn test_unknown_names() {
        let mut p = with_alts(&["a"]);
        assert_eq!(
            p.priority(Some("ghost"), None).unwrap_err(),
            PrioritizeError::UnknownUser { name: "ghost".into() }
        );
        assert_eq!(
            p.set_direct("zz", 1.0).unwrap_err(),
            PrioritizeError::UnknownAlternative { name: "zz".into() }
        );
        assert!(matches!(
            p.set("ghost", "a", 1.0),
            Err(PrioritizeError::UnknownUser { .. })
        ));
    }

    #[test]
    fn test_non_finite_score_rejected() {
        let mut p = with_alts(&["a"]);
        assert!(matches!(
            p.set_direct("a", f64::NAN),
            Err(PrioritizeError::NonFiniteScore { .. })
        ));
        assert_eq!(p.score(None, "a").unwrap(), None);
    }

    #[test]
    fn test_invalid_config() {
        let config = DirectConfig::default().with_missing_value(f64::INFINITY);
        assert!(matches!(
            DirectPrioritizer::with_config(config),
            Err(PrioritizeError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_render_summary() {
        let mut p = with_alts(&["a", "b"]);
        p.set_direct("a", 1.0).unwrap();
        p.set_direct("b", 2.5).unwrap();
        p.add_user("ann").unwrap();
        p.set("ann", "a", 1.0).unwrap();
        p.set("ann", "b", 2.5).unwrap();

        let text = p.render_summary("\t");
        assert_eq!(
            text,
            "DirectPrioritizer (2 alternatives, 1 users)\n\
             \talternatives:\n\
             \t\ta: 1\n\
             \t\tb: 2.5\n\
             \tusers:\n\
             \t\tann\n"
        );
    }

    #[test]
    fn test_usable_as_trait_object() {
        let mut boxed: Box<dyn Prioritizer> = Box::new(DirectPrioritizer::new());
        boxed.add_alt("a").unwrap();
        boxed.add_alt("b").unwrap();
        boxed.add_user("ann").unwrap();

        assert_eq!(boxed.nalts(), 2);
        assert_eq!(boxed.usernames(), vec!["ann".to_string()]);
        let pv = boxed.priority(None, None).unwrap();
        assert_eq!(pv.values(), &[0.0, 0.0]);
    }
}
