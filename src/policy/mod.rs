//! Per-pair overrides of the pool families the router may search.
//!
//! Rules are evaluated in order and the first match decides the filter.
//! Pairs that match nothing are routed over every pool type.

use crate::core::{Address, PoolFilter, USDT, WTLOS, ZERO};
use std::fmt;
use std::sync::Arc;

type PairPredicate = dyn Fn(&Address, &Address) -> bool + Send + Sync;

/// A single `predicate(token_in, token_out) -> filter` override.
///
/// Predicates see addresses after native-asset normalization, with the
/// caller's casing.
#[derive(Clone)]
pub struct PoolFilterRule {
    name: String,
    predicate: Arc<PairPredicate>,
    filter: PoolFilter,
}

impl PoolFilterRule {
    pub fn new<F>(name: impl Into<String>, filter: PoolFilter, predicate: F) -> Self
    where
        F: Fn(&Address, &Address) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
            filter,
        }
    }

    /// Matches when either leg is one of `anchors` and the output token is
    /// `token_out`. Comparisons are exact.
    pub fn pair(
        name: impl Into<String>,
        anchors: Vec<Address>,
        token_out: Address,
        filter: PoolFilter,
    ) -> Self {
        Self::new(name, filter, move |token_in, out| {
            let anchored = anchors.iter().any(|a| a == token_in || a == out);
            anchored && *out == token_out
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn filter(&self) -> PoolFilter {
        self.filter
    }

    pub fn matches(&self, token_in: &Address, token_out: &Address) -> bool {
        (self.predicate)(token_in, token_out)
    }
}

impl fmt::Debug for PoolFilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolFilterRule")
            .field("name", &self.name)
            .field("filter", &self.filter)
            .finish()
    }
}

/// Ordered rule table consulted for every quote.
#[derive(Debug, Clone, Default)]
pub struct PoolFilterRules {
    rules: Vec<PoolFilterRule>,
}

impl PoolFilterRules {
    /// A table with no overrides.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(rules: Vec<PoolFilterRule>) -> Self {
        Self { rules }
    }

    /// WTLOS (or native TLOS) into USDT is only routed through weighted
    /// pools; the default search returns poor routes for it.
    pub fn telos_defaults() -> Self {
        Self::new(vec![PoolFilterRule::pair(
            "wtlos-usdt",
            vec![WTLOS.clone(), ZERO.clone()],
            USDT.clone(),
            PoolFilter::Weighted,
        )])
    }

    pub fn push(&mut self, rule: PoolFilterRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[PoolFilterRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First matching rule, if any.
    pub fn find(&self, token_in: &Address, token_out: &Address) -> Option<&PoolFilterRule> {
        self.rules.iter().find(|rule| rule.matches(token_in, token_out))
    }

    pub fn resolve(&self, token_in: &Address, token_out: &Address) -> PoolFilter {
        self.find(token_in, token_out)
            .map(PoolFilterRule::filter)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NATIVE_ASSET, USDT_ADDRESS};
    use test_case::test_case;

    fn addr(s: &str) -> Address {
        s.parse().unwrap()
    }

    const OTHER: &str = "0x1111111111111111111111111111111111111111";

    #[test_case(&ZERO, &USDT, PoolFilter::Weighted ; "native into usdt")]
    #[test_case(&WTLOS, &USDT, PoolFilter::Weighted ; "wtlos into usdt")]
    #[test_case(&USDT, &ZERO, PoolFilter::All ; "usdt into native")]
    #[test_case(&USDT, &WTLOS, PoolFilter::All ; "usdt into wtlos")]
    #[test_case(&WTLOS, &ZERO, PoolFilter::All ; "wrap pair")]
    #[test_case(&NATIVE_ASSET, &USDT, PoolFilter::All ; "unnormalized sentinel")]
    fn test_telos_defaults(token_in: &Address, token_out: &Address, expected: PoolFilter) {
        let rules = PoolFilterRules::telos_defaults();
        assert_eq!(rules.resolve(token_in, token_out), expected);
    }

    #[test]
    fn test_other_pairs_use_all() {
        let rules = PoolFilterRules::telos_defaults();
        assert_eq!(rules.resolve(&addr(OTHER), &USDT), PoolFilter::All);
        assert_eq!(rules.resolve(&WTLOS, &addr(OTHER)), PoolFilter::All);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let rules = PoolFilterRules::telos_defaults();
        let lower_usdt = addr(&USDT_ADDRESS.to_lowercase());
        let lower_wtlos = addr(&WTLOS.to_lowercase());

        assert_eq!(rules.resolve(&ZERO, &lower_usdt), PoolFilter::All);
        assert_eq!(rules.resolve(&lower_wtlos, &USDT), PoolFilter::All);
    }

    #[test]
    fn test_first_match_wins() {
        let mut rules = PoolFilterRules::new(vec![PoolFilterRule::new(
            "stable-first",
            PoolFilter::Stable,
            |_, out| *out == *USDT,
        )]);
        rules.push(PoolFilterRule::pair(
            "wtlos-usdt",
            vec![WTLOS.clone()],
            USDT.clone(),
            PoolFilter::Weighted,
        ));

        assert_eq!(rules.len(), 2);
        assert_eq!(rules.resolve(&WTLOS, &USDT), PoolFilter::Stable);
        assert_eq!(rules.find(&WTLOS, &USDT).map(|r| r.name()), Some("stable-first"));
    }

    #[test]
    fn test_empty_table_defaults_to_all() {
        let rules = PoolFilterRules::empty();
        assert!(rules.is_empty());
        assert_eq!(rules.resolve(&ZERO, &USDT), PoolFilter::All);
    }
}
