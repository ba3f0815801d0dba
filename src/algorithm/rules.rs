//! Ordered rule tables
//!
//! Every decision cascade in the engine is an ordered list of named
//! (predicate, outcome) pairs. Rules are evaluated top-down and the first rule
//! whose predicate holds determines the outcome; if none holds, the table's
//! fallback applies. Earlier rules strictly dominate later ones.

use log::trace;

/// A single named rule: a predicate and the outcome it selects
#[derive(Debug)]
pub struct Rule<I: ?Sized + 'static, O: 'static> {
    /// Stable identifier, used in logs and tests
    pub name: &'static str,
    /// Whether the rule applies to an input
    pub applies: fn(&I) -> bool,
    /// Outcome selected when the rule applies
    pub outcome: O,
}

/// An ordered, first-match-wins list of rules with a fallback outcome
#[derive(Debug)]
pub struct RuleTable<I: ?Sized + 'static, O: 'static> {
    /// Name of the decision the table makes
    pub name: &'static str,
    /// Rules in priority order
    pub rules: &'static [Rule<I, O>],
    /// Outcome when no rule applies
    pub fallback: O,
}

impl<I: ?Sized + 'static, O: 'static> RuleTable<I, O> {
    /// The first rule that applies to `input`, if any
    pub fn first_match(&self, input: &I) -> Option<&Rule<I, O>> {
        self.rules.iter().find(|rule| (rule.applies)(input))
    }

    /// Evaluate the table and return the selected outcome
    pub fn evaluate(&self, input: &I) -> &O {
        match self.first_match(input) {
            Some(rule) => {
                trace!("{}: rule '{}' matched", self.name, rule.name);
                &rule.outcome
            }
            None => {
                trace!("{}: no rule matched, using fallback", self.name);
                &self.fallback
            }
        }
    }

    /// Name of the rule that decides `input`, or `None` for the fallback
    pub fn matched_rule_name(&self, input: &I) -> Option<&'static str> {
        self.first_match(input).map(|rule| rule.name)
    }

    /// Names of all rules that apply to `input`, in priority order
    ///
    /// Only the first of these determines the outcome.
    pub fn applicable_rule_names(&self, input: &I) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|rule| (rule.applies)(input))
            .map(|rule| rule.name)
            .collect()
    }

    /// Look up a rule by name
    pub fn rule(&self, name: &str) -> Option<&Rule<I, O>> {
        self.rules.iter().find(|rule| rule.name == name)
    }
}
