// Rule labels reported by the segmentation engine

use std::fmt;

use serde::{Serialize, Serializer};

/// A decision rule that fired while scanning a word.
///
/// The `Display` form is the label shown to users, e.g. `Diphthong (ai)` or
/// `C-C`. Two rules are equal exactly when their labels are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Two vowels kept in one syllable.
    Diphthong([char; 2]),
    /// Two vowels split into separate syllables.
    Hiatus([char; 2]),
    /// A single consonant between vowels joins the following vowel.
    VowelConsonantVowel,
    /// A digraph between vowels joins the following vowel.
    Digraph([char; 2]),
    /// An inseparable cluster between vowels joins the following vowel.
    InseparableCluster([char; 2]),
    /// Two separable consonants are split between the syllables.
    ConsonantConsonant,
    /// Three or more consonants ending in an inseparable cluster.
    ConsonantsThenCluster([char; 2]),
    /// Three or more consonants ending in a digraph.
    ConsonantThenDigraph([char; 2]),
    /// Three or more consonants; only the last one moves on.
    TripleConsonant,
    /// No internal boundary was found.
    SimpleWord,
}

impl Rule {
    pub fn is_diphthong(&self) -> bool {
        matches!(self, Rule::Diphthong(_))
    }

    pub fn is_hiatus(&self) -> bool {
        matches!(self, Rule::Hiatus(_))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Diphthong([a, b]) => write!(f, "Diphthong ({a}{b})"),
            Rule::Hiatus([a, b]) => write!(f, "Hiatus ({a}-{b})"),
            Rule::VowelConsonantVowel => f.write_str("V-C-V"),
            Rule::Digraph([a, b]) => write!(f, "Digraph ({a}{b})"),
            Rule::InseparableCluster([a, b]) => write!(f, "Inseparable cluster ({a}{b})"),
            Rule::ConsonantConsonant => f.write_str("C-C"),
            Rule::ConsonantsThenCluster([a, b]) => write!(f, "C-C + cluster ({a}{b})"),
            Rule::ConsonantThenDigraph([a, b]) => write!(f, "C + digraph ({a}{b})"),
            Rule::TripleConsonant => f.write_str("C-C-C"),
            Rule::SimpleWord => f.write_str("simple word"),
        }
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// RuleSet
// ---------------------------------------------------------------------------

/// Deduplicated rules in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule unless an equal one is already present.
    /// Returns `true` if the rule was added.
    pub fn insert(&mut self, rule: Rule) -> bool {
        if self.rules.contains(&rule) {
            return false;
        }
        self.rules.push(rule);
        true
    }

    pub fn contains(&self, rule: &Rule) -> bool {
        self.rules.contains(rule)
    }

    /// True if any rule renders to `label`.
    pub fn contains_label(&self, label: &str) -> bool {
        self.rules.iter().any(|r| r.to_string() == label)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Labels in first-seen order.
    pub fn labels(&self) -> Vec<String> {
        self.rules.iter().map(Rule::to_string).collect()
    }

    /// Labels joined with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.labels().join(separator)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut set = RuleSet::new();
        for rule in iter {
            set.insert(rule);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- labels --

    #[test]
    fn labels_render() {
        assert_eq!(Rule::Diphthong(['a', 'i']).to_string(), "Diphthong (ai)");
        assert_eq!(Rule::Hiatus(['í', 'a']).to_string(), "Hiatus (í-a)");
        assert_eq!(Rule::VowelConsonantVowel.to_string(), "V-C-V");
        assert_eq!(Rule::Digraph(['r', 'r']).to_string(), "Digraph (rr)");
        assert_eq!(
            Rule::InseparableCluster(['b', 'r']).to_string(),
            "Inseparable cluster (br)"
        );
        assert_eq!(Rule::ConsonantConsonant.to_string(), "C-C");
        assert_eq!(
            Rule::ConsonantsThenCluster(['t', 'r']).to_string(),
            "C-C + cluster (tr)"
        );
        assert_eq!(
            Rule::ConsonantThenDigraph(['c', 'h']).to_string(),
            "C + digraph (ch)"
        );
        assert_eq!(Rule::TripleConsonant.to_string(), "C-C-C");
        assert_eq!(Rule::SimpleWord.to_string(), "simple word");
    }

    #[test]
    fn rule_kind_predicates() {
        assert!(Rule::Diphthong(['u', 'e']).is_diphthong());
        assert!(!Rule::Diphthong(['u', 'e']).is_hiatus());
        assert!(Rule::Hiatus(['e', 'a']).is_hiatus());
        assert!(!Rule::SimpleWord.is_diphthong());
    }

    // -- RuleSet --

    #[test]
    fn ruleset_dedups_and_keeps_order() {
        let mut set = RuleSet::new();
        assert!(set.insert(Rule::VowelConsonantVowel));
        assert!(set.insert(Rule::Diphthong(['a', 'i'])));
        assert!(!set.insert(Rule::VowelConsonantVowel));
        assert!(set.insert(Rule::Diphthong(['i', 'a'])));
        assert_eq!(set.len(), 3);
        assert_eq!(
            set.labels(),
            vec!["V-C-V", "Diphthong (ai)", "Diphthong (ia)"]
        );
    }

    #[test]
    fn ruleset_join_and_contains_label() {
        let set: RuleSet = [Rule::ConsonantConsonant, Rule::VowelConsonantVowel]
            .into_iter()
            .collect();
        assert_eq!(set.join(", "), "C-C, V-C-V");
        assert!(set.contains_label("C-C"));
        assert!(!set.contains_label("C-C-C"));
    }

    #[test]
    fn ruleset_serializes_as_labels() {
        let set: RuleSet = [Rule::Digraph(['l', 'l']), Rule::SimpleWord]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["Digraph (ll)","simple word"]"#);
    }
}
