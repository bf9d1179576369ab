//! Merge template expansion
//!
//! Templates are written against a wildcard delimiter. Expansion substitutes
//! each configured delimiter into each template, producing the concrete
//! token sequences the merger looks for.

use crate::rules::{MergeTemplate, RuleSet, TemplateToken};

/// A concrete token sequence produced from one template and one delimiter
pub type Pattern = Vec<String>;

/// Expand every template of `rules` against every delimiter
///
/// Order is delimiter-outer, template-inner; the merger relies on it for
/// first-match priority. Returns an empty list when the rule set has no
/// templates.
pub fn expand(rules: &RuleSet) -> Vec<Pattern> {
    expand_templates(rules.delimiters(), rules.templates())
}

pub(crate) fn expand_templates(delimiters: &[String], templates: &[MergeTemplate]) -> Vec<Pattern> {
    if templates.is_empty() {
        return Vec::new();
    }

    let mut patterns = Vec::with_capacity(delimiters.len() * templates.len());
    for delimiter in delimiters {
        for template in templates {
            patterns.push(instantiate(template, delimiter));
        }
    }
    patterns
}

fn instantiate(template: &MergeTemplate, delimiter: &str) -> Pattern {
    template
        .tokens()
        .iter()
        .map(|token| match token {
            TemplateToken::Literal(text) => text.clone(),
            TemplateToken::Delimiter => delimiter.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tibetan_like() -> RuleSet {
        RuleSet::new(
            "bo",
            "tibetan",
            ["།", "༔"],
            vec![
                MergeTemplate::from_strs("single", ["<delim>", " ", "<delim>"]),
                MergeTemplate::from_strs("double", ["<delim>", "<delim>", " ", "<delim>", "<delim>"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_no_templates_expands_to_nothing() {
        let rules = RuleSet::new("en", "english", [".", "!", "?"], vec![]).unwrap();
        assert!(expand(&rules).is_empty());
    }

    #[test]
    fn test_cross_product_order() {
        let patterns = expand(&tibetan_like());
        assert_eq!(
            patterns,
            vec![
                vec!["།", " ", "།"],
                vec!["།", "།", " ", "།", "།"],
                vec!["༔", " ", "༔"],
                vec!["༔", "༔", " ", "༔", "༔"],
            ]
        );
    }

    #[test]
    fn test_wildcard_is_consistent_within_instantiation() {
        for pattern in expand(&tibetan_like()) {
            let first = &pattern[0];
            assert!(pattern.iter().filter(|t| *t != " ").all(|t| t == first));
        }
    }

    #[test]
    fn test_literal_only_template() {
        let rules = RuleSet::new(
            "xx",
            "test",
            [".", "!"],
            vec![MergeTemplate::from_strs("ellipsis", [".", ".", "."])],
        )
        .unwrap();
        let patterns = expand(&rules);
        // One copy per delimiter even when the wildcard is unused
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0], patterns[1]);
    }

    #[test]
    fn test_matches_cached_patterns() {
        let rules = tibetan_like();
        assert_eq!(expand(&rules), rules.patterns());
    }
}
