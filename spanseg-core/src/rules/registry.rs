//! Language identifier → rule set lookup
//!
//! The registry is an ordinary value: build it once (usually with
//! [`RuleRegistry::builtin`]) and pass it by reference to whatever needs to
//! resolve languages. Unknown identifiers resolve to the default rule set,
//! reported as [`Resolution::FallbackUsed`] so callers can notice typos.

use super::{RuleConfig, RuleSet};
use crate::error::{CoreError, Result};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Identifier of the default rule set used for unknown languages
pub const DEFAULT_LANGUAGE: &str = "en";

macro_rules! embed_rule_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

/// Built-in rule files, keyed by the code they must declare
const EMBEDDED_CONFIGS: [(&str, &str); 3] = [
    embed_rule_config!("en", "../../configs/languages/english.toml"),
    embed_rule_config!("zh", "../../configs/languages/chinese.toml"),
    embed_rule_config!("bo", "../../configs/languages/tibetan.toml"),
];

/// Parse every embedded rule file
pub fn embedded_configs() -> Result<Vec<RuleConfig>> {
    EMBEDDED_CONFIGS
        .iter()
        .map(|(code, toml_content)| {
            let config = RuleConfig::from_toml_str(toml_content, code)?;
            if config.metadata.code != *code {
                return Err(CoreError::configuration(format!(
                    "Config code mismatch: expected {}, got {}",
                    code, config.metadata.code
                )));
            }
            Ok(config)
        })
        .collect()
}

/// Outcome of resolving a language identifier
#[derive(Debug, Clone)]
pub enum Resolution {
    /// The identifier is registered
    Resolved(Arc<RuleSet>),
    /// The identifier is unknown; the default rule set was substituted
    FallbackUsed {
        rules: Arc<RuleSet>,
        requested: String,
    },
}

impl Resolution {
    pub fn rules(&self) -> &Arc<RuleSet> {
        match self {
            Resolution::Resolved(rules) => rules,
            Resolution::FallbackUsed { rules, .. } => rules,
        }
    }

    pub fn into_rules(self) -> Arc<RuleSet> {
        match self {
            Resolution::Resolved(rules) => rules,
            Resolution::FallbackUsed { rules, .. } => rules,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::FallbackUsed { .. })
    }
}

/// Immutable mapping from normalized identifiers to rule sets
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    entries: BTreeMap<String, Arc<RuleSet>>,
    default: Arc<RuleSet>,
}

impl RuleRegistry {
    pub fn builder() -> RuleRegistryBuilder {
        RuleRegistryBuilder::default()
    }

    /// Registry with the embedded English, Chinese and Tibetan rules
    pub fn builtin() -> Result<Self> {
        Self::builder().with_builtins()?.build()
    }

    /// Resolve an identifier, falling back to the default rule set
    ///
    /// Matching ignores case and surrounding whitespace.
    pub fn resolve(&self, identifier: &str) -> Resolution {
        match self.get(identifier) {
            Some(rules) => Resolution::Resolved(Arc::clone(rules)),
            None => Resolution::FallbackUsed {
                rules: Arc::clone(&self.default),
                requested: identifier.to_string(),
            },
        }
    }

    /// Strict lookup without fallback
    pub fn get(&self, identifier: &str) -> Option<&Arc<RuleSet>> {
        self.entries.get(&normalize(identifier))
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.get(identifier).is_some()
    }

    pub fn default_rules(&self) -> &Arc<RuleSet> {
        &self.default
    }

    /// All registered identifiers, sorted
    pub fn list_supported_identifiers(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Distinct rule sets, ordered by code
    pub fn rule_sets(&self) -> Vec<Arc<RuleSet>> {
        let mut unique: BTreeMap<&str, &Arc<RuleSet>> = BTreeMap::new();
        for rules in self.entries.values() {
            unique.entry(rules.code()).or_insert(rules);
        }
        unique.into_values().cloned().collect()
    }
}

fn normalize(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}

/// Collects rule sets before freezing them into a [`RuleRegistry`]
#[derive(Debug, Default)]
pub struct RuleRegistryBuilder {
    entries: BTreeMap<String, Arc<RuleSet>>,
    default_language: Option<String>,
}

impl RuleRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `rules` under its code, its name and `aliases`
    ///
    /// Later registrations replace earlier ones for the same identifier.
    pub fn register<I, S>(mut self, rules: RuleSet, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = Arc::new(rules);
        let identifiers = [rules.code().to_string(), rules.name().to_string()]
            .into_iter()
            .chain(aliases.into_iter().map(|a| a.as_ref().to_string()));

        for identifier in identifiers {
            let key = normalize(&identifier);
            if key.is_empty() {
                continue;
            }
            if let Some(previous) = self.entries.insert(key.clone(), Arc::clone(&rules)) {
                if previous.code() != rules.code() {
                    tracing::debug!(
                        identifier = %key,
                        previous = previous.code(),
                        replacement = rules.code(),
                        "language identifier re-registered"
                    );
                }
            }
        }
        self
    }

    /// Register the rule set described by a parsed rule file
    pub fn register_config(self, config: &RuleConfig) -> Result<Self> {
        let rules = config.to_rule_set()?;
        Ok(self.register(rules, &config.metadata.aliases))
    }

    /// Register every embedded language
    pub fn with_builtins(mut self) -> Result<Self> {
        for config in embedded_configs()? {
            self = self.register_config(&config)?;
        }
        Ok(self)
    }

    /// Identifier of the fallback rule set (defaults to [`DEFAULT_LANGUAGE`])
    pub fn default_language(mut self, identifier: impl Into<String>) -> Self {
        self.default_language = Some(identifier.into());
        self
    }

    pub fn build(self) -> Result<RuleRegistry> {
        let default_id = self
            .default_language
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let default = self
            .entries
            .get(&normalize(&default_id))
            .cloned()
            .ok_or_else(|| {
                CoreError::configuration(format!(
                    "default language '{default_id}' is not registered"
                ))
            })?;

        Ok(RuleRegistry {
            entries: self.entries,
            default,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> RuleRegistry {
        RuleRegistry::builtin().expect("embedded configs should load")
    }

    #[test]
    fn test_embedded_configs_load() {
        let configs = embedded_configs().unwrap();
        let codes: Vec<&str> = configs.iter().map(|c| c.metadata.code.as_str()).collect();
        assert_eq!(codes, vec!["en", "zh", "bo"]);
    }

    #[test]
    fn test_resolve_aliases_share_instance() {
        let registry = registry();
        for (a, b) in [("bo", "tibetan"), ("bod", "bo"), ("zh", "lzh"), ("cmn", "chinese")] {
            let left = registry.resolve(a).into_rules();
            let right = registry.resolve(b).into_rules();
            assert!(Arc::ptr_eq(&left, &right), "{a} and {b} should alias");
        }
    }

    #[test]
    fn test_resolve_is_case_and_whitespace_insensitive() {
        let registry = registry();
        let resolution = registry.resolve("  TiBeTaN \n");
        assert!(!resolution.is_fallback());
        assert_eq!(resolution.rules().code(), "bo");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let registry = registry();
        match registry.resolve("klingon") {
            Resolution::FallbackUsed { rules, requested } => {
                assert_eq!(rules.code(), "en");
                assert_eq!(requested, "klingon");
            }
            Resolution::Resolved(_) => panic!("Expected fallback"),
        }
        assert!(registry.resolve("").is_fallback());
        assert!(registry.get("klingon").is_none());
    }

    #[test]
    fn test_list_supported_identifiers_sorted() {
        let registry = registry();
        let ids = registry.list_supported_identifiers();
        assert_eq!(
            ids,
            vec![
                "bo", "bod", "chinese", "cmn", "en", "eng", "english", "lzh", "tibetan", "zh",
                "zho"
            ]
        );
    }

    #[test]
    fn test_rule_sets_are_distinct() {
        let codes: Vec<String> = registry()
            .rule_sets()
            .iter()
            .map(|r| r.code().to_string())
            .collect();
        assert_eq!(codes, vec!["bo", "en", "zh"]);
    }

    #[test]
    fn test_builtin_delimiters() {
        let registry = registry();
        assert_eq!(
            registry.resolve("en").rules().delimiters(),
            &[".", "!", "?", ";", ":"]
        );
        assert_eq!(
            registry.resolve("zh").rules().delimiters(),
            &["。", "！", "？", "；", "、"]
        );
        let tibetan = registry.resolve("bo").into_rules();
        assert_eq!(tibetan.delimiters(), &["།", "༔", "༎"]);
        assert_eq!(tibetan.templates().len(), 2);
    }

    #[test]
    fn test_custom_registry() {
        let rules = RuleSet::new("xx", "test", ["|"], vec![]).unwrap();
        let registry = RuleRegistry::builder()
            .register(rules, ["x-test"])
            .default_language("xx")
            .build()
            .unwrap();
        assert_eq!(registry.resolve("X-TEST").rules().code(), "xx");
        assert_eq!(registry.resolve("missing").rules().code(), "xx");
    }

    #[test]
    fn test_missing_default_rejected() {
        let rules = RuleSet::new("xx", "test", ["|"], vec![]).unwrap();
        let err = RuleRegistry::builder()
            .register(rules, Vec::<String>::new())
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("default language 'en'"));
    }

    #[test]
    fn test_later_registration_overrides() {
        let custom = RuleSet::new("en", "english", ["."], vec![]).unwrap();
        let registry = RuleRegistry::builder()
            .with_builtins()
            .unwrap()
            .register(custom, ["eng"])
            .build()
            .unwrap();
        assert_eq!(registry.resolve("english").rules().delimiters().len(), 1);
        assert_eq!(registry.default_rules().delimiters().len(), 1);
    }
}
