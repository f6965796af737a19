use crate::model::EnvironmentRules;
use std::collections::BTreeMap;

/// Read-only policy document: environment name -> governance rule parameters.
///
/// Built once by the loading layer and then only ever borrowed; evaluation
/// never mutates it, so it can be shared across threads without locking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyDocument {
    environments: BTreeMap<String, EnvironmentRules>,
}

impl PolicyDocument {
    pub fn new(environments: BTreeMap<String, EnvironmentRules>) -> Self {
        Self { environments }
    }

    /// Exact string-key lookup. No wildcard or hierarchical fallback: a miss
    /// means the whole request is denied as an unknown environment.
    pub fn resolve_environment(&self, name: &str) -> Option<&EnvironmentRules> {
        self.environments.get(name)
    }

    pub fn environment_names(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }
}
