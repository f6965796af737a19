use relguard_domain::model::EnvironmentRules;
use relguard_domain::store::PolicyDocument;
use serde::Deserialize;
use std::collections::BTreeMap;

/// On-disk policy shape: `policy.environments.<name>.rules`.
///
/// Permissive about extra keys so policies can carry annotations (owners,
/// descriptions) without breaking the loader; the structural skeleton itself
/// is mandatory.
#[derive(Debug, Deserialize)]
pub(crate) struct PolicyFileV1 {
    pub policy: PolicySection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PolicySection {
    pub environments: BTreeMap<String, EnvironmentEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EnvironmentEntry {
    pub rules: EnvironmentRules,
}

impl PolicyFileV1 {
    pub fn into_document(self) -> PolicyDocument {
        let environments = self
            .policy
            .environments
            .into_iter()
            .map(|(name, entry)| (name, entry.rules))
            .collect();
        PolicyDocument::new(environments)
    }
}
