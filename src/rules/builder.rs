//! Base + profile-override ruleset builder
//!
//! The base taxonomy covers every product; a profile is a partial ruleset
//! that inserts, replaces, or clears keyword groups for one product type.
//! Merging is a pure function over value types: the base is never mutated
//! and the result shares no state with it.

use tracing::info;

use super::ProfileLibrary;
use super::RuleSet;

/// Build the effective ruleset for a product profile.
///
/// An unknown profile name is a no-op (the base is returned unchanged), not
/// an error. Merge semantics per feature/sub-topic path present in the
/// override:
/// - absent in the base: inserted, preserving override order;
/// - present, non-empty keyword list: replaces the base list;
/// - present, empty keyword list: clears the base list, so the sub-topic
///   matches nothing for this product type.
pub fn build_ruleset(base: &RuleSet, profiles: &ProfileLibrary, profile_name: &str) -> RuleSet {
    let Some(overrides) = profiles.get(profile_name) else {
        info!(
            "No profile named '{}' found; using base rules only",
            profile_name
        );
        return base.clone();
    };

    info!("Applying profile '{}' on top of base rules", profile_name);
    merge(base, overrides)
}

/// Deep-merge `overrides` onto a copy of `base`. Idempotent:
/// `merge(merge(base, o), o) == merge(base, o)`.
fn merge(base: &RuleSet, overrides: &RuleSet) -> RuleSet {
    let mut merged = base.clone();

    for feature_override in &overrides.features {
        match merged
            .features
            .iter_mut()
            .find(|f| f.name == feature_override.name)
        {
            None => merged.features.push(feature_override.clone()),
            Some(feature) => {
                for sub_override in &feature_override.sub_topics {
                    match feature
                        .sub_topics
                        .iter_mut()
                        .find(|s| s.name == sub_override.name)
                    {
                        None => feature.sub_topics.push(sub_override.clone()),
                        Some(sub_topic) => {
                            // Replacement covers the empty case: an empty
                            // override list clears the base keywords.
                            sub_topic.keywords = sub_override.keywords.clone();
                        }
                    }
                }
            }
        }
    }

    merged
}
