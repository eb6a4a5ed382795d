//! Built-in product profiles
//!
//! A profile only lists what differs from the base taxonomy. An empty
//! keyword list clears the matching base sub-topic: the concept does not
//! apply to that product type.

use super::Feature;
use super::ProfileLibrary;
use super::RuleSet;
use super::SubTopic;

fn sub(name: &str, keywords: &[&str]) -> SubTopic {
    SubTopic::new(name, keywords.iter().map(ToString::to_string).collect())
}

/// The profiles shipped with the crate
pub fn default_profiles() -> ProfileLibrary {
    ProfileLibrary::new(vec![
        // Selecting this profile applies no overrides at all.
        ("默认基础画像".to_string(), RuleSet::default()),
        (
            "霓虹笔专属画像".to_string(),
            RuleSet::new(vec![Feature::new(
                "墨水特性",
                vec![
                    // For neon pens, "too bright" is the highest praise.
                    sub(
                        "正面-达到或超越期望的亮度",
                        &["too bright", "insanely bright", "blindingly bright"],
                    ),
                    // Oversaturation is not a valid complaint for this type.
                    sub("负面-荧光/霓虹效果过饱和", &[]),
                ],
            )]),
        ),
        (
            "香味笔专属画像".to_string(),
            RuleSet::new(vec![Feature::new(
                "墨水特性",
                vec![
                    sub(
                        "正面-香味符合描述",
                        &["smells good", "great scent", "smells like real fruit"],
                    ),
                    sub("负面-香味难闻/太浓", &["bad smell", "chemical smell"]),
                    sub(
                        "负面-没有香味",
                        &["no smell", "can't smell anything", "no scent"],
                    ),
                ],
            )]),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::build_ruleset;
    use crate::rules::taxonomy::base_ruleset;

    #[test]
    fn test_profile_names() {
        let profiles = default_profiles();
        let names: Vec<&str> = profiles.names().collect();
        assert_eq!(
            names,
            vec!["默认基础画像", "霓虹笔专属画像", "香味笔专属画像"]
        );
    }

    #[test]
    fn test_neon_profile_clears_oversaturation() {
        let built = build_ruleset(&base_ruleset(), &default_profiles(), "霓虹笔专属画像");
        let ink = built.feature("墨水特性").unwrap();
        let cleared = ink
            .sub_topics
            .iter()
            .find(|s| s.name == "负面-荧光/霓虹效果过饱和")
            .unwrap();
        assert!(cleared.keywords.is_empty());
        assert!(ink
            .sub_topics
            .iter()
            .any(|s| s.name == "正面-达到或超越期望的亮度"));
    }

    #[test]
    fn test_empty_profile_changes_nothing() {
        let base = base_ruleset();
        let built = build_ruleset(&base, &default_profiles(), "默认基础画像");
        assert_eq!(built, base);
    }
}
