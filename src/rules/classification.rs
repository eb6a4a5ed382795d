//! Built-in classification rule tables
//!
//! One ordered table per dimension (role, gender, age group, usage,
//! motivation). The first category whose pattern matches wins, so broader
//! categories are listed after more specific ones.

use super::CategoryRule;
use super::ClassificationRuleSet;
use crate::config::CategoryMapping;

fn rule(label: &str, keywords: &[&str]) -> CategoryRule {
    CategoryRule::new(label, keywords.iter().map(ToString::to_string).collect())
}

/// Label used when a review gives no role/usage/motivation signal
pub const DEFAULT_UNSPECIFIED: &str = "未明确";

/// Label used when gender cannot be inferred
pub const DEFAULT_UNKNOWN_GENDER: &str = "未知性别";

/// Label used when no age-group keyword appears
pub const DEFAULT_ADULT: &str = "成人";

/// Label used for products outside the configured category mapping
pub const DEFAULT_PRODUCT_CATEGORY: &str = "Other Series";

/// User role rules ("User_Role")
pub fn user_role_rules() -> ClassificationRuleSet {
    ClassificationRuleSet::new(
        "User_Role",
        vec![
            rule(
                "专业艺术工作者 (Professional Artist)",
                &[
                    "professional",
                    "pro artist",
                    "artist",
                    "illustrator",
                    "designer",
                    "comic artist",
                    "manga artist",
                    "architect",
                    "studio",
                    "commission",
                    "client work",
                    "freelance",
                ],
            ),
            rule(
                "学生 (Student)",
                &[
                    "student",
                    "school",
                    "college",
                    "university",
                    "art student",
                    "design student",
                    "class",
                    "notes",
                    "studying",
                    "assignment",
                    "project",
                    "textbook",
                ],
            ),
            rule(
                "教师 (Teacher)",
                &[
                    "teacher",
                    "educator",
                    "professor",
                    "art teacher",
                    "instructor",
                    "workshop",
                    "teaching",
                    "grading papers",
                ],
            ),
            rule(
                "父母 (Parent)",
                &[
                    "parent",
                    "mom",
                    "dad",
                    "mother",
                    "father",
                    "for my kids",
                    "for my son",
                    "for my daughter",
                    "family craft",
                    "homeschooling",
                ],
            ),
            rule(
                "手账爱好者 (Journaler/Planner)",
                &[
                    "journaler",
                    "planner",
                    "bullet journal",
                    "bujo",
                    "scrapbooker",
                    "diary",
                    "journaling",
                    "scrapbooking",
                ],
            ),
            rule(
                "业余艺术爱好者 (Hobbyist)",
                &[
                    "hobbyist",
                    "amateur artist",
                    "for fun",
                    "relaxing",
                    "as a hobby",
                    "passion project",
                    "in my spare time",
                    "self-taught",
                ],
            ),
            rule(
                "文化创意从业者 (Creative Professional)",
                &[
                    "creative professional",
                    "workshop host",
                    "cultural event",
                    "artisan",
                    "craft market",
                    "etsy seller",
                    "small business",
                    "content creator",
                ],
            ),
            rule(
                "特殊领域从业者 (Specialist)",
                &[
                    "special effects",
                    "sfx makeup",
                    "model maker",
                    "miniature painter",
                    "restorer",
                    "conservation",
                    "tattoo artist",
                    "animator",
                ],
            ),
            rule(
                "初学者 (Beginner)",
                &[
                    "beginner",
                    "starter",
                    "new to",
                    "learning",
                    "just starting",
                    "first set",
                    "noob",
                    "getting started",
                    "beginner friendly",
                ],
            ),
            rule(
                "商务/办公人士 (Business/Office Professional)",
                &[
                    "office",
                    "work",
                    "business",
                    "professional",
                    "presentation",
                    "meeting",
                    "notes",
                    "mind map",
                    "whiteboard",
                    "corporate",
                    "coworker",
                    "report",
                    "document",
                    "organization",
                    "organizing",
                    "at my desk",
                ],
            ),
            rule(
                "艺术疗愈/健康追求者 (Art Therapy/Wellness Seeker)",
                &[
                    "therapy",
                    "therapeutic",
                    "relax",
                    "relaxation",
                    "calming",
                    "mindfulness",
                    "anxiety",
                    "stress relief",
                    "zen",
                    "unwind",
                    "mental health",
                    "escape",
                    "self-care",
                    "peaceful",
                    "meditative",
                ],
            ),
            rule(
                "机构/批量采购者 (Institutional/Bulk Purchaser)",
                &[
                    "for my classroom",
                    "for the office",
                    "bulk order",
                    "school supplies",
                    "church group",
                    "community center",
                    "our team",
                    "stock up",
                    "office supply",
                    "large quantity",
                    "donation",
                    "for the class",
                ],
            ),
        ],
        DEFAULT_UNSPECIFIED,
    )
}

/// Gender rules ("Gender")
pub fn gender_rules() -> ClassificationRuleSet {
    ClassificationRuleSet::new(
        "Gender",
        vec![
            rule(
                "女性 (Female)",
                &[
                    "woman",
                    "women",
                    "girl",
                    "girls",
                    "she",
                    "her",
                    "hers",
                    "wife",
                    "mother",
                    "mom",
                    "daughter",
                    "girlfriend",
                    "female",
                    "sister",
                    "aunt",
                    "grandmother",
                    "niece",
                    "lady",
                    "ladies",
                ],
            ),
            rule(
                "男性 (Male)",
                &[
                    "man",
                    "men",
                    "boy",
                    "boys",
                    "he",
                    "his",
                    "him",
                    "husband",
                    "father",
                    "dad",
                    "son",
                    "boyfriend",
                    "male",
                    "brother",
                    "uncle",
                    "grandfather",
                    "nephew",
                    "gentleman",
                ],
            ),
        ],
        DEFAULT_UNKNOWN_GENDER,
    )
}

/// Age-group rules ("Age_Group")
pub fn age_group_rules() -> ClassificationRuleSet {
    ClassificationRuleSet::new(
        "Age_Group",
        vec![
            rule(
                "儿童 (Child)",
                &[
                    "kid",
                    "kids",
                    "child",
                    "children",
                    "toddler",
                    "baby",
                    "preschooler",
                    "little one",
                    "for my son",
                    "for my daughter",
                    "grandson",
                    "granddaughter",
                ],
            ),
            rule(
                "青少年 (Teenager)",
                &[
                    "teen",
                    "teenager",
                    "adolescent",
                    "youth",
                    "high school",
                    "college student",
                    "university student",
                ],
            ),
            rule(
                "老年人 (Senior)",
                &[
                    "senior",
                    "elderly",
                    "retired",
                    "grandparent",
                    "grandfather",
                    "grandmother",
                    "golden years",
                ],
            ),
        ],
        DEFAULT_ADULT,
    )
}

/// Usage rules ("Usage")
pub fn usage_rules() -> ClassificationRuleSet {
    ClassificationRuleSet::new(
        "Usage",
        vec![
            rule(
                "绘画创作 (Art Creation)",
                &[
                    "art",
                    "drawing",
                    "illustration",
                    "manga",
                    "comic",
                    "landscape sketch",
                    "urban sketching",
                    "coloring book",
                    "artwork",
                    "painting",
                    "portrait",
                    "character design",
                ],
            ),
            rule(
                "设计工作 (Design Work)",
                &[
                    "design",
                    "architecture",
                    "industrial design",
                    "fashion design",
                    "concept art",
                    "floor plan",
                    "blueprint",
                    "storyboard",
                    "graphic design",
                ],
            ),
            rule(
                "教学与学习 (Teaching & Learning)",
                &[
                    "art class",
                    "craft class",
                    "workshop",
                    "tutorial",
                    "teaching",
                    "art school",
                    "student work",
                    "demonstration",
                    "learning to draw",
                ],
            ),
            rule(
                "手账装饰 (Journal & Planner Decoration)",
                &[
                    "journal",
                    "planner",
                    "bujo",
                    "diary",
                    "journaling",
                    "scrapbook",
                    "scrapbooking",
                    "decorating my planner",
                ],
            ),
            rule(
                "日常记录与组织 (Daily Organization)",
                &[
                    "calendar",
                    "labeling",
                    "organizing",
                    "note taking",
                    "annotating",
                    "study notes",
                    "meeting notes",
                    "color coding",
                ],
            ),
            rule(
                "卡片与礼品制作 (Card & Gift Making)",
                &[
                    "card making",
                    "greeting card",
                    "handmade card",
                    "gift tag",
                    "personal touch",
                    "decorating gifts",
                ],
            ),
            rule(
                "儿童涂鸦与早教 (Kids Activities)",
                &[
                    "kids",
                    "children",
                    "toddler",
                    "doodle",
                    "scribble",
                    "early learning",
                    "educational",
                    "kids craft",
                    "family fun",
                ],
            ),
            rule(
                "DIY与手工制作 (DIY & Crafts)",
                &[
                    "diy",
                    "craft",
                    "crafting",
                    "decorating",
                    "glass",
                    "t-shirt",
                    "fabric",
                    "model painting",
                    "miniature painting",
                    "customizing",
                    "rock painting",
                    "mug decoration",
                ],
            ),
            rule(
                "户外与旅行创作 (Outdoor & Travel Art)",
                &[
                    "outdoor",
                    "en plein air",
                    "urban sketching",
                    "travel journal",
                    "traveling",
                    "on the go",
                    "field sketch",
                ],
            ),
            rule(
                "收藏与展示 (Collection & Display)",
                &[
                    "collection",
                    "collector",
                    "limited edition",
                    "collectible set",
                    "display",
                ],
            ),
            rule(
                "文化体验与活动 (Cultural Activities)",
                &[
                    "workshop",
                    "art event",
                    "cultural festival",
                    "live drawing",
                    "art therapy session",
                    "community art",
                ],
            ),
            rule(
                "心理疗愈 (Therapeutic Use)",
                &[
                    "relax",
                    "relaxation",
                    "stress relief",
                    "therapy",
                    "therapeutic",
                    "calming",
                    "mindfulness",
                    "emotional outlet",
                    "doodling",
                    "zen",
                    "wind down",
                ],
            ),
        ],
        DEFAULT_UNSPECIFIED,
    )
}

/// Purchase motivation rules ("Motivation")
pub fn motivation_rules() -> ClassificationRuleSet {
    ClassificationRuleSet::new(
        "Motivation",
        vec![
            rule(
                "专业需求-色彩表现",
                &[
                    "professional",
                    "artist grade",
                    "high quality pigment",
                    "lightfast",
                    "archival",
                    "color accuracy",
                    "blendability",
                    "vibrant colors",
                ],
            ),
            rule(
                "专业需求-性能耐用",
                &[
                    "pro grade",
                    "reliable",
                    "consistent flow",
                    "durable tip",
                    "long lasting",
                    "for work",
                    "serious tool",
                ],
            ),
            rule(
                "基础功能需求",
                &[
                    "basic",
                    "everyday use",
                    "daily use",
                    "for school",
                    "for notes",
                    "functional",
                    "practical",
                    "gets the job done",
                    "all i need",
                ],
            ),
            rule(
                "艺术兴趣驱动",
                &[
                    "hobby",
                    "passion",
                    "creativity",
                    "express myself",
                    "ideas",
                    "for fun",
                    "artistic",
                    "wanted to try",
                    "get back into art",
                ],
            ),
            rule(
                "情感表达",
                &[
                    "express feelings",
                    "handmade card",
                    "personal touch",
                    "gift for",
                    "decorate",
                    "scrapbook",
                    "memory keeping",
                ],
            ),
            rule(
                "品牌信任",
                &[
                    "brand",
                    "reputation",
                    "trusted brand",
                    "well-known",
                    "reliable",
                    "never fails",
                    "go-to brand",
                    "copic",
                    "tombow",
                    "stabilo",
                    "posca",
                    "winsor newton",
                ],
            ),
            rule(
                "性价比驱动",
                &[
                    "value",
                    "price",
                    "affordable",
                    "budget",
                    "deal",
                    "cheap",
                    "good price",
                    "cost effective",
                    "best bang for the buck",
                    "on sale",
                ],
            ),
            rule(
                "创新功能吸引",
                &[
                    "innovative",
                    "new feature",
                    "dual tip",
                    "refillable",
                    "replaceable nib",
                    "unique",
                    "special",
                    "interesting",
                    "different from others",
                    "new technology",
                ],
            ),
            rule(
                "外观设计吸引",
                &[
                    "design",
                    "aesthetic",
                    "beautiful",
                    "looks good",
                    "pretty colors",
                    "minimalist",
                    "stylish",
                    "the look of it",
                    "elegant",
                ],
            ),
            rule(
                "包装与开箱体验吸引",
                &[
                    "packaging",
                    "unboxing experience",
                    "giftable",
                    "nice box",
                    "presentation",
                ],
            ),
            rule(
                "社交驱动-口碑推荐",
                &[
                    "recommendation",
                    "recommended by",
                    "friend",
                    "family",
                    "teacher",
                    "word of mouth",
                    "told me to buy",
                ],
            ),
            rule(
                "社交驱动-媒体影响",
                &[
                    "social media",
                    "tiktok",
                    "instagram",
                    "youtube review",
                    "influencer",
                    "trending",
                    "hype",
                    "popular",
                    "everyone has it",
                    "pinterest",
                ],
            ),
            rule(
                "文化与身份认同",
                &[
                    "culture",
                    "themed set",
                    "limited edition",
                    "collaboration",
                    "artist series",
                    "Japanese",
                    "kawaii",
                    "collectible",
                    "part of my identity",
                ],
            ),
            rule(
                "便携性需求",
                &[
                    "convenient",
                    "portable",
                    "on the go",
                    "easy to carry",
                    "travel set",
                    "compact",
                    "all-in-one",
                ],
            ),
            rule(
                "多功能性需求",
                &[
                    "versatile",
                    "multi-purpose",
                    "many uses",
                    "for different things",
                    "one set for all",
                    "jack of all trades",
                ],
            ),
            rule(
                "礼品需求",
                &[
                    "gift",
                    "present",
                    "for someone",
                    "birthday",
                    "christmas",
                    "holiday",
                    "stocking stuffer",
                    "perfect gift",
                ],
            ),
            rule(
                "特殊场景需求",
                &[
                    "special purpose",
                    "outdoor",
                    "on glass",
                    "fabric marker",
                    "uv resistant",
                    "on black paper",
                    "for rocks",
                    "for wood",
                ],
            ),
            rule(
                "成就感与身份认同",
                &[
                    "achievement",
                    "feel like a pro",
                    "professional",
                    "identity",
                    "high-end",
                    "premium",
                    "top of the line",
                    "an investment",
                    "treat myself",
                ],
            ),
            rule(
                "激发创造力",
                &[
                    "inspiration",
                    "inspire",
                    "creativity",
                    "creative block",
                    "new ideas",
                    "get the juices flowing",
                    "unleash creativity",
                ],
            ),
            rule(
                "缓解压力与情绪调节",
                &[
                    "stress relief",
                    "relaxing",
                    "calming",
                    "therapy",
                    "therapeutic",
                    "mindfulness",
                    "escape",
                    "zone out",
                    "anxious",
                    "anxiety",
                ],
            ),
            rule(
                "满足好奇心",
                &[
                    "curiosity",
                    "try",
                    "try out",
                    "new",
                    "curious about",
                    "wanted to see",
                    "heard about",
                    "first impression",
                ],
            ),
            rule(
                "环保与可持续性",
                &[
                    "eco-friendly",
                    "sustainable",
                    "recycled",
                    "refillable",
                    "non-toxic",
                    "environment",
                    "less waste",
                    "conscientious",
                ],
            ),
            rule(
                "支持特定文化",
                &[
                    "local artist",
                    "local brand",
                    "cultural collaboration",
                    "support local",
                    "national pride",
                ],
            ),
            rule(
                "追随潮流",
                &[
                    "trend",
                    "trending",
                    "hype",
                    "popular",
                    "everyone has it",
                    "fashionable",
                    "in style",
                    "latest",
                ],
            ),
            rule(
                "效率驱动",
                &[
                    "efficient",
                    "efficiency",
                    "quick drying",
                    "fast",
                    "save time",
                    "work faster",
                    "streamline",
                    "slow drying",
                ],
            ),
            rule(
                "学习新技能",
                &[
                    "learn",
                    "learning",
                    "new skill",
                    "improve",
                    "get better",
                    "tutorial",
                    "starter kit",
                    "for beginners",
                ],
            ),
            rule(
                "提升现有技能",
                &[
                    "upgrade",
                    "next level",
                    "challenge myself",
                    "advanced techniques",
                    "better tool",
                    "step up my game",
                ],
            ),
        ],
        DEFAULT_UNSPECIFIED,
    )
}

/// Product-category rules built from the configured product-id mapping.
///
/// The mapping is a plain id → series table; it still runs through the
/// generic classifier so product category behaves like every other
/// dimension.
pub fn product_category_rules(mapping: &[CategoryMapping]) -> ClassificationRuleSet {
    let rules = mapping
        .iter()
        .map(|entry| CategoryRule::new(entry.category.clone(), vec![entry.product_id.clone()]))
        .collect();
    ClassificationRuleSet::new("Product_Category", rules, DEFAULT_PRODUCT_CATEGORY)
}

/// All text-driven dimensions with their default labels, in report order
pub fn default_dimension_rules() -> Vec<ClassificationRuleSet> {
    vec![
        user_role_rules(),
        gender_rules(),
        age_group_rules(),
        usage_rules(),
        motivation_rules(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_tables_are_ordered() {
        let roles = user_role_rules();
        assert_eq!(roles.rules[0].label, "专业艺术工作者 (Professional Artist)");
        assert_eq!(roles.default_label, DEFAULT_UNSPECIFIED);
        assert_eq!(gender_rules().rules.len(), 2);
        assert_eq!(age_group_rules().default_label, DEFAULT_ADULT);
    }

    #[test]
    fn test_product_category_rules_from_mapping() {
        let mapping = vec![
            CategoryMapping {
                product_id: "B07C1BRS5N".to_string(),
                category: "柔色系列".to_string(),
            },
            CategoryMapping {
                product_id: "B08XYZ".to_string(),
                category: "荧光系列".to_string(),
            },
        ];
        let rules = product_category_rules(&mapping);
        assert_eq!(rules.rules.len(), 2);
        assert_eq!(rules.rules[0].label, "柔色系列");
        assert_eq!(rules.default_label, DEFAULT_PRODUCT_CATEGORY);
    }
}
