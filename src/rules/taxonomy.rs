//! Built-in base feature taxonomy
//!
//! The base rules apply to every product; profiles in [`super::profiles`]
//! override them per product type. Feature and sub-topic order matter: they
//! decide sentence-level match priority, so entries are kept as ordered
//! literals rather than maps.

use super::Feature;
use super::RuleSet;
use super::SubTopic;

fn sub(name: &str, keywords: &[&str]) -> SubTopic {
    SubTopic::new(name, keywords.iter().map(ToString::to_string).collect())
}

/// The base keyword taxonomy shared by all product profiles
pub fn base_ruleset() -> RuleSet {
    RuleSet::new(vec![
        // ===== 1. 颜色种类 =====
        Feature::new(
            "颜色种类",
            vec![
                sub(
                    "正面-色彩丰富",
                    &[
                        "many colors",
                        "lot of colors",
                        "plenty of colors",
                        "good range",
                        "great variety",
                        "great selection",
                        "every color",
                        "all the colors",
                        "so many options",
                    ],
                ),
                sub(
                    "负面-色彩单调/反馈",
                    &[
                        "limited range",
                        "not enough colors",
                        "wish for more",
                        "missing colors",
                        "disappointed with selection",
                        "needs more colors",
                    ],
                ),
                sub(
                    "正面-套装/数量选择满意",
                    &[
                        "love the large set",
                        "great number of colors",
                        "perfect amount of colors",
                        "huge set of 72",
                        "full set is amazing",
                        "good assortment",
                    ],
                ),
                sub(
                    "负面-套装/数量选择不满意",
                    &[
                        "wish for a smaller set",
                        "too many colors",
                        "no smaller option",
                        "forced to buy the large set",
                        "have to buy the whole set",
                    ],
                ),
                sub(
                    "正面-色系规划满意",
                    &[
                        "great color selection",
                        "perfect pastel set",
                        "good range of skin tones",
                        "well-curated palette",
                        "love the color story",
                        "beautiful assortment of colors",
                        "has every color I need",
                    ],
                ),
                sub(
                    "负面-色系规划不满",
                    &[
                        "missing key colors",
                        "no true red",
                        "needs more grays",
                        "too many similar colors",
                        "palette is not useful",
                        "wish it had more pastels",
                        "poor color selection",
                        "needs more skin tones",
                    ],
                ),
            ],
        ),
        // ===== 2. 色彩一致性 =====
        Feature::new(
            "色彩一致性",
            vec![
                sub(
                    "正面-颜色准确",
                    &[
                        "true to color",
                        "match the cap",
                        "accurate color",
                        "color accuracy",
                        "exact color",
                        "matches perfectly",
                        "consistent color",
                        "consistency",
                    ],
                ),
                sub(
                    "负面-颜色偏差",
                    &[
                        "inconsistent",
                        "different shade",
                        "not the same",
                        "misleading cap",
                        "cap is wrong",
                        "color is off",
                        "darker than cap",
                        "lighter than cap",
                        "doesn't match",
                        "wrong color",
                    ],
                ),
                sub(
                    "正面-设计-颜色准确 (VS 笔帽)",
                    &[
                        "true to color",
                        "match the cap",
                        "matches the cap perfectly",
                        "cap is a perfect match",
                        "cap is accurate",
                    ],
                ),
                sub(
                    "负面-设计-颜色误导 (VS 笔帽)",
                    &[
                        "misleading cap",
                        "cap is wrong",
                        "cap is a lie",
                        "color doesn't match the barrel",
                        "the cap color is way off",
                        "nothing like the cap",
                    ],
                ),
                sub(
                    "正面-营销-颜色准确(VS 网图)",
                    &[
                        "exactly as advertised",
                        "what you see is what you get",
                        "matches the online photo",
                        "true to the swatch",
                        "photo is accurate",
                    ],
                ),
                sub(
                    "负面-营销-图片误导 (VS 网图)",
                    &[
                        "looks different from the online swatch",
                        "not the color in the picture",
                        "misrepresented color",
                        "photo is misleading",
                        "swatch card is inaccurate",
                    ],
                ),
                sub(
                    "正面-生产-品控(VS 其他笔)",
                    &[
                        "consistent color",
                        "consistency",
                        "no variation between pens",
                        "reliable color",
                        "batch is consistent",
                    ],
                ),
                sub(
                    "负面-生产-品控偏差(VS 其他笔)",
                    &[
                        "inconsistent batch",
                        "color varies from pen to pen",
                        "my new pen is a different shade",
                        "no quality control",
                        "batch variation",
                    ],
                ),
            ],
        ),
        // ===== 3. 色彩饱和度与混合 =====
        Feature::new(
            "色彩饱和度与混合",
            vec![
                sub(
                    "正面-鲜艳/饱和",
                    &[
                        "bright colors",
                        "nice and bright",
                        "beautifully bright",
                        "richly saturated",
                        "perfectly saturated",
                        "deeply saturated",
                        "nice saturation",
                        "vibrant colors",
                        "rich colors",
                        "colors pop",
                    ],
                ),
                sub(
                    "负面-太鲜艳/刺眼",
                    &[
                        "garish colors",
                        "colors are too loud",
                        "too neon",
                        "too bright",
                        "too fluorescent",
                        "overly bright",
                    ],
                ),
                sub(
                    "负面-暗淡/褪色",
                    &[
                        "dull",
                        "faded",
                        "pale",
                        "washed out",
                        "not bright",
                        "too pale",
                        "lackluster",
                        "colors are too dull",
                        "muddy colors",
                        "colors look dirty",
                        "desaturated",
                    ],
                ),
                sub(
                    "正面-易于混合/渐变好",
                    &[
                        "easy to blend",
                        "blends well",
                        "blendable",
                        "effortless blending",
                        "seamless blend",
                        "smooth gradient",
                        "layers nicely",
                        "buildable color",
                        "reactivate with water",
                    ],
                ),
                sub(
                    "负面-混合效果差",
                    &[
                        "difficult to blend",
                        "hard to blend",
                        "doesn't blend",
                        "impossible to blend",
                        "gets muddy",
                        "pills paper",
                        "damages paper",
                        "dries too fast to blend",
                        "lifts ink",
                    ],
                ),
            ],
        ),
        // ===== 4. 色系评价 =====
        Feature::new(
            "色系评价",
            vec![
                sub(
                    "正面-喜欢标准/基础色系",
                    &[
                        "good standard colors",
                        "love the basic set",
                        "has all the primary colors",
                        "classic colors",
                    ],
                ),
                sub(
                    "正面-喜欢鲜艳/饱和色系",
                    &[
                        "love the vibrant colors",
                        "bright colors",
                        "bold colors",
                        "rich colors",
                        "vivid colors",
                        "highly saturated",
                        "nicely saturated",
                        "colors are saturated",
                        "colors pop",
                        "really pop",
                        "makes the colors pop",
                    ],
                ),
                sub(
                    "正面-喜欢粉彩色/柔和系",
                    &[
                        "love the pastel colors",
                        "soft colors",
                        "subtle shades",
                        "mild colors",
                        "macaron colors",
                        "beautiful pastels",
                        "unlike neon",
                        "unlike fluorescent",
                        "non-neon",
                        "not neon",
                        "not bright",
                        "not fluorescent",
                        "muted tones",
                    ],
                ),
                sub(
                    "正面-喜欢复古/怀旧色系",
                    &[
                        "love the vintage colors",
                        "retro palette",
                        "muted tones",
                        "nostalgic colors",
                        "old school colors",
                    ],
                ),
                sub(
                    "正面-喜欢莫兰迪色系",
                    &[
                        "love the morandi colors",
                        "dusty colors",
                        "grayish tones",
                        "muted and elegant",
                        "sophisticated colors",
                    ],
                ),
                sub(
                    "正面-喜欢中性/肤色系",
                    &[
                        "great range of skin tones",
                        "perfect neutral palette",
                        "good beiges",
                        "useful for portraits",
                        "love the skin tones",
                    ],
                ),
                sub(
                    "正面-喜欢大地/自然色系",
                    &[
                        "love the earth tones",
                        "natural colors",
                        "beautiful botanical colors",
                        "forest greens",
                        "desert tones",
                        "ocean blues",
                    ],
                ),
                sub(
                    "正面-喜欢灰色系",
                    &[
                        "love the gray scale",
                        "great set of cool grays",
                        "perfect warm grays",
                        "good neutral grays",
                    ],
                ),
                sub(
                    "正面-喜欢季节/主题色系",
                    &[
                        "beautiful forest colors",
                        "love the ocean tones",
                        "perfect autumn palette",
                        "spring colors set",
                        "nice seasonal set",
                    ],
                ),
                sub(
                    "正面-喜欢霓虹/荧光色系",
                    &[
                        "love the neon colors",
                        "like the bright fluorescent colors",
                        "neon pops",
                        "vibrant neon",
                        "beautiful neon colors",
                    ],
                ),
                sub(
                    "正面-喜欢金属/珠光色系",
                    &[
                        "love the metallic colors",
                        "great metallic effect",
                        "nice metallic sheen",
                        "shiny metal finish",
                        "beautiful chrome finish",
                        "looks like real metal",
                        "love the pearlescent finish",
                        "nice shimmer",
                    ],
                ),
                sub(
                    "负面-色系搭配不佳",
                    &[
                        "palette is ugly",
                        "colors don't go well together",
                        "weird color combination",
                        "unusable colors in set",
                        "poorly curated",
                    ],
                ),
            ],
        ),
        // ===== 5. 笔头表现 =====
        Feature::new(
            "笔头表现",
            vec![
                sub(
                    "正面-双头设计认可",
                    &[
                        "love the dual tip",
                        "like the dual tip",
                        "useful dual tip",
                        "handy dual tip",
                        "versatile design",
                        "great having two tips",
                        "love that it has two sides",
                    ],
                ),
                sub(
                    "负面-双头设计抱怨",
                    &[
                        "useless dual tip",
                        "redundant dual tip",
                        "unnecessary dual tip",
                        "don't need the dual tip",
                        "never use the other side",
                    ],
                ),
                sub(
                    "正面-软头表现好",
                    &[
                        "love the brush tip",
                        "flexible brush",
                        "great brush nib",
                        "smooth brush",
                    ],
                ),
                sub(
                    "负面-软头表现差",
                    &[
                        "brush tip frays",
                        "brush tip split",
                        "mushy brush tip",
                        "brush tip wore out",
                        "inconsistent brush line",
                    ],
                ),
                sub(
                    "正面-细头表现好",
                    &[
                        "love the fine tip",
                        "great for details",
                        "precise fine liner",
                        "crisp fine lines",
                    ],
                ),
                sub(
                    "负面-细头表现差",
                    &[
                        "fine tip is scratchy",
                        "fine tip dried out",
                        "bent the fine tip",
                        "fine tip broke",
                        "inconsistent fine line",
                    ],
                ),
                sub(
                    "正面-凿头表现好",
                    &[
                        "chisel tip is great",
                        "good for highlighting",
                        "sharp chisel edge",
                    ],
                ),
                sub(
                    "负面-凿头表现差",
                    &[
                        "chisel tip is too broad",
                        "chisel tip wore down",
                        "dull chisel tip",
                    ],
                ),
                sub(
                    "正面-圆头表现好",
                    &[
                        "bullet tip is sturdy",
                        "consistent bullet nib",
                        "good for writing",
                    ],
                ),
                sub(
                    "负面-圆头表现差",
                    &["bullet tip skips", "bullet nib is dry", "wobbly bullet tip"],
                ),
                sub(
                    "正面-弹性好/软硬适中",
                    &[
                        "flexible",
                        "great flexibility",
                        "nice spring",
                        "good snap",
                        "bouncy tip",
                        "soft brush",
                    ],
                ),
                sub(
                    "负面-过软/过硬/无弹性",
                    &[
                        "too stiff",
                        "too firm",
                        "too soft",
                        "no flexibility",
                        "mushy",
                        "hard to control flex",
                    ],
                ),
                sub(
                    "正面-笔尖可替换",
                    &[
                        "replaceable nibs",
                        "can replace the tips",
                        "interchangeable tips",
                        "love the replacement nibs",
                    ],
                ),
                sub(
                    "负面-笔尖不可替换",
                    &[
                        "wish the tips were replaceable",
                        "can't replace the nib",
                        "no replacement nibs",
                    ],
                ),
                sub(
                    "正面-软头(Brush)-粗细变化好",
                    &[
                        "good line variation",
                        "can make thick and thin lines",
                        "great control over stroke width",
                        "responsive brush",
                    ],
                ),
                sub(
                    "负面-软头(Brush)-粗细难控",
                    &[
                        "hard to get a thin line",
                        "only makes thick strokes",
                        "inconsistent line width",
                        "no line variation",
                    ],
                ),
                sub(
                    "正面-细头(Fine)-粗细适合细节",
                    &[
                        "perfect for details",
                        "love the 0.4mm fine tip",
                        "thin enough for writing",
                        "great for fine lines",
                        "super fine point",
                    ],
                ),
                sub(
                    "负面-细头(Fine)-粗细不合适",
                    &[
                        "too thick for a fine liner",
                        "not a true 0.3mm",
                        "wish it was thinner",
                        "still too broad for small spaces",
                    ],
                ),
                sub(
                    "正面-凿头(Chisel)-宽度合适",
                    &[
                        "perfect width for highlighting",
                        "good broad edge",
                        "nice thick lines for headers",
                    ],
                ),
                sub(
                    "负面-凿头(Chisel)-宽度不合适",
                    &[
                        "too wide for my bible",
                        "too narrow for a highlighter",
                        "chisel tip is too thick",
                    ],
                ),
                sub(
                    "正面-圆头(Bullet)-粗细均匀",
                    &[
                        "nice medium point",
                        "consistent line width",
                        "good for coloring",
                        "reliable bullet tip",
                    ],
                ),
                sub(
                    "负面-圆头(Bullet)-粗细问题",
                    &[
                        "bullet tip is too bold",
                        "not a medium point as advertised",
                    ],
                ),
            ],
        ),
        // ===== 6. 笔头耐用性 =====
        Feature::new(
            "笔头耐用性",
            vec![
                sub(
                    "正面-坚固/保形",
                    &[
                        "durable tip",
                        "sturdy",
                        "robust",
                        "long lasting tip",
                        "heavy duty",
                        "resilient",
                        "holds up well",
                        "retains shape",
                        "holds its point",
                        "keeps its point",
                        "point stays sharp",
                        "doesn't get mushy",
                        "doesn't go flat",
                        "doesn't fray",
                        "no fraying",
                        "no splitting",
                        "resists fraying",
                    ],
                ),
                sub(
                    "负面-磨损/分叉",
                    &[
                        "fray",
                        "fraying",
                        "frayed tip",
                        "split",
                        "splitting",
                        "split nib",
                        "wear out",
                        "wear down",
                        "wore out fast",
                        "tip wear",
                        "fell apart",
                        "disintegrated",
                        "unraveled",
                        "tip became fuzzy",
                        "fibers came apart",
                    ],
                ),
                sub(
                    "负面-形变/软化",
                    &[
                        "gets mushy",
                        "too soft",
                        "tip softened",
                        "spongy tip",
                        "loses its point",
                        "lost its fine point",
                        "point went dull",
                        "no longer sharp",
                        "deformed",
                        "lose its shape",
                        "went flat",
                        "lost its snap",
                        "doesn't spring back",
                    ],
                ),
                sub(
                    "负面-意外损坏",
                    &[
                        "bent tip",
                        "breaks easily",
                        "snapped",
                        "snapped off",
                        "cracked tip",
                        "chipped tip",
                        "broke",
                        "broken",
                        "damaged tip",
                        "tip fell out",
                        "pushed the tip in",
                        "tip receded",
                    ],
                ),
                sub(
                    "负面-寿命不匹配",
                    &[
                        "tip wore out before ink ran out",
                        "felt tip died before the ink",
                        "plenty of ink left but tip is useless",
                        "tip dried out but pen is full",
                        "nib is gone but still has ink",
                    ],
                ),
            ],
        ),
        // ===== 7. 流畅性 =====
        Feature::new(
            "流畅性",
            vec![
                sub(
                    "正面-书写流畅",
                    &[
                        "smooth",
                        "smoothness",
                        "glide",
                        "flow",
                        "consistent ink",
                        "juicy",
                        "wet",
                        "writes well",
                        "no skipping",
                    ],
                ),
                sub(
                    "负面-干涩/刮纸/断墨",
                    &[
                        "scratchy",
                        "dry",
                        "skip",
                        "skipping",
                        "hard start",
                        "dried up",
                        "inconsistent flow",
                        "stops writing",
                    ],
                ),
                sub(
                    "负面-出墨过多/漏墨",
                    &["blotchy", "too much ink", "too wet", "leaks"],
                ),
                sub(
                    "正面-防渗透/防鬼影",
                    &[
                        "no bleed",
                        "not bleed",
                        "doesn't bleed",
                        "minimal bleed",
                        "no ghosting",
                        "zero ghosting",
                    ],
                ),
                sub(
                    "负面-渗透/鬼影问题",
                    &[
                        "bleed",
                        "ghost",
                        "bleed-through",
                        "ghosting",
                        "show-through",
                        "bleeds through",
                        "ghosts badly",
                        "feathering",
                    ],
                ),
            ],
        ),
        // ===== 8. 墨水特性 =====
        Feature::new(
            "墨水特性",
            vec![
                sub(
                    "正面-干燥快/防涂抹",
                    &[
                        "quick dry",
                        "fast dry",
                        "dries quickly",
                        "no smear",
                        "no smudge",
                        "smear proof",
                        "smudge proof",
                        "good for lefties",
                    ],
                ),
                sub(
                    "负面-干燥慢/易涂抹",
                    &[
                        "smear",
                        "smudge",
                        "smears easily",
                        "smudges",
                        "takes forever to dry",
                        "not for left-handed",
                    ],
                ),
                sub(
                    "正面-环保/安全/无味",
                    &[
                        "non-toxic",
                        "acid-free",
                        "safe for kids",
                        "archival",
                        "no smell",
                        "odorless",
                        "low odor",
                    ],
                ),
                sub(
                    "负面-气味难闻",
                    &[
                        "odor",
                        "smell",
                        "fumes",
                        "chemical smell",
                        "strong smell",
                        "toxic smell",
                        "bad smell",
                    ],
                ),
                sub(
                    "正面-持久/防水",
                    &[
                        "waterproof",
                        "water resistant",
                        "fade proof",
                        "fade resistant",
                        "lightfast",
                        "permanent",
                        "long lasting ink",
                    ],
                ),
                sub(
                    "负面-易褪色/不防水",
                    &[
                        "not permanent",
                        "fades quickly",
                        "washes away",
                        "not waterproof",
                    ],
                ),
                sub(
                    "正面-续航长",
                    &[
                        "longevity",
                        "last long",
                        "lasted a long time",
                        "plenty of ink",
                    ],
                ),
                sub(
                    "负面-消耗快",
                    &[
                        "run out",
                        "run dry",
                        "dries out",
                        "died quickly",
                        "empty fast",
                        "no ink",
                        "used up too fast",
                    ],
                ),
                sub(
                    "正面-金属效果好",
                    &[
                        "great metallic effect",
                        "nice metallic sheen",
                        "shiny metal finish",
                        "strong metallic look",
                        "looks like real metal",
                        "beautiful chrome finish",
                        "very reflective",
                    ],
                ),
                sub(
                    "负面-金属效果差",
                    &[
                        "dull metallic",
                        "not shiny",
                        "no metallic effect",
                        "looks flat",
                        "weak sheen",
                        "not reflective",
                    ],
                ),
                sub(
                    "正面-闪光效果好",
                    &[
                        "lots of glitter",
                        "beautiful shimmer",
                        "sparkly",
                        "glitter is vibrant",
                        "nice pearlescent effect",
                        "very glittery",
                        "good sparkle",
                    ],
                ),
                sub(
                    "负面-闪光效果差",
                    &[
                        "not enough glitter",
                        "no shimmer",
                        "glitter falls off",
                        "dull sparkle",
                        "barely any glitter",
                        "messy glitter",
                    ],
                ),
                sub(
                    "正面-荧光/霓虹效果好",
                    &[
                        "neon pops",
                        "very bright neon",
                        "glows under blacklight",
                        "super fluorescent",
                        "vibrant neon",
                        "glows nicely",
                    ],
                ),
                sub(
                    "负面-荧光/霓虹效果淡",
                    &[
                        "neon is dull",
                        "not very bright",
                        "doesn't glow",
                        "not a true neon color",
                        "disappointing neon",
                    ],
                ),
                sub(
                    "负面-荧光/霓虹效果过饱和",
                    &["too neon", "too bright", "too fluorescent", "too neon/bright"],
                ),
                sub(
                    "正面-变色效果好",
                    &[
                        "love the color change",
                        "chameleon effect is stunning",
                        "shifts colors beautifully",
                        "works in the sun",
                        "heat sensitive works",
                    ],
                ),
                sub(
                    "负面-变色效果差",
                    &[
                        "doesn't change color",
                        "color shift is weak",
                        "barely changes",
                        "no chameleon effect",
                    ],
                ),
                sub(
                    "正面-夜光效果好",
                    &[
                        "glows brightly in the dark",
                        "long lasting glow",
                        "charges quickly",
                        "very luminous",
                    ],
                ),
                sub(
                    "负面-夜光效果差",
                    &[
                        "doesn't glow",
                        "glow is weak",
                        "fades too fast",
                        "barely glows",
                    ],
                ),
                sub(
                    "正面-香味好闻",
                    &[
                        "smells great",
                        "love the scent",
                        "nice fragrance",
                        "fun scents",
                        "smells like fruit",
                    ],
                ),
                sub(
                    "负面-香味难闻/太浓",
                    &[
                        "smell is too strong",
                        "bad smell",
                        "doesn't smell like anything",
                        "chemical smell",
                        "artificial scent",
                    ],
                ),
                sub(
                    "正面-可擦除效果好",
                    &[
                        "erasable",
                        "erases cleanly",
                        "erases completely",
                        "no ghosting after erasing",
                        "frixion works well",
                    ],
                ),
                sub(
                    "负面-可擦效果差",
                    &[
                        "doesn't erase",
                        "leaves a stain",
                        "smears when erased",
                        "damages paper when erasing",
                        "hard to erase",
                    ],
                ),
            ],
        ),
        // ===== 9. 笔身与易用性 =====
        Feature::new(
            "笔身与易用性",
            vec![
                sub(
                    "正面-材质/做工好",
                    &[
                        "durable body",
                        "sturdy",
                        "well-made",
                        "solid",
                        "quality feel",
                        "feels premium",
                    ],
                ),
                sub(
                    "负面-材质/做工差",
                    &[
                        "feels cheap",
                        "flimsy",
                        "crack",
                        "break",
                        "cheap plastic",
                        "broke when dropped",
                    ],
                ),
                sub(
                    "正面-握持舒适",
                    &[
                        "comfortable",
                        "comfort",
                        "ergonomic",
                        "nice to hold",
                        "well-balanced",
                        "good grip",
                        "feels good in hand",
                    ],
                ),
                sub(
                    "负面-握持不适",
                    &[
                        "uncomfortable",
                        "awkward",
                        "fatigue",
                        "cramp",
                        "hurts hand",
                        "too thick",
                        "too thin",
                        "slippery",
                    ],
                ),
                sub(
                    "正面-笔帽体验好",
                    &[
                        "cap posts well",
                        "secure fit",
                        "airtight",
                        "cap clicks",
                        "easy to open cap",
                    ],
                ),
                sub(
                    "负面-笔帽体验差",
                    &[
                        "hard to open cap",
                        "loose cap",
                        "cap falls off",
                        "cap doesn't stay on",
                        "cracked cap",
                        "cap broke",
                    ],
                ),
                sub(
                    "正面-易于使用/便携",
                    &[
                        "easy to use",
                        "convenient",
                        "handy",
                        "intuitive",
                        "portable",
                        "travel",
                        "on the go",
                        "compact",
                    ],
                ),
            ],
        ),
        // ===== 10. 绘画表现 =====
        Feature::new(
            "绘画表现",
            vec![
                sub(
                    "正面-线条表现好/可控",
                    &[
                        "good control",
                        "controllable lines",
                        "great line variation",
                        "crisp lines",
                        "consistent lines",
                        "clean lines",
                        "no skipping",
                        "sharp lines",
                        "great for fine details",
                    ],
                ),
                sub(
                    "负面-线条表现差/难控",
                    &[
                        "hard to control",
                        "inconsistent line",
                        "uncontrollable",
                        "not for details",
                        "wobbly lines",
                        "shaky lines",
                        "broken line",
                    ],
                ),
                sub(
                    "正面-覆盖力好/不透明",
                    &[
                        "opaque",
                        "good coverage",
                        "covers well",
                        "one coat",
                        "hides underlying color",
                        "works on dark paper",
                        "great opacity",
                    ],
                ),
                sub(
                    "负面-过于透明/覆盖力差",
                    &[
                        "not opaque",
                        "too sheer",
                        "doesn't cover",
                        "needs multiple coats",
                        "transparent",
                        "see through",
                    ],
                ),
                sub(
                    "正面-涂色均匀",
                    &[
                        "even application",
                        "smooth application",
                        "no streaks",
                        "self-leveling",
                        "consistent color",
                        "no streaking",
                    ],
                ),
                sub(
                    "负面-涂色不均",
                    &[
                        "streak",
                        "streaky",
                        "streaking",
                        "leaves streaks",
                        "patchy",
                        "blotchy",
                    ],
                ),
                sub(
                    "正面-可再激活",
                    &[
                        "reactivate with water",
                        "lifts easily for effects",
                        "movable ink",
                        "good workable time",
                        "can be reactivated",
                    ],
                ),
                sub(
                    "负面-不可再激活/易损坏",
                    &[
                        "doesn't reactivate",
                        "lifts unintentionally",
                        "smears when layered",
                        "dries too permanent",
                    ],
                ),
                sub(
                    "正面-兼容铅笔",
                    &[
                        "goes over pencil cleanly",
                        "doesn't smudge graphite",
                        "erases pencil underneath",
                        "covers pencil lines well",
                    ],
                ),
                sub(
                    "负面-铅笔兼容性差",
                    &[
                        "smears pencil lines",
                        "smudges graphite",
                        "lifts graphite",
                        "muddy with pencil",
                        "doesn't cover pencil",
                    ],
                ),
                sub(
                    "正面-兼容勾线笔",
                    &[
                        "doesn't smear fineliner",
                        "works with micron pens",
                        "layers over ink",
                        "copic-proof ink compatible",
                        "safe over ink",
                    ],
                ),
                sub(
                    "负面-勾线笔兼容性差",
                    &[
                        "smears fineliner ink",
                        "reactivates ink",
                        "lifts the ink line",
                        "bleeding with ink lines",
                        "makes ink run",
                    ],
                ),
                sub(
                    "正面-兼容水彩/水粉",
                    &[
                        "layers over watercolor",
                        "works well with gouache",
                        "can use for watercolor effects",
                        "doesn't lift watercolor",
                    ],
                ),
                sub(
                    "负面-水彩/水粉兼容性差",
                    &[
                        "lifts watercolor",
                        "muddy with gouache",
                        "reactivates paint underneath",
                        "smears watercolor",
                    ],
                ),
                sub(
                    "正面-兼容彩铅",
                    &[
                        "layers well with colored pencils",
                        "good for marker and pencil",
                        "blends with pencil crayon",
                        "works over wax pencil",
                    ],
                ),
                sub(
                    "负面-彩铅兼容性差",
                    &[
                        "waxy buildup with colored pencils",
                        "doesn't layer over pencil crayon",
                        "reacts weirdly with other markers",
                    ],
                ),
                sub(
                    "负面-不兼容彩铅",
                    &[
                        "waxy buildup with colored pencils",
                        "doesn't layer over pencil crayon",
                        "smears the pencil wax",
                    ],
                ),
                sub(
                    "正面-兼容酒精性马克笔",
                    &[
                        "blends with other alcohol markers",
                        "works with my copics",
                        "blends with ohuhu",
                        "good Copic alternative",
                        "matches Copic colors",
                        "layers well with alcohol ink",
                        "smooth blend with other brands",
                    ],
                ),
                sub(
                    "负面-不兼容酒精性马克笔",
                    &[
                        "doesn't blend with copics",
                        "reacts with other alcohol inks",
                        "smears when layered with alcohol markers",
                        "color matching is off",
                        "leaves a weird texture",
                    ],
                ),
                sub(
                    "正面-兼容水性马克笔",
                    &[
                        "layers well with water-based",
                        "works with Tombows",
                        "doesn't reactivate water based ink",
                        "great for highlighting over Tombow",
                        "doesn't smear my Mildliners",
                        "good for underpainting",
                    ],
                ),
                sub(
                    "负面-不兼容水性马克笔",
                    &[
                        "doesn't blend with tombows",
                        "smears my Mildliners",
                        "makes water based ink bleed",
                        "reactivates my tombows",
                        "makes a muddy mess with water-based",
                    ],
                ),
                sub(
                    "正面-兼容丙烯马克笔",
                    &[
                        "layers nicely over Posca",
                        "can draw on top of Posca",
                        "doesn't lift the acrylic",
                        "good with acrylic markers",
                        "adheres well to paint",
                    ],
                ),
                sub(
                    "负面-不兼容丙烯马克笔",
                    &[
                        "smears Posca paint",
                        "doesn't stick to acrylic marker",
                        "lifts the underlying acrylic",
                        "scratches off the acrylic surface",
                    ],
                ),
            ],
        ),
        // ===== 11. 场景表现 =====
        Feature::new(
            "场景表现",
            vec![
                sub(
                    "正面-适合大面积填色",
                    &[
                        "great for coloring",
                        "good for large areas",
                        "fills spaces evenly",
                        "no streaking in large blocks",
                        "coloring book friendly",
                        "smooth coverage",
                    ],
                ),
                sub(
                    "负面-不适合大面积填色",
                    &[
                        "streaky when coloring",
                        "dries too fast for large areas",
                        "bad for filling large spaces",
                        "leaves marker lines",
                        "patchy on large areas",
                    ],
                ),
                sub(
                    "正面-适合漫画/动漫创作",
                    &[
                        "great for manga",
                        "perfect for comics",
                        "blends skin tones beautifully",
                        "works for anime style",
                        "good for cel shading",
                        "great for character art",
                    ],
                ),
                sub(
                    "负面-不适合漫画/动漫创作",
                    &[
                        "hard to blend skin tones",
                        "colors aren't right for manga",
                        "smears my line art",
                        "not good for comic art",
                    ],
                ),
                sub(
                    "正面-适合插画创作",
                    &[
                        "great for illustration",
                        "professional illustration results",
                        "layers beautifully for art",
                        "vibrant illustrations",
                        "perfect for artists",
                    ],
                ),
                sub(
                    "负面-不适合插画创作",
                    &[
                        "not for professional illustration",
                        "colors are not vibrant enough for art",
                        "muddy blends for illustration",
                        "hobby grade only",
                    ],
                ),
                sub(
                    "正面-适合工业/产品设计",
                    &[
                        "great for industrial design",
                        "perfect for rendering",
                        "flat even color for design",
                        "good for product sketches",
                        "excellent range of grays for design",
                    ],
                ),
                sub(
                    "负面-不适合工业/产品设计",
                    &[
                        "streaky for rendering",
                        "colors are not suitable for design",
                        "not precise enough for product design",
                        "needs more neutral grays",
                    ],
                ),
                sub(
                    "正面-适合手账/日记",
                    &[
                        "perfect for journaling",
                        "great for planners",
                        "no bleed in my hobonichi",
                        "mild colors are great for bujo",
                        "excellent for bible journaling",
                    ],
                ),
                sub(
                    "负面-不适合手账/日记",
                    &[
                        "bleeds through journal pages",
                        "ghosts too much for planners",
                        "colors are too bright for journaling",
                        "ruined my leuchtturm",
                    ],
                ),
                sub(
                    "正面-适合着色书/填色",
                    &[
                        "great for coloring books",
                        "perfect for adult coloring",
                        "coloring book friendly",
                        "no bleed in coloring book",
                        "doesn't ghost on coloring pages",
                        "safe for single-sided books",
                        "fine tip is perfect for intricate designs",
                        "great for mandalas",
                        "gets into tiny spaces",
                    ],
                ),
                sub(
                    "负面-不适合着色书/填色",
                    &[
                        "not for coloring books",
                        "ruined my coloring book",
                        "bleeds through every page",
                        "ghosting is too bad for coloring books",
                        "ruined the next page",
                        "tip is too broad for detailed coloring",
                        "bleeds outside the lines in small patterns",
                        "pills the coloring book paper",
                        "tears the paper",
                    ],
                ),
                sub(
                    "正面-适合书法/手写艺术",
                    &[
                        "perfect for calligraphy",
                        "great for hand lettering",
                        "nice thick and thin strokes",
                        "good for upstrokes and downstrokes",
                        "flexible tip for lettering",
                        "rich black for calligraphy",
                    ],
                ),
                sub(
                    "负面-不适合书法/手写艺术",
                    &[
                        "tip is too stiff for calligraphy",
                        "hard to control line variation",
                        "ink feathers during lettering",
                        "not good for brush lettering",
                        "ink is not dark enough for calligraphy",
                    ],
                ),
                sub(
                    "正面-适合思维导图/视觉笔记",
                    &[
                        "perfect for mind mapping",
                        "great for sketchnotes",
                        "ideal for visual notes",
                        "colors are bright for diagrams",
                        "no bleed on my notebook",
                        "multiple tip sizes are useful",
                    ],
                ),
                sub(
                    "负面-不适合思维导图/视觉笔记",
                    &[
                        "bleeds through note paper",
                        "colors are too dull for charts",
                        "tip is too broad for visual notes",
                    ],
                ),
                sub(
                    "正面-适合手工艺/物品定制",
                    &[
                        "great for diy projects",
                        "perfect for customizing shoes",
                        "works on canvas bags",
                        "permanent on rocks and wood",
                        "good for crafting",
                    ],
                ),
                sub(
                    "负面-不适合手工艺/物品定制",
                    &[
                        "wipes off from plastic",
                        "not for outdoor use",
                        "color fades on fabric",
                        "doesn't work on sealed surfaces",
                    ],
                ),
                sub(
                    "正面-适合儿童/教学",
                    &[
                        "great for kids",
                        "safe for children",
                        "non-toxic",
                        "washable ink",
                        "durable tip for heavy hands",
                        "bright colors for kids",
                        "good for classroom use",
                    ],
                ),
                sub(
                    "负面-不适合儿童/教学",
                    &[
                        "strong smell not for kids",
                        "ink stains clothes",
                        "tip broke easily with pressure",
                        "cap is hard for a child to open",
                    ],
                ),
            ],
        ),
        // ===== 12. 表面/介质表现 =====
        Feature::new(
            "表面/介质表现",
            vec![
                sub(
                    "正面-在专业纸张上表现好",
                    &[
                        "works great on marker paper",
                        "smooth on bristol board",
                        "doesn't pill watercolor paper",
                        "blends well on bleedproof paper",
                        "perfect for mixed media paper",
                    ],
                ),
                sub(
                    "负面-在专业纸张上表现差",
                    &[
                        "still bleeds through marker paper",
                        "feathers on hot press paper",
                        "destroys bristol surface",
                        "pills my cold press paper",
                        "doesn't blend on this paper",
                    ],
                ),
                sub(
                    "正面-在深色纸张上显色好",
                    &[
                        "opaque on black paper",
                        "shows up well on dark paper",
                        "great coverage on kraft paper",
                        "vibrant on colored paper",
                        "pops on black",
                        "shows up beautifully",
                    ],
                ),
                sub(
                    "负面-在深色纸张上显色效果差",
                    &[
                        "not opaque on black",
                        "disappears on dark paper",
                        "too transparent for colored paper",
                        "doesn't show up",
                        "color looks dull on black",
                    ],
                ),
                sub(
                    "正面-在光滑表面附着力好",
                    &[
                        "writes on glass",
                        "permanent on plastic",
                        "adheres to metal",
                        "dries on ceramic",
                        "doesn't wipe off",
                        "great for glossy photos",
                        "works on whiteboards",
                    ],
                ),
                sub(
                    "负面-在光滑表面附着力差",
                    &[
                        "wipes off glass",
                        "scratches off plastic",
                        "smears on metal",
                        "never dries on ceramic",
                        "beads up on the surface",
                        "poor adhesion",
                        "not for non-porous surfaces",
                    ],
                ),
                sub(
                    "正面-在布料上效果好",
                    &[
                        "great on fabric",
                        "doesn't bleed on canvas",
                        "permanent on t-shirt",
                        "holds up in the wash",
                        "vibrant on textile",
                        "perfect for customizing shoes",
                        "doesn't feather on cotton",
                    ],
                ),
                sub(
                    "负面-在布料上效果差",
                    &[
                        "bleeds on fabric",
                        "feathers on canvas",
                        "fades after washing",
                        "washes out",
                        "makes the fabric stiff",
                        "not for denim",
                    ],
                ),
                sub(
                    "正面-在木材上表现好",
                    &[
                        "great on wood",
                        "soaks in evenly",
                        "vibrant color on wood",
                        "dries nicely on wood",
                        "perfect for wood crafts",
                        "doesn't bleed with the grain",
                        "sharp lines on wood",
                    ],
                ),
                sub(
                    "负面-在木材上表现差",
                    &[
                        "bleeds into the wood grain",
                        "soaks in too much",
                        "color looks dull on wood",
                        "uneven color on wood",
                        "smears on sealed wood",
                        "makes the wood grain swell",
                    ],
                ),
                sub(
                    "正面-在石头上表现好",
                    &[
                        "great for rock painting",
                        "vibrant on rocks",
                        "opaque on stone",
                        "doesn't scratch off easily",
                        "smooth lines on rocks",
                        "durable on pebbles",
                    ],
                ),
                sub(
                    "负面-在石头上表现差",
                    &[
                        "scratches off rocks",
                        "not opaque enough for stone",
                        "color is dull on rocks",
                        "clogs tip on rough stone",
                        "hard to draw on rocks",
                        "fades on stone",
                    ],
                ),
                sub(
                    "正面-在粘土上表现好",
                    &[
                        "works on polymer clay",
                        "great on air dry clay",
                        "doesn't react with sealant",
                        "vibrant on clay",
                        "soaks in nicely on bisque",
                    ],
                ),
                sub(
                    "负面-在粘土上表现差",
                    &[
                        "doesn't adhere to clay",
                        "smears on polymer clay",
                        "reacts with the varnish",
                        "clogs tip on un-sanded clay",
                    ],
                ),
                sub(
                    "正面-在卡纸上表现好",
                    &[
                        "great on cardstock",
                        "perfect for cardstock",
                        "no bleed on cardstock",
                        "vibrant on heavy paper",
                        "dries fast on cardstock",
                        "smooth on cardstock",
                    ],
                ),
                sub(
                    "负面-在卡纸上表现差",
                    &[
                        "bleeds through cardstock",
                        "ghosting on cardstock",
                        "pills my cardstock",
                        "smears on glossy cardstock",
                        "feathers on cardstock",
                        "dries too slowly on cardstock",
                    ],
                ),
                sub(
                    "正面-兼容印台/图章",
                    &[
                        "great for coloring stamped images",
                        "doesn't smear stamp ink",
                        "works with memento ink",
                        "no bleed lines",
                        "alcohol-proof ink",
                        "safe for stamping",
                    ],
                ),
                sub(
                    "负面-不兼容印台/图章",
                    &[
                        "smears my stamp ink",
                        "reactivates the stamp pad ink",
                        "makes the lines muddy",
                        "smudges my versafine ink",
                        "lifts the stamp ink",
                    ],
                ),
                sub(
                    "正面-适合刻字/细节",
                    &[
                        "perfect for lettering",
                        "great for calligraphy",
                        "nice for writing greetings",
                        "fine tip for small details",
                        "beautiful for sentiments",
                    ],
                ),
                sub(
                    "负面-不适合刻字/细节",
                    &[
                        "too thick for lettering",
                        "bleeds when writing",
                        "hard to do calligraphy with",
                    ],
                ),
            ],
        ),
        // ===== 13. 外观与包装 =====
        Feature::new(
            "外观与包装",
            vec![
                sub(
                    "正面-外观/设计美观",
                    &[
                        "beautiful design",
                        "pretty",
                        "stylish",
                        "minimalist",
                        "sleek",
                        "cute",
                        "lovely",
                        "gorgeous",
                        "aesthetic",
                    ],
                ),
                sub(
                    "负面-外观廉价/丑",
                    &["looks cheap", "looks like a toy", "toy-like", "ugly"],
                ),
                sub(
                    "正面-包装美观/保护好",
                    &[
                        "beautiful packaging",
                        "nice packaging",
                        "giftable",
                        "well packaged",
                        "arrived safe",
                        "sturdy case",
                        "tin case",
                        "reusable case",
                    ],
                ),
                sub(
                    "负面-包装廉价/易损坏",
                    &[
                        "flimsy packaging",
                        "damaged box",
                        "broken case",
                        "arrived damaged",
                        "cheap case",
                    ],
                ),
                sub(
                    "正面-收纳便利",
                    &[
                        "well-organized",
                        "keeps them neat",
                        "good case",
                        "easy access",
                        "tray",
                        "storage",
                    ],
                ),
                sub(
                    "负面-收纳不便",
                    &[
                        "hard to get out",
                        "messy organization",
                        "case doesn't close",
                    ],
                ),
            ],
        ),
        // ===== 14. 多样性与适配性 =====
        Feature::new(
            "多样性与适配性",
            vec![
                sub(
                    "正面-用途广泛",
                    &[
                        "versatile",
                        "multi-purpose",
                        "all-in-one",
                        "many uses",
                        "works on many surfaces",
                        "good for everything",
                    ],
                ),
                sub(
                    "负面-用途单一",
                    &["not versatile", "only for paper", "limited use"],
                ),
                sub(
                    "正面-可拓展性 (Collection can be expanded)",
                    &[
                        "expandable collection",
                        "new colors available",
                        "can add to my collection",
                        "love the new sets",
                        "limited edition colors",
                    ],
                ),
                sub(
                    "负面-可拓展性差 (Poor expandability)",
                    &[
                        "no new colors",
                        "collection is limited",
                        "wish they had more shades",
                        "no new sets released",
                    ],
                ),
                sub(
                    "正面-可补充性 (Can be replenished)",
                    &[
                        "buy individually",
                        "open stock",
                        "refillable",
                        "can buy single pens",
                        "replacement available",
                        "love that I can replace",
                    ],
                ),
                sub(
                    "负面-可补充性差 (Poor replenishability)",
                    &[
                        "can't buy single",
                        "not sold individually",
                        "wish they sold refills",
                        "no replacement nibs",
                        "have to buy a whole new set",
                        "forced to rebuy set",
                    ],
                ),
            ],
        ),
        // ===== 15. 教育与启发 =====
        Feature::new(
            "教育与启发",
            vec![
                sub(
                    "正面-激发创意/乐趣",
                    &[
                        "fun to use",
                        "inspiring",
                        "motivating",
                        "relaxing",
                        "joy",
                        "therapeutic",
                        "satisfying",
                        "makes me want to create",
                        "spark creativity",
                    ],
                ),
                sub(
                    "正面-适合初学者",
                    &[
                        "beginner friendly",
                        "easy to start",
                        "good for beginners",
                        "great starter set",
                    ],
                ),
                sub(
                    "负面-有学习门槛",
                    &[
                        "learning curve",
                        "not for beginners",
                        "hard to use",
                        "confusing",
                    ],
                ),
                sub(
                    "正面-有教学支持",
                    &["good tutorial", "helpful guide", "great community"],
                ),
                sub("负面-无教学支持", &["no instructions", "confusing guide"]),
            ],
        ),
        // ===== 16. 特殊用途 =====
        Feature::new(
            "特殊用途",
            vec![
                sub(
                    "正面-专业级表现",
                    &[
                        "professional grade",
                        "artist grade",
                        "pro grade",
                        "professional results",
                        "industry standard",
                        "lightfast",
                        "archival quality",
                    ],
                ),
                sub(
                    "负面-非专业级",
                    &["not professional grade", "hobby grade", "student grade"],
                ),
                sub(
                    "正面-适用于特殊表面",
                    &[
                        "works on fabric",
                        "good on glass",
                        "great on wood",
                        "permanent on plastic",
                    ],
                ),
                sub(
                    "负面-不适用于特殊表面",
                    &["doesn't work on fabric", "wipes off glass"],
                ),
            ],
        ),
        // ===== 17. 性价比 =====
        Feature::new(
            "性价比",
            vec![
                sub(
                    "正面-性价比高",
                    &[
                        "price",
                        "value",
                        "deal",
                        "affordable",
                        "cheap",
                        "budget",
                        "good value",
                        "great deal",
                        "worth the money",
                        "great buy",
                        "reasonable price",
                        "cheaper than",
                        "alternative to",
                    ],
                ),
                sub(
                    "负面-价格昂贵",
                    &[
                        "expensive",
                        "overpriced",
                        "not worth",
                        "pricey",
                        "costly",
                        "rip off",
                        "too much",
                        "waste of money",
                    ],
                ),
            ],
        ),
        // ===== 18. 配套与服务 =====
        Feature::new(
            "配套与服务",
            vec![
                sub(
                    "正面-提供色卡/好用",
                    &[
                        "comes with a swatch card",
                        "includes a swatch card",
                        "love the swatch card",
                        "helpful swatch card",
                        "great for swatching",
                        "easy to swatch",
                        "blank swatch card",
                        "pre-printed swatch card",
                    ],
                ),
                sub(
                    "负面-缺少色卡/不好用",
                    &[
                        "no swatch card",
                        "wish it had a swatch card",
                        "doesn't come with a swatch card",
                        "had to make my own swatch card",
                        "swatch card is inaccurate",
                        "swatch card is useless",
                        "colors on swatch card don't match",
                    ],
                ),
            ],
        ),
        // ===== 19. 购买与服务体验 =====
        Feature::new(
            "购买与服务体验",
            vec![
                sub(
                    "正面-开箱/展示",
                    &[
                        "beautiful presentation",
                        "great unboxing experience",
                        "perfect for a gift",
                        "looks professional",
                    ],
                ),
                sub(
                    "负面-运输/损坏",
                    &[
                        "arrived broken",
                        "leaking ink",
                        "damaged during shipping",
                        "box was crushed",
                    ],
                ),
                sub(
                    "正面-客服/售后",
                    &[
                        "great customer service",
                        "seller was helpful",
                        "fast replacement",
                        "easy refund",
                    ],
                ),
                sub(
                    "负面-客服/售后",
                    &[
                        "bad customer service",
                        "seller was unresponsive",
                        "missing items",
                        "wrong item sent",
                    ],
                ),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::CompiledRuleSet;

    #[test]
    fn test_base_ruleset_is_nonempty_and_ordered() {
        let ruleset = base_ruleset();
        assert!(ruleset.len() > 15);
        // feature order is part of the contract
        assert_eq!(ruleset.features[0].name, "颜色种类");
        assert!(ruleset.feature("流畅性").is_some());
    }

    #[test]
    fn test_every_sub_topic_has_keywords() {
        for feature in base_ruleset().features {
            for sub_topic in feature.sub_topics {
                assert!(
                    !sub_topic.keywords.is_empty(),
                    "base sub-topic {} of {} has no keywords",
                    sub_topic.name,
                    feature.name
                );
            }
        }
    }

    #[test]
    fn test_base_ruleset_compiles() {
        let compiled = CompiledRuleSet::compile(&base_ruleset()).unwrap();
        assert_eq!(compiled.len(), base_ruleset().len());
    }
}
