//! Category-name-to-icon resolution.
//!
//! Maps a category or industry display name to a fallback icon path via
//! an ordered keyword table. The UI consults this whenever a listing has
//! no image or its primary image fails to load, so resolution must be
//! total: every input resolves to a non-empty path.

// ---------------------------------------------------------------------------
// Icon paths
// ---------------------------------------------------------------------------

/// Icon returned when no keyword group matches.
pub const DEFAULT_ICON: &str = "/assets/icons/category-default.svg";

// ---------------------------------------------------------------------------
// Resolution table
// ---------------------------------------------------------------------------

/// One keyword group bound to an icon path.
///
/// A rule matches when any of its keywords occurs as a substring of the
/// lower-cased input name.
#[derive(Debug)]
pub struct IconRule {
    pub keywords: &'static [&'static str],
    pub icon: &'static str,
}

/// Ordered resolution table; earlier rules win.
///
/// The order is load-bearing: specific product types ("hair oil",
/// "massage oil") sit above the broad catch-alls ("oil", "massage")
/// that would otherwise shadow them. Tests pin the precedence.
pub const ICON_RULES: &[IconRule] = &[
    IconRule {
        keywords: &["fashion", "clothing", "apparel", "textile"],
        icon: "/assets/icons/fashion.svg",
    },
    IconRule {
        keywords: &["electronics", "electrical", "digital", "tech"],
        icon: "/assets/icons/electronics.svg",
    },
    IconRule {
        keywords: &["ayurvedic"],
        icon: "/assets/icons/ayurveda.svg",
    },
    // Specific product types, ahead of the generic oil/herbal catch-alls.
    IconRule {
        keywords: &["shampoo"],
        icon: "/assets/icons/shampoo.svg",
    },
    IconRule {
        keywords: &["hair treatment"],
        icon: "/assets/icons/hair-treatment.svg",
    },
    IconRule {
        keywords: &["hair oil"],
        icon: "/assets/icons/hair-oil.svg",
    },
    IconRule {
        keywords: &["conditioner"],
        icon: "/assets/icons/conditioner.svg",
    },
    IconRule {
        keywords: &["skin care"],
        icon: "/assets/icons/skin-care.svg",
    },
    IconRule {
        keywords: &["massage oil"],
        icon: "/assets/icons/massage-oil.svg",
    },
    IconRule {
        keywords: &["toothpaste"],
        icon: "/assets/icons/toothpaste.svg",
    },
    IconRule {
        keywords: &["herbal powder"],
        icon: "/assets/icons/herbal-powder.svg",
    },
    IconRule {
        keywords: &["soap"],
        icon: "/assets/icons/soap.svg",
    },
    // Broader industry groups.
    IconRule {
        keywords: &["food", "grocery", "beverage"],
        icon: "/assets/icons/food.svg",
    },
    IconRule {
        keywords: &["furniture"],
        icon: "/assets/icons/furniture.svg",
    },
    IconRule {
        keywords: &["sports", "fitness"],
        icon: "/assets/icons/sports.svg",
    },
    IconRule {
        keywords: &["automotive"],
        icon: "/assets/icons/automotive.svg",
    },
    IconRule {
        keywords: &["beauty", "health"],
        icon: "/assets/icons/beauty.svg",
    },
    IconRule {
        keywords: &["home", "garden"],
        icon: "/assets/icons/home-garden.svg",
    },
    // Generic catch-alls, last.
    IconRule {
        keywords: &["oil", "massage"],
        icon: "/assets/icons/oil.svg",
    },
    IconRule {
        keywords: &["powder", "herbal"],
        icon: "/assets/icons/herbal.svg",
    },
];

/// Resolve a category or industry name to an icon path.
///
/// Case-insensitive; evaluates [`ICON_RULES`] in order and returns the
/// icon of the first matching group, or [`DEFAULT_ICON`] when nothing
/// matches. Never returns an empty path.
///
/// # Examples
///
/// ```
/// use ayumart_core::icon::resolve_icon;
///
/// assert_eq!(resolve_icon("Mens Clothing"), "/assets/icons/fashion.svg");
/// assert_eq!(resolve_icon("Herbal Shampoo"), "/assets/icons/shampoo.svg");
/// assert_eq!(resolve_icon("Stationery"), "/assets/icons/category-default.svg");
/// ```
pub fn resolve_icon(name: &str) -> &'static str {
    let name = name.to_lowercase();
    ICON_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| name.contains(kw)))
        .map(|rule| rule.icon)
        .unwrap_or(DEFAULT_ICON)
}
