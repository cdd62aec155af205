//! Preset UI color schemes: a fixed catalog of curated palettes for whole
//! interfaces, plus category/text filtering and a random scheme generator.

use rand::Rng;
use serde::Serialize;

use crate::color::{Hsl, Rgb};

/// The eight color slots a scheme assigns. Serialized keys match the
/// exported document formats (`cardBg`, not `card_bg`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemeColors {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub background: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub border: Rgb,
    #[serde(rename = "cardBg")]
    pub card_bg: Rgb,
}

impl SchemeColors {
    /// Slot names and values in their canonical order.
    pub fn entries(&self) -> [(&'static str, Rgb); 8] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("background", self.background),
            ("text", self.text),
            ("muted", self.muted),
            ("border", self.border),
            ("cardBg", self.card_bg),
        ]
    }
}

/// A named, categorized color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheme {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub categories: &'static [&'static str],
    pub colors: SchemeColors,
}

impl Scheme {
    fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
            || self
                .categories
                .iter()
                .any(|c| c.to_lowercase().contains(query_lower))
    }
}

const fn scheme_colors(
    primary: Rgb,
    secondary: Rgb,
    accent: Rgb,
    background: Rgb,
    text: Rgb,
    muted: Rgb,
    border: Rgb,
    card_bg: Rgb,
) -> SchemeColors {
    SchemeColors {
        primary,
        secondary,
        accent,
        background,
        text,
        muted,
        border,
        card_bg,
    }
}

/// The preset catalog. Static data; nothing here is derived.
pub const SCHEMES: &[Scheme] = &[
    Scheme {
        id: "modern-minimal",
        name: "Modern Minimal",
        description: "Clean and minimal design with subtle accents",
        categories: &["modern", "minimal", "professional"],
        colors: scheme_colors(
            Rgb::new(0x25, 0x63, 0xEB),
            Rgb::new(0x4B, 0x55, 0x63),
            Rgb::new(0xF5, 0x9E, 0x0B),
            Rgb::new(0xF9, 0xFA, 0xFB),
            Rgb::new(0x1F, 0x29, 0x37),
            Rgb::new(0x9C, 0xA3, 0xAF),
            Rgb::new(0xE5, 0xE7, 0xEB),
            Rgb::new(0xFF, 0xFF, 0xFF),
        ),
    },
    Scheme {
        id: "dark-mode",
        name: "Dark Mode",
        description: "Sleek dark interface with vibrant accents",
        categories: &["dark", "modern", "tech"],
        colors: scheme_colors(
            Rgb::new(0x3B, 0x82, 0xF6),
            Rgb::new(0x6B, 0x72, 0x80),
            Rgb::new(0xF9, 0x73, 0x16),
            Rgb::new(0x11, 0x18, 0x27),
            Rgb::new(0xF9, 0xFA, 0xFB),
            Rgb::new(0x9C, 0xA3, 0xAF),
            Rgb::new(0x37, 0x41, 0x51),
            Rgb::new(0x1F, 0x29, 0x37),
        ),
    },
    Scheme {
        id: "nature-inspired",
        name: "Nature Inspired",
        description: "Earthy tones inspired by natural elements",
        categories: &["nature", "earthy", "calm"],
        colors: scheme_colors(
            Rgb::new(0x05, 0x96, 0x69),
            Rgb::new(0x92, 0x40, 0x0E),
            Rgb::new(0xFB, 0xBF, 0x24),
            Rgb::new(0xEC, 0xFD, 0xF5),
            Rgb::new(0x06, 0x4E, 0x3B),
            Rgb::new(0x6B, 0x72, 0x80),
            Rgb::new(0xD1, 0xFA, 0xE5),
            Rgb::new(0xFF, 0xFF, 0xFF),
        ),
    },
    Scheme {
        id: "vibrant-tech",
        name: "Vibrant Tech",
        description: "Bold and vibrant colors for tech products",
        categories: &["vibrant", "tech", "modern"],
        colors: scheme_colors(
            Rgb::new(0x7C, 0x3A, 0xED),
            Rgb::new(0x25, 0x63, 0xEB),
            Rgb::new(0xEC, 0x48, 0x99),
            Rgb::new(0xF5, 0xF3, 0xFF),
            Rgb::new(0x4C, 0x1D, 0x95),
            Rgb::new(0x8B, 0x5C, 0xF6),
            Rgb::new(0xDD, 0xD6, 0xFE),
            Rgb::new(0xFF, 0xFF, 0xFF),
        ),
    },
    Scheme {
        id: "soft-pastels",
        name: "Soft Pastels",
        description: "Gentle pastel colors for a soft interface",
        categories: &["pastel", "soft", "friendly"],
        colors: scheme_colors(
            Rgb::new(0x8B, 0x5C, 0xF6),
            Rgb::new(0xEC, 0x48, 0x99),
            Rgb::new(0xF5, 0x9E, 0x0B),
            Rgb::new(0xF5, 0xF3, 0xFF),
            Rgb::new(0x6D, 0x28, 0xD9),
            Rgb::new(0xA7, 0x8B, 0xFA),
            Rgb::new(0xDD, 0xD6, 0xFE),
            Rgb::new(0xFF, 0xFF, 0xFF),
        ),
    },
    Scheme {
        id: "corporate-professional",
        name: "Corporate Professional",
        description: "Professional color scheme for business applications",
        categories: &["corporate", "professional", "business"],
        colors: scheme_colors(
            Rgb::new(0x1E, 0x40, 0xAF),
            Rgb::new(0x47, 0x55, 0x69),
            Rgb::new(0x03, 0x69, 0xA1),
            Rgb::new(0xF8, 0xFA, 0xFC),
            Rgb::new(0x0F, 0x17, 0x2A),
            Rgb::new(0x64, 0x74, 0x8B),
            Rgb::new(0xE2, 0xE8, 0xF0),
            Rgb::new(0xFF, 0xFF, 0xFF),
        ),
    },
    Scheme {
        id: "high-contrast",
        name: "High Contrast",
        description: "Maximum contrast for accessibility",
        categories: &["accessibility", "high-contrast", "inclusive"],
        colors: scheme_colors(
            Rgb::new(0x00, 0x00, 0xEE),
            Rgb::new(0x55, 0x1A, 0x8B),
            Rgb::new(0xFF, 0x8C, 0x00),
            Rgb::new(0xFF, 0xFF, 0xFF),
            Rgb::new(0x00, 0x00, 0x00),
            Rgb::new(0x55, 0x55, 0x55),
            Rgb::new(0x00, 0x00, 0x00),
            Rgb::new(0xF8, 0xF8, 0xF8),
        ),
    },
    Scheme {
        id: "colorblind-safe",
        name: "Colorblind Safe",
        description: "Colors distinguishable by people with color vision deficiencies",
        categories: &["accessibility", "colorblind", "inclusive"],
        colors: scheme_colors(
            Rgb::new(0x00, 0x72, 0xB2),
            Rgb::new(0x00, 0x9E, 0x73),
            Rgb::new(0xD5, 0x5E, 0x00),
            Rgb::new(0xF0, 0xF0, 0xF0),
            Rgb::new(0x00, 0x00, 0x00),
            Rgb::new(0x56, 0x56, 0x5A),
            Rgb::new(0xCC, 0xCC, 0xCC),
            Rgb::new(0xFF, 0xFF, 0xFF),
        ),
    },
    Scheme {
        id: "monochromatic-blue",
        name: "Monochromatic Blue",
        description: "Various shades of blue for a cohesive look",
        categories: &["monochromatic", "blue", "calm"],
        colors: scheme_colors(
            Rgb::new(0x1E, 0x40, 0xAF),
            Rgb::new(0x3B, 0x82, 0xF6),
            Rgb::new(0x93, 0xC5, 0xFD),
            Rgb::new(0xEF, 0xF6, 0xFF),
            Rgb::new(0x1E, 0x3A, 0x8A),
            Rgb::new(0x60, 0xA5, 0xFA),
            Rgb::new(0xBF, 0xDB, 0xFE),
            Rgb::new(0xFF, 0xFF, 0xFF),
        ),
    },
    Scheme {
        id: "retro-80s",
        name: "Retro 80s",
        description: "Vibrant neon colors inspired by 1980s design",
        categories: &["retro", "vibrant", "themed"],
        colors: scheme_colors(
            Rgb::new(0xFF, 0x00, 0xFF),
            Rgb::new(0x00, 0xFF, 0xFF),
            Rgb::new(0xFF, 0xFF, 0x00),
            Rgb::new(0x00, 0x00, 0x00),
            Rgb::new(0xFF, 0xFF, 0xFF),
            Rgb::new(0xFF, 0x00, 0xFF),
            Rgb::new(0x00, 0xFF, 0xFF),
            Rgb::new(0x0A, 0x0A, 0x0A),
        ),
    },
    Scheme {
        id: "minimalist-grayscale",
        name: "Minimalist Grayscale",
        description: "Clean grayscale design with minimal color",
        categories: &["minimal", "grayscale", "modern"],
        colors: scheme_colors(
            Rgb::new(0x00, 0x00, 0x00),
            Rgb::new(0x4B, 0x55, 0x63),
            Rgb::new(0x9C, 0xA3, 0xAF),
            Rgb::new(0xF9, 0xFA, 0xFB),
            Rgb::new(0x11, 0x18, 0x27),
            Rgb::new(0x6B, 0x72, 0x80),
            Rgb::new(0xE5, 0xE7, 0xEB),
            Rgb::new(0xFF, 0xFF, 0xFF),
        ),
    },
    Scheme {
        id: "autumn-harvest",
        name: "Autumn Harvest",
        description: "Warm colors inspired by fall foliage",
        categories: &["nature", "warm", "seasonal"],
        colors: scheme_colors(
            Rgb::new(0xB4, 0x53, 0x09),
            Rgb::new(0x92, 0x40, 0x0E),
            Rgb::new(0xD9, 0x77, 0x06),
            Rgb::new(0xFF, 0xFB, 0xEB),
            Rgb::new(0x78, 0x35, 0x0F),
            Rgb::new(0xB4, 0x53, 0x09),
            Rgb::new(0xFE, 0xF3, 0xC7),
            Rgb::new(0xFF, 0xFF, 0xFF),
        ),
    },
    Scheme {
        id: "ocean-breeze",
        name: "Ocean Breeze",
        description: "Cool blues and teals inspired by the sea",
        categories: &["nature", "cool", "calm"],
        colors: scheme_colors(
            Rgb::new(0x08, 0x91, 0xB2),
            Rgb::new(0x0E, 0x74, 0x90),
            Rgb::new(0x06, 0xB6, 0xD4),
            Rgb::new(0xEC, 0xFE, 0xFF),
            Rgb::new(0x16, 0x4E, 0x63),
            Rgb::new(0x67, 0xE8, 0xF9),
            Rgb::new(0xCF, 0xFA, 0xFE),
            Rgb::new(0xFF, 0xFF, 0xFF),
        ),
    },
    Scheme {
        id: "sunset-glow",
        name: "Sunset Glow",
        description: "Warm gradients inspired by sunset colors",
        categories: &["nature", "warm", "vibrant"],
        colors: scheme_colors(
            Rgb::new(0xDB, 0x27, 0x77),
            Rgb::new(0x9D, 0x17, 0x4D),
            Rgb::new(0xF5, 0x9E, 0x0B),
            Rgb::new(0xFF, 0xF1, 0xF2),
            Rgb::new(0x83, 0x18, 0x43),
            Rgb::new(0xF4, 0x72, 0xB6),
            Rgb::new(0xFC, 0xE7, 0xF3),
            Rgb::new(0xFF, 0xFF, 0xFF),
        ),
    },
    Scheme {
        id: "forest-depths",
        name: "Forest Depths",
        description: "Deep greens inspired by dense forests",
        categories: &["nature", "green", "calm"],
        colors: scheme_colors(
            Rgb::new(0x16, 0x65, 0x34),
            Rgb::new(0x14, 0x53, 0x2D),
            Rgb::new(0x65, 0xA3, 0x0D),
            Rgb::new(0xF0, 0xFD, 0xF4),
            Rgb::new(0x14, 0x53, 0x2D),
            Rgb::new(0x4A, 0xDE, 0x80),
            Rgb::new(0xDC, 0xFC, 0xE7),
            Rgb::new(0xFF, 0xFF, 0xFF),
        ),
    },
    Scheme {
        id: "bauhaus-inspired",
        name: "Bauhaus Inspired",
        description: "Primary colors and geometric simplicity",
        categories: &["artistic", "primary-colors", "bold"],
        colors: scheme_colors(
            Rgb::new(0xFF, 0x00, 0x00),
            Rgb::new(0x00, 0x00, 0xFF),
            Rgb::new(0xFF, 0xFF, 0x00),
            Rgb::new(0xFF, 0xFF, 0xFF),
            Rgb::new(0x00, 0x00, 0x00),
            Rgb::new(0x88, 0x88, 0x88),
            Rgb::new(0x00, 0x00, 0x00),
            Rgb::new(0xF5, 0xF5, 0xF5),
        ),
    },
    Scheme {
        id: "impressionist",
        name: "Impressionist",
        description: "Soft, dreamy colors inspired by Monet and Renoir",
        categories: &["artistic", "soft", "dreamy"],
        colors: scheme_colors(
            Rgb::new(0x7A, 0x9E, 0xBF), // soft blue
            Rgb::new(0xBF, 0x9A, 0x7A), // soft brown
            Rgb::new(0xA6, 0x7A, 0xBF), // soft purple
            Rgb::new(0xF5, 0xF5, 0xF0),
            Rgb::new(0x4A, 0x4A, 0x40),
            Rgb::new(0xBF, 0xBF, 0xB0),
            Rgb::new(0xE5, 0xE5, 0xE0),
            Rgb::new(0xFF, 0xFF, 0xFF),
        ),
    },
    Scheme {
        id: "pop-art",
        name: "Pop Art",
        description: "Bold, high-contrast colors inspired by Warhol and Lichtenstein",
        categories: &["artistic", "bold", "vibrant"],
        colors: scheme_colors(
            Rgb::new(0xFF, 0x33, 0x66),
            Rgb::new(0x33, 0x66, 0xFF),
            Rgb::new(0xFF, 0xCC, 0x00),
            Rgb::new(0xFF, 0xFF, 0xFF),
            Rgb::new(0x00, 0x00, 0x00),
            Rgb::new(0x66, 0xCC, 0xFF),
            Rgb::new(0x00, 0x00, 0x00),
            Rgb::new(0xFF, 0xFF, 0xCC),
        ),
    },
    Scheme {
        id: "minimalist-japanese",
        name: "Minimalist Japanese",
        description: "Inspired by traditional Japanese aesthetics",
        categories: &["cultural", "minimal", "calm"],
        colors: scheme_colors(
            Rgb::new(0xA2, 0x20, 0x41), // deep red
            Rgb::new(0x1A, 0x1A, 0x1A),
            Rgb::new(0xD4, 0xA0, 0x17), // gold
            Rgb::new(0xF5, 0xF5, 0xF0),
            Rgb::new(0x1A, 0x1A, 0x1A),
            Rgb::new(0x88, 0x88, 0x88),
            Rgb::new(0xE5, 0xE5, 0xE0),
            Rgb::new(0xFF, 0xFF, 0xFF),
        ),
    },
    Scheme {
        id: "nordic-simplicity",
        name: "Nordic Simplicity",
        description: "Clean, light colors inspired by Scandinavian design",
        categories: &["cultural", "minimal", "light"],
        colors: scheme_colors(
            Rgb::new(0x00, 0x77, 0xB6),
            Rgb::new(0x02, 0x3E, 0x8A),
            Rgb::new(0xFF, 0x9E, 0x00),
            Rgb::new(0xF8, 0xF9, 0xFA),
            Rgb::new(0x21, 0x25, 0x29),
            Rgb::new(0x6C, 0x75, 0x7D),
            Rgb::new(0xDE, 0xE2, 0xE6),
            Rgb::new(0xFF, 0xFF, 0xFF),
        ),
    },
];

/// All categories used by the catalog, sorted and deduplicated.
pub fn categories() -> Vec<&'static str> {
    let mut all: Vec<&'static str> = SCHEMES
        .iter()
        .flat_map(|scheme| scheme.categories.iter().copied())
        .collect();
    all.sort_unstable();
    all.dedup();
    all
}

/// Catalog entries matching an optional category and a free-text query.
///
/// The query is case-insensitive and matches anywhere in the name,
/// description, or category list. An empty query matches everything.
pub fn filter(category: Option<&str>, query: &str) -> Vec<&'static Scheme> {
    let query = query.to_lowercase();
    SCHEMES
        .iter()
        .filter(|scheme| {
            category.map_or(true, |c| scheme.categories.contains(&c))
                && (query.is_empty() || scheme.matches(&query))
        })
        .collect()
}

const DARK_NEUTRALS: [Rgb; 5] = [
    Rgb::new(0x11, 0x18, 0x27), // background
    Rgb::new(0xF9, 0xFA, 0xFB), // text
    Rgb::new(0x6B, 0x72, 0x80), // muted
    Rgb::new(0x37, 0x41, 0x51), // border
    Rgb::new(0x1F, 0x29, 0x37), // card
];

const LIGHT_NEUTRALS: [Rgb; 5] = [
    Rgb::new(0xF9, 0xFA, 0xFB),
    Rgb::new(0x1F, 0x29, 0x37),
    Rgb::new(0x9C, 0xA3, 0xAF),
    Rgb::new(0xE5, 0xE7, 0xEB),
    Rgb::new(0xFF, 0xFF, 0xFF),
];

/// A generated scheme: random primary hue, complementary secondary,
/// triadic accent, and a coin-flip dark or light neutral set.
pub fn random_scheme(rng: &mut impl Rng) -> Scheme {
    let hue = rng.gen_range(0..360u16);
    let dark = rng.gen_bool(0.5);
    let [background, text, muted, border, card_bg] =
        if dark { DARK_NEUTRALS } else { LIGHT_NEUTRALS };

    Scheme {
        id: "custom",
        name: "Custom Scheme",
        description: if dark {
            "Custom dark color scheme"
        } else {
            "Custom light color scheme"
        },
        categories: &["custom"],
        colors: SchemeColors {
            primary: Rgb::from(Hsl::new(hue, 80, 50)),
            secondary: Rgb::from(Hsl::new((hue + 180) % 360, 30, 40)),
            accent: Rgb::from(Hsl::new((hue + 120) % 360, 80, 50)),
            background,
            text,
            muted,
            border,
            card_bg,
        },
    }
}
