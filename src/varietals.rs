// Copyright 2025 Cowboy AI, LLC.

//! Varietal character catalog
//!
//! Base visual identity for each supported grape variety. These profiles
//! seed every composition; later modifier layers refine them but never
//! replace them. The catalog is static data - no entry can be added,
//! removed, or altered at runtime.

use schemars::JsonSchema;
use serde::Serialize;

use crate::keys::{Varietal, WineCategory};

/// Base visual profile of a grape variety
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct VarietalProfile {
    /// Base color description
    pub color_base: &'static str,
    /// Base hue as a hex color token
    pub color_hue: &'static str,
    /// Base opacity in [0, 1]
    pub opacity: f64,
    /// Base surface texture
    pub texture: &'static str,
    /// Base structural character
    pub structure: &'static str,
    /// Base visual weight
    pub visual_weight: &'static str,
    /// Edge rendering quality
    pub edge_quality: &'static str,
    /// Base compositional character
    pub composition: &'static str,
    /// Characteristic aroma notes
    pub characteristic_notes: &'static [&'static str],
}

impl Varietal {
    /// Base visual profile for this varietal
    pub fn profile(&self) -> VarietalProfile {
        match self {
            Varietal::PinotNoir => VarietalProfile {
                color_base: "ruby translucent",
                color_hue: "#8B2635",
                opacity: 0.6,
                texture: "delicate silky",
                structure: "fine-grained elegant",
                visual_weight: "light ethereal",
                edge_quality: "soft diffused",
                composition: "nuanced layered intimate",
                characteristic_notes: &["cherry", "mushroom", "forest_floor", "rose_petal"],
            },
            Varietal::CabernetSauvignon => VarietalProfile {
                color_base: "deep purple opaque",
                color_hue: "#2C1810",
                opacity: 0.95,
                texture: "structured firm",
                structure: "bold geometric angular",
                visual_weight: "full commanding",
                edge_quality: "defined precise",
                composition: "architectural powerful monumental",
                characteristic_notes: &["blackcurrant", "cedar", "graphite", "tobacco"],
            },
            Varietal::Merlot => VarietalProfile {
                color_base: "ruby garnet",
                color_hue: "#722F37",
                opacity: 0.8,
                texture: "plush velvety",
                structure: "rounded soft",
                visual_weight: "medium approachable",
                edge_quality: "gentle flowing",
                composition: "harmonious welcoming generous",
                characteristic_notes: &["plum", "chocolate", "vanilla", "leather"],
            },
            Varietal::Syrah => VarietalProfile {
                color_base: "inky purple black",
                color_hue: "#1A0F14",
                opacity: 0.9,
                texture: "dense smoky",
                structure: "wild untamed powerful",
                visual_weight: "full intense",
                edge_quality: "dramatic bold",
                composition: "primal visceral dynamic",
                characteristic_notes: &["blackberry", "smoke", "pepper", "bacon_fat"],
            },
            Varietal::Grenache => VarietalProfile {
                color_base: "ruby translucent warm",
                color_hue: "#A52A2A",
                opacity: 0.7,
                texture: "soft approachable",
                structure: "rounded generous friendly",
                visual_weight: "medium light",
                edge_quality: "soft flowing",
                composition: "warm welcoming open",
                characteristic_notes: &["strawberry", "raspberry", "white_pepper", "herbs"],
            },
            Varietal::Nebbiolo => VarietalProfile {
                color_base: "garnet brick translucent",
                color_hue: "#9B4F47",
                opacity: 0.65,
                texture: "grippy chalky tannic",
                structure: "austere angular aristocratic",
                visual_weight: "medium ethereal",
                edge_quality: "sharp precise",
                composition: "noble stern elegant",
                characteristic_notes: &["rose", "tar", "truffle", "dried_cherry"],
            },
            Varietal::Sangiovese => VarietalProfile {
                color_base: "ruby bright",
                color_hue: "#8B0000",
                opacity: 0.75,
                texture: "firm savory",
                structure: "angular structured linear",
                visual_weight: "medium bright",
                edge_quality: "defined crisp",
                composition: "savory focused precise",
                characteristic_notes: &["cherry", "tomato", "herbs", "earth"],
            },
            Varietal::Tempranillo => VarietalProfile {
                color_base: "ruby garnet",
                color_hue: "#8B2635",
                opacity: 0.8,
                texture: "medium-bodied balanced",
                structure: "moderate structured",
                visual_weight: "medium substantial",
                edge_quality: "smooth defined",
                composition: "balanced traditional composed",
                characteristic_notes: &["cherry", "leather", "tobacco", "vanilla"],
            },
            Varietal::Malbec => VarietalProfile {
                color_base: "deep purple inky",
                color_hue: "#2C0E3F",
                opacity: 0.9,
                texture: "plush dense",
                structure: "full-bodied powerful",
                visual_weight: "full dense",
                edge_quality: "soft deep",
                composition: "lush opulent powerful",
                characteristic_notes: &["blackberry", "plum", "chocolate", "violet"],
            },
            Varietal::Zinfandel => VarietalProfile {
                color_base: "deep ruby purple",
                color_hue: "#722F37",
                opacity: 0.85,
                texture: "bold jammy",
                structure: "powerful intense",
                visual_weight: "full heavy",
                edge_quality: "bold dramatic",
                composition: "intense powerful exuberant",
                characteristic_notes: &["blackberry", "jam", "spice", "tobacco"],
            },
            Varietal::Chardonnay => VarietalProfile {
                color_base: "golden straw",
                color_hue: "#F4E4C1",
                opacity: 0.85,
                texture: "creamy rich",
                structure: "full-bodied opulent",
                visual_weight: "medium to full",
                edge_quality: "smooth rounded",
                composition: "luxurious generous expansive",
                characteristic_notes: &["apple", "butter", "vanilla", "hazelnut"],
            },
            Varietal::SauvignonBlanc => VarietalProfile {
                color_base: "pale straw green-tinged",
                color_hue: "#F5F5DC",
                opacity: 0.9,
                texture: "crisp electric",
                structure: "lean racy angular",
                visual_weight: "light precise",
                edge_quality: "sharp cutting",
                composition: "vibrant energetic focused",
                characteristic_notes: &["grapefruit", "grass", "gooseberry", "flint"],
            },
            Varietal::Riesling => VarietalProfile {
                color_base: "pale yellow crystalline",
                color_hue: "#FFFACD",
                opacity: 0.95,
                texture: "crystalline pure",
                structure: "taut precise delicate",
                visual_weight: "light to medium",
                edge_quality: "razor-sharp brilliant",
                composition: "luminous transparent exact",
                characteristic_notes: &["lime", "petrol", "honey", "slate"],
            },
            Varietal::PinotGrigio => VarietalProfile {
                color_base: "pale straw light",
                color_hue: "#F5F5DC",
                opacity: 0.9,
                texture: "light crisp",
                structure: "simple clean refreshing",
                visual_weight: "light delicate",
                edge_quality: "clean sharp",
                composition: "simple direct refreshing",
                characteristic_notes: &["lemon", "apple", "pear", "almond"],
            },
            Varietal::CheninBlanc => VarietalProfile {
                color_base: "golden straw",
                color_hue: "#F4E4C1",
                opacity: 0.85,
                texture: "waxy honeyed",
                structure: "versatile complex",
                visual_weight: "medium rich",
                edge_quality: "smooth textured",
                composition: "complex textural layered",
                characteristic_notes: &["honey", "quince", "chamomile", "ginger"],
            },
            Varietal::Gewurztraminer => VarietalProfile {
                color_base: "deep golden",
                color_hue: "#FFD700",
                opacity: 0.82,
                texture: "oily perfumed",
                structure: "exotic aromatic spicy",
                visual_weight: "medium full",
                edge_quality: "aromatic diffused",
                composition: "exotic perfumed intense",
                characteristic_notes: &["lychee", "rose", "ginger", "spice"],
            },
            Varietal::Viognier => VarietalProfile {
                color_base: "deep golden",
                color_hue: "#FFD700",
                opacity: 0.8,
                texture: "viscous oily",
                structure: "full perfumed exotic",
                visual_weight: "full voluptuous",
                edge_quality: "soft blurred aromatic",
                composition: "sensuous heady intoxicating",
                characteristic_notes: &["apricot", "honeysuckle", "peach", "ginger"],
            },
            Varietal::Albarino => VarietalProfile {
                color_base: "pale yellow green-tinged",
                color_hue: "#FFFACD",
                opacity: 0.9,
                texture: "fresh saline",
                structure: "crisp coastal bright",
                visual_weight: "light medium",
                edge_quality: "bright clean",
                composition: "fresh coastal vibrant",
                characteristic_notes: &["citrus", "peach", "saline", "minerals"],
            },
        }
    }
}

/// Summary of a varietal for catalog listings
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct VarietalSummary {
    /// Varietal key
    pub varietal: Varietal,
    /// Red or white category
    pub category: WineCategory,
    /// Base color description
    pub color: &'static str,
    /// Base surface texture
    pub texture: &'static str,
    /// Base structural character
    pub structure: &'static str,
    /// Characteristic aroma notes
    pub notes: &'static [&'static str],
}

/// List every supported varietal with its basic characteristics.
///
/// Pure catalog read; never fails.
pub fn list_varietals() -> Vec<VarietalSummary> {
    Varietal::ALL
        .iter()
        .map(|varietal| {
            let profile = varietal.profile();
            VarietalSummary {
                varietal: *varietal,
                category: varietal.category(),
                color: profile.color_base,
                texture: profile.texture,
                structure: profile.structure,
                notes: profile.characteristic_notes,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_varietal_has_a_complete_profile() {
        for varietal in Varietal::ALL {
            let profile = varietal.profile();
            assert!(!profile.color_base.is_empty(), "{varietal}");
            assert!(profile.color_hue.starts_with('#'), "{varietal}");
            assert!(
                (0.0..=1.0).contains(&profile.opacity),
                "{varietal} opacity out of range"
            );
            assert_eq!(profile.characteristic_notes.len(), 4, "{varietal}");
        }
    }

    #[test]
    fn listing_covers_all_varietals() {
        let summaries = list_varietals();
        assert_eq!(summaries.len(), Varietal::ALL.len());
        assert_eq!(summaries[0].varietal, Varietal::PinotNoir);
        assert_eq!(summaries[0].color, "ruby translucent");
    }
}
