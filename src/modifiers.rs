// Copyright 2025 Cowboy AI, LLC.

//! Modifier-layer catalogs
//!
//! Climate, winemaking style, oak treatment, age, and finish each carry a
//! small static overlay table. An overlay contributes descriptor phrases
//! to its own fields of the composed record; it never replaces the
//! varietal's seeded identity.

use schemars::JsonSchema;
use serde::Serialize;

use crate::keys::{AgeStage, Climate, FinishLength, OakTreatment, WineCategory, WinemakingStyle};

/// Environmental overlay contributed by the growing climate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct ClimateModifier {
    /// Color-shift hint
    pub color_shift: &'static str,
    /// Saturation adjustment in [-1, 1]
    pub saturation_adjust: f64,
    /// Brightness adjustment in [-1, 1]
    pub brightness_adjust: f64,
    /// Texture overlay phrase
    pub texture_modifier: &'static str,
    /// Atmospheric character
    pub atmosphere: &'static str,
    /// Baseline tension suggested by the climate
    pub visual_tension: &'static str,
    /// Edge rendering treatment
    pub edge_treatment: &'static str,
}

impl Climate {
    /// Static overlay for this climate
    pub fn modifier(&self) -> ClimateModifier {
        match self {
            Climate::Cool => ClimateModifier {
                color_shift: "lighter brighter",
                saturation_adjust: -0.15,
                brightness_adjust: 0.1,
                texture_modifier: "crisp angular tense",
                atmosphere: "cool restrained mineral",
                visual_tension: "high precise",
                edge_treatment: "sharp defined",
            },
            Climate::Moderate => ClimateModifier {
                color_shift: "balanced",
                saturation_adjust: 0.0,
                brightness_adjust: 0.0,
                texture_modifier: "harmonious integrated",
                atmosphere: "temperate balanced elegant",
                visual_tension: "medium composed",
                edge_treatment: "clean refined",
            },
            Climate::Warm => ClimateModifier {
                color_shift: "deeper richer",
                saturation_adjust: 0.1,
                brightness_adjust: -0.05,
                texture_modifier: "soft ripe generous",
                atmosphere: "warm sun-drenched opulent",
                visual_tension: "low relaxed",
                edge_treatment: "soft blended",
            },
            Climate::Hot => ClimateModifier {
                color_shift: "intense dark",
                saturation_adjust: 0.2,
                brightness_adjust: -0.15,
                texture_modifier: "jammy concentrated thick",
                atmosphere: "hot intense powerful",
                visual_tension: "very low heavy",
                edge_treatment: "blurred diffused",
            },
        }
    }
}

/// Process overlay contributed by the winemaking approach
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct StyleModifier {
    /// Overall aesthetic character
    pub aesthetic: &'static str,
    /// Compositional tendency
    pub composition: &'static str,
    /// Color treatment tendency
    pub color_treatment: &'static str,
    /// Level of rendered detail
    pub detail_level: &'static str,
    /// Atmospheric setting
    pub atmosphere: &'static str,
}

impl WinemakingStyle {
    /// Static overlay for this style
    pub fn modifier(&self) -> StyleModifier {
        match self {
            WinemakingStyle::OldWorld => StyleModifier {
                aesthetic: "restrained mineral earthy",
                composition: "subtle understated elegant",
                color_treatment: "muted sophisticated tertiary",
                detail_level: "fine precise intricate",
                atmosphere: "cool stone cellar ancient",
            },
            WinemakingStyle::NewWorld => StyleModifier {
                aesthetic: "fruit-forward bold exuberant",
                composition: "generous obvious accessible",
                color_treatment: "vibrant primary saturated",
                detail_level: "bold clear direct",
                atmosphere: "sunny modern open",
            },
        }
    }
}

/// Process overlay contributed by oak treatment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct OakModifier {
    /// Texture overlay phrase
    pub texture_overlay: &'static str,
    /// Secondary hue description; "none" when oak adds no color
    pub color_influence: &'static str,
    /// Finish surface quality
    pub finish_quality: &'static str,
    /// Material references for rendering
    pub material_reference: &'static str,
}

impl OakModifier {
    /// Whether this oak regimen contributes a palette color
    pub fn tints(&self) -> bool {
        self.color_influence != "none"
    }
}

impl OakTreatment {
    /// Static overlay for this oak regimen
    pub fn modifier(&self) -> OakModifier {
        match self {
            OakTreatment::None => OakModifier {
                texture_overlay: "pure clean unadulterated",
                color_influence: "none",
                finish_quality: "bright transparent",
                material_reference: "glass crystal water",
            },
            OakTreatment::Neutral => OakModifier {
                texture_overlay: "subtle softened rounded",
                color_influence: "minimal slight warmth",
                finish_quality: "smooth integrated",
                material_reference: "aged_wood smooth_stone",
            },
            OakTreatment::FrenchOak => OakModifier {
                texture_overlay: "silky refined spice",
                color_influence: "golden vanilla subtle toast",
                finish_quality: "elegant sophisticated polished",
                material_reference: "fine_wood polished_bronze",
            },
            OakTreatment::AmericanOak => OakModifier {
                texture_overlay: "bold creamy coconut",
                color_influence: "deep amber vanilla caramel",
                finish_quality: "rich obvious sweet",
                material_reference: "charred_wood bourbon_barrel",
            },
            OakTreatment::MixedOak => OakModifier {
                texture_overlay: "complex layered spice-sweet",
                color_influence: "warm amber golden vanilla",
                finish_quality: "balanced nuanced",
                material_reference: "varied_wood aged_patina",
            },
        }
    }
}

/// Temporal overlay contributed by the age stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct AgeModifier {
    /// Overall color evolution
    pub color_evolution: &'static str,
    /// Color shift for red-category varietals
    pub red_color_shift: &'static str,
    /// Color shift for white-category varietals
    pub white_color_shift: &'static str,
    /// Dominant aromatic category at this stage
    pub aromatic_category: &'static str,
    /// Texture state at this stage
    pub texture_state: &'static str,
    /// Degree of component integration
    pub integration: &'static str,
    /// Visual clarity at this stage
    pub visual_clarity: &'static str,
    /// Temporal mood of the stage
    pub time_signature: &'static str,
}

impl AgeModifier {
    /// Color shift appropriate to the given category
    pub fn color_shift_for(&self, category: WineCategory) -> &'static str {
        match category {
            WineCategory::Red => self.red_color_shift,
            WineCategory::White => self.white_color_shift,
        }
    }
}

impl AgeStage {
    /// Static overlay for this age stage
    pub fn modifier(&self) -> AgeModifier {
        match self {
            AgeStage::Youthful => AgeModifier {
                color_evolution: "vibrant primary bright",
                red_color_shift: "purple ruby",
                white_color_shift: "pale straw green-tinged",
                aromatic_category: "primary fruit-forward fresh",
                texture_state: "taut structured firm",
                integration: "separate distinct angular",
                visual_clarity: "brilliant star-bright",
                time_signature: "present immediate vivid",
            },
            AgeStage::Developing => AgeModifier {
                color_evolution: "deepening softening",
                red_color_shift: "garnet ruby-brick",
                white_color_shift: "golden straw",
                aromatic_category: "secondary developing complex",
                texture_state: "integrating softening",
                integration: "blending harmonizing",
                visual_clarity: "bright clear",
                time_signature: "transitional evolving",
            },
            AgeStage::Mature => AgeModifier {
                color_evolution: "tertiary evolved",
                red_color_shift: "brick garnet tawny-edge",
                white_color_shift: "deep-gold amber",
                aromatic_category: "tertiary developed savory",
                texture_state: "silky resolved integrated",
                integration: "seamless unified complete",
                visual_clarity: "clear luminous",
                time_signature: "patient wise settled",
            },
            AgeStage::PastPrime => AgeModifier {
                color_evolution: "fading oxidized",
                red_color_shift: "brown tawny brick-brown",
                white_color_shift: "deep-amber brown-tinged",
                aromatic_category: "fading oxidized tired",
                texture_state: "thin drying out",
                integration: "falling apart disjointed",
                visual_clarity: "dull fading",
                time_signature: "past declining fragile",
            },
        }
    }
}

/// Temporal-decay overlay contributed by finish length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct FinishProfile {
    /// Length descriptor
    pub length_descriptor: &'static str,
    /// Edge treatment during the fade
    pub edge_treatment: &'static str,
    /// Pattern of the fade
    pub fade_pattern: &'static str,
    /// Atmospheric depth implied by the finish
    pub atmospheric_depth: &'static str,
}

impl FinishLength {
    /// Static profile for this finish length - a direct 4-entry map,
    /// no banding
    pub fn profile(&self) -> FinishProfile {
        match self {
            FinishLength::Short => FinishProfile {
                length_descriptor: "brief fleeting",
                edge_treatment: "abrupt clean",
                fade_pattern: "rapid quick dissipating",
                atmospheric_depth: "shallow immediate",
            },
            FinishLength::Medium => FinishProfile {
                length_descriptor: "moderate sustained",
                edge_treatment: "gradual smooth",
                fade_pattern: "steady even balanced",
                atmospheric_depth: "middle-ground present",
            },
            FinishLength::Long => FinishProfile {
                length_descriptor: "persistent lingering",
                edge_treatment: "extended soft",
                fade_pattern: "slow gradual evolving",
                atmospheric_depth: "deep receding distant",
            },
            FinishLength::VeryLong => FinishProfile {
                length_descriptor: "endless immortal",
                edge_treatment: "infinite dissolving",
                fade_pattern: "complex ever-changing eternal",
                atmospheric_depth: "vast infinite horizon",
            },
        }
    }
}
