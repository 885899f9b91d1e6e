// Copyright 2025 Cowboy AI, LLC.

//! The composed visual vocabulary record
//!
//! This is the structure the downstream prompt-construction layer
//! consumes. Field names and nesting are a stable contract: exactly six
//! attribute groups plus the derived color palette, all serialized in
//! snake_case. Records are created fresh per composition and never
//! mutated after return.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Base color identity seeded by the varietal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BaseColor {
    /// Varietal base hue as a hex token; survives every overlay
    pub hue: String,
    /// Varietal base color description
    pub description: String,
    /// Secondary hue description contributed by the age stage
    pub age_modified: String,
    /// Color-shift hint contributed by the climate
    pub climate_shift: String,
}

/// Opacity and clarity of the rendered profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OpacityClarity {
    /// Varietal base opacity in [0, 1]
    pub base_opacity: f64,
    /// Clarity contributed by the age stage
    pub clarity: String,
    /// Visual weight derived from body and alcohol
    pub visual_weight: String,
}

/// Surface texture layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextureSurface {
    /// Varietal base texture; survives every overlay
    pub base_texture: String,
    /// Varietal structural character
    pub structure: String,
    /// Texture overlay contributed by the climate
    pub climate_modifier: String,
    /// Texture overlay contributed by oak treatment
    pub oak_overlay: String,
    /// Texture state contributed by the age stage
    pub age_state: String,
}

/// Compositional structure of the image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompositionalStructure {
    /// Varietal base composition
    pub base_composition: String,
    /// Aesthetic contributed by the winemaking style
    pub style_aesthetic: String,
    /// Visual tension derived from the balance scores
    pub visual_tension: String,
    /// Component integration contributed by the age stage
    pub integration: String,
    /// Varietal edge quality
    pub edge_quality: String,
    /// Edge treatment contributed by the climate
    pub edge_treatment: String,
}

/// Atmospheric mood of the image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AtmosphericQualities {
    /// Atmosphere contributed by the climate
    pub climate_atmosphere: String,
    /// Atmosphere contributed by the winemaking style
    pub style_atmosphere: String,
    /// Depth implied by the finish length
    pub finish_depth: String,
    /// Fade pattern implied by the finish length
    pub fade_pattern: String,
    /// Temporal mood contributed by the age stage
    pub time_signature: String,
}

/// Numeric echo and derived balance descriptors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BalanceRelationships {
    /// Clamped acidity score
    pub acidity: f64,
    /// Clamped tannin score (neutral midpoint for whites)
    pub tannin: f64,
    /// Clamped sweetness score
    pub sweetness: f64,
    /// Clamped alcohol score
    pub alcohol: f64,
    /// Clamped body score
    pub body: f64,
    /// Band phrase for acidity
    pub acidity_descriptor: String,
    /// Band phrase for tannin
    pub tannin_descriptor: String,
    /// Band phrase for sweetness
    pub sweetness_descriptor: String,
    /// Band phrase for alcohol
    pub alcohol_descriptor: String,
    /// Band phrase for body
    pub body_descriptor: String,
    /// Phrase for the dominant structural element
    pub structural_descriptor: String,
    /// Derived visual tension
    pub visual_tension: String,
    /// Derived visual weight
    pub visual_weight: String,
}

/// Complete visual vocabulary for one tasting profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VisualVocabulary {
    /// Base color identity
    pub base_color: BaseColor,
    /// Opacity and clarity
    pub opacity_clarity: OpacityClarity,
    /// Surface texture layers
    pub texture_surface: TextureSurface,
    /// Compositional structure
    pub compositional_structure: CompositionalStructure,
    /// Atmospheric mood
    pub atmospheric_qualities: AtmosphericQualities,
    /// Balance echo and descriptors
    pub balance_relationships: BalanceRelationships,
    /// Derived palette: 3-5 color tokens, first is the varietal hue,
    /// insertion-ordered, exact-token deduplicated
    pub color_palette: Vec<String>,
}
