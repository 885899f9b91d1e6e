// Copyright 2025 Cowboy AI, LLC.

//! The composition pipeline
//!
//! Applies the catalogs and the balance interpretation in a fixed order
//! to produce one [`VisualVocabulary`]. The order is load-bearing and not
//! commutative:
//!
//! 1. seed identity fields from the varietal profile
//! 2. climate overlay
//! 3. winemaking-style overlay
//! 4. oak overlay
//! 5. age overlay
//! 6. balance application
//! 7. palette derivation
//!
//! Each step is a pure function taking and returning the composed record
//! by value; a step only fills the fields its layer owns. Later layers
//! never erase an earlier layer's identity fields (base hue, base
//! texture, base composition), only append secondary descriptors. That
//! invariant is what lets region presets and evolution sequences be
//! reasoned about as the same function run at different points.

use indexmap::IndexSet;

use crate::balance::{interpret, BalanceInputs, BalanceReading};
use crate::keys::{AgeStage, Climate, OakTreatment, Varietal, WinemakingStyle};
use crate::vocabulary::{
    AtmosphericQualities, BalanceRelationships, BaseColor, CompositionalStructure,
    OpacityClarity, TextureSurface, VisualVocabulary,
};

/// Fully typed parameter tuple for one composition
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeRequest {
    /// Grape variety
    pub varietal: Varietal,
    /// Growing climate
    pub climate: Climate,
    /// Winemaking approach
    pub style: WinemakingStyle,
    /// Oak regimen
    pub oak: OakTreatment,
    /// Age stage
    pub age: AgeStage,
    /// Numeric balance scores, finish, and aroma tokens
    pub balance: BalanceInputs,
}

/// Palette derivation caps the token count here
const PALETTE_CAP: usize = 5;

/// Palette derivation pads up to this floor when contributions run thin
const PALETTE_FLOOR: usize = 3;

/// Compose a complete visual vocabulary from typed parameters.
///
/// Pure: identical requests produce identical records. Typed inputs make
/// catalog misses unrepresentable, so this cannot fail; the string-keyed
/// entry points in [`crate::params`] are where `UnknownKey` arises.
pub fn compose(request: &ComposeRequest) -> VisualVocabulary {
    let reading = interpret(&request.balance, request.varietal.category());

    let vocabulary = seed_from_varietal(request);
    let vocabulary = apply_climate(vocabulary, request);
    let vocabulary = apply_style(vocabulary, request);
    let vocabulary = apply_oak(vocabulary, request);
    let vocabulary = apply_age(vocabulary, request);
    let vocabulary = apply_balance(vocabulary, request, &reading);
    derive_palette(vocabulary, request)
}

/// Step 1: seed every identity field from the varietal profile
fn seed_from_varietal(request: &ComposeRequest) -> VisualVocabulary {
    let profile = request.varietal.profile();
    VisualVocabulary {
        base_color: BaseColor {
            hue: profile.color_hue.to_string(),
            description: profile.color_base.to_string(),
            age_modified: String::new(),
            climate_shift: String::new(),
        },
        opacity_clarity: OpacityClarity {
            base_opacity: profile.opacity,
            clarity: String::new(),
            visual_weight: String::new(),
        },
        texture_surface: TextureSurface {
            base_texture: profile.texture.to_string(),
            structure: profile.structure.to_string(),
            climate_modifier: String::new(),
            oak_overlay: String::new(),
            age_state: String::new(),
        },
        compositional_structure: CompositionalStructure {
            base_composition: profile.composition.to_string(),
            style_aesthetic: String::new(),
            visual_tension: String::new(),
            integration: String::new(),
            edge_quality: profile.edge_quality.to_string(),
            edge_treatment: String::new(),
        },
        atmospheric_qualities: AtmosphericQualities {
            climate_atmosphere: String::new(),
            style_atmosphere: String::new(),
            finish_depth: String::new(),
            fade_pattern: String::new(),
            time_signature: String::new(),
        },
        balance_relationships: BalanceRelationships {
            acidity: 0.0,
            tannin: 0.0,
            sweetness: 0.0,
            alcohol: 0.0,
            body: 0.0,
            acidity_descriptor: String::new(),
            tannin_descriptor: String::new(),
            sweetness_descriptor: String::new(),
            alcohol_descriptor: String::new(),
            body_descriptor: String::new(),
            structural_descriptor: String::new(),
            visual_tension: String::new(),
            visual_weight: String::new(),
        },
        color_palette: Vec::new(),
    }
}

/// Step 2: climate overlay - texture, atmosphere, edges, color hint
fn apply_climate(mut vocabulary: VisualVocabulary, request: &ComposeRequest) -> VisualVocabulary {
    let climate = request.climate.modifier();
    vocabulary.base_color.climate_shift = climate.color_shift.to_string();
    vocabulary.texture_surface.climate_modifier = climate.texture_modifier.to_string();
    vocabulary.compositional_structure.edge_treatment = climate.edge_treatment.to_string();
    vocabulary.atmospheric_qualities.climate_atmosphere = climate.atmosphere.to_string();
    vocabulary
}

/// Step 3: winemaking-style overlay - aesthetic and atmosphere
fn apply_style(mut vocabulary: VisualVocabulary, request: &ComposeRequest) -> VisualVocabulary {
    let style = request.style.modifier();
    vocabulary.compositional_structure.style_aesthetic = style.aesthetic.to_string();
    vocabulary.atmospheric_qualities.style_atmosphere = style.atmosphere.to_string();
    vocabulary
}

/// Step 4: oak overlay - texture only; oak color is a palette concern
/// and never touches the primary hue
fn apply_oak(mut vocabulary: VisualVocabulary, request: &ComposeRequest) -> VisualVocabulary {
    let oak = request.oak.modifier();
    vocabulary.texture_surface.oak_overlay = oak.texture_overlay.to_string();
    vocabulary
}

/// Step 5: age overlay - secondary color description, clarity, texture
/// state, integration, and temporal mood
fn apply_age(mut vocabulary: VisualVocabulary, request: &ComposeRequest) -> VisualVocabulary {
    let age = request.age.modifier();
    let category = request.varietal.category();
    vocabulary.base_color.age_modified = age.color_shift_for(category).to_string();
    vocabulary.opacity_clarity.clarity = age.visual_clarity.to_string();
    vocabulary.texture_surface.age_state = age.texture_state.to_string();
    vocabulary.compositional_structure.integration = age.integration.to_string();
    vocabulary.atmospheric_qualities.time_signature = age.time_signature.to_string();
    vocabulary
}

/// Step 6: balance application - tension, weight, finish, numeric echo
fn apply_balance(
    mut vocabulary: VisualVocabulary,
    request: &ComposeRequest,
    reading: &BalanceReading,
) -> VisualVocabulary {
    // Past-prime wines read as thinning regardless of the scored weight
    let mut weight = reading.visual_weight.to_string();
    if request.age == AgeStage::PastPrime {
        weight.push_str(" thinning");
    }
    vocabulary.opacity_clarity.visual_weight = weight;

    vocabulary.compositional_structure.visual_tension = reading.visual_tension.to_string();
    vocabulary.atmospheric_qualities.finish_depth = reading.finish_depth.to_string();
    vocabulary.atmospheric_qualities.fade_pattern = reading.fade_pattern.to_string();

    vocabulary.balance_relationships = BalanceRelationships {
        acidity: reading.acidity,
        tannin: reading.tannin,
        sweetness: reading.sweetness,
        alcohol: reading.alcohol,
        body: reading.body,
        acidity_descriptor: reading.acidity_descriptor.to_string(),
        tannin_descriptor: reading.tannin_descriptor.to_string(),
        sweetness_descriptor: reading.sweetness_descriptor.to_string(),
        alcohol_descriptor: reading.alcohol_descriptor.to_string(),
        body_descriptor: reading.body_descriptor.to_string(),
        structural_descriptor: reading.structural_descriptor.to_string(),
        visual_tension: reading.visual_tension.to_string(),
        visual_weight: reading.visual_weight.to_string(),
    };
    vocabulary
}

/// Step 7: palette derivation
///
/// Insertion order is the contribution order: varietal hue first, then
/// the climate hint, then one color per recognized aroma token, then the
/// oak influence if the regimen tints at all. Exact-token duplicates are
/// dropped. If contributions run below three tokens, the age color shift
/// pads the palette before the cap is applied.
fn derive_palette(mut vocabulary: VisualVocabulary, request: &ComposeRequest) -> VisualVocabulary {
    let profile = request.varietal.profile();
    let mut palette: IndexSet<&str> = IndexSet::new();

    palette.insert(profile.color_hue);
    palette.insert(request.climate.modifier().color_shift);

    for token in &request.balance.primary_aromas {
        if let Some(cluster) = crate::aromas::lookup_aroma(token) {
            palette.insert(cluster.primary_color());
        }
    }

    let oak = request.oak.modifier();
    if oak.tints() {
        palette.insert(oak.color_influence);
    }

    if palette.len() < PALETTE_FLOOR {
        let age = request.age.modifier();
        palette.insert(age.color_shift_for(request.varietal.category()));
    }

    vocabulary.color_palette = palette
        .into_iter()
        .take(PALETTE_CAP)
        .map(str::to_string)
        .collect();
    vocabulary
}
