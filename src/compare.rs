// Copyright 2025 Cowboy AI, LLC.

//! Profile comparison
//!
//! Composes two parameter sets independently and produces a read-only,
//! attribute-group-by-group diff. The contrast phrases come from a small
//! fixed rule set - hue equality, opacity delta sign, texture keyword
//! overlap - so the diff is as deterministic as the compositions it
//! wraps.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::VocabularyResult;
use crate::params::{compose_visual_vocabulary, TastingParams};
use crate::vocabulary::{
    AtmosphericQualities, BalanceRelationships, BaseColor, CompositionalStructure,
    OpacityClarity, TextureSurface, VisualVocabulary,
};

/// A pair of values for the same attribute group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValuePair<T> {
    /// Value from the first profile
    pub wine1: T,
    /// Value from the second profile
    pub wine2: T,
}

/// A pair of values plus a contrast phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GroupContrast<T> {
    /// Value from the first profile
    pub wine1: T,
    /// Value from the second profile
    pub wine2: T,
    /// Fixed-rule contrast phrase
    pub contrast: String,
}

/// Attribute-wise diff of two independently composed profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProfileDiff {
    /// Base color pair; "significant" when the hues differ
    pub color_contrast: GroupContrast<BaseColor>,
    /// Opacity pair; phrase follows the opacity delta sign
    pub opacity_contrast: GroupContrast<OpacityClarity>,
    /// Texture pair; phrase follows keyword overlap
    pub texture_contrast: GroupContrast<TextureSurface>,
    /// Compositional structure pair
    pub compositional_contrast: ValuePair<CompositionalStructure>,
    /// Atmospheric qualities pair
    pub atmospheric_contrast: ValuePair<AtmosphericQualities>,
    /// Balance pair; phrase follows tension equality
    pub balance_contrast: GroupContrast<BalanceRelationships>,
}

fn color_phrase(a: &BaseColor, b: &BaseColor) -> &'static str {
    if a.hue == b.hue {
        "subtle"
    } else {
        "significant"
    }
}

fn opacity_phrase(a: &OpacityClarity, b: &OpacityClarity) -> &'static str {
    if a.base_opacity > b.base_opacity {
        "wine1 reads denser and more opaque"
    } else if a.base_opacity < b.base_opacity {
        "wine2 reads denser and more opaque"
    } else {
        "evenly matched opacity"
    }
}

fn texture_keywords(texture: &TextureSurface) -> BTreeSet<&str> {
    texture
        .base_texture
        .split_whitespace()
        .chain(texture.structure.split_whitespace())
        .collect()
}

fn texture_phrase(a: &TextureSurface, b: &TextureSurface) -> &'static str {
    let shared = texture_keywords(a)
        .intersection(&texture_keywords(b))
        .count();
    if shared > 0 {
        "overlapping texture vocabulary"
    } else {
        "disjoint texture character"
    }
}

fn balance_phrase(a: &BalanceRelationships, b: &BalanceRelationships) -> &'static str {
    if a.visual_tension == b.visual_tension {
        "matched structural tension"
    } else {
        "contrasting structural tension"
    }
}

/// Diff two already-composed vocabularies
fn diff(a: VisualVocabulary, b: VisualVocabulary) -> ProfileDiff {
    ProfileDiff {
        color_contrast: GroupContrast {
            contrast: color_phrase(&a.base_color, &b.base_color).to_string(),
            wine1: a.base_color,
            wine2: b.base_color,
        },
        opacity_contrast: GroupContrast {
            contrast: opacity_phrase(&a.opacity_clarity, &b.opacity_clarity).to_string(),
            wine1: a.opacity_clarity,
            wine2: b.opacity_clarity,
        },
        texture_contrast: GroupContrast {
            contrast: texture_phrase(&a.texture_surface, &b.texture_surface).to_string(),
            wine1: a.texture_surface,
            wine2: b.texture_surface,
        },
        compositional_contrast: ValuePair {
            wine1: a.compositional_structure,
            wine2: b.compositional_structure,
        },
        atmospheric_contrast: ValuePair {
            wine1: a.atmospheric_qualities,
            wine2: b.atmospheric_qualities,
        },
        balance_contrast: GroupContrast {
            contrast: balance_phrase(&a.balance_relationships, &b.balance_relationships)
                .to_string(),
            wine1: a.balance_relationships,
            wine2: b.balance_relationships,
        },
    }
}

/// Compare two tasting profiles visually.
///
/// Both profiles are composed independently - no shared state - and the
/// diff only reads the two finished records. An unknown key in either
/// parameter set fails the whole comparison.
pub fn compare_profiles(
    params_a: &TastingParams,
    params_b: &TastingParams,
) -> VocabularyResult<ProfileDiff> {
    debug!(
        wine1 = %params_a.varietal,
        wine2 = %params_b.varietal,
        "comparing profiles"
    );
    let vocabulary_a = compose_visual_vocabulary(params_a)?;
    let vocabulary_b = compose_visual_vocabulary(params_b)?;
    Ok(diff(vocabulary_a, vocabulary_b))
}
