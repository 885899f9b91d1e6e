// Copyright 2025 Cowboy AI, LLC.

//! Balance interpretation
//!
//! Maps the five numeric tasting scores into discrete qualitative
//! descriptors. The mapping is bucketed, not interpolated: each score
//! falls into one of three bands with a fixed phrase per parameter. The
//! band thresholds (3.9 / 7.0) and phrases are policy - stable, quotable
//! vocabulary matters more than smoothness here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::keys::{FinishLength, WineCategory};

/// Neutral midpoint of the 1-10 scoring scale
pub const NEUTRAL_SCORE: f64 = 5.0;

/// The five numeric tasting scores plus finish and aroma inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BalanceInputs {
    /// Acid level, 1-10
    pub acidity: f64,
    /// Tannin level, 1-10; only meaningful for red-category varietals
    pub tannin: f64,
    /// Sugar level, 1-10
    pub sweetness: f64,
    /// Alcohol level, 1-10
    pub alcohol: f64,
    /// Body weight, 1-10
    pub body: f64,
    /// Persistence of the finish
    pub finish_length: FinishLength,
    /// Free-text aroma tokens; unmatched tokens contribute nothing
    pub primary_aromas: Vec<String>,
}

/// Qualitative band for a 1-10 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// Score at or below 3.9
    Low,
    /// Score from 4.0 up to (not including) 7.0
    Mid,
    /// Score at or above 7.0
    High,
}

impl Band {
    /// Bucket a clamped score into its band
    pub fn of(score: f64) -> Band {
        if score >= 7.0 {
            Band::High
        } else if score >= 4.0 {
            Band::Mid
        } else {
            Band::Low
        }
    }
}

/// Clamp a raw score to the 1-10 scale.
///
/// Out-of-range input degrades gracefully to the nearest bound rather
/// than failing; NaN falls back to the neutral midpoint.
pub fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() {
        NEUTRAL_SCORE
    } else {
        raw.clamp(1.0, 10.0)
    }
}

fn acidity_phrase(band: Band) -> &'static str {
    match band {
        Band::Low => "soft round gentle",
        Band::Mid => "balanced fresh lively",
        Band::High => "angular bright tense",
    }
}

fn tannin_phrase(band: Band) -> &'static str {
    match band {
        Band::Low => "supple loose pliant",
        Band::Mid => "firm present structured",
        Band::High => "grippy muscular rigid",
    }
}

fn sweetness_phrase(band: Band) -> &'static str {
    match band {
        Band::Low => "dry spare austere",
        Band::Mid => "off-dry rounded supple",
        Band::High => "rich honeyed opulent",
    }
}

fn alcohol_phrase(band: Band) -> &'static str {
    match band {
        Band::Low => "cool quiet restrained",
        Band::Mid => "warm even balanced",
        Band::High => "heady glowing expansive",
    }
}

fn body_phrase(band: Band) -> &'static str {
    match band {
        Band::Low => "light ethereal transparent",
        Band::Mid => "medium substantial poised",
        Band::High => "full dense weighty",
    }
}

fn tension_phrase(band: Band) -> &'static str {
    match band {
        Band::Low => "low soft relaxed",
        Band::Mid => "medium balanced",
        Band::High => "high angular taut",
    }
}

fn weight_phrase(band: Band) -> &'static str {
    match band {
        Band::Low => "light ethereal transparent",
        Band::Mid => "medium substantial",
        Band::High => "full dense heavy opaque",
    }
}

/// Fully interpreted balance bundle
///
/// Carries the clamped numeric echo alongside every derived descriptor.
/// For white-category varietals the tannin input has already been
/// neutralized; nothing downstream can observe the caller's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceReading {
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
    pub acidity_descriptor: &'static str,
    /// Band phrase for tannin
    pub tannin_descriptor: &'static str,
    /// Band phrase for sweetness
    pub sweetness_descriptor: &'static str,
    /// Band phrase for alcohol
    pub alcohol_descriptor: &'static str,
    /// Band phrase for body
    pub body_descriptor: &'static str,
    /// Phrase for the dominant structural element
    pub structural_descriptor: &'static str,
    /// Derived visual tension
    pub visual_tension: &'static str,
    /// Derived visual weight
    pub visual_weight: &'static str,
    /// Atmospheric depth implied by the finish
    pub finish_depth: &'static str,
    /// Fade pattern of the finish
    pub fade_pattern: &'static str,
}

/// Interpret balance inputs for a varietal of the given category.
///
/// Coherence rule: tannin is forced to the neutral midpoint for
/// white-category varietals before any derivation. Tannin scoring on
/// whites is not visually meaningful and must not leak into output;
/// this asymmetry is deliberate.
pub fn interpret(inputs: &BalanceInputs, category: WineCategory) -> BalanceReading {
    let acidity = clamp_score(inputs.acidity);
    let tannin = match category {
        WineCategory::Red => clamp_score(inputs.tannin),
        WineCategory::White => NEUTRAL_SCORE,
    };
    let sweetness = clamp_score(inputs.sweetness);
    let alcohol = clamp_score(inputs.alcohol);
    let body = clamp_score(inputs.body);

    // Tension follows the dominant structural driver. Whites have no
    // meaningful tannin, so acid carries their structure alone.
    let tension_driver = match category {
        WineCategory::Red => acidity.max(tannin),
        WineCategory::White => acidity,
    };
    let structural_descriptor = match category {
        WineCategory::Red => tannin_phrase(Band::of(tannin)),
        WineCategory::White => acidity_phrase(Band::of(acidity)),
    };

    // Weight averages body and alcohol, so its band can never run more
    // than one step past the body band.
    let weight_driver = (body + alcohol) / 2.0;

    let finish = inputs.finish_length.profile();

    BalanceReading {
        acidity,
        tannin,
        sweetness,
        alcohol,
        body,
        acidity_descriptor: acidity_phrase(Band::of(acidity)),
        tannin_descriptor: tannin_phrase(Band::of(tannin)),
        sweetness_descriptor: sweetness_phrase(Band::of(sweetness)),
        alcohol_descriptor: alcohol_phrase(Band::of(alcohol)),
        body_descriptor: body_phrase(Band::of(body)),
        structural_descriptor,
        visual_tension: tension_phrase(Band::of(tension_driver)),
        visual_weight: weight_phrase(Band::of(weight_driver)),
        finish_depth: finish.atmospheric_depth,
        fade_pattern: finish.fade_pattern,
    }
}
