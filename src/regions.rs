// Copyright 2025 Cowboy AI, LLC.

//! Regional presets
//!
//! Each classic region maps to a complete parameter set describing its
//! typical wine. Resolution is a lookup plus one pipeline call; an
//! unrecognized region propagates `UnknownKey` unchanged.

use std::str::FromStr;

use tracing::debug;

use crate::errors::VocabularyResult;
use crate::keys::Region;
use crate::params::{compose_visual_vocabulary, TastingParams};
use crate::vocabulary::VisualVocabulary;

impl Region {
    /// The preset parameter profile for this region's typical wine
    pub fn preset(&self) -> TastingParams {
        match self {
            Region::BurgundyRed => TastingParams {
                varietal: "pinot_noir".to_string(),
                climate: "cool".to_string(),
                winemaking_style: "old_world".to_string(),
                oak_treatment: "french_oak".to_string(),
                age: "developing".to_string(),
                acidity: 7.5,
                tannin: 6.0,
                sweetness: 2.0,
                alcohol: 6.5,
                body: 5.5,
                finish_length: "long".to_string(),
                primary_aromas: vec![
                    "cherry".to_string(),
                    "mushroom".to_string(),
                    "rose".to_string(),
                ],
            },
            Region::BurgundyWhite => TastingParams {
                varietal: "chardonnay".to_string(),
                climate: "cool".to_string(),
                winemaking_style: "old_world".to_string(),
                oak_treatment: "french_oak".to_string(),
                age: "developing".to_string(),
                acidity: 7.0,
                tannin: 0.0,
                sweetness: 2.0,
                alcohol: 6.5,
                body: 7.0,
                finish_length: "long".to_string(),
                primary_aromas: vec![
                    "apple".to_string(),
                    "hazelnut".to_string(),
                    "toast".to_string(),
                ],
            },
            Region::NapaCabernet => TastingParams {
                varietal: "cabernet_sauvignon".to_string(),
                climate: "warm".to_string(),
                winemaking_style: "new_world".to_string(),
                oak_treatment: "american_oak".to_string(),
                age: "youthful".to_string(),
                acidity: 5.5,
                tannin: 8.5,
                sweetness: 2.5,
                alcohol: 8.5,
                body: 9.0,
                finish_length: "very_long".to_string(),
                primary_aromas: vec![
                    "blackcurrant".to_string(),
                    "vanilla".to_string(),
                    "cedar".to_string(),
                ],
            },
            Region::RiojaTempranillo => TastingParams {
                varietal: "tempranillo".to_string(),
                climate: "moderate".to_string(),
                winemaking_style: "old_world".to_string(),
                oak_treatment: "american_oak".to_string(),
                age: "mature".to_string(),
                acidity: 6.0,
                tannin: 6.5,
                sweetness: 2.0,
                alcohol: 6.5,
                body: 6.5,
                finish_length: "medium".to_string(),
                primary_aromas: vec![
                    "cherry".to_string(),
                    "leather".to_string(),
                    "vanilla".to_string(),
                    "dried_herbs".to_string(),
                ],
            },
            Region::MoselRiesling => TastingParams {
                varietal: "riesling".to_string(),
                climate: "cool".to_string(),
                winemaking_style: "old_world".to_string(),
                oak_treatment: "none".to_string(),
                age: "youthful".to_string(),
                acidity: 9.0,
                tannin: 0.0,
                sweetness: 4.0,
                alcohol: 4.5,
                body: 4.0,
                finish_length: "long".to_string(),
                primary_aromas: vec![
                    "lime".to_string(),
                    "slate".to_string(),
                    "petrol".to_string(),
                ],
            },
            Region::Barolo => TastingParams {
                varietal: "nebbiolo".to_string(),
                climate: "moderate".to_string(),
                winemaking_style: "old_world".to_string(),
                oak_treatment: "neutral".to_string(),
                age: "mature".to_string(),
                acidity: 8.5,
                tannin: 9.0,
                sweetness: 1.5,
                alcohol: 7.5,
                body: 7.0,
                finish_length: "very_long".to_string(),
                primary_aromas: vec![
                    "rose".to_string(),
                    "tar".to_string(),
                    "truffle".to_string(),
                    "dried_cherry".to_string(),
                ],
            },
            Region::RhoneSyrah => TastingParams {
                varietal: "syrah".to_string(),
                climate: "moderate".to_string(),
                winemaking_style: "old_world".to_string(),
                oak_treatment: "french_oak".to_string(),
                age: "developing".to_string(),
                acidity: 6.0,
                tannin: 7.5,
                sweetness: 2.0,
                alcohol: 7.0,
                body: 8.0,
                finish_length: "long".to_string(),
                primary_aromas: vec![
                    "blackberry".to_string(),
                    "pepper".to_string(),
                    "smoke".to_string(),
                ],
            },
            Region::MarlboroughSauvignon => TastingParams {
                varietal: "sauvignon_blanc".to_string(),
                climate: "cool".to_string(),
                winemaking_style: "new_world".to_string(),
                oak_treatment: "none".to_string(),
                age: "youthful".to_string(),
                acidity: 8.5,
                tannin: 0.0,
                sweetness: 1.5,
                alcohol: 6.0,
                body: 5.0,
                finish_length: "medium".to_string(),
                primary_aromas: vec![
                    "grapefruit".to_string(),
                    "grass".to_string(),
                    "gooseberry".to_string(),
                ],
            },
        }
    }
}

/// Resolve a region key to a fully composed visual vocabulary.
///
/// Looks up the region's preset parameters and runs one pipeline call.
/// Fails with `UnknownKey { catalog: "region", .. }` for an unrecognized
/// key; the error propagates unchanged.
pub fn resolve_regional_preset(region: &str) -> VocabularyResult<VisualVocabulary> {
    let region = Region::from_str(region)?;
    debug!(region = %region, "resolving regional preset");
    compose_visual_vocabulary(&region.preset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VocabularyError;

    #[test]
    fn every_preset_resolves() {
        for region in Region::ALL {
            let vocabulary = resolve_regional_preset(region.as_str());
            assert!(vocabulary.is_ok(), "{region}");
        }
    }

    #[test]
    fn unknown_region_propagates_unchanged() {
        let err = resolve_regional_preset("atlantis").unwrap_err();
        assert_eq!(err, VocabularyError::unknown_key("region", "atlantis"));
    }

    #[test]
    fn barolo_preset_matches_the_pipeline_directly() {
        let via_region = resolve_regional_preset("barolo").unwrap();
        let via_params = compose_visual_vocabulary(&Region::Barolo.preset()).unwrap();
        assert_eq!(via_region, via_params);
        assert_eq!(via_region.base_color.hue, "#9B4F47");
    }

    #[test]
    fn white_presets_neutralize_their_zero_tannin() {
        // Mosel's preset scores tannin at 0.0; whites echo the neutral
        // midpoint instead
        let vocabulary = resolve_regional_preset("mosel_riesling").unwrap();
        assert_eq!(vocabulary.balance_relationships.tannin, 5.0);
    }
}
