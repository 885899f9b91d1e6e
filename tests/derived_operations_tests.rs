// Copyright 2025 Cowboy AI, LLC.

//! Tests for the operations layered on top of the pipeline

use pretty_assertions::assert_eq;
use vinovocab::{
    compare_profiles, compose_visual_vocabulary, generate_evolution_sequence,
    list_aroma_clusters, list_varietals, resolve_regional_preset, AgeStage, Region,
    TastingParams, Varietal, VocabularyError,
};

#[test]
fn regional_preset_equals_its_expanded_parameters() {
    let via_region = resolve_regional_preset("burgundy_red").unwrap();
    let via_params = compose_visual_vocabulary(&Region::BurgundyRed.preset()).unwrap();
    assert_eq!(via_region, via_params);
    assert_eq!(via_region.base_color.hue, "#8B2635");
}

#[test]
fn all_eight_regions_resolve() {
    for region in Region::ALL {
        assert!(resolve_regional_preset(region.as_str()).is_ok(), "{region}");
    }
}

#[test]
fn unknown_region_is_propagated_not_swallowed() {
    let err = resolve_regional_preset("middle_earth").unwrap_err();
    assert_eq!(
        err,
        VocabularyError::UnknownKey {
            catalog: "region",
            key: "middle_earth".to_string(),
        }
    );
}

fn rhone_syrah() -> TastingParams {
    TastingParams {
        varietal: "syrah".to_string(),
        acidity: 6.0,
        tannin: 7.5,
        alcohol: 7.0,
        body: 8.0,
        finish_length: "long".to_string(),
        ..TastingParams::default()
    }
}

#[test]
fn evolution_sequence_is_exactly_four_canonical_stages() {
    let sequence = generate_evolution_sequence(&rhone_syrah()).unwrap();
    assert_eq!(sequence.len(), 4);
    let ages: Vec<_> = sequence.iter().map(|stage| stage.age).collect();
    assert_eq!(
        ages,
        [
            AgeStage::Youthful,
            AgeStage::Developing,
            AgeStage::Mature,
            AgeStage::PastPrime,
        ]
    );
}

#[test]
fn evolution_stages_match_direct_composition() {
    let base = rhone_syrah();
    let sequence = generate_evolution_sequence(&base).unwrap();
    for stage in &sequence {
        let direct = compose_visual_vocabulary(&TastingParams {
            age: stage.age.as_str().to_string(),
            ..base.clone()
        })
        .unwrap();
        assert_eq!(stage.vocabulary, direct, "{}", stage.age);
    }
}

#[test]
fn evolution_color_story_moves_from_primary_to_fading() {
    let sequence = generate_evolution_sequence(&rhone_syrah()).unwrap();
    assert_eq!(sequence[0].vocabulary.base_color.age_modified, "purple ruby");
    assert_eq!(
        sequence[3].vocabulary.base_color.age_modified,
        "brown tawny brick-brown"
    );
    // Only the past-prime stage reads as thinning
    assert!(!sequence[0]
        .vocabulary
        .opacity_clarity
        .visual_weight
        .contains("thinning"));
    assert!(sequence[3]
        .vocabulary
        .opacity_clarity
        .visual_weight
        .contains("thinning"));
}

#[test]
fn comparison_composes_both_sides_independently() {
    let mosel = Region::MoselRiesling.preset();
    let napa = Region::NapaCabernet.preset();

    let result = compare_profiles(&mosel, &napa).unwrap();
    assert_eq!(
        result.color_contrast.wine1,
        compose_visual_vocabulary(&mosel).unwrap().base_color
    );
    assert_eq!(
        result.color_contrast.wine2,
        compose_visual_vocabulary(&napa).unwrap().base_color
    );
    assert_eq!(result.color_contrast.contrast, "significant");
}

#[test]
fn comparison_swaps_slots_without_changing_values() {
    let mosel = Region::MoselRiesling.preset();
    let napa = Region::NapaCabernet.preset();

    let forward = compare_profiles(&mosel, &napa).unwrap();
    let reverse = compare_profiles(&napa, &mosel).unwrap();
    assert_eq!(forward.texture_contrast.wine1, reverse.texture_contrast.wine2);
    assert_eq!(forward.texture_contrast.wine2, reverse.texture_contrast.wine1);
    assert_eq!(forward.balance_contrast.wine1, reverse.balance_contrast.wine2);
    assert_eq!(forward.balance_contrast.wine2, reverse.balance_contrast.wine1);
}

#[test]
fn catalog_listings_never_fail_and_cover_the_catalogs() {
    let varietals = list_varietals();
    assert_eq!(varietals.len(), Varietal::ALL.len());
    assert!(varietals.iter().any(|summary| summary.varietal == Varietal::Albarino));

    let clusters = list_aroma_clusters();
    assert_eq!(clusters.len(), 10);
    assert!(clusters.iter().any(|cluster| cluster.name == "oak_spice"));
}
