// Copyright 2025 Cowboy AI, LLC.

//! End-to-end tests for the composition pipeline

use pretty_assertions::assert_eq;
use vinovocab::{
    compose_visual_vocabulary, TastingParams, Varietal, VocabularyError,
};

fn burgundy_pinot() -> TastingParams {
    TastingParams {
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
    }
}

#[test]
fn cool_climate_pinot_composes_end_to_end() {
    let vocabulary = compose_visual_vocabulary(&burgundy_pinot()).unwrap();

    // Varietal identity survives untouched
    assert_eq!(vocabulary.base_color.hue, "#8B2635");
    assert_eq!(vocabulary.base_color.description, "ruby translucent");
    assert_eq!(vocabulary.texture_surface.base_texture, "delicate silky");

    // Layer contributions land in their own fields
    assert_eq!(vocabulary.base_color.climate_shift, "lighter brighter");
    assert_eq!(vocabulary.base_color.age_modified, "garnet ruby-brick");
    assert_eq!(vocabulary.texture_surface.oak_overlay, "silky refined spice");
    assert_eq!(
        vocabulary.atmospheric_qualities.style_atmosphere,
        "cool stone cellar ancient"
    );
    assert_eq!(
        vocabulary.atmospheric_qualities.finish_depth,
        "deep receding distant"
    );

    // Acidity 7.5 sits in the high band, so tension reflects high
    assert_eq!(
        vocabulary.compositional_structure.visual_tension,
        "high angular taut"
    );
    assert_eq!(
        vocabulary.balance_relationships.acidity_descriptor,
        "angular bright tense"
    );

    // Palette: hue first, at most five tokens
    assert!(vocabulary.color_palette.len() <= 5);
    assert!(vocabulary.color_palette.len() >= 3);
    assert_eq!(vocabulary.color_palette[0], "#8B2635");
    // cherry, mushroom, and rose all resolve to cluster colors
    assert!(vocabulary.color_palette.contains(&"#DC143C".to_string()));
    assert!(vocabulary.color_palette.contains(&"#3E2723".to_string()));
    assert!(vocabulary.color_palette.contains(&"#FFB6C1".to_string()));
}

#[test]
fn identical_parameters_produce_byte_identical_output() {
    let a = compose_visual_vocabulary(&burgundy_pinot()).unwrap();
    let b = compose_visual_vocabulary(&burgundy_pinot()).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_vec(&a).unwrap(),
        serde_json::to_vec(&b).unwrap()
    );
}

#[test]
fn out_of_range_scores_clamp_to_the_nearest_bound() {
    let mut fifteen = burgundy_pinot();
    fifteen.acidity = 15.0;
    let mut ten = burgundy_pinot();
    ten.acidity = 10.0;
    assert_eq!(
        compose_visual_vocabulary(&fifteen).unwrap(),
        compose_visual_vocabulary(&ten).unwrap()
    );

    let mut below = burgundy_pinot();
    below.acidity = -2.0;
    let mut one = burgundy_pinot();
    one.acidity = 1.0;
    assert_eq!(
        compose_visual_vocabulary(&below).unwrap(),
        compose_visual_vocabulary(&one).unwrap()
    );
}

#[test]
fn unknown_varietal_raises_unknown_key() {
    let mut typo = burgundy_pinot();
    typo.varietal = "syrah_shiraz_typo".to_string();
    let err = compose_visual_vocabulary(&typo).unwrap_err();
    assert_eq!(
        err,
        VocabularyError::UnknownKey {
            catalog: "varietal",
            key: "syrah_shiraz_typo".to_string(),
        }
    );
}

#[test]
fn identity_preservation_holds_for_every_varietal() {
    for varietal in Varietal::ALL {
        let params = TastingParams {
            varietal: varietal.as_str().to_string(),
            climate: "hot".to_string(),
            oak_treatment: "american_oak".to_string(),
            age: "past_prime".to_string(),
            ..TastingParams::default()
        };
        let vocabulary = compose_visual_vocabulary(&params).unwrap();
        let profile = varietal.profile();
        assert_eq!(vocabulary.base_color.hue, profile.color_hue, "{varietal}");
        assert_eq!(
            vocabulary.texture_surface.base_texture, profile.texture,
            "{varietal}"
        );
        assert_eq!(vocabulary.color_palette[0], profile.color_hue, "{varietal}");
    }
}

#[test]
fn tannin_does_not_leak_into_white_output() {
    for tannin in [1.0, 3.0, 5.0, 7.5, 10.0, 42.0] {
        let params = TastingParams {
            varietal: "riesling".to_string(),
            tannin,
            ..TastingParams::default()
        };
        let baseline = TastingParams {
            varietal: "riesling".to_string(),
            tannin: 5.0,
            ..TastingParams::default()
        };
        assert_eq!(
            compose_visual_vocabulary(&params).unwrap(),
            compose_visual_vocabulary(&baseline).unwrap(),
            "tannin {tannin} changed white output"
        );
    }
}
