// Copyright 2025 Cowboy AI, LLC.

//! Property tests for the balance interpreter and pipeline purity

use proptest::prelude::*;
use vinovocab::{clamp_score, compose_visual_vocabulary, TastingParams, Varietal, WineCategory};

fn arbitrary_score() -> impl Strategy<Value = f64> {
    // Deliberately wider than the 1-10 scale to exercise clamping
    -5.0f64..25.0
}

fn arbitrary_params(varietal: &'static str) -> impl Strategy<Value = TastingParams> {
    (
        arbitrary_score(),
        arbitrary_score(),
        arbitrary_score(),
        arbitrary_score(),
        arbitrary_score(),
    )
        .prop_map(move |(acidity, tannin, sweetness, alcohol, body)| TastingParams {
            varietal: varietal.to_string(),
            acidity,
            tannin,
            sweetness,
            alcohol,
            body,
            ..TastingParams::default()
        })
}

proptest! {
    /// Identical parameters always produce identical records
    #[test]
    fn compose_is_a_pure_function(params in arbitrary_params("sangiovese")) {
        let a = compose_visual_vocabulary(&params).unwrap();
        let b = compose_visual_vocabulary(&params).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Clamped scores always land on the 1-10 scale
    #[test]
    fn clamping_stays_on_scale(raw in -1000.0f64..1000.0) {
        let clamped = clamp_score(raw);
        prop_assert!((1.0..=10.0).contains(&clamped));
    }

    /// The echoed scores in the output are always the clamped inputs
    #[test]
    fn output_echoes_clamped_scores(params in arbitrary_params("malbec")) {
        let vocabulary = compose_visual_vocabulary(&params).unwrap();
        let balance = &vocabulary.balance_relationships;
        prop_assert_eq!(balance.acidity, clamp_score(params.acidity));
        prop_assert_eq!(balance.tannin, clamp_score(params.tannin));
        prop_assert_eq!(balance.body, clamp_score(params.body));
    }

    /// Varying tannin across any range never changes a white's output
    #[test]
    fn tannin_never_leaks_into_whites(tannin_a in arbitrary_score(), tannin_b in arbitrary_score()) {
        for varietal in Varietal::ALL {
            if varietal.category() != WineCategory::White {
                continue;
            }
            let mut a = TastingParams {
                varietal: varietal.as_str().to_string(),
                ..TastingParams::default()
            };
            let mut b = a.clone();
            a.tannin = tannin_a;
            b.tannin = tannin_b;
            prop_assert_eq!(
                compose_visual_vocabulary(&a).unwrap(),
                compose_visual_vocabulary(&b).unwrap()
            );
        }
    }

    /// The palette always starts with the varietal hue and stays in 3..=5
    #[test]
    fn palette_bounds_hold_everywhere(params in arbitrary_params("grenache")) {
        let vocabulary = compose_visual_vocabulary(&params).unwrap();
        prop_assert!(vocabulary.color_palette.len() >= 3);
        prop_assert!(vocabulary.color_palette.len() <= 5);
        prop_assert_eq!(vocabulary.color_palette[0].as_str(), "#A52A2A");
    }
}
