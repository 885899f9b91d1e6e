// Copyright 2025 Cowboy AI, LLC.

//! Evolution sequences
//!
//! Runs the same parameters through the pipeline once per age stage in
//! canonical chronological order. There is no interpolation between
//! stages: each entry is an independent, fully determined composition,
//! and the "evolution" is purely the juxtaposition of the four results.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compose::compose;
use crate::errors::VocabularyResult;
use crate::keys::AgeStage;
use crate::params::TastingParams;
use crate::vocabulary::VisualVocabulary;

/// One stage of an evolution sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvolutionStage {
    /// The age stage this entry was composed at
    pub age: AgeStage,
    /// The composition at that stage
    pub vocabulary: VisualVocabulary,
}

/// Compose the same wine at all four age stages.
///
/// Any `age` in the supplied parameters is ignored; every other
/// parameter is held constant. Returns exactly four entries in the
/// fixed order youthful, developing, mature, past_prime - the order is
/// meaningful and callers must not reorder it. Each entry equals a
/// direct composition at that stage.
pub fn generate_evolution_sequence(
    params: &TastingParams,
) -> VocabularyResult<[EvolutionStage; 4]> {
    debug!(varietal = %params.varietal, "generating evolution sequence");
    let mut request = params.to_request_with_age(AgeStage::Youthful)?;
    Ok(AgeStage::SEQUENCE.map(|age| {
        request.age = age;
        EvolutionStage {
            age,
            vocabulary: compose(&request),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::compose_visual_vocabulary;

    fn params() -> TastingParams {
        TastingParams {
            varietal: "nebbiolo".to_string(),
            acidity: 8.5,
            tannin: 9.0,
            body: 7.0,
            finish_length: "very_long".to_string(),
            ..TastingParams::default()
        }
    }

    #[test]
    fn sequence_is_four_stages_in_canonical_order() {
        let sequence = generate_evolution_sequence(&params()).unwrap();
        let ages: Vec<_> = sequence.iter().map(|stage| stage.age).collect();
        assert_eq!(ages, AgeStage::SEQUENCE);
    }

    #[test]
    fn each_stage_equals_a_direct_composition() {
        let base = params();
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
    fn the_age_field_in_params_is_ignored() {
        let mut with_age = params();
        with_age.age = "mature".to_string();
        assert_eq!(
            generate_evolution_sequence(&params()).unwrap(),
            generate_evolution_sequence(&with_age).unwrap()
        );
    }

    #[test]
    fn unknown_varietal_fails_the_whole_sequence() {
        let mut bad = params();
        bad.varietal = "syrah_shiraz_typo".to_string();
        assert!(generate_evolution_sequence(&bad).is_err());
    }
}
