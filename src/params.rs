// Copyright 2025 Cowboy AI, LLC.

//! String-keyed tasting parameters
//!
//! The host hands over free-form strings; this module is the boundary
//! where they become typed keys. Every `UnknownKey` in the crate
//! originates here or in the region resolver.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::balance::BalanceInputs;
use crate::compose::{compose, ComposeRequest};
use crate::errors::VocabularyResult;
use crate::keys::{AgeStage, Climate, FinishLength, OakTreatment, Varietal, WinemakingStyle};
use crate::vocabulary::VisualVocabulary;

/// Raw tasting parameters as supplied by the host
///
/// All string keys; numeric scores on the 1-10 scale. Defaults mirror a
/// typical developing old-world profile so partial presets deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TastingParams {
    /// Grape variety key (required in practice; no meaningful default)
    pub varietal: String,
    /// Growing climate key
    pub climate: String,
    /// Winemaking style key
    pub winemaking_style: String,
    /// Oak treatment key
    pub oak_treatment: String,
    /// Age stage key
    pub age: String,
    /// Acid level, 1-10
    pub acidity: f64,
    /// Tannin level, 1-10 (ignored for whites)
    pub tannin: f64,
    /// Sugar level, 1-10
    pub sweetness: f64,
    /// Alcohol level, 1-10
    pub alcohol: f64,
    /// Body weight, 1-10
    pub body: f64,
    /// Finish length key
    pub finish_length: String,
    /// Free-text aroma tokens
    pub primary_aromas: Vec<String>,
}

impl Default for TastingParams {
    fn default() -> Self {
        TastingParams {
            varietal: String::new(),
            climate: "moderate".to_string(),
            winemaking_style: "old_world".to_string(),
            oak_treatment: "french_oak".to_string(),
            age: "developing".to_string(),
            acidity: 5.0,
            tannin: 5.0,
            sweetness: 2.0,
            alcohol: 6.0,
            body: 6.0,
            finish_length: "medium".to_string(),
            primary_aromas: Vec::new(),
        }
    }
}

impl TastingParams {
    /// Parse every key and build a typed request.
    ///
    /// The first unknown key aborts the whole parse; no partial request
    /// is ever produced.
    pub fn to_request(&self) -> VocabularyResult<ComposeRequest> {
        let age = AgeStage::from_str(&self.age)?;
        self.to_request_with_age(age)
    }

    /// Parse every key except `age`, which is supplied by the caller.
    ///
    /// Evolution sequences use this to hold all other parameters
    /// constant while sweeping the age stages.
    pub fn to_request_with_age(&self, age: AgeStage) -> VocabularyResult<ComposeRequest> {
        Ok(ComposeRequest {
            varietal: Varietal::from_str(&self.varietal)?,
            climate: Climate::from_str(&self.climate)?,
            style: WinemakingStyle::from_str(&self.winemaking_style)?,
            oak: OakTreatment::from_str(&self.oak_treatment)?,
            age,
            balance: BalanceInputs {
                acidity: self.acidity,
                tannin: self.tannin,
                sweetness: self.sweetness,
                alcohol: self.alcohol,
                body: self.body,
                // An unrecognized finish length degrades to the medium
                // profile rather than failing, like the numeric clamps
                finish_length: FinishLength::from_str(&self.finish_length)
                    .unwrap_or(FinishLength::Medium),
                primary_aromas: self.primary_aromas.clone(),
            },
        })
    }
}

/// Compose a complete visual vocabulary from string-keyed parameters.
///
/// The primary external operation. Fails with `UnknownKey` before any
/// output is produced when a closed-catalog key (varietal, climate,
/// winemaking style, oak treatment, age) does not parse. Numeric scores
/// are clamped and an unrecognized finish length reads as medium -
/// never rejected.
pub fn compose_visual_vocabulary(params: &TastingParams) -> VocabularyResult<VisualVocabulary> {
    let request = params.to_request()?;
    Ok(compose(&request))
}
