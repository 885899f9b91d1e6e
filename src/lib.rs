// Copyright 2025 Cowboy AI, LLC.

//! # Vinovocab
//!
//! Translates structured wine-tasting parameters into a visual
//! vocabulary for image generation: a varietal's base identity, layered
//! with climate, winemaking style, oak, and age overlays, interpreted
//! through the five numeric balance scores, and finished with a derived
//! color palette.
//!
//! The crate provides:
//! - **Attribute catalogs**: static varietal, climate, style, oak, age,
//!   finish, aroma-cluster, and region tables behind exhaustive-match
//!   lookups
//! - **Balance interpretation**: bucketed numeric-to-qualitative mapping
//!   with coherence rules (tannin is ignored for whites)
//! - **Composition pipeline**: a fixed ordered sequence of pure overlay
//!   steps producing one [`VisualVocabulary`] record
//! - **Derived operations**: regional presets, four-stage evolution
//!   sequences, and pairwise profile comparison
//!
//! ## Design Principles
//!
//! 1. **Purity**: every operation is a synchronous function of its
//!    inputs; identical arguments produce identical records
//! 2. **Closed vocabularies**: catalog keys are enums, so a valid key
//!    can never miss and coverage is checked at compile time
//! 3. **Layered overlay, never overwrite**: later layers refine, they do
//!    not erase the varietal's identity fields
//! 4. **Graceful degradation**: numeric scores clamp to the 1-10 scale
//!    and unmatched aroma tokens are silently dropped - only unknown
//!    closed-catalog keys are errors
//! 5. **Stable output shape**: the composed record's field names and
//!    nesting are a downstream contract

#![warn(missing_docs)]

mod aromas;
mod balance;
mod compare;
mod compose;
mod errors;
mod evolution;
mod keys;
mod modifiers;
mod params;
mod regions;
mod varietals;
mod vocabulary;

// Catalog keys and reference data
pub use aromas::{list_aroma_clusters, lookup_aroma, AromaCluster, AROMA_CLUSTERS};
pub use keys::{
    AgeStage, Climate, FinishLength, OakTreatment, Region, Varietal, WineCategory,
    WinemakingStyle,
};
pub use modifiers::{AgeModifier, ClimateModifier, FinishProfile, OakModifier, StyleModifier};
pub use varietals::{list_varietals, VarietalProfile, VarietalSummary};

// Balance interpretation
pub use balance::{clamp_score, interpret, BalanceInputs, BalanceReading, Band, NEUTRAL_SCORE};

// Composition pipeline and output record
pub use compose::{compose, ComposeRequest};
pub use vocabulary::{
    AtmosphericQualities, BalanceRelationships, BaseColor, CompositionalStructure,
    OpacityClarity, TextureSurface, VisualVocabulary,
};

// External operations
pub use compare::{compare_profiles, GroupContrast, ProfileDiff, ValuePair};
pub use evolution::{generate_evolution_sequence, EvolutionStage};
pub use params::{compose_visual_vocabulary, TastingParams};
pub use regions::resolve_regional_preset;

// Errors
pub use errors::{VocabularyError, VocabularyResult};
