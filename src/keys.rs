// Copyright 2025 Cowboy AI, LLC.

//! Closed key enums for every catalog dimension
//!
//! Each dimension of a tasting profile draws from a small, closed
//! vocabulary. Modeling the vocabularies as enums gives exhaustive-match
//! catalog lookups: adding a variant without catalog data is a compile
//! error, and a valid key can never miss at runtime. String keys from the
//! host cross into the typed world through `FromStr`, which is the only
//! place `UnknownKey` can arise.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::VocabularyError;

/// Broad color category of a varietal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WineCategory {
    /// Red grape varieties
    Red,
    /// White grape varieties
    White,
}

/// Grape variety - the base identity layer of a visual profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Varietal {
    // Red varietals
    /// Pinot Noir
    PinotNoir,
    /// Cabernet Sauvignon
    CabernetSauvignon,
    /// Merlot
    Merlot,
    /// Syrah
    Syrah,
    /// Grenache
    Grenache,
    /// Nebbiolo
    Nebbiolo,
    /// Sangiovese
    Sangiovese,
    /// Tempranillo
    Tempranillo,
    /// Malbec
    Malbec,
    /// Zinfandel
    Zinfandel,

    // White varietals
    /// Chardonnay
    Chardonnay,
    /// Sauvignon Blanc
    SauvignonBlanc,
    /// Riesling
    Riesling,
    /// Pinot Grigio
    PinotGrigio,
    /// Chenin Blanc
    CheninBlanc,
    /// Gewurztraminer
    Gewurztraminer,
    /// Viognier
    Viognier,
    /// Albarino
    Albarino,
}

impl Varietal {
    /// All supported varietals in catalog order
    pub const ALL: [Varietal; 18] = [
        Varietal::PinotNoir,
        Varietal::CabernetSauvignon,
        Varietal::Merlot,
        Varietal::Syrah,
        Varietal::Grenache,
        Varietal::Nebbiolo,
        Varietal::Sangiovese,
        Varietal::Tempranillo,
        Varietal::Malbec,
        Varietal::Zinfandel,
        Varietal::Chardonnay,
        Varietal::SauvignonBlanc,
        Varietal::Riesling,
        Varietal::PinotGrigio,
        Varietal::CheninBlanc,
        Varietal::Gewurztraminer,
        Varietal::Viognier,
        Varietal::Albarino,
    ];

    /// Canonical snake_case key for this varietal
    pub fn as_str(&self) -> &'static str {
        match self {
            Varietal::PinotNoir => "pinot_noir",
            Varietal::CabernetSauvignon => "cabernet_sauvignon",
            Varietal::Merlot => "merlot",
            Varietal::Syrah => "syrah",
            Varietal::Grenache => "grenache",
            Varietal::Nebbiolo => "nebbiolo",
            Varietal::Sangiovese => "sangiovese",
            Varietal::Tempranillo => "tempranillo",
            Varietal::Malbec => "malbec",
            Varietal::Zinfandel => "zinfandel",
            Varietal::Chardonnay => "chardonnay",
            Varietal::SauvignonBlanc => "sauvignon_blanc",
            Varietal::Riesling => "riesling",
            Varietal::PinotGrigio => "pinot_grigio",
            Varietal::CheninBlanc => "chenin_blanc",
            Varietal::Gewurztraminer => "gewurztraminer",
            Varietal::Viognier => "viognier",
            Varietal::Albarino => "albarino",
        }
    }

    /// Red or white category for this varietal
    pub fn category(&self) -> WineCategory {
        match self {
            Varietal::PinotNoir
            | Varietal::CabernetSauvignon
            | Varietal::Merlot
            | Varietal::Syrah
            | Varietal::Grenache
            | Varietal::Nebbiolo
            | Varietal::Sangiovese
            | Varietal::Tempranillo
            | Varietal::Malbec
            | Varietal::Zinfandel => WineCategory::Red,
            Varietal::Chardonnay
            | Varietal::SauvignonBlanc
            | Varietal::Riesling
            | Varietal::PinotGrigio
            | Varietal::CheninBlanc
            | Varietal::Gewurztraminer
            | Varietal::Viognier
            | Varietal::Albarino => WineCategory::White,
        }
    }
}

impl Display for Varietal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Varietal {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        // Accent-bearing spelling used on some labels
        if needle == "albariño" {
            return Ok(Varietal::Albarino);
        }
        Varietal::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == needle)
            .ok_or_else(|| VocabularyError::unknown_key("varietal", s))
    }
}

/// Growing climate of the fruit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Climate {
    /// Cool climate - bright, restrained fruit
    Cool,
    /// Moderate climate - balanced expression
    Moderate,
    /// Warm climate - ripe, generous fruit
    Warm,
    /// Hot climate - concentrated, jammy fruit
    Hot,
}

impl Climate {
    /// All climates in catalog order
    pub const ALL: [Climate; 4] = [
        Climate::Cool,
        Climate::Moderate,
        Climate::Warm,
        Climate::Hot,
    ];

    /// Canonical snake_case key for this climate
    pub fn as_str(&self) -> &'static str {
        match self {
            Climate::Cool => "cool",
            Climate::Moderate => "moderate",
            Climate::Warm => "warm",
            Climate::Hot => "hot",
        }
    }
}

impl Display for Climate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Climate {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Climate::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| VocabularyError::unknown_key("climate", s))
    }
}

/// Winemaking approach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WinemakingStyle {
    /// Restrained, terroir-led production
    OldWorld,
    /// Fruit-forward, expressive production
    NewWorld,
}

impl WinemakingStyle {
    /// All styles in catalog order
    pub const ALL: [WinemakingStyle; 2] = [WinemakingStyle::OldWorld, WinemakingStyle::NewWorld];

    /// Canonical snake_case key for this style
    pub fn as_str(&self) -> &'static str {
        match self {
            WinemakingStyle::OldWorld => "old_world",
            WinemakingStyle::NewWorld => "new_world",
        }
    }
}

impl Display for WinemakingStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WinemakingStyle {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        WinemakingStyle::ALL
            .iter()
            .copied()
            .find(|w| w.as_str() == needle)
            .ok_or_else(|| VocabularyError::unknown_key("winemaking_style", s))
    }
}

/// Oak aging regimen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OakTreatment {
    /// No oak contact
    None,
    /// Neutral, previously used barrels
    Neutral,
    /// New French oak
    FrenchOak,
    /// New American oak
    AmericanOak,
    /// A mix of barrel origins
    MixedOak,
}

impl OakTreatment {
    /// All oak treatments in catalog order
    pub const ALL: [OakTreatment; 5] = [
        OakTreatment::None,
        OakTreatment::Neutral,
        OakTreatment::FrenchOak,
        OakTreatment::AmericanOak,
        OakTreatment::MixedOak,
    ];

    /// Canonical snake_case key for this treatment
    pub fn as_str(&self) -> &'static str {
        match self {
            OakTreatment::None => "none",
            OakTreatment::Neutral => "neutral",
            OakTreatment::FrenchOak => "french_oak",
            OakTreatment::AmericanOak => "american_oak",
            OakTreatment::MixedOak => "mixed_oak",
        }
    }
}

impl Display for OakTreatment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OakTreatment {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        OakTreatment::ALL
            .iter()
            .copied()
            .find(|o| o.as_str() == needle)
            .ok_or_else(|| VocabularyError::unknown_key("oak_treatment", s))
    }
}

/// Age stage of the wine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AgeStage {
    /// Young, primary-fruit driven
    Youthful,
    /// Secondary character emerging
    Developing,
    /// Fully resolved tertiary character
    Mature,
    /// Declining past its plateau
    PastPrime,
}

impl AgeStage {
    /// All age stages in canonical chronological order
    ///
    /// The order is meaningful: evolution sequences iterate it verbatim.
    pub const SEQUENCE: [AgeStage; 4] = [
        AgeStage::Youthful,
        AgeStage::Developing,
        AgeStage::Mature,
        AgeStage::PastPrime,
    ];

    /// Canonical snake_case key for this age stage
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeStage::Youthful => "youthful",
            AgeStage::Developing => "developing",
            AgeStage::Mature => "mature",
            AgeStage::PastPrime => "past_prime",
        }
    }
}

impl Display for AgeStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeStage {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        AgeStage::SEQUENCE
            .iter()
            .copied()
            .find(|a| a.as_str() == needle)
            .ok_or_else(|| VocabularyError::unknown_key("age", s))
    }
}

/// Persistence of the finish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FinishLength {
    /// Brief, quickly fading
    Short,
    /// Moderate persistence
    Medium,
    /// Lingering persistence
    Long,
    /// Exceptional persistence
    VeryLong,
}

impl FinishLength {
    /// All finish lengths in ascending order
    pub const ALL: [FinishLength; 4] = [
        FinishLength::Short,
        FinishLength::Medium,
        FinishLength::Long,
        FinishLength::VeryLong,
    ];

    /// Canonical snake_case key for this finish length
    pub fn as_str(&self) -> &'static str {
        match self {
            FinishLength::Short => "short",
            FinishLength::Medium => "medium",
            FinishLength::Long => "long",
            FinishLength::VeryLong => "very_long",
        }
    }
}

impl Display for FinishLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FinishLength {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        FinishLength::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == needle)
            .ok_or_else(|| VocabularyError::unknown_key("finish_length", s))
    }
}

/// Classic wine region with a preset parameter profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Red Burgundy (Pinot Noir)
    BurgundyRed,
    /// White Burgundy (Chardonnay)
    BurgundyWhite,
    /// Napa Valley Cabernet Sauvignon
    NapaCabernet,
    /// Rioja Tempranillo
    RiojaTempranillo,
    /// Mosel Riesling
    MoselRiesling,
    /// Barolo (Nebbiolo)
    Barolo,
    /// Northern Rhone Syrah
    RhoneSyrah,
    /// Marlborough Sauvignon Blanc
    MarlboroughSauvignon,
}

impl Region {
    /// All supported regions in catalog order
    pub const ALL: [Region; 8] = [
        Region::BurgundyRed,
        Region::BurgundyWhite,
        Region::NapaCabernet,
        Region::RiojaTempranillo,
        Region::MoselRiesling,
        Region::Barolo,
        Region::RhoneSyrah,
        Region::MarlboroughSauvignon,
    ];

    /// Canonical snake_case key for this region
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::BurgundyRed => "burgundy_red",
            Region::BurgundyWhite => "burgundy_white",
            Region::NapaCabernet => "napa_cabernet",
            Region::RiojaTempranillo => "rioja_tempranillo",
            Region::MoselRiesling => "mosel_riesling",
            Region::Barolo => "barolo",
            Region::RhoneSyrah => "rhone_syrah",
            Region::MarlboroughSauvignon => "marlborough_sauvignon",
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Region names often arrive with spaces ("Burgundy Red")
        let needle = s.trim().to_lowercase().replace(' ', "_");
        Region::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == needle)
            .ok_or_else(|| VocabularyError::unknown_key("region", s))
    }
}
