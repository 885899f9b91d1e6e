// Copyright 2025 Cowboy AI, LLC.

//! Aroma cluster catalog
//!
//! Aroma vocabulary is open-ended free text, so this catalog is
//! deliberately permissive: a token that matches no cluster simply
//! contributes nothing. Only the closed catalogs (varietal, climate,
//! oak, age, region) reject unknown keys.

use schemars::JsonSchema;
use serde::Serialize;

/// A family of related aroma notes with a shared color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct AromaCluster {
    /// Cluster name
    pub name: &'static str,
    /// Aroma notes belonging to this cluster
    pub notes: &'static [&'static str],
    /// Hex color tokens evoked by the cluster
    pub color_palette: &'static [&'static str],
    /// Brightness character
    pub brightness: &'static str,
    /// Texture character
    pub texture: &'static str,
}

impl AromaCluster {
    /// The cluster's leading palette color
    pub fn primary_color(&self) -> &'static str {
        self.color_palette[0]
    }
}

/// All aroma clusters in catalog order.
///
/// Order matters: a note appearing in more than one cluster (e.g. "plum")
/// resolves to the first cluster that lists it.
pub const AROMA_CLUSTERS: [AromaCluster; 10] = [
    AromaCluster {
        name: "red_fruit",
        notes: &["cherry", "raspberry", "strawberry", "cranberry", "red_currant"],
        color_palette: &["#DC143C", "#C71585", "#FF6B6B", "#E74C3C"],
        brightness: "bright vivid fresh",
        texture: "juicy tart crisp",
    },
    AromaCluster {
        name: "black_fruit",
        notes: &["blackberry", "blackcurrant", "black_cherry", "plum", "blueberry"],
        color_palette: &["#1A0F14", "#2C1810", "#4A0E4E", "#191970"],
        brightness: "deep dark concentrated",
        texture: "dense rich powerful",
    },
    AromaCluster {
        name: "stone_fruit",
        notes: &["peach", "apricot", "nectarine", "plum"],
        color_palette: &["#FFDAB9", "#FFB347", "#FF8C69", "#DDA0DD"],
        brightness: "warm glowing ripe",
        texture: "soft luscious velvety",
    },
    AromaCluster {
        name: "citrus",
        notes: &["lemon", "lime", "grapefruit", "orange_zest"],
        color_palette: &["#FFF44F", "#BFFF00", "#FF6F61", "#FFD700"],
        brightness: "electric vibrant zesty",
        texture: "sharp crisp cutting",
    },
    AromaCluster {
        name: "tropical",
        notes: &["pineapple", "mango", "passion_fruit", "lychee", "guava"],
        color_palette: &["#FFD700", "#FF8C00", "#FF69B4", "#F0E68C"],
        brightness: "exotic bright heady",
        texture: "lush voluptuous perfumed",
    },
    AromaCluster {
        name: "earth_mineral",
        notes: &["wet_stone", "slate", "chalk", "graphite", "flint", "petrichor"],
        color_palette: &["#708090", "#696969", "#A9A9A9", "#2F4F4F"],
        brightness: "cool muted subtle",
        texture: "dry stony mineral",
    },
    AromaCluster {
        name: "forest_floor",
        notes: &["mushroom", "truffle", "forest_floor", "damp_leaves", "soil"],
        color_palette: &["#3E2723", "#5D4037", "#4E342E", "#654321"],
        brightness: "dark earthy organic",
        texture: "loamy dense humid",
    },
    AromaCluster {
        name: "oak_spice",
        notes: &["vanilla", "cinnamon", "clove", "nutmeg", "cedar", "toast"],
        color_palette: &["#D2691E", "#CD853F", "#DEB887", "#8B4513"],
        brightness: "warm amber golden",
        texture: "smooth spicy aromatic",
    },
    AromaCluster {
        name: "leather_tobacco",
        notes: &["leather", "tobacco", "cigar_box", "dried_herbs"],
        color_palette: &["#8B4513", "#654321", "#704214", "#3E2723"],
        brightness: "aged patinated rich",
        texture: "supple smooth aged",
    },
    AromaCluster {
        name: "floral",
        notes: &["rose", "violet", "honeysuckle", "jasmine", "orange_blossom"],
        color_palette: &["#FFB6C1", "#DDA0DD", "#E6E6FA", "#FFF0F5"],
        brightness: "delicate perfumed aromatic",
        texture: "soft ethereal fragrant",
    },
];

/// Resolve an aroma token to its cluster, if any.
///
/// Case-insensitive; misses are not errors.
pub fn lookup_aroma(token: &str) -> Option<&'static AromaCluster> {
    let needle = token.trim().to_lowercase();
    AROMA_CLUSTERS
        .iter()
        .find(|cluster| cluster.notes.contains(&needle.as_str()))
}

/// List every aroma cluster with its palette and descriptors.
///
/// Pure catalog read; never fails.
pub fn list_aroma_clusters() -> &'static [AromaCluster] {
    &AROMA_CLUSTERS
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("cherry", "red_fruit")]
    #[test_case("CHERRY", "red_fruit"; "uppercase cherry")]
    #[test_case("mushroom", "forest_floor")]
    #[test_case("rose", "floral")]
    #[test_case("plum", "black_fruit"; "first cluster wins for shared notes")]
    fn tokens_resolve_to_clusters(token: &str, expected: &str) {
        assert_eq!(lookup_aroma(token).unwrap().name, expected);
    }

    #[test]
    fn unknown_tokens_are_silently_ignored() {
        assert!(lookup_aroma("motor_oil").is_none());
        assert!(lookup_aroma("").is_none());
    }

    #[test]
    fn every_cluster_carries_hex_colors() {
        for cluster in list_aroma_clusters() {
            assert!(!cluster.color_palette.is_empty(), "{}", cluster.name);
            for color in cluster.color_palette {
                assert!(color.starts_with('#'), "{}: {color}", cluster.name);
            }
        }
    }
}
