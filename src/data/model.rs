use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// TypeTag – the primary types offered by the type filter
// ---------------------------------------------------------------------------

/// One of the 17 primary types the dashboard lets the user filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeTag {
    #[default]
    Grass,
    Fire,
    Water,
    Electric,
    Dragon,
    Fairy,
    Bug,
    Normal,
    Poison,
    Psychic,
    Steel,
    Dark,
    Ghost,
    Ground,
    Rock,
    Fighting,
    Ice,
}

impl TypeTag {
    /// All tags, in the order the radio buttons present them.
    pub const ALL: [TypeTag; 17] = [
        TypeTag::Grass,
        TypeTag::Fire,
        TypeTag::Water,
        TypeTag::Electric,
        TypeTag::Dragon,
        TypeTag::Fairy,
        TypeTag::Bug,
        TypeTag::Normal,
        TypeTag::Poison,
        TypeTag::Psychic,
        TypeTag::Steel,
        TypeTag::Dark,
        TypeTag::Ghost,
        TypeTag::Ground,
        TypeTag::Rock,
        TypeTag::Fighting,
        TypeTag::Ice,
    ];

    /// The value stored in the `type1` column.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Grass => "grass",
            TypeTag::Fire => "fire",
            TypeTag::Water => "water",
            TypeTag::Electric => "electric",
            TypeTag::Dragon => "dragon",
            TypeTag::Fairy => "fairy",
            TypeTag::Bug => "bug",
            TypeTag::Normal => "normal",
            TypeTag::Poison => "poison",
            TypeTag::Psychic => "psychic",
            TypeTag::Steel => "steel",
            TypeTag::Dark => "dark",
            TypeTag::Ghost => "ghost",
            TypeTag::Ground => "ground",
            TypeTag::Rock => "rock",
            TypeTag::Fighting => "fighting",
            TypeTag::Ice => "ice",
        }
    }

    /// French label shown next to the radio button.
    pub fn label(self) -> &'static str {
        match self {
            TypeTag::Grass => "Plante",
            TypeTag::Fire => "Feu",
            TypeTag::Water => "Eau",
            TypeTag::Electric => "Électrique",
            TypeTag::Dragon => "Dragon",
            TypeTag::Fairy => "Fée",
            TypeTag::Bug => "Insecte",
            TypeTag::Normal => "Normale",
            TypeTag::Poison => "Poison",
            TypeTag::Psychic => "Psy",
            TypeTag::Steel => "Acier",
            TypeTag::Dark => "Tenebre",
            TypeTag::Ghost => "Fantome",
            TypeTag::Ground => "Sol",
            TypeTag::Rock => "Roche",
            TypeTag::Fighting => "Combat",
            TypeTag::Ice => "Glace",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown type tag '{s}'"))
    }
}

// ---------------------------------------------------------------------------
// PokemonRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// The columns the dashboard reads from one CSV row.
///
/// `type1` stays a plain string: rows whose type is outside [`TypeTag::ALL`]
/// still count toward the type distribution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonRecord {
    pub name: String,
    pub type1: String,
    #[serde(deserialize_with = "empty_as_nan")]
    pub attack: f64,
    #[serde(deserialize_with = "empty_as_nan")]
    pub defense: f64,
    #[serde(deserialize_with = "empty_as_nan")]
    pub hp: f64,
    #[serde(deserialize_with = "empty_as_nan")]
    pub height_m: f64,
    #[serde(deserialize_with = "empty_as_nan")]
    pub kg: f64,
    #[serde(deserialize_with = "empty_as_nan")]
    pub speed: f64,
}

/// Blank numeric cells become `NaN`, the way pandas reads them.
fn empty_as_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<f64> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or(f64::NAN))
}

// ---------------------------------------------------------------------------
// Dataset – the immutable table loaded at start-up
// ---------------------------------------------------------------------------

/// The full table, in on-disk row and column order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Typed view of every row.
    pub records: Vec<PokemonRecord>,
    /// Header row, all columns.
    pub headers: Vec<String>,
    /// Raw cells for every column, used by the table dump.
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&PokemonRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_tags_parse_from_their_wire_string() {
        for tag in TypeTag::ALL {
            assert_eq!(tag.as_str().parse::<TypeTag>(), Ok(tag));
        }
        assert!("flying".parse::<TypeTag>().is_err());
    }

    #[test]
    fn default_tag_is_grass() {
        assert_eq!(TypeTag::default(), TypeTag::Grass);
        assert_eq!(TypeTag::ALL[0], TypeTag::Grass);
    }

    #[test]
    fn find_by_name_returns_first_match() {
        let rec = |name: &str, hp: f64| PokemonRecord {
            name: name.to_string(),
            type1: "grass".to_string(),
            attack: 1.0,
            defense: 1.0,
            hp,
            height_m: 1.0,
            kg: 1.0,
            speed: 1.0,
        };
        let ds = Dataset {
            records: vec![rec("Oddish", 45.0), rec("Oddish", 99.0)],
            ..Default::default()
        };
        assert_eq!(ds.find_by_name("Oddish").map(|r| r.hp), Some(45.0));
        assert!(ds.find_by_name("Gloom").is_none());
    }
}
