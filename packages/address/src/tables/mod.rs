//! Reference tables: directions, street suffixes, secondary unit
//! designators, and state names.
//!
//! The parser only sees these through the [`ReferenceTables`] trait, so
//! callers can swap in alternate or partial tables. [`UspsTables`] is the
//! standard implementation, built from USPS Publication 28 and optionally
//! extended from a TOML file (see [`TablesConfig`]).

mod data;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;

/// Lookups the parser needs from its reference data.
///
/// Words are expected uppercase with punctuation already stripped.
pub trait ReferenceTables: Send + Sync {
    /// Maps a direction word (`NORTHWEST`, `NW`) to its USPS code (`NW`).
    fn normalize_direction(&self, word: &str) -> Option<&str>;

    /// Maps a street suffix spelling (`AVENUE`, `AVN`) to its USPS
    /// abbreviation (`AVE`).
    fn normalize_street_suffix(&self, word: &str) -> Option<&str>;

    /// Returns `true` if the word designates a secondary unit (`APT`, `STE`).
    fn is_secondary_unit_indicator(&self, word: &str) -> bool;

    /// Maps a full state name to its 2-letter code.
    fn state_name_to_code(&self, name: &str) -> Option<&str>;

    /// Returns `true` if the word is a direction.
    fn is_direction(&self, word: &str) -> bool {
        self.normalize_direction(word).is_some()
    }

    /// Returns `true` if the word is a street suffix.
    fn is_street_suffix(&self, word: &str) -> bool {
        self.normalize_street_suffix(word).is_some()
    }
}

/// Errors from loading table extensions.
#[derive(Debug, thiserror::Error)]
pub enum TablesError {
    /// I/O error reading the extension file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The extension file is not valid TOML for [`TablesConfig`].
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// An entry was rejected.
    #[error("invalid {table} entry \"{entry}\": {reason}")]
    InvalidEntry {
        /// Which table the entry belongs to.
        table: &'static str,
        /// The offending entry.
        entry: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Additional table entries, deserialized from TOML.
///
/// ```toml
/// secondary_units = ["SLIP"]
///
/// [suffixes]
/// BOULEVARDE = "BLVD"
///
/// [directions]
/// NORTHBOUND = "N"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TablesConfig {
    /// Direction word to 1-2 letter code.
    pub directions: BTreeMap<String, String>,
    /// Street suffix spelling to canonical abbreviation.
    pub suffixes: BTreeMap<String, String>,
    /// Extra secondary unit designators.
    pub secondary_units: Vec<String>,
    /// State name to 2-letter code.
    pub states: BTreeMap<String, String>,
    /// Highway name spelling to standardized form.
    pub highways: BTreeMap<String, String>,
}

impl TablesConfig {
    /// Parses an extension from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`TablesError::Toml`] if the text is not valid for this type.
    pub fn from_toml_str(text: &str) -> Result<Self, TablesError> {
        Ok(toml::de::from_str(text)?)
    }

    /// Reads and parses an extension file.
    ///
    /// # Errors
    ///
    /// Returns [`TablesError::Io`] if the file cannot be read, or
    /// [`TablesError::Toml`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, TablesError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

static STANDARD: LazyLock<UspsTables> = LazyLock::new(UspsTables::builtin);

/// USPS reference tables backed by sorted maps.
#[derive(Debug, Clone, Default)]
pub struct UspsTables {
    directions: BTreeMap<String, String>,
    suffixes: BTreeMap<String, String>,
    secondary_units: BTreeSet<String>,
    states: BTreeMap<String, String>,
    highways: BTreeMap<String, String>,
}

impl UspsTables {
    /// The process-wide built-in tables. Built on first use.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Tables with no entries at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A fresh copy of the built-in tables.
    #[must_use]
    pub fn builtin() -> Self {
        let owned = |pairs: &[(&str, &str)]| -> BTreeMap<String, String> {
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect()
        };

        // Every canonical code maps to itself, including codes Publication 28
        // lists under no identical spelling (CTRS, XRDS) and codes it lists
        // as a spelling of another code (MDW -> MDWS).
        let mut suffixes = owned(data::STREET_SUFFIXES);
        for (_, code) in data::STREET_SUFFIXES {
            suffixes.insert((*code).to_string(), (*code).to_string());
        }

        Self {
            directions: owned(data::DIRECTIONS),
            suffixes,
            secondary_units: data::SECONDARY_UNIT_INDICATORS
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
            states: owned(data::STATE_NAMES),
            highways: owned(data::HIGHWAYS),
        }
    }

    /// The built-in tables extended with the entries in a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`TablesError`] if the file cannot be read or parsed, or
    /// contains an invalid entry.
    pub fn builtin_with_file(path: &Path) -> Result<Self, TablesError> {
        let config = TablesConfig::load(path)?;
        log::info!("Loaded table extensions from {}", path.display());
        Self::builtin().extend(config)
    }

    /// Adds the entries of `config` to these tables. Later entries replace
    /// earlier ones with the same key, except that a suffix code always
    /// normalizes to itself.
    ///
    /// # Errors
    ///
    /// Returns [`TablesError::InvalidEntry`] if a direction code is not 1-2
    /// letters, a state code is not 2 letters, or any key or code is empty.
    pub fn extend(mut self, config: TablesConfig) -> Result<Self, TablesError> {
        for (word, code) in config.directions {
            let (word, code) = (upper_key("directions", &word)?, upper_key("directions", &code)?);
            if code.len() > 2 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
                return Err(TablesError::InvalidEntry {
                    table: "directions",
                    entry: code,
                    reason: "direction codes are 1-2 letters",
                });
            }
            self.directions.insert(code.clone(), code.clone());
            self.directions.insert(word, code);
        }

        let mut suffix_codes = Vec::new();
        for (word, code) in config.suffixes {
            let (word, code) = (upper_key("suffixes", &word)?, upper_key("suffixes", &code)?);
            self.suffixes.insert(word, code.clone());
            suffix_codes.push(code);
        }
        for code in suffix_codes {
            self.suffixes.insert(code.clone(), code);
        }

        for word in config.secondary_units {
            self.secondary_units.insert(upper_key("secondary_units", &word)?);
        }

        for (name, code) in config.states {
            let (name, code) = (upper_key("states", &name)?, upper_key("states", &code)?);
            if code.chars().count() != 2 {
                return Err(TablesError::InvalidEntry {
                    table: "states",
                    entry: code,
                    reason: "state codes are exactly 2 characters",
                });
            }
            self.states.insert(name, code);
        }

        for (name, standard) in config.highways {
            let (name, standard) = (upper_key("highways", &name)?, upper_key("highways", &standard)?);
            self.highways.insert(name, standard);
        }

        Ok(self)
    }

    /// Standardized form of a highway name (`CNTY RD` -> `COUNTY ROAD`).
    ///
    /// Reference data only: street parsing does not rewrite highway names.
    #[must_use]
    pub fn highway_name(&self, name: &str) -> Option<&str> {
        self.highways
            .get(name.trim().to_uppercase().as_str())
            .map(String::as_str)
    }
}

fn upper_key(table: &'static str, value: &str) -> Result<String, TablesError> {
    let value = value.trim().to_uppercase();
    if value.is_empty() {
        return Err(TablesError::InvalidEntry {
            table,
            entry: value,
            reason: "entries must not be empty",
        });
    }
    Ok(value)
}

impl ReferenceTables for UspsTables {
    fn normalize_direction(&self, word: &str) -> Option<&str> {
        self.directions.get(word).map(String::as_str)
    }

    fn normalize_street_suffix(&self, word: &str) -> Option<&str> {
        self.suffixes.get(word).map(String::as_str)
    }

    fn is_secondary_unit_indicator(&self, word: &str) -> bool {
        self.secondary_units.contains(word)
    }

    fn state_name_to_code(&self, name: &str) -> Option<&str> {
        self.states
            .get(name.trim().to_uppercase().as_str())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_directions() {
        let tables = UspsTables::standard();
        assert_eq!(tables.normalize_direction("NORTHWEST"), Some("NW"));
        assert_eq!(tables.normalize_direction("SOUTH"), Some("S"));
        assert_eq!(tables.normalize_direction("SE"), Some("SE"));
        assert_eq!(tables.normalize_direction("MAIN"), None);
        assert!(tables.is_direction("E"));
        assert!(!tables.is_direction("NORTHBOUND"));
    }

    #[test]
    fn normalizes_street_suffixes() {
        let tables = UspsTables::standard();
        assert_eq!(tables.normalize_street_suffix("STREET"), Some("ST"));
        assert_eq!(tables.normalize_street_suffix("COURT"), Some("CT"));
        assert_eq!(tables.normalize_street_suffix("AVN"), Some("AVE"));
        assert_eq!(tables.normalize_street_suffix("BOULEVARD"), Some("BLVD"));
        assert_eq!(tables.normalize_street_suffix("WY"), Some("WAY"));
        assert!(tables.is_street_suffix("ST"));
        assert!(!tables.is_street_suffix("MAIN"));
    }

    #[test]
    fn every_suffix_code_is_itself_a_suffix() {
        let tables = UspsTables::standard();
        for (_, code) in data::STREET_SUFFIXES {
            assert_eq!(
                tables.normalize_street_suffix(code),
                Some(*code),
                "{code} does not normalize to itself"
            );
        }
    }

    #[test]
    fn code_listed_as_another_spelling_still_maps_to_itself() {
        let tables = UspsTables::standard();
        assert_eq!(tables.normalize_street_suffix("MEADOW"), Some("MDW"));
        assert_eq!(tables.normalize_street_suffix("MDW"), Some("MDW"));
        assert_eq!(tables.normalize_street_suffix("MEADOWS"), Some("MDWS"));
    }

    #[test]
    fn extension_codes_win_over_extension_spellings() {
        let config = TablesConfig::from_toml_str(
            r#"
            [suffixes]
            PASEO = "PSO"
            PSO = "PASEO"
            "#,
        )
        .unwrap();
        let tables = UspsTables::empty().extend(config).unwrap();
        assert_eq!(tables.normalize_street_suffix("PSO"), Some("PSO"));
        assert_eq!(tables.normalize_street_suffix("PASEO"), Some("PASEO"));
    }

    #[test]
    fn recognizes_secondary_units() {
        let tables = UspsTables::standard();
        assert!(tables.is_secondary_unit_indicator("APT"));
        assert!(tables.is_secondary_unit_indicator("STE"));
        assert!(tables.is_secondary_unit_indicator("UNIT"));
        assert!(!tables.is_secondary_unit_indicator("SLIP"));
        assert!(!tables.is_secondary_unit_indicator("#"));
    }

    #[test]
    fn looks_up_state_names_ignoring_case() {
        let tables = UspsTables::standard();
        assert_eq!(tables.state_name_to_code("Illinois"), Some("IL"));
        assert_eq!(tables.state_name_to_code(" new york "), Some("NY"));
        assert_eq!(tables.state_name_to_code("DISTRICT OF COLUMBIA"), Some("DC"));
        assert_eq!(tables.state_name_to_code("ATLANTIS"), None);
    }

    #[test]
    fn looks_up_highway_names() {
        let tables = UspsTables::standard();
        assert_eq!(tables.highway_name("cnty rd"), Some("COUNTY ROAD"));
        assert_eq!(tables.highway_name("ST RTE"), Some("STATE ROUTE"));
        assert_eq!(tables.highway_name("MAIN"), None);
    }

    #[test]
    fn empty_tables_know_nothing() {
        let tables = UspsTables::empty();
        assert!(!tables.is_direction("N"));
        assert!(!tables.is_street_suffix("ST"));
        assert!(!tables.is_secondary_unit_indicator("APT"));
        assert_eq!(tables.state_name_to_code("OHIO"), None);
    }

    #[test]
    fn extends_from_toml() {
        let config = TablesConfig::from_toml_str(
            r#"
            secondary_units = ["slip"]

            [suffixes]
            boulevarde = "blvd"
            CAMINO = "CMNO"

            [directions]
            NORTHBOUND = "N"

            [states]
            "New England" = "ne"
            "#,
        )
        .unwrap();
        let tables = UspsTables::builtin().extend(config).unwrap();

        assert!(tables.is_secondary_unit_indicator("SLIP"));
        assert_eq!(tables.normalize_street_suffix("BOULEVARDE"), Some("BLVD"));
        assert_eq!(tables.normalize_street_suffix("CMNO"), Some("CMNO"));
        assert_eq!(tables.normalize_direction("NORTHBOUND"), Some("N"));
        assert_eq!(tables.state_name_to_code("NEW ENGLAND"), Some("NE"));
        // Built-in entries survive.
        assert_eq!(tables.normalize_street_suffix("STREET"), Some("ST"));
    }

    #[test]
    fn rejects_invalid_extension_entries() {
        let mut config = TablesConfig::default();
        config
            .directions
            .insert("NORTHBOUND".to_string(), "NB1".to_string());
        assert!(matches!(
            UspsTables::empty().extend(config),
            Err(TablesError::InvalidEntry {
                table: "directions",
                ..
            })
        ));

        let mut config = TablesConfig::default();
        config.states.insert("OHIO".to_string(), "OHI".to_string());
        assert!(matches!(
            UspsTables::empty().extend(config),
            Err(TablesError::InvalidEntry { table: "states", .. })
        ));

        let mut config = TablesConfig::default();
        config.secondary_units.push("  ".to_string());
        assert!(UspsTables::empty().extend(config).is_err());
    }

    #[test]
    fn rejects_unknown_toml_keys() {
        assert!(matches!(
            TablesConfig::from_toml_str("[streets]\nMAIN = \"MN\"\n"),
            Err(TablesError::Toml(_))
        ));
    }
}
