//! Parsing of the address last line (`CITY STATE ZIP[-EXT]`).

use std::sync::LazyLock;

use regex::Regex;
use usps_address_models::{Locality, ValidationError};

/// Characters that never contribute to a last line (`,`, `.`, ...).
static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Z0-9\s\-]+").expect("valid regex"));

/// Parses `CITY STATE ZIP` or `CITY STATE ZIP-EXT`.
///
/// The line is uppercased and stripped of everything except letters, digits,
/// whitespace, and `-` before being split on whitespace. The last token is
/// the ZIP code, the one before it the 2-letter state, and everything
/// before that the city.
///
/// Full state names are rejected; translate them with
/// [`crate::ReferenceTables::state_name_to_code`] before calling.
///
/// # Errors
///
/// * [`ValidationError::MissingState`] with fewer than 2 tokens
/// * [`ValidationError::MissingCity`] with fewer than 3 tokens
/// * [`ValidationError::InvalidZip`] if the ZIP is not 5 digits or
///   `5 digits-4 digits`
/// * [`ValidationError::InvalidState`] if the state is not 2 characters
pub fn parse_last_line(text: &str) -> Result<Locality, ValidationError> {
    let upper = text.to_uppercase();
    let cleaned = DISALLOWED_RE.replace_all(upper.trim(), "");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let (zip_field, state, city) = match tokens.as_slice() {
        [] | [_] => return Err(ValidationError::MissingState(cleaned.to_string())),
        [_, _] => return Err(ValidationError::MissingCity(cleaned.to_string())),
        [city @ .., state, zip_field] => (*zip_field, *state, city.join(" ")),
    };

    let (zipcode, zipcode_ext) = match zip_field.split_once('-') {
        Some((zipcode, ext)) => {
            if !is_digits(zipcode, 5) || !is_digits(ext, 4) {
                return Err(ValidationError::InvalidZip(zip_field.to_string()));
            }
            (zipcode, Some(ext))
        }
        None => {
            if !is_digits(zip_field, 5) {
                return Err(ValidationError::InvalidZip(zip_field.to_string()));
            }
            (zip_field, None)
        }
    };

    if state.chars().count() != 2 {
        return Err(ValidationError::InvalidState(state.to_string()));
    }

    Locality::new(&city, state, zipcode, zipcode_ext)
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}
