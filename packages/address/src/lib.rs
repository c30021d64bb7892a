#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Parser for United States postal addresses.
//!
//! Takes the two lines of a USPS-style address and produces a validated,
//! canonical [`Address`]:
//!
//! ```text
//! 1234 S.E. Broadway Ave Unit 5      ->  1234 SE BROADWAY AVE UNIT 5
//! New York, NY, 10002                    NEW YORK NY 10002
//! ```
//!
//! Parsing runs in three stages:
//!
//! 1. [`parse_last_line`] validates `CITY STATE ZIP[-EXT]`.
//! 2. [`tokenize`] splits the delivery line into classified [`Token`]s.
//! 3. [`classify`] decides which of the six address shapes the tokens form
//!    and extracts its fields, normalizing directions and street suffixes
//!    through a [`ReferenceTables`] implementation.
//!
//! The canonical rendering of a parsed address normally parses back to an
//! equal address. Hyphenated street names are the exception: `-` is written
//! as a space, so `100 MAIN-ST` renders as `100 MAIN ST`, which parses with
//! `ST` as the suffix.

mod classify;
mod error;
mod last_line;
pub mod tables;
mod token;
mod tokenize;

pub use classify::classify;
pub use error::{ParseErrorKind, StructuralError};
pub use last_line::parse_last_line;
pub use tables::{ReferenceTables, TablesConfig, TablesError, UspsTables};
pub use token::{Token, TokenKind};
pub use tokenize::tokenize;
pub use usps_address_models::{
    Address, AddressKind, AddressType, Designator, Locality, StandardAddress, ValidationError,
};

/// Any failure to parse an address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The delivery address could not be decomposed.
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// The last line, or a field value, is invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Parses addresses against a set of reference tables.
///
/// ```
/// use usps_address::{AddressParser, UspsTables};
///
/// let parser = AddressParser::new(UspsTables::standard());
/// let address = parser.parse("PO BOX 15", "SPRINGFIELD IL 12345").unwrap();
/// assert_eq!(address.delivery_line(), "PO BOX 15");
/// ```
#[derive(Debug)]
pub struct AddressParser<'a, T: ReferenceTables + ?Sized = UspsTables> {
    tables: &'a T,
}

impl<'a, T: ReferenceTables + ?Sized> AddressParser<'a, T> {
    /// Creates a parser that consults `tables`.
    #[must_use]
    pub const fn new(tables: &'a T) -> Self {
        Self { tables }
    }

    /// Parses a delivery address and a last line.
    ///
    /// The last line is validated first, so a bad ZIP code is reported even
    /// when the delivery address is also malformed. Structural error
    /// positions refer to the trimmed, uppercased delivery address.
    ///
    /// # Errors
    ///
    /// * [`AddressError::Validation`] if the last line is invalid
    /// * [`AddressError::Structural`] if the delivery address cannot be
    ///   decomposed
    pub fn parse(&self, delivery_address: &str, last_line: &str) -> Result<Address, AddressError> {
        let locality = parse_last_line(last_line)?;

        let source = delivery_address.trim().to_uppercase();
        let tokens = tokenize(&source)?;
        log::trace!("tokenized \"{source}\": {tokens:?}");

        Ok(classify(tokens, &source, locality, self.tables)?)
    }
}

impl Default for AddressParser<'static, UspsTables> {
    fn default() -> Self {
        Self::new(UspsTables::standard())
    }
}

/// Parses an address with the built-in USPS tables.
///
/// # Errors
///
/// See [`AddressParser::parse`].
pub fn parse(delivery_address: &str, last_line: &str) -> Result<Address, AddressError> {
    AddressParser::new(UspsTables::standard()).parse(delivery_address, last_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structural(delivery_address: &str) -> StructuralError {
        match parse(delivery_address, "SPRINGFIELD IL 12345") {
            Err(AddressError::Structural(err)) => err,
            other => panic!("expected structural error, got {other:?}"),
        }
    }

    fn reparse(address: &Address) -> Address {
        parse(&address.delivery_line(), &address.last_line()).unwrap()
    }

    #[test]
    fn parses_standard_address() {
        let address = parse("123 N. Main St.", "Springfield IL 12345-6789").unwrap();
        assert_eq!(address.address_type(), AddressType::Standard);
        assert_eq!(address.delivery_line(), "123 N MAIN ST");
        assert_eq!(address.last_line(), "SPRINGFIELD IL 12345-6789");
        assert_eq!(
            address.to_string(),
            "123 N MAIN ST\nSPRINGFIELD IL 12345-6789"
        );
    }

    #[test]
    fn parses_each_shape() {
        let cases = [
            ("GENERAL DELIVERY", AddressType::GeneralDelivery, "GENERAL DELIVERY"),
            ("P. O. BOX 123B", AddressType::PostOfficeBox, "PO BOX 123B"),
            ("RR 2 BOX 152", AddressType::RuralRoute, "RR 2 BOX 152"),
            ("HC 68 BOX 23A", AddressType::HighwayContractRoute, "HC 68 BOX 23A"),
            ("PSC 802 BOX 74", AddressType::OverseasMilitary, "PSC 802 BOX 74"),
            ("4725 NORTHWEST 193RD COURT", AddressType::Standard, "4725 NW 193RD CT"),
        ];
        for (input, address_type, delivery_line) in cases {
            let address = parse(input, "SPRINGFIELD IL 12345").unwrap();
            assert_eq!(address.address_type(), address_type, "{input}");
            assert_eq!(address.delivery_line(), delivery_line, "{input}");
        }
    }

    #[test]
    fn equivalent_spellings_are_equal() {
        assert_eq!(
            parse("1234 S.E. BROADWAY AVE UNIT 5", "NEW YORK, NY, 10002").unwrap(),
            parse("1234 southeast broadway avenue unit 5", "new york ny 10002").unwrap()
        );
        assert_eq!(
            parse("123 N.W. MAIN ST.", "SPRINGFIELD IL 12345").unwrap(),
            parse("123 NW MAIN STREET", "SPRINGFIELD IL 12345").unwrap()
        );
        assert_eq!(
            parse("PO BOX 15", "SPRINGFIELD IL 12345").unwrap(),
            parse("P.O. BOX 15", "SPRINGFIELD, IL 12345").unwrap()
        );
        assert_eq!(
            parse("general delivery", "SPRINGFIELD IL 12345").unwrap(),
            parse("GENERAL DELIVERY", "SPRINGFIELD IL 12345").unwrap()
        );
        assert_ne!(
            parse("123 MAIN ST", "SPRINGFIELD IL 12345").unwrap(),
            parse("123 MAIN ST", "SPRINGFIELD IL 12345-0001").unwrap()
        );
    }

    #[test]
    fn canonical_form_parses_back_to_the_same_address() {
        let corpus = [
            ("123 N. MAIN ST.", "CHICAGO IL 12345"),
            ("4725 NORTHWEST 193RD COURT", "CHICAGO, IL, 29525-9186"),
            ("1552 COUNTY ROAD 252", "CHICAGO IL 12345-6789"),
            ("1480 Inner Road", "Gainesville, FL 32611"),
            ("General Delivery", "Gainesville, FL, 32601"),
            ("1234 S.E. BROADWAY AVE UNIT 5", "NEW YORK, NY, 10002"),
            ("PO BOX 15", "SPRINGFIELD IL 12345"),
            ("P.O. BOX C", "SPRINGFIELD IL 12345"),
            ("PO BOX -5", "SPRINGFIELD IL 12345"),
            ("123 MAIN ST # 45", "SPRINGFIELD IL 12345"),
            ("123 MAIN ST #45", "SPRINGFIELD IL 12345"),
            ("51 1/2 362ND COURT SE", "CHICAGO, IL, 56124-7162"),
            ("201 FILBERT ST,STE 700", "SAN FRANCISCO CA 94133-3242"),
            ("P. O. BOX 123", "SPRINGFIELD IL 12345"),
            ("P. O. BOX 123B", "SPRINGFIELD IL 12345"),
            ("RR 2 BOX 152", "SPRINGFIELD IL 12345"),
            ("H.C. 68 BOX 23A", "SPRINGFIELD IL 12345"),
            ("UNIT 2050 BOX 4190", "APO AE 09969"),
            ("104-12 ROOSEVELT AVE APT. 3", "FLUSHING NY 11368"),
            ("12 WILKES-BARRE BLVD", "WILKES BARRE PA 18701"),
            ("9262 COUNTY LINE RD NORTH APT 105", "SPRINGFIELD IL 12345"),
            ("123", "SPRINGFIELD IL 12345"),
            ("12 GREEN MEADOW", "SPRINGFIELD IL 12345"),
            ("12 GREEN MEADOWS", "SPRINGFIELD IL 12345"),
        ];
        for (delivery_address, last_line) in corpus {
            let address = parse(delivery_address, last_line).unwrap();
            assert_eq!(
                reparse(&address),
                address,
                "\"{delivery_address}\" does not survive a round trip"
            );
        }
    }

    #[test]
    fn meadow_keeps_its_own_code() {
        let address = parse("12 GREEN MEADOW", "SPRINGFIELD IL 12345").unwrap();
        assert_eq!(address.delivery_line(), "12 GREEN MDW");
        assert_eq!(reparse(&address).delivery_line(), "12 GREEN MDW");
    }

    #[test]
    fn hyphen_hiding_a_suffix_does_not_round_trip() {
        let address = parse("100 MAIN-ST", "SPRINGFIELD IL 12345").unwrap();
        let AddressKind::Standard(fields) = address.kind() else {
            panic!("expected a standard address");
        };
        assert_eq!(fields.street_name.as_deref(), Some("MAIN ST"));
        assert_eq!(fields.suffix, None);

        let again = reparse(&address);
        let AddressKind::Standard(fields) = again.kind() else {
            panic!("expected a standard address");
        };
        assert_eq!(fields.street_name.as_deref(), Some("MAIN"));
        assert_eq!(fields.suffix.as_deref(), Some("ST"));
    }

    #[test]
    fn surrounding_line_breaks_are_trimmed() {
        let address = parse("123 MAIN ST\n", "SPRINGFIELD IL 12345").unwrap();
        assert_eq!(address.delivery_line(), "123 MAIN ST");
        assert_eq!(
            structural("123 MAIN ST\r\nAPT 5").kind(),
            ParseErrorKind::UnexpectedLineBreak
        );
    }

    #[test]
    fn separator_before_unit() {
        let address = parse("201 FILBERT ST,STE 700", "SAN FRANCISCO CA 94133-3242").unwrap();
        assert_eq!(address.delivery_line(), "201 FILBERT ST STE 700");
        assert_eq!(address.locality().zipcode_ext(), Some("3242"));
    }

    #[test]
    fn unit_type_keeps_its_punctuation() {
        let address = parse("104-12 ROOSEVELT AVE APT. 3", "FLUSHING NY 11368").unwrap();
        assert_eq!(address.delivery_line(), "104-12 ROOSEVELT AVE APT. 3");
    }

    #[test]
    fn last_line_is_validated_first() {
        assert_eq!(
            parse("PO BOX", "SPRINGFIELD IL 1234"),
            Err(AddressError::Validation(ValidationError::InvalidZip(
                "1234".to_string()
            )))
        );
    }

    #[test]
    fn structural_errors_point_into_the_uppercased_source() {
        let err = structural("  po box  ");
        assert_eq!(err.kind(), ParseErrorKind::MissingBoxNumber);
        assert_eq!(err.position(), 6);
        assert_eq!(err.source_text(), "PO BOX");

        let err = structural("");
        assert_eq!(err.kind(), ParseErrorKind::NoTokens);
        assert_eq!(err.position(), 0);

        let err = structural(",;");
        assert_eq!(err.kind(), ParseErrorKind::NoTokens);

        let err = structural("123 MAIN ST\nAPT 5");
        assert_eq!(err.kind(), ParseErrorKind::UnexpectedLineBreak);
        assert_eq!(err.position(), 11);

        assert_eq!(
            structural("RR X BOX 5").kind(),
            ParseErrorKind::InvalidRouteNumber
        );
        assert_eq!(
            structural("123 MAIN ST # 4 # 5").kind(),
            ParseErrorKind::MultiplePoundSigns
        );
        assert_eq!(
            structural("123 MAIN ST APT # 5").kind(),
            ParseErrorKind::ConflictingUnitSpecifier
        );
        assert_eq!(
            structural("123 MAIN - ST").kind(),
            ParseErrorKind::UnexpectedToken
        );
        assert_eq!(
            structural("123 MAIN ST APT").kind(),
            ParseErrorKind::MissingUnitValue
        );
    }

    #[test]
    fn error_display_is_transparent() {
        let err = parse("PO BOX", "SPRINGFIELD IL 12345").unwrap_err();
        assert_eq!(
            err.to_string(),
            "error parsing address at index 6 (missing box number), near:\nPO BOX\n      ^"
        );
    }

    #[test]
    fn custom_tables_drive_normalization() {
        let config = TablesConfig::from_toml_str("[suffixes]\nCAMINO = \"CMNO\"\n").unwrap();
        let tables = UspsTables::builtin().extend(config).unwrap();
        let parser = AddressParser::new(&tables);

        let address = parser.parse("12 REAL CAMINO", "SANTA FE NM 87501").unwrap();
        assert_eq!(address.delivery_line(), "12 REAL CMNO");
        assert_eq!(
            parser.parse(&address.delivery_line(), &address.last_line()).unwrap(),
            address
        );

        let plain = parse("12 REAL CAMINO", "SANTA FE NM 87501").unwrap();
        assert_eq!(plain.delivery_line(), "12 REAL CAMINO");
    }

    #[test]
    fn parser_accepts_trait_objects() {
        let tables: &dyn ReferenceTables = UspsTables::standard();
        let parser = AddressParser::new(tables);
        let address = parser.parse("500 N ST", "SPRINGFIELD IL 12345").unwrap();
        assert_eq!(address.delivery_line(), "500 N ST");
    }
}
