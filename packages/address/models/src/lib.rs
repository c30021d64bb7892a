#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Typed representation of a United States postal address.
//!
//! An [`Address`] is one of six USPS address shapes (see [`AddressKind`])
//! plus the [`Locality`] shared by all of them (city, state, ZIP, ZIP+4
//! extension). All textual fields are canonicalized to uppercase when the
//! address is constructed, so equality and hashing are plain field
//! comparisons.
//!
//! This crate contains only data types and their validation. Parsing free
//! text into an [`Address`] lives in `usps_address`.

use std::fmt;

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

/// Errors raised when a last line or an address field is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The last line has fewer than two tokens.
    #[error("missing 2-character state code in address last line \"{0}\"")]
    MissingState(String),

    /// The last line has a state and ZIP code but nothing before them.
    #[error("missing city in address last line \"{0}\"")]
    MissingCity(String),

    /// The ZIP field is not a 5-digit code or a `12345-6789` ZIP+4 code.
    #[error("invalid ZIP code \"{0}\": ZIP codes must be 5 digits (or ZIP+4), zero-padded")]
    InvalidZip(String),

    /// The ZIP+4 extension is not exactly 4 digits.
    #[error("invalid ZIP+4 extension \"{0}\": expected 4 digits")]
    InvalidZipExtension(String),

    /// The state is not a 2-character abbreviation.
    #[error("invalid state \"{0}\": use the 2-letter abbreviation, not the full state name")]
    InvalidState(String),

    /// The overseas military designator is not one of the fixed set.
    #[error("invalid overseas military designator \"{0}\": expected one of CPR, OPC, PSC, UPR, UNIT")]
    InvalidDesignator(String),
}

/// City, state, and ZIP code shared by every address shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Locality {
    city: String,
    state: String,
    zipcode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    zipcode_ext: Option<String>,
}

impl Locality {
    /// Creates a locality, uppercasing every field.
    ///
    /// # Errors
    ///
    /// * [`ValidationError::InvalidState`] if `state` is not 2 characters
    /// * [`ValidationError::InvalidZip`] if `zipcode` is not 5 ASCII digits
    /// * [`ValidationError::InvalidZipExtension`] if `zipcode_ext` is present
    ///   and not 4 ASCII digits
    pub fn new(
        city: &str,
        state: &str,
        zipcode: &str,
        zipcode_ext: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let state = state.trim().to_uppercase();
        if state.chars().count() != 2 {
            return Err(ValidationError::InvalidState(state));
        }
        if !is_digits(zipcode, 5) {
            return Err(ValidationError::InvalidZip(zipcode.to_string()));
        }
        if let Some(ext) = zipcode_ext {
            if !is_digits(ext, 4) {
                return Err(ValidationError::InvalidZipExtension(ext.to_string()));
            }
        }

        Ok(Self {
            city: city.trim().to_uppercase(),
            state,
            zipcode: zipcode.to_string(),
            zipcode_ext: zipcode_ext.map(str::to_string),
        })
    }

    /// The city name.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// The 2-letter USPS state abbreviation.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// The 5-digit ZIP code.
    #[must_use]
    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    /// The 4-digit ZIP+4 extension, if present.
    #[must_use]
    pub fn zipcode_ext(&self) -> Option<&str> {
        self.zipcode_ext.as_deref()
    }

    /// The ZIP code including the `-EXT` part when an extension is present.
    #[must_use]
    pub fn zipcode_full(&self) -> String {
        match &self.zipcode_ext {
            Some(ext) => format!("{}-{ext}", self.zipcode),
            None => self.zipcode.clone(),
        }
    }
}

impl fmt::Display for Locality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.city, self.state, self.zipcode_full())
    }
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// Address-type designator for overseas military (APO/FPO/DPO) mail.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Designator {
    /// Common postal room.
    Cpr,
    /// Overseas postal center.
    Opc,
    /// Postal service center.
    Psc,
    /// Unit postal room.
    Upr,
    /// Military unit.
    Unit,
}

impl Designator {
    /// Every designator, in USPS listing order.
    pub const ALL: &[Self] = &[Self::Cpr, Self::Opc, Self::Psc, Self::Upr, Self::Unit];

    /// Parses a designator, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDesignator`] if the value is not one
    /// of `CPR`, `OPC`, `PSC`, `UPR`, or `UNIT`.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        value
            .trim()
            .to_uppercase()
            .parse()
            .map_err(|_| ValidationError::InvalidDesignator(value.to_string()))
    }
}

/// Human-readable name of an address shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum AddressType {
    /// Mail held at the post office for pickup.
    #[strum(serialize = "General Delivery")]
    GeneralDelivery,
    /// Highway contract route and box.
    #[strum(serialize = "Highway Contract Route")]
    HighwayContractRoute,
    /// APO/FPO/DPO military address.
    #[strum(serialize = "Overseas Military")]
    OverseasMilitary,
    /// Post office box.
    #[strum(serialize = "Post Office Box")]
    PostOfficeBox,
    /// Rural route and box.
    #[strum(serialize = "Rural Route")]
    RuralRoute,
    /// Street address.
    #[strum(serialize = "Standard Street")]
    Standard,
}

/// Fields of a standard street address, e.g. `9262 COUNTY LINE RD N APT 105`.
///
/// Every field is optional. Empty strings are treated as absent once the
/// fields are wrapped in an [`Address`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct StandardAddress {
    /// House number, possibly with a trailing fraction (`51 1/2`).
    pub address_number: Option<String>,
    /// Direction before the street name (`N`, `SE`, ...).
    pub predirectional: Option<String>,
    /// Street name (`COUNTY LINE`).
    pub street_name: Option<String>,
    /// Normalized street suffix (`RD`).
    pub suffix: Option<String>,
    /// Direction after the street name.
    pub postdirectional: Option<String>,
    /// Secondary unit designator (`APT`, `STE`, `#`).
    pub secondary_unit_type: Option<String>,
    /// Secondary unit value (`105`).
    pub secondary_unit_value: Option<String>,
}

impl StandardAddress {
    /// The seven fields in the order USPS writes them.
    #[must_use]
    pub fn fields(&self) -> [Option<&str>; 7] {
        [
            self.address_number.as_deref(),
            self.predirectional.as_deref(),
            self.street_name.as_deref(),
            self.suffix.as_deref(),
            self.postdirectional.as_deref(),
            self.secondary_unit_type.as_deref(),
            self.secondary_unit_value.as_deref(),
        ]
    }

    fn canonicalize(self) -> Self {
        let canon = |field: Option<String>| {
            field
                .map(|value| value.trim().to_uppercase())
                .filter(|value| !value.is_empty())
        };

        Self {
            address_number: canon(self.address_number),
            predirectional: canon(self.predirectional),
            street_name: canon(self.street_name),
            suffix: canon(self.suffix),
            postdirectional: canon(self.postdirectional),
            secondary_unit_type: canon(self.secondary_unit_type),
            secondary_unit_value: canon(self.secondary_unit_value),
        }
    }
}

/// The shape-specific part of an [`Address`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AddressKind {
    /// `GENERAL DELIVERY`
    GeneralDelivery,
    /// `PO BOX 987`
    PostOfficeBox {
        /// Box number; may contain letters (`123B`, `C`).
        box_number: String,
    },
    /// `RR 2 BOX 152`
    RuralRoute {
        /// Route number.
        route_number: String,
        /// Box number on the route.
        box_number: String,
    },
    /// `HC 68 BOX 23A`
    HighwayContractRoute {
        /// Route number.
        route_number: String,
        /// Box number on the route.
        box_number: String,
    },
    /// `PSC 802 BOX 74`
    OverseasMilitary {
        /// Which kind of military address this is.
        designator: Designator,
        /// The number following the designator.
        address_number: String,
        /// Box number.
        box_number: String,
    },
    /// Street address.
    Standard(StandardAddress),
}

impl AddressKind {
    /// The canonical delivery line for this shape.
    #[must_use]
    pub fn delivery_line(&self) -> String {
        match self {
            Self::GeneralDelivery => "GENERAL DELIVERY".to_string(),
            Self::PostOfficeBox { box_number } => format!("PO BOX {box_number}"),
            Self::RuralRoute {
                route_number,
                box_number,
            } => format!("RR {route_number} BOX {box_number}"),
            Self::HighwayContractRoute {
                route_number,
                box_number,
            } => format!("HC {route_number} BOX {box_number}"),
            Self::OverseasMilitary {
                designator,
                address_number,
                box_number,
            } => format!("{designator} {address_number} BOX {box_number}"),
            Self::Standard(standard) => standard
                .fields()
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// The [`AddressType`] of this shape.
    #[must_use]
    pub const fn address_type(&self) -> AddressType {
        match self {
            Self::GeneralDelivery => AddressType::GeneralDelivery,
            Self::PostOfficeBox { .. } => AddressType::PostOfficeBox,
            Self::RuralRoute { .. } => AddressType::RuralRoute,
            Self::HighwayContractRoute { .. } => AddressType::HighwayContractRoute,
            Self::OverseasMilitary { .. } => AddressType::OverseasMilitary,
            Self::Standard(_) => AddressType::Standard,
        }
    }
}

/// A structured United States postal address.
///
/// Constructed once through one of the shape constructors and immutable
/// afterwards. Two addresses are equal when they have the same shape and
/// every field matches.
///
/// `Display` renders the canonical two-line form:
///
/// ```text
/// 123 N MAIN ST
/// SPRINGFIELD IL 12345-6789
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    #[serde(flatten)]
    kind: AddressKind,
    #[serde(flatten)]
    locality: Locality,
}

impl Address {
    /// Creates a general delivery address.
    #[must_use]
    pub const fn general_delivery(locality: Locality) -> Self {
        Self {
            kind: AddressKind::GeneralDelivery,
            locality,
        }
    }

    /// Creates a post office box address.
    #[must_use]
    pub fn post_office_box(box_number: &str, locality: Locality) -> Self {
        Self {
            kind: AddressKind::PostOfficeBox {
                box_number: box_number.to_uppercase(),
            },
            locality,
        }
    }

    /// Creates a rural route address.
    #[must_use]
    pub fn rural_route(route_number: &str, box_number: &str, locality: Locality) -> Self {
        Self {
            kind: AddressKind::RuralRoute {
                route_number: route_number.to_uppercase(),
                box_number: box_number.to_uppercase(),
            },
            locality,
        }
    }

    /// Creates a highway contract route address.
    #[must_use]
    pub fn highway_contract_route(
        route_number: &str,
        box_number: &str,
        locality: Locality,
    ) -> Self {
        Self {
            kind: AddressKind::HighwayContractRoute {
                route_number: route_number.to_uppercase(),
                box_number: box_number.to_uppercase(),
            },
            locality,
        }
    }

    /// Creates an overseas military address.
    #[must_use]
    pub fn overseas_military(
        designator: Designator,
        address_number: &str,
        box_number: &str,
        locality: Locality,
    ) -> Self {
        Self {
            kind: AddressKind::OverseasMilitary {
                designator,
                address_number: address_number.to_uppercase(),
                box_number: box_number.to_uppercase(),
            },
            locality,
        }
    }

    /// Creates a standard street address.
    #[must_use]
    pub fn standard(fields: StandardAddress, locality: Locality) -> Self {
        Self {
            kind: AddressKind::Standard(fields.canonicalize()),
            locality,
        }
    }

    /// The shape-specific fields.
    #[must_use]
    pub const fn kind(&self) -> &AddressKind {
        &self.kind
    }

    /// The city, state, and ZIP code.
    #[must_use]
    pub const fn locality(&self) -> &Locality {
        &self.locality
    }

    /// The shape of this address.
    #[must_use]
    pub const fn address_type(&self) -> AddressType {
        self.kind.address_type()
    }

    /// The first canonical line (everything but city, state, and ZIP).
    #[must_use]
    pub fn delivery_line(&self) -> String {
        self.kind.delivery_line()
    }

    /// The second canonical line: `CITY STATE ZIP[-EXT]`.
    #[must_use]
    pub fn last_line(&self) -> String {
        self.locality.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.delivery_line(), self.locality)
    }
}
