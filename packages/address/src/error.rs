//! Errors raised while parsing the delivery-address line.

use std::fmt;

/// What went wrong in a [`StructuralError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The delivery address spans more than one line.
    UnexpectedLineBreak,
    /// Nothing in the delivery address could be tokenized.
    NoTokens,
    /// A PO box or route address ends before its box number.
    MissingBoxNumber,
    /// A route number starts with a letter or symbol.
    InvalidRouteNumber,
    /// More than one `#` appears.
    MultiplePoundSigns,
    /// A `#` directly follows a secondary unit designator (`APT #`).
    ConflictingUnitSpecifier,
    /// A bare `.`, `-`, or `/` token.
    UnexpectedToken,
    /// A secondary unit designator is the last token.
    MissingUnitValue,
}

impl ParseErrorKind {
    /// Short human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::UnexpectedLineBreak => "unexpected line break",
            Self::NoTokens => "no valid tokens found",
            Self::MissingBoxNumber => "missing box number",
            Self::InvalidRouteNumber => "invalid route number, cannot begin with a letter or symbol",
            Self::MultiplePoundSigns => "at most one pound sign (#) is permitted in an address",
            Self::ConflictingUnitSpecifier => {
                "cannot have pound sign (#) if a unit designator is already present"
            }
            Self::UnexpectedToken => "unexpected token",
            Self::MissingUnitValue => "missing value for secondary unit",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// The delivery address could not be decomposed.
///
/// Carries the text that was scanned and the character offset of the
/// problem. `Display` points a caret at it:
///
/// ```text
/// error parsing address at index 6 (missing box number), near:
/// PO BOX
///       ^
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralError {
    kind: ParseErrorKind,
    position: usize,
    source_text: String,
}

impl StructuralError {
    /// Creates an error at character offset `position` of `source_text`.
    #[must_use]
    pub fn new(kind: ParseErrorKind, source_text: &str, position: usize) -> Self {
        Self {
            kind,
            position,
            source_text: source_text.to_string(),
        }
    }

    /// What went wrong.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Character offset into [`Self::source_text`].
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The delivery-address text the position refers to.
    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error parsing address at index {} ({}), near:\n{}\n{:>width$}",
            self.position,
            self.kind,
            self.source_text,
            "^",
            width = self.position + 1
        )
    }
}

impl std::error::Error for StructuralError {}
