//! Shape recognition for a tokenized delivery address.
//!
//! Shapes are tried in a fixed order because some are textual prefixes of
//! others (`UNIT 2050 BOX 4190` is military mail, `123 MAIN ST UNIT 5` is
//! not):
//!
//! 1. `GENERAL DELIVERY`
//! 2. route and box: `RR 2 BOX 152`, `HC 68 BOX 23A`, `PSC 802 BOX 74`
//! 3. `PO BOX 15`
//! 4. `P O BOX 15`
//! 5. standard street address (everything else)

use usps_address_models::{Address, Designator, Locality, StandardAddress};

use crate::error::{ParseErrorKind, StructuralError};
use crate::tables::ReferenceTables;
use crate::token::{Token, TokenKind};

/// Decides which address shape `tokens` form and extracts its fields.
///
/// `source` is the text the tokens were read from; it is attached to any
/// error so the position can be displayed.
///
/// # Errors
///
/// Returns a [`StructuralError`] positioned at the offending token when the
/// shape cannot be completed, or [`ParseErrorKind::NoTokens`] when `tokens`
/// is empty.
pub fn classify<T: ReferenceTables + ?Sized>(
    tokens: Vec<Token>,
    source: &str,
    locality: Locality,
    tables: &T,
) -> Result<Address, StructuralError> {
    let classifier = Classifier { source, tables };

    if tokens.is_empty() {
        return Err(classifier.error(ParseErrorKind::NoTokens, 0));
    }

    if is_general_delivery(&tokens) {
        log::debug!("classified \"{source}\" as general delivery");
        return Ok(Address::general_delivery(locality));
    }

    if let Some(route) = classifier.route_box(&tokens)? {
        log::debug!("classified \"{source}\" as {route:?}");
        return Ok(route.into_address(locality));
    }

    if let Some(box_number) = classifier.post_office_box(&tokens)? {
        log::debug!("classified \"{source}\" as post office box {box_number}");
        return Ok(Address::post_office_box(&box_number, locality));
    }

    let fields = classifier.standard(tokens)?;
    log::debug!("classified \"{source}\" as standard address {fields:?}");
    Ok(Address::standard(fields, locality))
}

fn is_general_delivery(tokens: &[Token]) -> bool {
    matches!(
        tokens,
        [general, delivery] if general.literal() == "GENERAL" && delivery.literal() == "DELIVERY"
    )
}

/// A recognized route-and-box address, before the locality is attached.
#[derive(Debug)]
enum RouteBox {
    HighwayContract { route: String, box_number: String },
    Rural { route: String, box_number: String },
    Military {
        designator: Designator,
        address_number: String,
        box_number: String,
    },
}

impl RouteBox {
    fn into_address(self, locality: Locality) -> Address {
        match self {
            Self::HighwayContract { route, box_number } => {
                Address::highway_contract_route(&route, &box_number, locality)
            }
            Self::Rural { route, box_number } => {
                Address::rural_route(&route, &box_number, locality)
            }
            Self::Military {
                designator,
                address_number,
                box_number,
            } => Address::overseas_military(designator, &address_number, &box_number, locality),
        }
    }
}

/// Which route-and-box form a leading token introduces.
#[derive(Debug, Clone, Copy)]
enum RoutePrefix {
    HighwayContract,
    Rural,
    Military(Designator),
}

impl RoutePrefix {
    fn of(token: &Token) -> Option<Self> {
        match token.stripped().as_str() {
            "HC" => Some(Self::HighwayContract),
            "RR" => Some(Self::Rural),
            other => Designator::parse(other).ok().map(Self::Military),
        }
    }
}

struct Classifier<'a, T: ?Sized> {
    source: &'a str,
    tables: &'a T,
}

impl<T: ReferenceTables + ?Sized> Classifier<'_, T> {
    fn error(&self, kind: ParseErrorKind, position: usize) -> StructuralError {
        StructuralError::new(kind, self.source, position)
    }

    /// Error positioned just past the last token.
    fn error_at_end(&self, kind: ParseErrorKind, tokens: &[Token]) -> StructuralError {
        self.error(kind, tokens.last().map_or(0, Token::end))
    }

    /// `<prefix> <number> BOX <box>`
    fn route_box(&self, tokens: &[Token]) -> Result<Option<RouteBox>, StructuralError> {
        let Some(prefix) = tokens.first().and_then(RoutePrefix::of) else {
            return Ok(None);
        };
        if tokens.get(2).is_none_or(|t| t.literal() != "BOX") {
            return Ok(None);
        }

        let Some(box_token) = tokens.get(3) else {
            return Err(self.error_at_end(ParseErrorKind::MissingBoxNumber, tokens));
        };
        let number = &tokens[1];
        if !matches!(number.kind(), TokenKind::Number | TokenKind::NumberSuffixed) {
            return Err(self.error(ParseErrorKind::InvalidRouteNumber, number.position()));
        }
        self.ignore_trailing(tokens, 4);

        let route = number.literal().to_string();
        let box_number = box_token.literal().to_string();
        Ok(Some(match prefix {
            RoutePrefix::HighwayContract => RouteBox::HighwayContract { route, box_number },
            RoutePrefix::Rural => RouteBox::Rural { route, box_number },
            RoutePrefix::Military(designator) => RouteBox::Military {
                designator,
                address_number: route,
                box_number,
            },
        }))
    }

    /// `PO BOX <box>` or `P O BOX <box>`, returning the box number.
    fn post_office_box(&self, tokens: &[Token]) -> Result<Option<String>, StructuralError> {
        let stripped_is = |index: usize, expected: &str| {
            tokens.get(index).is_some_and(|t| t.stripped() == expected)
        };
        let literal_is = |index: usize, expected: &str| {
            tokens.get(index).is_some_and(|t| t.literal() == expected)
        };

        let box_index = if stripped_is(0, "PO") && literal_is(1, "BOX") {
            2
        } else if stripped_is(0, "P") && stripped_is(1, "O") && literal_is(2, "BOX") {
            3
        } else {
            return Ok(None);
        };

        let Some(box_token) = tokens.get(box_index) else {
            return Err(self.error_at_end(ParseErrorKind::MissingBoxNumber, tokens));
        };
        self.ignore_trailing(tokens, box_index + 1);

        // A leading `-` is a zero the writer ran into the separator.
        let literal = box_token.literal();
        Ok(Some(match literal.strip_prefix('-') {
            Some(rest) => format!("0{rest}"),
            None => literal.to_string(),
        }))
    }

    fn ignore_trailing(&self, tokens: &[Token], used: usize) {
        if let Some(extra) = tokens.get(used..).filter(|rest| !rest.is_empty()) {
            log::debug!(
                "ignoring {} trailing token(s) after box number in \"{}\"",
                extra.len(),
                self.source
            );
        }
    }

    /// Decomposes a street address:
    /// `[number] [predirectional] [street name] [suffix] [postdirectional]
    /// [unit type unit value]`.
    fn standard(&self, mut tokens: Vec<Token>) -> Result<StandardAddress, StructuralError> {
        let mut fields = StandardAddress {
            address_number: take_address_number(&mut tokens),
            ..StandardAddress::default()
        };

        let (suffix_index, unit_index) = self.scan(&tokens)?;

        // The secondary unit must follow the suffix.
        let unit_index = match (unit_index, suffix_index) {
            (Some(unit), Some(suffix)) if unit <= suffix => None,
            (unit, _) => unit,
        };

        if let Some(unit) = unit_index {
            if unit + 1 == tokens.len() {
                return Err(self.error_at_end(ParseErrorKind::MissingUnitValue, &tokens));
            }
            let value = tokens.split_off(unit + 1);
            fields.secondary_unit_value = Some(join(&value));
            fields.secondary_unit_type = tokens.pop().map(|t| t.literal().to_string());
        }

        if tokens
            .last()
            .is_some_and(|t| self.tables.is_direction(&t.stripped()))
        {
            fields.postdirectional = tokens.pop().map(|t| self.direction(&t));
        }

        // A suffix match that is no longer terminal was part of the name.
        let suffix_index = suffix_index.filter(|&suffix| suffix + 1 == tokens.len());

        match suffix_index {
            None => {
                let mut start = 0;
                if tokens.len() > 1 && self.tables.is_direction(&tokens[0].stripped()) {
                    fields.predirectional = Some(self.direction(&tokens[0]));
                    start = 1;
                }
                fields.street_name = Some(street_name(&tokens[start..]));
            }
            Some(suffix) => {
                let mut start = 0;
                if suffix >= 2 && self.tables.is_direction(&tokens[0].stripped()) {
                    fields.predirectional = Some(self.direction(&tokens[0]));
                    start = 1;
                }
                fields.suffix = Some(self.suffix(&tokens[suffix]));
                fields.street_name = Some(street_name(&tokens[start..suffix]));
            }
        }

        Ok(fields)
    }

    /// Single pass locating the last suffix word and the secondary unit
    /// designator (last designator word, or the `#`). Later matches replace
    /// earlier ones.
    fn scan(&self, tokens: &[Token]) -> Result<(Option<usize>, Option<usize>), StructuralError> {
        let mut suffix_index = None;
        let mut unit_index: Option<usize> = None;
        let mut seen_pound = false;

        for (i, token) in tokens.iter().enumerate() {
            let word = token.stripped();
            if self.tables.is_secondary_unit_indicator(&word) {
                unit_index = Some(i);
            }
            if self.tables.is_street_suffix(&word) {
                suffix_index = Some(i);
            }

            match token.kind() {
                TokenKind::Pound => {
                    if seen_pound {
                        return Err(
                            self.error(ParseErrorKind::MultiplePoundSigns, token.position())
                        );
                    }
                    if unit_index.is_some_and(|unit| unit + 1 == i) {
                        return Err(self.error(
                            ParseErrorKind::ConflictingUnitSpecifier,
                            token.position(),
                        ));
                    }
                    unit_index = Some(i);
                    seen_pound = true;
                }
                TokenKind::Special => {
                    return Err(self.error(ParseErrorKind::UnexpectedToken, token.position()));
                }
                _ => {}
            }
        }

        Ok((suffix_index, unit_index))
    }

    fn direction(&self, token: &Token) -> String {
        let letters = letters(token);
        self.tables
            .normalize_direction(&letters)
            .map_or(letters, str::to_string)
    }

    fn suffix(&self, token: &Token) -> String {
        let letters = letters(token);
        self.tables
            .normalize_street_suffix(&letters)
            .map_or(letters, str::to_string)
    }
}

/// Removes a leading house number (`123`, `12.5`, `51 1/2`, `104-12`).
fn take_address_number(tokens: &mut Vec<Token>) -> Option<String> {
    let first = tokens.first()?;
    let takes = match first.kind() {
        TokenKind::Number | TokenKind::Fraction | TokenKind::Decimal => tokens.len() >= 2,
        TokenKind::NumberSuffixed => first.literal().contains('-'),
        _ => false,
    };
    if !takes {
        return None;
    }

    let first = tokens.remove(0);
    let mut number = first.literal().to_string();
    if first.kind() == TokenKind::Number
        && tokens.first().is_some_and(|t| t.kind() == TokenKind::Fraction)
    {
        let fraction = tokens.remove(0);
        number.push(' ');
        number.push_str(fraction.literal());
    }
    Some(number)
}

fn letters(token: &Token) -> String {
    token
        .literal()
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect()
}

fn join(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::literal)
        .collect::<Vec<_>>()
        .join(" ")
}

/// USPS writes hyphenated street names with spaces.
fn street_name(tokens: &[Token]) -> String {
    join(tokens)
        .replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
