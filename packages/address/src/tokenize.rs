//! Delivery-address tokenizer.

use crate::error::{ParseErrorKind, StructuralError};
use crate::token::{OpenToken, Token, TokenKind};

/// Splits a single-line delivery address into classified tokens.
///
/// Letters, digits, `.`, `-`, and `/` accumulate into tokens. `#` is always
/// a token of its own. Anything else separates tokens and is dropped.
/// Token positions are character offsets into `text`.
///
/// # Errors
///
/// Returns [`ParseErrorKind::UnexpectedLineBreak`] if `text` contains a
/// `\n` or `\r`.
pub fn tokenize(text: &str) -> Result<Vec<Token>, StructuralError> {
    let mut tokens = Vec::new();
    let mut open: Option<OpenToken> = None;

    for (position, c) in text.chars().enumerate() {
        if matches!(c, '\n' | '\r') {
            return Err(StructuralError::new(
                ParseErrorKind::UnexpectedLineBreak,
                text,
                position,
            ));
        }

        if c == '#' {
            tokens.extend(open.take().map(OpenToken::close));
            tokens.push(Token::new(c.to_string(), TokenKind::Pound, position));
            continue;
        }

        let Some(kind) = TokenKind::opened_by(c) else {
            tokens.extend(open.take().map(OpenToken::close));
            continue;
        };

        if let Some(token) = &mut open {
            token.push(c);
        } else {
            open = Some(OpenToken::new(c, kind, position));
        }
    }

    tokens.extend(open.map(OpenToken::close));
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text).unwrap().iter().map(Token::kind).collect()
    }

    fn literals(text: &str) -> Vec<String> {
        tokenize(text)
            .unwrap()
            .iter()
            .map(|t| t.literal().to_string())
            .collect()
    }

    #[test]
    fn classifies_numbers() {
        assert_eq!(kinds("123"), [TokenKind::Number]);
        assert_eq!(kinds("123."), [TokenKind::Decimal]);
        assert_eq!(kinds("12.5"), [TokenKind::Decimal]);
        assert_eq!(kinds("1/2"), [TokenKind::Fraction]);
        assert_eq!(kinds("123A"), [TokenKind::NumberSuffixed]);
        assert_eq!(kinds("104-12"), [TokenKind::NumberSuffixed]);
        assert_eq!(kinds("1/2A"), [TokenKind::NumberSuffixed]);
        assert_eq!(kinds("1.2.3"), [TokenKind::NumberSuffixed]);
    }

    #[test]
    fn classifies_words_and_specials() {
        assert_eq!(kinds("MAIN"), [TokenKind::Word]);
        assert_eq!(kinds("-"), [TokenKind::Special]);
        assert_eq!(kinds("#"), [TokenKind::Pound]);
        // Words absorb `.`, `-`, and digits without changing kind.
        assert_eq!(literals("ST.-"), ["ST.-"]);
        assert_eq!(kinds("ST.-"), [TokenKind::Word]);
        assert_eq!(kinds("A1-B"), [TokenKind::Word]);
        assert_eq!(kinds("-5"), [TokenKind::Special]);
    }

    #[test]
    fn pound_splits_tokens() {
        assert_eq!(literals("A#B"), ["A", "#", "B"]);
        assert_eq!(literals("ST #45"), ["ST", "#", "45"]);
        assert_eq!(literals("##"), ["#", "#"]);
    }

    #[test]
    fn separators_are_dropped() {
        assert_eq!(literals("201 FILBERT ST,STE 700"), ["201", "FILBERT", "ST", "STE", "700"]);
        assert_eq!(literals("  (MAIN)  "), ["MAIN"]);
        assert!(tokenize("  ,;  ").unwrap().is_empty());
    }

    #[test]
    fn records_character_positions() {
        let tokens = tokenize("  12 MAIN #4").unwrap();
        let positions: Vec<usize> = tokens.iter().map(Token::position).collect();
        assert_eq!(positions, [2, 5, 10, 11]);
    }

    #[test]
    fn positions_count_characters_not_bytes() {
        let tokens = tokenize("É 12").unwrap();
        assert_eq!(tokens[0].literal(), "12");
        assert_eq!(tokens[0].position(), 2);
    }

    #[test]
    fn rejects_line_breaks() {
        let err = tokenize("123 MAIN ST\nAPT 5").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnexpectedLineBreak);
        assert_eq!(err.position(), 11);

        let err = tokenize("123\r").unwrap_err();
        assert_eq!(err.position(), 3);
    }
}
