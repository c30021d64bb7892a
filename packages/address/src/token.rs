//! Tokens produced by [`crate::tokenize`].

/// Character-shape classification of a token.
///
/// A token's kind is fixed by its first character and may be refined while
/// characters are appended (see [`TokenKind::refine`]). Refinement only
/// moves forward:
///
/// ```text
/// Number -> Decimal | Fraction | NumberSuffixed
/// Decimal | Fraction -> NumberSuffixed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Digits only (`123`).
    Number,
    /// Digits with a `.` (`12.5`, `123.`).
    Decimal,
    /// Digits with a `/` (`1/2`).
    Fraction,
    /// Starts with a digit, contains something else (`123A`, `362ND`, `104-12`).
    NumberSuffixed,
    /// A single `#`.
    Pound,
    /// Starts with a letter (`MAIN`, `N.`, `P.O.`).
    Word,
    /// Starts with `.`, `-`, or `/`.
    Special,
}

impl TokenKind {
    /// The kind of a token opened by `c`, or `None` if `c` cannot open an
    /// accumulating token (separators and `#`).
    #[must_use]
    pub const fn opened_by(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Number),
            'A'..='Z' | 'a'..='z' => Some(Self::Word),
            '.' | '-' | '/' => Some(Self::Special),
            _ => None,
        }
    }

    /// The kind after appending `c` to a token of this kind.
    #[must_use]
    pub const fn refine(self, c: char) -> Self {
        match (self, c) {
            (Self::Number, '.') => Self::Decimal,
            (Self::Number, '/') => Self::Fraction,
            (Self::Number | Self::Decimal | Self::Fraction, '0'..='9') => self,
            (Self::Number | Self::Decimal | Self::Fraction, _) => Self::NumberSuffixed,
            _ => self,
        }
    }
}

/// A closed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    literal: String,
    kind: TokenKind,
    position: usize,
}

impl Token {
    pub(crate) const fn new(literal: String, kind: TokenKind, position: usize) -> Self {
        Self {
            literal,
            kind,
            position,
        }
    }

    /// The token text as it appeared in the source.
    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// The token's kind.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Character offset of the token's first character.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Character offset just past the token's last character.
    #[must_use]
    pub fn end(&self) -> usize {
        self.position + self.literal.chars().count()
    }

    /// The literal with everything but ASCII letters and digits removed
    /// (`S.E.` -> `SE`). Used for table lookups.
    #[must_use]
    pub fn stripped(&self) -> String {
        self.literal
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect()
    }
}

/// A token still accepting characters.
#[derive(Debug)]
pub(crate) struct OpenToken {
    literal: String,
    kind: TokenKind,
    position: usize,
}

impl OpenToken {
    pub(crate) fn new(c: char, kind: TokenKind, position: usize) -> Self {
        Self {
            literal: c.to_string(),
            kind,
            position,
        }
    }

    pub(crate) fn push(&mut self, c: char) {
        self.kind = self.kind.refine(c);
        self.literal.push(c);
    }

    pub(crate) fn close(self) -> Token {
        Token::new(self.literal, self.kind, self.position)
    }
}
