//! Formula tokenizer
//!
//! Splits Excel formula text into tokens without evaluating anything. The
//! scanner understands just enough of the grammar to pull out operands
//! (cell references, ranges, literals), function calls, operators, and
//! separators; it does not validate that the formula makes sense.
//!
//! Range operands stay whole: `A1:A10` is a single token, never expanded
//! into its member cells.

use std::fmt;

use crate::error::{Result, TokenizeError};

/// Excel error literals recognized by the scanner
const ERROR_LITERALS: [&str; 8] = [
    "#NULL!",
    "#DIV/0!",
    "#VALUE!",
    "#REF!",
    "#NAME?",
    "#NUM!",
    "#N/A",
    "#GETTING_DATA",
];

/// The grammatical role of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Plain text that is not a formula
    Literal,
    /// A value the formula operates on: reference, range, number, string...
    Operand,
    /// Function call open ("SUM(") or close (")")
    Func,
    /// Array literal open ("{") or close ("}")
    Array,
    /// Grouping parenthesis
    Paren,
    /// Argument or array-row separator
    Sep,
    /// Prefix operator (unary minus)
    OpPrefix,
    /// Infix operator (+, *, >=, &, ...)
    OpInfix,
    /// Postfix operator (%)
    OpPostfix,
    /// A run of whitespace
    Whitespace,
}

/// Refinement of a token's kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenSubtype {
    #[default]
    None,
    /// Quoted string operand
    Text,
    /// Numeric operand
    Number,
    /// TRUE or FALSE
    Logical,
    /// Error literal operand (#REF! etc.)
    Error,
    /// Cell reference, range, or defined name
    Range,
    /// Opening token of a function, array, or parenthesized group
    Open,
    /// Closing token of a function, array, or parenthesized group
    Close,
    /// Argument separator
    Arg,
    /// Array row separator
    Row,
}

/// A single token of formula text
///
/// Concatenating token values in order (with the leading '=') reproduces
/// the original formula; see [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The exact source text of the token
    pub value: String,
    pub kind: TokenKind,
    pub subtype: TokenSubtype,
}

impl Token {
    /// Create a token with an explicit kind and subtype
    pub fn new(value: impl Into<String>, kind: TokenKind, subtype: TokenSubtype) -> Self {
        Self {
            value: value.into(),
            kind,
            subtype,
        }
    }

    /// Create an operand token, inferring the subtype from the value
    pub fn operand(value: impl Into<String>) -> Self {
        let value = value.into();
        let subtype = if value.starts_with('"') {
            TokenSubtype::Text
        } else if value.starts_with('#') {
            TokenSubtype::Error
        } else if value == "TRUE" || value == "FALSE" {
            TokenSubtype::Logical
        } else if value.parse::<f64>().is_ok() {
            TokenSubtype::Number
        } else {
            TokenSubtype::Range
        };

        Self {
            value,
            kind: TokenKind::Operand,
            subtype,
        }
    }

    /// Check if this is an operand token
    pub fn is_operand(&self) -> bool {
        self.kind == TokenKind::Operand
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Tokenize a cell's formula text
///
/// Input that does not start with '=' is not a formula and comes back as a
/// single [`TokenKind::Literal`] token.
pub fn tokenize(formula: &str) -> Result<Vec<Token>> {
    if !formula.starts_with('=') {
        return Ok(vec![Token::new(
            formula,
            TokenKind::Literal,
            TokenSubtype::None,
        )]);
    }

    Scanner::new(formula).run()
}

/// Reassemble tokens into formula text
pub fn render(tokens: &[Token]) -> String {
    match tokens {
        [single] if single.kind == TokenKind::Literal => single.value.clone(),
        _ => {
            let mut out = String::from("=");
            for token in tokens {
                out.push_str(&token.value);
            }
            out
        }
    }
}

/// Single-pass scanner over formula characters
///
/// Characters with no special meaning accumulate in `pending`, which is
/// flushed as an operand when an operator, separator, or whitespace ends
/// it. Reported error offsets are character positions in the full formula
/// text, including the leading '='.
struct Scanner {
    chars: Vec<char>,
    pos: usize,
    pending: String,
    tokens: Vec<Token>,
    /// Currently open Func/Array/Paren groups, innermost last
    stack: Vec<TokenKind>,
}

impl Scanner {
    fn new(formula: &str) -> Self {
        Self {
            chars: formula.chars().collect(),
            // Skip the leading '='
            pos: 1,
            pending: String::new(),
            tokens: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>> {
        while self.pos < self.chars.len() {
            match self.chars[self.pos] {
                '"' => self.scan_string()?,
                '\'' => self.scan_quoted_sheet()?,
                '[' => self.scan_bracketed()?,
                '#' => self.scan_error_literal()?,
                ' ' | '\n' => self.scan_whitespace(),
                '{' => self.open_brace()?,
                '}' => self.close_brace()?,
                '(' => self.open_paren(),
                ')' => self.close_paren()?,
                ',' => self.separator_or_union(),
                ';' => self.row_separator(),
                '%' => self.postfix_percent(),
                '+' | '-' => self.plus_minus(),
                '>' | '<' => self.comparison(),
                '=' | '*' | '/' | '^' | '&' => self.infix_single(),
                c => {
                    self.pending.push(c);
                    self.pos += 1;
                }
            }
        }

        self.flush_pending();

        if let Some(open) = self.stack.last() {
            let reason = match open {
                TokenKind::Array => "unmatched opening brace",
                _ => "unmatched opening parenthesis",
            };
            return Err(TokenizeError::new(self.pos, reason));
        }

        Ok(self.tokens)
    }

    /// Emit any accumulated pending text as an operand
    fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            let value = std::mem::take(&mut self.pending);
            self.tokens.push(Token::operand(value));
        }
    }

    /// Scan a double-quoted string literal into a Text operand
    fn scan_string(&mut self) -> Result<()> {
        self.flush_pending();
        let start = self.pos;
        let mut value = String::from('"');
        self.pos += 1;

        loop {
            match self.chars.get(self.pos) {
                None => return Err(TokenizeError::new(start, "unterminated string literal")),
                Some('"') => {
                    // Doubled quote is an escaped quote
                    if self.chars.get(self.pos + 1) == Some(&'"') {
                        value.push_str("\"\"");
                        self.pos += 2;
                    } else {
                        value.push('"');
                        self.pos += 1;
                        break;
                    }
                }
                Some(&c) => {
                    value.push(c);
                    self.pos += 1;
                }
            }
        }

        self.tokens.push(Token::operand(value));
        Ok(())
    }

    /// Scan a single-quoted sheet name, extending the pending operand
    ///
    /// Quoted sheet names are part of a reference ('My Sheet'!A1), so the
    /// quoted run is appended to pending rather than emitted on its own.
    fn scan_quoted_sheet(&mut self) -> Result<()> {
        let start = self.pos;
        self.pending.push('\'');
        self.pos += 1;

        loop {
            match self.chars.get(self.pos) {
                None => return Err(TokenizeError::new(start, "unterminated quoted sheet name")),
                Some('\'') => {
                    if self.chars.get(self.pos + 1) == Some(&'\'') {
                        self.pending.push_str("''");
                        self.pos += 2;
                    } else {
                        self.pending.push('\'');
                        self.pos += 1;
                        break;
                    }
                }
                Some(&c) => {
                    self.pending.push(c);
                    self.pos += 1;
                }
            }
        }

        Ok(())
    }

    /// Scan a bracketed section (structured references, workbook prefixes)
    /// into the pending operand, honoring nesting
    fn scan_bracketed(&mut self) -> Result<()> {
        let start = self.pos;
        let mut depth = 0usize;

        loop {
            match self.chars.get(self.pos) {
                None => return Err(TokenizeError::new(start, "unmatched '['")),
                Some(&c) => {
                    self.pending.push(c);
                    self.pos += 1;
                    match c {
                        '[' => depth += 1,
                        ']' => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        Ok(())
    }

    /// Scan an error literal like #REF! or #DIV/0!
    fn scan_error_literal(&mut self) -> Result<()> {
        let rest: String = self.chars[self.pos..].iter().collect();
        let Some(&literal) = ERROR_LITERALS.iter().find(|lit| rest.starts_with(*lit)) else {
            return Err(TokenizeError::new(self.pos, "unrecognized error literal"));
        };

        if self.pending.ends_with('!') {
            // Sheet-qualified error reference like Sheet1!#REF!
            self.pending.push_str(literal);
        } else {
            self.flush_pending();
            self.tokens.push(Token::operand(literal));
        }

        self.pos += literal.chars().count();
        Ok(())
    }

    fn scan_whitespace(&mut self) {
        self.flush_pending();
        let mut value = String::new();

        while let Some(&c) = self.chars.get(self.pos) {
            if c != ' ' && c != '\n' {
                break;
            }
            value.push(c);
            self.pos += 1;
        }

        self.tokens
            .push(Token::new(value, TokenKind::Whitespace, TokenSubtype::None));
    }

    fn open_brace(&mut self) -> Result<()> {
        if !self.pending.is_empty() {
            return Err(TokenizeError::new(self.pos, "unexpected '{'"));
        }
        self.tokens
            .push(Token::new("{", TokenKind::Array, TokenSubtype::Open));
        self.stack.push(TokenKind::Array);
        self.pos += 1;
        Ok(())
    }

    fn close_brace(&mut self) -> Result<()> {
        self.flush_pending();
        match self.stack.pop() {
            Some(TokenKind::Array) => {
                self.tokens
                    .push(Token::new("}", TokenKind::Array, TokenSubtype::Close));
            }
            Some(_) => {
                return Err(TokenizeError::new(
                    self.pos,
                    "mismatched parentheses and braces",
                ))
            }
            None => return Err(TokenizeError::new(self.pos, "unexpected '}'")),
        }
        self.pos += 1;
        Ok(())
    }

    /// '(' after a name opens a function call; otherwise it groups
    fn open_paren(&mut self) {
        if self.pending.is_empty() {
            self.tokens
                .push(Token::new("(", TokenKind::Paren, TokenSubtype::Open));
            self.stack.push(TokenKind::Paren);
        } else {
            let mut value = std::mem::take(&mut self.pending);
            value.push('(');
            self.tokens
                .push(Token::new(value, TokenKind::Func, TokenSubtype::Open));
            self.stack.push(TokenKind::Func);
        }
        self.pos += 1;
    }

    fn close_paren(&mut self) -> Result<()> {
        self.flush_pending();
        match self.stack.pop() {
            Some(kind @ (TokenKind::Func | TokenKind::Paren)) => {
                self.tokens.push(Token::new(")", kind, TokenSubtype::Close));
            }
            Some(_) => {
                return Err(TokenizeError::new(
                    self.pos,
                    "mismatched parentheses and braces",
                ))
            }
            None => return Err(TokenizeError::new(self.pos, "unexpected ')'")),
        }
        self.pos += 1;
        Ok(())
    }

    /// ',' separates arguments inside a call or array; at top level it is
    /// the union operator
    fn separator_or_union(&mut self) {
        self.flush_pending();
        let token = match self.stack.last() {
            Some(TokenKind::Func | TokenKind::Array) => {
                Token::new(",", TokenKind::Sep, TokenSubtype::Arg)
            }
            _ => Token::new(",", TokenKind::OpInfix, TokenSubtype::None),
        };
        self.tokens.push(token);
        self.pos += 1;
    }

    fn row_separator(&mut self) {
        self.flush_pending();
        self.tokens
            .push(Token::new(";", TokenKind::Sep, TokenSubtype::Row));
        self.pos += 1;
    }

    fn postfix_percent(&mut self) {
        self.flush_pending();
        self.tokens
            .push(Token::new("%", TokenKind::OpPostfix, TokenSubtype::None));
        self.pos += 1;
    }

    /// '+' and '-' are either a scientific-notation sign, an infix
    /// operator, or a prefix operator
    fn plus_minus(&mut self) {
        let c = self.chars[self.pos];

        if self.continues_scientific_notation() {
            self.pending.push(c);
            self.pos += 1;
            return;
        }

        self.flush_pending();
        let kind = if self.previous_is_operand_like() {
            TokenKind::OpInfix
        } else {
            TokenKind::OpPrefix
        };
        self.tokens
            .push(Token::new(c.to_string(), kind, TokenSubtype::None));
        self.pos += 1;
    }

    /// '>' and '<', possibly combined into ">=", "<=", or "<>"
    fn comparison(&mut self) {
        self.flush_pending();
        let c = self.chars[self.pos];
        let next = self.chars.get(self.pos + 1).copied();

        let value = match (c, next) {
            ('>', Some('=')) => ">=",
            ('<', Some('=')) => "<=",
            ('<', Some('>')) => "<>",
            _ => {
                self.tokens
                    .push(Token::new(c.to_string(), TokenKind::OpInfix, TokenSubtype::None));
                self.pos += 1;
                return;
            }
        };

        self.tokens
            .push(Token::new(value, TokenKind::OpInfix, TokenSubtype::None));
        self.pos += 2;
    }

    fn infix_single(&mut self) {
        self.flush_pending();
        let c = self.chars[self.pos];
        self.tokens
            .push(Token::new(c.to_string(), TokenKind::OpInfix, TokenSubtype::None));
        self.pos += 1;
    }

    /// True when pending looks like "1.5E" so a following sign belongs to
    /// the exponent rather than being an operator
    fn continues_scientific_notation(&self) -> bool {
        let bytes = self.pending.as_bytes();
        let Some((&last, middle)) = bytes.split_last() else {
            return false;
        };
        if !matches!(last, b'E' | b'e') {
            return false;
        }
        let Some((&first, inner)) = middle.split_first() else {
            return false;
        };
        if !first.is_ascii_digit() {
            return false;
        }

        let mut dot_seen = false;
        for &b in inner {
            match b {
                b'.' if !dot_seen => dot_seen = true,
                b'0'..=b'9' => {}
                _ => return false,
            }
        }
        true
    }

    /// Look back past whitespace to decide whether '+'/'-' is infix
    fn previous_is_operand_like(&self) -> bool {
        self.tokens
            .iter()
            .rev()
            .find(|t| t.kind != TokenKind::Whitespace)
            .map(|t| {
                t.subtype == TokenSubtype::Close
                    || t.kind == TokenKind::OpPostfix
                    || t.kind == TokenKind::Operand
            })
            .unwrap_or(false)
    }
}
