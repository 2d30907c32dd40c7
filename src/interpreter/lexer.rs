use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Real literal tokens, such as `3.14` or `2.` (the fraction may be empty).
    #[regex(r"[0-9]+\.[0-9]*", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `"hello"`. No escape processing.
    #[regex(r#""[^"]*"?"#, parse_string, allow_greedy = true)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `if`
    #[token("if")]
    If,
    /// `elsif`
    #[token("elsif")]
    Elsif,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `end`
    #[token("end")]
    End,
    /// Identifier tokens such as `A` or `counter_2`. Keywords are lower-case
    /// only, so `IF` lands here.
    #[regex(r"[A-Za-z][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Blanks other than `\n`: spaces, tabs, carriage returns, vertical tabs,
    /// form feeds, the ASCII separators `\x1C`-`\x1F` and the Unicode space
    /// and line separators that are not non-breaking.
    #[regex(r"[ \t\r\x0B\x0C\x1C-\x1F\u{1680}\u{2000}-\u{2006}\u{2008}-\u{200A}\u{2028}\u{2029}\u{205F}\u{3000}]+",
            logos::skip)]
    Ignored,
    /// End of input. Never matched by a pattern; produced by [`Lexer`] once
    /// the source is exhausted.
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(r) => write!(f, "real literal {r:?}"),
            Self::Integer(n) => write!(f, "integer literal {n}"),
            Self::Str(s) => write!(f, "string literal \"{s}\""),
            Self::Bool(b) => write!(f, "boolean literal {b}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Eof => write!(f, "end of input"),
            Self::Comment | Self::NewLine | Self::Ignored => write!(f, "whitespace"),
            symbol => write!(f, "'{}'", symbol.lexeme()),
        }
    }
}

impl Token {
    /// Returns the fixed source text of keyword and punctuation tokens.
    ///
    /// Tokens carrying a payload have no fixed spelling and return an empty
    /// string.
    ///
    /// # Example
    /// ```
    /// use elsif::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::GreaterEqual.lexeme(), ">=");
    /// assert_eq!(Token::Elsif.lexeme(), "elsif");
    /// ```
    #[must_use]
    pub const fn lexeme(&self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Elsif => "elsif",
            Self::Else => "else",
            Self::While => "while",
            Self::End => "end",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Equals => "=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            _ => "",
        }
    }

    /// Returns `true` if both tokens are of the same kind, ignoring payloads.
    ///
    /// # Example
    /// ```
    /// use elsif::interpreter::lexer::Token;
    ///
    /// assert!(Token::Integer(1).same_kind(&Token::Integer(2)));
    /// assert!(!Token::Integer(1).same_kind(&Token::Real(1.0)));
    /// ```
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the quotes from a string literal.
///
/// Returns `None` for an unterminated literal, which surfaces as a lexing
/// error. Newlines inside the literal still advance the line counter.
fn parse_string(lex: &mut logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();

    if slice.len() < 2 || !slice.ends_with('"') {
        return None;
    }
    Some(slice[1..slice.len() - 1].to_string())
}

fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// On-demand token source with line tracking.
///
/// `next_token` hands out one token per call. Once the input is exhausted, or
/// after the first error, every further call yields [`Token::Eof`].
pub struct Lexer<'src> {
    inner:  logos::Lexer<'src, Token>,
    halted: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:  Token::lexer_with_extras(source, LexerExtras { line: 1 }),
               halted: false, }
    }

    /// The line the lexer is currently on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.inner.extras.line
    }

    /// Produces the next token together with the line it was found on.
    ///
    /// # Errors
    /// Returns a [`LexError`] on an unrecognised character, a lone `!`, an
    /// unterminated string or an integer literal that does not fit in `i64`.
    ///
    /// # Example
    /// ```
    /// use elsif::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("A >= 2.");
    /// assert_eq!(lexer.next_token().unwrap().0, Token::Identifier("A".into()));
    /// assert_eq!(lexer.next_token().unwrap().0, Token::GreaterEqual);
    /// assert_eq!(lexer.next_token().unwrap().0, Token::Real(2.0));
    /// assert_eq!(lexer.next_token().unwrap().0, Token::Eof);
    /// assert_eq!(lexer.next_token().unwrap().0, Token::Eof);
    /// ```
    pub fn next_token(&mut self) -> Result<(Token, usize), LexError> {
        if self.halted {
            return Ok((Token::Eof, self.line()));
        }

        match self.inner.next() {
            Some(Ok(token)) => {
                let line = self.token_line();
                trace!(line, %token, "lexed token");
                Ok((token, line))
            },
            Some(Err(())) => {
                self.halted = true;
                Err(self.classify_error())
            },
            None => {
                self.halted = true;
                Ok((Token::Eof, self.line()))
            },
        }
    }

    /// The line the last matched slice started on.
    ///
    /// String literals may span lines and their callback has already advanced
    /// the counter past them.
    fn token_line(&self) -> usize {
        self.line() - self.inner.slice().matches('\n').count()
    }

    /// Turns the slice logos rejected into a descriptive error.
    fn classify_error(&self) -> LexError {
        let slice = self.inner.slice();
        let line = self.token_line();

        match slice.chars().next() {
            Some('!') => LexError::ExpectedEqualsAfterBang { line },
            Some('"') => LexError::UnterminatedString { line },
            Some(c) if c.is_ascii_digit() => LexError::IntegerTooLarge { literal: slice.to_string(),
                                                                          line },
            Some(c) => LexError::UnexpectedCharacter { found: c, line },
            None => LexError::UnexpectedCharacter { found: '\0', line },
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<(Token, usize), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok((Token::Eof, _)) => None,
            other => Some(other),
        }
    }
}
