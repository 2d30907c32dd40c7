use tracing::debug;

use crate::{
    ast::Node,
    error::{Error, ParseError},
    interpreter::lexer::{Lexer, Token},
};

/// Result type used by the parser.
///
/// Parsing pulls tokens from the lexer on demand, so a parse can fail with
/// either a lexing or a parsing error.
pub type ParseResult<T> = Result<T, Error>;

/// Tokens that close a construct. Outside of one they end the program early
/// and whatever follows is reported as trailing input.
const CLOSERS: [Token; 5] = [Token::Eof, Token::End, Token::Else, Token::Elsif, Token::RParen];

/// How deeply blocks, groupings and unary signs may nest.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Recursive-descent parser with one token of lookahead.
///
/// The parser owns its [`Lexer`] and requests a new token only when the
/// current one has been consumed. It is single-use: [`Parser::parse`] consumes
/// it and returns the program as a [`Node::Block`].
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token,
    line:    usize,
    depth:   usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and reads the first token.
    ///
    /// # Errors
    /// Returns [`Error::Lex`] if the very first token cannot be lexed.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let (current, line) = lexer.next_token()?;
        Ok(Self { lexer,
                  current,
                  line,
                  depth: 0 })
    }

    /// Parses the whole input into a program block.
    ///
    /// Grammar: `program := statement* EOF`
    ///
    /// # Errors
    /// Returns the first lexing or parsing error encountered, or
    /// [`ParseError::UnexpectedTrailingTokens`] if a stray `end`, `else`,
    /// `elsif` or `)` stops the program before the end of input.
    ///
    /// # Example
    /// ```
    /// use elsif::{ast::Node, interpreter::parser::core::Parser};
    ///
    /// let program = Parser::new("A = 1; B = 2").unwrap().parse().unwrap();
    /// let Node::Block { statements, .. } = program else { panic!() };
    /// assert_eq!(statements.len(), 2);
    /// ```
    pub fn parse(mut self) -> ParseResult<Node> {
        let statements = self.parse_statements(&CLOSERS)?;

        if !self.check(&Token::Eof) {
            return Err(ParseError::UnexpectedTrailingTokens { token: self.current.to_string(),
                                                              line:  self.line, }.into());
        }

        debug!(statements = statements.len(), lines = self.line, "parsed program");
        Ok(Node::Block { statements,
                         line: 1 })
    }

    /// The token under the cursor.
    pub(crate) const fn current(&self) -> &Token {
        &self.current
    }

    /// The line of the token under the cursor.
    pub(crate) const fn line(&self) -> usize {
        self.line
    }

    /// Consumes the current token and returns it, pulling the next one from
    /// the lexer.
    pub(crate) fn advance(&mut self) -> ParseResult<Token> {
        let (next, line) = self.lexer.next_token()?;
        self.line = line;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Returns `true` if the current token has the same kind as `kind`.
    pub(crate) fn check(&self, kind: &Token) -> bool {
        self.current.same_kind(kind)
    }

    /// Returns `true` if the current token matches any of `kinds`.
    pub(crate) fn check_any(&self, kinds: &[Token]) -> bool {
        kinds.iter().any(|kind| self.check(kind))
    }

    /// Consumes the current token if it has the kind of `kind`, fails
    /// otherwise.
    pub(crate) fn expect(&mut self, kind: &Token) -> ParseResult<Token> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.unexpected(describe(kind)))
        }
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] once more than
    /// [`MAX_NESTING_DEPTH`] levels are open.
    pub(crate) fn nested<T>(&mut self,
                            parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                            -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                    line:  self.line, }.into());
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Builds the error for a token that does not fit the grammar here.
    pub(crate) fn unexpected(&self, expected: impl Into<String>) -> Error {
        let expected = expected.into();
        if self.check(&Token::Eof) {
            ParseError::UnexpectedEndOfInput { expected,
                                               line: self.line }.into()
        } else {
            ParseError::UnexpectedToken { expected,
                                          found: self.current.to_string(),
                                          line: self.line }.into()
        }
    }
}

/// Human-readable name for a token kind, used in error messages.
///
/// # Example
/// ```
/// use elsif::interpreter::{lexer::Token, parser::core::describe};
///
/// assert_eq!(describe(&Token::End), "'end'");
/// assert_eq!(describe(&Token::Identifier(String::new())), "an identifier");
/// ```
#[must_use]
pub fn describe(kind: &Token) -> String {
    match kind {
        Token::Integer(_) | Token::Real(_) => "a number".to_string(),
        Token::Str(_) => "a string".to_string(),
        Token::Bool(_) => "a boolean".to_string(),
        Token::Identifier(_) => "an identifier".to_string(),
        Token::Eof => "end of input".to_string(),
        other => format!("'{}'", other.lexeme()),
    }
}

/// Joins several expected token kinds into one phrase, e.g.
/// `'elsif', 'else' or 'end'`.
#[must_use]
pub fn describe_any(kinds: &[Token]) -> String {
    let names: Vec<String> = kinds.iter().map(describe).collect();
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
    }
}
