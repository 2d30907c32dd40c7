use crate::{
    ast::{LiteralValue, Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
    util::num::i64_to_f64_checked,
};

impl Parser<'_> {
    /// Parses a factor, the highest-precedence level of the grammar.
    ///
    /// Unary signs are right-associative, so `--x` parses as `-(-x)`.
    /// Parentheses enclose an `expr`; the parenthesized expression is returned
    /// as-is without a wrapper node.
    ///
    /// Grammar:
    /// ```text
    ///     factor := INTEGER | REAL | STRING | "true" | "false"
    ///             | ("+" | "-") factor
    ///             | "(" expr ")"
    ///             | IDENTIFIER
    /// ```
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - the current token cannot start a factor,
    /// - a `(` is not closed,
    /// - signs and parentheses nest deeper than `MAX_NESTING_DEPTH`,
    /// - an integer literal has no exact `f64` representation.
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Node> {
        let line = self.line();

        let value = match self.current() {
            Token::Integer(n) => {
                LiteralValue::Number(i64_to_f64_checked(*n, ParseError::LiteralTooLarge { line })?)
            },
            Token::Real(r) => LiteralValue::Number(*r),
            Token::Str(s) => LiteralValue::Str(s.clone()),
            Token::Bool(b) => LiteralValue::Bool(*b),
            Token::Plus | Token::Minus => return self.nested(Self::parse_unary),
            Token::LParen => return self.nested(Self::parse_grouping),
            Token::Identifier(_) => return self.parse_variable(),
            _ => return Err(self.unexpected("an expression")),
        };

        self.advance()?;
        Ok(Node::Literal { value, line })
    }

    /// Parses an identifier and returns its name.
    pub(crate) fn parse_identifier(&mut self) -> ParseResult<String> {
        match self.current() {
            Token::Identifier(name) => {
                let name = name.clone();
                self.advance()?;
                Ok(name)
            },
            _ => Err(self.unexpected("an identifier")),
        }
    }

    fn parse_unary(&mut self) -> ParseResult<Node> {
        let line = self.line();
        let op = match self.advance()? {
            Token::Minus => UnaryOperator::Negate,
            _ => UnaryOperator::Plus,
        };
        let operand = self.parse_factor()?;

        Ok(Node::UnaryOp { op,
                           operand: Box::new(operand),
                           line })
    }

    fn parse_grouping(&mut self) -> ParseResult<Node> {
        self.expect(&Token::LParen)?;
        let expr = self.parse_expr()?;
        self.expect(&Token::RParen)?;
        Ok(expr)
    }

    fn parse_variable(&mut self) -> ParseResult<Node> {
        let line = self.line();
        let name = self.parse_identifier()?;
        Ok(Node::Variable { name, line })
    }
}
