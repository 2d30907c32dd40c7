use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses comparison chains around whole expressions.
    ///
    /// This is the outermost expression level and the one used for `if` and
    /// `while` conditions and for bare expression statements. Comparisons are
    /// also accepted one level down in [`Parser::parse_term`]; both levels are
    /// part of the grammar.
    ///
    /// The rule is: `conditional := expr (("==" | "!=" | "<" | ">" | "<=" |
    /// ">=") expr)*`
    pub(crate) fn parse_conditional(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_expr()?;

        while let Some(op) = token_to_binary_operator(self.current())
              && op.is_comparison()
        {
            let line = self.line();
            self.advance()?;
            let right = self.parse_expr()?;
            left = Node::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        Ok(left)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    pub(crate) fn parse_expr(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_term()?;

        while let Some(op) = token_to_binary_operator(self.current())
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = self.line();
            self.advance()?;
            let right = self.parse_term()?;
            left = Node::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative `*`, `/` and `%`, and the comparison
    /// operators, which bind as tightly as multiplication at this level:
    /// `1 + 2 > 2` parses as `1 + (2 > 2)`.
    ///
    /// The rule is: `term := factor (("*" | "/" | "%" | "==" | "!=" | "<" |
    /// ">" | "<=" | ">=") factor)*`
    pub(crate) fn parse_term(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_factor()?;

        while let Some(op) = token_to_binary_operator(self.current())
              && !matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = self.line();
            self.advance()?;
            let right = self.parse_factor()?;
            left = Node::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is one of `+ - * / %` or a
/// comparison operator, `None` for all other tokens.
///
/// # Example
/// ```
/// use elsif::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Percent),
///            Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}
