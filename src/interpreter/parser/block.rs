use crate::{
    ast::Node,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, describe_any},
    },
};

impl Parser<'_> {
    /// Parses statements until the current token is one of `terminators`.
    ///
    /// Semicolons separate statements but are never required; any number of
    /// them may appear before, between or after statements and are skipped.
    /// The terminator itself is left for the caller to consume.
    ///
    /// Grammar: `statements := (";"* statement)* ";"*`
    ///
    /// # Errors
    /// Reaching the end of input before a terminator is an
    /// `UnexpectedEndOfInput` error, unless end of input is itself one of the
    /// terminators.
    pub(crate) fn parse_statements(&mut self, terminators: &[Token]) -> ParseResult<Vec<Node>> {
        let mut statements = Vec::new();

        loop {
            while self.check(&Token::Semicolon) {
                self.advance()?;
            }

            if self.check_any(terminators) {
                break;
            }
            if self.check(&Token::Eof) {
                return Err(self.unexpected(describe_any(terminators)));
            }

            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parses the body of an `if` branch or a `while` loop.
    ///
    /// Behaves like [`Parser::parse_statements`], except that an empty body is
    /// represented by a single [`Node::NoOp`].
    pub(crate) fn parse_body(&mut self, terminators: &[Token]) -> ParseResult<Vec<Node>> {
        let statements = self.parse_statements(terminators)?;
        if statements.is_empty() {
            return Ok(vec![Node::NoOp]);
        }
        Ok(statements)
    }
}
