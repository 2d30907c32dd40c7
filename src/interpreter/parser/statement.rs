use crate::{
    ast::Node,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement, selected by the current token:
    /// - an identifier starts an assignment,
    /// - `if` starts a conditional,
    /// - `while` starts a loop,
    /// - anything else is parsed as a bare conditional expression.
    ///
    /// Grammar:
    /// ```text
    ///     statement := assignment | if_statement | while_statement | conditional
    /// ```
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Node> {
        match self.current() {
            Token::Identifier(_) => self.parse_assignment(),
            Token::If => {
                let line = self.line();
                self.advance()?;
                self.nested(|parser| parser.parse_if(line))
            },
            Token::While => self.nested(Self::parse_while),
            _ => self.parse_conditional(),
        }
    }

    /// Parses an assignment. The right-hand side is an `expr`, not a
    /// `conditional`, so only comparisons at `term` level are allowed there
    /// without parentheses.
    ///
    /// Grammar: `assignment := IDENTIFIER "=" expr`
    fn parse_assignment(&mut self) -> ParseResult<Node> {
        let line = self.line();
        let name = self.parse_identifier()?;
        self.expect(&Token::Equals)?;
        let value = self.parse_expr()?;

        Ok(Node::Assign { name,
                          value: Box::new(value),
                          line })
    }

    /// Parses the remainder of an `if` or `elsif` clause, positioned after the
    /// keyword.
    ///
    /// Each `elsif` is parsed recursively and placed as the only statement of
    /// the enclosing else branch, so a chain is indistinguishable from nested
    /// `if`s. A single `end` closes the whole chain.
    ///
    /// Grammar:
    /// ```text
    ///     if_tail := conditional statements
    ///                ( "elsif" if_tail
    ///                | "else" statements "end"
    ///                | "end" )
    /// ```
    fn parse_if(&mut self, line: usize) -> ParseResult<Node> {
        let condition = self.parse_conditional()?;
        let then_branch = self.parse_body(&[Token::Elsif, Token::Else, Token::End])?;

        let else_branch = match self.current() {
            Token::Elsif => {
                let elsif_line = self.line();
                self.advance()?;
                vec![self.nested(|parser| parser.parse_if(elsif_line))?]
            },
            Token::Else => {
                self.advance()?;
                let statements = self.parse_statements(&[Token::End])?;
                self.expect(&Token::End)?;
                statements
            },
            _ => {
                self.expect(&Token::End)?;
                Vec::new()
            },
        };

        Ok(Node::If { condition: Box::new(condition),
                      then_branch,
                      else_branch,
                      line })
    }

    /// Parses a `while` loop.
    ///
    /// Grammar: `while_statement := "while" conditional statements "end"`
    fn parse_while(&mut self) -> ParseResult<Node> {
        let line = self.line();
        self.expect(&Token::While)?;
        let condition = self.parse_conditional()?;
        let body = self.parse_body(&[Token::End])?;
        self.expect(&Token::End)?;

        Ok(Node::While { condition: Box::new(condition),
                         body,
                         line })
    }
}
