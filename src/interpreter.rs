/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, executes
/// statements for their effect on the variable store, and reports runtime
/// errors. It is the execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every node variant through one exhaustive match.
/// - Applies arithmetic and comparison operators in the numeric domain.
/// - Runs assignments, conditionals and loops against a borrowed store.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces, on demand, a stream of
/// tokens: numbers, strings, booleans, identifiers, keywords and operators.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Skips whitespace and `#` comments.
/// - Reports lexical errors for invalid input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer with one token of lookahead and
/// constructs the program tree by recursive descent.
///
/// # Responsibilities
/// - Encodes operator precedence and the statement grammar.
/// - Desugars `elsif` chains into nested `if` nodes.
/// - Reports the first syntax error with its line.
pub mod parser;
/// The store module holds variable bindings.
///
/// A store maps the single-letter variables `A`-`Z` to numbers. It is created
/// by the caller for each run and lent to the evaluator.
pub mod store;
