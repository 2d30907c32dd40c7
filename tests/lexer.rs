use elsif::{
    LexError, Token,
    interpreter::lexer::Lexer,
    tokenize,
};

fn kinds(src: &str) -> Vec<Token> {
    tokenize(src).unwrap_or_else(|e| panic!("Lexing {src:?} failed: {e}"))
                 .into_iter()
                 .map(|(token, _)| token)
                 .collect()
}

#[test]
fn numeric_literals_round_trip() {
    for n in [0_i64, 7, 42, 1_000_000, 9_007_199_254_740_991] {
        assert_eq!(kinds(&n.to_string()), vec![Token::Integer(n)]);
    }
    for r in [0.5, 3.25, 100.125, 2.0] {
        assert_eq!(kinds(&format!("{r:?}")), vec![Token::Real(r)]);
    }
}

#[test]
fn trailing_dot_is_a_real() {
    assert_eq!(kinds("3."), vec![Token::Real(3.0)]);
    assert_eq!(kinds("3.+1"), vec![Token::Real(3.0), Token::Plus, Token::Integer(1)]);
}

#[test]
fn two_character_operators_need_one_lookahead() {
    assert_eq!(kinds("== = != >= > <= <"),
               vec![Token::EqualEqual,
                    Token::Equals,
                    Token::BangEqual,
                    Token::GreaterEqual,
                    Token::Greater,
                    Token::LessEqual,
                    Token::Less]);
    assert_eq!(kinds("A=>B"),
               vec![Token::Identifier("A".into()),
                    Token::Equals,
                    Token::Greater,
                    Token::Identifier("B".into())]);
}

#[test]
fn punctuation() {
    assert_eq!(kinds("+-*/%();,."),
               vec![Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash,
                    Token::Percent,
                    Token::LParen,
                    Token::RParen,
                    Token::Semicolon,
                    Token::Comma,
                    Token::Dot]);
}

#[test]
fn keywords_are_lower_case_only() {
    assert_eq!(kinds("if elsif else while end"),
               vec![Token::If, Token::Elsif, Token::Else, Token::While, Token::End]);
    assert_eq!(kinds("IF Else"),
               vec![Token::Identifier("IF".into()), Token::Identifier("Else".into())]);
    assert_eq!(kinds("iffy end_2"),
               vec![Token::Identifier("iffy".into()), Token::Identifier("end_2".into())]);
}

#[test]
fn booleans_and_strings() {
    assert_eq!(kinds("true false"), vec![Token::Bool(true), Token::Bool(false)]);
    assert_eq!(kinds("\"hi # there\""), vec![Token::Str("hi # there".into())]);
    assert_eq!(kinds("\"\""), vec![Token::Str(String::new())]);
}

#[test]
fn comments_and_whitespace_are_skipped() {
    assert_eq!(kinds("A = 1 # set A\n\t# whole line\r\nB"),
               vec![Token::Identifier("A".into()),
                    Token::Equals,
                    Token::Integer(1),
                    Token::Identifier("B".into())]);
}

#[test]
fn lines_are_tracked() {
    let tokens = tokenize("A\n\nB # c\nC").unwrap();
    let lines: Vec<usize> = tokens.iter().map(|(_, line)| *line).collect();
    assert_eq!(lines, vec![1, 3, 4]);
}

#[test]
fn multi_line_strings_report_their_first_line() {
    assert_eq!(tokenize("\"a\nb\" 1").unwrap(),
               vec![(Token::Str("a\nb".into()), 1), (Token::Integer(1), 2)]);
    assert_eq!(tokenize("A\n\"x\n\ny\"\nB").unwrap(),
               vec![(Token::Identifier("A".into()), 1),
                    (Token::Str("x\n\ny".into()), 2),
                    (Token::Identifier("B".into()), 5)]);
    assert_eq!(tokenize("\n\"never\nclosed"), Err(LexError::UnterminatedString { line: 2 }));
}

#[test]
fn every_blank_character_is_whitespace() {
    assert_eq!(kinds("A\x0B=\x0C1\x1C;\x1F\u{2003}B\u{3000}"),
               vec![Token::Identifier("A".into()),
                    Token::Equals,
                    Token::Integer(1),
                    Token::Semicolon,
                    Token::Identifier("B".into())]);
    assert_eq!(tokenize("A\u{00A0}"),
               Err(LexError::UnexpectedCharacter { found: '\u{00A0}',
                                                   line:  1, }));
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("1");
    assert_eq!(lexer.next_token().unwrap().0, Token::Integer(1));
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap().0, Token::Eof);
    }
}

#[test]
fn lone_bang_is_an_error() {
    assert_eq!(tokenize("A ! B"), Err(LexError::ExpectedEqualsAfterBang { line: 1 }));
    assert_eq!(tokenize("\n!"), Err(LexError::ExpectedEqualsAfterBang { line: 2 }));
}

#[test]
fn unknown_characters_are_errors() {
    assert_eq!(tokenize("A = 1 & 2"),
               Err(LexError::UnexpectedCharacter { found: '&', line: 1 }));
    assert_eq!(tokenize("{"), Err(LexError::UnexpectedCharacter { found: '{', line: 1 }));
}

#[test]
fn unterminated_string_is_an_error() {
    assert!(matches!(tokenize("A = \"oops"), Err(LexError::UnterminatedString { .. })));
}

#[test]
fn oversized_integer_is_an_error() {
    assert!(matches!(tokenize("99999999999999999999"),
                     Err(LexError::IntegerTooLarge { .. })));
}

#[test]
fn lexing_halts_after_an_error() {
    let mut lexer = Lexer::new("1 @ 2");
    assert_eq!(lexer.next_token().unwrap().0, Token::Integer(1));
    assert!(lexer.next_token().is_err());
    assert_eq!(lexer.next_token().unwrap().0, Token::Eof);
}
