//! End-to-end scans of complete Routel route declarations.

use routel::{Scanner, Token};

fn assert_scan(input: &str, expected: &[(Token, &str)]) {
    let mut scanner = Scanner::new(input);
    for (i, (token, literal)) in expected.iter().enumerate() {
        let got = scanner.next_token();
        assert_eq!(
            got,
            (*token, literal.to_string()),
            "token #{i} mismatch in {input:?}"
        );
    }
    assert_eq!(scanner.next_token(), (Token::Eof, String::new()));
}

#[test]
fn scans_metadata_block() {
    let input = "$info demo() {
    return (
        @name 'sample'
        @version '1.0.0'
        @desc 'demo service'
    )
}
";
    assert_scan(
        input,
        &[
            (Token::Info, ""),
            (Token::Ident, "demo"),
            (Token::LeftParen, ""),
            (Token::RightParen, ""),
            (Token::LeftBrace, ""),
            (Token::Semicolon, ""),
            (Token::Return, "return"),
            (Token::LeftParen, ""),
            (Token::Semicolon, ""),
            (Token::Name, ""),
            (Token::String, "'sample'"),
            (Token::Semicolon, ""),
            (Token::Version, ""),
            (Token::String, "'1.0.0'"),
            (Token::Semicolon, ""),
            (Token::Desc, ""),
            (Token::String, "'demo service'"),
            (Token::Semicolon, ""),
            (Token::RightParen, ""),
            (Token::Semicolon, ""),
            (Token::RightBrace, ""),
            (Token::Semicolon, ""),
        ],
    );
}

#[test]
fn scans_route_declaration() {
    let input = "$get /api/items/{id} (@path('id') id, @query('page') page) {
    let total = 1 + 2
    let ratio = 2.5
    return (
        @body('json') total
        @code 200
    )
}
";
    assert_scan(
        input,
        &[
            (Token::Get, ""),
            (Token::Slash, ""),
            (Token::Ident, "api"),
            (Token::Slash, ""),
            (Token::Ident, "items"),
            (Token::Slash, ""),
            (Token::LeftBrace, ""),
            (Token::Ident, "id"),
            (Token::RightBrace, ""),
            (Token::LeftParen, ""),
            (Token::Path, ""),
            (Token::LeftParen, ""),
            (Token::String, "'id'"),
            (Token::RightParen, ""),
            (Token::Ident, "id"),
            (Token::Comma, ""),
            (Token::Query, ""),
            (Token::LeftParen, ""),
            (Token::String, "'page'"),
            (Token::RightParen, ""),
            (Token::Ident, "page"),
            (Token::RightParen, ""),
            (Token::LeftBrace, ""),
            (Token::Semicolon, ""),
            (Token::Let, "let"),
            (Token::Ident, "total"),
            (Token::Assign, ""),
            (Token::Int, "1"),
            (Token::Plus, ""),
            // The digit run consumes its trailing newline, so no Semicolon
            // follows either number on these two lines.
            (Token::Int, "2"),
            (Token::Let, "let"),
            (Token::Ident, "ratio"),
            (Token::Assign, ""),
            (Token::Float, "2.5"),
            (Token::Return, "return"),
            (Token::LeftParen, ""),
            (Token::Semicolon, ""),
            (Token::Body, ""),
            (Token::LeftParen, ""),
            (Token::String, "'json'"),
            (Token::RightParen, ""),
            (Token::Ident, "total"),
            (Token::Semicolon, ""),
            (Token::Code, ""),
            (Token::Int, "200"),
            (Token::RightParen, ""),
            (Token::Semicolon, ""),
            (Token::RightBrace, ""),
            (Token::Semicolon, ""),
        ],
    );
}

#[test]
fn scans_conditionals_and_operators() {
    let input = "if a <= b && !done { c = a != b } else { d = x | y }";
    assert_scan(
        input,
        &[
            (Token::If, "if"),
            (Token::Ident, "a"),
            (Token::LtEq, ""),
            (Token::Ident, "b"),
            (Token::AndAnd, ""),
            (Token::Bang, ""),
            (Token::Ident, "done"),
            (Token::LeftBrace, ""),
            (Token::Ident, "c"),
            (Token::Assign, ""),
            (Token::Ident, "a"),
            (Token::NotEq, ""),
            (Token::Ident, "b"),
            (Token::RightBrace, ""),
            (Token::Else, "else"),
            (Token::LeftBrace, ""),
            (Token::Ident, "d"),
            (Token::Assign, ""),
            (Token::Ident, "x"),
            (Token::Pipe, ""),
            (Token::Ident, "y"),
            (Token::RightBrace, ""),
        ],
    );
}

#[test]
fn number_consumes_its_trailing_terminator() {
    let mut scanner = Scanner::new("200\n)");
    assert_eq!(scanner.next_token(), (Token::Int, "200".to_string()));
    // The newline went with the digit run; the next token is the paren.
    assert_eq!(scanner.next_token(), (Token::RightParen, String::new()));
    assert_eq!(scanner.next_token(), (Token::Eof, String::new()));
}

#[test]
fn string_does_not_consume_its_trailing_terminator() {
    let mut scanner = Scanner::new("'x'\n)");
    assert_eq!(scanner.next_token(), (Token::String, "'x'".to_string()));
    assert_eq!(scanner.next_token(), (Token::Semicolon, String::new()));
    assert_eq!(scanner.next_token(), (Token::RightParen, String::new()));
}

#[test]
fn illegal_tokens_do_not_stop_the_stream() {
    let mut scanner = Scanner::new("$bogus ~ 12a ok");
    assert_eq!(scanner.next_token(), (Token::Illegal, String::new()));
    assert_eq!(scanner.next_token(), (Token::Illegal, String::new()));
    assert_eq!(scanner.next_token(), (Token::Illegal, "12a".to_string()));
    assert_eq!(scanner.next_token(), (Token::Ident, "ok".to_string()));
    assert_eq!(scanner.next_token(), (Token::Eof, String::new()));
}

#[test]
fn strict_scan_reports_the_first_illegal_token() {
    let mut scanner = Scanner::new("let x = 12a ");
    let err = scanner.scan_tokens().unwrap_err();
    assert!(err.to_string().contains("12a"), "got: {err}");
}

#[test]
fn fresh_scanner_restarts_the_same_buffer() {
    let input = "$get /ping () { return 200 }";
    let first: Vec<_> = Scanner::new(input).collect();
    let second: Vec<_> = Scanner::new(input).collect();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}
