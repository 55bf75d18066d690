use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// All token kinds recognized by the Routel scanner.
///
/// Discriminants are laid out in five contiguous bands: literals, operators,
/// keywords, `$`-prefixed resource verbs, and `@`-prefixed annotations. The
/// hidden `*Start`/`*End` variants delimit the bands so that membership is a
/// pair of discriminant comparisons; they carry no canonical name and are
/// never produced by the lookup functions or the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Token {
    /// A lexeme no classification rule matched.
    Illegal,
    /// End-of-input marker, returned forever once the source is exhausted.
    Eof,

    #[doc(hidden)]
    LiteralStart,
    /// Identifier (letters and underscores).
    Ident,
    /// Integer literal.
    Int,
    /// Floating-point literal.
    Float,
    /// String literal, quotes included.
    String,
    #[doc(hidden)]
    LiteralEnd,

    #[doc(hidden)]
    OperatorStart,
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Star,
    /// `/`
    Slash,

    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,

    /// `==`
    Eq,
    /// `!=`
    NotEq,

    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `&`
    Amp,
    /// `|`
    Pipe,

    /// `,`
    Comma,
    /// `;` (emitted for physical newlines, which terminate statements)
    Semicolon,
    /// `:`
    Colon,
    /// `.`
    Dot,

    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    #[doc(hidden)]
    OperatorEnd,

    #[doc(hidden)]
    KeywordStart,
    /// `let`
    Let,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `true`
    True,
    /// `false`
    False,
    #[doc(hidden)]
    KeywordEnd,

    #[doc(hidden)]
    ResourceStart,
    /// `$info` metadata block.
    Info,
    /// `$any` catch-all route.
    Any,
    /// `$get`
    Get,
    /// `$post`
    Post,
    /// `$put`
    Put,
    /// `$delete`
    Delete,
    /// `$patch`
    Patch,
    /// `$head`
    Head,
    /// `$options`
    Options,
    /// `$trace`
    Trace,
    /// `$connect`
    Connect,
    #[doc(hidden)]
    ResourceEnd,

    #[doc(hidden)]
    AnnotationStart,
    /// `@path` parameter binding.
    Path,
    /// `@query` parameter binding.
    Query,
    /// `@method` binding.
    Method,
    /// `@header` binding.
    Header,
    /// `@body` binding.
    Body,
    /// `@code` response status.
    Code,

    /// `@name` metadata field.
    Name,
    /// `@version` metadata field.
    Version,
    /// `@desc` metadata field.
    Desc,
    #[doc(hidden)]
    AnnotationEnd,
}

const KEYWORD_TOKENS: [Token; 6] = [
    Token::Let,
    Token::Return,
    Token::If,
    Token::Else,
    Token::True,
    Token::False,
];

const RESOURCE_TOKENS: [Token; 11] = [
    Token::Info,
    Token::Any,
    Token::Get,
    Token::Post,
    Token::Put,
    Token::Delete,
    Token::Patch,
    Token::Head,
    Token::Options,
    Token::Trace,
    Token::Connect,
];

const ANNOTATION_TOKENS: [Token; 9] = [
    Token::Path,
    Token::Query,
    Token::Method,
    Token::Header,
    Token::Body,
    Token::Code,
    Token::Name,
    Token::Version,
    Token::Desc,
];

lazy_static::lazy_static! {
    /// Keyword name -> token. Built once, read-only afterwards.
    static ref KEYWORDS: HashMap<&'static str, Token> = band_table(&KEYWORD_TOKENS);

    /// Resource-verb name (`$`-prefixed) -> token.
    static ref RESOURCES: HashMap<&'static str, Token> = band_table(&RESOURCE_TOKENS);

    /// Annotation name (`@`-prefixed) -> token.
    static ref ANNOTATIONS: HashMap<&'static str, Token> = band_table(&ANNOTATION_TOKENS);
}

fn band_table(tokens: &[Token]) -> HashMap<&'static str, Token> {
    tokens
        .iter()
        .filter_map(|token| token.name().map(|name| (name, *token)))
        .collect()
}

impl Token {
    /// Canonical string form of the token, or `None` for the hidden band
    /// markers, which have no source representation.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Token::Illegal => "ILLEGAL",
            Token::Eof => "EOF",

            Token::Ident => "IDENT",
            Token::Int => "INT",
            Token::Float => "FLOAT",
            Token::String => "STRING",

            Token::Assign => "=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Bang => "!",
            Token::Star => "*",
            Token::Slash => "/",

            Token::Lt => "<",
            Token::LtEq => "<=",
            Token::Gt => ">",
            Token::GtEq => ">=",

            Token::Eq => "==",
            Token::NotEq => "!=",

            Token::AndAnd => "&&",
            Token::OrOr => "||",
            Token::Amp => "&",
            Token::Pipe => "|",

            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::Colon => ":",
            Token::Dot => ".",

            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::LeftBrace => "{",
            Token::RightBrace => "}",
            Token::LeftBracket => "[",
            Token::RightBracket => "]",

            Token::Let => "let",
            Token::Return => "return",
            Token::If => "if",
            Token::Else => "else",
            Token::True => "true",
            Token::False => "false",

            Token::Info => "$info",
            Token::Any => "$any",
            Token::Get => "$get",
            Token::Post => "$post",
            Token::Put => "$put",
            Token::Delete => "$delete",
            Token::Patch => "$patch",
            Token::Head => "$head",
            Token::Options => "$options",
            Token::Trace => "$trace",
            Token::Connect => "$connect",

            Token::Path => "@path",
            Token::Query => "@query",
            Token::Method => "@method",
            Token::Header => "@header",
            Token::Body => "@body",
            Token::Code => "@code",
            Token::Name => "@name",
            Token::Version => "@version",
            Token::Desc => "@desc",

            Token::LiteralStart
            | Token::LiteralEnd
            | Token::OperatorStart
            | Token::OperatorEnd
            | Token::KeywordStart
            | Token::KeywordEnd
            | Token::ResourceStart
            | Token::ResourceEnd
            | Token::AnnotationStart
            | Token::AnnotationEnd => return None,
        };
        Some(name)
    }

    /// Check if token is a literal (identifier, int, float, string).
    pub fn is_literal(self) -> bool {
        Token::LiteralStart < self && self < Token::LiteralEnd
    }

    /// Check if token is an operator or punctuation.
    pub fn is_operator(self) -> bool {
        Token::OperatorStart < self && self < Token::OperatorEnd
    }

    /// Check if token is a reserved keyword.
    pub fn is_keyword(self) -> bool {
        Token::KeywordStart < self && self < Token::KeywordEnd
    }

    /// Check if token is a `$`-prefixed resource verb.
    pub fn is_resource(self) -> bool {
        Token::ResourceStart < self && self < Token::ResourceEnd
    }

    /// Check if token is an `@`-prefixed annotation.
    pub fn is_annotation(self) -> bool {
        Token::AnnotationStart < self && self < Token::AnnotationEnd
    }

    /// Resolve a name against whichever namespace its first character
    /// selects: `@` annotations, `$` resource verbs, anything else keywords.
    ///
    /// General-purpose entry point; the scanner calls the band-specific
    /// lookups directly once it has consumed a sigil.
    pub fn lookup(s: &str) -> Token {
        match s.chars().next() {
            None => Token::Illegal,
            Some('@') => Token::lookup_annotation(s),
            Some('$') => Token::lookup_resource(s),
            Some(_) => Token::lookup_keyword(s),
        }
    }

    /// Resolve a plain identifier: the matching keyword token, or
    /// [`Token::Ident`] if the name is not reserved. Identifiers are never
    /// illegal.
    pub fn lookup_keyword(s: &str) -> Token {
        KEYWORDS.get(s).copied().unwrap_or(Token::Ident)
    }

    /// Resolve a `$`-prefixed run: the matching resource verb, or
    /// [`Token::Illegal`] for an unrecognized name.
    pub fn lookup_resource(s: &str) -> Token {
        RESOURCES.get(s).copied().unwrap_or(Token::Illegal)
    }

    /// Resolve an `@`-prefixed run: the matching annotation, or
    /// [`Token::Illegal`] for an unrecognized name.
    pub fn lookup_annotation(s: &str) -> Token {
        ANNOTATIONS.get(s).copied().unwrap_or(Token::Illegal)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "token({})", *self as u8),
        }
    }
}
