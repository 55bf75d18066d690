//! # Routel - A Lexer for a Declarative HTTP Route DSL
//!
//! [![Crates.io](https://img.shields.io/crates/v/routel.svg)](https://crates.io/crates/routel)
//! [![Documentation](https://docs.rs/routel/badge.svg)](https://docs.rs/routel)
//! [![License: MIT](https://img.shields.io/badge/License-MIT-yellow.svg)](https://opensource.org/licenses/MIT)
//!
//! Routel is a small language for declaring HTTP resource handlers: route
//! declarations introduced by `$`-prefixed verbs (`$get`, `$post`, ...),
//! parameter bindings via `@`-prefixed annotations (`@path`, `@query`,
//! `@body`, ...), and an `$info` metadata block. This crate is the lexical
//! scanner: it turns raw source text into a linear stream of classified
//! tokens for a downstream parser.
//!
//! ## Features
//!
//! - **Pull-based scanning** - one token per call, no intermediate buffers
//! - **Three reserved namespaces** - keywords, `$` resource verbs, and `@`
//!   annotations resolve independently
//! - **No fatal errors** - malformed input degrades to `Illegal` tokens and
//!   scanning always continues
//! - **Newline statement termination** - physical newlines scan as statement
//!   separators, in automatic-semicolon-insertion style
//!
//! ## Quick Start
//!
//! Add Routel to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! routel = "0.1"
//! ```
//!
//! ### Basic Usage
//!
//! Pull tokens one at a time until the end-of-input marker:
//!
//! ```rust
//! use routel::{Scanner, Token};
//!
//! let source = r#"
//! $get /hello () {
//!     return (
//!         @body('text') "hello world"
//!     )
//! }
//! "#;
//!
//! let mut scanner = Scanner::new(source);
//! loop {
//!     let (token, literal) = scanner.next_token();
//!     if token == Token::Eof {
//!         break;
//!     }
//!     println!("{token} {literal}");
//! }
//! ```
//!
//! ### Strict Scanning
//!
//! Collect the whole stream at once, failing on the first illegal token:
//!
//! ```rust
//! use routel::{Scanner, Token};
//!
//! # fn main() -> routel::Result<()> {
//! let mut scanner = Scanner::new("let status = 200 ");
//! let tokens = scanner.scan_tokens()?;
//!
//! assert_eq!(tokens[0], (Token::Let, "let".to_string()));
//! assert_eq!(tokens[1], (Token::Ident, "status".to_string()));
//! assert_eq!(tokens[2], (Token::Assign, String::new()));
//! assert_eq!(tokens[3], (Token::Int, "200".to_string()));
//! assert_eq!(tokens[4], (Token::Eof, String::new()));
//! # Ok(())
//! # }
//! ```
//!
//! ### Token Lookup
//!
//! Reserved names resolve through per-namespace tables; plain identifiers
//! are never illegal:
//!
//! ```rust
//! use routel::Token;
//!
//! assert_eq!(Token::lookup("$get"), Token::Get);
//! assert_eq!(Token::lookup("@body"), Token::Body);
//! assert_eq!(Token::lookup("handler"), Token::Ident);
//! assert_eq!(Token::Get.to_string(), "$get");
//! ```
//!
//! ## Architecture
//!
//! Routel follows a classic front-end pipeline; this crate is the first
//! stage:
//!
//! ```text
//! Source Code → Scanner → Tokens → (external parser)
//! ```
//!
//! ### Main Components
//!
//! - [`Scanner`] - cursor over the source characters, one token per pull
//! - [`Token`] - closed set of token kinds with per-namespace lookup
//! - [`Error`] - failure reported by the strict [`Scanner::scan_tokens`] API
//!
//! ## Error Handling
//!
//! The scanner never raises an error mid-stream: unknown characters,
//! unrecognized `$`/`@` names, and malformed literals all come back as
//! `Illegal` tokens, and it is the consumer's call whether those are fatal.
//! The strict API makes that call for you:
//!
//! ```rust
//! use routel::Scanner;
//!
//! let mut scanner = Scanner::new("$bogus");
//! match scanner.scan_tokens() {
//!     Ok(_) => panic!("should have failed"),
//!     Err(e) => assert!(e.to_string().contains("illegal token")),
//! }
//! ```
//!
//! ## Concurrency
//!
//! Scanning is single-threaded and synchronous. The reserved-name tables are
//! built once on first use and are read-only afterwards, so any number of
//! scanners may run concurrently over their own buffers without
//! synchronization.
//!
//! ## License
//!
//! Licensed under the [MIT License](https://opensource.org/licenses/MIT).

/// Version of the Routel scanner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{Scanner, Token};
