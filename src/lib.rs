// SPDX-License-Identifier: Unlicense
//! Syntax checker for a single integer assignment such as `x = 2 * (y + 1);`.
//!
//! Source text goes through [`lexer`] and [`parser`] into an [`ast::SyntaxTree`],
//! which [`render`] turns into an indented outline or a Graphviz document.
pub mod ast;
pub mod driver;
pub mod error;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod render;
pub mod token;

pub use ast::SyntaxTree;
pub use error::{Error, LexError, ParseError};
pub use options::SyntaxOptions;
