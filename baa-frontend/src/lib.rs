//! Baa Compiler - Frontend
//!
//! This crate provides the front-end data backbone for the Baa compiler:
//! - AST: the ownership-managed syntax tree, its builder operations,
//!   attributes, and traversal
//! - Numeric literals: lexing of Baa numbers in both digit scripts with
//!   overflow detection
//!
//! The character-stream tokenizer and the grammar-driven parser consume
//! these pieces; they, along with semantic analysis and code generation,
//! live in their own crates.

pub mod ast;
pub mod lexer;

pub use ast::{Node, NodeAttributes, NodeFlags, NodeKind};
pub use lexer::{
    is_digit, is_number_start, lex_number, parse_number, Number, NumberError, NumberKind,
    NumberValue,
};
