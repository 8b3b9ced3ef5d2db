#![allow(clippy::module_inception)]

//! A compiler front end for a minimal expression language over `f64`.
//!
//! The pipeline is lexer → parser → AST → LLVM code generation:
//!
//! ```text
//! tokenize(source) -> Vec<Token>
//! Parser + parse_item -> Item (definition | extern | expression)
//! Compiler::compile_item -> FunctionValue
//! ```
//!
//! `compiler::compiler::compile_source` drives whole inputs through the
//! pipeline with per-unit error recovery; `main.rs` wraps it in a REPL and
//! a file mode.

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
