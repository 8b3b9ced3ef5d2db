//! Error types and error handling for the compiler.
//!
//! This module defines the error type used throughout the compilation
//! process. It covers:
//!
//! - Syntax errors raised while parsing the token stream
//! - Name resolution and arity errors raised during code generation
//! - Redefinition and verification errors for whole functions
//!
//! Tokens carry no source positions, so diagnostics identify the offending
//! lexeme or name instead of a location.

pub mod errors;
