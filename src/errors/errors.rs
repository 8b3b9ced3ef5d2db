use thiserror::Error;

/// A diagnostic produced while parsing or lowering a top-level unit.
///
/// One error aborts exactly one definition, extern, or top-level
/// expression; the driver discards the unit and resynchronizes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParse { token: String },
    #[error("parameter {name:?} listed more than once in prototype")]
    DuplicateParameter { name: String },
    #[error("unknown variable {name:?}")]
    UnknownVariable { name: String },
    #[error("unknown function {name:?} referenced")]
    UnknownFunction { name: String },
    #[error("incorrect number of arguments: expected {expected}, received {received}")]
    ArityMismatch { expected: usize, received: usize },
    #[error("invalid binary operator {op:?}")]
    InvalidOperator { op: char },
    #[error("function {function:?} cannot be redefined")]
    Redefinition { function: String },
    #[error("generated function {function:?} failed verification")]
    FunctionVerification { function: String },
}

impl CompileError {
    pub fn get_error_name(&self) -> &str {
        match self {
            CompileError::UnexpectedToken { .. } => "UnexpectedToken",
            CompileError::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            CompileError::NumberParse { .. } => "NumberParse",
            CompileError::DuplicateParameter { .. } => "DuplicateParameter",
            CompileError::UnknownVariable { .. } => "UnknownVariable",
            CompileError::UnknownFunction { .. } => "UnknownFunction",
            CompileError::ArityMismatch { .. } => "ArityMismatch",
            CompileError::InvalidOperator { .. } => "InvalidOperator",
            CompileError::Redefinition { .. } => "Redefinition",
            CompileError::FunctionVerification { .. } => "FunctionVerification",
        }
    }
}
