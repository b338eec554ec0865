//! 求值错误定义

use crate::expr::Command;
use thiserror::Error;

/// 求值错误
///
/// 任何一种错误都会中止整个求值，几何代数本身没有错误路径。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    #[error("Wrong parameter count for {command}: expected {expected}, found {found}")]
    WrongParameterCount {
        command: Command,
        expected: usize,
        found: usize,
    },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing clause: \"{0}\"")]
    MissingClause(String),

    #[error("Invalid syntax: {0}")]
    InvalidSyntax(String),

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Nesting depth exceeds limit of {0}")]
    DepthExceeded(usize),
}

pub type EvalResult<T> = Result<T, EvalError>;
