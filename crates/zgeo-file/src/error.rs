//! 文件与数据格式错误定义

use thiserror::Error;
use zgeo_core::error::EvalError;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
