//! JSON 程序加载与运行

use crate::error::FileError;
use serde_json::Value as Json;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use zgeo_core::eval::Evaluator;
use zgeo_core::geometry::Value;

/// 从字符串解析程序
pub fn parse_program(text: &str) -> Result<Json, FileError> {
    Ok(serde_json::from_str(text)?)
}

/// 从任意读取器读取程序
pub fn read_program(reader: impl Read) -> Result<Json, FileError> {
    Ok(serde_json::from_reader(reader)?)
}

/// 从文件加载程序
pub fn load_program(path: &Path) -> Result<Json, FileError> {
    let file = File::open(path)?;
    let program = read_program(BufReader::new(file))?;

    tracing::info!("Loaded program from {}", path.display());

    Ok(program)
}

/// 求值已解码的程序
pub async fn run(evaluator: &Evaluator, program: &Json) -> Result<Value, FileError> {
    let value = evaluator.evaluate_json(program).await?;
    tracing::info!("Program evaluated to {}", value.type_name());
    Ok(value)
}

/// 解析并求值
pub async fn run_str(evaluator: &Evaluator, text: &str) -> Result<Value, FileError> {
    let program = parse_program(text)?;
    run(evaluator, &program).await
}
