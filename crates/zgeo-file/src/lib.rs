//! ZGEO 数据格式处理
//!
//! 支持：
//! - 几何值与 JSON 线格式之间的双向编解码
//! - 从字符串、读取器或文件加载 JSON 程序并求值

pub mod codec;
pub mod error;
pub mod program;

pub use codec::{decode, decode_str, encode, to_json_string, to_json_string_pretty};
pub use error::FileError;
pub use program::{load_program, parse_program, read_program, run, run_str};
