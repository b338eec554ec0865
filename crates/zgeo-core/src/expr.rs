//! 命令树
//!
//! 程序是一棵 JSON 树：
//! - 数字：字面量
//! - 字符串：变量引用
//! - `{"Point": [x, y]}` 等单键对象：命令调用
//! - `{"Let": {...}, "in": expr}`：绑定

use crate::error::{EvalError, EvalResult};
use serde_json::{Map, Value as Json};
use std::fmt;

/// 命令
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Point,
    Line,
    LineSegment,
    Shift,
    Intersect,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Point,
        Command::Line,
        Command::LineSegment,
        Command::Shift,
        Command::Intersect,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Point => "Point",
            Command::Line => "Line",
            Command::LineSegment => "LineSegment",
            Command::Shift => "Shift",
            Command::Intersect => "Intersect",
        }
    }

    /// 参数个数，`None` 表示可变参数
    pub fn arity(&self) -> Option<usize> {
        match self {
            Command::Point | Command::Line => Some(2),
            Command::LineSegment => Some(4),
            Command::Shift => Some(3),
            Command::Intersect => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const LET: &str = "Let";
const IN: &str = "in";

/// 表达式
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Variable(String),
    Command {
        command: Command,
        args: Vec<Expr>,
    },
    /// 所有绑定都在外层环境中求值
    Let {
        bindings: Vec<(String, Expr)>,
        body: Box<Expr>,
    },
}

impl Expr {
    /// 从 JSON 树解码
    ///
    /// 只检查结构；参数个数在求值时检查。
    pub fn from_json(json: &Json) -> EvalResult<Self> {
        match json {
            Json::Number(n) => n
                .as_f64()
                .map(Expr::Number)
                .ok_or_else(|| EvalError::InvalidSyntax(format!("Unrepresentable number: {}", n))),
            Json::String(name) => Ok(Expr::Variable(name.clone())),
            Json::Object(map) => Self::from_object(map),
            Json::Null | Json::Bool(_) | Json::Array(_) => Err(EvalError::InvalidSyntax(format!(
                "Unexpected literal: {}",
                json
            ))),
        }
    }

    fn from_object(map: &Map<String, Json>) -> EvalResult<Self> {
        if let Some(bindings) = map.get(LET) {
            let body = map
                .get(IN)
                .ok_or_else(|| EvalError::MissingClause(IN.to_string()))?;
            if map.len() != 2 {
                return Err(EvalError::InvalidSyntax(format!(
                    "\"{}\" expects exactly \"{}\" and \"{}\" keys, found {}",
                    LET,
                    LET,
                    IN,
                    map.len()
                )));
            }
            return Self::from_let(bindings, body);
        }

        match map.len() {
            1 => {
                let (name, args) = map.iter().next().ok_or_else(|| {
                    EvalError::InvalidSyntax("Empty command object".to_string())
                })?;
                let command = Command::from_name(name)
                    .ok_or_else(|| EvalError::UnknownCommand(name.clone()))?;
                let args = args.as_array().ok_or_else(|| {
                    EvalError::InvalidSyntax(format!("Arguments of {} must be an array", command))
                })?;
                Ok(Expr::Command {
                    command,
                    args: args.iter().map(Self::from_json).collect::<EvalResult<_>>()?,
                })
            }
            2 => Err(EvalError::UnknownCommand(
                map.keys().cloned().collect::<Vec<_>>().join(", "),
            )),
            n => Err(EvalError::InvalidSyntax(format!(
                "Command object must have 1 or 2 keys, found {}",
                n
            ))),
        }
    }

    fn from_let(bindings: &Json, body: &Json) -> EvalResult<Self> {
        let bindings = bindings.as_object().ok_or_else(|| {
            EvalError::InvalidSyntax(format!("Bindings of \"{}\" must be an object", LET))
        })?;
        let bindings = bindings
            .iter()
            .map(|(name, expr)| Ok((name.clone(), Self::from_json(expr)?)))
            .collect::<EvalResult<Vec<_>>>()?;
        Ok(Expr::Let {
            bindings,
            body: Box::new(Self::from_json(body)?),
        })
    }

    /// 树的最大嵌套深度（叶子为 0）
    pub fn depth(&self) -> usize {
        match self {
            Expr::Number(_) | Expr::Variable(_) => 0,
            Expr::Command { args, .. } => {
                1 + args.iter().map(Expr::depth).max().unwrap_or(0)
            }
            Expr::Let { bindings, body } => {
                1 + bindings
                    .iter()
                    .map(|(_, e)| e.depth())
                    .chain(std::iter::once(body.depth()))
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}
