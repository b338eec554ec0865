//! 异步求值器
//!
//! 把命令树翻译成几何运算：
//! - 多参数命令的各个参数并发求值，按参数位置汇合
//! - `Let` 的各个绑定同样并发求值，随后叠加到新环境中求值主体
//! - 任一分支失败即中止整个求值
//!
//! 求值器不依赖具体运行时，任何 executor 都可以驱动。

use crate::env::{Datum, Environment};
use crate::error::{EvalError, EvalResult};
use crate::expr::{Command, Expr};
use crate::geometry::Value;
use crate::intersect::intersect;
use futures::future::{try_join_all, BoxFuture, FutureExt};
use std::sync::Arc;
use tracing::debug;

/// 默认最大嵌套深度
///
/// 从文本解析的程序还受 serde_json 的 128 层递归上限约束，每层命令占两层 JSON
/// （对象加参数数组），所以文本输入的有效深度上限约为 63。默认值留在其下，
/// 超限时报告 `DepthExceeded` 而不是解析错误。
pub const DEFAULT_MAX_DEPTH: usize = 48;

/// 求值配置
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// 命令树允许的最大嵌套深度，超过约 63 时只对内存中构造的命令树有意义
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// 求值器
pub struct Evaluator {
    config: EvalConfig,
    globals: Arc<Environment>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::with_config(EvalConfig::default())
    }

    pub fn with_config(config: EvalConfig) -> Self {
        Self {
            config,
            globals: Environment::global(),
        }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// 求值 JSON 程序
    pub async fn evaluate_json(&self, program: &serde_json::Value) -> EvalResult<Value> {
        let expr = Expr::from_json(program)?;
        self.evaluate(&expr).await
    }

    /// 在全局环境中求值，结果必须是几何值
    pub async fn evaluate(&self, expr: &Expr) -> EvalResult<Value> {
        let depth = expr.depth();
        if depth > self.config.max_depth {
            return Err(EvalError::DepthExceeded(self.config.max_depth));
        }
        self.eval(expr, Arc::clone(&self.globals)).await?.as_shape()
    }

    /// 在指定环境中求值
    pub fn eval<'a>(
        &'a self,
        expr: &'a Expr,
        env: Arc<Environment>,
    ) -> BoxFuture<'a, EvalResult<Datum>> {
        async move {
            match expr {
                Expr::Number(n) => Ok(Datum::Number(*n)),
                Expr::Variable(name) => env.get(name),
                Expr::Command { command, args } => self.eval_command(*command, args, &env).await,
                Expr::Let { bindings, body } => {
                    debug!(bindings = bindings.len(), "evaluating Let");
                    let values = self.eval_all(bindings.iter().map(|(_, e)| e), &env).await?;
                    let scope = Environment::extend(
                        &env,
                        bindings.iter().map(|(name, _)| name.clone()).zip(values),
                    );
                    self.eval(body, scope).await
                }
            }
        }
        .boxed()
    }

    /// 并发求值一组表达式，结果按输入顺序排列
    async fn eval_all<'a>(
        &'a self,
        exprs: impl IntoIterator<Item = &'a Expr>,
        env: &Arc<Environment>,
    ) -> EvalResult<Vec<Datum>> {
        try_join_all(exprs.into_iter().map(|e| self.eval(e, Arc::clone(env)))).await
    }

    async fn eval_command(
        &self,
        command: Command,
        args: &[Expr],
        env: &Arc<Environment>,
    ) -> EvalResult<Datum> {
        if let Some(expected) = command.arity() {
            if args.len() != expected {
                return Err(EvalError::WrongParameterCount {
                    command,
                    expected,
                    found: args.len(),
                });
            }
        }

        debug!(%command, args = args.len(), "evaluating command");
        let values = self.eval_all(args, env).await?;

        let shape = match command {
            Command::Point => Value::point(values[0].as_number()?, values[1].as_number()?),
            Command::Line => Value::line(values[0].as_number()?, values[1].as_number()?),
            Command::LineSegment => Value::segment(
                values[0].as_number()?,
                values[1].as_number()?,
                values[2].as_number()?,
                values[3].as_number()?,
            ),
            Command::Shift => values[2]
                .as_shape()?
                .shift(values[0].as_number()?, values[1].as_number()?),
            Command::Intersect => values.iter().try_fold(Value::Universal, |acc, v| {
                v.as_shape().map(|shape| intersect(&acc, &shape))
            })?,
        };

        Ok(Datum::Shape(shape))
    }
}
