//! 变量环境
//!
//! 环境是不可变的链表：`Let` 在当前环境之上叠加一层新绑定，
//! 内层同名绑定遮蔽外层。

use crate::error::{EvalError, EvalResult};
use crate::geometry::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// 求值结果：数字或几何值
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Datum {
    Number(f64),
    Shape(Value),
}

impl Datum {
    pub fn kind(&self) -> &'static str {
        match self {
            Datum::Number(_) => "number",
            Datum::Shape(_) => "shape",
        }
    }

    pub fn as_number(&self) -> EvalResult<f64> {
        match self {
            Datum::Number(n) => Ok(*n),
            Datum::Shape(_) => Err(EvalError::TypeMismatch {
                expected: "number",
                found: self.kind(),
            }),
        }
    }

    pub fn as_shape(&self) -> EvalResult<Value> {
        match self {
            Datum::Shape(v) => Ok(*v),
            Datum::Number(_) => Err(EvalError::TypeMismatch {
                expected: "shape",
                found: self.kind(),
            }),
        }
    }
}

impl From<Value> for Datum {
    fn from(v: Value) -> Self {
        Datum::Shape(v)
    }
}

/// 变量环境
#[derive(Debug, Default)]
pub struct Environment {
    bindings: HashMap<String, Datum>,
    parent: Option<Arc<Environment>>,
}

impl Environment {
    /// 全局环境：`Nowhere` 为空集，`Everywhere` 为全平面
    pub fn global() -> Arc<Self> {
        let mut bindings = HashMap::new();
        bindings.insert("Nowhere".to_string(), Datum::Shape(Value::Empty));
        bindings.insert("Everywhere".to_string(), Datum::Shape(Value::Universal));
        Arc::new(Self {
            bindings,
            parent: None,
        })
    }

    /// 在 `parent` 之上叠加一层绑定
    pub fn extend(
        parent: &Arc<Environment>,
        bindings: impl IntoIterator<Item = (String, Datum)>,
    ) -> Arc<Self> {
        Arc::new(Self {
            bindings: bindings.into_iter().collect(),
            parent: Some(Arc::clone(parent)),
        })
    }

    /// 由内向外查找
    pub fn lookup(&self, name: &str) -> Option<&Datum> {
        let mut scope = Some(self);
        while let Some(env) = scope {
            if let Some(datum) = env.bindings.get(name) {
                return Some(datum);
            }
            scope = env.parent.as_deref();
        }
        None
    }

    pub fn get(&self, name: &str) -> EvalResult<Datum> {
        self.lookup(name)
            .copied()
            .ok_or_else(|| EvalError::UnknownVariable(name.to_string()))
    }
}
