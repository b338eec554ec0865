//! ZGEO 核心几何代数引擎
//!
//! 提供五种二维形状（空集、全平面、点、直线、线段）以及两种运算：
//! 平移 (`shift`) 和求交 (`intersect`)。所有比较都基于容差。
//!
//! 另外包含一个异步求值器，把 JSON 命令树翻译成几何运算。
//!
//! # 示例
//!
//! ```rust
//! use zgeo_core::prelude::*;
//!
//! let a = Value::segment(0.0, 0.0, 10.0, 0.0);
//! let b = Value::segment(5.0, 0.0, 15.0, 0.0);
//!
//! assert_eq!(intersect(&a, &b), Value::segment(5.0, 0.0, 10.0, 0.0));
//! ```

pub mod env;
pub mod error;
pub mod eval;
pub mod expr;
pub mod geometry;
pub mod intersect;
pub mod math;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::env::{Datum, Environment};
    pub use crate::error::{EvalError, EvalResult};
    pub use crate::eval::{EvalConfig, Evaluator};
    pub use crate::expr::{Command, Expr};
    pub use crate::geometry::{shift, Line, LineSegment, Point, Value};
    pub use crate::intersect::{intersect, intersect_all};
    pub use crate::math::{angle_close, between, real_close, BoundingBox2, Point2, Vector2, EPSILON};
}
