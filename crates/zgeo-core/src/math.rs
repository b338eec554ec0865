//! 数学基础类型与容差谓词
//!
//! 所有实数比较都必须经过本模块的谓词，几何代数中不允许直接对浮点字段做 `==`。

use std::f64::consts::TAU;

/// 二维点
pub type Point2 = nalgebra::Point2<f64>;

/// 二维向量
pub type Vector2 = nalgebra::Vector2<f64>;

/// 全局容差
pub const EPSILON: f64 = 1e-5;

/// 两个实数在容差内相等
#[inline]
pub fn real_close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// 两个角度在模 2π 意义下相等
///
/// 差值先归约到 `[0, 2π)`，再判断是否贴近 0 或 2π，
/// 因此 `0` 与 `2π - 1e-9` 视为同一角度。
#[inline]
pub fn angle_close(a: f64, b: f64) -> bool {
    let d = (a - b).rem_euclid(TAU);
    d < EPSILON || d > TAU - EPSILON
}

/// `mid` 是否落在 `[min(lo, hi) - ε, max(lo, hi) + ε]` 内
#[inline]
pub fn between(lo: f64, mid: f64, hi: f64) -> bool {
    lo.min(hi) - EPSILON < mid && mid < lo.max(hi) + EPSILON
}

/// 将角度归一化到 `[0, 2π)`
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // 极小的负数经 rem_euclid 后会舍入成 2π
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// 两点在容差内重合（逐坐标比较）
#[inline]
pub fn points_close(a: &Point2, b: &Point2) -> bool {
    real_close(a.x, b.x) && real_close(a.y, b.y)
}

/// 2D 轴对齐包围盒
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2 {
    pub min: Point2,
    pub max: Point2,
}

impl BoundingBox2 {
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// 从一组点构造最小包围盒
    pub fn from_points(points: impl IntoIterator<Item = Point2>) -> Self {
        let mut iter = points.into_iter();
        let first = iter.next().unwrap_or_else(Point2::origin);
        let mut bbox = Self::new(first, first);
        for p in iter {
            bbox.expand_to_include(&p);
        }
        bbox
    }

    pub fn expand_to_include(&mut self, point: &Point2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// 点是否在包围盒内（两个轴都按 `between` 放宽 ε）
    pub fn contains(&self, point: &Point2) -> bool {
        between(self.min.x, point.x, self.max.x) && between(self.min.y, point.y, self.max.y)
    }
}
