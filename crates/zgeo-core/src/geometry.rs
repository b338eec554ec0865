//! 几何值定义
//!
//! 支持的五种形状：
//! - 空集 (Empty)
//! - 全平面 (Universal)
//! - 点 (Point)
//! - 无限直线 (Line)
//! - 线段 (Segment)
//!
//! 所有形状都通过规范构造函数创建，保证同一几何对象只有一种字段表示，
//! 从而可以逐字段做容差比较。

use crate::math::{
    angle_close, normalize_angle, points_close, real_close, BoundingBox2, Point2, Vector2,
};
use std::f64::consts::{FRAC_PI_2, PI};

/// 几何值
///
/// 不可变、值语义，所有变体都是 `Copy`。
#[derive(Debug, Clone, Copy)]
pub enum Value {
    /// 空集
    Empty,
    /// 整个平面
    Universal,
    Point(Point),
    Line(Line),
    Segment(LineSegment),
}

impl Value {
    /// 创建点
    pub fn point(x: f64, y: f64) -> Self {
        Value::Point(Point::new(x, y))
    }

    /// 创建直线 `sin(angle)*x + cos(angle)*y = d`（会规范化）
    pub fn line(angle: f64, d: f64) -> Self {
        Value::Line(Line::new(angle, d))
    }

    /// 创建线段，端点重合时退化为点
    pub fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        LineSegment::from_endpoints(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// 获取类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Empty => "Nowhere",
            Value::Universal => "Everywhere",
            Value::Point(_) => "Point",
            Value::Line(_) => "Line",
            Value::Segment(_) => "LineSegment",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// 平移
    pub fn shift(&self, dx: f64, dy: f64) -> Value {
        match self {
            Value::Empty => Value::Empty,
            Value::Universal => Value::Universal,
            Value::Point(p) => Value::Point(p.shift(dx, dy)),
            Value::Line(l) => Value::Line(l.shift(dx, dy)),
            Value::Segment(s) => Value::Segment(s.shift(dx, dy)),
        }
    }

    /// 求交
    pub fn intersect(&self, other: &Value) -> Value {
        crate::intersect::intersect(self, other)
    }
}

/// 容差相等：同一几何对象即相等
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Empty, Value::Empty) | (Value::Universal, Value::Universal) => true,
            (Value::Point(a), Value::Point(b)) => a.approx_eq(b),
            (Value::Line(a), Value::Line(b)) => a.coincides(b),
            (Value::Segment(a), Value::Segment(b)) => a.approx_eq(b),
            _ => false,
        }
    }
}

impl From<Point> for Value {
    fn from(p: Point) -> Self {
        Value::Point(p)
    }
}

impl From<Line> for Value {
    fn from(l: Line) -> Self {
        Value::Line(l)
    }
}

impl From<LineSegment> for Value {
    fn from(s: LineSegment) -> Self {
        Value::Segment(s)
    }
}

/// 平移一个几何值
pub fn shift(dx: f64, dy: f64, value: &Value) -> Value {
    value.shift(dx, dy)
}

/// 点
#[derive(Debug, Clone, Copy)]
pub struct Point {
    pub position: Point2,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
        }
    }

    pub fn from_point2(position: Point2) -> Self {
        Self { position }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn shift(&self, dx: f64, dy: f64) -> Self {
        Self::from_point2(self.position + Vector2::new(dx, dy))
    }

    pub fn approx_eq(&self, other: &Point) -> bool {
        points_close(&self.position, &other.position)
    }
}

/// 无限直线：`sin(angle)*x + cos(angle)*y = d`
///
/// 规范形式下 `d >= 0` 且 `angle ∈ [0, 2π)`。
/// 唯一剩下的歧义是过原点的直线（`d ≈ 0`），此时 `angle` 与 `angle + π` 表示同一条线，
/// 由 [`Line::coincides`] 处理。
#[derive(Debug, Clone, Copy)]
pub struct Line {
    angle: f64,
    d: f64,
}

impl Line {
    /// 规范构造：`d` 为负时翻转法向，再把角度归约到 `[0, 2π)`
    pub fn new(angle: f64, d: f64) -> Self {
        let (angle, d) = if d < 0.0 { (angle + PI, -d) } else { (angle, d) };
        Self {
            angle: normalize_angle(angle),
            d,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn d(&self) -> f64 {
        self.d
    }

    /// 法向量 `(sin(angle), cos(angle))`
    pub fn normal(&self) -> Vector2 {
        Vector2::new(self.angle.sin(), self.angle.cos())
    }

    /// 点到直线方程左侧的取值
    pub fn evaluate(&self, point: &Point2) -> f64 {
        self.normal().dot(&point.coords)
    }

    pub fn contains_point(&self, point: &Point2) -> bool {
        real_close(self.evaluate(point), self.d)
    }

    /// 平移后 `d' = d + sin(angle)*dx + cos(angle)*dy`，角度不变
    pub fn shift(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.angle, self.d + self.normal().dot(&Vector2::new(dx, dy)))
    }

    /// 同向
    pub fn same_direction(&self, other: &Line) -> bool {
        angle_close(self.angle, other.angle)
    }

    /// 反向（法向相差 π）
    pub fn opposite_direction(&self, other: &Line) -> bool {
        angle_close(self.angle, other.angle + PI)
    }

    /// 是否为同一条几何直线
    pub fn coincides(&self, other: &Line) -> bool {
        if self.same_direction(other) {
            real_close(self.d, other.d)
        } else if self.opposite_direction(other) {
            real_close(self.d, 0.0) && real_close(other.d, 0.0)
        } else {
            false
        }
    }
}

/// 线段
///
/// 端点按字典序规范排列：`x` 近似相等时按 `y`，否则按 `x`。
/// 端点重合的线段不会存在，构造时会退化为 [`Point`]。
#[derive(Debug, Clone, Copy)]
pub struct LineSegment {
    start: Point2,
    end: Point2,
}

impl LineSegment {
    /// 规范构造
    pub fn from_endpoints(a: Point2, b: Point2) -> Value {
        let swap = if real_close(a.x, b.x) {
            if real_close(a.y, b.y) {
                return Value::Point(Point::from_point2(a));
            }
            a.y > b.y
        } else {
            a.x > b.x
        };

        let (start, end) = if swap { (b, a) } else { (a, b) };
        Value::Segment(Self { start, end })
    }

    pub fn start(&self) -> Point2 {
        self.start
    }

    pub fn end(&self) -> Point2 {
        self.end
    }

    pub fn is_vertical(&self) -> bool {
        real_close(self.start.x, self.end.x)
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        BoundingBox2::from_points([self.start, self.end])
    }

    /// 支撑直线
    ///
    /// 竖直线段取 `angle = π/2`；否则 `angle = atan((y2 - y1) / (x1 - x2))`，
    /// 使法向 `(sin, cos)` 垂直于方向 `(x2 - x1, y2 - y1)`。结果经过规范构造。
    pub fn supporting_line(&self) -> Line {
        let angle = if self.is_vertical() {
            FRAC_PI_2
        } else {
            ((self.end.y - self.start.y) / (self.start.x - self.end.x)).atan()
        };
        let d = self.start.x * angle.sin() + self.start.y * angle.cos();
        Line::new(angle, d)
    }

    /// 点是否在线段上：在支撑直线上且在包围盒内
    pub fn contains_point(&self, point: &Point2) -> bool {
        self.supporting_line().contains_point(point) && self.bounding_box().contains(point)
    }

    /// 平移不改变端点的相对顺序，无需重新排序
    pub fn shift(&self, dx: f64, dy: f64) -> Self {
        let offset = Vector2::new(dx, dy);
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    pub fn approx_eq(&self, other: &LineSegment) -> bool {
        points_close(&self.start, &other.start) && points_close(&self.end, &other.end)
    }
}
