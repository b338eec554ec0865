//! 几何求交
//!
//! 对五种形状的全部 5×5 组合做集合交运算。分派表按无序对书写，
//! 每种组合只有一个实现，`intersect(a, b)` 与 `intersect(b, a)` 走同一分支。

use crate::geometry::{Line, LineSegment, Point, Value};
use crate::math::{between, real_close, Point2};

/// 求两个几何值的交集
pub fn intersect(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Empty, _) | (_, Value::Empty) => Value::Empty,
        (Value::Universal, other) | (other, Value::Universal) => *other,

        (Value::Point(p), Value::Point(q)) => point_point(p, q),
        (Value::Point(p), Value::Line(l)) | (Value::Line(l), Value::Point(p)) => point_line(p, l),
        (Value::Point(p), Value::Segment(s)) | (Value::Segment(s), Value::Point(p)) => {
            point_segment(p, s)
        }

        (Value::Line(l), Value::Line(m)) => line_line(l, m),
        (Value::Line(l), Value::Segment(s)) | (Value::Segment(s), Value::Line(l)) => {
            line_segment(l, s)
        }

        (Value::Segment(s), Value::Segment(t)) => segment_segment(s, t),
    }
}

/// 对一组几何值做左折叠求交，以全平面为单位元
pub fn intersect_all<'a>(values: impl IntoIterator<Item = &'a Value>) -> Value {
    values
        .into_iter()
        .fold(Value::Universal, |acc, v| intersect(&acc, v))
}

fn point_point(p: &Point, q: &Point) -> Value {
    if p.approx_eq(q) {
        Value::Point(*p)
    } else {
        Value::Empty
    }
}

fn point_line(p: &Point, l: &Line) -> Value {
    if l.contains_point(&p.position) {
        Value::Point(*p)
    } else {
        Value::Empty
    }
}

fn point_segment(p: &Point, s: &LineSegment) -> Value {
    if s.contains_point(&p.position) {
        Value::Point(*p)
    } else {
        Value::Empty
    }
}

fn line_line(l: &Line, m: &Line) -> Value {
    if l.same_direction(m) {
        if real_close(l.d(), m.d()) {
            Value::Line(*l)
        } else {
            Value::Empty
        }
    } else if l.opposite_direction(m) {
        // 反向法向只在两条线都过原点时才是同一条线
        if real_close(l.d(), 0.0) && real_close(m.d(), 0.0) {
            Value::Line(*l)
        } else {
            Value::Empty
        }
    } else {
        // 前两个分支排除了平行情况，分母非零
        let (a1, d1) = (l.angle(), l.d());
        let (a2, d2) = (m.angle(), m.d());
        let denom = (a1 - a2).sin();
        let x = (d1 * a2.cos() - d2 * a1.cos()) / denom;
        let y = (d2 * a1.sin() - d1 * a2.sin()) / denom;
        Value::point(x, y)
    }
}

fn line_segment(l: &Line, s: &LineSegment) -> Value {
    match line_line(&s.supporting_line(), l) {
        Value::Point(p) if s.bounding_box().contains(&p.position) => Value::Point(p),
        Value::Line(_) => Value::Segment(*s),
        _ => Value::Empty,
    }
}

fn segment_segment(s: &LineSegment, t: &LineSegment) -> Value {
    match line_line(&s.supporting_line(), &t.supporting_line()) {
        Value::Point(p)
            if s.bounding_box().contains(&p.position) && t.bounding_box().contains(&p.position) =>
        {
            Value::Point(p)
        }
        Value::Line(_) => collinear_overlap(s, t),
        _ => Value::Empty,
    }
}

/// 共线线段的一维区间重叠
///
/// 两条线段的规范顺序不一定沿支撑线同向（近竖直时一条按 `y` 排、另一条按 `x` 排），
/// 因此把 `t` 的端点投影到 `s` 的方向上，在 `[0, |s|]` 上裁剪。
fn collinear_overlap(s: &LineSegment, t: &LineSegment) -> Value {
    let axis = (s.end() - s.start()).normalize();
    let length = (s.end() - s.start()).norm();
    let position = |p: Point2| (p - s.start()).dot(&axis);

    let (mut a, mut b) = (position(t.start()), position(t.end()));
    let (mut a_pt, mut b_pt) = (t.start(), t.end());
    if a > b {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut a_pt, &mut b_pt);
    }

    let a_inside = between(0.0, a, length);
    let b_inside = between(0.0, b, length);
    if !a_inside && !b_inside && !between(a, 0.0, b) {
        return Value::Empty;
    }

    let lo = if a_inside { a_pt } else { s.start() };
    let hi = if b_inside { b_pt } else { s.end() };
    clipped(lo, hi)
}

/// 重叠区间可能短于容差，交给规范构造退化为点
fn clipped(start: Point2, end: Point2) -> Value {
    LineSegment::from_endpoints(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_point_point() {
        let origin = Value::point(0.0, 0.0);
        assert_eq!(intersect(&origin, &origin), origin);
        assert_eq!(intersect(&origin, &Value::point(1.0, 0.0)), Value::Empty);
        assert_eq!(intersect(&origin, &Value::point(1e-7, -1e-7)), origin);
    }

    #[test]
    fn test_axes_meet_at_origin() {
        let x_axis = Value::line(0.0, 0.0);
        let y_axis = Value::line(FRAC_PI_2, 0.0);
        assert_eq!(intersect(&x_axis, &y_axis), Value::point(0.0, 0.0));
    }

    #[test]
    fn test_line_line_general() {
        // y = 2 与 x = 3
        let horizontal = Value::line(0.0, 2.0);
        let vertical = Value::line(FRAC_PI_2, 3.0);
        assert_eq!(intersect(&horizontal, &vertical), Value::point(3.0, 2.0));
        assert_eq!(intersect(&vertical, &horizontal), Value::point(3.0, 2.0));
    }

    #[test]
    fn test_line_line_parallel_and_coincident() {
        let a = Value::line(FRAC_PI_4, 1.0);
        assert_eq!(intersect(&a, &Value::line(FRAC_PI_4, 2.0)), Value::Empty);
        assert_eq!(intersect(&a, &Value::line(FRAC_PI_4 + 2.0 * PI, 1.0)), a);
        // 反向法向、都不过原点：平行不同线
        assert_eq!(intersect(&a, &Value::line(FRAC_PI_4 + PI, 1.0)), Value::Empty);
        let through_origin = Value::line(FRAC_PI_4, 0.0);
        assert_eq!(
            intersect(&through_origin, &Value::line(FRAC_PI_4 + PI, 0.0)),
            through_origin
        );
    }

    #[test]
    fn test_point_on_line() {
        let diagonal = Value::segment(0.0, 0.0, 1.0, 1.0);
        let Value::Segment(s) = diagonal else {
            panic!("Expected Segment");
        };
        let line = Value::Line(s.supporting_line());
        assert_eq!(intersect(&Value::point(5.0, 5.0), &line), Value::point(5.0, 5.0));
        assert_eq!(intersect(&line, &Value::point(5.0, -5.0)), Value::Empty);
    }

    #[test]
    fn test_point_on_segment() {
        let seg = Value::segment(0.0, 0.0, 10.0, 10.0);
        assert_eq!(intersect(&Value::point(3.0, 3.0), &seg), Value::point(3.0, 3.0));
        assert_eq!(intersect(&seg, &Value::point(10.0, 10.0)), Value::point(10.0, 10.0));
        assert_eq!(intersect(&seg, &Value::point(11.0, 11.0)), Value::Empty);
        assert_eq!(intersect(&seg, &Value::point(3.0, 4.0)), Value::Empty);
    }

    #[test]
    fn test_line_segment() {
        let seg = Value::segment(0.0, -1.0, 0.0, 1.0);
        // 过线段
        assert_eq!(intersect(&Value::line(0.0, 0.5), &seg), Value::point(0.0, 0.5));
        // 错过线段
        assert_eq!(intersect(&seg, &Value::line(0.0, 3.0)), Value::Empty);
        // 支撑线
        assert_eq!(intersect(&seg, &Value::line(FRAC_PI_2, 0.0)), seg);
        // 平行
        assert_eq!(intersect(&seg, &Value::line(FRAC_PI_2, 1.0)), Value::Empty);
    }

    #[test]
    fn test_crossing_segments() {
        let a = Value::segment(0.0, 0.0, 4.0, 4.0);
        let b = Value::segment(0.0, 4.0, 4.0, 0.0);
        assert_eq!(intersect(&a, &b), Value::point(2.0, 2.0));
    }

    #[test]
    fn test_crossing_lines_miss_second_segment() {
        // 支撑线交于 (5, 5)，在 a 内但不在 b 内
        let a = Value::segment(0.0, 0.0, 10.0, 10.0);
        let b = Value::segment(0.0, 10.0, 4.0, 6.0);
        assert_eq!(intersect(&a, &b), Value::Empty);
        assert_eq!(intersect(&b, &a), Value::Empty);
    }

    #[test]
    fn test_collinear_overlap() {
        let a = Value::segment(0.0, 0.0, 10.0, 0.0);
        let b = Value::segment(5.0, 0.0, 15.0, 0.0);
        assert_eq!(intersect(&a, &b), Value::segment(5.0, 0.0, 10.0, 0.0));
        assert_eq!(intersect(&b, &a), Value::segment(5.0, 0.0, 10.0, 0.0));
    }

    #[test]
    fn test_collinear_touching() {
        let a = Value::segment(0.0, 0.0, 10.0, 0.0);
        let b = Value::segment(10.0, 0.0, 20.0, 0.0);
        assert_eq!(intersect(&a, &b), Value::point(10.0, 0.0));
        assert_eq!(intersect(&b, &a), Value::point(10.0, 0.0));
    }

    #[test]
    fn test_collinear_disjoint() {
        let a = Value::segment(0.0, 0.0, 10.0, 0.0);
        let b = Value::segment(20.0, 0.0, 30.0, 0.0);
        assert_eq!(intersect(&a, &b), Value::Empty);
        assert_eq!(intersect(&b, &a), Value::Empty);
    }

    #[test]
    fn test_collinear_nested() {
        let outer = Value::segment(0.0, 0.0, 10.0, 5.0);
        let inner = Value::segment(2.0, 1.0, 6.0, 3.0);
        assert_eq!(intersect(&outer, &inner), inner);
        assert_eq!(intersect(&inner, &outer), inner);
    }

    #[test]
    fn test_collinear_vertical_overlap() {
        let a = Value::segment(3.0, 0.0, 3.0, 10.0);
        let b = Value::segment(3.0, 12.0, 3.0, 6.0);
        assert_eq!(intersect(&a, &b), Value::segment(3.0, 6.0, 3.0, 10.0));
        assert_eq!(intersect(&b, &a), Value::segment(3.0, 6.0, 3.0, 10.0));
        let c = Value::segment(3.0, 10.0, 3.0, 20.0);
        assert_eq!(intersect(&a, &c), Value::point(3.0, 10.0));
        let d = Value::segment(3.0, 11.0, 3.0, 20.0);
        assert_eq!(intersect(&a, &d), Value::Empty);
    }

    #[test]
    fn test_collinear_descending_slope() {
        // 斜率为负时 x 升序对应 y 降序
        let a = Value::segment(0.0, 10.0, 10.0, 0.0);
        let b = Value::segment(5.0, 5.0, 15.0, -5.0);
        assert_eq!(intersect(&a, &b), Value::segment(5.0, 5.0, 10.0, 0.0));
        assert_eq!(intersect(&b, &a), Value::segment(5.0, 5.0, 10.0, 0.0));
    }

    #[test]
    fn test_collinear_steep_mixed_ordering() {
        // s 的 |dx| < ε 按 y 排序，t 按 x 排序，两者沿支撑线方向相反
        let s = Value::segment(0.0, 0.0, 0.9e-5, -9.0);
        let t = Value::segment(0.2e-5, -2.0, 1.3e-5, -13.0);
        let expected = Value::segment(0.9e-5, -9.0, 0.2e-5, -2.0);
        assert_eq!(intersect(&s, &t), expected);
        assert_eq!(intersect(&t, &s), expected);
    }

    #[test]
    fn test_collinear_overlap_shorter_than_epsilon() {
        let a = Value::segment(0.0, 0.0, 10.0, 0.0);
        let b = Value::segment(10.0 - 0.5e-5, 0.0, 20.0, 0.0);
        let st = intersect(&a, &b);
        let ts = intersect(&b, &a);
        assert!(matches!(st, Value::Point(_)));
        assert!(matches!(ts, Value::Point(_)));
        assert_eq!(st, Value::point(10.0, 0.0));
        assert_eq!(ts, Value::point(10.0, 0.0));
    }

    #[test]
    fn test_parallel_segments() {
        let a = Value::segment(0.0, 0.0, 10.0, 0.0);
        let b = Value::segment(0.0, 1.0, 10.0, 1.0);
        assert_eq!(intersect(&a, &b), Value::Empty);
    }

    #[test]
    fn test_identity_and_absorbing() {
        let seg = Value::segment(1.0, 2.0, 3.0, 4.0);
        assert_eq!(intersect(&Value::Universal, &seg), seg);
        assert_eq!(intersect(&seg, &Value::Universal), seg);
        assert_eq!(intersect(&Value::Empty, &seg), Value::Empty);
        assert_eq!(intersect(&Value::Universal, &Value::Universal), Value::Universal);
        assert_eq!(intersect(&Value::Universal, &Value::Empty), Value::Empty);
    }

    #[test]
    fn test_intersect_all() {
        assert_eq!(intersect_all([]), Value::Universal);
        let values = [
            Value::line(0.0, 0.0),
            Value::line(FRAC_PI_2, 0.0),
            Value::segment(-1.0, -1.0, 1.0, 1.0),
        ];
        assert_eq!(intersect_all(&values), Value::point(0.0, 0.0));
    }
}
