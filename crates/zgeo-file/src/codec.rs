//! 几何值的 JSON 线格式
//!
//! - 空集：`"Nowhere"`
//! - 全平面：`"Everywhere"`
//! - 点：`{"Point":[x,y]}`
//! - 直线：`{"Line":[angle,d]}`
//! - 线段：`{"LineSegment":[x1,y1,x2,y2]}`
//!
//! 线格式与内存表示分离，解码一律经过规范构造函数。

use crate::error::FileError;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use zgeo_core::geometry::Value;

/// 线格式（serde 外部标签枚举）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
enum WireValue {
    Nowhere,
    Everywhere,
    Point([f64; 2]),
    Line([f64; 2]),
    LineSegment([f64; 4]),
}

impl From<&Value> for WireValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Empty => WireValue::Nowhere,
            Value::Universal => WireValue::Everywhere,
            Value::Point(p) => WireValue::Point([p.x(), p.y()]),
            Value::Line(l) => WireValue::Line([l.angle(), l.d()]),
            Value::Segment(s) => {
                let (start, end) = (s.start(), s.end());
                WireValue::LineSegment([start.x, start.y, end.x, end.y])
            }
        }
    }
}

impl From<WireValue> for Value {
    fn from(wire: WireValue) -> Self {
        match wire {
            WireValue::Nowhere => Value::Empty,
            WireValue::Everywhere => Value::Universal,
            WireValue::Point([x, y]) => Value::point(x, y),
            WireValue::Line([angle, d]) => Value::line(angle, d),
            WireValue::LineSegment([x1, y1, x2, y2]) => Value::segment(x1, y1, x2, y2),
        }
    }
}

impl WireValue {
    fn fields(&self) -> &[f64] {
        match self {
            WireValue::Nowhere | WireValue::Everywhere => &[],
            WireValue::Point(f) | WireValue::Line(f) => f,
            WireValue::LineSegment(f) => f,
        }
    }
}

/// JSON 无法表示非有限数，serde_json 会静默写成 `null`，这里直接拒绝
fn checked(value: &Value) -> Result<WireValue, FileError> {
    let wire = WireValue::from(value);
    if wire.fields().iter().all(|f| f.is_finite()) {
        Ok(wire)
    } else {
        Err(FileError::InvalidValue(format!(
            "Non-finite coordinate in {:?}",
            value
        )))
    }
}

/// 编码为 JSON 树
pub fn encode(value: &Value) -> Result<Json, FileError> {
    Ok(serde_json::to_value(checked(value)?)?)
}

/// 从 JSON 树解码
pub fn decode(json: &Json) -> Result<Value, FileError> {
    WireValue::deserialize(json)
        .map(Value::from)
        .map_err(|e| FileError::InvalidValue(format!("{} in {}", e, json)))
}

/// 从 JSON 文本解码
pub fn decode_str(text: &str) -> Result<Value, FileError> {
    let json: Json = serde_json::from_str(text)?;
    decode(&json)
}

pub fn to_json_string(value: &Value) -> Result<String, FileError> {
    Ok(serde_json::to_string(&checked(value)?)?)
}

pub fn to_json_string_pretty(value: &Value) -> Result<String, FileError> {
    Ok(serde_json::to_string_pretty(&checked(value)?)?)
}
