//! 相对零点捕捉的交点计算
//!
//! 两个纯函数：
//! - 两条无限长直线的交点（2×2 行列式解）
//! - 点到无限长直线的垂足（参数投影）
//!
//! 结果的“过大”判定使用可配置的幅值上限，而不是浮点无穷比较。

use crate::geometry::Line;
use crate::math::Point2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 默认幅值上限，超过即视为“解在无穷远处”
pub const DEFAULT_MAX_MAGNITUDE: f64 = 1.0e10;

/// 交点计算配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntersectionConfig {
    /// 投影参数 k 与结果坐标共用的幅值上限
    pub max_magnitude: f64,
}

impl Default for IntersectionConfig {
    fn default() -> Self {
        Self {
            max_magnitude: DEFAULT_MAX_MAGNITUDE,
        }
    }
}

impl IntersectionConfig {
    /// |value| <= max_magnitude，NaN 不在范围内
    pub fn within_bounds(&self, value: f64) -> bool {
        value.abs() <= self.max_magnitude
    }

    fn checked_point(&self, x: f64, y: f64) -> Result<Point2, IntersectionError> {
        if self.within_bounds(x) && self.within_bounds(y) {
            Ok(Point2::new(x, y))
        } else {
            Err(IntersectionError::NearInfinity { x, y })
        }
    }
}

/// 交点计算失败的原因
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntersectionError {
    #[error("same line clicked twice")]
    SameLine,

    #[error("lines are parallel or coincident")]
    Parallel,

    #[error("projection parameter {0} is out of range")]
    ParameterOutOfRange(f64),

    #[error("solution ({x}, {y}) is near infinity")]
    NearInfinity { x: f64, y: f64 },
}

/// 两条无限长直线的交点
///
/// 分母恰好为 0（平行或重合）时没有唯一解。
pub fn line_line_intersection(
    first: &Line,
    second: &Line,
    config: &IntersectionConfig,
) -> Result<Point2, IntersectionError> {
    let (x1, y1) = (first.start.x, first.start.y);
    let (x2, y2) = (first.end.x, first.end.y);
    let (x3, y3) = (second.start.x, second.start.y);
    let (x4, y4) = (second.end.x, second.end.y);

    let denominator = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denominator == 0.0 {
        return Err(IntersectionError::Parallel);
    }

    let first_cross = x1 * y2 - y1 * x2;
    let second_cross = x3 * y4 - y3 * x4;

    let x = (first_cross * (x3 - x4) - second_cross * (x1 - x2)) / denominator;
    let y = (first_cross * (y3 - y4) - second_cross * (y1 - y2)) / denominator;

    config.checked_point(x, y)
}

/// 点在直线方向上的归一化投影参数 k
///
/// k = 0 对应起点，k = 1 对应终点，其他值落在线段的延长线上。
/// 零长度直线得到 NaN 或无穷大。
pub fn projection_parameter(point: &Point2, line: &Line) -> f64 {
    let direction = line.direction_vector();
    let offset = point - line.start;

    offset.dot(&direction) / direction.dot(&direction)
}

/// 点到无限长直线的垂足
pub fn project_point_on_line(
    point: &Point2,
    line: &Line,
    config: &IntersectionConfig,
) -> Result<Point2, IntersectionError> {
    let k = projection_parameter(point, line);
    if !config.within_bounds(k) {
        return Err(IntersectionError::ParameterOutOfRange(k));
    }

    let foot = line.start + line.direction_vector() * k;
    config.checked_point(foot.x, foot.y)
}
