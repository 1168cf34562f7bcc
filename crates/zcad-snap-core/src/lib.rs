//! ZCAD 捕捉核心
//!
//! 提供相对零点捕捉工具所需的几何图元、实体拾取和交点计算。
//!
//! # 架构设计
//!
//! - `Entity`: 唯一标识符 + 几何数据
//! - `EntityCatcher`: 宿主提供的拾取服务
//! - `intersection`: 两个纯函数计算（直线-直线交点、点到直线垂足）
//!
//! # 示例
//!
//! ```rust
//! use zcad_snap_core::prelude::*;
//!
//! let a = Line::new(Point2::new(0.0, 0.0), Point2::new(4.0, 4.0));
//! let b = Line::new(Point2::new(0.0, 4.0), Point2::new(4.0, 0.0));
//!
//! let p = line_line_intersection(&a, &b, &IntersectionConfig::default()).unwrap();
//! assert!((p.x - 2.0).abs() < EPSILON);
//! ```

pub mod entity;
pub mod geometry;
pub mod intersection;
pub mod math;
pub mod spatial;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::entity::{Entity, EntityId};
    pub use crate::geometry::{Circle, EntityKind, Geometry, Line, Point};
    pub use crate::intersection::{
        line_line_intersection, project_point_on_line, projection_parameter, IntersectionConfig,
        IntersectionError,
    };
    pub use crate::math::{BoundingBox2, Point2, Vector2, EPSILON};
    pub use crate::spatial::EntityCatcher;
}
