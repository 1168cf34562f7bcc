//! 具体的 Action 实现
//!
//! 每个捕捉工具对应一个 Action 实现

mod snap_bilinear_intersection;
mod snap_point_line_intersection;

pub use snap_bilinear_intersection::SnapBilinearIntersectionAction;
pub use snap_point_line_intersection::SnapPointLineIntersectionAction;

use crate::action::{Action, ActionContext, ActionType};
use zcad_snap_core::entity::EntityId;
use zcad_snap_core::geometry::{EntityKind, Geometry, Line};
use zcad_snap_core::math::Point2;

/// 创建指定类型的 Action
pub fn create_action(action_type: ActionType) -> Box<dyn Action> {
    match action_type {
        ActionType::SnapBilinearIntersection => Box::new(SnapBilinearIntersectionAction::new()),
        ActionType::SnapPointLineIntersection => Box::new(SnapPointLineIntersectionAction::new()),
    }
}

/// 已拾取的实体：ID + 拾取时的几何快照
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Picked<T> {
    pub id: EntityId,
    pub geometry: T,
}

/// 拾取鼠标下的直线
pub(crate) fn catch_line(ctx: &ActionContext) -> Option<Picked<Line>> {
    let entity = ctx.catch_entity(EntityKind::Line)?;
    match &entity.geometry {
        Geometry::Line(line) => Some(Picked {
            id: entity.id,
            geometry: line.clone(),
        }),
        _ => None,
    }
}

/// 拾取鼠标下的点实体
pub(crate) fn catch_point(ctx: &ActionContext) -> Option<Picked<Point2>> {
    let entity = ctx.catch_entity(EntityKind::Point)?;
    match &entity.geometry {
        Geometry::Point(point) => Some(Picked {
            id: entity.id,
            geometry: point.position,
        }),
        _ => None,
    }
}
