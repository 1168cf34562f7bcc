//! 两直线交点捕捉 Action
//!
//! 参考 LibreCAD 的 RS_ActionSnapBilinearIntersection 实现。
//! 依次选择两条直线，把相对零点移到它们（延长线）的交点上。

use super::{catch_line, Picked};
use crate::action::{Action, ActionContext, ActionResult, ActionType, MouseButton, MouseHints};
use tracing::{debug, warn};
use zcad_snap_core::geometry::Line;
use zcad_snap_core::intersection::{line_line_intersection, IntersectionConfig, IntersectionError};
use zcad_snap_core::math::Point2;

/// 两直线交点捕捉状态
#[derive(Debug, Clone, PartialEq, Default)]
enum Status {
    /// 等待选择第一条直线
    #[default]
    SetFirstLine,
    /// 等待选择第二条直线
    SetSecondLine { first: Picked<Line> },
}

/// 两直线交点捕捉 Action
#[derive(Debug, Default)]
pub struct SnapBilinearIntersectionAction {
    status: Status,
}

impl SnapBilinearIntersectionAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// 计算交点，同一条直线点击两次时拒绝
    fn trigger(
        first: &Picked<Line>,
        second: &Picked<Line>,
        config: &IntersectionConfig,
    ) -> Result<Point2, IntersectionError> {
        if first.id == second.id {
            return Err(IntersectionError::SameLine);
        }

        line_line_intersection(&first.geometry, &second.geometry, config)
    }
}

impl Action for SnapBilinearIntersectionAction {
    fn action_type(&self) -> ActionType {
        ActionType::SnapBilinearIntersection
    }

    fn reset(&mut self) {
        self.status = Status::SetFirstLine;
    }

    fn on_mouse_click(&mut self, ctx: &ActionContext, button: MouseButton) -> ActionResult {
        match button {
            MouseButton::Left => {
                let Some(picked) = catch_line(ctx) else {
                    debug!("SnapBilinearIntersection: line not selected");
                    return ActionResult::Continue;
                };

                match std::mem::take(&mut self.status) {
                    Status::SetFirstLine => {
                        debug!("SnapBilinearIntersection: first line {}", picked.id);
                        self.status = Status::SetSecondLine { first: picked };
                        ActionResult::Continue
                    }
                    // 无论成功与否都回到初始状态
                    Status::SetSecondLine { first } => {
                        match Self::trigger(&first, &picked, ctx.intersection) {
                            Ok(point) => ActionResult::MoveRelativeZero(point),
                            Err(err) => {
                                warn!("SnapBilinearIntersection: {}", err);
                                ActionResult::Continue
                            }
                        }
                    }
                }
            }
            MouseButton::Right => match self.status {
                Status::SetFirstLine => ActionResult::Cancel,
                _ => {
                    self.reset();
                    ActionResult::Continue
                }
            },
            MouseButton::Middle => ActionResult::Continue,
        }
    }

    fn mouse_hints(&self) -> MouseHints {
        match self.status {
            Status::SetFirstLine => MouseHints::new("选择第一条直线", "取消"),
            Status::SetSecondLine { .. } => MouseHints::new("选择第二条直线", "取消"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::{ctx_at, line};
    use zcad_snap_core::math::EPSILON;

    #[test]
    fn test_two_lines_move_relative_zero() {
        let entities = vec![line(0.0, 0.0, 4.0, 4.0), line(0.0, 4.0, 4.0, 0.0)];
        let mut action = SnapBilinearIntersectionAction::new();

        let result = action.on_mouse_click(&ctx_at(&entities, 1.0, 1.0), MouseButton::Left);
        assert_eq!(result, ActionResult::Continue);
        assert!(matches!(action.status, Status::SetSecondLine { .. }));
        assert_eq!(action.get_prompt(), "选择第二条直线");

        let result = action.on_mouse_click(&ctx_at(&entities, 1.0, 3.0), MouseButton::Left);
        match result {
            ActionResult::MoveRelativeZero(p) => {
                assert!((p.x - 2.0).abs() < EPSILON);
                assert!((p.y - 2.0).abs() < EPSILON);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(action.status, Status::SetFirstLine);
    }

    #[test]
    fn test_parallel_lines_reset_without_move() {
        let entities = vec![line(0.0, 0.0, 4.0, 0.0), line(0.0, 1.0, 4.0, 1.0)];
        let mut action = SnapBilinearIntersectionAction::new();

        action.on_mouse_click(&ctx_at(&entities, 2.0, 0.0), MouseButton::Left);
        let result = action.on_mouse_click(&ctx_at(&entities, 2.0, 1.0), MouseButton::Left);

        assert_eq!(result, ActionResult::Continue);
        assert_eq!(action.status, Status::SetFirstLine);
    }

    #[test]
    fn test_same_line_twice_is_rejected() {
        let entities = vec![line(0.0, 0.0, 4.0, 4.0), line(0.0, 4.0, 4.0, 0.0)];
        let mut action = SnapBilinearIntersectionAction::new();

        action.on_mouse_click(&ctx_at(&entities, 1.0, 1.0), MouseButton::Left);
        let result = action.on_mouse_click(&ctx_at(&entities, 3.0, 3.0), MouseButton::Left);

        assert_eq!(result, ActionResult::Continue);
        assert_eq!(action.status, Status::SetFirstLine);
    }

    #[test]
    fn test_identical_geometry_distinct_entities_are_parallel() {
        let first = Picked {
            id: zcad_snap_core::entity::EntityId::new(),
            geometry: Line::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)),
        };
        let second = Picked {
            id: zcad_snap_core::entity::EntityId::new(),
            geometry: first.geometry.clone(),
        };
        let config = IntersectionConfig::default();

        assert_eq!(
            SnapBilinearIntersectionAction::trigger(&first, &first, &config),
            Err(IntersectionError::SameLine)
        );
        assert_eq!(
            SnapBilinearIntersectionAction::trigger(&first, &second, &config),
            Err(IntersectionError::Parallel)
        );
    }

    #[test]
    fn test_click_on_empty_space_is_ignored() {
        let entities = vec![line(0.0, 0.0, 4.0, 4.0)];
        let mut action = SnapBilinearIntersectionAction::new();

        let result = action.on_mouse_click(&ctx_at(&entities, 10.0, 0.0), MouseButton::Left);
        assert_eq!(result, ActionResult::Continue);
        assert_eq!(action.status, Status::SetFirstLine);

        action.on_mouse_click(&ctx_at(&entities, 1.0, 1.0), MouseButton::Left);
        action.on_mouse_click(&ctx_at(&entities, 10.0, 0.0), MouseButton::Left);
        assert!(matches!(action.status, Status::SetSecondLine { .. }));
    }

    #[test]
    fn test_middle_click_keeps_selection() {
        let entities = vec![line(0.0, 0.0, 4.0, 4.0), line(0.0, 4.0, 4.0, 0.0)];
        let mut action = SnapBilinearIntersectionAction::new();

        action.on_mouse_click(&ctx_at(&entities, 1.0, 1.0), MouseButton::Left);
        let status = action.status.clone();
        let hints = action.mouse_hints();

        let result = action.on_mouse_click(&ctx_at(&entities, 1.0, 3.0), MouseButton::Middle);
        assert_eq!(result, ActionResult::Continue);
        assert_eq!(action.status, status);
        assert_eq!(action.mouse_hints(), hints);

        // 中键之后仍能完成本次选择
        let result = action.on_mouse_click(&ctx_at(&entities, 1.0, 3.0), MouseButton::Left);
        assert!(matches!(result, ActionResult::MoveRelativeZero(_)));
    }

    #[test]
    fn test_right_click_cancels_then_exits() {
        let entities = vec![line(0.0, 0.0, 4.0, 4.0)];
        let mut action = SnapBilinearIntersectionAction::new();

        action.on_mouse_click(&ctx_at(&entities, 1.0, 1.0), MouseButton::Left);
        let result = action.on_mouse_click(&ctx_at(&entities, 0.0, 0.0), MouseButton::Right);
        assert_eq!(result, ActionResult::Continue);
        assert_eq!(action.status, Status::SetFirstLine);
        assert_eq!(action.mouse_hints(), MouseHints::new("选择第一条直线", "取消"));

        let result = action.on_mouse_click(&ctx_at(&entities, 0.0, 0.0), MouseButton::Right);
        assert_eq!(result, ActionResult::Cancel);
    }
}
