//! 点到直线垂足捕捉 Action
//!
//! 参考 LibreCAD 的 RS_ActionSnapPointLineIntersection 实现。
//! 以任意顺序选择一个点和一条直线，把相对零点移到点在直线上的垂足。

use super::{catch_line, catch_point, Picked};
use crate::action::{Action, ActionContext, ActionResult, ActionType, MouseButton, MouseHints};
use tracing::{debug, warn};
use zcad_snap_core::geometry::Line;
use zcad_snap_core::intersection::project_point_on_line;
use zcad_snap_core::math::Point2;

/// 垂足捕捉状态，第二步的状态携带第一步选中的实体
#[derive(Debug, Clone, PartialEq, Default)]
enum Status {
    /// 等待选择点或直线
    #[default]
    SetFirstPointOrLine,
    /// 已有直线，等待选择点
    SetSecondPoint { line: Picked<Line> },
    /// 已有点，等待选择直线
    SetSecondLine { point: Picked<Point2> },
}

/// 一次点击拾取到的输入
#[derive(Debug, Clone, PartialEq)]
enum Input {
    Point(Picked<Point2>),
    Line(Picked<Line>),
}

impl Status {
    /// 按当前状态拾取：点优先，已有直线时不再接受直线
    fn catch_input(&self, ctx: &ActionContext) -> Option<Input> {
        match self {
            Status::SetFirstPointOrLine => catch_point(ctx)
                .map(Input::Point)
                .or_else(|| catch_line(ctx).map(Input::Line)),
            Status::SetSecondPoint { .. } => catch_point(ctx).map(Input::Point),
            Status::SetSecondLine { .. } => catch_line(ctx).map(Input::Line),
        }
    }

    fn missing_input(&self) -> &'static str {
        match self {
            Status::SetFirstPointOrLine => "point or line not selected",
            Status::SetSecondPoint { .. } => "point not selected",
            Status::SetSecondLine { .. } => "line not selected",
        }
    }
}

/// 点到直线垂足捕捉 Action
#[derive(Debug, Default)]
pub struct SnapPointLineIntersectionAction {
    status: Status,
}

impl SnapPointLineIntersectionAction {
    pub fn new() -> Self {
        Self::default()
    }

    fn trigger(ctx: &ActionContext, point: &Picked<Point2>, line: &Picked<Line>) -> ActionResult {
        match project_point_on_line(&point.geometry, &line.geometry, ctx.intersection) {
            Ok(foot) => ActionResult::MoveRelativeZero(foot),
            Err(err) => {
                warn!("SnapPointLineIntersection: {}", err);
                ActionResult::Continue
            }
        }
    }
}

impl Action for SnapPointLineIntersectionAction {
    fn action_type(&self) -> ActionType {
        ActionType::SnapPointLineIntersection
    }

    fn reset(&mut self) {
        self.status = Status::SetFirstPointOrLine;
    }

    fn on_mouse_click(&mut self, ctx: &ActionContext, button: MouseButton) -> ActionResult {
        match button {
            MouseButton::Left => {
                let Some(input) = self.status.catch_input(ctx) else {
                    debug!("SnapPointLineIntersection: {}", self.status.missing_input());
                    return ActionResult::Continue;
                };

                match (std::mem::take(&mut self.status), input) {
                    (Status::SetFirstPointOrLine, Input::Point(point)) => {
                        self.status = Status::SetSecondLine { point };
                        ActionResult::Continue
                    }
                    (Status::SetFirstPointOrLine, Input::Line(line)) => {
                        self.status = Status::SetSecondPoint { line };
                        ActionResult::Continue
                    }
                    // 两个角色都已就绪，计算后回到初始状态
                    (Status::SetSecondPoint { line }, Input::Point(point))
                    | (Status::SetSecondLine { point }, Input::Line(line)) => {
                        Self::trigger(ctx, &point, &line)
                    }
                    // catch_input 不会为已占用的角色返回输入
                    (status, _) => {
                        self.status = status;
                        ActionResult::Continue
                    }
                }
            }
            MouseButton::Right => match self.status {
                Status::SetFirstPointOrLine => ActionResult::Cancel,
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
            Status::SetFirstPointOrLine => MouseHints::new("选择一个点或一条直线", "取消"),
            Status::SetSecondPoint { .. } => MouseHints::new("选择一个点", "取消"),
            Status::SetSecondLine { .. } => MouseHints::new("选择一条直线", "取消"),
        }
    }
}
