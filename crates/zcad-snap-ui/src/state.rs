//! UI状态管理
//!
//! 宿主一侧：持有相对零点标记、当前 action 和鼠标提示，
//! 把鼠标事件分派给 action 并应用其结果。

use crate::action::{Action, ActionContext, ActionResult, ActionType, MouseButton, MouseHints};
use crate::actions::create_action;
use crate::command_registry::CommandRegistry;
use crate::config::ToolConfig;
use tracing::{debug, info};
use zcad_snap_core::math::Point2;
use zcad_snap_core::spatial::EntityCatcher;

/// 相对零点标记
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeZero {
    position: Point2,
    /// 锁定后忽略移动请求
    pub locked: bool,
}

impl RelativeZero {
    pub fn new(position: Point2) -> Self {
        Self {
            position,
            locked: false,
        }
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    /// 移动标记，返回是否实际移动
    pub fn move_to(&mut self, position: Point2) -> bool {
        if self.locked {
            debug!("Relative zero is locked, ignoring move to ({}, {})", position.x, position.y);
            return false;
        }

        self.position = position;
        true
    }
}

impl Default for RelativeZero {
    fn default() -> Self {
        Self::new(Point2::origin())
    }
}

/// UI 状态
pub struct UiState {
    pub relative_zero: RelativeZero,
    pub config: ToolConfig,
    pub commands: CommandRegistry,
    /// 当前 action
    current_action: Option<Box<dyn Action>>,
    /// 状态栏显示的鼠标提示
    mouse_hints: Option<MouseHints>,
}

impl UiState {
    pub fn new(config: ToolConfig) -> Self {
        Self {
            relative_zero: RelativeZero::default(),
            config,
            commands: CommandRegistry::new(),
            current_action: None,
            mouse_hints: None,
        }
    }

    /// 当前 action 类型
    pub fn active_action(&self) -> Option<ActionType> {
        self.current_action.as_ref().map(|a| a.action_type())
    }

    pub fn mouse_hints(&self) -> Option<MouseHints> {
        self.mouse_hints
    }

    /// 启动 action，替换当前 action
    pub fn start_action(&mut self, action_type: ActionType) {
        let mut action = create_action(action_type);
        action.init();
        info!("Started action: {}", action.name());

        self.mouse_hints = Some(action.mouse_hints());
        self.current_action = Some(action);
    }

    /// 执行命令行输入，返回是否识别
    pub fn run_command(&mut self, input: &str) -> bool {
        match self.commands.lookup(input) {
            Some(action_type) => {
                self.start_action(action_type);
                true
            }
            None => {
                debug!("Unknown command: {}", input);
                false
            }
        }
    }

    /// 鼠标释放事件
    pub fn on_mouse_release(&mut self, catcher: &dyn EntityCatcher, pos: Point2, button: MouseButton) {
        let Some(action) = self.current_action.as_mut() else {
            return;
        };

        let ctx = ActionContext {
            mouse_pos: pos,
            catcher,
            pick_tolerance: self.config.pick_tolerance,
            intersection: &self.config.intersection,
        };

        let result = action.on_mouse_click(&ctx, button);
        let hints = action.mouse_hints();
        self.mouse_hints = Some(hints);
        self.apply(result);
    }

    fn apply(&mut self, result: ActionResult) {
        match result {
            ActionResult::Continue => {}
            ActionResult::MoveRelativeZero(point) => {
                if self.relative_zero.move_to(point) {
                    info!("Relative zero moved to ({}, {})", point.x, point.y);
                }
            }
            ActionResult::Cancel => {
                if let Some(action) = self.current_action.take() {
                    info!("Finished action: {}", action.name());
                }
                self.mouse_hints = None;
            }
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(ToolConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zcad_snap_core::entity::Entity;
    use zcad_snap_core::geometry::{Circle, Geometry, Line, Point};
    use zcad_snap_core::math::EPSILON;

    fn scene() -> Vec<Entity> {
        vec![
            Entity::new(Geometry::Line(Line::new(Point2::new(0.0, 0.0), Point2::new(4.0, 4.0)))),
            Entity::new(Geometry::Line(Line::new(Point2::new(0.0, 4.0), Point2::new(4.0, 0.0)))),
            Entity::new(Geometry::Line(Line::new(Point2::new(0.0, 10.0), Point2::new(10.0, 10.0)))),
            Entity::new(Geometry::Point(Point::new(3.0, 17.0))),
            Entity::new(Geometry::Circle(Circle::new(Point2::new(30.0, 30.0), 5.0))),
        ]
    }

    fn state() -> UiState {
        UiState::new(ToolConfig {
            pick_tolerance: 0.5,
            ..ToolConfig::default()
        })
    }

    fn assert_at(state: &UiState, x: f64, y: f64) {
        let p = state.relative_zero.position();
        assert!((p.x - x).abs() < EPSILON && (p.y - y).abs() < EPSILON, "at ({}, {})", p.x, p.y);
    }

    #[test]
    fn test_bilinear_moves_relative_zero() {
        let entities = scene();
        let mut state = state();

        assert!(state.run_command("BI"));
        assert_eq!(state.mouse_hints(), Some(MouseHints::new("选择第一条直线", "取消")));

        state.on_mouse_release(&entities, Point2::new(1.0, 1.0), MouseButton::Left);
        assert_eq!(state.mouse_hints().map(|h| h.left), Some("选择第二条直线"));

        state.on_mouse_release(&entities, Point2::new(3.0, 1.0), MouseButton::Left);
        assert_at(&state, 2.0, 2.0);

        // 完成后回到第一步，action 保持激活
        assert_eq!(state.active_action(), Some(ActionType::SnapBilinearIntersection));
        assert_eq!(state.mouse_hints().map(|h| h.left), Some("选择第一条直线"));
    }

    #[test]
    fn test_point_line_moves_relative_zero() {
        let entities = scene();
        let mut state = state();

        state.start_action(ActionType::SnapPointLineIntersection);
        state.on_mouse_release(&entities, Point2::new(5.0, 10.0), MouseButton::Left);
        state.on_mouse_release(&entities, Point2::new(3.0, 17.0), MouseButton::Left);
        assert_at(&state, 3.0, 10.0);
    }

    #[test]
    fn test_parallel_lines_keep_relative_zero() {
        let entities = vec![
            Entity::new(Geometry::Line(Line::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)))),
            Entity::new(Geometry::Line(Line::new(Point2::new(0.0, 1.0), Point2::new(4.0, 1.0)))),
        ];
        let mut state = state();
        state.relative_zero.move_to(Point2::new(7.0, 7.0));

        state.start_action(ActionType::SnapBilinearIntersection);
        state.on_mouse_release(&entities, Point2::new(2.0, 0.0), MouseButton::Left);
        state.on_mouse_release(&entities, Point2::new(2.0, 1.0), MouseButton::Left);
        assert_at(&state, 7.0, 7.0);
    }

    #[test]
    fn test_click_on_circle_is_ignored() {
        let entities = scene();
        let mut state = state();

        state.start_action(ActionType::SnapBilinearIntersection);
        state.on_mouse_release(&entities, Point2::new(35.0, 30.0), MouseButton::Left);
        assert_eq!(state.mouse_hints().map(|h| h.left), Some("选择第一条直线"));
    }

    #[test]
    fn test_locked_relative_zero() {
        let entities = scene();
        let mut state = state();
        state.relative_zero.locked = true;

        state.start_action(ActionType::SnapBilinearIntersection);
        state.on_mouse_release(&entities, Point2::new(1.0, 1.0), MouseButton::Left);
        state.on_mouse_release(&entities, Point2::new(3.0, 1.0), MouseButton::Left);
        assert_at(&state, 0.0, 0.0);
    }

    #[test]
    fn test_middle_click_between_picks() {
        let entities = scene();
        let mut state = state();

        state.start_action(ActionType::SnapPointLineIntersection);
        state.on_mouse_release(&entities, Point2::new(3.0, 17.0), MouseButton::Left);
        state.on_mouse_release(&entities, Point2::new(5.0, 10.0), MouseButton::Middle);
        assert_eq!(state.mouse_hints().map(|h| h.left), Some("选择一条直线"));
        assert_at(&state, 0.0, 0.0);

        state.on_mouse_release(&entities, Point2::new(5.0, 10.0), MouseButton::Left);
        assert_at(&state, 3.0, 10.0);
    }

    #[test]
    fn test_right_click_exits_action() {
        let entities = scene();
        let mut state = state();

        state.start_action(ActionType::SnapPointLineIntersection);
        state.on_mouse_release(&entities, Point2::new(3.0, 17.0), MouseButton::Left);
        state.on_mouse_release(&entities, Point2::origin(), MouseButton::Right);
        assert_eq!(state.active_action(), Some(ActionType::SnapPointLineIntersection));

        state.on_mouse_release(&entities, Point2::origin(), MouseButton::Right);
        assert_eq!(state.active_action(), None);
        assert_eq!(state.mouse_hints(), None);

        // 没有 action 时忽略点击
        state.on_mouse_release(&entities, Point2::new(1.0, 1.0), MouseButton::Left);
        assert_at(&state, 0.0, 0.0);
    }

    #[test]
    fn test_unknown_command() {
        let mut state = state();
        assert!(!state.run_command("LINE"));
        assert_eq!(state.active_action(), None);
    }
}
