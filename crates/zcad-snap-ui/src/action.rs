//! Action 系统 - 参考 LibreCAD 的状态机设计
//!
//! 每个捕捉工具是一个独立的 Action 实现，
//! 采用状态机模式处理多次点击的输入收集。

use serde::{Deserialize, Serialize};
use zcad_snap_core::entity::Entity;
use zcad_snap_core::geometry::EntityKind;
use zcad_snap_core::intersection::IntersectionConfig;
use zcad_snap_core::math::Point2;
use zcad_snap_core::spatial::EntityCatcher;

/// Action 执行结果
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    /// 继续当前 action
    Continue,
    /// 把相对零点移到指定位置，action 继续
    MoveRelativeZero(Point2),
    /// 退出当前 action
    Cancel,
}

/// Action 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    /// 两直线（延长线）交点
    SnapBilinearIntersection,
    /// 点到直线的垂足
    SnapPointLineIntersection,
}

impl ActionType {
    /// 所有 action 类型
    pub const ALL: [ActionType; 2] = [
        ActionType::SnapBilinearIntersection,
        ActionType::SnapPointLineIntersection,
    ];

    /// 获取 action 的名称
    pub fn name(&self) -> &'static str {
        match self {
            ActionType::SnapBilinearIntersection => "Snap Bilinear Intersection",
            ActionType::SnapPointLineIntersection => "Snap Point Line Intersection",
        }
    }

    /// 完整命令名
    pub fn command(&self) -> &'static str {
        match self {
            ActionType::SnapBilinearIntersection => "SNAPBILINEAR",
            ActionType::SnapPointLineIntersection => "SNAPPOINTLINE",
        }
    }

    /// 快捷键/短命令
    pub fn shortcuts(&self) -> &'static [&'static str] {
        match self {
            ActionType::SnapBilinearIntersection => &["BI"],
            ActionType::SnapPointLineIntersection => &["PLI", "PERP"],
        }
    }
}

/// Action 上下文 - 传递给 Action 的运行时信息
pub struct ActionContext<'a> {
    /// 鼠标世界坐标
    pub mouse_pos: Point2,
    /// 宿主的实体拾取服务
    pub catcher: &'a dyn EntityCatcher,
    /// 拾取容差（世界坐标）
    pub pick_tolerance: f64,
    /// 交点计算配置
    pub intersection: &'a IntersectionConfig,
}

impl<'a> ActionContext<'a> {
    /// 拾取鼠标下指定类型的实体
    pub fn catch_entity(&self, kind: EntityKind) -> Option<&'a Entity> {
        self.catcher.catch_entity(self.mouse_pos, kind, self.pick_tolerance)
    }
}

/// 鼠标按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// 鼠标提示：左键期望的操作与右键（取消）的说明
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseHints {
    pub left: &'static str,
    pub right: &'static str,
}

impl MouseHints {
    pub const fn new(left: &'static str, right: &'static str) -> Self {
        Self { left, right }
    }
}

/// Action trait - 所有捕捉工具的核心接口
///
/// 参考 LibreCAD 的 RS_ActionInterface
pub trait Action: Send {
    /// 获取 action 类型
    fn action_type(&self) -> ActionType;

    /// 获取 action 名称
    fn name(&self) -> &str {
        self.action_type().name()
    }

    /// 进入初始状态
    fn init(&mut self) {
        self.reset();
    }

    /// 清空已选择的实体，回到初始状态
    fn reset(&mut self);

    /// 鼠标释放事件
    fn on_mouse_click(&mut self, ctx: &ActionContext, button: MouseButton) -> ActionResult;

    /// 当前状态的鼠标提示
    fn mouse_hints(&self) -> MouseHints;

    /// 获取当前状态的提示文本
    fn get_prompt(&self) -> &str {
        self.mouse_hints().left
    }
}
