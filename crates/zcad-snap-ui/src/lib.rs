//! ZCAD 捕捉工具
//!
//! 相对零点捕捉 Action（状态机）以及持有相对零点标记的宿主状态。

pub mod action;
pub mod actions;
pub mod command_registry;
pub mod config;
pub mod state;

pub use action::{Action, ActionContext, ActionResult, ActionType, MouseButton, MouseHints};
pub use actions::create_action;
pub use command_registry::CommandRegistry;
pub use config::ToolConfig;
pub use state::{RelativeZero, UiState};
