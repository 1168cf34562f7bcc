//! 场景文件：实体 + 命令/点击事件序列

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;
use zcad_snap_core::entity::Entity;
use zcad_snap_core::geometry::Geometry;
use zcad_snap_core::math::Point2;
use zcad_snap_ui::{MouseButton, ToolConfig, UiState};

/// 场景事件
#[derive(Debug, Clone, Deserialize)]
pub enum ScenarioEvent {
    /// 命令行输入
    Command(String),
    /// 鼠标释放
    Click { button: MouseButton, x: f64, y: f64 },
    /// 锁定/解锁相对零点
    Lock(bool),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: ToolConfig,
    #[serde(default)]
    pub entities: Vec<Geometry>,
    #[serde(default)]
    pub events: Vec<ScenarioEvent>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid scenario {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// 依次回放事件，返回最终状态
    pub fn replay(self) -> UiState {
        let entities: Vec<Entity> = self.entities.into_iter().map(Entity::new).collect();
        info!("Loaded {} entities", entities.len());

        let mut state = UiState::new(self.config);
        for event in self.events {
            match event {
                ScenarioEvent::Command(cmd) => {
                    state.run_command(&cmd);
                }
                ScenarioEvent::Click { button, x, y } => {
                    state.on_mouse_release(&entities, Point2::new(x, y), button);
                }
                ScenarioEvent::Lock(locked) => state.relative_zero.locked = locked,
            }
        }

        state
    }
}
