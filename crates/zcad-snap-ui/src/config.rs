//! 捕捉工具配置

use serde::{Deserialize, Serialize};
use zcad_snap_core::intersection::IntersectionConfig;

/// 捕捉工具配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// 拾取容差（世界坐标）
    pub pick_tolerance: f64,
    /// 交点计算配置
    pub intersection: IntersectionConfig,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            pick_tolerance: 5.0,
            intersection: IntersectionConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config: ToolConfig = serde_json::from_str(r#"{"pick_tolerance": 0.25}"#).unwrap();
        assert_eq!(config.pick_tolerance, 0.25);
        assert_eq!(config.intersection, IntersectionConfig::default());

        let config: ToolConfig =
            serde_json::from_str(r#"{"intersection": {"max_magnitude": 100.0}}"#).unwrap();
        assert_eq!(config.pick_tolerance, 5.0);
        assert_eq!(config.intersection.max_magnitude, 100.0);
    }
}
