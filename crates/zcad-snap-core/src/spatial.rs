//! 实体拾取
//!
//! 宿主通过 `EntityCatcher` 为捕捉工具提供“鼠标下的指定类型实体”。

use crate::entity::Entity;
use crate::geometry::EntityKind;
use crate::math::Point2;

/// 实体拾取服务
pub trait EntityCatcher {
    /// 返回 `pos` 附近（距离不超过 `tolerance`）类型为 `kind` 的实体
    fn catch_entity(&self, pos: Point2, kind: EntityKind, tolerance: f64) -> Option<&Entity>;
}

/// 按类型过滤，取距离最近的实体，距离相同时取先出现者
impl EntityCatcher for Vec<Entity> {
    fn catch_entity(&self, pos: Point2, kind: EntityKind, tolerance: f64) -> Option<&Entity> {
        let mut best: Option<(&Entity, f64)> = None;

        for entity in self.iter().filter(|e| e.kind() == kind) {
            // 包围盒粗筛
            if !entity.geometry.bounding_box().expand(tolerance).contains(&pos) {
                continue;
            }

            let dist = entity.geometry.distance_to_point(&pos);
            if dist > tolerance {
                continue;
            }

            match best {
                Some((_, best_dist)) if best_dist <= dist => {}
                _ => best = Some((entity, dist)),
            }
        }

        best.map(|(entity, _)| entity)
    }
}
