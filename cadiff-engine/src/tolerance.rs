use cadiff_core::document::EntityKind;

pub const DEFAULT_TOLERANCE: f64 = 0.01;
/// 角度容差固定为 0.1 度，与基础容差无关。
pub const ANGLE_TOLERANCE_DEG: f64 = 0.1;

/// 由基础容差派生出的各类容差。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceModel {
    base: f64,
}

impl ToleranceModel {
    pub fn new(base: f64) -> Self {
        Self { base }
    }

    #[inline]
    pub fn base(&self) -> f64 {
        self.base
    }

    #[inline]
    pub fn coordinate(&self) -> f64 {
        self.base
    }

    /// 连接点与 POINT 使用更严格的容差。
    #[inline]
    pub fn connection(&self) -> f64 {
        self.base * 0.1
    }

    /// 文字锚点允许更大的放置误差。
    #[inline]
    pub fn text_position(&self) -> f64 {
        self.base * 2.0
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        ANGLE_TOLERANCE_DEG
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.base
    }

    /// 按实体类型优先、属性名其次选择容差。
    pub fn for_entity(&self, kind: EntityKind, attribute: Option<&str>) -> f64 {
        if kind.is_text() {
            return self.text_position();
        }
        let attribute = attribute.map(str::to_ascii_lowercase);
        let attribute = attribute.as_deref();
        if kind == EntityKind::Point || attribute.is_some_and(|name| name.contains("connection")) {
            self.connection()
        } else if attribute.is_some_and(|name| name.contains("angle") || name.contains("rotation")) {
            self.angle()
        } else {
            self.coordinate()
        }
    }
}

impl Default for ToleranceModel {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_tolerances_follow_base() {
        let model = ToleranceModel::new(0.5);
        assert!((model.coordinate() - 0.5).abs() < 1e-12);
        assert!((model.connection() - 0.05).abs() < 1e-12);
        assert!((model.text_position() - 1.0).abs() < 1e-12);
        assert!((model.length() - 0.5).abs() < 1e-12);
        assert!((model.angle() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn lookup_prefers_kind_over_attribute() {
        let model = ToleranceModel::default();
        let close = |a: f64, b: f64| (a - b).abs() < 1e-12;
        assert!(close(model.for_entity(EntityKind::Text, Some("rotation")), 0.02));
        assert!(close(model.for_entity(EntityKind::Attrib, None), 0.02));
        assert!(close(model.for_entity(EntityKind::Point, Some("angle")), 0.001));
        assert!(close(model.for_entity(EntityKind::Line, Some("Connection_Point")), 0.001));
        assert!(close(model.for_entity(EntityKind::Arc, Some("start_angle")), 0.1));
        assert!(close(model.for_entity(EntityKind::Insert, Some("rotation")), 0.1));
        assert!(close(model.for_entity(EntityKind::Circle, Some("radius")), 0.01));
        assert!(close(model.for_entity(EntityKind::Line, None), 0.01));
    }
}
