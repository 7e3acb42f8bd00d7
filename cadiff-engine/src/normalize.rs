use std::str::FromStr;

use cadiff_core::{
    document::InsertPlacement,
    geometry::{Point2, Point3, Vector3},
};
use glam::{DMat4, DVec3};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::errors::NormalizeError;

/// 缩放判定的相对误差。
const UNIT_SCALE_EPSILON: f64 = 1e-6;

/// 将数值吸附到容差网格上，半数取偶。
///
/// 先以十进制精确运算，数值超出十进制表示范围时退回浮点 `round_ties_even`。
/// 容差非正或非有限时原样返回；结果中的 `-0.0` 统一为 `0.0`。
pub fn quantize(value: f64, tolerance: f64) -> Result<f64, NormalizeError> {
    if !value.is_finite() {
        return Err(NormalizeError::NonFinite(value));
    }
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Ok(value);
    }
    let snapped = quantize_decimal(value, tolerance)
        .unwrap_or_else(|| (value / tolerance).round_ties_even() * tolerance);
    if !snapped.is_finite() {
        return Err(NormalizeError::NonFinite(snapped));
    }
    Ok(if snapped == 0.0 { 0.0 } else { snapped })
}

fn quantize_decimal(value: f64, tolerance: f64) -> Option<f64> {
    let value = Decimal::from_str(&value.to_string()).ok()?;
    let tolerance = Decimal::from_str(&tolerance.to_string()).ok()?;
    if tolerance.is_zero() {
        return None;
    }
    let steps = value
        .checked_div(tolerance)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    // 经文本转换，保证得到最接近的 f64。
    steps.checked_mul(tolerance)?.to_string().parse::<f64>().ok()
}

pub fn quantize_point(point: Point3, tolerance: f64) -> Result<Point3, NormalizeError> {
    Ok(Point3::new(
        quantize(point.x(), tolerance)?,
        quantize(point.y(), tolerance)?,
        quantize(point.z(), tolerance)?,
    ))
}

pub fn quantize_point2(point: Point2, tolerance: f64) -> Result<Point2, NormalizeError> {
    Ok(Point2::new(
        quantize(point.x(), tolerance)?,
        quantize(point.y(), tolerance)?,
    ))
}

/// 从组合矩阵中恢复的各轴缩放系数。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleFactors {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ScaleFactors {
    pub fn is_unit(&self) -> bool {
        [self.x, self.y, self.z]
            .iter()
            .all(|s| (s - 1.0).abs() <= UNIT_SCALE_EPSILON * s.abs().max(1.0))
    }

    /// 圆与圆弧半径按 XY 平均缩放。
    #[inline]
    pub fn radius_factor(&self) -> f64 {
        (self.x + self.y) / 2.0
    }

    /// 文字高度只随 Y 轴缩放。
    #[inline]
    pub fn height_factor(&self) -> f64 {
        self.y
    }
}

/// 4×4 仿射变换，按 平移 · 绕 Z 旋转 · 缩放 的顺序组合。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(DMat4);

impl Transform {
    pub const IDENTITY: Self = Self(DMat4::IDENTITY);

    /// 由块参照的放置参数构建变换，旋转角以度存储。
    pub fn from_placement(placement: &InsertPlacement) -> Result<Self, NormalizeError> {
        let rotation = placement.rotation;
        if !rotation.is_finite() {
            return Err(NormalizeError::NonFinite(rotation));
        }
        let translation = finite_vec(placement.insert.as_vec3())?;
        let scale = finite_vec(placement.scale.as_vec3())?;
        Ok(Self(
            DMat4::from_translation(translation)
                * DMat4::from_rotation_z(rotation.to_radians())
                * DMat4::from_scale(scale),
        ))
    }

    pub fn translation(offset: Vector3) -> Result<Self, NormalizeError> {
        Ok(Self(DMat4::from_translation(finite_vec(offset.as_vec3())?)))
    }

    /// 返回 `self · inner`，即先应用 `inner` 再应用 `self`。
    #[inline]
    pub fn then(&self, inner: &Transform) -> Self {
        Self(self.0 * inner.0)
    }

    #[inline]
    pub fn matrix(&self) -> DMat4 {
        self.0
    }

    /// 齐次坐标乘法。
    pub fn apply(&self, point: Point3) -> Point3 {
        let mapped = self.0 * point.as_vec3().extend(1.0);
        Point3::new(mapped.x, mapped.y, mapped.z)
    }

    /// 二维点先以 z=0 提升。
    pub fn apply_2d(&self, point: Point2) -> Point3 {
        self.apply(point.extend(0.0))
    }

    /// 以前三列的列向量长度作为各轴缩放。
    pub fn scale_factors(&self) -> ScaleFactors {
        ScaleFactors {
            x: self.0.x_axis.truncate().length(),
            y: self.0.y_axis.truncate().length(),
            z: self.0.z_axis.truncate().length(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.0 == DMat4::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn finite_vec(value: DVec3) -> Result<DVec3, NormalizeError> {
    match value.to_array().into_iter().find(|c| !c.is_finite()) {
        Some(bad) => Err(NormalizeError::NonFinite(bad)),
        None => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Point3, expected: (f64, f64, f64)) {
        assert!((actual.x() - expected.0).abs() < 1e-9, "{actual:?}");
        assert!((actual.y() - expected.1).abs() < 1e-9, "{actual:?}");
        assert!((actual.z() - expected.2).abs() < 1e-9, "{actual:?}");
    }

    #[test]
    fn quantize_snaps_to_grid() {
        assert_eq!(quantize(10.004, 0.01).unwrap(), 10.0);
        assert_eq!(quantize(10.006, 0.01).unwrap(), 10.01);
        assert_eq!(quantize(0.3, 0.1).unwrap(), 0.3);
        assert_eq!(quantize(7.0, 0.02).unwrap(), 7.0);
    }

    #[test]
    fn quantize_breaks_ties_to_even() {
        assert_eq!(quantize(0.025, 0.01).unwrap(), 0.02);
        assert_eq!(quantize(0.035, 0.01).unwrap(), 0.04);
        assert_eq!(quantize(-0.025, 0.01).unwrap(), -0.02);
        assert_eq!(quantize(2.5, 1.0).unwrap(), 2.0);
    }

    #[test]
    fn quantize_canonicalises_negative_zero() {
        let snapped = quantize(-0.004, 0.01).unwrap();
        assert_eq!(snapped.to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn quantize_edge_cases() {
        assert_eq!(quantize(1.234, 0.0).unwrap(), 1.234);
        assert_eq!(quantize(1.234, -1.0).unwrap(), 1.234);
        assert_eq!(quantize(1.234, f64::NAN).unwrap(), 1.234);
        assert!(matches!(
            quantize(f64::INFINITY, 0.01),
            Err(NormalizeError::NonFinite(_))
        ));
        assert!(quantize(f64::NAN, 0.01).is_err());
        // 超出十进制范围时退回浮点取整
        let huge = quantize(1e300, 0.01).unwrap();
        assert!(huge.is_finite());
        assert!((huge / 1e300 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn quantize_is_deterministic() {
        for value in [0.1, 1.0 / 3.0, 123.456_789, -98.7654] {
            assert_eq!(
                quantize(value, 0.01).unwrap().to_bits(),
                quantize(value, 0.01).unwrap().to_bits()
            );
        }
    }

    #[test]
    fn placement_transform_scales_rotates_then_translates() {
        let placement = InsertPlacement::new("B", Point3::new(100.0, 100.0, 0.0))
            .with_rotation(90.0)
            .with_scale(Vector3::new(2.0, 2.0, 1.0));
        let transform = Transform::from_placement(&placement).unwrap();

        assert_close(transform.apply(Point3::new(1.0, 0.0, 0.0)), (100.0, 102.0, 0.0));
        assert_close(transform.apply_2d(Point2::new(0.0, 1.0)), (98.0, 100.0, 0.0));

        let scale = transform.scale_factors();
        assert!((scale.x - 2.0).abs() < 1e-12);
        assert!((scale.y - 2.0).abs() < 1e-12);
        assert!((scale.z - 1.0).abs() < 1e-12);
        assert!(!scale.is_unit());
    }

    #[test]
    fn transforms_compose_by_multiplication() {
        let offset = Transform::translation(Vector3::new(0.0, 5.0, 0.0)).unwrap();
        let placement = Transform::from_placement(&InsertPlacement::new(
            "B",
            Point3::new(10.0, 0.0, 0.0),
        ))
        .unwrap();
        let composed = offset.then(&placement);
        assert_close(composed.apply(Point3::new(1.0, 1.0, 0.0)), (11.0, 6.0, 0.0));
        assert!(composed.scale_factors().is_unit());
        assert!(Transform::IDENTITY.is_identity());
        assert!(!composed.is_identity());
    }

    #[test]
    fn rotation_alone_keeps_unit_scale() {
        let transform = Transform::from_placement(
            &InsertPlacement::new("B", Point3::ORIGIN).with_rotation(33.0),
        )
        .unwrap();
        assert!(transform.scale_factors().is_unit());
    }

    #[test]
    fn non_finite_placement_is_rejected() {
        let placement = InsertPlacement::new("B", Point3::new(f64::NAN, 0.0, 0.0));
        assert!(Transform::from_placement(&placement).is_err());
        let placement = InsertPlacement::new("B", Point3::ORIGIN).with_rotation(f64::INFINITY);
        assert!(Transform::from_placement(&placement).is_err());
    }
}
