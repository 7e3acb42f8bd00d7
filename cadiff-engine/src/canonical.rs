use std::f64::consts::TAU;
use std::fmt;

use cadiff_core::{
    document::EntityKind,
    geometry::{Point2, Point3},
};
use tracing::debug;

use crate::errors::{CanonicalizeError, NormalizeError};
use crate::expand::{AbsoluteEntity, AbsoluteGeometry};
use crate::normalize::{quantize, quantize_point, quantize_point2};
use crate::tolerance::ToleranceModel;

/// 多段线签名只取前若干个顶点。
pub const POLYLINE_SIGNATURE_VERTICES: usize = 5;

const FIELD_SEPARATOR: &str = "|";

/// 实体的规范签名串，字段顺序固定。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(String);

impl Signature {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

struct Fields(Vec<String>);

impl Fields {
    fn push(&mut self, field: impl Into<String>) {
        self.0.push(field.into());
    }

    /// 字段构建失败时写入确定性的占位符。
    fn push_or_placeholder(&mut self, name: &str, value: Result<String, NormalizeError>) {
        match value {
            Ok(value) => self.0.push(format!("{name}_{value}")),
            Err(err) => {
                debug!(field = name, error = %err, "签名字段使用占位符");
                self.0.push(format!("{name}_<invalid>"));
            }
        }
    }
}

fn render_point(point: Point3) -> String {
    format!("({},{},{})", point.x(), point.y(), point.z())
}

fn render_point2(point: Point2) -> String {
    format!("({},{})", point.x(), point.y())
}

/// 文字内容：去掉首尾空白以及内部换行。
pub fn normalize_text(raw: &str) -> String {
    raw.trim().chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

/// 把以度为单位的旋转角折算到 [0, 2π) 弧度并按角度容差量化。
pub fn normalize_rotation(degrees: f64, angle_tolerance_deg: f64) -> Result<f64, NormalizeError> {
    if !degrees.is_finite() {
        return Err(NormalizeError::NonFinite(degrees));
    }
    let step = angle_tolerance_deg.to_radians();
    let radians = degrees.to_radians().rem_euclid(TAU);
    let snapped = quantize(radians, step)?;
    // 吸附到一整圈的值折回 0
    Ok(if snapped >= TAU - step / 2.0 { 0.0 } else { snapped })
}

/// 将绝对实体转换为签名串。
#[derive(Debug, Clone, Copy)]
pub struct EntityCanonicalizer {
    tolerances: ToleranceModel,
}

impl EntityCanonicalizer {
    pub fn new(tolerances: ToleranceModel) -> Self {
        Self { tolerances }
    }

    #[inline]
    pub fn tolerances(&self) -> &ToleranceModel {
        &self.tolerances
    }

    pub fn signature(&self, entity: &AbsoluteEntity) -> Result<Signature, CanonicalizeError> {
        let type_name = entity.type_name().trim();
        if type_name.is_empty() {
            return Err(CanonicalizeError::EmptyTypeName);
        }
        let kind = entity.kind();
        let position_tolerance = self.tolerances.for_entity(kind, None);
        let mut fields = Fields(Vec::with_capacity(12));

        fields.push(type_name);

        if let Some(position) = entity.geometry.primary_position() {
            fields.push_or_placeholder(
                "pos",
                quantize_point(position, position_tolerance).map(render_point),
            );
        }

        if !entity.provenance.is_direct() {
            if let Some(placement) = &entity.placement {
                fields.push_or_placeholder(
                    "from_insert",
                    quantize_point(placement.insert, position_tolerance).map(render_point),
                );
            }
        }

        if let Some(text) = text_content(&entity.geometry) {
            let clean = normalize_text(text);
            if !clean.is_empty() {
                fields.push(format!("text_{clean}"));
            }
        }

        if let AbsoluteGeometry::Attrib { tag, .. } = &entity.geometry {
            fields.push(format!("tag_{tag}"));
        }

        self.push_attributes(&mut fields, entity);
        self.push_geometry(&mut fields, &entity.geometry);

        Ok(Signature(fields.0.join(FIELD_SEPARATOR)))
    }

    fn scalar(&self, kind: EntityKind, name: &str, value: f64, scaled: bool) -> Result<String, NormalizeError> {
        let mut tolerance = self.tolerances.for_entity(kind, Some(name));
        // 缩放后的尺寸允许两倍容差
        if scaled && matches!(name, "height" | "radius") {
            tolerance *= 2.0;
        }
        quantize(value, tolerance).map(|v| v.to_string())
    }

    fn push_attributes(&self, fields: &mut Fields, entity: &AbsoluteEntity) {
        let kind = entity.kind();
        let scaled = entity.is_scaled();

        fields.push(format!("layer_{}", entity.layer));
        if let Some(color) = entity.color {
            fields.push(format!("color_{}", color.get()));
        }

        let (height, radius, angles) = match &entity.geometry {
            AbsoluteGeometry::Text { height, .. }
            | AbsoluteGeometry::MText { height, .. }
            | AbsoluteGeometry::Attrib { height, .. } => (Some(*height), None, None),
            AbsoluteGeometry::Circle { radius, .. } => (None, Some(*radius), None),
            AbsoluteGeometry::Arc {
                radius,
                start_angle,
                end_angle,
                ..
            } => (None, Some(*radius), Some((*start_angle, *end_angle))),
            _ => (None, None, None),
        };
        if let Some(height) = height {
            fields.push_or_placeholder("height", self.scalar(kind, "height", height, scaled));
        }
        if let Some(radius) = radius {
            fields.push_or_placeholder("radius", self.scalar(kind, "radius", radius, scaled));
        }
        if let Some((start, end)) = angles {
            fields.push_or_placeholder("start_angle", self.scalar(kind, "start_angle", start, scaled));
            fields.push_or_placeholder("end_angle", self.scalar(kind, "end_angle", end, scaled));
        }

        let rotation = match &entity.geometry {
            AbsoluteGeometry::Text { rotation, .. }
            | AbsoluteGeometry::MText { rotation, .. }
            | AbsoluteGeometry::Attrib { rotation, .. } => Some(*rotation),
            AbsoluteGeometry::Insert { placement } => Some(placement.rotation),
            _ => None,
        };
        if let Some(rotation) = rotation {
            fields.push_or_placeholder(
                "rotation",
                normalize_rotation(rotation, self.tolerances.angle()).map(|v| v.to_string()),
            );
        }
    }

    fn push_geometry(&self, fields: &mut Fields, geometry: &AbsoluteGeometry) {
        let tolerance = self.tolerances.for_entity(geometry.kind(), None);
        let length = self.tolerances.length();
        // 几何字段中的弧角以 0.1° 换算成的弧度值为步长，比白名单字段更细
        let arc_step = self.tolerances.angle().to_radians();
        match geometry {
            AbsoluteGeometry::Line { start, end } => {
                let value = quantize_point(*start, tolerance).and_then(|start| {
                    let end = quantize_point(*end, tolerance)?;
                    Ok(format!("{}_{}", render_point(start), render_point(end)))
                });
                fields.push_or_placeholder("line", value);
            }
            AbsoluteGeometry::Circle { center, radius } => {
                let value = quantize_point(*center, tolerance).and_then(|center| {
                    let radius = quantize(*radius, length)?;
                    Ok(format!("{}_{radius}", render_point(center)))
                });
                fields.push_or_placeholder("circle", value);
            }
            AbsoluteGeometry::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                let value = quantize_point(*center, tolerance).and_then(|center| {
                    let radius = quantize(*radius, length)?;
                    let start = quantize(*start_angle, arc_step)?;
                    let end = quantize(*end_angle, arc_step)?;
                    Ok(format!("{}_{radius}_{start}_{end}", render_point(center)))
                });
                fields.push_or_placeholder("arc", value);
            }
            AbsoluteGeometry::Polyline { vertices, .. } if !vertices.is_empty() => {
                let value = vertices
                    .iter()
                    .take(POLYLINE_SIGNATURE_VERTICES)
                    .map(|v| quantize_point2(*v, tolerance).map(render_point2))
                    .collect::<Result<Vec<_>, _>>()
                    .map(|rendered| format!("[{}]", rendered.join(",")));
                fields.push_or_placeholder("lwpoly_vertices", value);
            }
            _ => {}
        }
    }
}

fn text_content(geometry: &AbsoluteGeometry) -> Option<&str> {
    match geometry {
        AbsoluteGeometry::Text { content, .. } | AbsoluteGeometry::MText { content, .. } => {
            Some(content)
        }
        AbsoluteGeometry::Attrib { value, .. } => Some(value),
        _ => None,
    }
}
