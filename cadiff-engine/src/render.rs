use cadiff_core::{
    document::{ColorIndex, Document, Entity, EntityData, Text},
    geometry::Point3,
};
use tracing::{debug, warn};

use crate::diff::{DiffClass, DiffClassification};
use crate::errors::OutputConstructionError;
use crate::expand::{AbsoluteEntity, AbsoluteGeometry};
use crate::fingerprint::FingerprintIndex;

/// 属性与占位标签缺省的文字高度。
pub const DEFAULT_TEXT_HEIGHT: f64 = 2.5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayer {
    pub name: String,
    pub color: ColorIndex,
}

impl OutputLayer {
    pub fn new(name: impl Into<String>, color: ColorIndex) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// 三个输出图层，默认红、绿、青。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayers {
    pub deleted: OutputLayer,
    pub added: OutputLayer,
    pub unchanged: OutputLayer,
}

impl OutputLayers {
    pub fn get(&self, class: DiffClass) -> &OutputLayer {
        match class {
            DiffClass::Deleted => &self.deleted,
            DiffClass::Added => &self.added,
            DiffClass::Unchanged => &self.unchanged,
        }
    }
}

impl Default for OutputLayers {
    fn default() -> Self {
        Self {
            deleted: OutputLayer::new("DELETED", ColorIndex::RED),
            added: OutputLayer::new("ADDED", ColorIndex::GREEN),
            unchanged: OutputLayer::new("UNCHANGED", ColorIndex::CYAN),
        }
    }
}

#[derive(Debug)]
pub struct RenderedDiff {
    pub document: Document,
    pub emitted: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Default)]
pub struct DiffRenderer {
    layers: OutputLayers,
}

impl DiffRenderer {
    pub fn new(layers: OutputLayers) -> Self {
        Self { layers }
    }

    #[inline]
    pub fn layers(&self) -> &OutputLayers {
        &self.layers
    }

    /// 依次输出 DELETED、ADDED、UNCHANGED；每个指纹只取最先记录的一个实例。
    /// DELETED 与 UNCHANGED 取自 A，ADDED 取自 B。
    pub fn render(
        &self,
        classification: &DiffClassification,
        a: &FingerprintIndex,
        b: &FingerprintIndex,
    ) -> RenderedDiff {
        let mut document = Document::new();
        for class in DiffClass::ALL {
            let layer = self.layers.get(class);
            document.add_layer(layer.name.clone(), layer.color);
        }

        let mut emitted = 0;
        let mut skipped = 0;
        for class in DiffClass::ALL {
            let layer = self.layers.get(class);
            let source = match class {
                DiffClass::Added => b,
                DiffClass::Deleted | DiffClass::Unchanged => a,
            };
            for key in classification.get(class) {
                let Some(representative) = source.representative(key) else {
                    continue;
                };
                match materialize(representative) {
                    Ok(entity) => {
                        document.add_entity(
                            entity
                                .on_layer(layer.name.clone())
                                .with_color(layer.color),
                        );
                        emitted += 1;
                    }
                    Err(err) => {
                        warn!(class = %class, fingerprint = %key, error = %err, "跳过无法输出的实体");
                        skipped += 1;
                    }
                }
            }
        }
        debug!(emitted, skipped, "差异图纸已生成");
        RenderedDiff {
            document,
            emitted,
            skipped,
        }
    }
}

fn label(text: String, insert: Point3, height: f64, rotation: f64) -> Entity {
    Entity::new(EntityData::Text(Text {
        insert,
        content: text,
        height,
        rotation,
    }))
}

/// 按类型把绝对实体还原为可写出的图元。
pub fn materialize(entity: &AbsoluteEntity) -> Result<Entity, OutputConstructionError> {
    let non_finite = || OutputConstructionError::NonFinite {
        kind: entity.type_name().to_string(),
    };
    let finite = |values: &[f64]| values.iter().all(|v| v.is_finite());

    let built = match &entity.geometry {
        AbsoluteGeometry::Line { start, end } => Entity::line(*start, *end),
        AbsoluteGeometry::Circle { center, radius } => {
            if !finite(&[*radius]) {
                return Err(non_finite());
            }
            Entity::circle(*center, *radius)
        }
        AbsoluteGeometry::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        } => {
            if !finite(&[*radius, *start_angle, *end_angle]) {
                return Err(non_finite());
            }
            Entity::arc(*center, *radius, *start_angle, *end_angle)
        }
        AbsoluteGeometry::Point { location } => Entity::point(*location),
        AbsoluteGeometry::Text {
            insert,
            content,
            height,
            rotation,
        } => {
            if !finite(&[*height, *rotation]) {
                return Err(non_finite());
            }
            label(content.clone(), *insert, *height, *rotation)
        }
        AbsoluteGeometry::MText {
            insert,
            content,
            height,
            rotation,
        } => {
            if !finite(&[*height, *rotation]) {
                return Err(non_finite());
            }
            let mut mtext = Entity::mtext(*insert, content.clone(), *height);
            if let EntityData::MText(data) = &mut mtext.data {
                data.rotation = *rotation;
            }
            mtext
        }
        AbsoluteGeometry::Attrib {
            tag,
            value,
            insert,
            height,
            rotation,
        } => {
            let text = if value.is_empty() {
                format!("[{tag}]")
            } else {
                value.clone()
            };
            let height = if height.is_finite() && *height > 0.0 {
                *height
            } else {
                DEFAULT_TEXT_HEIGHT
            };
            let rotation = if rotation.is_finite() { *rotation } else { 0.0 };
            label(text, *insert, height, rotation)
        }
        AbsoluteGeometry::Polyline { vertices, .. } => {
            if vertices.is_empty() {
                return Err(OutputConstructionError::EmptyPolyline);
            }
            // 三个及以上顶点时自动闭合
            Entity::polyline(vertices.iter().copied(), vertices.len() >= 3)
        }
        AbsoluteGeometry::Insert { .. } | AbsoluteGeometry::Other { .. } => {
            let anchor = match &entity.geometry {
                AbsoluteGeometry::Other {
                    insert,
                    center,
                    start,
                    ..
                } => insert.or(*center).or(*start),
                other => other.primary_position(),
            };
            label(
                format!("[{}]", entity.type_name()),
                anchor.unwrap_or(Point3::ORIGIN),
                DEFAULT_TEXT_HEIGHT,
                0.0,
            )
        }
    };

    let anchors_finite = match &built.data {
        EntityData::Line(line) => line.start.is_finite() && line.end.is_finite(),
        EntityData::Circle(circle) => circle.center.is_finite(),
        EntityData::Arc(arc) => arc.center.is_finite(),
        EntityData::Point(point) => point.location.is_finite(),
        EntityData::Text(text) => text.insert.is_finite(),
        EntityData::MText(text) => text.insert.is_finite(),
        EntityData::Polyline(polyline) => polyline.vertices.iter().all(|v| v.is_finite()),
        _ => true,
    };
    if !anchors_finite {
        return Err(non_finite());
    }
    Ok(built)
}
