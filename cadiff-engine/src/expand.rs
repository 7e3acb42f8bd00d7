use std::fmt;

use cadiff_core::{
    document::{ColorIndex, Document, Entity, EntityData, EntityId, EntityKind, InsertPlacement},
    geometry::{Point2, Point3},
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::EntityProcessingError;
use crate::normalize::{ScaleFactors, Transform};

/// 绝对实体的来源。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Direct,
    ExpandedFromBlock(String),
}

impl Provenance {
    #[inline]
    pub fn is_direct(&self) -> bool {
        matches!(self, Provenance::Direct)
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Direct => f.write_str("direct"),
            Provenance::ExpandedFromBlock(name) => write!(f, "expanded-from-block:{name}"),
        }
    }
}

/// 映射到绘图空间后的几何数据。字段与 `EntityData` 对应，只是坐标都已是绝对坐标。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AbsoluteGeometry {
    Line {
        start: Point3,
        end: Point3,
    },
    Circle {
        center: Point3,
        radius: f64,
    },
    Arc {
        center: Point3,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Text {
        insert: Point3,
        content: String,
        height: f64,
        rotation: f64,
    },
    #[serde(rename = "mtext")]
    MText {
        insert: Point3,
        content: String,
        height: f64,
        rotation: f64,
    },
    Attrib {
        tag: String,
        value: String,
        insert: Point3,
        height: f64,
        rotation: f64,
    },
    Point {
        location: Point3,
    },
    Polyline {
        vertices: Vec<Point2>,
        is_closed: bool,
    },
    /// 块内嵌套的块参照：只变换插入点，不再展开。
    Insert {
        placement: InsertPlacement,
    },
    Other {
        type_name: String,
        insert: Option<Point3>,
        center: Option<Point3>,
        start: Option<Point3>,
        location: Option<Point3>,
    },
}

impl AbsoluteGeometry {
    pub fn kind(&self) -> EntityKind {
        match self {
            AbsoluteGeometry::Line { .. } => EntityKind::Line,
            AbsoluteGeometry::Circle { .. } => EntityKind::Circle,
            AbsoluteGeometry::Arc { .. } => EntityKind::Arc,
            AbsoluteGeometry::Text { .. } => EntityKind::Text,
            AbsoluteGeometry::MText { .. } => EntityKind::MText,
            AbsoluteGeometry::Attrib { .. } => EntityKind::Attrib,
            AbsoluteGeometry::Point { .. } => EntityKind::Point,
            AbsoluteGeometry::Polyline { .. } => EntityKind::Polyline,
            AbsoluteGeometry::Insert { .. } => EntityKind::Insert,
            AbsoluteGeometry::Other { .. } => EntityKind::Other,
        }
    }

    /// 图纸格式中的类型名，未建模实体保留原名。
    pub fn type_name(&self) -> &str {
        match self {
            AbsoluteGeometry::Other { type_name, .. } => type_name,
            other => other.kind().label(),
        }
    }

    /// 主定位点：依次取 insert、center、start、location 中第一个存在的。
    pub fn primary_position(&self) -> Option<Point3> {
        match self {
            AbsoluteGeometry::Line { start, .. } => Some(*start),
            AbsoluteGeometry::Circle { center, .. } | AbsoluteGeometry::Arc { center, .. } => {
                Some(*center)
            }
            AbsoluteGeometry::Text { insert, .. }
            | AbsoluteGeometry::MText { insert, .. }
            | AbsoluteGeometry::Attrib { insert, .. } => Some(*insert),
            AbsoluteGeometry::Point { location } => Some(*location),
            AbsoluteGeometry::Polyline { .. } => None,
            AbsoluteGeometry::Insert { placement } => Some(placement.insert),
            AbsoluteGeometry::Other {
                insert,
                center,
                start,
                location,
                ..
            } => insert.or(*center).or(*start).or(*location),
        }
    }

    fn points(&self) -> Vec<Point3> {
        match self {
            AbsoluteGeometry::Line { start, end } => vec![*start, *end],
            AbsoluteGeometry::Polyline { vertices, .. } => {
                vertices.iter().map(|v| v.extend(0.0)).collect()
            }
            other => other.primary_position().into_iter().collect(),
        }
    }
}

/// 已映射到绘图空间的实体记录，不含句柄等易变标识。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbsoluteEntity {
    pub layer: String,
    pub color: Option<ColorIndex>,
    pub geometry: AbsoluteGeometry,
    pub provenance: Provenance,
    /// 所属块参照的放置参数，插入点已映射到绘图空间。
    pub placement: Option<InsertPlacement>,
    /// 仅在存在非单位缩放时记录。
    pub scale: Option<ScaleFactors>,
}

impl AbsoluteEntity {
    #[inline]
    pub fn kind(&self) -> EntityKind {
        self.geometry.kind()
    }

    #[inline]
    pub fn type_name(&self) -> &str {
        self.geometry.type_name()
    }

    #[inline]
    pub fn is_scaled(&self) -> bool {
        self.scale.is_some()
    }
}

/// 将单个实体映射为绝对实体。ATTDEF 是模板而非实例，返回 `Ok(None)`。
pub fn to_absolute(
    entity: &Entity,
    transform: &Transform,
    provenance: Provenance,
    placement: Option<InsertPlacement>,
) -> Result<Option<AbsoluteEntity>, EntityProcessingError> {
    let factors = transform.scale_factors();
    let scale = (!factors.is_unit()).then_some(factors);
    let radius = |r: f64| scale.map_or(r, |s| r * s.radius_factor());
    let height = |h: f64| scale.map_or(h, |s| h * s.height_factor());

    let geometry = match &entity.data {
        EntityData::AttDef(_) => return Ok(None),
        EntityData::Line(line) => AbsoluteGeometry::Line {
            start: transform.apply(line.start),
            end: transform.apply(line.end),
        },
        EntityData::Circle(circle) => AbsoluteGeometry::Circle {
            center: transform.apply(circle.center),
            radius: radius(circle.radius),
        },
        // 起止角与文字旋转不随块参照旋转
        EntityData::Arc(arc) => AbsoluteGeometry::Arc {
            center: transform.apply(arc.center),
            radius: radius(arc.radius),
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
        },
        EntityData::Text(text) => AbsoluteGeometry::Text {
            insert: transform.apply(text.insert),
            content: text.content.clone(),
            height: height(text.height),
            rotation: text.rotation,
        },
        EntityData::MText(text) => AbsoluteGeometry::MText {
            insert: transform.apply(text.insert),
            content: text.content.clone(),
            height: height(text.height),
            rotation: text.rotation,
        },
        EntityData::Attrib(attrib) => AbsoluteGeometry::Attrib {
            tag: attrib.tag.clone(),
            value: attrib.value.clone(),
            insert: transform.apply(attrib.insert),
            height: height(attrib.height),
            rotation: attrib.rotation,
        },
        EntityData::Point(point) => AbsoluteGeometry::Point {
            location: transform.apply(point.location),
        },
        EntityData::Polyline(polyline) => AbsoluteGeometry::Polyline {
            vertices: polyline
                .vertices
                .iter()
                .map(|v| transform.apply_2d(*v).truncate())
                .collect(),
            is_closed: polyline.is_closed,
        },
        EntityData::Insert(insert) => AbsoluteGeometry::Insert {
            placement: InsertPlacement {
                insert: transform.apply(insert.placement.insert),
                ..insert.placement.clone()
            },
        },
        EntityData::Other(other) => AbsoluteGeometry::Other {
            type_name: other.type_name.clone(),
            insert: other.insert.map(|p| transform.apply(p)),
            center: other.center.map(|p| transform.apply(p)),
            start: other.start.map(|p| transform.apply(p)),
            location: other.location.map(|p| transform.apply(p)),
        },
    };

    if geometry.points().iter().any(|p| !p.is_finite()) {
        return Err(EntityProcessingError::NonFinite {
            kind: entity.type_name().to_string(),
        });
    }

    Ok(Some(AbsoluteEntity {
        layer: entity.layer.clone(),
        color: entity.color,
        geometry,
        provenance,
        placement,
        scale,
    }))
}

/// 展开结果。
#[derive(Debug, Default)]
pub struct Expansion {
    pub entities: Vec<AbsoluteEntity>,
    pub skipped: usize,
}

/// 遍历绘图空间，把块参照展开为绝对实体。只展开一层。
#[derive(Debug, Clone, Copy)]
pub struct BlockExpander<'a> {
    document: &'a Document,
    root: Transform,
}

impl<'a> BlockExpander<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            root: Transform::IDENTITY,
        }
    }

    /// 设置整个绘图空间的根变换，位于所有块参照变换之前。
    pub fn with_root(mut self, root: Transform) -> Self {
        self.root = root;
        self
    }

    pub fn expand(&self) -> Expansion {
        let mut expansion = Expansion::default();
        for (id, entity) in self.document.model_space() {
            let result = match &entity.data {
                EntityData::Insert(insert) => self.expand_insert(
                    &insert.placement,
                    &insert.attribs,
                    &mut expansion,
                ),
                _ => to_absolute(entity, &self.root, Provenance::Direct, None)
                    .map(|absolute| expansion.entities.extend(absolute)),
            };
            if let Err(err) = result {
                warn!(entity = id.get(), kind = entity.type_name(), error = %err, "跳过无法展开的实体");
                expansion.skipped += 1;
            }
        }
        debug!(
            entities = expansion.entities.len(),
            skipped = expansion.skipped,
            "绘图空间展开完成"
        );
        expansion
    }

    fn expand_insert(
        &self,
        placement: &InsertPlacement,
        attribs: &[EntityId],
        expansion: &mut Expansion,
    ) -> Result<(), EntityProcessingError> {
        let block = self
            .document
            .block_by_name(&placement.block)
            .ok_or_else(|| EntityProcessingError::UnknownBlock(placement.block.clone()))?;
        let transform = self.root.then(&Transform::from_placement(placement)?);
        let provenance = Provenance::ExpandedFromBlock(placement.block.clone());
        let anchored = InsertPlacement {
            insert: self.root.apply(placement.insert),
            ..placement.clone()
        };

        for id in &block.entities {
            let outcome = self
                .document
                .entity(*id)
                .ok_or(EntityProcessingError::UnknownEntity(id.get()))
                .and_then(|entity| {
                    to_absolute(entity, &transform, provenance.clone(), Some(anchored.clone()))
                });
            match outcome {
                Ok(absolute) => expansion.entities.extend(absolute),
                Err(err) => {
                    warn!(block = %placement.block, entity = id.get(), error = %err, "跳过块内实体");
                    expansion.skipped += 1;
                }
            }
        }

        // 附着属性沿用根变换，不叠加块参照自身的变换
        for id in attribs {
            let outcome = match self.document.entity(*id) {
                None => Err(EntityProcessingError::UnknownEntity(id.get())),
                Some(entity) if entity.kind() != EntityKind::Attrib => {
                    Err(EntityProcessingError::NotAnInstance { id: id.get() })
                }
                Some(entity) => to_absolute(
                    entity,
                    &self.root,
                    provenance.clone(),
                    Some(anchored.clone()),
                ),
            };
            match outcome {
                Ok(absolute) => expansion.entities.extend(absolute),
                Err(err) => {
                    warn!(block = %placement.block, entity = id.get(), error = %err, "跳过块参照属性");
                    expansion.skipped += 1;
                }
            }
        }
        Ok(())
    }
}
