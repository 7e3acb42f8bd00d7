pub mod geometry {
    use glam::{DVec2, DVec3};
    use serde::{Deserialize, Serialize};

    /// 二维点，内部以 `glam::DVec2` 表示，目前仅用于多段线顶点。
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Point2(pub DVec2);

    impl Point2 {
        #[inline]
        pub fn new(x: f64, y: f64) -> Self {
            Self(DVec2::new(x, y))
        }

        #[inline]
        pub fn x(self) -> f64 {
            self.0.x
        }

        #[inline]
        pub fn y(self) -> f64 {
            self.0.y
        }

        #[inline]
        pub fn as_vec2(self) -> DVec2 {
            self.0
        }

        /// 提升为三维点。
        #[inline]
        pub fn extend(self, z: f64) -> Point3 {
            Point3(self.0.extend(z))
        }

        #[inline]
        pub fn is_finite(self) -> bool {
            self.0.is_finite()
        }
    }

    impl From<DVec2> for Point2 {
        fn from(value: DVec2) -> Self {
            Self(value)
        }
    }

    /// 三维点。图纸格式中的实体坐标均为三维，二维输入在变换前以 z=0 提升。
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Point3(pub DVec3);

    impl Point3 {
        pub const ORIGIN: Self = Self(DVec3::ZERO);

        #[inline]
        pub fn new(x: f64, y: f64, z: f64) -> Self {
            Self(DVec3::new(x, y, z))
        }

        #[inline]
        pub fn x(self) -> f64 {
            self.0.x
        }

        #[inline]
        pub fn y(self) -> f64 {
            self.0.y
        }

        #[inline]
        pub fn z(self) -> f64 {
            self.0.z
        }

        #[inline]
        pub fn as_vec3(self) -> DVec3 {
            self.0
        }

        #[inline]
        pub fn truncate(self) -> Point2 {
            Point2(self.0.truncate())
        }

        #[inline]
        pub fn translate(self, offset: Vector3) -> Self {
            Self(self.0 + offset.0)
        }

        #[inline]
        pub fn is_finite(self) -> bool {
            self.0.is_finite()
        }
    }

    impl From<DVec3> for Point3 {
        fn from(value: DVec3) -> Self {
            Self(value)
        }
    }

    impl From<Point2> for Point3 {
        fn from(value: Point2) -> Self {
            value.extend(0.0)
        }
    }

    /// 三维向量，用于块参照的缩放系数与整体偏移。
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Vector3(pub DVec3);

    impl Vector3 {
        pub const ZERO: Self = Self(DVec3::ZERO);
        pub const ONE: Self = Self(DVec3::ONE);

        #[inline]
        pub fn new(x: f64, y: f64, z: f64) -> Self {
            Self(DVec3::new(x, y, z))
        }

        #[inline]
        pub fn x(self) -> f64 {
            self.0.x
        }

        #[inline]
        pub fn y(self) -> f64 {
            self.0.y
        }

        #[inline]
        pub fn z(self) -> f64 {
            self.0.z
        }

        #[inline]
        pub fn as_vec3(self) -> DVec3 {
            self.0
        }

        #[inline]
        pub fn is_finite(self) -> bool {
            self.0.is_finite()
        }
    }

    impl From<DVec3> for Vector3 {
        fn from(value: DVec3) -> Self {
            Self(value)
        }
    }
}

pub mod document {
    use std::collections::HashMap;

    use serde::{Deserialize, Serialize};
    use thiserror::Error;

    use crate::geometry::{Point2, Point3, Vector3};

    /// 实体在文档实体池中的下标。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub struct EntityId(u64);

    impl EntityId {
        #[inline]
        pub fn new(raw: u64) -> Self {
            Self(raw)
        }

        /// 提供原始数值，便于序列化或日志输出。
        #[inline]
        pub fn get(self) -> u64 {
            self.0
        }

        #[inline]
        fn index(self) -> usize {
            self.0 as usize
        }
    }

    /// 块定义在文档块池中的下标。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct BlockId(u64);

    impl BlockId {
        #[inline]
        pub fn get(self) -> u64 {
            self.0
        }

        #[inline]
        fn index(self) -> usize {
            self.0 as usize
        }
    }

    /// AutoCAD 颜色索引（ACI）。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ColorIndex(pub i16);

    impl ColorIndex {
        pub const BY_BLOCK: Self = Self(0);
        pub const RED: Self = Self(1);
        pub const GREEN: Self = Self(3);
        pub const CYAN: Self = Self(4);
        pub const WHITE: Self = Self(7);
        pub const BY_LAYER: Self = Self(256);

        #[inline]
        pub fn get(self) -> i16 {
            self.0
        }
    }

    impl From<i16> for ColorIndex {
        fn from(value: i16) -> Self {
            Self(value)
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Layer {
        pub name: String,
        pub color: ColorIndex,
        #[serde(default = "default_visible")]
        pub is_visible: bool,
    }

    fn default_visible() -> bool {
        true
    }

    impl Layer {
        #[inline]
        pub fn new(name: impl Into<String>, color: ColorIndex) -> Self {
            Self {
                name: name.into(),
                color,
                is_visible: true,
            }
        }
    }

    /// 句柄、所有者与反应器链接。它们随文件保存而变化，任何比较都不得读取。
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct VolatileIds {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub handle: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub owner: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        pub reactors: Vec<String>,
    }

    impl VolatileIds {
        pub fn is_empty(&self) -> bool {
            self.handle.is_none() && self.owner.is_none() && self.reactors.is_empty()
        }
    }

    /// 实体类型标签，与图纸格式中的类型名一一对应。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum EntityKind {
        Line,
        Circle,
        Arc,
        Text,
        MText,
        Attrib,
        AttDef,
        Point,
        Polyline,
        Insert,
        Other,
    }

    impl EntityKind {
        pub fn label(self) -> &'static str {
            match self {
                EntityKind::Line => "LINE",
                EntityKind::Circle => "CIRCLE",
                EntityKind::Arc => "ARC",
                EntityKind::Text => "TEXT",
                EntityKind::MText => "MTEXT",
                EntityKind::Attrib => "ATTRIB",
                EntityKind::AttDef => "ATTDEF",
                EntityKind::Point => "POINT",
                EntityKind::Polyline => "POLYLINE",
                EntityKind::Insert => "INSERT",
                EntityKind::Other => "OTHER",
            }
        }

        #[inline]
        pub fn is_text(self) -> bool {
            matches!(
                self,
                EntityKind::Text | EntityKind::MText | EntityKind::Attrib
            )
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Line {
        pub start: Point3,
        pub end: Point3,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Circle {
        pub center: Point3,
        pub radius: f64,
    }

    /// 圆弧，起止角以度为单位（与图纸格式一致）。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Arc {
        pub center: Point3,
        pub radius: f64,
        pub start_angle: f64,
        pub end_angle: f64,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Text {
        pub insert: Point3,
        pub content: String,
        pub height: f64,
        #[serde(default)]
        pub rotation: f64,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct MText {
        pub insert: Point3,
        pub content: String,
        pub height: f64,
        #[serde(default)]
        pub rotation: f64,
    }

    /// 块参照上携带的属性实例（ATTRIB）。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Attrib {
        pub tag: String,
        pub value: String,
        pub insert: Point3,
        pub height: f64,
        #[serde(default)]
        pub rotation: f64,
    }

    /// 块定义中的属性模板（ATTDEF），不是实例，展开时跳过。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct AttDef {
        pub tag: String,
        pub default_value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub prompt: Option<String>,
        pub insert: Point3,
        pub height: f64,
        #[serde(default)]
        pub rotation: f64,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct PointEntity {
        pub location: Point3,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Polyline {
        pub vertices: Vec<Point2>,
        #[serde(default)]
        pub is_closed: bool,
    }

    /// 块参照的放置参数：块名、插入点、旋转角（度）与各轴缩放。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct InsertPlacement {
        pub block: String,
        pub insert: Point3,
        #[serde(default)]
        pub rotation: f64,
        #[serde(default = "unit_scale")]
        pub scale: Vector3,
    }

    fn unit_scale() -> Vector3 {
        Vector3::ONE
    }

    impl InsertPlacement {
        pub fn new(block: impl Into<String>, insert: Point3) -> Self {
            Self {
                block: block.into(),
                insert,
                rotation: 0.0,
                scale: Vector3::ONE,
            }
        }

        pub fn with_rotation(mut self, degrees: f64) -> Self {
            self.rotation = degrees;
            self
        }

        pub fn with_scale(mut self, scale: Vector3) -> Self {
            self.scale = scale;
            self
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Insert {
        #[serde(flatten)]
        pub placement: InsertPlacement,
        /// 附着的 ATTRIB 实例，指向实体池。
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        pub attribs: Vec<EntityId>,
    }

    /// 未建模的实体类型，仅保留类型名与可能存在的锚点。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct OtherEntity {
        pub type_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub insert: Option<Point3>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub center: Option<Point3>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub start: Option<Point3>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub location: Option<Point3>,
    }

    impl OtherEntity {
        pub fn new(type_name: impl Into<String>) -> Self {
            Self {
                type_name: type_name.into(),
                insert: None,
                center: None,
                start: None,
                location: None,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(tag = "type", rename_all = "snake_case")]
    pub enum EntityData {
        Line(Line),
        Circle(Circle),
        Arc(Arc),
        Text(Text),
        #[serde(rename = "mtext")]
        MText(MText),
        Attrib(Attrib),
        #[serde(rename = "attdef")]
        AttDef(AttDef),
        Point(PointEntity),
        Polyline(Polyline),
        Insert(Insert),
        Other(OtherEntity),
    }

    impl EntityData {
        pub fn kind(&self) -> EntityKind {
            match self {
                EntityData::Line(_) => EntityKind::Line,
                EntityData::Circle(_) => EntityKind::Circle,
                EntityData::Arc(_) => EntityKind::Arc,
                EntityData::Text(_) => EntityKind::Text,
                EntityData::MText(_) => EntityKind::MText,
                EntityData::Attrib(_) => EntityKind::Attrib,
                EntityData::AttDef(_) => EntityKind::AttDef,
                EntityData::Point(_) => EntityKind::Point,
                EntityData::Polyline(_) => EntityKind::Polyline,
                EntityData::Insert(_) => EntityKind::Insert,
                EntityData::Other(_) => EntityKind::Other,
            }
        }
    }

    fn default_layer() -> String {
        "0".to_string()
    }

    /// 文档中的一个图元：公共属性（图层、颜色、易变标识）加上按类型区分的几何数据。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Entity {
        #[serde(default = "default_layer")]
        pub layer: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub color: Option<ColorIndex>,
        #[serde(default, skip_serializing_if = "VolatileIds::is_empty")]
        pub ids: VolatileIds,
        pub data: EntityData,
    }

    impl Entity {
        pub fn new(data: EntityData) -> Self {
            Self {
                layer: default_layer(),
                color: None,
                ids: VolatileIds::default(),
                data,
            }
        }

        pub fn line(start: Point3, end: Point3) -> Self {
            Self::new(EntityData::Line(Line { start, end }))
        }

        pub fn circle(center: Point3, radius: f64) -> Self {
            Self::new(EntityData::Circle(Circle { center, radius }))
        }

        pub fn arc(center: Point3, radius: f64, start_angle: f64, end_angle: f64) -> Self {
            Self::new(EntityData::Arc(Arc {
                center,
                radius,
                start_angle,
                end_angle,
            }))
        }

        pub fn text(insert: Point3, content: impl Into<String>, height: f64) -> Self {
            Self::new(EntityData::Text(Text {
                insert,
                content: content.into(),
                height,
                rotation: 0.0,
            }))
        }

        pub fn mtext(insert: Point3, content: impl Into<String>, height: f64) -> Self {
            Self::new(EntityData::MText(MText {
                insert,
                content: content.into(),
                height,
                rotation: 0.0,
            }))
        }

        pub fn attrib(
            tag: impl Into<String>,
            value: impl Into<String>,
            insert: Point3,
            height: f64,
        ) -> Self {
            Self::new(EntityData::Attrib(Attrib {
                tag: tag.into(),
                value: value.into(),
                insert,
                height,
                rotation: 0.0,
            }))
        }

        pub fn point(location: Point3) -> Self {
            Self::new(EntityData::Point(PointEntity { location }))
        }

        pub fn polyline<I>(vertices: I, is_closed: bool) -> Self
        where
            I: IntoIterator<Item = Point2>,
        {
            Self::new(EntityData::Polyline(Polyline {
                vertices: vertices.into_iter().collect(),
                is_closed,
            }))
        }

        pub fn insert(placement: InsertPlacement) -> Self {
            Self::new(EntityData::Insert(Insert {
                placement,
                attribs: Vec::new(),
            }))
        }

        pub fn on_layer(mut self, layer: impl Into<String>) -> Self {
            self.layer = layer.into();
            self
        }

        pub fn with_color(mut self, color: impl Into<ColorIndex>) -> Self {
            self.color = Some(color.into());
            self
        }

        pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
            self.ids.handle = Some(handle.into());
            self
        }

        #[inline]
        pub fn kind(&self) -> EntityKind {
            self.data.kind()
        }

        /// 图纸格式中的类型名；未建模实体返回其原始类型名。
        pub fn type_name(&self) -> &str {
            match &self.data {
                EntityData::Other(other) => &other.type_name,
                data => data.kind().label(),
            }
        }
    }

    /// 命名块定义，实体以实体池下标按声明顺序保存。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Block {
        pub name: String,
        #[serde(default)]
        pub entities: Vec<EntityId>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum DocumentError {
        #[error("block {0} does not exist")]
        UnknownBlock(u64),
        #[error("entity {0} does not exist")]
        UnknownEntity(u64),
        #[error("entity {0} is not an INSERT")]
        NotAnInsert(u64),
        #[error("attached entity must be an ATTRIB, got {0}")]
        NotAnAttrib(String),
        #[error("block name {0:?} is defined more than once")]
        DuplicateBlock(String),
        #[error("reference to missing entity {0}")]
        DanglingEntity(u64),
    }

    /// 图纸文档。实体与块定义均存放在池中，以下标互相引用，避免块参照与块定义之间的所有权环。
    #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Document {
        #[serde(default)]
        layers: Vec<Layer>,
        #[serde(default)]
        entities: Vec<Entity>,
        #[serde(default)]
        model_space: Vec<EntityId>,
        #[serde(default)]
        blocks: Vec<Block>,
        #[serde(skip)]
        block_names: HashMap<String, BlockId>,
    }

    impl Document {
        pub fn new() -> Self {
            let mut doc = Self::default();
            doc.ensure_layer("0");
            doc
        }

        /// 确保图层存在；新图层使用白色（7）。
        pub fn ensure_layer(&mut self, name: impl AsRef<str>) {
            let name = name.as_ref();
            if self.layer(name).is_none() {
                self.layers.push(Layer::new(name, ColorIndex::WHITE));
            }
        }

        /// 新建或更新图层颜色。
        pub fn add_layer(&mut self, name: impl Into<String>, color: ColorIndex) {
            let name = name.into();
            match self.layers.iter_mut().find(|layer| layer.name == name) {
                Some(layer) => layer.color = color,
                None => self.layers.push(Layer::new(name, color)),
            }
        }

        #[inline]
        pub fn layer(&self, name: &str) -> Option<&Layer> {
            self.layers.iter().find(|layer| layer.name == name)
        }

        #[inline]
        pub fn layers(&self) -> impl Iterator<Item = &Layer> {
            self.layers.iter()
        }

        /// 将实体加入绘图空间（model space）。
        pub fn add_entity(&mut self, entity: Entity) -> EntityId {
            let id = self.push(entity);
            self.model_space.push(id);
            id
        }

        pub fn add_line(&mut self, start: Point3, end: Point3, layer: impl Into<String>) -> EntityId {
            self.add_entity(Entity::line(start, end).on_layer(layer))
        }

        pub fn add_circle(
            &mut self,
            center: Point3,
            radius: f64,
            layer: impl Into<String>,
        ) -> EntityId {
            self.add_entity(Entity::circle(center, radius).on_layer(layer))
        }

        pub fn add_arc(
            &mut self,
            center: Point3,
            radius: f64,
            start_angle: f64,
            end_angle: f64,
            layer: impl Into<String>,
        ) -> EntityId {
            self.add_entity(Entity::arc(center, radius, start_angle, end_angle).on_layer(layer))
        }

        pub fn add_text(
            &mut self,
            insert: Point3,
            content: impl Into<String>,
            height: f64,
            layer: impl Into<String>,
        ) -> EntityId {
            self.add_entity(Entity::text(insert, content, height).on_layer(layer))
        }

        pub fn add_mtext(
            &mut self,
            insert: Point3,
            content: impl Into<String>,
            height: f64,
            layer: impl Into<String>,
        ) -> EntityId {
            self.add_entity(Entity::mtext(insert, content, height).on_layer(layer))
        }

        pub fn add_point(&mut self, location: Point3, layer: impl Into<String>) -> EntityId {
            self.add_entity(Entity::point(location).on_layer(layer))
        }

        pub fn add_polyline<I>(
            &mut self,
            vertices: I,
            is_closed: bool,
            layer: impl Into<String>,
        ) -> EntityId
        where
            I: IntoIterator<Item = Point2>,
        {
            self.add_entity(Entity::polyline(vertices, is_closed).on_layer(layer))
        }

        pub fn add_insert(
            &mut self,
            placement: InsertPlacement,
            layer: impl Into<String>,
        ) -> EntityId {
            self.add_entity(Entity::insert(placement).on_layer(layer))
        }

        /// 按名称定义块；同名块已存在时返回已有的下标。
        pub fn define_block(&mut self, name: impl Into<String>) -> BlockId {
            let name = name.into();
            if let Some(id) = self.block_names.get(&name) {
                return *id;
            }
            let id = BlockId(self.blocks.len() as u64);
            self.blocks.push(Block {
                name: name.clone(),
                entities: Vec::new(),
            });
            self.block_names.insert(name, id);
            id
        }

        pub fn add_block_entity(
            &mut self,
            block: BlockId,
            entity: Entity,
        ) -> Result<EntityId, DocumentError> {
            if block.index() >= self.blocks.len() {
                return Err(DocumentError::UnknownBlock(block.get()));
            }
            let id = self.push(entity);
            self.blocks[block.index()].entities.push(id);
            Ok(id)
        }

        /// 为块参照附加一个 ATTRIB 实例。附加的实体不进入绘图空间。
        pub fn attach_attrib(
            &mut self,
            insert: EntityId,
            attrib: Entity,
        ) -> Result<EntityId, DocumentError> {
            match self.entity(insert).map(|entity| &entity.data) {
                Some(EntityData::Insert(_)) => {}
                Some(_) => return Err(DocumentError::NotAnInsert(insert.get())),
                None => return Err(DocumentError::UnknownEntity(insert.get())),
            }
            if attrib.kind() != EntityKind::Attrib {
                return Err(DocumentError::NotAnAttrib(attrib.type_name().to_string()));
            }
            let id = self.push(attrib);
            if let Some(EntityData::Insert(target)) = self
                .entities
                .get_mut(insert.index())
                .map(|entity| &mut entity.data)
            {
                target.attribs.push(id);
            }
            Ok(id)
        }

        #[inline]
        pub fn entity(&self, id: EntityId) -> Option<&Entity> {
            self.entities.get(id.index())
        }

        /// 按声明顺序遍历绘图空间中的实体。
        pub fn model_space(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
            self.model_space
                .iter()
                .filter_map(|id| self.entity(*id).map(|entity| (*id, entity)))
        }

        #[inline]
        pub fn model_space_len(&self) -> usize {
            self.model_space.len()
        }

        #[inline]
        pub fn block(&self, id: BlockId) -> Option<&Block> {
            self.blocks.get(id.index())
        }

        #[inline]
        pub fn block_by_name(&self, name: &str) -> Option<&Block> {
            self.block_names.get(name).and_then(|id| self.block(*id))
        }

        #[inline]
        pub fn blocks(&self) -> impl Iterator<Item = &Block> {
            self.blocks.iter()
        }

        /// 反序列化后校验所有下标引用并重建块名索引，同时补齐实体引用但图层表缺失的图层。
        pub fn reindex(&mut self) -> Result<(), DocumentError> {
            let count = self.entities.len();
            let check = |id: &EntityId| {
                if id.index() < count {
                    Ok(())
                } else {
                    Err(DocumentError::DanglingEntity(id.get()))
                }
            };
            self.model_space.iter().try_for_each(check)?;
            for block in &self.blocks {
                block.entities.iter().try_for_each(check)?;
            }
            for entity in &self.entities {
                if let EntityData::Insert(insert) = &entity.data {
                    insert.attribs.iter().try_for_each(check)?;
                }
            }

            let mut names = HashMap::with_capacity(self.blocks.len());
            for (index, block) in self.blocks.iter().enumerate() {
                if names
                    .insert(block.name.clone(), BlockId(index as u64))
                    .is_some()
                {
                    return Err(DocumentError::DuplicateBlock(block.name.clone()));
                }
            }
            self.block_names = names;

            let referenced: Vec<String> = self
                .entities
                .iter()
                .map(|entity| entity.layer.clone())
                .collect();
            for layer in referenced {
                self.ensure_layer(layer);
            }
            Ok(())
        }

        #[inline]
        fn push(&mut self, entity: Entity) -> EntityId {
            self.ensure_layer(&entity.layer);
            let id = EntityId(self.entities.len() as u64);
            self.entities.push(entity);
            id
        }
    }

}
