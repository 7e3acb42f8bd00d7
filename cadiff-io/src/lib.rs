use std::fmt::{self, Display};
use std::fs;
use std::path::{Path, PathBuf};

use cadiff_core::{
    document::{Document, Entity, EntityData, Layer},
    geometry::Point3,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("unsupported feature: {0}")]
    UnsupportedFeature(String),
    #[error("failed to read file {path:?}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write file {path:?}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid document structure: {0}")]
    InvalidDocument(String),
}

pub trait DocumentLoader {
    fn load(&self, path: &Path) -> Result<Document, IoError>;
}

pub trait DocumentSaver {
    fn save(&self, document: &Document, path: &Path) -> Result<(), IoError>;
}

/// 根据扩展名识别的文档格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    Dxf,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self, IoError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("dxf") => Ok(Self::Dxf),
            _ => Err(IoError::UnsupportedFeature(format!(
                "无法根据扩展名识别文档格式：{path:?}"
            ))),
        }
    }
}

/// 文档模型的 JSON 表示，是外部图纸解析器与本系统之间的交换格式。
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFacade;

impl JsonFacade {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, data: &str) -> Result<Document, IoError> {
        let mut document: Document = serde_json::from_str(data)
            .map_err(|err| IoError::InvalidDocument(format!("JSON 解析失败：{err}")))?;
        document
            .reindex()
            .map_err(|err| IoError::InvalidDocument(err.to_string()))?;
        Ok(document)
    }

    pub fn render(&self, document: &Document) -> Result<String, IoError> {
        serde_json::to_string_pretty(document)
            .map_err(|err| IoError::InvalidDocument(format!("JSON 序列化失败：{err}")))
    }
}

impl DocumentLoader for JsonFacade {
    fn load(&self, path: &Path) -> Result<Document, IoError> {
        let data = fs::read_to_string(path).map_err(|source| IoError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&data)
    }
}

impl DocumentSaver for JsonFacade {
    fn save(&self, document: &Document, path: &Path) -> Result<(), IoError> {
        let data = self.render(document)?;
        fs::write(path, data).map_err(|source| IoError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// ASCII DXF（R12 / AC1009）写出器。仅负责写出，读取由外部解析库完成。
#[derive(Debug, Default, Clone, Copy)]
pub struct DxfFacade;

impl DxfFacade {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, document: &Document) -> String {
        let mut writer = DxfWriter::default();
        writer.write_document(document);
        writer.finish()
    }
}

impl DocumentLoader for DxfFacade {
    fn load(&self, path: &Path) -> Result<Document, IoError> {
        Err(IoError::UnsupportedFeature(format!(
            "DXF 读取不在本工具范围内，请先转换为 JSON 文档：{path:?}"
        )))
    }
}

impl DocumentSaver for DxfFacade {
    fn save(&self, document: &Document, path: &Path) -> Result<(), IoError> {
        fs::write(path, self.render(document)).map_err(|source| IoError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// 按扩展名分派到 JSON 或 DXF 实现。
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoFacade {
    json: JsonFacade,
    dxf: DxfFacade,
}

impl AutoFacade {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentLoader for AutoFacade {
    fn load(&self, path: &Path) -> Result<Document, IoError> {
        match DocumentFormat::from_path(path)? {
            DocumentFormat::Json => self.json.load(path),
            DocumentFormat::Dxf => self.dxf.load(path),
        }
    }
}

impl DocumentSaver for AutoFacade {
    fn save(&self, document: &Document, path: &Path) -> Result<(), IoError> {
        match DocumentFormat::from_path(path)? {
            DocumentFormat::Json => self.json.save(document, path),
            DocumentFormat::Dxf => self.dxf.save(document, path),
        }
    }
}

/// DXF 实数值。保证带小数点，避免部分读取器把坐标当作整数。
struct Real(f64);

impl Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.to_string();
        if text.contains('.') || text.contains("inf") || text.contains("NaN") {
            f.write_str(&text)
        } else {
            write!(f, "{text}.0")
        }
    }
}

fn single_line(content: &str) -> String {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Default)]
struct DxfWriter {
    out: String,
}

impl DxfWriter {
    fn pair(&mut self, code: i32, value: impl Display) {
        self.out.push_str(&format!("{code:>3}\n{value}\n"));
    }

    fn real(&mut self, code: i32, value: f64) {
        self.pair(code, Real(value));
    }

    fn point(&mut self, base: i32, point: Point3) {
        self.real(base, point.x());
        self.real(base + 10, point.y());
        self.real(base + 20, point.z());
    }

    fn finish(mut self) -> String {
        self.pair(0, "EOF");
        self.out
    }

    fn write_document(&mut self, document: &Document) {
        self.pair(0, "SECTION");
        self.pair(2, "HEADER");
        self.pair(9, "$ACADVER");
        self.pair(1, "AC1009");
        self.pair(0, "ENDSEC");

        self.write_layers(document);

        self.pair(0, "SECTION");
        self.pair(2, "BLOCKS");
        for block in document.blocks() {
            self.pair(0, "BLOCK");
            self.pair(8, "0");
            self.pair(2, &block.name);
            self.pair(70, 0);
            self.point(10, Point3::ORIGIN);
            self.pair(3, &block.name);
            for id in &block.entities {
                if let Some(entity) = document.entity(*id) {
                    self.write_entity(document, entity);
                }
            }
            self.pair(0, "ENDBLK");
            self.pair(8, "0");
        }
        self.pair(0, "ENDSEC");

        self.pair(0, "SECTION");
        self.pair(2, "ENTITIES");
        for (_, entity) in document.model_space() {
            self.write_entity(document, entity);
        }
        self.pair(0, "ENDSEC");
    }

    fn write_layers(&mut self, document: &Document) {
        let layers: Vec<&Layer> = document.layers().collect();
        self.pair(0, "SECTION");
        self.pair(2, "TABLES");

        // 图层引用的 CONTINUOUS 线型
        self.pair(0, "TABLE");
        self.pair(2, "LTYPE");
        self.pair(70, 1);
        self.pair(0, "LTYPE");
        self.pair(2, "CONTINUOUS");
        self.pair(70, 0);
        self.pair(3, "Solid line");
        self.pair(72, 65);
        self.pair(73, 0);
        self.real(40, 0.0);
        self.pair(0, "ENDTAB");

        self.pair(0, "TABLE");
        self.pair(2, "LAYER");
        self.pair(70, layers.len());
        for layer in layers {
            // 负色号表示图层关闭。
            let color = if layer.is_visible {
                layer.color.get()
            } else {
                -layer.color.get().abs()
            };
            self.pair(0, "LAYER");
            self.pair(2, &layer.name);
            self.pair(70, 0);
            self.pair(62, color);
            self.pair(6, "CONTINUOUS");
        }
        self.pair(0, "ENDTAB");
        self.pair(0, "ENDSEC");
    }

    fn common(&mut self, type_name: &str, entity: &Entity) {
        self.pair(0, type_name);
        self.pair(8, &entity.layer);
        if let Some(color) = entity.color {
            self.pair(62, color.get());
        }
    }

    fn write_entity(&mut self, document: &Document, entity: &Entity) {
        match &entity.data {
            EntityData::Line(line) => {
                self.common("LINE", entity);
                self.point(10, line.start);
                self.point(11, line.end);
            }
            EntityData::Circle(circle) => {
                self.common("CIRCLE", entity);
                self.point(10, circle.center);
                self.real(40, circle.radius);
            }
            EntityData::Arc(arc) => {
                self.common("ARC", entity);
                self.point(10, arc.center);
                self.real(40, arc.radius);
                self.real(50, arc.start_angle);
                self.real(51, arc.end_angle);
            }
            EntityData::Text(text) => {
                self.common("TEXT", entity);
                self.point(10, text.insert);
                self.real(40, text.height);
                self.pair(1, &text.content);
                self.real(50, text.rotation);
            }
            // R12 没有 MTEXT，按单行 TEXT 写出，换行并为空格。
            EntityData::MText(text) => {
                self.common("TEXT", entity);
                self.point(10, text.insert);
                self.real(40, text.height);
                self.pair(1, single_line(&text.content));
                self.real(50, text.rotation);
            }
            EntityData::Attrib(attrib) => {
                self.common("ATTRIB", entity);
                self.point(10, attrib.insert);
                self.real(40, attrib.height);
                self.pair(1, &attrib.value);
                self.pair(2, &attrib.tag);
                self.pair(70, 0);
                self.real(50, attrib.rotation);
            }
            EntityData::AttDef(attdef) => {
                self.common("ATTDEF", entity);
                self.point(10, attdef.insert);
                self.real(40, attdef.height);
                self.pair(1, &attdef.default_value);
                self.pair(3, attdef.prompt.as_deref().unwrap_or(""));
                self.pair(2, &attdef.tag);
                self.pair(70, 0);
                self.real(50, attdef.rotation);
            }
            EntityData::Point(point) => {
                self.common("POINT", entity);
                self.point(10, point.location);
            }
            EntityData::Polyline(polyline) => {
                self.common("POLYLINE", entity);
                self.pair(66, 1);
                self.point(10, Point3::ORIGIN);
                self.pair(70, if polyline.is_closed { 1 } else { 0 });
                for vertex in &polyline.vertices {
                    self.pair(0, "VERTEX");
                    self.pair(8, &entity.layer);
                    self.point(10, vertex.extend(0.0));
                }
                self.pair(0, "SEQEND");
                self.pair(8, &entity.layer);
            }
            EntityData::Insert(insert) => {
                let attribs: Vec<&Entity> = insert
                    .attribs
                    .iter()
                    .filter_map(|id| document.entity(*id))
                    .collect();
                self.common("INSERT", entity);
                if !attribs.is_empty() {
                    self.pair(66, 1);
                }
                self.pair(2, &insert.placement.block);
                self.point(10, insert.placement.insert);
                self.real(41, insert.placement.scale.x());
                self.real(42, insert.placement.scale.y());
                self.real(43, insert.placement.scale.z());
                self.real(50, insert.placement.rotation);
                if !attribs.is_empty() {
                    for attrib in attribs {
                        self.write_entity(document, attrib);
                    }
                    self.pair(0, "SEQEND");
                    self.pair(8, &entity.layer);
                }
            }
            EntityData::Other(other) => {
                debug!(type_name = %other.type_name, "DXF 写出器跳过未建模的实体类型");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_values_always_carry_a_decimal_point() {
        assert_eq!(Real(10.0).to_string(), "10.0");
        assert_eq!(Real(-2.5).to_string(), "-2.5");
        assert_eq!(Real(0.1).to_string(), "0.1");
    }

    #[test]
    fn format_is_detected_case_insensitively() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/B.DXF")).unwrap(),
            DocumentFormat::Dxf
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("plan.json")).unwrap(),
            DocumentFormat::Json
        );
        assert!(matches!(
            DocumentFormat::from_path(Path::new("plan.dwg")),
            Err(IoError::UnsupportedFeature(_))
        ));
        assert!(DocumentFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn pairs_are_right_aligned_group_codes() {
        let mut writer = DxfWriter::default();
        writer.pair(0, "LINE");
        writer.real(10, 1.0);
        assert_eq!(writer.out, "  0\nLINE\n 10\n1.0\n");
    }

    #[test]
    fn dxf_loading_is_reported_as_unsupported() {
        let err = DxfFacade::new().load(Path::new("x.dxf")).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFeature(_)));
    }
}
