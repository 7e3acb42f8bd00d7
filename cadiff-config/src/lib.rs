use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// 指定配置文件路径的环境变量。
pub const CONFIG_ENV: &str = "CADIFF_CONFIG";

/// 应用配置的根结构。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub comparison: ComparisonConfig,
    #[serde(default)]
    pub layers: LayersConfig,
}

impl AppConfig {
    /// 从显式路径加载配置。
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 自动发现配置文件：优先读取环境变量 `CADIFF_CONFIG`，否则寻找 `./config/default.toml`。
    /// 若文件缺失，则返回默认配置。
    pub fn discover() -> Result<Self, ConfigError> {
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Self::from_file(PathBuf::from(path));
        }

        let default_path = env::current_dir()
            .map(|dir| dir.join("config").join("default.toml"))
            .map_err(|source| ConfigError::Context {
                message: "获取当前工作目录失败".to_string(),
                source,
            })?;

        if default_path.exists() {
            Self::from_file(default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// 检查数值与图层设置是否可用。
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tolerance = self.comparison.tolerance;
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "容差必须是正的有限数，当前为 {tolerance}"
            )));
        }
        if let Some(bad) = self.comparison.offset_b.iter().find(|v| !v.is_finite()) {
            return Err(ConfigError::Invalid(format!("offset_b 含有非有限值 {bad}")));
        }

        let layers = [
            ("deleted", &self.layers.deleted),
            ("added", &self.layers.added),
            ("unchanged", &self.layers.unchanged),
        ];
        for (role, layer) in layers {
            if layer.name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{role} 图层名称不能为空")));
            }
            if !(1..=255).contains(&layer.color) {
                return Err(ConfigError::Invalid(format!(
                    "{role} 图层颜色 {} 超出 1..=255",
                    layer.color
                )));
            }
        }
        for (i, (role, layer)) in layers.iter().enumerate() {
            if let Some((other, _)) = layers[i + 1..].iter().find(|(_, o)| o.name == layer.name) {
                return Err(ConfigError::Invalid(format!(
                    "{role} 与 {other} 使用了相同的图层名 {}",
                    layer.name
                )));
            }
        }
        Ok(())
    }
}

/// 日志配置，支持设置默认等级。
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComparisonConfig {
    #[serde(default = "ComparisonConfig::default_tolerance")]
    pub tolerance: f64,
    /// 文档 B 的整体平移，`[x, y, z]`。
    #[serde(default)]
    pub offset_b: [f64; 3],
}

impl ComparisonConfig {
    fn default_tolerance() -> f64 {
        0.01
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            tolerance: Self::default_tolerance(),
            offset_b: [0.0; 3],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LayerStyle {
    pub name: String,
    pub color: i16,
}

impl LayerStyle {
    fn new(name: &str, color: i16) -> Self {
        Self {
            name: name.to_string(),
            color,
        }
    }
}

/// 三个输出图层的名称与颜色。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LayersConfig {
    #[serde(default = "LayersConfig::default_deleted")]
    pub deleted: LayerStyle,
    #[serde(default = "LayersConfig::default_added")]
    pub added: LayerStyle,
    #[serde(default = "LayersConfig::default_unchanged")]
    pub unchanged: LayerStyle,
}

impl LayersConfig {
    fn default_deleted() -> LayerStyle {
        LayerStyle::new("DELETED", 1)
    }

    fn default_added() -> LayerStyle {
        LayerStyle::new("ADDED", 3)
    }

    fn default_unchanged() -> LayerStyle {
        LayerStyle::new("UNCHANGED", 4)
    }
}

impl Default for LayersConfig {
    fn default() -> Self {
        Self {
            deleted: Self::default_deleted(),
            added: Self::default_added(),
            unchanged: Self::default_unchanged(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("读取配置文件 {path:?} 失败: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("解析配置文件 {path:?} 失败: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{message}")]
    Context {
        message: String,
        #[source]
        source: std::io::Error,
    },
    #[error("配置无效: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.logging.level, "info");
        assert!((cfg.comparison.tolerance - 0.01).abs() < f64::EPSILON);
        assert_eq!(cfg.comparison.offset_b, [0.0; 3]);
        assert_eq!(cfg.layers.deleted, LayerStyle::new("DELETED", 1));
        assert_eq!(cfg.layers.added, LayerStyle::new("ADDED", 3));
        assert_eq!(cfg.layers.unchanged, LayerStyle::new("UNCHANGED", 4));
        cfg.validate().expect("默认配置应有效");
    }

    #[test]
    fn load_from_temp_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(
            file,
            r#"
            [logging]
            level = "debug"

            [comparison]
            tolerance = 0.5
            offset_b = [0.0, -200.0, 0.0]

            [layers.added]
            name = "NEW"
            color = 5
            "#
        )
        .unwrap();

        let cfg = AppConfig::from_file(file.path()).expect("load config");
        assert_eq!(cfg.logging.level, "debug");
        assert!((cfg.comparison.tolerance - 0.5).abs() < f64::EPSILON);
        assert_eq!(cfg.comparison.offset_b, [0.0, -200.0, 0.0]);
        assert_eq!(cfg.layers.added, LayerStyle::new("NEW", 5));
        assert_eq!(cfg.layers.deleted, LayerStyle::new("DELETED", 1));
        cfg.validate().expect("配置应有效");
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "[comparison]\ntolerance = \"wide\"").unwrap();
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        let err = AppConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut cfg = AppConfig::default();
        cfg.comparison.tolerance = 0.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));

        let mut cfg = AppConfig::default();
        cfg.comparison.tolerance = f64::NAN;
        assert!(cfg.validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.layers.added.color = 256;
        assert!(cfg.validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.layers.unchanged.name = "DELETED".into();
        assert!(cfg.validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.layers.deleted.name = "  ".into();
        assert!(cfg.validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.comparison.offset_b = [0.0, f64::INFINITY, 0.0];
        assert!(cfg.validate().is_err());
    }
}
