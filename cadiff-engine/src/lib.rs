pub mod canonical;
pub mod compare;
/// DiffEngine：按指纹集合划分删除、新增、未变。
pub mod diff;
pub mod expand;
pub mod fingerprint;
/// CoordinateNormalizer：容差量化与块参照变换。
pub mod normalize;
pub mod render;
pub mod tolerance;

pub mod errors {
    use std::path::PathBuf;

    use cadiff_io::IoError;
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Error)]
    pub enum NormalizeError {
        #[error("non-finite value {0} cannot be quantized or transformed")]
        NonFinite(f64),
    }

    /// 单个实体在变换、属性提取或签名构建中的失败。只跳过该实体，不影响整体比较。
    #[derive(Debug, Error)]
    pub enum EntityProcessingError {
        #[error("{kind} produced non-finite coordinates")]
        NonFinite { kind: String },
        #[error(transparent)]
        Normalize(#[from] NormalizeError),
        #[error("entity {id} attached to an INSERT is not an ATTRIB instance")]
        NotAnInstance { id: u64 },
        #[error("entity {0} does not exist")]
        UnknownEntity(u64),
        #[error("INSERT references undefined block {0:?}")]
        UnknownBlock(String),
        #[error("fallback serialization failed: {0}")]
        Serialization(#[from] serde_json::Error),
    }

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum CanonicalizeError {
        #[error("entity has an empty type name")]
        EmptyTypeName,
    }

    /// 代表实体无法写入输出文档。
    #[derive(Debug, Clone, PartialEq, Error)]
    pub enum OutputConstructionError {
        #[error("{kind} has non-finite geometry")]
        NonFinite { kind: String },
        #[error("polyline without vertices")]
        EmptyPolyline,
    }

    /// 文档级错误，直接导致整次比较失败。
    #[derive(Debug, Error)]
    pub enum CompareError {
        #[error("failed to read drawing {path:?}: {source}")]
        DocumentRead {
            path: PathBuf,
            #[source]
            source: IoError,
        },
        #[error("failed to persist comparison result {path:?}: {source}")]
        OutputPersist {
            path: PathBuf,
            #[source]
            source: IoError,
        },
    }
}
