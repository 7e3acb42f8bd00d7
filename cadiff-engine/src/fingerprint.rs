use std::collections::BTreeMap;
use std::fmt;

use cadiff_core::document::Document;
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::canonical::{EntityCanonicalizer, Signature};
use crate::errors::EntityProcessingError;
use crate::expand::{AbsoluteEntity, BlockExpander};
use crate::normalize::Transform;

/// 签名的 SHA-256 摘要，作为比较键。
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self(hasher.finalize().into())
    }

    #[inline]
    pub fn of_signature(signature: &Signature) -> Self {
        Self::of_bytes(signature.as_str().as_bytes())
    }

    /// 无法生成签名时，对键排序后的 JSON 序列化结果取摘要。
    pub fn of_serialized(entity: &AbsoluteEntity) -> Result<Self, serde_json::Error> {
        // serde_json::Value 的对象键按字典序排列
        let canonical = serde_json::to_string(&serde_json::to_value(entity)?)?;
        Ok(Self::of_bytes(canonical.as_bytes()))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", &self.to_hex()[..12])
    }
}

/// 计算单个绝对实体的指纹，签名失败时退回序列化摘要。
pub fn fingerprint(
    entity: &AbsoluteEntity,
    canonicalizer: &EntityCanonicalizer,
) -> Result<Fingerprint, EntityProcessingError> {
    match canonicalizer.signature(entity) {
        Ok(signature) if !signature.is_empty() => Ok(Fingerprint::of_signature(&signature)),
        Ok(_) => Ok(Fingerprint::of_serialized(entity)?),
        Err(err) => {
            debug!(error = %err, "签名生成失败，改用序列化摘要");
            Ok(Fingerprint::of_serialized(entity)?)
        }
    }
}

/// 单个文档的指纹索引：同一指纹下按出现顺序保存全部实例。
#[derive(Debug, Clone, Default)]
pub struct FingerprintIndex {
    entries: BTreeMap<Fingerprint, Vec<AbsoluteEntity>>,
    occurrences: usize,
    skipped: usize,
}

impl FingerprintIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 展开文档、生成签名并建立索引。签名与摘要按实体并行计算，插入顺序与声明顺序一致。
    pub fn build(document: &Document, canonicalizer: &EntityCanonicalizer, root: Transform) -> Self {
        let expansion = BlockExpander::new(document).with_root(root).expand();
        let fingerprints: Vec<Result<Fingerprint, EntityProcessingError>> = expansion
            .entities
            .par_iter()
            .map(|entity| fingerprint(entity, canonicalizer))
            .collect();

        let mut index = Self {
            skipped: expansion.skipped,
            ..Self::default()
        };
        for (entity, result) in expansion.entities.into_iter().zip(fingerprints) {
            match result {
                Ok(key) => index.insert(key, entity),
                Err(err) => {
                    warn!(kind = entity.type_name(), error = %err, "跳过无法计算指纹的实体");
                    index.skipped += 1;
                }
            }
        }
        debug!(
            keys = index.len(),
            occurrences = index.occurrences,
            skipped = index.skipped,
            "指纹索引已建立"
        );
        index
    }

    pub fn insert(&mut self, key: Fingerprint, entity: AbsoluteEntity) {
        self.entries.entry(key).or_default().push(entity);
        self.occurrences += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: &Fingerprint) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &Fingerprint> {
        self.entries.keys()
    }

    pub fn occurrences_of(&self, key: &Fingerprint) -> &[AbsoluteEntity] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// 最先记录的实例，作为输出时的代表。
    pub fn representative(&self, key: &Fingerprint) -> Option<&AbsoluteEntity> {
        self.entries.get(key).and_then(|all| all.first())
    }

    #[inline]
    pub fn occurrences(&self) -> usize {
        self.occurrences
    }

    #[inline]
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use cadiff_core::{
        document::{ColorIndex, Entity},
        geometry::Point3,
    };

    use super::*;
    use crate::expand::{AbsoluteGeometry, Provenance};
    use crate::tolerance::ToleranceModel;

    fn canonicalizer() -> EntityCanonicalizer {
        EntityCanonicalizer::new(ToleranceModel::default())
    }

    #[test]
    fn fingerprint_is_sha256_hex() {
        let key = Fingerprint::of_bytes(b"abc");
        assert_eq!(
            key.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(key.to_string().len(), 64);
    }

    #[test]
    fn duplicates_collapse_under_one_key() {
        let mut doc = Document::new();
        doc.add_line(Point3::ORIGIN, Point3::new(1.0, 1.0, 0.0), "0");
        doc.add_entity(
            Entity::line(Point3::ORIGIN, Point3::new(1.0, 1.0, 0.0)).with_handle("AA"),
        );
        doc.add_circle(Point3::ORIGIN, 1.0, "0");

        let index = FingerprintIndex::build(&doc, &canonicalizer(), Transform::IDENTITY);
        assert_eq!(index.len(), 2);
        assert_eq!(index.occurrences(), 3);
        assert_eq!(index.skipped(), 0);
        let line_key = index
            .keys()
            .find(|key| index.occurrences_of(key).len() == 2)
            .copied()
            .expect("重复直线应合并到同一指纹");
        assert!(index.representative(&line_key).is_some());
    }

    #[test]
    fn unsignable_entity_falls_back_to_serialization() {
        let entity = AbsoluteEntity {
            layer: "0".into(),
            color: Some(ColorIndex(1)),
            geometry: AbsoluteGeometry::Other {
                type_name: String::new(),
                insert: Some(Point3::new(1.0, 2.0, 3.0)),
                center: None,
                start: None,
                location: None,
            },
            provenance: Provenance::Direct,
            placement: None,
            scale: None,
        };
        let key = fingerprint(&entity, &canonicalizer()).unwrap();
        assert_eq!(key, Fingerprint::of_serialized(&entity).unwrap());

        let mut moved = entity.clone();
        if let AbsoluteGeometry::Other { insert, .. } = &mut moved.geometry {
            *insert = Some(Point3::new(1.0, 2.0, 4.0));
        }
        assert_ne!(key, fingerprint(&moved, &canonicalizer()).unwrap());
    }
}
