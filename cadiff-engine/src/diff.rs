use std::collections::BTreeSet;
use std::fmt;

use crate::fingerprint::{Fingerprint, FingerprintIndex};

/// 差异类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiffClass {
    Deleted,
    Added,
    Unchanged,
}

impl DiffClass {
    /// 输出时的遍历顺序。
    pub const ALL: [DiffClass; 3] = [DiffClass::Deleted, DiffClass::Added, DiffClass::Unchanged];

    pub fn label(self) -> &'static str {
        match self {
            DiffClass::Deleted => "DELETED",
            DiffClass::Added => "ADDED",
            DiffClass::Unchanged => "UNCHANGED",
        }
    }
}

impl fmt::Display for DiffClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 三个互不相交的指纹集合。基于集合而非多重集合：出现次数的差异不会被报告。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffClassification {
    pub deleted: BTreeSet<Fingerprint>,
    pub added: BTreeSet<Fingerprint>,
    pub unchanged: BTreeSet<Fingerprint>,
}

impl DiffClassification {
    pub fn get(&self, class: DiffClass) -> &BTreeSet<Fingerprint> {
        match class {
            DiffClass::Deleted => &self.deleted,
            DiffClass::Added => &self.added,
            DiffClass::Unchanged => &self.unchanged,
        }
    }

    /// 两份文档在容差内结构相同。
    pub fn is_identical(&self) -> bool {
        self.deleted.is_empty() && self.added.is_empty()
    }

    pub fn classify(&self, key: &Fingerprint) -> Option<DiffClass> {
        DiffClass::ALL
            .into_iter()
            .find(|class| self.get(*class).contains(key))
    }
}

pub fn diff(a: &FingerprintIndex, b: &FingerprintIndex) -> DiffClassification {
    let keys_a: BTreeSet<Fingerprint> = a.keys().copied().collect();
    let keys_b: BTreeSet<Fingerprint> = b.keys().copied().collect();
    DiffClassification {
        deleted: keys_a.difference(&keys_b).copied().collect(),
        added: keys_b.difference(&keys_a).copied().collect(),
        unchanged: keys_a.intersection(&keys_b).copied().collect(),
    }
}

#[cfg(test)]
mod tests {
    use cadiff_core::{document::Document, geometry::Point3};

    use super::*;
    use crate::canonical::EntityCanonicalizer;
    use crate::normalize::Transform;
    use crate::tolerance::ToleranceModel;

    fn index(document: &Document) -> FingerprintIndex {
        let canonicalizer = EntityCanonicalizer::new(ToleranceModel::default());
        FingerprintIndex::build(document, &canonicalizer, Transform::IDENTITY)
    }

    #[test]
    fn set_algebra_partitions_keys() {
        let mut a = Document::new();
        a.add_line(Point3::ORIGIN, Point3::new(1.0, 0.0, 0.0), "0");
        a.add_circle(Point3::ORIGIN, 3.0, "0");
        let mut b = Document::new();
        b.add_line(Point3::ORIGIN, Point3::new(1.0, 0.0, 0.0), "0");
        b.add_point(Point3::new(4.0, 4.0, 0.0), "0");

        let (ia, ib) = (index(&a), index(&b));
        let result = diff(&ia, &ib);
        assert_eq!(result.deleted.len(), 1);
        assert_eq!(result.added.len(), 1);
        assert_eq!(result.unchanged.len(), 1);
        assert!(!result.is_identical());

        let circle = *result.deleted.iter().next().unwrap();
        assert_eq!(result.classify(&circle), Some(DiffClass::Deleted));
        assert_eq!(ia.representative(&circle).map(|e| e.type_name()), Some("CIRCLE"));
    }

    #[test]
    fn empty_documents_are_identical() {
        let result = diff(&FingerprintIndex::new(), &FingerprintIndex::new());
        assert!(result.is_identical());
        assert!(result.unchanged.is_empty());
        assert_eq!(DiffClass::Unchanged.to_string(), "UNCHANGED");
    }
}
