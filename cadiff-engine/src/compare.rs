use std::fmt;
use std::path::{Path, PathBuf};

use cadiff_core::{document::Document, geometry::Vector3};
use cadiff_io::{DocumentLoader, DocumentSaver};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::canonical::EntityCanonicalizer;
use crate::diff::{DiffClassification, diff};
use crate::errors::CompareError;
use crate::fingerprint::FingerprintIndex;
use crate::normalize::Transform;
use crate::render::{DiffRenderer, OutputLayers};
use crate::tolerance::{DEFAULT_TOLERANCE, ToleranceModel};

/// 一次比较的参数。
#[derive(Debug, Clone, PartialEq)]
pub struct DiffConfig {
    pub tolerance: f64,
    pub layers: OutputLayers,
    /// 在规范化之前施加到文档 B 整个绘图空间的平移。
    pub offset_b: Vector3,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            layers: OutputLayers::default(),
            offset_b: Vector3::ZERO,
        }
    }
}

/// 比较统计。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonReport {
    pub deleted: usize,
    pub added: usize,
    pub unchanged: usize,
    pub occurrences_a: usize,
    pub occurrences_b: usize,
    pub skipped_a: usize,
    pub skipped_b: usize,
    pub skipped_output: usize,
}

impl ComparisonReport {
    #[inline]
    pub fn is_identical(&self) -> bool {
        self.deleted == 0 && self.added == 0
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "deleted={} added={} unchanged={} (skipped a={} b={} output={})",
            self.deleted,
            self.added,
            self.unchanged,
            self.skipped_a,
            self.skipped_b,
            self.skipped_output
        )
    }
}

/// 内存中比较的全部产物。
#[derive(Debug)]
pub struct Comparison {
    pub index_a: FingerprintIndex,
    pub index_b: FingerprintIndex,
    pub classification: DiffClassification,
    pub output: Document,
    pub report: ComparisonReport,
}

/// 比较两份已加载的文档并生成差异图纸。不做任何 I/O。
pub fn compare(a: &Document, b: &Document, config: &DiffConfig) -> Comparison {
    let canonicalizer = EntityCanonicalizer::new(ToleranceModel::new(config.tolerance));
    let root_b = Transform::translation(config.offset_b).unwrap_or_else(|err| {
        warn!(error = %err, "文档 B 的偏移量无效，按零偏移处理");
        Transform::IDENTITY
    });

    let (index_a, index_b) = rayon::join(
        || FingerprintIndex::build(a, &canonicalizer, Transform::IDENTITY),
        || FingerprintIndex::build(b, &canonicalizer, root_b),
    );
    let classification = diff(&index_a, &index_b);
    let rendered = DiffRenderer::new(config.layers.clone()).render(&classification, &index_a, &index_b);

    let report = ComparisonReport {
        deleted: classification.deleted.len(),
        added: classification.added.len(),
        unchanged: classification.unchanged.len(),
        occurrences_a: index_a.occurrences(),
        occurrences_b: index_b.occurrences(),
        skipped_a: index_a.skipped(),
        skipped_b: index_b.skipped(),
        skipped_output: rendered.skipped,
    };

    Comparison {
        index_a,
        index_b,
        classification,
        output: rendered.document,
        report,
    }
}

/// 读取两份文档、比较并保存结果。只有读取与保存失败会返回错误。
pub fn run_comparison<L, S>(
    path_a: &Path,
    path_b: &Path,
    output: &Path,
    loader: &L,
    saver: &S,
    config: &DiffConfig,
) -> Result<ComparisonReport, CompareError>
where
    L: DocumentLoader + ?Sized,
    S: DocumentSaver + ?Sized,
{
    let read = |path: &Path| {
        loader.load(path).map_err(|source| CompareError::DocumentRead {
            path: path.to_path_buf(),
            source,
        })
    };
    let a = read(path_a)?;
    let b = read(path_b)?;

    let comparison = compare(&a, &b, config);
    saver
        .save(&comparison.output, output)
        .map_err(|source| CompareError::OutputPersist {
            path: output.to_path_buf(),
            source,
        })?;

    info!(
        a = %path_a.display(),
        b = %path_b.display(),
        output = %output.display(),
        report = %comparison.report,
        "比较完成"
    );
    Ok(comparison.report)
}

/// 文件级入口，只返回成功与否，失败细节写入日志。
pub fn compare_files<L, S>(
    path_a: &Path,
    path_b: &Path,
    output: &Path,
    loader: &L,
    saver: &S,
    config: &DiffConfig,
) -> bool
where
    L: DocumentLoader + ?Sized,
    S: DocumentSaver + ?Sized,
{
    match run_comparison(path_a, path_b, output, loader, saver, config) {
        Ok(_) => true,
        Err(err) => {
            error!(error = %err, "比较失败");
            false
        }
    }
}

/// 批量任务中的一对文件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchJob {
    pub a: PathBuf,
    pub b: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub job: BatchJob,
    pub result: Result<ComparisonReport, CompareError>,
}

impl BatchOutcome {
    #[inline]
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// 在 rayon 线程池上并行执行互相独立的比较，结果顺序与任务顺序一致。
pub fn compare_batch<L, S>(
    jobs: &[BatchJob],
    loader: &L,
    saver: &S,
    config: &DiffConfig,
) -> Vec<BatchOutcome>
where
    L: DocumentLoader + Sync + ?Sized,
    S: DocumentSaver + Sync + ?Sized,
{
    let outcomes: Vec<BatchOutcome> = jobs
        .par_iter()
        .map(|job| {
            let result = run_comparison(&job.a, &job.b, &job.output, loader, saver, config);
            if let Err(err) = &result {
                error!(a = %job.a.display(), b = %job.b.display(), error = %err, "批量任务失败");
            }
            BatchOutcome {
                job: job.clone(),
                result,
            }
        })
        .collect();
    let failed = outcomes.iter().filter(|o| !o.succeeded()).count();
    info!(jobs = outcomes.len(), failed, "批量比较结束");
    outcomes
}

#[cfg(test)]
mod tests {
    use cadiff_core::geometry::Point3;
    use cadiff_io::{IoError, JsonFacade};

    use super::*;

    struct FailingSaver;

    impl DocumentSaver for FailingSaver {
        fn save(&self, _document: &Document, path: &Path) -> Result<(), IoError> {
            Err(IoError::WriteError {
                path: path.to_path_buf(),
                source: std::io::Error::other("disk full"),
            })
        }
    }

    fn line_doc(end_y: f64) -> Document {
        let mut doc = Document::new();
        doc.add_line(Point3::ORIGIN, Point3::new(10.0, end_y, 0.0), "L1");
        doc
    }

    #[test]
    fn compare_reports_counts() {
        let comparison = compare(&line_doc(10.0), &line_doc(11.0), &DiffConfig::default());
        assert_eq!(comparison.report.deleted, 1);
        assert_eq!(comparison.report.added, 1);
        assert_eq!(comparison.report.unchanged, 0);
        assert!(!comparison.report.is_identical());
        assert_eq!(comparison.output.model_space().count(), 2);
    }

    #[test]
    fn offset_b_shifts_document_b_before_matching() {
        let a = line_doc(10.0);
        let mut b = Document::new();
        b.add_line(
            Point3::new(0.0, -100.0, 0.0),
            Point3::new(10.0, -90.0, 0.0),
            "L1",
        );
        let config = DiffConfig {
            offset_b: Vector3::new(0.0, 100.0, 0.0),
            ..DiffConfig::default()
        };
        assert!(compare(&a, &b, &config).report.is_identical());
        assert!(!compare(&a, &b, &DiffConfig::default()).report.is_identical());
    }

    #[test]
    fn missing_input_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("a.json");
        let result = run_comparison(
            &missing,
            &missing,
            &dir.path().join("out.json"),
            &JsonFacade::new(),
            &JsonFacade::new(),
            &DiffConfig::default(),
        );
        assert!(matches!(result, Err(CompareError::DocumentRead { .. })));
    }

    #[test]
    fn save_failure_is_a_persist_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.json");
        JsonFacade::new().save(&line_doc(10.0), &path).unwrap();

        let result = run_comparison(
            &path,
            &path,
            &dir.path().join("out.json"),
            &JsonFacade::new(),
            &FailingSaver,
            &DiffConfig::default(),
        );
        assert!(matches!(result, Err(CompareError::OutputPersist { .. })));
        assert!(!compare_files(
            &path,
            &path,
            &dir.path().join("out.json"),
            &JsonFacade::new(),
            &FailingSaver,
            &DiffConfig::default(),
        ));
    }
}
