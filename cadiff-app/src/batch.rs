use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use cadiff_engine::compare::BatchJob;

/// 读取批量清单。相对路径以清单所在目录为基准。
pub fn load_manifest(path: &Path) -> Result<Vec<BatchJob>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("读取批量清单 {} 失败", path.display()))?;
    let jobs: Vec<BatchJob> = serde_json::from_str(&content)
        .with_context(|| format!("解析批量清单 {} 失败", path.display()))?;
    if jobs.is_empty() {
        bail!("批量清单 {} 不含任何任务", path.display());
    }

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(jobs
        .into_iter()
        .map(|job| BatchJob {
            a: resolve(base, job.a),
            b: resolve(base, job.b),
            output: resolve(base, job.output),
        })
        .collect())
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
