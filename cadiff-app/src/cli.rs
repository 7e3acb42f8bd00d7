use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cadiff", version, about = "对比两份图纸并生成着色差异图")]
pub struct Cli {
    /// 配置文件路径，缺省时按 CADIFF_CONFIG 与 ./config/default.toml 查找
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// 覆盖配置中的日志等级，例如 `debug` 或 `cadiff_engine=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 比较两份图纸
    Compare {
        /// 旧图纸 (A)
        a: PathBuf,
        /// 新图纸 (B)
        b: PathBuf,
        /// 输出路径，缺省为 A 所在目录下的 `<A>_vs_<B>.dxf`
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        overrides: Overrides,
    },
    /// 按 JSON 清单并行执行多组比较
    Batch {
        /// `[{"a": ..., "b": ..., "output": ...}]` 格式的清单
        manifest: PathBuf,
        #[command(flatten)]
        overrides: Overrides,
    },
}

/// 命令行对配置文件的覆盖项。
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    #[arg(long)]
    pub tolerance: Option<f64>,
    #[arg(long)]
    pub deleted_color: Option<i16>,
    #[arg(long)]
    pub added_color: Option<i16>,
    #[arg(long)]
    pub unchanged_color: Option<i16>,
    /// 文档 B 的平移量 `X,Y[,Z]`
    #[arg(long, value_parser = parse_offset, allow_hyphen_values = true)]
    pub offset_b: Option<[f64; 3]>,
}

fn parse_offset(raw: &str) -> Result<[f64; 3], String> {
    let parts = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("无法解析偏移量 `{raw}`: {err}"))?;
    match parts.as_slice() {
        [x, y] => Ok([*x, *y, 0.0]),
        [x, y, z] => Ok([*x, *y, *z]),
        _ => Err(format!("偏移量需要 2 或 3 个分量，得到 {}", parts.len())),
    }
}
