use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use cadiff_config::{AppConfig, ConfigError};
use cadiff_engine::compare::{DiffConfig, compare_batch, run_comparison};
use cadiff_io::AutoFacade;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

mod batch;
mod cli;
mod settings;

use cli::{Cli, Commands, Overrides};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, fallback) = match load_configuration(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            init_logging(cli.log_level.as_deref().unwrap_or("info"));
            error!(error = %format!("{err:#}"), "加载配置失败");
            eprintln!("错误: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(cli.log_level.as_deref().unwrap_or(&config.logging.level));
    info!("启动 cadiff");
    if let Some(err) = fallback {
        warn_default_fallback(&err);
    }

    match run(cli.command, config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!(error = %format!("{err:#}"), "执行失败");
            eprintln!("错误: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: AppConfig) -> Result<bool> {
    match command {
        Commands::Compare {
            a,
            b,
            output,
            overrides,
        } => {
            let diff = prepare(config, &overrides)?;
            let output = output.unwrap_or_else(|| default_output(&a, &b));
            let facade = AutoFacade::new();
            let report = run_comparison(&a, &b, &output, &facade, &facade, &diff)
                .with_context(|| format!("比较 {} 与 {} 失败", a.display(), b.display()))?;
            println!("{} vs {}: {} -> {}", a.display(), b.display(), report, output.display());
            Ok(true)
        }
        Commands::Batch {
            manifest,
            overrides,
        } => {
            let diff = prepare(config, &overrides)?;
            let jobs = batch::load_manifest(&manifest)?;
            let facade = AutoFacade::new();
            let outcomes = compare_batch(&jobs, &facade, &facade, &diff);
            let mut all_ok = true;
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(report) => println!(
                        "ok {} vs {}: {} -> {}",
                        outcome.job.a.display(),
                        outcome.job.b.display(),
                        report,
                        outcome.job.output.display()
                    ),
                    Err(err) => {
                        all_ok = false;
                        println!(
                            "failed {} vs {}: {err}",
                            outcome.job.a.display(),
                            outcome.job.b.display()
                        );
                    }
                }
            }
            Ok(all_ok)
        }
    }
}

fn prepare(config: AppConfig, overrides: &Overrides) -> Result<DiffConfig> {
    let config = settings::apply_overrides(config, overrides).context("比较参数无效")?;
    Ok(settings::diff_config(&config))
}

/// `<A 的文件名>_vs_<B 的文件名>.dxf`，与 A 位于同一目录。
fn default_output(a: &Path, b: &Path) -> PathBuf {
    let stem = |path: &Path| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "drawing".to_string())
    };
    a.with_file_name(format!("{}_vs_{}.dxf", stem(a), stem(b)))
}

/// 显式指定的配置文件必须可用；自动发现失败时退回内建默认值，并把原因交给调用方在日志就绪后报告。
fn load_configuration(override_path: Option<&Path>) -> Result<(AppConfig, Option<ConfigError>)> {
    match override_path {
        Some(path) => {
            let config = AppConfig::from_file(path)
                .with_context(|| format!("加载指定配置 {} 失败", path.display()))?;
            Ok((config, None))
        }
        None => match AppConfig::discover() {
            Ok(cfg) => Ok((cfg, None)),
            Err(err) => Ok((AppConfig::default(), Some(err))),
        },
    }
}

fn warn_default_fallback(err: &ConfigError) {
    match err {
        ConfigError::Io { path, .. } | ConfigError::Parse { path, .. } => {
            warn!(path = %path.display(), error = %err, "加载默认配置失败，使用内建默认值");
        }
        ConfigError::Context { .. } | ConfigError::Invalid(_) => {
            warn!(error = %err, "加载默认配置失败，使用内建默认值");
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if subscriber.try_init().is_err() {
        // 已初始化，忽略
    }
}
