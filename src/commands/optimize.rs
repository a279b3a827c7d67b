use std::path::{Path, PathBuf};
use rayon::prelude::*;
use tracing::{debug, info};
use crate::cache::{check_freshness, Freshness};
use crate::commands::discover::discover_sources;
use crate::constants::DEFAULT_SOURCE_DIR;
use crate::encode::{decode_source, write_derivative};
use crate::error::{OptimizeError, Result};
use crate::types::{DerivativeSpec, SourceImage, Summary, DERIVATIVES};

/// 実行設定
#[derive(Debug, Clone)]
pub struct OptimizeConfig {
    pub source_dir: PathBuf,
    /// ワーカー数。0 = CPU数、1 = 自然順で逐次処理
    pub jobs: usize,
    /// 判定だけ行い、デコードも書き込みもしない
    pub dry_run: bool,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            jobs: 0,
            dry_run: false,
        }
    }
}

// 派生画像1つ分の判定結果
#[derive(Debug)]
struct PlannedDerivative {
    spec: DerivativeSpec,
    path: PathBuf,
    freshness: Freshness,
}

// ソース1枚分の処理結果
#[derive(Debug, Default)]
struct SourceReport {
    written: usize,
    current: usize,
}

/// 既定設定でソースディレクトリを処理する
pub fn run(source_dir: impl AsRef<Path>) -> Result<Summary> {
    run_with_config(&OptimizeConfig {
        source_dir: source_dir.as_ref().to_path_buf(),
        ..OptimizeConfig::default()
    })
}

pub fn run_with_config(config: &OptimizeConfig) -> Result<Summary> {
    let discovered = discover_sources(&config.source_dir)?;

    let mut summary = Summary {
        considered: discovered.sources.len(),
        duplicates: discovered.duplicates,
        dry_run: config.dry_run,
        ..Summary::default()
    };

    if discovered.sources.is_empty() {
        return Ok(summary);
    }

    let reports = if config.jobs == 1 {
        discovered
            .sources
            .iter()
            .map(|source| process_source(source, config.dry_run))
            .collect::<Result<Vec<_>>>()?
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.jobs)
            .build()
            .map_err(|e| OptimizeError::WorkerPool(e.to_string()))?;
        pool.install(|| {
            discovered
                .sources
                .par_iter()
                .map(|source| process_source(source, config.dry_run))
                .collect::<Result<Vec<_>>>()
        })?
    };

    for (source, report) in discovered.sources.iter().zip(reports) {
        summary.derivatives_written += report.written;
        summary.derivatives_current += report.current;
        if report.written > 0 {
            summary.updated.push(source.name.clone());
        }
    }

    Ok(summary)
}

fn plan_source(source: &SourceImage) -> Vec<PlannedDerivative> {
    DERIVATIVES
        .iter()
        .map(|&spec| {
            let path = source.derivative_path(spec.format);
            let freshness = check_freshness(source.modified, &path);
            PlannedDerivative {
                spec,
                path,
                freshness,
            }
        })
        .collect()
}

fn process_source(source: &SourceImage, dry_run: bool) -> Result<SourceReport> {
    let (pending, current): (Vec<_>, Vec<_>) = plan_source(source)
        .into_iter()
        .partition(|planned| planned.freshness.needs_regeneration());

    for planned in &current {
        debug!(file = %source.name, format = %planned.spec.format, "derivative is current");
    }

    let mut report = SourceReport {
        written: 0,
        current: current.len(),
    };

    if pending.is_empty() {
        return Ok(report);
    }

    if dry_run {
        for planned in &pending {
            info!(
                file = %source.name,
                target = %planned.path.display(),
                reason = planned.freshness.as_str(),
                "would regenerate"
            );
        }
        report.written = pending.len();
        return Ok(report);
    }

    // デコードはソース1枚につき1回だけ
    let img = decode_source(source)?;

    for planned in &pending {
        debug!(
            file = %source.name,
            format = %planned.spec.format,
            quality = planned.spec.quality,
            reason = planned.freshness.as_str(),
            "encoding derivative"
        );
        write_derivative(&img, planned.spec, &planned.path)?;
        report.written += 1;
    }

    info!("Optimized {}", source.name);
    Ok(report)
}
