use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use image_derivatives::constants::DEFAULT_SOURCE_DIR;
use image_derivatives::{run_with_config, OptimizeConfig};
use tracing_subscriber::EnvFilter;

/// JPEGからWebP/AVIFの派生画像を生成する（更新が必要なものだけ）
#[derive(Parser, Debug)]
#[command(name = "optimize-images", version, about)]
struct Cli {
    /// ソースディレクトリ
    #[arg(default_value = DEFAULT_SOURCE_DIR)]
    source_dir: PathBuf,

    /// 並列ワーカー数（0 = CPU数、1 = 逐次）
    #[arg(short, long, default_value_t = 0)]
    jobs: usize,

    /// 書き込みを行わず、再生成が必要なものだけ表示する
    #[arg(long)]
    dry_run: bool,

    /// ログを詳細にする（-v: debug, -vv: trace）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn optimize(cli: &Cli) -> anyhow::Result<()> {
    let config = OptimizeConfig {
        source_dir: cli.source_dir.clone(),
        jobs: cli.jobs,
        dry_run: cli.dry_run,
    };

    let summary = run_with_config(&config)
        .with_context(|| format!("processing {}", config.source_dir.display()))?;

    println!("{}", summary.message());
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = optimize(&cli) {
        eprintln!("Failed to optimize images: {:#}", e);
        std::process::exit(1);
    }
}
