use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use heat_loss_toolbox::{app, config};

/// 건물 열손실 계산 및 히트펌프 선정 도구.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: app::Command,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    init_tracing(&cfg.log_filter);
    app::run(&cli.command, &cfg)
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
