use clap::Parser;
use std::path::PathBuf;

use combined_cycle_toolbox::app::{self, RunOptions};
use combined_cycle_toolbox::config::{self, DEFAULT_CONFIG_FILE};

/// 복합발전 플랜트 해석기.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// 설정 파일(TOML). 없으면 기본값으로 생성한다.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// CSV 출력 디렉터리
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// CSV를 쓰지 않는다.
    #[arg(long)]
    no_export: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 플랜트 해석을 실행한다.
fn main() {
    tracing_subscriber::fmt::init();
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = config::load_or_default(&cli.config)?;
    let options = RunOptions {
        out_dir: (!cli.no_export).then_some(cli.out_dir),
    };
    let report = app::run(&cfg, &options)?;

    let s = &report.summary;
    println!("가스터빈 효율      : {:.4}", s.gas_turbine_efficiency);
    println!("증기 사이클 효율   : {:.4}", s.steam_cycle_efficiency);
    println!("복합 효율          : {:.4}", s.combined_efficiency);
    println!("플랜트 순출력 [kW] : {:.1}", s.net_work);
    for seg in report.pinch.flagged() {
        println!(
            "접근 온도차 미달   : {} ({:.1} K)",
            seg.name,
            seg.min_approach_k()
        );
    }
    Ok(())
}
