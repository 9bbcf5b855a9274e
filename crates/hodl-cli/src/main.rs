//! 바이 앤 홀드 백테스터 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # SOL/USDT 2023년 백테스트
//! hodl run -s SOL/USDT -y 2023
//!
//! # 기본값 (SOL/USDT, 올해, kucoin)
//! hodl run
//! ```

use anyhow::Result;
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};
use tracing::error;

use hodl_core::logging::init_logging_from_env;

mod commands;
mod render;

use commands::run::{run_backtest, RunConfig};

#[derive(Parser)]
#[command(name = "hodl")]
#[command(about = "Crypto buy & hold backtest - 거래소 일봉 기반 단일 자산 백테스터", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 백테스트 실행 (조회 → 계산 → 렌더링)
    Run {
        /// 거래 쌍 (예: SOL/USDT)
        #[arg(short, long, default_value = "SOL/USDT")]
        symbol: String,

        /// 백테스트 연도 (2018..올해, 기본: 올해)
        #[arg(short, long)]
        year: Option<i32>,

        /// 거래소 식별자 (현재 kucoin만 지원)
        #[arg(short, long, default_value = "kucoin")]
        exchange: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = init_logging_from_env() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            symbol,
            year,
            exchange,
        } => {
            let config = RunConfig {
                symbol,
                year: year.unwrap_or_else(|| Utc::now().year()),
                exchange,
            };

            if let Err(e) = run_backtest(config).await {
                error!("Backtest failed: {}", e);
                // 실패는 단일 메시지로만 보여주고 다른 출력은 하지 않음
                eprintln!("\n❌ {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
