//! 백테스트 실행 명령어.
//!
//! 하나의 동기 파이프라인을 수행합니다:
//! 조회(거래소) → 계산(수익률/자산 곡선) → 렌더링(차트/지표).
//!
//! # 사용 예시
//!
//! ```bash
//! # SOL/USDT 2023년 바이 앤 홀드
//! hodl run -s SOL/USDT -y 2023
//!
//! # 다른 심볼, 기본 연도(올해)
//! hodl run -s BTC/USDT
//! ```

use anyhow::{anyhow, bail, Result};
use chrono::{Datelike, NaiveDate, Utc};
use tracing::{debug, info};

use hodl_analytics::{compute, BacktestCharts, ComputeError};
use hodl_core::Symbol;
use hodl_exchange::{build_provider, DailyCandleProvider, ExchangeId, MemoizedProvider};

use crate::render;

/// 연도 선택 하한 (기준 대시보드와 동일).
pub const MIN_YEAR: i32 = 2018;

/// 백테스트 실행 설정.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 거래 쌍 문자열 (예: "SOL/USDT")
    pub symbol: String,
    /// 백테스트 연도
    pub year: i32,
    /// 거래소 식별자 문자열 (예: "kucoin")
    pub exchange: String,
}

/// 연도를 검증하고 해당 연도의 `[1월 1일, 12월 31일]` 범위를 반환합니다.
pub fn year_range(year: i32) -> Result<(NaiveDate, NaiveDate)> {
    let current_year = Utc::now().year();
    if year < MIN_YEAR || year > current_year {
        bail!(
            "Invalid year {}: supported range is {}..={}",
            year,
            MIN_YEAR,
            current_year
        );
    }

    // 1월 1일과 12월 31일은 모든 연도에서 유효함
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
    Ok((start, end))
}

/// 백테스트 파이프라인을 실행합니다.
///
/// 모든 실패는 사용자에게 보여줄 단일 메시지로 수렴하며,
/// 부분 결과는 출력하지 않습니다.
pub async fn run_backtest(config: RunConfig) -> Result<()> {
    let symbol = Symbol::from_string(&config.symbol)
        .ok_or_else(|| anyhow!("Invalid symbol '{}': expected BASE/QUOTE", config.symbol))?;
    let exchange_id: ExchangeId = config.exchange.parse()?;
    let (start, end) = year_range(config.year)?;

    info!(
        symbol = %symbol,
        year = config.year,
        exchange = %exchange_id,
        "Running buy & hold backtest"
    );

    // 세션 수명 메모 캐시로 감싼 제공자
    let provider = MemoizedProvider::new(build_provider(exchange_id)?);
    let series = provider.fetch_daily_candles(&symbol, start, end).await?;
    debug!(candles = series.len(), "Fetched daily candles");

    let report = compute(&series).map_err(|e| match e {
        ComputeError::InsufficientData { .. } => {
            anyhow!("No data available for the selected year.")
        }
    })?;
    let charts = BacktestCharts::from_report(&series, &report);

    println!();
    println!(
        "{}",
        render::render_chart(
            &format!("{} Price - {}", symbol, config.year),
            &charts.price,
        )
    );
    println!(
        "{}",
        render::render_chart(
            &format!("{} Equity Curve - {}", symbol, config.year),
            &charts.equity,
        )
    );
    println!("{}", render::render_summary(&report.summary));

    Ok(())
}
