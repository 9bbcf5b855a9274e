//! 바이 앤 홀드 성과 분석.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - `compute`: 캔들 시리즈 → 수익률/자산 곡선/요약 지표 변환
//! - `BacktestCharts`: 프레젠테이션 계층이 소비하는 차트 데이터

pub mod buy_hold;
pub mod charts;

pub use buy_hold::{compute, BuyHoldReport, ComputeError, Summary};
pub use charts::{BacktestCharts, ChartPoint};
