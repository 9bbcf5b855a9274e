//! 백테스트 차트 데이터 구조.
//!
//! 프레젠테이션 계층(터미널, 웹 등)이 그대로 소비할 수 있는
//! 시계열 차트 포인트를 생성합니다. 위젯 선택은 소비자의 몫입니다.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use hodl_core::CandleSeries;

use crate::buy_hold::BuyHoldReport;

/// 차트 데이터 포인트.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// X축 값 (타임스탬프, 밀리초)
    pub x: i64,
    /// Y축 값
    pub y: f64,
}

impl ChartPoint {
    /// 새로운 차트 포인트를 생성합니다.
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self {
            x: timestamp.timestamp_millis(),
            y: value,
        }
    }
}

/// 바이 앤 홀드 백테스트 차트 데이터 모음.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestCharts {
    /// 종가 시계열
    pub price: Vec<ChartPoint>,
    /// 자산 곡선 시계열 (1.0에서 시작)
    pub equity: Vec<ChartPoint>,
}

impl BacktestCharts {
    /// 캔들 시리즈와 계산 결과에서 차트 데이터를 생성합니다.
    ///
    /// `report`는 같은 시리즈로 `compute`를 호출한 결과여야 하며,
    /// 자산 곡선은 캔들과 1:1로 정렬됩니다.
    pub fn from_report(series: &CandleSeries, report: &BuyHoldReport) -> Self {
        let price = series
            .iter()
            .map(|c| ChartPoint::new(c.open_time, c.close.to_f64().unwrap_or(f64::NAN)))
            .collect();

        let equity = series
            .iter()
            .zip(report.equity.iter())
            .map(|(c, &e)| ChartPoint::new(c.open_time, e))
            .collect();

        Self { price, equity }
    }
}
