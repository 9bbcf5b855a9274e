//! 터미널 차트/지표 렌더링.
//!
//! 차트 데이터 구조를 고정 크기 텍스트 래스터로 그립니다.
//! 위젯 선택은 계약이 아니므로 이 모듈만 교체하면
//! 다른 프레젠테이션(웹, 이미지)으로 바꿀 수 있습니다.

use hodl_analytics::{ChartPoint, Summary};
use rust_decimal::prelude::ToPrimitive;

/// 차트 래스터 높이 (행)
const CHART_HEIGHT: usize = 12;
/// 차트 래스터 최대 너비 (열)
const CHART_WIDTH: usize = 72;
/// Y축 레이블 폭
const LABEL_WIDTH: usize = 10;

/// 시계열을 텍스트 라인 차트로 렌더링합니다.
///
/// 포인트 수가 너비를 넘으면 열마다 대표 포인트 하나를 비례
/// 샘플링합니다. 비유한값은 그리지 않고 해당 열을 비워 둡니다.
pub fn render_chart(title: &str, points: &[ChartPoint]) -> String {
    let mut out = String::new();
    out.push_str(&format!("📈 {}\n", title));

    if points.is_empty() {
        out.push_str("   (no data)\n");
        return out;
    }

    let width = points.len().min(CHART_WIDTH);
    let sampled: Vec<f64> = (0..width)
        .map(|col| points[col * points.len() / width].y)
        .collect();

    let finite: Vec<f64> = sampled.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        out.push_str("   (no finite values to plot)\n");
        return out;
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // 평탄한 시리즈는 가운데 한 줄로 그림
    let span = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        max - min
    };

    let mut grid = vec![vec![' '; width]; CHART_HEIGHT];
    for (col, &y) in sampled.iter().enumerate() {
        if !y.is_finite() {
            continue;
        }
        let level = ((y - min) / span * (CHART_HEIGHT - 1) as f64).round() as usize;
        grid[CHART_HEIGHT - 1 - level][col] = '*';
    }

    for (row_idx, row) in grid.iter().enumerate() {
        let label = if row_idx == 0 {
            format!("{:>width$.2}", max, width = LABEL_WIDTH)
        } else if row_idx == CHART_HEIGHT - 1 {
            format!("{:>width$.2}", min, width = LABEL_WIDTH)
        } else {
            " ".repeat(LABEL_WIDTH)
        };
        let line: String = row.iter().collect();
        out.push_str(&format!("{} ┤ {}\n", label, line.trim_end()));
    }

    out
}

/// 요약 지표를 렌더링합니다.
///
/// 기준 대시보드와 동일하게 가격과 수익률을 소수점 둘째 자리까지
/// 표시합니다.
pub fn render_summary(summary: &Summary) -> String {
    let start = summary.start_price.to_f64().unwrap_or(f64::NAN);
    let end = summary.end_price.to_f64().unwrap_or(f64::NAN);
    let total_pct = summary.total_return * 100.0;

    format!(
        "📊 Buy & Hold Results\n\
         \x20 Start Price : ${:.2}\n\
         \x20 End Price   : ${:.2}\n\
         \x20 Total Return: {:.2}%\n",
        start, end, total_pct
    )
}
