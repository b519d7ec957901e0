use super::format::{format_volume, short_date};
use super::palette;
use crate::model::StockSample;
use macroquad::prelude::*;

const DOMAIN_PADDING: f64 = 5.0;

/// Y-axis range for the close-price chart: `[min - 5, max + 5]`.
pub fn price_domain(data: &[StockSample]) -> Option<(f64, f64)> {
    let first = data.first()?;
    let (min, max) = data
        .iter()
        .fold((first.close, first.close), |(lo, hi), s| (lo.min(s.close), hi.max(s.close)));
    Some((min - DOMAIN_PADDING, max + DOMAIN_PADDING))
}

/// First, middle and last dates; fewer when there are fewer samples.
pub fn axis_labels(data: &[StockSample]) -> Vec<String> {
    let picks = match data.len() {
        0 => vec![],
        1 => vec![0],
        2 => vec![0, 1],
        n => vec![0, n / 2, n - 1],
    };
    picks.into_iter().map(|i| short_date(&data[i].date)).collect()
}

pub fn max_volume(data: &[StockSample]) -> u64 {
    data.iter().map(|s| s.volume).max().unwrap_or(0)
}

/// Draws the history area: a prompt without a selection, otherwise the
/// close-price chart over a volume chart.
pub fn draw_history_panel(
    symbol: Option<&str>,
    data: &[StockSample],
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) {
    draw_rectangle(x, y, width, height, palette::BACKGROUND);

    let Some(symbol) = symbol else {
        let prompt = "Click on a stock in the table to see its history.";
        let dims = measure_text(prompt, None, 20, 1.0);
        draw_text(
            prompt,
            x + (width - dims.width) / 2.0,
            y + height / 2.0,
            20.0,
            GRAY,
        );
        return;
    };

    let padding = 15.0;
    let price_h = (height - padding * 3.0) * 0.68;
    let volume_h = (height - padding * 3.0) - price_h;

    draw_price_chart(
        symbol,
        data,
        x + padding,
        y + padding,
        width - padding * 2.0,
        price_h,
    );
    draw_volume_chart(
        data,
        x + padding,
        y + padding * 2.0 + price_h,
        width - padding * 2.0,
        volume_h,
    );
}

fn draw_frame(title: &str, x: f32, y: f32, width: f32, height: f32) {
    draw_rectangle(x, y, width, height, palette::PANEL);
    draw_rectangle_lines(x, y, width, height, 2.0, palette::BORDER);
    draw_text(title, x + 15.0, y + 28.0, 22.0, WHITE);
}

fn draw_date_axis(data: &[StockSample], chart_x: f32, chart_w: f32, base_y: f32) {
    let labels = axis_labels(data);
    let last = labels.len().saturating_sub(1).max(1) as f32;
    for (i, label) in labels.iter().enumerate() {
        let dims = measure_text(label, None, 13, 1.0);
        let lx = chart_x + (i as f32 / last) * chart_w - dims.width / 2.0;
        draw_text(label, lx.max(chart_x), base_y + 16.0, 13.0, LIGHTGRAY);
    }
}

fn draw_price_chart(symbol: &str, data: &[StockSample], x: f32, y: f32, width: f32, height: f32) {
    draw_frame(
        &format!("Historical Performance for {symbol}"),
        x,
        y,
        width,
        height,
    );

    let Some((min_val, max_val)) = price_domain(data) else {
        draw_text("No history available", x + 15.0, y + height / 2.0, 16.0, GRAY);
        return;
    };
    let val_range = (max_val - min_val) as f32;

    let chart_x = x + 70.0;
    let chart_y = y + 45.0;
    let chart_w = width - 90.0;
    let chart_h = height - 75.0;
    let floor_y = chart_y + chart_h;

    let to_y = |close: f64| floor_y - ((close - min_val) as f32 / val_range) * chart_h;

    // y labels
    for i in 0..5 {
        let frac = i as f32 / 4.0;
        let price = max_val - (frac * val_range) as f64;
        let gy = chart_y + frac * chart_h;
        draw_line(chart_x, gy, chart_x + chart_w, gy, 1.0, palette::GRID);
        draw_text(&format!("${:.2}", price), x + 8.0, gy + 4.0, 13.0, palette::LINE);
    }

    if data.len() == 1 {
        draw_circle(chart_x + chart_w / 2.0, to_y(data[0].close), 4.0, palette::LINE);
    } else {
        let step = chart_w / (data.len() - 1) as f32;
        let mut fill = palette::LINE;
        fill.a = 0.2;

        for (i, pair) in data.windows(2).enumerate() {
            let x1 = chart_x + i as f32 * step;
            let x2 = x1 + step;
            let y1 = to_y(pair[0].close);
            let y2 = to_y(pair[1].close);

            draw_triangle(vec2(x1, y1), vec2(x2, y2), vec2(x2, floor_y), fill);
            draw_triangle(vec2(x1, y1), vec2(x1, floor_y), vec2(x2, floor_y), fill);
            draw_line(x1, y1, x2, y2, 2.5, palette::LINE);
        }
    }

    draw_date_axis(data, chart_x, chart_w, floor_y);
}

fn draw_volume_chart(data: &[StockSample], x: f32, y: f32, width: f32, height: f32) {
    draw_frame("Volume", x, y, width, height);

    let peak = max_volume(data);
    if peak == 0 {
        return;
    }

    let chart_x = x + 70.0;
    let chart_y = y + 40.0;
    let chart_w = width - 90.0;
    let chart_h = height - 65.0;
    let floor_y = chart_y + chart_h;

    draw_text(&format_volume(peak), x + 8.0, chart_y + 4.0, 13.0, palette::VOLUME);

    let slot = chart_w / data.len() as f32;
    let bar_w = (slot * 0.7).max(1.0);
    for (i, sample) in data.iter().enumerate() {
        let bar_h = (sample.volume as f64 / peak as f64) as f32 * chart_h;
        let bx = chart_x + i as f32 * slot + (slot - bar_w) / 2.0;
        draw_rectangle(bx, floor_y - bar_h, bar_w, bar_h, palette::VOLUME);
    }
}
