use super::format::{format_price, format_volume};
use super::palette;
use super::scrollbar::{ScrollbarState, draw_scrollbar};
use crate::model::StockSample;
use macroquad::prelude::*;
use std::ops::Range;

const HEADER_H: f32 = 70.0;
const ROW_H: f32 = 32.0;
const FONT: f32 = 18.0;

const COLUMNS: [(&str, f32, bool); 7] = [
    // title, width share, right-aligned
    ("Symbol", 0.14, false),
    ("Date", 0.18, false),
    ("Open", 0.13, true),
    ("High", 0.13, true),
    ("Low", 0.13, true),
    ("Close", 0.13, true),
    ("Volume", 0.16, true),
];

#[derive(Debug, Clone, Default)]
pub struct TableState {
    pub scroll_offset: f32,
    pub scrollbar: ScrollbarState,
}

/// Indices of the rows at least partly inside the viewport.
pub fn visible_rows(scroll_offset: f32, visible_h: f32, row_h: f32, rows: usize) -> Range<usize> {
    let first = (scroll_offset / row_h).floor().max(0.0) as usize;
    let last = (((scroll_offset + visible_h) / row_h).ceil().max(0.0) as usize).min(rows);
    first.min(last)..last
}

pub fn max_scroll(rows: usize, row_h: f32, visible_h: f32) -> f32 {
    (rows as f32 * row_h - visible_h).max(0.0)
}

/// Cell texts for one row, in column order.
pub fn row_cells(stock: &StockSample) -> [String; 7] {
    [
        stock.symbol.clone(),
        stock.date.clone(),
        format_price(stock.open),
        format_price(stock.high),
        format_price(stock.low),
        format_price(stock.close),
        format_volume(stock.volume),
    ]
}

fn draw_cells(cells: &[String], x: f32, y: f32, width: f32, color: Color) {
    let mut cx = x;
    for ((_, share, right), text) in COLUMNS.iter().zip(cells) {
        let col_w = width * share;
        let tx = if *right {
            let dims = measure_text(text, None, FONT as u16, 1.0);
            cx + col_w - dims.width - 8.0
        } else {
            cx + 8.0
        };
        draw_text(text, tx, y, FONT, color);
        cx += col_w;
    }
}

/// Draws the stock table and returns the symbol of a row clicked this frame.
pub fn draw_stock_table(
    stocks: &[StockSample],
    selected: Option<&str>,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    state: &mut TableState,
) -> Option<String> {
    draw_rectangle(x, y, width, height, palette::PANEL);
    draw_text("MARKET OVERVIEW", x + 10.0, y + 30.0, 24.0, WHITE);

    let rows_w = width - 30.0;
    let headers: Vec<String> = COLUMNS.iter().map(|(t, _, _)| t.to_string()).collect();
    draw_cells(&headers, x, y + 58.0, rows_w, LIGHTGRAY);
    draw_line(x, y + HEADER_H - 4.0, x + width, y + HEADER_H - 4.0, 2.0, palette::BORDER);

    let start_y = y + HEADER_H;
    let visible_h = height - HEADER_H;
    let mouse = mouse_position();

    let mut scroll = state.scroll_offset;
    let (_wx, wy) = mouse_wheel();
    let mouse_in_table =
        mouse.0 >= x && mouse.0 <= x + width && mouse.1 >= start_y && mouse.1 <= y + height;
    if mouse_in_table && !state.scrollbar.dragging {
        scroll = (scroll - wy * 40.0).clamp(0.0, max_scroll(stocks.len(), ROW_H, visible_h));
    }

    let mut clicked = None;
    for i in visible_rows(scroll, visible_h, ROW_H, stocks.len()) {
        let stock = &stocks[i];
        let row_y = start_y + i as f32 * ROW_H - scroll;
        // rows scrolled partly under the header are not drawn
        if row_y < start_y - 1.0 {
            continue;
        }

        let hovered = mouse.0 >= x
            && mouse.0 <= x + rows_w
            && mouse.1 >= row_y
            && mouse.1 <= row_y + ROW_H
            && mouse.1 <= y + height;
        let is_selected = selected == Some(stock.symbol.as_str());

        let bg = if is_selected {
            palette::SELECTED
        } else if hovered {
            palette::HOVER
        } else {
            palette::ROW
        };
        draw_rectangle(x + 5.0, row_y, rows_w - 5.0, ROW_H - 2.0, bg);
        draw_cells(&row_cells(stock), x, row_y + 21.0, rows_w, WHITE);

        if hovered && is_mouse_button_pressed(MouseButton::Left) {
            clicked = Some(stock.symbol.clone());
        }
    }

    state.scroll_offset = draw_scrollbar(
        x,
        start_y,
        width,
        visible_h,
        scroll,
        stocks.len() as f32 * ROW_H,
        visible_h,
        &mut state.scrollbar,
    );

    if stocks.is_empty() {
        draw_text("No stocks to show", x + 20.0, start_y + 30.0, FONT, GRAY);
    }

    clicked
}
