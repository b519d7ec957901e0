use super::format::{format_change, format_volume};
use super::palette;
use crate::model::MarketOverview;
use macroquad::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Gain,
    Loss,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
    pub accent: Option<Accent>,
}

/// Total volume, top gainer and top loser, in that order.
pub fn kpi_cards(overview: Option<&MarketOverview>, is_loading: bool) -> [KpiCard; 3] {
    let placeholder = if is_loading { "Loading..." } else { "N/A" };

    match overview {
        Some(o) if !is_loading => [
            KpiCard {
                title: "Total Volume",
                value: format_volume(o.total_volume),
                accent: None,
            },
            KpiCard {
                title: "Top Gainer",
                value: format!("{} {}", o.top_gainer_symbol, format_change(o.top_gainer_change)),
                accent: Some(Accent::Gain),
            },
            KpiCard {
                title: "Top Loser",
                value: format!("{} {}", o.top_loser_symbol, format_change(o.top_loser_change)),
                accent: Some(Accent::Loss),
            },
        ],
        _ => [
            KpiCard {
                title: "Total Volume",
                value: placeholder.to_string(),
                accent: None,
            },
            KpiCard {
                title: "Top Gainer",
                value: placeholder.to_string(),
                accent: None,
            },
            KpiCard {
                title: "Top Loser",
                value: placeholder.to_string(),
                accent: None,
            },
        ],
    }
}

fn accent_color(accent: Option<Accent>) -> Color {
    match accent {
        Some(Accent::Gain) => palette::GAIN,
        Some(Accent::Loss) => palette::LOSS,
        None => WHITE,
    }
}

pub fn draw_kpi_card(card: &KpiCard, x: f32, y: f32, width: f32, height: f32) {
    draw_rectangle(x, y, width, height, palette::PANEL);
    draw_rectangle_lines(x, y, width, height, 2.0, palette::BORDER);

    let title_dims = measure_text(card.title, None, 18, 1.0);
    draw_text(
        card.title,
        x + (width - title_dims.width) / 2.0,
        y + 28.0,
        18.0,
        LIGHTGRAY,
    );

    let value_dims = measure_text(&card.value, None, 30, 1.0);
    draw_text(
        &card.value,
        x + (width - value_dims.width) / 2.0,
        y + height - 22.0,
        30.0,
        accent_color(card.accent),
    );
}

pub fn draw_kpi_row(cards: &[KpiCard], x: f32, y: f32, width: f32, height: f32) {
    if cards.is_empty() {
        return;
    }
    let padding = 15.0;
    let card_w = (width - padding * (cards.len() as f32 + 1.0)) / cards.len() as f32;

    for (i, card) in cards.iter().enumerate() {
        let cx = x + padding + i as f32 * (card_w + padding);
        draw_kpi_card(card, cx, y + padding, card_w, height - padding * 2.0);
    }
}
