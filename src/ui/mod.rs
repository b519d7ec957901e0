//! Display components. Each takes plain data and draws it with macroquad;
//! the data-shaping halves are pure functions so they can be unit-tested
//! without a window.
pub mod chart;
pub mod format;
pub mod kpi;
pub mod scrollbar;
pub mod table;

pub use chart::draw_history_panel;
pub use kpi::{KpiCard, draw_kpi_row, kpi_cards};
pub use table::{TableState, draw_stock_table};

pub mod palette {
    use macroquad::color::Color;

    pub const BACKGROUND: Color = Color::new(0.08, 0.08, 0.12, 1.0);
    pub const PANEL: Color = Color::new(0.12, 0.12, 0.16, 1.0);
    pub const BORDER: Color = Color::new(0.2, 0.2, 0.24, 1.0);
    pub const TRACK: Color = Color::new(0.08, 0.08, 0.1, 1.0);
    pub const ROW: Color = Color::new(0.12, 0.12, 0.16, 1.0);
    pub const HOVER: Color = Color::new(0.16, 0.16, 0.2, 1.0);
    pub const SELECTED: Color = Color::new(0.2, 0.39, 0.78, 1.0);
    pub const GRID: Color = Color::new(0.2, 0.2, 0.24, 0.6);
    pub const LINE: Color = Color::new(0.53, 0.52, 0.85, 1.0);
    pub const VOLUME: Color = Color::new(0.39, 0.59, 1.0, 0.7);
    pub const GAIN: Color = Color::new(0.0, 0.78, 0.39, 1.0);
    pub const LOSS: Color = Color::new(0.86, 0.2, 0.2, 1.0);
}
