// main.rs
use chrono::{DateTime, Local};
use log::{error, info};
use macroquad::prelude::*;
use market_dashboard::ui::{self, TableState, palette};
use market_dashboard::{ApiClient, Config, Controller, Store};
use std::thread;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::LocalSet;

const KPI_ROW_H: f32 = 130.0;

fn window_conf() -> Conf {
    Conf {
        window_title: "Financial Analytics Dashboard".to_owned(),
        window_width: 1400,
        window_height: 860,
        ..Default::default()
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

// ────────────────────────────────────────────────
// Controller thread: single-threaded runtime, all fetches as local tasks
// ────────────────────────────────────────────────

fn start_controller(
    client: ApiClient,
    store: Store,
    selections: UnboundedReceiver<String>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                error!("Failed to start async runtime: {e}");
                return;
            }
        };

        let local = LocalSet::new();
        local.block_on(&runtime, Controller::new(client, store).run(selections));
        info!("Controller thread finished");
    })
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = Config::load();
    init_logger();

    let client = match ApiClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("{e}");
            return;
        }
    };
    info!("Using analytics backend at {}", client.base_url());

    let store = Store::new();
    let (select_tx, select_rx) = mpsc::unbounded_channel();
    let _controller = start_controller(client, store.clone(), select_rx);

    // only the controller thread writes; the frame loop works off a copy
    let mut view = store.subscribe();
    let mut state = view.borrow_and_update().clone();
    let mut last_update: DateTime<Local> = Local::now();
    let mut table = TableState::default();

    loop {
        clear_background(palette::BACKGROUND);

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        if view.has_changed().unwrap_or(false) {
            state = view.borrow_and_update().clone();
            last_update = Local::now();
        }

        let screen_w = screen_width();
        let screen_h = screen_height();
        let table_w = (screen_w * 0.48).max(520.0).min(screen_w);
        let body_h = screen_h - KPI_ROW_H;

        let cards = ui::kpi_cards(state.market_overview.as_ref(), state.is_loading);
        ui::draw_kpi_row(&cards, 0.0, 0.0, screen_w, KPI_ROW_H);

        let clicked = ui::draw_stock_table(
            &state.all_stocks,
            state.selected_symbol.as_deref(),
            0.0,
            KPI_ROW_H,
            table_w,
            body_h,
            &mut table,
        );

        draw_line(
            table_w,
            KPI_ROW_H,
            table_w,
            screen_h,
            2.0,
            palette::BORDER,
        );

        ui::draw_history_panel(
            state.selected_symbol.as_deref(),
            &state.historical_data,
            table_w,
            KPI_ROW_H,
            screen_w - table_w,
            body_h,
        );

        let status = if state.is_loading {
            "Loading...".to_string()
        } else {
            format!("Updated: {}", last_update.format("%H:%M:%S"))
        };
        draw_text(&status, table_w + 15.0, screen_h - 8.0, 14.0, GRAY);

        if let Some(symbol) = clicked {
            if select_tx.send(symbol).is_err() {
                error!("Controller is gone; selection ignored");
            }
        }

        next_frame().await;
    }

    // closing the channel ends the controller loop
    drop(select_tx);
}
