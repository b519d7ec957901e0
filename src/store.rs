//! The dashboard's single source of truth.
//!
//! `Store` is a passive container: it performs no I/O and does no cross-field
//! validation. It is written only by the controller task; display code reads
//! it through a `watch` receiver, which is the sole synchronisation point
//! between the render loop and the controller.
use crate::model::{MarketOverview, StockSample};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub all_stocks: Vec<StockSample>,
    pub selected_symbol: Option<String>,
    /// Belongs to `selected_symbol` only.
    pub historical_data: Vec<StockSample>,
    pub market_overview: Option<MarketOverview>,
    pub is_loading: bool,
}

#[derive(Debug, Clone)]
pub struct Store {
    tx: Arc<watch::Sender<ViewState>>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(ViewState::default())
    }

    pub fn with_state(state: ViewState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> ViewState {
        self.tx.borrow().clone()
    }

    pub fn selected_symbol(&self) -> Option<String> {
        self.tx.borrow().selected_symbol.clone()
    }

    /// Applies `f` and notifies subscribers once, whatever `f` changed.
    pub fn update(&self, f: impl FnOnce(&mut ViewState)) {
        self.tx.send_modify(f);
    }

    pub fn set_all_stocks(&self, data: Vec<StockSample>) {
        self.update(|state| state.all_stocks = data);
    }

    pub fn set_market_overview(&self, data: Option<MarketOverview>) {
        self.update(|state| state.market_overview = data);
    }

    pub fn set_historical_data(&self, data: Vec<StockSample>) {
        self.update(|state| state.historical_data = data);
    }

    /// Does not fetch anything; that is the controller's job.
    pub fn set_selected_symbol(&self, symbol: Option<String>) {
        self.update(|state| state.selected_symbol = symbol);
    }

    pub fn set_loading(&self, loading: bool) {
        self.update(|state| state.is_loading = loading);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
