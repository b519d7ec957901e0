//! Sequences backend fetches against the store.
//!
//! Everything here runs on one thread inside a tokio `LocalSet`: the startup
//! fetches and every history fetch are local tasks interleaved at their
//! `.await` points. Nothing is cancelled. A history response is applied only
//! if its symbol is still the selected one when it arrives.
use crate::api::StockApi;
use crate::store::Store;
use log::{debug, info, warn};
use std::cell::Cell;
use std::rc::Rc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::{self, JoinHandle};

pub struct Controller<A> {
    api: Rc<A>,
    store: Store,
    started: Rc<Cell<bool>>,
}

impl<A> Clone for Controller<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            store: self.store.clone(),
            started: Rc::clone(&self.started),
        }
    }
}

impl<A: StockApi + 'static> Controller<A> {
    pub fn new(api: A, store: Store) -> Self {
        Self {
            api: Rc::new(api),
            store,
            started: Rc::new(Cell::new(false)),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Loads the stock list and the market overview.
    ///
    /// Both requests run concurrently and either may finish first; the results
    /// land in the store in a single update that also clears `is_loading`.
    /// Only the first call per controller does anything.
    pub async fn start(&self) {
        if self.started.replace(true) {
            warn!("Startup already ran; ignoring repeated start");
            return;
        }

        info!("Fetching all stocks and market overview...");
        self.store.set_loading(true);

        let (stocks, overview) = tokio::join!(
            self.api.fetch_all_stocks(),
            self.api.fetch_market_overview()
        );

        let count = stocks.len();
        let has_overview = overview.is_some();
        self.store.update(|state| {
            state.all_stocks = stocks;
            state.market_overview = overview;
            state.is_loading = false;
        });
        info!("Startup data loaded: {count} stocks, overview present: {has_overview}");
    }

    /// Selects `symbol` and fetches its history in a local task.
    ///
    /// Must be called from within a `LocalSet`. Re-selecting the current
    /// symbol fetches again.
    pub fn select(&self, symbol: impl Into<String>) -> JoinHandle<()> {
        let symbol = symbol.into();
        info!("Selected symbol changed to {symbol}, fetching history...");
        self.store.set_selected_symbol(Some(symbol.clone()));

        let api = Rc::clone(&self.api);
        let store = self.store.clone();
        task::spawn_local(async move {
            let history = api.fetch_stock_history(&symbol).await;

            if store.selected_symbol().as_deref() == Some(symbol.as_str()) {
                let count = history.len();
                store.set_historical_data(history);
                info!("History for {symbol} loaded ({count} samples)");
            } else {
                debug!("Discarding stale history for {symbol}");
            }
        })
    }

    /// Session loop: runs startup and reacts to each selection received.
    ///
    /// Returns once every sender for `selections` has been dropped. History
    /// fetches still in flight at that point are left to the `LocalSet`.
    pub async fn run(self, mut selections: UnboundedReceiver<String>) {
        let startup = self.clone();
        task::spawn_local(async move { startup.start().await });

        while let Some(symbol) = selections.recv().await {
            self.select(symbol);
        }
        debug!("Selection channel closed; controller stopping");
    }
}
