//! Financial analytics dashboard: fetches stock snapshots, per-symbol history
//! and a market overview from the analytics backend and renders them as a
//! table, KPI cards and charts.
pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod store;
pub mod ui;

pub use api::{ApiClient, StockApi};
pub use config::Config;
pub use controller::Controller;
pub use error::{ApiError, Result};
pub use model::{MarketOverview, StockSample};
pub use store::{Store, ViewState};
