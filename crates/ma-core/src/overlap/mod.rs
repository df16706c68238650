//! Overlap Studies: the moving averages
//!
//! These indicators "overlap" with the price data, meaning they are plotted
//! on the same chart as the series they smooth. Each function computes a
//! single value for the window ending at `idx` and spanning `tail` elements:
//!
//! - [`simple_moving_average`] (SMA): arithmetic mean
//! - [`exponential_moving_average`] (EMA): geometrically decaying weights
//! - [`smoothed_moving_average`] (SMMA): recurrence seeded by a leading SMA
//! - [`weighted_moving_average`] (WMA): linearly decaying weights
//!
//! Omitted parameters resolve as described in [`crate::window`]; SMMA derives
//! its own default window. Short aliases (`sma`, `ema`, `smma`, `wma`) are
//! provided for each.

mod ema;
mod sma;
mod smma;
mod wma;

pub use ema::{ema, exponential_moving_average};
pub use sma::{simple_moving_average, sma};
pub use smma::{smma, smoothed_moving_average};
pub use wma::{weighted_moving_average, wma};
