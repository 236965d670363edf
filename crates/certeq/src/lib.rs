//! Terminal front end for the certainty-equivalent rate estimator.
//!
//! Pure glue: computes the rate curve through `certeq_core` and renders it
//! as a line chart with a Monte Carlo band.

pub mod app;
pub mod chart;
pub mod format;
pub mod logging;

pub use app::App;
pub use logging::init_logging;
