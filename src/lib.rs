//! # Twine Propeller
//!
//! Propeller performance for conceptual aircraft design, built on the
//! Hamilton Standard generalized charts and usable as a
//! [Twine](https://github.com/isentropic-dev/twine) model.
//!
//! Given blade geometry and a flight condition, the model returns installed
//! thrust, propeller efficiency and the chart quantities behind them, with
//! optional partial derivatives for gradient-based optimizers.
//!
//! The chart data is a smooth reconstruction shaped like the published
//! Hamilton Standard charts and calibrated against reference evaluations.
//! It is not a digitization of the published figures, so readings agree with
//! them to within a fraction of a percent at the calibration points and may
//! drift further away from them.
//!
//! ## Crate layout
//!
//! - [`models`]: The propeller model and its [`twine_core::Model`] adapter.
//! - [`support`]: Numeric constraints, chart interpolation and dual numbers.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are public because they're useful, but their APIs
//! are not stable. Code that only serves the propeller model stays in its
//! private `core` module until another model needs it.

pub mod models;
pub mod support;
