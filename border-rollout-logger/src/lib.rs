#![warn(missing_docs)]
//! Logger of robot rollouts.
//!
//! [`SampleLogger`] collects time series of a locomotion rollout (joint states,
//! base velocities, contact forces, oscillator phases) and reward terms of
//! finished episodes. At the end of the rollout, states are plotted on a
//! background thread and reward terms are summarized to stdout and a CSV file.
//!
//! ```rust,no_run
//! use border_rollout_logger::{SampleLogger, StateValue};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut logger = SampleLogger::new(0.02);
//! for step in 0..500 {
//!     let t = step as f32 * 0.02;
//!     logger.log_states(vec![
//!         ("base_vel_x", StateValue::from(0.5 + 0.1 * t.sin())),
//!         ("command_x", StateValue::from(0.5f32)),
//!     ]);
//! }
//! logger.log_rewards(vec![("tracking_lin_vel", 0.8)], 16)?;
//!
//! logger.plot_states("logs/states.csv", true)?;
//! logger.print_rewards("logs/rewards.csv")?;
//! # Ok(())
//! # }
//! ```
pub mod channels;
pub mod config;
pub mod error;
pub mod plot;
pub mod render;
pub mod reward;
pub mod value;

mod logger;
pub use channels::ChannelLog;
pub use config::LoggerConfig;
pub use error::LoggerError;
pub use logger::SampleLogger;
pub use render::RenderHandle;
pub use value::{RewardValue, StateValue};
