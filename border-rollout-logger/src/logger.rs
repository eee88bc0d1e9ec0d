use crate::{
    channels::ChannelLog,
    config::LoggerConfig,
    plot::PlotJob,
    render::RenderHandle,
    reward::RewardSummary,
    value::{RewardValue, StateValue},
};
use anyhow::Result;
use log::{debug, info};
use std::path::Path;

/// Collects samples of a rollout and exports them.
///
/// States are logged per simulation step with [`SampleLogger::log_state`] and
/// plotted at the end of the rollout with [`SampleLogger::plot_states`].
/// Reward terms are logged per batch of finished episodes with
/// [`SampleLogger::log_rewards`] and summarized with
/// [`SampleLogger::print_rewards`].
///
/// # Examples
///
/// ```rust
/// use border_rollout_logger::{RewardValue, SampleLogger};
///
/// let mut logger = SampleLogger::new(0.02);
/// logger.log_state("dof_pos", 1.0);
/// logger.log_state("dof_pos", 1.5);
/// logger.log_rewards(vec![("tracking", RewardValue::from(2.0f32))], 4).unwrap();
///
/// assert_eq!(logger.state_log().samples("dof_pos").len(), 2);
/// assert_eq!(logger.reward_log().samples("tracking"), &[8.0]);
/// assert_eq!(logger.num_episodes(), 4);
/// ```
pub struct SampleLogger {
    config: LoggerConfig,

    state_log: ChannelLog<StateValue>,

    /// Reward terms multiplied by the number of episodes of their batch.
    reward_log: ChannelLog<f32>,

    num_episodes: usize,

    render_handle: Option<RenderHandle>,
}

impl SampleLogger {
    /// Constructs a logger for samples taken every `dt` seconds.
    pub fn new(dt: f32) -> Self {
        Self::build(LoggerConfig::default().dt(dt))
    }

    /// Constructs a logger from a configuration.
    pub fn build(config: LoggerConfig) -> Self {
        Self {
            config,
            state_log: ChannelLog::new(),
            reward_log: ChannelLog::new(),
            num_episodes: 0,
            render_handle: None,
        }
    }

    /// Time between samples.
    pub fn dt(&self) -> f32 {
        self.config.dt
    }

    /// Logged states.
    pub fn state_log(&self) -> &ChannelLog<StateValue> {
        &self.state_log
    }

    /// Logged reward terms, weighted by the number of episodes.
    pub fn reward_log(&self) -> &ChannelLog<f32> {
        &self.reward_log
    }

    /// Total number of episodes given to [`SampleLogger::log_rewards`].
    pub fn num_episodes(&self) -> usize {
        self.num_episodes
    }

    /// Appends a sample to a channel.
    pub fn log_state(&mut self, key: impl Into<String>, value: impl Into<StateValue>) {
        self.state_log.push(key, value.into());
    }

    /// Appends a sample to each of the given channels.
    pub fn log_states<K, V, I>(&mut self, states: I)
    where
        K: Into<String>,
        V: Into<StateValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (k, v) in states {
            self.log_state(k, v);
        }
    }

    /// Logs reward terms averaged over a batch of `num_episodes` episodes.
    ///
    /// Each term is stored multiplied by `num_episodes`. A boxed value that
    /// does not hold exactly one element is an error; terms before it stay
    /// logged and the episode count is left unchanged.
    pub fn log_rewards<K, V, I>(&mut self, rewards: I, num_episodes: usize) -> Result<()>
    where
        K: Into<String>,
        V: Into<RewardValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (k, v) in rewards {
            let k = k.into();
            let v: RewardValue = v.into();
            let v = v.unwrap_scalar(&k)?;
            self.reward_log.push(k, v * num_episodes as f32);
        }
        self.num_episodes += num_episodes;
        Ok(())
    }

    /// Clears logged states and reward terms.
    ///
    /// The number of episodes is kept.
    pub fn reset(&mut self) {
        self.state_log.clear();
        self.reward_log.clear();
    }

    /// Plots the logged states on a background thread.
    ///
    /// When oscillator phases and vertical contact forces were logged, the gait
    /// table is written to `path`. Figures are drawn if `visualize` is `true`.
    /// This method returns without waiting for the plots. Failures while
    /// plotting are logged, not returned.
    pub fn plot_states(&mut self, path: impl AsRef<Path>, visualize: bool) -> Result<()> {
        let job = PlotJob {
            states: self.state_log.clone(),
            output: path.as_ref().to_path_buf(),
            visualize,
            config: self.config.clone(),
        };
        if self.render_handle.is_some() {
            debug!("Replacing the handle of a previous plot worker");
        }
        self.render_handle = Some(RenderHandle::spawn(job)?);
        Ok(())
    }

    /// Returns `true` if a plot worker was started and has not finished yet.
    pub fn is_rendering(&self) -> bool {
        self.render_handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }

    /// Takes the handle of the last plot worker.
    ///
    /// The worker is then no longer stopped when the logger is dropped.
    pub fn take_render_handle(&mut self) -> Option<RenderHandle> {
        self.render_handle.take()
    }

    /// Prints the reward terms and writes them to `path`.
    ///
    /// `path` gets one row per reward term and a last row with the total number of episodes.
    pub fn print_rewards(&self, path: impl AsRef<Path>) -> Result<()> {
        let summary = RewardSummary::new(&self.reward_log, self.num_episodes);
        summary.print();
        summary.write(path.as_ref())
    }
}

impl Drop for SampleLogger {
    fn drop(&mut self) {
        if let Some(handle) = self.render_handle.take() {
            if !handle.is_finished() {
                info!("Terminating plot worker");
            }
            handle.terminate();
        }
    }
}
