//! Background plotting.
use crate::plot::PlotJob;
use anyhow::{anyhow, Result};
use log::{info, warn};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::JoinHandle,
};

/// Handle of a [`PlotJob`] running on a detached thread.
///
/// Dropping the handle neither waits for nor stops the job.
/// [`RenderHandle::terminate`] asks the job to stop at its next checkpoint.
pub struct RenderHandle {
    /// Flag to stop rendering.
    pub(crate) stop: Arc<AtomicBool>,

    thread: JoinHandle<Result<()>>,
}

impl RenderHandle {
    /// Starts `job` on a new thread.
    ///
    /// Failures of the job are logged. They only reach a caller that
    /// waits with [`RenderHandle::join`].
    pub fn spawn(job: PlotJob) -> Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let thread = {
            let stop = stop.clone();
            std::thread::Builder::new()
                .name("plot-worker".to_string())
                .spawn(move || {
                    info!("Starts plot worker for {}", job.output.display());
                    let r = job.run(&stop);
                    match &r {
                        Ok(()) => info!("Plot worker finished"),
                        Err(e) => warn!("Plot worker stopped: {}", e),
                    }
                    r
                })?
        };
        Ok(Self { stop, thread })
    }

    /// Asks the job to stop without waiting for it.
    pub fn terminate(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Returns `true` if the job has finished, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Waits for the job to finish and returns its result.
    pub fn join(self) -> Result<()> {
        self.thread
            .join()
            .map_err(|_| anyhow!("Plot worker panicked"))?
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        channels::ChannelLog, config::LoggerConfig, error::LoggerError, plot::test::gait_rollout,
        value::StateValue,
    };
    use tempdir::TempDir;
    use test_log::test;

    #[test]
    fn test_spawn_and_join() -> Result<()> {
        let dir = TempDir::new("render")?;
        let mut states = ChannelLog::new();
        states.push("dof_pos", StateValue::from(0.1f32));
        let job = PlotJob {
            states,
            output: dir.path().join("states.csv"),
            visualize: false,
            config: LoggerConfig::default(),
        };

        let handle = RenderHandle::spawn(job)?;
        handle.join()?;
        Ok(())
    }

    #[test]
    fn test_join_reports_job_error() -> Result<()> {
        let dir = TempDir::new("render")?;
        let mut states = ChannelLog::new();
        for _ in 0..3 {
            states.push("oscillators", StateValue::from([0.0f32, 1.0]));
            states.push("contact_forces_z", StateValue::from([50.0f32, 0.0]));
        }
        let job = PlotJob {
            states,
            output: dir.path().join("gait.csv"),
            visualize: false,
            config: LoggerConfig::default(),
        };

        let e = RenderHandle::spawn(job)?.join().err().expect("gait table needs base_vel_x");
        assert!(matches!(
            e.downcast_ref::<LoggerError>(),
            Some(LoggerError::MissingChannel(key)) if key == "base_vel_x"
        ));
        Ok(())
    }

    #[test]
    fn test_terminate() -> Result<()> {
        let dir = TempDir::new("render")?;
        let (_, states) = gait_rollout(100_000, 4);
        let job = PlotJob {
            states,
            output: dir.path().join("gait.csv"),
            visualize: true,
            config: LoggerConfig::default(),
        };

        let handle = RenderHandle::spawn(job)?;
        handle.terminate();
        let e = handle.join().err().expect("terminated job must not complete");
        assert!(matches!(e.downcast_ref::<LoggerError>(), Some(LoggerError::Cancelled)));
        assert!(!dir.path().join("gait_states.svg").exists());
        Ok(())
    }
}
