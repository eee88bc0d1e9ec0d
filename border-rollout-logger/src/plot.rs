//! Plotting of logged states.
//!
//! [`PlotJob`] owns a snapshot of the state log and runs the whole plotting
//! routine: the gait table and the gait figure when oscillator phases and
//! contact forces were logged, then the state figure. Figures are drawn as
//! SVG files with [`plotters`].
//!
//! [`SampleLogger::plot_states`](crate::SampleLogger::plot_states) runs a
//! [`PlotJob`] on a background thread; [`PlotJob::run`] can also be called
//! directly to plot synchronously.
mod gait;
mod panel;
mod states;
mod table;

pub use gait::gait_panels;
pub use panel::{Marker, Panel, Series};
pub use states::state_panels;
pub use table::{gait_table, write_gait_table, GAIT_TABLE_CHANNELS};

use crate::{channels::ChannelLog, config::LoggerConfig, error::LoggerError, value::StateValue};
use anyhow::Result;
use log::{debug, info};
use panel::plot_err;
use plotters::prelude::*;
use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};

/// Returns [`LoggerError::Cancelled`] once `stop` has been raised.
pub(crate) fn check_stop(stop: &AtomicBool) -> Result<(), LoggerError> {
    if stop.load(Ordering::SeqCst) {
        Err(LoggerError::Cancelled)
    } else {
        Ok(())
    }
}

/// Time axis of the logged states.
///
/// The axis has as many points as the first logged channel has samples,
/// spaced by `dt` starting at zero. It is empty if nothing was logged.
pub fn time_axis(states: &ChannelLog<StateValue>, dt: f32) -> Vec<f32> {
    let n = states.first().map(|(_, v)| v.len()).unwrap_or(0);
    (0..n).map(|i| i as f32 * dt).collect()
}

/// Draws `panels` on a grid of `shape` (rows, columns) into an SVG file.
fn draw_figure(
    path: &Path,
    size: (u32, u32),
    shape: (usize, usize),
    panels: &[Panel],
    stop: &AtomicBool,
) -> Result<()> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let areas = root.split_evenly(shape);
    for (area, panel) in areas.iter().zip(panels.iter()) {
        check_stop(stop)?;
        panel.draw(area)?;
    }
    root.present().map_err(plot_err)?;

    info!("Saved figure to {}", path.display());
    Ok(())
}

/// The plotting routine over a snapshot of the state log.
#[derive(Debug, Clone)]
pub struct PlotJob {
    /// Logged states.
    pub states: ChannelLog<StateValue>,

    /// Path of the gait table.
    pub output: PathBuf,

    /// If `true`, figures are drawn.
    pub visualize: bool,

    /// Time between samples, sizes and location of figures.
    pub config: LoggerConfig,
}

impl PlotJob {
    /// Runs the plotting routine.
    ///
    /// Returns [`LoggerError::Cancelled`] if `stop` is raised before completion.
    /// The flag is only checked before each row of the gait table and before
    /// each panel is drawn. Building the table and the panels, or drawing a
    /// single panel, runs to its end once started.
    pub fn run(&self, stop: &AtomicBool) -> Result<()> {
        let time = time_axis(&self.states, self.config.dt);
        let draw = self.visualize && self.config.render;
        let (width, height) = self.config.figure_size;

        if self.states.contains("oscillators") && self.states.contains("contact_forces_z") {
            write_gait_table(&self.output, &time, &self.states, stop)?;

            let panels = gait_panels(&time, &self.states)?;
            let n_cols = panels.len() / 3;
            if draw && n_cols > 0 {
                let path = self.config.figure_path(&self.output, "gait");
                draw_figure(&path, (width, height), (3, n_cols), &panels, stop)?;
            }
        } else {
            debug!("Oscillators or contact forces not logged, skip gait table");
        }

        let panels = state_panels(&time, &self.states)?;
        if draw {
            let path = self.config.figure_path(&self.output, "states");
            draw_figure(&path, (width, height), (3, 3), &panels, stop)?;
        }

        Ok(())
    }
}
