//! Figure of the oscillator phases against contact forces and time.
use super::panel::{Marker, Panel, Series};
use crate::{
    channels::{columns, ChannelLog},
    error::LoggerError,
    value::StateValue,
};

fn column<'a>(cols: &'a [Vec<f32>], i: usize, key: &str) -> Result<&'a [f32], LoggerError> {
    cols.get(i)
        .map(|c| c.as_slice())
        .ok_or_else(|| LoggerError::ShapeMismatch {
            channel: key.to_string(),
            expected: i + 1,
            actual: cols.len(),
        })
}

/// Builds the panels of the gait figure, row by row.
///
/// The figure has three rows and one column per oscillator:
/// phase against scaled ground reaction force, phase against phase rate and
/// phase over time.
pub fn gait_panels(time: &[f32], states: &ChannelLog<StateValue>) -> Result<Vec<Panel>, LoggerError> {
    let phases = columns("oscillators", states.samples("oscillators"))?;
    let rates = columns("oscillators_vel", states.samples("oscillators_vel"))?;
    let grf = columns("grf", states.samples("grf"))?;
    let n = phases.len();

    let mut panels = Vec::with_capacity(3 * n);

    for (i, phase) in phases.iter().enumerate() {
        let series = Series::new(format!("force {}", i), "grf", phase, column(&grf, i, "grf")?, Marker::Line)?;
        panels.push(
            Panel::new(
                "Vertical Contact forces normalized by body weight",
                "phase [/]",
                "Forces z [/]",
            )
            .with_series(vec![series]),
        );
    }

    // TODO: wrap the phase to [0, 2pi) before plotting so the jump does not show up as a line
    for (i, phase) in phases.iter().enumerate() {
        let series = Series::new(
            format!("phase rate of change {}", i),
            "oscillators_vel",
            phase,
            column(&rates, i, "oscillators_vel")?,
            Marker::Dot,
        )?;
        panels.push(
            Panel::new("Phase", "phase [/]", "dt * phase rate of change [/]").with_series(vec![series]),
        );
    }

    for (i, phase) in phases.iter().enumerate() {
        let series = Series::new(format!("Phase over time {}", i), "oscillators", time, phase, Marker::Line)?;
        panels.push(Panel::new("Phase", "time [s]", "phase [/]").with_series(vec![series]));
    }

    Ok(panels)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::plot::test::gait_rollout;

    #[test]
    fn test_gait_panels() -> anyhow::Result<()> {
        let (time, states) = gait_rollout(10, 4);
        let panels = gait_panels(&time, &states)?;

        assert_eq!(panels.len(), 12);
        assert_eq!(panels[0].series[0].label, "force 0");
        assert_eq!(panels[5].series[0].marker, Marker::Dot);
        assert_eq!(panels[11].series[0].label, "Phase over time 3");
        assert!(panels.iter().all(|p| p.series[0].points.len() == 10));
        Ok(())
    }

    #[test]
    fn test_gait_panels_missing_grf() {
        let (time, full) = gait_rollout(10, 4);
        let mut states = ChannelLog::new();
        for (k, v) in full.iter().filter(|(k, _)| *k != "grf") {
            for s in v.iter() {
                states.push(k, s.clone());
            }
        }
        assert!(matches!(
            gait_panels(&time, &states),
            Err(LoggerError::ShapeMismatch { .. })
        ));
    }
}
