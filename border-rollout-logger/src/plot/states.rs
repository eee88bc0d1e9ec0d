//! Figure of base velocities, joint states, contact forces and torques.
use super::panel::{Marker, Panel, Series};
use crate::{
    channels::{columns, ChannelLog},
    error::LoggerError,
    value::StateValue,
};

/// Series of a channel over time, one per column.
///
/// Returns no series if the channel is empty.
fn over_time(
    time: &[f32],
    states: &ChannelLog<StateValue>,
    key: &str,
    label: &str,
) -> Result<Vec<Series>, LoggerError> {
    let cols = columns(key, states.samples(key))?;
    let multi = cols.len() > 1;
    cols.iter()
        .enumerate()
        .map(|(i, col)| {
            let label = if multi {
                format!("{} {}", label, i)
            } else {
                label.to_string()
            };
            Series::new(label, key, time, col, Marker::Line)
        })
        .collect()
}

/// Joint torque against joint velocity, one series per joint.
fn torque_velocity(states: &ChannelLog<StateValue>) -> Result<Vec<Series>, LoggerError> {
    if !states.contains("dof_vel") || !states.contains("dof_torque") {
        return Ok(vec![]);
    }
    let vel = columns("dof_vel", states.samples("dof_vel"))?;
    let torque = columns("dof_torque", states.samples("dof_torque"))?;
    if vel.len() != torque.len() {
        return Err(LoggerError::ShapeMismatch {
            channel: "dof_torque".to_string(),
            expected: vel.len(),
            actual: torque.len(),
        });
    }
    vel.iter()
        .zip(torque.iter())
        .map(|(v, t)| Series::new("measured", "dof_torque", v, t, Marker::Cross))
        .collect()
}

/// Builds the nine panels of the state figure in row-major order.
pub fn state_panels(time: &[f32], states: &ChannelLog<StateValue>) -> Result<Vec<Panel>, LoggerError> {
    let lin_vel = "base lin vel [m/s]";
    let panels = vec![
        // row 0: commanded base motion
        Panel::new("Base velocity x", "time [s]", lin_vel)
            .with_series(over_time(time, states, "base_vel_x", "measured")?)
            .with_series(over_time(time, states, "command_x", "commanded")?),
        Panel::new("Base velocity y", "time [s]", lin_vel)
            .with_series(over_time(time, states, "base_vel_y", "measured")?)
            .with_series(over_time(time, states, "command_y", "commanded")?),
        Panel::new("Base velocity yaw", "time [s]", "base ang vel [rad/s]")
            .with_series(over_time(time, states, "base_vel_yaw", "measured")?)
            .with_series(over_time(time, states, "command_yaw", "commanded")?),
        // row 1: joints
        Panel::new("DOF Position", "time [s]", "Position [rad]")
            .with_series(over_time(time, states, "dof_pos", "measured")?)
            .with_series(over_time(time, states, "dof_pos_target", "target")?),
        Panel::new("Joint Velocity", "time [s]", "Velocity [rad/s]")
            .with_series(over_time(time, states, "dof_vel", "measured")?)
            .with_series(over_time(time, states, "dof_vel_target", "target")?),
        Panel::new("Base velocity z", "time [s]", lin_vel)
            .with_series(over_time(time, states, "base_vel_z", "measured")?),
        // row 2: contacts and torques
        Panel::new("Vertical Contact forces", "time [s]", "Forces z [N]")
            .with_series(over_time(time, states, "contact_forces_z", "force")?),
        Panel::new("Torque/velocity curves", "Joint vel [rad/s]", "Joint Torque [Nm]")
            .with_series(torque_velocity(states)?),
        Panel::new("Torque", "time [s]", "Joint Torque [Nm]")
            .with_series(over_time(time, states, "dof_torque", "measured")?),
    ];
    Ok(panels)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_state_panels_empty_log() -> anyhow::Result<()> {
        let panels = state_panels(&[], &ChannelLog::new())?;
        assert_eq!(panels.len(), 9);
        assert!(panels.iter().all(|p| p.series.is_empty()));
        assert_eq!(panels[7].x_desc, "Joint vel [rad/s]");
        Ok(())
    }

    #[test]
    fn test_state_panels_partial_log() -> anyhow::Result<()> {
        let dt = 0.02;
        let mut states = ChannelLog::new();
        for i in 0..4 {
            states.push("dof_pos", StateValue::from(i as f32 * 0.1));
            states.push("dof_pos_target", StateValue::from(0.3f32));
            states.push("contact_forces_z", StateValue::from([10.0f32, 0.0, 12.0, 0.5]));
        }
        let time: Vec<f32> = (0..4).map(|i| i as f32 * dt).collect();
        let panels = state_panels(&time, &states)?;

        let dof_pos = &panels[3];
        assert_eq!(dof_pos.series.len(), 2);
        assert_eq!(dof_pos.series[0].label, "measured");
        assert_eq!(dof_pos.series[1].label, "target");

        let forces = &panels[6];
        let labels: Vec<_> = forces.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["force 0", "force 1", "force 2", "force 3"]);

        // torque panels stay empty without dof_torque
        assert!(panels[7].series.is_empty());
        assert!(panels[8].series.is_empty());
        Ok(())
    }

    #[test]
    fn test_torque_velocity_scatter() -> anyhow::Result<()> {
        let mut states = ChannelLog::new();
        for i in 0..3 {
            states.push("dof_vel", StateValue::from([i as f32, -(i as f32)]));
            states.push("dof_torque", StateValue::from([2.0 * i as f32, 1.0]));
        }
        let series = torque_velocity(&states)?;
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].marker, Marker::Cross);
        assert_eq!(series[0].points, vec![(0.0, 0.0), (1.0, 2.0), (2.0, 4.0)]);
        Ok(())
    }
}
