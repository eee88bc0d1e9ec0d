use anyhow::Result;
use border_rollout_logger::{LoggerConfig, RewardValue, SampleLogger, StateValue};
use log::info;
use std::{f32::consts::PI, fs};

const DT: f32 = 0.02;
const N_STEPS: usize = 500;
const N_LEGS: usize = 4;
const N_JOINTS: usize = 12;

/// Trotting gait: diagonal legs share a phase.
const PHASE_OFFSETS: [f32; N_LEGS] = [0.0, PI, PI, 0.0];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let out_dir = "border-rollout-logger/examples/gait_rollout";
    fs::create_dir_all(out_dir)?;

    let config = LoggerConfig::default().dt(DT).figure_size(2000, 1200);
    let mut logger = SampleLogger::build(config);
    let frequency = 2.0;
    let command_x = 0.6f32;

    for step in 0..N_STEPS {
        let t = step as f32 * DT;
        let phases: Vec<f32> = PHASE_OFFSETS
            .iter()
            .map(|o| (2.0 * PI * frequency * t + o) % (2.0 * PI))
            .collect();
        let stance: Vec<f32> = phases
            .iter()
            .map(|p| if *p < PI { p.sin() } else { 0.0 })
            .collect();
        let dof_pos: Vec<f32> = (0..N_JOINTS)
            .map(|j| 0.4 * (phases[j / 3] + 0.3 * j as f32).sin())
            .collect();
        let dof_vel: Vec<f32> = dof_pos.iter().map(|q| 2.0 * PI * frequency * q).collect();
        let torques: Vec<f32> = dof_pos.iter().map(|q| -20.0 * q).collect();

        logger.log_states(vec![
            ("base_vel_x", StateValue::from(command_x + 0.05 * (4.0 * PI * t).sin())),
            ("base_vel_y", StateValue::from(0.02 * (2.0 * PI * t).cos())),
            ("base_vel_z", StateValue::from(0.05 * (4.0 * PI * frequency * t).sin())),
            ("base_vel_yaw", StateValue::from(0.0f32)),
            ("command_x", StateValue::from(command_x)),
            ("command_y", StateValue::from(0.0f32)),
            ("command_yaw", StateValue::from(0.0f32)),
            ("dof_pos", StateValue::from(dof_pos[2])),
            ("dof_pos_target", StateValue::from(dof_pos[2] * 1.1)),
            ("dof_vel", StateValue::from(dof_vel[2])),
            ("dof_torque", StateValue::from(torques[2])),
            ("oscillators", StateValue::from(phases.clone())),
            ("oscillators_vel", StateValue::from(vec![2.0 * PI * frequency * DT; N_LEGS])),
            (
                "contact_forces_z",
                StateValue::from(stance.iter().map(|s| 120.0 * s).collect::<Vec<f32>>()),
            ),
            ("grf", StateValue::from(stance)),
            ("torques", StateValue::from(torques)),
            ("velocities", StateValue::from(dof_vel)),
        ]);

        // Episodes of a batch of environments end every 100 steps
        if (step + 1) % 100 == 0 {
            logger.log_rewards(
                vec![
                    ("tracking_lin_vel", RewardValue::from(0.9f32)),
                    ("torques", RewardValue::boxed(vec![-0.02])),
                ],
                16,
            )?;
        }
    }

    logger.plot_states(format!("{}/states.csv", out_dir), true)?;
    logger.print_rewards(format!("{}/rewards.csv", out_dir))?;

    // The process would exit before the figures are drawn otherwise
    if let Some(handle) = logger.take_render_handle() {
        handle.join()?;
    }
    info!("Outputs written to {}", out_dir);

    Ok(())
}
