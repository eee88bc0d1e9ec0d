//! Export of the gait table.
use super::check_stop;
use crate::{
    channels::{columns, ChannelLog},
    error::LoggerError,
    value::StateValue,
};
use anyhow::Result;
use csv::WriterBuilder;
use log::info;
use std::{path::Path, sync::atomic::AtomicBool};

/// Channels exported after the time column, in column order.
pub const GAIT_TABLE_CHANNELS: [&str; 8] = [
    "base_vel_x",
    "command_x",
    "oscillators",
    "oscillators_vel",
    "contact_forces_z",
    "grf",
    "torques",
    "velocities",
];

/// Builds the columns of the gait table, starting with the time column.
pub fn gait_table(time: &[f32], states: &ChannelLog<StateValue>) -> Result<Vec<Vec<f32>>, LoggerError> {
    let mut table = vec![time.to_vec()];

    for key in GAIT_TABLE_CHANNELS.iter() {
        let samples = states
            .get(key)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LoggerError::MissingChannel(key.to_string()))?;
        if samples.len() != time.len() {
            return Err(LoggerError::ShapeMismatch {
                channel: key.to_string(),
                expected: time.len(),
                actual: samples.len(),
            });
        }
        table.extend(columns(key, samples)?);
    }

    Ok(table)
}

/// Writes the gait table to `path` as comma separated values, one row per timestep.
pub fn write_gait_table(
    path: &Path,
    time: &[f32],
    states: &ChannelLog<StateValue>,
    stop: &AtomicBool,
) -> Result<()> {
    let table = gait_table(time, states)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;

    for i in 0..time.len() {
        check_stop(stop)?;
        wtr.write_record(table.iter().map(|col| col[i].to_string()))?;
    }
    wtr.flush()?;

    info!(
        "Wrote gait table ({} rows, {} columns) to {}",
        time.len(),
        table.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::plot::test::gait_rollout;
    use csv::ReaderBuilder;
    use tempdir::TempDir;

    #[test]
    fn test_gait_table_layout() -> Result<()> {
        let (time, states) = gait_rollout(5, 4);
        let table = gait_table(&time, &states)?;

        // time, vel_x, command_x, 4 phases, 4 rates, 4 forces, 4 grf, 12 torques, 12 velocities
        assert_eq!(table.len(), 1 + 1 + 1 + 4 * 4 + 12 + 12);
        assert!(table.iter().all(|c| c.len() == 5));
        assert_eq!(table[0], time);
        Ok(())
    }

    #[test]
    fn test_gait_table_missing_channel() {
        let (time, mut states) = gait_rollout(3, 4);
        let mut pruned = ChannelLog::new();
        for (k, v) in states.iter() {
            if k != "grf" {
                for s in v.iter() {
                    pruned.push(k, s.clone());
                }
            }
        }
        states = pruned;

        match gait_table(&time, &states) {
            Err(LoggerError::MissingChannel(key)) => assert_eq!(key, "grf"),
            r => panic!("Unexpected result: {:?}", r.map(|t| t.len())),
        }
    }

    #[test]
    fn test_write_gait_table() -> Result<()> {
        let (time, states) = gait_rollout(6, 4);
        let dir = TempDir::new("gait_table")?;
        let path = dir.path().join("gait.csv");

        write_gait_table(&path, &time, &states, &AtomicBool::new(false))?;

        let mut rdr = ReaderBuilder::new().has_headers(false).from_path(&path)?;
        let rows = rdr.records().collect::<Result<Vec<_>, _>>()?;
        assert_eq!(rows.len(), 6);
        for (row, t) in rows.iter().zip(time.iter()) {
            assert_eq!(row.len(), 43);
            assert_eq!(row[0].parse::<f32>()?, *t);
        }
        Ok(())
    }

    #[test]
    fn test_write_gait_table_cancelled() -> Result<()> {
        let (time, states) = gait_rollout(6, 4);
        let dir = TempDir::new("gait_table")?;
        let path = dir.path().join("gait.csv");

        let r = write_gait_table(&path, &time, &states, &AtomicBool::new(true));
        let e = r.err().expect("cancelled export must fail");
        assert!(matches!(e.downcast_ref::<LoggerError>(), Some(LoggerError::Cancelled)));
        Ok(())
    }
}
