//! Summary of logged reward terms.
use crate::channels::ChannelLog;
use anyhow::Result;
use csv::WriterBuilder;
use log::info;
use std::path::Path;

/// Label of the last row of the summary.
pub const TOTAL_EPISODES: &str = "Total number of episodes";

/// Summary of the episode-weighted reward terms.
///
/// Each term is reported with the first value in its buffer, not an average
/// over the buffer.
pub struct RewardSummary<'a> {
    rewards: &'a ChannelLog<f32>,
    num_episodes: usize,
}

impl<'a> RewardSummary<'a> {
    /// Creates a summary of `rewards` over `num_episodes` episodes.
    pub fn new(rewards: &'a ChannelLog<f32>, num_episodes: usize) -> Self {
        Self {
            rewards,
            num_episodes,
        }
    }

    /// Rows of the summary, the total number of episodes last.
    pub fn rows(&self) -> Vec<(String, String)> {
        let mut rows: Vec<(String, String)> = self
            .rewards
            .iter()
            .filter_map(|(k, v)| v.first().map(|r| (k.to_string(), format!("{:?}", r))))
            .collect();
        rows.push((TOTAL_EPISODES.to_string(), self.num_episodes.to_string()));
        rows
    }

    /// Prints all reward terms to stdout.
    pub fn print(&self) {
        println!("Average rewards per second:");
        for (k, v) in self.rewards.iter() {
            println!(" - {}: {:?}", k, v);
        }
        println!("{}: {}", TOTAL_EPISODES, self.num_episodes);
    }

    /// Writes the rows as comma separated values to `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;
        for (k, v) in self.rows() {
            wtr.write_record(&[k, v])?;
        }
        wtr.flush()?;
        info!("Wrote reward summary to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rows() {
        let mut rewards = ChannelLog::new();
        rewards.push("tracking_lin_vel", 8.0f32);
        rewards.push("torques", -0.5);
        rewards.push("tracking_lin_vel", 6.0);

        let rows = RewardSummary::new(&rewards, 12).rows();
        assert_eq!(
            rows,
            vec![
                ("tracking_lin_vel".to_string(), "8.0".to_string()),
                ("torques".to_string(), "-0.5".to_string()),
                (TOTAL_EPISODES.to_string(), "12".to_string()),
            ]
        );
    }

    #[test]
    fn test_rows_without_rewards() {
        let rows = RewardSummary::new(&ChannelLog::new(), 0).rows();
        assert_eq!(rows, vec![(TOTAL_EPISODES.to_string(), "0".to_string())]);
    }
}
