//! Insertion-ordered storage of named sample sequences.
use crate::{error::LoggerError, value::StateValue};
use std::collections::HashMap;
use xxhash_rust::xxh3::Xxh3Builder;

/// Named, append-only sequences of samples.
///
/// Channels are iterated in the order they were first pushed to. Within a
/// channel, samples keep the order in which they were pushed.
#[derive(Debug, Clone)]
pub struct ChannelLog<T> {
    /// Position of each channel in `channels`.
    index: HashMap<String, usize, Xxh3Builder>,

    channels: Vec<(String, Vec<T>)>,
}

impl<T> Default for ChannelLog<T> {
    fn default() -> Self {
        Self {
            index: HashMap::default(),
            channels: Vec::new(),
        }
    }
}

impl<T> ChannelLog<T> {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to the channel `key`, creating the channel if absent.
    pub fn push(&mut self, key: impl Into<String>, value: T) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&i) => self.channels[i].1.push(value),
            None => {
                self.index.insert(key.clone(), self.channels.len());
                self.channels.push((key, vec![value]));
            }
        }
    }

    /// Returns the samples of a channel.
    pub fn get(&self, key: &str) -> Option<&[T]> {
        self.index
            .get(key)
            .map(|&i| self.channels[i].1.as_slice())
    }

    /// Returns the samples of a channel, or an empty slice if the channel was never logged.
    pub fn samples(&self, key: &str) -> &[T] {
        self.get(key).unwrap_or(&[])
    }

    /// Returns `true` if the channel has at least one sample.
    pub fn contains(&self, key: &str) -> bool {
        !self.samples(key).is_empty()
    }

    /// Returns the first channel in insertion order.
    pub fn first(&self) -> Option<(&str, &[T])> {
        self.channels
            .first()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Iterates over channels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.channels.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns `true` if no channel has been logged.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Removes all channels.
    pub fn clear(&mut self) {
        self.index.clear();
        self.channels.clear();
    }
}

/// Splits the samples of a channel into columns.
///
/// A scalar channel yields one column, a vector channel one column per
/// element. Matrix samples are flattened in row-major order.
pub fn columns(key: &str, samples: &[StateValue]) -> Result<Vec<Vec<f32>>, LoggerError> {
    let width = match samples.first() {
        Some(s) => s.width(),
        None => return Ok(vec![]),
    };
    let mut cols = vec![Vec::with_capacity(samples.len()); width];

    for s in samples.iter() {
        let flat = s.flatten();
        if flat.len() != width {
            return Err(LoggerError::ShapeMismatch {
                channel: key.to_string(),
                expected: width,
                actual: flat.len(),
            });
        }
        for (col, v) in cols.iter_mut().zip(flat.iter()) {
            col.push(*v);
        }
    }

    Ok(cols)
}
