use std::collections::vec_deque::{self, VecDeque};

/// Energy totals recorded after one fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySample {
    /// Simulated time of the sample, in seconds.
    pub time: f64,
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

/// Bounded time series of energy samples; the oldest sample is dropped first.
#[derive(Debug, Clone)]
pub struct EnergyHistory {
    samples: VecDeque<EnergySample>,
    capacity: usize,
}

impl EnergyHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, time: f64, kinetic: f64, potential: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(EnergySample {
            time,
            kinetic,
            potential,
            total: kinetic + potential,
        });
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&EnergySample> {
        self.samples.back()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, EnergySample> {
        self.samples.iter()
    }

    /// Largest total energy in the window, floored at 1.0 so graphs have a
    /// usable scale.
    pub fn max_total(&self) -> f64 {
        self.samples.iter().map(|s| s.total).fold(1.0, f64::max)
    }
}

impl<'a> IntoIterator for &'a EnergyHistory {
    type Item = &'a EnergySample;
    type IntoIter = vec_deque::Iter<'a, EnergySample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
