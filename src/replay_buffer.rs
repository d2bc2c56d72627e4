use ndarray::Array1;
use rand::Rng;
use std::collections::VecDeque;

// Upper bound on the storage reserved up front; the deque grows past it on demand.
const INITIAL_RESERVATION: usize = 1024;

/// One recorded transition. Never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Experience {
    pub state: Array1<f64>,
    pub action: usize,
    pub reward: f64,
    pub terminal: bool,
    pub next_state: Array1<f64>,
}

impl Experience {
    pub fn new(state: Array1<f64>, action: usize, reward: f64, terminal: bool, next_state: Array1<f64>) -> Self {
        Experience { state, action, reward, terminal, next_state }
    }
}

/// Bounded FIFO store of experiences. Index 0 is always the oldest entry.
///
/// A capacity of 0 disables storage entirely.
#[derive(Clone, Debug)]
pub struct ReplayBuffer {
    buffer: VecDeque<Experience>,
    capacity: usize,
}

impl ReplayBuffer {
    pub fn new(capacity: usize) -> Self {
        ReplayBuffer {
            buffer: VecDeque::with_capacity(capacity.min(INITIAL_RESERVATION)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Experience> {
        self.buffer.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Experience> {
        self.buffer.iter()
    }

    /// Append an experience, evicting the oldest one first when full.
    pub fn add(&mut self, experience: Experience) {
        if self.capacity == 0 {
            return;
        }
        self.evict_if_full();
        self.buffer.push_back(experience);
    }

    /// Store an experience, skipping zero-reward transitions with probability
    /// `prioritization`.
    ///
    /// The oldest entry is evicted whenever the buffer is full, even when the
    /// new experience ends up being skipped. Returns whether it was inserted.
    pub fn record<R: Rng + ?Sized>(&mut self, experience: Experience, prioritization: f64, rng: &mut R) -> bool {
        if self.capacity == 0 {
            return false;
        }
        self.evict_if_full();

        if experience.reward == 0.0 && rng.gen::<f64>() < prioritization {
            return false;
        }
        self.buffer.push_back(experience);
        true
    }

    /// Pick one stored experience uniformly at random.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Experience> {
        if self.buffer.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.buffer.len());
        self.buffer.get(index)
    }

    /// Change the capacity, dropping the oldest entries if the buffer no longer fits.
    pub fn resize(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.buffer.len() > capacity {
            self.buffer.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    fn evict_if_full(&mut self) {
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
        }
    }
}
