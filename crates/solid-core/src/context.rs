//! Execution Context: per-run settings handed to every example
use crate::coin::{Coin, RandomCoin};
use chrono::{DateTime, Utc};
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub trace_id: String,
    pub seed: Option<u64>,
    pub started_at: DateTime<Utc>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self {
            trace_id: uuid::Uuid::new_v4().to_string(),
            seed: None,
            started_at: Utc::now(),
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// A fresh coin. With a seed every call replays the same sequence.
    pub fn coin(&self) -> Rc<dyn Coin> {
        match self.seed {
            Some(seed) => Rc::new(RandomCoin::seeded(seed)),
            None => Rc::new(RandomCoin::from_entropy()),
        }
    }

    pub fn is_seeded(&self) -> bool {
        self.seed.is_some()
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new()
    }
}
