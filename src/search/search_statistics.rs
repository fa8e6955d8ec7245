use serde::Serialize;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct SearchStatistics {
    /// Number of nodes taken off the frontier and expanded
    expanded_nodes: i64,
    /// Number of child nodes generated by expansions
    generated_nodes: i64,
    /// Number of generated children placed on the frontier
    enqueued_nodes: i64,
    /// Number of children rejected because they close a cycle
    cycle_pruned_nodes: i64,
    /// Number of children rejected because a path at least as cheap to their
    /// state is already known
    dominated_nodes: i64,
    /// Number of states reached again via a strictly cheaper path
    reopened_nodes: i64,
    /// Number of frontier entries skipped when popped as they had been
    /// superseded by a cheaper path
    stale_nodes: i64,
    /// Largest frontier size seen
    peak_frontier_size: usize,
    /// Time when the search started
    #[serde(skip)]
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    #[serde(skip)]
    last_log_time: Instant,
    /// Wall clock duration of the search, set when the search is finalised
    search_duration: Option<f64>,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            enqueued_nodes: 0,
            cycle_pruned_nodes: 0,
            dominated_nodes: 0,
            reopened_nodes: 0,
            stale_nodes: 0,
            peak_frontier_size: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
            search_duration: None,
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as i64;
        self.log_if_needed();
    }

    pub fn increment_enqueued_nodes(&mut self) {
        self.enqueued_nodes += 1;
    }

    pub fn increment_cycle_pruned_nodes(&mut self) {
        self.cycle_pruned_nodes += 1;
    }

    pub fn increment_dominated_nodes(&mut self) {
        self.dominated_nodes += 1;
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
    }

    pub fn increment_stale_nodes(&mut self) {
        self.stale_nodes += 1;
        self.log_if_needed();
    }

    pub fn register_frontier_size(&mut self, size: usize) {
        self.peak_frontier_size = self.peak_frontier_size.max(size);
    }

    pub fn expanded_nodes(&self) -> i64 {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> i64 {
        self.generated_nodes
    }

    pub fn enqueued_nodes(&self) -> i64 {
        self.enqueued_nodes
    }

    pub fn cycle_pruned_nodes(&self) -> i64 {
        self.cycle_pruned_nodes
    }

    pub fn dominated_nodes(&self) -> i64 {
        self.dominated_nodes
    }

    pub fn reopened_nodes(&self) -> i64 {
        self.reopened_nodes
    }

    pub fn stale_nodes(&self) -> i64 {
        self.stale_nodes
    }

    pub fn peak_frontier_size(&self) -> usize {
        self.peak_frontier_size
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            enqueued_nodes = self.enqueued_nodes,
            cycle_pruned_nodes = self.cycle_pruned_nodes,
            dominated_nodes = self.dominated_nodes,
            reopened_nodes = self.reopened_nodes,
            stale_nodes = self.stale_nodes,
            peak_frontier_size = self.peak_frontier_size,
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        let duration = self.search_start_time.elapsed().as_secs_f64();
        self.search_duration = Some(duration);
        info!(search_duration = duration);
    }
}
