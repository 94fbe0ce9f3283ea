//! Parallel nearest-breakpoint resolution over flattened storm tracks
//!
//! Tasks share no mutable state: each worker reads the breakpoint registry
//! behind an `Arc` and resolves one observation at a time from a shared work
//! queue. A failed task aborts the run; results are only handed to the report
//! writer once every task has succeeded.

use std::collections::VecDeque;
use std::sync::Arc;

use indicatif::ProgressBar;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::app::models::{Observation, OutputRow, Storm};
use crate::app::services::breakpoint_registry::BreakpointRegistry;
use crate::app::services::nearest::nearest_breakpoint;
use crate::{Error, Result};

/// One unit of resolver work: a single observation with its storm context
#[derive(Debug, Clone)]
struct ResolveTask {
    storm_id: String,
    storm_name: String,
    observation: Observation,
}

/// Statistics from one pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    /// Storms that passed the selection predicate
    pub storms_selected: usize,

    /// Observations resolved against the registry
    pub observations_resolved: usize,
}

/// Pipeline result: sorted rows plus run statistics
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Report rows sorted by (storm identifier, timestamp)
    pub rows: Vec<OutputRow>,

    /// Run statistics
    pub stats: PipelineStats,
}

/// Nearest-breakpoint aggregation pipeline
pub struct TimelineProcessor {
    registry: Arc<BreakpointRegistry>,
    workers: usize,
}

impl TimelineProcessor {
    /// Create a processor over a shared breakpoint registry
    ///
    /// `workers` bounds the number of concurrent resolver tasks; at least one
    /// worker always runs.
    pub fn new(registry: Arc<BreakpointRegistry>, workers: usize) -> Self {
        Self {
            registry,
            workers: workers.max(1),
        }
    }

    /// Resolve every observation of every selected storm and return sorted
    /// report rows
    ///
    /// `predicate` selects which storms participate (the CLI passes a season
    /// year filter). An optional progress bar is advanced once per resolved
    /// observation.
    pub async fn run<F>(
        &self,
        storms: &[Storm],
        predicate: F,
        progress: Option<ProgressBar>,
    ) -> Result<PipelineResult>
    where
        F: Fn(&Storm) -> bool,
    {
        if self.registry.is_empty() {
            return Err(Error::EmptyReferenceSet);
        }

        // Flatten (storm, observation) pairs into an order-free task list
        let mut tasks: VecDeque<ResolveTask> = VecDeque::new();
        let mut storms_selected = 0;

        for storm in storms.iter().filter(|s| predicate(s)) {
            storms_selected += 1;
            debug!("Selected storm {} ({})", storm.storm_id, storm.name);
            for observation in &storm.observations {
                tasks.push_back(ResolveTask {
                    storm_id: storm.storm_id.clone(),
                    storm_name: storm.name.clone(),
                    observation: observation.clone(),
                });
            }
        }

        let task_count = tasks.len();
        info!(
            "Resolving {} observations from {} storms on {} workers",
            task_count, storms_selected, self.workers
        );

        let rows = self.resolve_all(tasks, progress).await?;

        Ok(PipelineResult {
            rows,
            stats: PipelineStats {
                storms_selected,
                observations_resolved: task_count,
            },
        })
    }

    /// Run the worker pool to completion and sort the collected rows
    async fn resolve_all(
        &self,
        tasks: VecDeque<ResolveTask>,
        progress: Option<ProgressBar>,
    ) -> Result<Vec<OutputRow>> {
        let task_count = tasks.len();
        let worker_count = self.workers.min(task_count.max(1));

        let work_queue = Arc::new(Mutex::new(tasks));
        let (sender, mut receiver) = mpsc::channel::<Result<OutputRow>>(worker_count.max(1) * 4);

        let mut workers: JoinSet<usize> = JoinSet::new();
        for worker_id in 0..worker_count {
            let work_queue = work_queue.clone();
            let registry = self.registry.clone();
            let sender = sender.clone();

            workers.spawn(async move {
                worker_task(worker_id, work_queue, registry, sender).await
            });
        }

        // Collector owns the only remaining receiver; dropping our sender
        // clone lets the channel close once all workers finish
        drop(sender);

        let mut rows = Vec::with_capacity(task_count);
        while let Some(result) = receiver.recv().await {
            match result {
                Ok(row) => {
                    rows.push(row);
                    if let Some(bar) = &progress {
                        bar.inc(1);
                    }
                }
                Err(e) => {
                    // Abandon outstanding tasks; nothing partial is emitted
                    workers.abort_all();
                    return Err(e);
                }
            }
        }

        // Surface worker panics
        while let Some(joined) = workers.join_next().await {
            joined.map_err(|e| {
                Error::data_validation(format!("Resolver worker failed: {}", e))
            })?;
        }

        // Deterministic output order regardless of worker scheduling
        rows.sort_by(|a, b| {
            a.storm_id
                .cmp(&b.storm_id)
                .then_with(|| a.date.cmp(&b.date))
        });

        Ok(rows)
    }
}

/// Worker task that resolves observations from the shared queue
async fn worker_task(
    worker_id: usize,
    work_queue: Arc<Mutex<VecDeque<ResolveTask>>>,
    registry: Arc<BreakpointRegistry>,
    sender: mpsc::Sender<Result<OutputRow>>,
) -> usize {
    let mut resolved = 0;

    debug!("Worker {} started", worker_id);

    loop {
        let task = {
            let mut queue = work_queue.lock().await;
            match queue.pop_front() {
                Some(task) => task,
                None => break,
            }
        };

        let result = resolve_task(&task, &registry);
        let failed = result.is_err();

        if sender.send(result).await.is_err() {
            // Collector stopped listening (a sibling task failed)
            break;
        }
        if failed {
            break;
        }
        resolved += 1;
    }

    debug!("Worker {} finished after {} tasks", worker_id, resolved);
    resolved
}

/// Resolve one task into a report row
fn resolve_task(task: &ResolveTask, registry: &BreakpointRegistry) -> Result<OutputRow> {
    let nearest = nearest_breakpoint(task.observation.location, registry)?;

    Ok(OutputRow {
        storm_id: task.storm_id.clone(),
        storm_name: task.storm_name.clone(),
        date: task.observation.date,
        record_identifier: task.observation.record_identifier.clone(),
        phase: task.observation.phase.clone(),
        latitude: task.observation.location.latitude,
        longitude: task.observation.location.longitude,
        winds: task.observation.winds,
        pressure: task.observation.pressure,
        breakpoint_name: nearest.breakpoint.name.clone(),
        state: nearest.breakpoint.state.clone(),
        country: nearest.breakpoint.country.clone(),
        miles: nearest.distance.miles(),
        kilometers: nearest.distance.km(),
        direction: nearest.direction,
    })
}
