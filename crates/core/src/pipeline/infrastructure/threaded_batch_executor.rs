use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crate::pipeline::batch_executor::{BatchExecutor, BatchReport, FailurePolicy, JobTask};
use crate::pipeline::output_naming::RoundJob;
use crate::shared::constants::JOB_QUEUE_CAPACITY;
use crate::shared::error::RoundError;

/// Runs jobs on a fixed pool of worker threads.
///
/// Layout: `main [feed] → jobs channel → N workers → outcomes channel → main [collect]`
///
/// Every worker is joined before `execute` returns.
pub struct ThreadedBatchExecutor {
    workers: usize,
    channel_capacity: usize,
}

impl ThreadedBatchExecutor {
    /// `workers = 0` picks the available parallelism.
    pub fn new(workers: usize) -> Self {
        let workers = if workers == 0 {
            thread::available_parallelism().map_or(1, |n| n.get())
        } else {
            workers
        };
        Self {
            workers,
            channel_capacity: JOB_QUEUE_CAPACITY,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Default for ThreadedBatchExecutor {
    fn default() -> Self {
        Self::new(0)
    }
}

impl BatchExecutor for ThreadedBatchExecutor {
    fn execute(&self, jobs: Vec<RoundJob>, task: JobTask<'_>, policy: FailurePolicy) -> BatchReport {
        let total = jobs.len();
        let workers = self.workers.min(total).max(1);
        let cancelled = AtomicBool::new(false);

        let (job_tx, job_rx) = crossbeam_channel::bounded::<RoundJob>(self.channel_capacity);
        let (outcome_tx, outcome_rx) =
            crossbeam_channel::unbounded::<(RoundJob, Result<(), RoundError>)>();

        log::debug!("Processing {total} file(s) on {workers} worker(s)");

        thread::scope(|scope| {
            for _ in 0..workers {
                let job_rx = job_rx.clone();
                let outcome_tx = outcome_tx.clone();
                let cancelled = &cancelled;
                scope.spawn(move || run_worker(job_rx, outcome_tx, task, cancelled, policy));
            }
            drop(job_rx);
            drop(outcome_tx);

            feed_jobs(jobs, &job_tx, &cancelled);
            drop(job_tx);

            collect_outcomes(outcome_rx, total)
        })
    }
}

fn run_worker(
    job_rx: crossbeam_channel::Receiver<RoundJob>,
    outcome_tx: crossbeam_channel::Sender<(RoundJob, Result<(), RoundError>)>,
    task: JobTask<'_>,
    cancelled: &AtomicBool,
    policy: FailurePolicy,
) {
    for job in job_rx {
        if cancelled.load(Ordering::Relaxed) {
            break;
        }
        let result = task(&job);
        if result.is_err() && policy == FailurePolicy::FailFast {
            cancelled.store(true, Ordering::Relaxed);
        }
        if outcome_tx.send((job, result)).is_err() {
            break;
        }
    }
}

fn feed_jobs(
    jobs: Vec<RoundJob>,
    job_tx: &crossbeam_channel::Sender<RoundJob>,
    cancelled: &AtomicBool,
) {
    for job in jobs {
        if cancelled.load(Ordering::Relaxed) {
            break;
        }
        if job_tx.send(job).is_err() {
            break;
        }
    }
}

fn collect_outcomes(
    outcome_rx: crossbeam_channel::Receiver<(RoundJob, Result<(), RoundError>)>,
    total: usize,
) -> BatchReport {
    let mut report = BatchReport {
        total,
        ..BatchReport::default()
    };
    for (job, result) in outcome_rx {
        match result {
            Ok(()) => report.succeeded += 1,
            Err(e) => {
                log::error!("{}: {e}", job.input.display());
                report.failures.push((job.input, e));
            }
        }
    }
    report
}
