use crate::aggregate::run_probe;
use lagmark_core::{ProbeReport, ProbeSpec};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info};

/// Upper bound on concurrent probe workers
pub const MAX_WORKERS: usize = 5;

/// Run every probe across a bounded worker pool and collect one report
/// per probe.
///
/// Worker count is `min(specs.len(), MAX_WORKERS)`. Probes are handed out
/// through a single shared queue; all attempts for one probe stay inside
/// one worker, so each report is built without shared state and published
/// whole. Returns only after the queue is drained and every worker has
/// exited. Report order is worker completion order, not input order.
pub async fn run_probes(specs: Vec<ProbeSpec>) -> Vec<ProbeReport> {
    if specs.is_empty() {
        return Vec::new();
    }

    let worker_count = specs.len().min(MAX_WORKERS);
    let (job_tx, job_rx) = mpsc::channel::<ProbeSpec>(specs.len());
    let (report_tx, mut report_rx) = mpsc::channel::<ProbeReport>(specs.len());
    let job_rx = Arc::new(Mutex::new(job_rx));

    info!("Initializing {} workers", worker_count);

    let mut handles = Vec::with_capacity(worker_count);
    for worker_id in 0..worker_count {
        let job_rx = job_rx.clone();
        let report_tx = report_tx.clone();
        handles.push(tokio::spawn(async move {
            loop {
                // The lock is held only for the queue pull, not the run
                let spec = job_rx.lock().await.recv().await;
                let Some(spec) = spec else { break };

                let name = spec.name.clone();
                let report = run_probe(&spec).await;
                if report_tx.send(report).await.is_err() {
                    break;
                }
                info!("Completed probe '{}'", name);
            }
            debug!("Worker {} shutting down", worker_id);
        }));
    }
    drop(report_tx);

    for spec in specs {
        // Queue capacity equals the probe count, so this never blocks
        if job_tx.send(spec).await.is_err() {
            break;
        }
    }
    drop(job_tx);

    let mut reports = Vec::new();
    while let Some(report) = report_rx.recv().await {
        reports.push(report);
    }

    for handle in handles {
        let _ = handle.await;
    }

    reports
}
