use std::time::Duration;

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, warn};

use crate::{client::PortfolioApi, entities::health::HealthReport};

/// Background `/health` poller feeding a status indicator.
///
/// Polls once immediately and then every `period`. Failed polls are logged
/// and skipped; the last good reading stays visible. Dropping the monitor
/// cancels the task, `shutdown` also waits for it to finish.
pub struct HealthMonitor {
    status: watch::Receiver<Option<HealthReport>>,
    cancel: CancellationToken,
    _guard: DropGuard,
    task: JoinHandle<()>,
}

impl HealthMonitor {
    pub fn spawn(api: PortfolioApi, period: Duration) -> Self {
        let (tx, rx) = watch::channel(None);
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        match api.fetch_health().await {
                            Ok(report) => {
                                debug!(status = ?report.status, "Health poll");
                                tx.send_replace(Some(report));
                            }
                            Err(e) => warn!("Health check failed: {}", e),
                        }
                    }
                }
            }

            debug!("Health monitor stopped");
        });

        HealthMonitor {
            status: rx,
            _guard: cancel.clone().drop_guard(),
            cancel,
            task,
        }
    }

    /// Most recent successful reading, if any.
    pub fn latest(&self) -> Option<HealthReport> {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<HealthReport>> {
        self.status.clone()
    }

    /// Waits until at least one reading has arrived. Returns `None` if the
    /// monitor stopped first.
    pub async fn first_reading(&mut self) -> Option<HealthReport> {
        self.status
            .wait_for(|s| s.is_some())
            .await
            .ok()
            .and_then(|r| r.clone())
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    pub async fn shutdown(self) {
        let HealthMonitor { cancel, _guard, task, .. } = self;
        cancel.cancel();
        drop(_guard);

        if let Err(e) = task.await {
            warn!("Health monitor task ended abnormally: {}", e);
        }
    }
}
