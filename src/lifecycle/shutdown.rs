//! Graceful shutdown for the proxy.
//!
//! A `watch` channel carries one flag. Once it flips, every
//! [`ShutdownSignal`] resolves, including ones taken after the flip, so a
//! server that starts late still stops.

use tokio::sync::watch;

/// Owner side: flips the flag once.
pub struct Shutdown {
    stopping: watch::Sender<bool>,
}

/// Listener side: handed to the HTTP server as its graceful-shutdown future.
#[derive(Clone)]
pub struct ShutdownSignal {
    stopping: watch::Receiver<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (stopping, _) = watch::channel(false);
        Self { stopping }
    }

    pub fn signal(&self) -> ShutdownSignal {
        ShutdownSignal {
            stopping: self.stopping.subscribe(),
        }
    }

    /// Ask every server holding a signal to drain and stop.
    pub fn trigger(&self) {
        self.stopping.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.stopping.borrow()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownSignal {
    /// Resolve once shutdown is triggered or the owner is gone.
    pub async fn wait(mut self) {
        while !*self.stopping.borrow_and_update() {
            if self.stopping.changed().await.is_err() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_trigger_releases_every_signal() {
        let shutdown = Shutdown::new();
        let first = shutdown.signal();
        let second = shutdown.signal();

        shutdown.trigger();
        assert!(shutdown.is_triggered());
        first.wait().await;
        second.wait().await;
    }

    #[tokio::test]
    async fn test_signal_taken_after_trigger_still_resolves() {
        let shutdown = Shutdown::new();
        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), shutdown.signal().wait())
            .await
            .expect("late signal should resolve immediately");
    }

    #[tokio::test]
    async fn test_signal_waits_until_triggered() {
        let shutdown = Shutdown::new();
        let pending = tokio::time::timeout(Duration::from_millis(50), shutdown.signal().wait()).await;
        assert!(pending.is_err());
    }

    #[tokio::test]
    async fn test_dropped_owner_releases_signal() {
        let shutdown = Shutdown::new();
        let signal = shutdown.signal();
        drop(shutdown);
        signal.wait().await;
    }
}
