use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Tracks whether the screen is still mounted.
///
/// Work started while mounted is abandoned once `unmount` is called, so a
/// late response never reaches the notifier or the router.
#[derive(Debug, Clone)]
pub struct MountScope {
    mounted: Arc<watch::Sender<bool>>,
}

impl Default for MountScope {
    fn default() -> Self {
        Self::new()
    }
}

impl MountScope {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(true);
        Self {
            mounted: Arc::new(tx),
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        *self.mounted.borrow()
    }

    /// Mark the screen as gone. Safe to call more than once.
    pub fn unmount(&self) {
        self.mounted.send_replace(false);
    }

    /// Resolves once the screen unmounts.
    pub async fn unmounted(&self) {
        let mut rx = self.mounted.subscribe();
        // The sender lives in `self`, so this only ends on unmount
        let _ = rx.wait_for(|mounted| !*mounted).await;
    }

    /// Drive `fut` to completion unless the screen unmounts first, in which
    /// case the future is dropped and `None` is returned.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if !self.is_mounted() {
            return None;
        }
        tokio::select! {
            biased;
            () = self.unmounted() => None,
            out = fut => Some(out),
        }
    }
}
