use crate::CallbackState;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// A mounted callback page.
///
/// Unmounting (or dropping the handle) before the lookup has run cancels
/// it, and no navigation happens.
pub struct CallbackHandle {
    state: watch::Receiver<CallbackState>,
    task: Option<JoinHandle<()>>,
}

impl CallbackHandle {
    pub(crate) fn new(state: watch::Receiver<CallbackState>, task: JoinHandle<()>) -> Self {
        Self {
            state,
            task: Some(task),
        }
    }

    pub fn state(&self) -> CallbackState {
        self.state.borrow().clone()
    }

    /// Wait for the callback to reach a terminal state.
    pub async fn finished(mut self) -> CallbackState {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
        self.state()
    }

    pub fn unmount(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for CallbackHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
