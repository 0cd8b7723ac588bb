//! Stop flag shared by the signal task and the server.
//!
//! A `watch` channel holds a single boolean. Once raised it stays raised,
//! so a listener created after the trigger still stops immediately.

use tokio::sync::watch;

/// Owner side of the stop flag. Clones share the same flag.
#[derive(Debug, Clone)]
pub struct Shutdown {
    flag: watch::Sender<bool>,
}

/// Listener side, handed to the server.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    flag: watch::Receiver<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (flag, _) = watch::channel(false);
        Self { flag }
    }

    pub fn signal(&self) -> ShutdownSignal {
        ShutdownSignal {
            flag: self.flag.subscribe(),
        }
    }

    /// Raise the flag. Raising it again has no further effect.
    pub fn trigger(&self) {
        self.flag.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.flag.borrow()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownSignal {
    /// Resolve once the flag is raised or every `Shutdown` is gone.
    pub async fn wait(mut self) {
        let _ = self.flag.wait_for(|stopped| *stopped).await;
    }
}
