//! Cooperative shutdown.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A shared flag telling the render loop to stop.
///
/// The flag is only checked between the loop iterations, so a frame is never interrupted
/// in the middle of copying or rendering.
#[derive(Clone, Debug, Default)]
pub struct ShutdownToken(Arc<AtomicBool>);

impl ShutdownToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the render loop to stop.
    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Returns true if the shutdown has been requested.
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// A platform specific source of shutdown requests.
pub trait ShutdownNotifier {
    /// Makes the notifier request the shutdown on the given token.
    fn register(&self, token: &ShutdownToken) -> std::io::Result<()>;
}

/// Requests shutdown on `SIGINT` and `SIGTERM`.
///
/// The signal handler only stores into the token flag.
#[cfg(unix)]
#[derive(Clone, Copy, Debug, Default)]
pub struct UnixSignals;

#[cfg(unix)]
impl ShutdownNotifier for UnixSignals {
    fn register(&self, token: &ShutdownToken) -> std::io::Result<()> {
        use signal_hook::consts::{SIGINT, SIGTERM};

        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, token.0.clone())?;
        }
        Ok(())
    }
}
