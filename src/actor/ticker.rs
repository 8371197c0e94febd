//! Ticker Actor: Dedicated thread that paces automatic rotation.
//!
//! The ticker only produces [`Tick`] values on a bounded channel. It never
//! touches rotator state; the owner drains ticks on its own thread, so
//! rotations never overlap.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A tick event sent once per interval.
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    /// Tick number (monotonically increasing, starting at 0).
    pub frame: u64,
    /// Time elapsed since the ticker was started.
    pub elapsed: Duration,
}

/// Ticker actor that emits a [`Tick`] every `interval`.
///
/// Dropping the actor stops and joins its thread.
pub struct TickerActor {
    /// Handle to the ticker thread.
    handle: Option<JoinHandle<()>>,
    /// Wakes the thread for shutdown; disconnecting it does the same.
    shutdown_tx: Sender<()>,
    /// Receiver for tick events.
    tick_rx: Receiver<Tick>,
    /// Period between ticks.
    interval: Duration,
}

impl TickerActor {
    /// Spawn a new ticker. The first tick arrives after one full `interval`.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn the ticker thread.
    pub fn spawn(interval: Duration) -> io::Result<Self> {
        let (shutdown_tx, shutdown_rx) = bounded(1);

        // Small buffer: a slow owner skips rotations instead of replaying them
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("rotating-text-ticker".to_string())
            .spawn(move || {
                Self::run_loop(&tick_tx, &shutdown_rx, interval);
            })?;

        log::debug!("ticker started with interval {interval:?}");

        Ok(Self {
            handle: Some(handle),
            shutdown_tx,
            tick_rx,
            interval,
        })
    }

    /// Get a reference to the tick receiver.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// The period this ticker was spawned with.
    #[inline]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the ticker thread is still alive.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Signal the ticker to shutdown.
    pub fn shutdown(&self) {
        // Full means a shutdown is already pending
        let _ = self.shutdown_tx.try_send(());
    }

    /// Signal shutdown and wait for the thread to finish.
    pub fn stop(&mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            log::debug!("ticker with interval {:?} stopped", self.interval);
        }
    }

    /// Main ticker loop. Sleeps on the shutdown channel until the next tick.
    fn run_loop(tick_tx: &Sender<Tick>, shutdown_rx: &Receiver<()>, interval: Duration) {
        let start = Instant::now();
        let mut frame = 0u64;
        let mut next_tick = start + interval;

        loop {
            let now = Instant::now();
            if now < next_tick {
                match shutdown_rx.recv_timeout(next_tick - now) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }

            let tick = Tick {
                frame,
                elapsed: now - start,
            };
            match tick_tx.try_send(tick) {
                Ok(()) => log::trace!("tick {frame}"),
                Err(TrySendError::Full(_)) => {
                    log::debug!("tick {frame} dropped, owner is behind");
                }
                Err(TrySendError::Disconnected(_)) => break,
            }

            frame += 1;
            next_tick += interval;

            // Behind schedule: resync instead of bursting
            if next_tick < now {
                next_tick = now + interval;
            }
        }
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for TickerActor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickerActor")
            .field("interval", &self.interval)
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}
