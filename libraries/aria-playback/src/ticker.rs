//! Elapsed-time tick scheduling
//!
//! Produces one tick message per interval on a dedicated thread while
//! playback is running. The displayed counter advances by message count
//! rather than by reading the clock, which keeps the transport display on
//! a stable cadence and lets tests inject ticks deterministically.

use crossbeam_channel::{after, bounded, select, unbounded, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// Interval tick source scoped to "is playing"
///
/// `start` spawns the interval thread; `stop` (and drop) interrupts it
/// immediately through a stop channel and joins it, so no timer thread
/// ever outlives the session that created it.
pub(crate) struct Ticker {
    interval: Duration,
    tick_tx: Sender<()>,
    tick_rx: Receiver<()>,
    running: Option<TickerThread>,
}

struct TickerThread {
    stop_tx: Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for TickerThread {
    fn drop(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Ticker {
    pub(crate) fn new(interval: Duration) -> Self {
        let (tick_tx, tick_rx) = unbounded();
        Self {
            interval,
            tick_tx,
            tick_rx,
            running: None,
        }
    }

    /// Begin emitting ticks; already-running tickers are left alone
    pub(crate) fn start(&mut self) {
        if self.running.is_some() {
            return;
        }

        let (stop_tx, stop_rx) = bounded(1);
        let tick_tx = self.tick_tx.clone();
        let interval = self.interval;

        let thread = thread::spawn(move || loop {
            select! {
                recv(stop_rx) -> _ => break,
                recv(after(interval)) -> _ => {
                    if tick_tx.send(()).is_err() {
                        break;
                    }
                }
            }
        });

        self.running = Some(TickerThread {
            stop_tx,
            thread: Some(thread),
        });
    }

    /// Stop emitting ticks and join the interval thread
    ///
    /// Ticks still sitting in the channel are flushed so they cannot leak
    /// into a later playback run.
    pub(crate) fn stop(&mut self) {
        self.running = None;
        self.tick_rx.try_iter().for_each(drop);
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Take every tick produced since the last drain
    pub(crate) fn drain(&self) -> u64 {
        self.tick_rx.try_iter().count() as u64
    }

    /// Inject a tick without waiting for the interval thread
    #[cfg(test)]
    pub(crate) fn push_tick(&self) {
        let _ = self.tick_tx.send(());
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
