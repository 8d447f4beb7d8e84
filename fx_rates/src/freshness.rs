//! Background freshness clock.
//!
//! The clock owns a single thread that wakes on a fixed period and records "now" as the
//! last refresh instant. Readers load the instant from an `AtomicI64` (microseconds since
//! the Unix epoch) and never wait on the writer.
//!
//! Shutdown:
//! - `shutdown()` signals the thread over a stop channel and joins it; once it returns
//!   the stored instant no longer changes.
//! - Calling `shutdown()` again is a no-op. `Drop` calls it as well.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{DateTime, Utc};
use crossbeam_channel::{Sender, select, unbounded};
use fx_common::Result;
use log::{debug, info, warn};

/// Cancellable repeating task that advances a shared "last refresh" instant.
pub struct FreshnessClock {
    last_refresh: Arc<AtomicI64>,
    stop_tx: Mutex<Option<Sender<()>>>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl FreshnessClock {
    /// Stamp the current instant and start ticking every `period`.
    pub fn start(period: Duration) -> Result<Self> {
        let last_refresh = Arc::new(AtomicI64::new(Utc::now().timestamp_micros()));
        let (stop_tx, stop_rx) = unbounded::<()>();
        let stamp = Arc::clone(&last_refresh);

        let handle = thread::Builder::new()
            .name(String::from("rate-refresh"))
            .spawn(move || {
                let ticker = crossbeam_channel::tick(period);
                loop {
                    select! {
                        recv(stop_rx) -> _ => break,
                        recv(ticker) -> tick => match tick {
                            Ok(_) => {
                                stamp.store(Utc::now().timestamp_micros(), Ordering::Release);
                                debug!("Rate data refreshed");
                            }
                            Err(_) => break,
                        },
                    }
                }
                info!("Rate refresh clock stopped");
            })?;

        info!("Rate refresh clock started, period {:?}", period);
        Ok(Self {
            last_refresh,
            stop_tx: Mutex::new(Some(stop_tx)),
            handle: Mutex::new(Some(handle)),
        })
    }

    /// Most recent refresh instant.
    pub fn last_refresh(&self) -> DateTime<Utc> {
        let micros = self.last_refresh.load(Ordering::Acquire);
        DateTime::from_timestamp_micros(micros).unwrap_or_default()
    }

    /// `true` until `shutdown` has completed.
    pub fn is_running(&self) -> bool {
        self.handle
            .lock()
            .map(|handle| handle.as_ref().is_some_and(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    /// Stop ticking and wait for the background thread to exit.
    pub fn shutdown(&self) -> Result<()> {
        if let Some(stop_tx) = self.stop_tx.lock()?.take() {
            // A send error means the thread is already gone.
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.lock()?.take() {
            if handle.join().is_err() {
                warn!("Rate refresh thread panicked");
            }
        }
        Ok(())
    }
}

impl Drop for FreshnessClock {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            warn!("Failed to stop rate refresh clock: {}", e);
        }
    }
}
