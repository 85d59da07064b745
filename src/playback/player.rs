// Player - owns the scheduling thread and the play/stop lifecycle
// Bridges the pure Transport onto a real timer and shared timeline state

use crate::messaging::channels::NotificationProducer;
use crate::messaging::notification::Notification;
use crate::playback::clock::EngineClock;
use crate::playback::dispatch::InstrumentDispatch;
use crate::playback::transport::Transport;
use crate::timeline::state::TimelineState;
use ringbuf::traits::Producer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;
use std::time::Duration;

/// The timeline has one writer context (UI/mutations) and one reader
/// context (the scheduler tick); both take this lock briefly
pub type SharedTimeline = Arc<Mutex<TimelineState>>;

/// Wrap a timeline for sharing with a player
pub fn shared_timeline(state: TimelineState) -> SharedTimeline {
    Arc::new(Mutex::new(state))
}

/// Recoverable playback startup failures
/// The player always returns to a safe Stopped state
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("instrument dispatch is not ready")]
    DispatchNotReady,

    #[error("failed to spawn scheduler thread: {0}")]
    Scheduler(#[from] std::io::Error),
}

/// How often the scheduling thread wakes to refill the lookahead window
const TICK_INTERVAL: Duration = Duration::from_millis(25);

/// Playback engine with an explicit create → play/stop → drop lifecycle
///
/// `play` while already playing stops the previous run completely before
/// starting the new one; two schedulers never run over the same
/// instruments. `stop` while stopped is a no-op.
pub struct Player {
    timeline: SharedTimeline,
    dispatch: Arc<dyn InstrumentDispatch>,
    clock: Arc<dyn EngineClock>,
    notifications: Option<Arc<Mutex<NotificationProducer>>>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Player {
    pub fn new(
        timeline: SharedTimeline,
        dispatch: Arc<dyn InstrumentDispatch>,
        clock: Arc<dyn EngineClock>,
    ) -> Self {
        Self {
            timeline,
            dispatch,
            clock,
            notifications: None,
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Attach a channel that receives a notification per scheduled step
    pub fn with_notifications(mut self, producer: NotificationProducer) -> Self {
        self.notifications = Some(Arc::new(Mutex::new(producer)));
        self
    }

    /// Handle to the shared timeline for live mutation
    pub fn timeline(&self) -> SharedTimeline {
        Arc::clone(&self.timeline)
    }

    pub fn is_playing(&self) -> bool {
        self.handle.is_some() && self.running.load(Ordering::Relaxed)
    }

    /// Start playback from step 0
    ///
    /// Refuses to start while the instrument dispatch reports not ready;
    /// in that case no thread is spawned and no timers are registered.
    pub fn play(&mut self) -> Result<(), PlaybackError> {
        if !self.dispatch.is_ready() {
            return Err(PlaybackError::DispatchNotReady);
        }

        // Restart cleanly: release the previous run first
        self.stop();

        self.running.store(true, Ordering::Relaxed);
        let running = Arc::clone(&self.running);
        let timeline = Arc::clone(&self.timeline);
        let dispatch = Arc::clone(&self.dispatch);
        let clock = Arc::clone(&self.clock);
        let notifications = self.notifications.clone();

        let handle = std::thread::Builder::new()
            .name("codebeat-scheduler".to_string())
            .spawn(move || {
                let mut transport = Transport::new();
                transport.begin(clock.now());

                while running.load(Ordering::Relaxed) {
                    {
                        let state = lock_unpoisoned(&timeline);
                        transport.tick_with(
                            &state,
                            clock.now(),
                            dispatch.as_ref(),
                            &mut |step, time| notify(&notifications, Notification::StepScheduled { step, time }),
                        );
                    }
                    std::thread::sleep(TICK_INTERVAL);
                }

                transport.halt();
            })?;

        self.handle = Some(handle);
        log::info!("playback started");
        Ok(())
    }

    /// Stop playback and cancel everything scheduled but not yet fired
    ///
    /// Joins the scheduling thread, so no trigger call happens after this
    /// returns. Idempotent.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            self.dispatch.cancel_pending();
            notify(&self.notifications, Notification::TransportStopped);
            log::info!("playback stopped");
        }
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.stop();
    }
}

fn lock_unpoisoned(timeline: &SharedTimeline) -> MutexGuard<'_, TimelineState> {
    timeline
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Best-effort push; a full ring drops the update instead of blocking
fn notify(producer: &Option<Arc<Mutex<NotificationProducer>>>, notification: Notification) {
    if let Some(producer) = producer {
        let mut producer = producer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if producer.try_push(notification).is_err() {
            log::warn!("notification ring full, dropping {:?}", notification);
        }
    }
}
