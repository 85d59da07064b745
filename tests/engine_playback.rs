//! End-to-end playback tests driving the threaded Player
//!
//! Deterministic runs use ManualClock so trigger times are exact; one test
//! exercises the real wall clock to cover the actual timer loop.

use codebeat_engine::{
    ManualClock, MemoryDispatch, Notification, PlaybackError, Player, SystemClock, TimelineState,
    TrackId, create_notification_channel, merge_pattern, shared_timeline,
};
use ringbuf::traits::Consumer;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Poll until the condition holds or the timeout elapses
fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    condition()
}

/// One bar, kick active on every step
fn kick_every_step() -> TimelineState {
    let mut state = TimelineState::new(1, 16);
    let id = state.add_clip(0, 0, 16).unwrap();
    let clip = state.tracks[0].clip_mut(&id).unwrap();
    for step in clip.steps.iter_mut() {
        step.active = true;
    }
    state
}

/// One bar, kick active only on step 0
fn kick_on_step_zero() -> TimelineState {
    let mut state = TimelineState::new(1, 16);
    let id = state.add_clip(0, 0, 16).unwrap();
    state.toggle_step(0, &id, 0);
    state
}

#[test]
fn plays_and_stops_on_the_wall_clock() {
    let dispatch = Arc::new(MemoryDispatch::new());
    let mut player = Player::new(
        shared_timeline(kick_every_step()),
        dispatch.clone(),
        Arc::new(SystemClock::new()),
    );

    player.play().unwrap();
    assert!(player.is_playing());

    // At 120 BPM steps land every 125ms; a few must arrive quickly
    assert!(wait_until(Duration::from_secs(2), || {
        dispatch.triggers().len() >= 2
    }));

    player.stop();
    assert!(!player.is_playing());

    // Scenario C: nothing fires after stop() returns
    let settled = dispatch.triggers().len();
    std::thread::sleep(Duration::from_millis(150));
    assert_eq!(dispatch.triggers().len(), settled);
}

#[test]
fn restart_begins_again_at_step_zero() {
    let dispatch = Arc::new(MemoryDispatch::new());
    let clock = ManualClock::new();
    let mut player = Player::new(
        shared_timeline(kick_on_step_zero()),
        dispatch.clone(),
        Arc::new(clock.clone()),
    );

    player.play().unwrap();
    assert!(wait_until(Duration::from_secs(2), || {
        dispatch.triggers().len() == 1
    }));
    assert!(dispatch.triggers()[0].time.abs() < 1e-6);

    // Restart mid-loop: the new run re-anchors step 0 to the current time
    clock.set(0.5);
    player.play().unwrap();
    assert!(wait_until(Duration::from_secs(2), || {
        dispatch.triggers().len() == 2
    }));
    let second = dispatch.triggers()[1];
    assert_eq!(second.track, TrackId::Kick);
    assert!((second.time - 0.5).abs() < 1e-6);

    player.stop();
    let settled = dispatch.triggers().len();
    clock.advance(10.0);
    std::thread::sleep(Duration::from_millis(100));
    assert_eq!(dispatch.triggers().len(), settled);
}

#[test]
fn refuses_to_start_when_dispatch_not_ready() {
    let dispatch = Arc::new(MemoryDispatch::new());
    dispatch.set_ready(false);

    let mut player = Player::new(
        shared_timeline(kick_every_step()),
        dispatch.clone(),
        Arc::new(SystemClock::new()),
    );

    assert!(matches!(
        player.play(),
        Err(PlaybackError::DispatchNotReady)
    ));
    assert!(!player.is_playing());
    assert!(dispatch.triggers().is_empty());

    // Recoverable: once the instrument layer is up, playback starts
    dispatch.set_ready(true);
    player.play().unwrap();
    assert!(player.is_playing());
    player.stop();
}

#[test]
fn stop_is_idempotent() {
    let dispatch = Arc::new(MemoryDispatch::new());
    let mut player = Player::new(
        shared_timeline(kick_every_step()),
        dispatch,
        Arc::new(SystemClock::new()),
    );

    player.stop();
    player.stop();
    assert!(!player.is_playing());

    player.play().unwrap();
    player.stop();
    player.stop();
    assert!(!player.is_playing());
}

#[test]
fn live_mute_silences_later_steps() {
    let dispatch = Arc::new(MemoryDispatch::new());
    let clock = ManualClock::new();
    let mut player = Player::new(
        shared_timeline(kick_every_step()),
        dispatch.clone(),
        Arc::new(clock.clone()),
    );

    player.play().unwrap();
    assert!(wait_until(Duration::from_secs(2), || {
        !dispatch.triggers().is_empty()
    }));

    // Mute through the shared handle, then let time pass: the scheduler
    // re-reads state each tick, so no further kicks arrive
    player.timeline().lock().unwrap().set_mute(0, true);
    let before = dispatch.triggers().len();
    clock.advance(2.0);
    std::thread::sleep(Duration::from_millis(150));
    assert_eq!(dispatch.triggers().len(), before);

    player.stop();
}

#[test]
fn notifications_track_scheduled_steps() {
    let (tx, mut rx) = create_notification_channel(64);
    let dispatch = Arc::new(MemoryDispatch::new());
    let clock = ManualClock::new();
    let mut state = TimelineState::new(1, 16);
    merge_pattern(&mut state, &[1, 0]);

    let mut player = Player::new(shared_timeline(state), dispatch, Arc::new(clock.clone()))
        .with_notifications(tx);

    player.play().unwrap();
    assert!(wait_until(Duration::from_secs(2), || {
        player.is_playing()
    }));
    clock.advance(0.25);
    std::thread::sleep(Duration::from_millis(100));
    player.stop();

    let mut steps = Vec::new();
    let mut saw_stop = false;
    while let Some(notification) = rx.try_pop() {
        match notification {
            Notification::StepScheduled { step, .. } => steps.push(step),
            Notification::TransportStopped => saw_stop = true,
        }
    }

    assert!(!steps.is_empty());
    assert_eq!(steps[0], 0);
    assert!(saw_stop);
}
