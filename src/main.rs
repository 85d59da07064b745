// CodeBeat engine demo - merge a generated pattern and audition it
// from the console through the real-time scheduler

use codebeat_engine::{
    InstrumentDispatch, Notification, Player, SystemClock, TimelineState, TrackId,
    create_notification_channel, merge_pattern, shared_timeline,
};
use ringbuf::traits::Consumer;
use std::sync::Arc;
use std::time::Duration;

const NOTIFICATION_RINGBUFFER_CAPACITY: usize = 256;

/// Prints each hit instead of making sound
/// Slots without a dedicated label fall back to a generic percussion tag
struct ConsoleDispatch;

impl InstrumentDispatch for ConsoleDispatch {
    fn trigger(&self, track: TrackId, time: f64, velocity: f32) {
        let sound = match track {
            TrackId::Kick => "kick",
            TrackId::Snare => "snare",
            TrackId::HatClosed => "hat",
            _ => "perc",
        };
        println!("  {sound:>5} @ {time:7.3}s  vel {velocity:.2}");
    }
}

fn main() {
    println!("=== CodeBeat Sequencer Engine ===\n");

    let mut state = TimelineState::new(2, 16);
    merge_pattern(&mut state, &[1, 0, 1, 0, 0, 1, 0, 0]);
    println!(
        "Merged demo pattern: {} bars, {} steps at {} BPM\n",
        state.bars(),
        state.total_steps(),
        state.tempo()
    );

    let (notification_tx, mut notification_rx) =
        create_notification_channel(NOTIFICATION_RINGBUFFER_CAPACITY);

    let mut player = Player::new(
        shared_timeline(state),
        Arc::new(ConsoleDispatch),
        Arc::new(SystemClock::new()),
    )
    .with_notifications(notification_tx);

    if let Err(e) = player.play() {
        eprintln!("ERROR: {e}");
        return;
    }

    std::thread::sleep(Duration::from_secs(2));
    player.stop();

    let mut scheduled = 0;
    while let Some(notification) = notification_rx.try_pop() {
        if matches!(notification, Notification::StepScheduled { .. }) {
            scheduled += 1;
        }
    }
    println!("\nScheduled {scheduled} steps. Done.");
}
