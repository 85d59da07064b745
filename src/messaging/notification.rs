// Notifications - engine → UI updates

/// Updates the scheduling thread publishes for display layers
/// Delivery is best-effort; a full ring drops rather than blocks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    /// A step was committed to the instrument layer
    StepScheduled { step: usize, time: f64 },

    /// Playback stopped and all pending triggers were cancelled
    TransportStopped,
}
