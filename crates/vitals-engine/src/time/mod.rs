//! Time subsystem.
//!
//! Provides the monotonic clocks and the per-cycle frame record used by the
//! performance calculator, without coupling to any runtime.
//! Intended usage:
//! - one clock per calculator, shared with whatever drives `on_frame`
//! - one `FrameTimestampWindow` per calculator, rotated every report cycle

mod clock;
mod frame_window;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use frame_window::{FrameTimestampWindow, MAX_TRACKED_FRAMES};
