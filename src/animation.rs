//! Time-based animation frame selection for animated tiles.
//!
//! The host's update loop calls [`AnimationState::advance`] once per render
//! tick with that tick's elapsed time; nothing here depends on any engine
//! scheduler. Stopping an animation is simply not calling `advance`, which
//! leaves the state frozen at its last value.

/// One animation frame: how long it shows and which texture index it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFrame {
    /// Display duration in milliseconds.
    pub duration_ms: u32,
    /// Index of the texture/frame to display.
    pub frame_index: u8,
}

impl AnimationFrame {
    /// Creates a frame.
    pub fn new(duration_ms: u32, frame_index: u8) -> Self {
        AnimationFrame {
            duration_ms,
            frame_index,
        }
    }
}

/// Sum of all frame durations in milliseconds; the period after which frame
/// selection wraps. Zero means the animation is static.
pub fn cycle_duration(frames: &[AnimationFrame]) -> u32 {
    frames.iter().map(|f| f.duration_ms).sum()
}

/// Mutable per-tile animation clock.
///
/// Exclusively owned by the tile instance it animates; created when the
/// tile becomes animated and dropped with it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    elapsed_ms: f64,
    current_frame: u8,
}

impl AnimationState {
    /// Fresh state at frame 0.
    pub fn new() -> Self {
        AnimationState::default()
    }

    /// The frame chosen by the most recent [`advance`](Self::advance) call.
    pub fn current_frame(&self) -> u8 {
        self.current_frame
    }

    /// Milliseconds accumulated into the current cycle.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Rewinds to frame 0 with no accumulated time.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
        self.current_frame = 0;
    }

    /// Accumulates `delta_seconds` of playback and returns the frame index
    /// now active.
    ///
    /// The frame order is `frames` as given for `playback_speed >= 0` and
    /// reversed for negative speeds; the speed's magnitude scales time, so
    /// zero freezes the clock. The active frame is the first of the
    /// effective order whose cumulative duration exceeds the accumulated
    /// time. When the accumulated time reaches the cycle duration the clock
    /// resets, but the frame returned for this call is still the one chosen
    /// before the reset; the wrap shows on the next call.
    ///
    /// An empty frame list or a zero cycle leaves the state untouched and
    /// reports the last-known frame.
    pub fn advance(
        &mut self,
        delta_seconds: f64,
        playback_speed: f64,
        frames: &[AnimationFrame],
    ) -> u8 {
        let cycle = cycle_duration(frames) as f64;
        if frames.is_empty() || cycle <= 0.0 {
            return self.current_frame;
        }

        self.elapsed_ms += delta_seconds * 1000.0 * playback_speed.abs();

        let reversed = playback_speed < 0.0;
        let n = frames.len();
        let mut running = 0.0;
        let mut selected = None;
        for i in 0..n {
            let frame = if reversed { frames[n - 1 - i] } else { frames[i] };
            running += frame.duration_ms as f64;
            if self.elapsed_ms < running {
                selected = Some(frame.frame_index);
                break;
            }
        }
        // Past the cycle end the last frame of the effective order holds
        // until the wrap takes effect.
        let frame = selected.unwrap_or_else(|| {
            let last = if reversed { frames[0] } else { frames[n - 1] };
            last.frame_index
        });

        if self.elapsed_ms >= cycle {
            self.elapsed_ms = 0.0;
        }
        self.current_frame = frame;
        frame
    }
}
