use std::time::{Duration, Instant};

/// Simulated playback position standing in for a real media player.
pub struct PlaybackClock {
    pub playing: bool,
    last_tick: Instant,
}

impl PlaybackClock {
    pub fn new(playing: bool) -> Self {
        Self {
            playing,
            last_tick: Instant::now(),
        }
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
        self.last_tick = Instant::now();
    }

    /// Seconds of playback since the last call, or `None` if less than
    /// `tick` has passed. Always zero while paused.
    pub fn advance(&mut self, tick: Duration) -> Option<f64> {
        let elapsed = self.last_tick.elapsed();
        if elapsed < tick {
            return None;
        }
        self.last_tick = Instant::now();
        Some(if self.playing { elapsed.as_secs_f64() } else { 0.0 })
    }
}

/// Next position after `delta` seconds, stopping at `total`.
pub fn next_position(current: f64, delta: f64, total: f64) -> (f64, bool) {
    let next = current + delta;
    if next >= total {
        (total, true)
    } else {
        (next, false)
    }
}
