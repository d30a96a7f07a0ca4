//! Layer time mapping.

/// Maps media (parent) time onto a layer's local time.
///
/// `local = (parent - begin_time) * speed + time_offset`
///
/// A layer with `speed == 0` is frozen at `time_offset`; that is how a running
/// animation is paused in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerTiming {
    /// Parent time at which local time starts counting.
    pub begin_time: f64,
    /// Rate of local time relative to parent time.
    pub speed: f64,
    /// Local time added after scaling.
    pub time_offset: f64,
}

impl Default for LayerTiming {
    fn default() -> Self {
        Self {
            begin_time: 0.0,
            speed: 1.0,
            time_offset: 0.0,
        }
    }
}

impl LayerTiming {
    /// Local time corresponding to `parent_time`.
    pub fn local_time(&self, parent_time: f64) -> f64 {
        (parent_time - self.begin_time) * self.speed + self.time_offset
    }

    /// Returns true while local time is frozen.
    pub fn is_paused(&self) -> bool {
        self.speed == 0.0
    }

    /// Freeze local time at its value for `parent_time` and return it.
    pub fn pause(&mut self, parent_time: f64) -> f64 {
        let paused = self.local_time(parent_time);
        self.speed = 0.0;
        self.time_offset = paused;
        paused
    }

    /// Let local time run again from where [`pause`](Self::pause) froze it.
    pub fn resume(&mut self, parent_time: f64) {
        let paused = self.time_offset;
        self.speed = 1.0;
        self.time_offset = 0.0;
        self.begin_time = 0.0;
        self.begin_time = self.local_time(parent_time) - paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_timing() {
        let timing = LayerTiming::default();
        assert_eq!(timing.local_time(3.5), 3.5);
        assert!(!timing.is_paused());
    }

    #[test]
    fn test_pause_freezes_local_time() {
        let mut timing = LayerTiming::default();
        assert_eq!(timing.pause(2.0), 2.0);
        assert!(timing.is_paused());
        assert_eq!(timing.local_time(10.0), 2.0);
    }

    #[test]
    fn test_resume_continues_from_pause() {
        let mut timing = LayerTiming::default();
        timing.pause(2.0);
        timing.resume(7.0);

        assert!((timing.local_time(7.0) - 2.0).abs() < 1e-12);
        assert!((timing.local_time(7.5) - 2.5).abs() < 1e-12);
    }
}
