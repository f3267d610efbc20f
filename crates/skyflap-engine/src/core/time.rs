/// Fixed-step frame clock.
/// Turns variable host frame times into a whole number of fixed logic steps.
#[derive(Debug, Clone)]
pub struct FrameClock {
    dt: f32,
    max_steps: u32,
    accumulator: f32,
}

impl FrameClock {
    pub fn new(dt: f32, max_steps: u32) -> Self {
        Self {
            dt,
            max_steps: max_steps.max(1),
            accumulator: 0.0,
        }
    }

    /// Add frame time and return the number of fixed steps to run.
    /// Long stalls (tab in background) are capped at `max_steps` so the
    /// game never tries to catch up on seconds of logic at once.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Switch step length and cap. Any partial step is dropped.
    pub fn reconfigure(&mut self, dt: f32, max_steps: u32) {
        self.dt = dt;
        self.max_steps = max_steps.max(1);
        self.accumulator = 0.0;
    }
}
