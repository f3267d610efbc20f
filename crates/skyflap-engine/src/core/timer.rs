// core/timer.rs
//
// Scheduled countdowns keyed by a game-defined id.
// Replaces callback timers: `tick` returns the keys that fired this step and
// the game dispatches on them.
//
// Usage:
//   let mut timers = TimerSet::new();
//   timers.start_repeating(MyTimer::Spawn, 1.5);
//   for key in timers.tick(dt) { ... }

use std::fmt::Debug;

/// Shortest period a repeating timer may have, in seconds.
const MIN_PERIOD: f32 = 1.0e-3;

/// A single countdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    /// Seconds until the next fire.
    pub remaining: f32,
    /// Re-arm period for repeating timers.
    pub period: Option<f32>,
    /// Paused timers keep their remaining time.
    pub paused: bool,
}

impl Timer {
    pub fn once(delay: f32) -> Self {
        Self {
            remaining: delay.max(0.0),
            period: None,
            paused: false,
        }
    }

    pub fn repeating(period: f32) -> Self {
        let period = period.max(MIN_PERIOD);
        Self {
            remaining: period,
            period: Some(period),
            paused: false,
        }
    }
}

/// A small set of named timers. At most one timer per key.
#[derive(Debug, Clone)]
pub struct TimerSet<K> {
    timers: Vec<(K, Timer)>,
}

impl<K: Copy + PartialEq + Debug> TimerSet<K> {
    pub fn new() -> Self {
        Self { timers: Vec::new() }
    }

    /// Start (or restart) a one-shot timer.
    pub fn start_once(&mut self, key: K, delay: f32) {
        self.insert(key, Timer::once(delay));
    }

    /// Start (or restart) a repeating timer. The first fire is one period away.
    pub fn start_repeating(&mut self, key: K, period: f32) {
        self.insert(key, Timer::repeating(period));
    }

    fn insert(&mut self, key: K, timer: Timer) {
        match self.timers.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = timer,
            None => self.timers.push((key, timer)),
        }
    }

    /// Remove a timer. Returns whether one was pending.
    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.timers.len();
        self.timers.retain(|(k, _)| *k != key);
        self.timers.len() != before
    }

    pub fn pause(&mut self, key: K) {
        if let Some(timer) = self.get_mut(key) {
            timer.paused = true;
        }
    }

    pub fn resume(&mut self, key: K) {
        if let Some(timer) = self.get_mut(key) {
            timer.paused = false;
        }
    }

    pub fn get(&self, key: K) -> Option<&Timer> {
        self.timers.iter().find(|(k, _)| *k == key).map(|(_, t)| t)
    }

    fn get_mut(&mut self, key: K) -> Option<&mut Timer> {
        self.timers.iter_mut().find(|(k, _)| *k == key).map(|(_, t)| t)
    }

    /// Whether a timer exists for the key and is not paused.
    pub fn is_running(&self, key: K) -> bool {
        self.get(key).is_some_and(|t| !t.paused)
    }

    pub fn contains(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Advance all running timers by `dt` and return the keys that fired,
    /// in registration order. A repeating timer fires once per elapsed period;
    /// one-shot timers are removed after firing.
    pub fn tick(&mut self, dt: f32) -> Vec<K> {
        let mut fired = Vec::new();
        for (key, timer) in self.timers.iter_mut() {
            if timer.paused {
                continue;
            }
            timer.remaining -= dt;
            match timer.period {
                Some(period) => {
                    while timer.remaining <= 0.0 {
                        fired.push(*key);
                        timer.remaining += period;
                    }
                }
                None => {
                    if timer.remaining <= 0.0 {
                        fired.push(*key);
                    }
                }
            }
        }
        self.timers
            .retain(|(_, t)| t.period.is_some() || t.paused || t.remaining > 0.0);
        fired
    }
}

impl<K: Copy + PartialEq + Debug> Default for TimerSet<K> {
    fn default() -> Self {
        Self::new()
    }
}
