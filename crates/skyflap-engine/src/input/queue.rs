/// Input event types the engine understands.
/// Carries no game-specific meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at world coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/click ended at world coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// A key was pressed. `key_code` is the DOM `keyCode`.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// A custom event from the page UI.
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

impl InputEvent {
    /// Pointer press or a press of the given key.
    pub fn is_press(&self, key_code: u32) -> bool {
        match *self {
            InputEvent::PointerDown { .. } => true,
            InputEvent::KeyDown { key_code: k } => k == key_code,
            _ => false,
        }
    }
}

/// A queue of input events.
/// The host pushes events between frames; the game reads them during update
/// and the runner drains them once the frame's steps are done.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::KeyDown { key_code: 32 });
        assert_eq!(q.len(), 2);
        assert_eq!(q.drain().len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn press_matches_pointer_and_designated_key() {
        assert!(InputEvent::PointerDown { x: 0.0, y: 0.0 }.is_press(32));
        assert!(InputEvent::KeyDown { key_code: 32 }.is_press(32));
        assert!(!InputEvent::KeyDown { key_code: 13 }.is_press(32));
        assert!(!InputEvent::KeyUp { key_code: 32 }.is_press(32));
        assert!(!InputEvent::Custom { kind: 1, a: 0.0, b: 0.0, c: 0.0 }.is_press(32));
    }
}
