/// Host-facing buffer layout.
/// Must stay in sync with the page's `protocol.ts`.
///
/// The host reads a small header each frame, then the three data sections
/// through their own pointers (all values f32 / 4 bytes):
/// ```text
/// [Header: 8 floats]
/// [Instances: max_instances × 8 floats]
/// [Sounds: max_sounds × 1 float]
/// [Events: max_events × 4 floats]
/// ```

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::renderer::instance::RenderInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_WORLD_WIDTH: usize = 2;
pub const HEADER_WORLD_HEIGHT: usize = 3;
pub const HEADER_INSTANCE_COUNT: usize = 4;
pub const HEADER_SOUND_COUNT: usize = 5;
pub const HEADER_EVENT_COUNT: usize = 6;
pub const HEADER_RESERVED: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Runtime-computed capacities and section sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_sounds: usize,
    pub max_events: usize,

    /// Size of instance data section in floats.
    pub instance_data_floats: usize,
    /// Size of sound data section in floats.
    pub sound_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Total floats across header and sections.
    pub buffer_total_floats: usize,
}

impl ProtocolLayout {
    pub fn new(max_instances: usize, max_sounds: usize, max_events: usize) -> Self {
        let instance_data_floats = max_instances * RenderInstance::FLOATS;
        let sound_data_floats = max_sounds;
        let event_data_floats = max_events * GameEvent::FLOATS;

        Self {
            max_instances,
            max_sounds,
            max_events,
            instance_data_floats,
            sound_data_floats,
            event_data_floats,
            buffer_total_floats: HEADER_FLOATS
                + instance_data_floats
                + sound_data_floats
                + event_data_floats,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances, config.max_sounds, config.max_events)
    }
}

/// Per-frame header values.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameHeader {
    pub frame: u32,
    pub world_width: f32,
    pub world_height: f32,
    pub instances: usize,
    pub sounds: usize,
    pub events: usize,
}

impl FrameHeader {
    pub fn write(&self, out: &mut [f32; HEADER_FLOATS]) {
        out[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        // Wraps well before f32 loses integer precision.
        out[HEADER_FRAME_COUNTER] = (self.frame % (1 << 24)) as f32;
        out[HEADER_WORLD_WIDTH] = self.world_width;
        out[HEADER_WORLD_HEIGHT] = self.world_height;
        out[HEADER_INSTANCE_COUNT] = self.instances as f32;
        out[HEADER_SOUND_COUNT] = self.sounds as f32;
        out[HEADER_EVENT_COUNT] = self.events as f32;
        out[HEADER_RESERVED] = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());
        assert_eq!(layout.max_instances, 128);
        assert_eq!(layout.instance_data_floats, 128 * 8);
        assert_eq!(layout.sound_data_floats, 16);
        assert_eq!(layout.event_data_floats, 32 * 4);
        assert_eq!(layout.buffer_total_floats, HEADER_FLOATS + 128 * 8 + 16 + 32 * 4);
    }

    #[test]
    fn header_fields_land_at_their_indices() {
        let mut out = [0.0f32; HEADER_FLOATS];
        FrameHeader {
            frame: 5,
            world_width: 480.0,
            world_height: 640.0,
            instances: 7,
            sounds: 1,
            events: 2,
        }
        .write(&mut out);

        assert_eq!(out[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(out[HEADER_FRAME_COUNTER], 5.0);
        assert_eq!(out[HEADER_WORLD_HEIGHT], 640.0);
        assert_eq!(out[HEADER_INSTANCE_COUNT], 7.0);
        assert_eq!(out[HEADER_EVENT_COUNT], 2.0);
    }
}
