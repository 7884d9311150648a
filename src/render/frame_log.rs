//! A renderer that only logs, for headless sessions.

use log::debug;

use super::{Frame, FrameRenderer};

/// Counts and logs frames instead of drawing them
#[derive(Debug, Default)]
pub struct FrameLog {
    frames: u64,
    last_volume_count: usize,
    last_highlighted: usize,
}

impl FrameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_volume_count(&self) -> usize {
        self.last_volume_count
    }

    /// Volumes carrying a highlight tint in the last frame
    pub fn last_highlighted(&self) -> usize {
        self.last_highlighted
    }
}

impl FrameRenderer for FrameLog {
    fn render_frame(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        self.last_volume_count = frame.volumes.len();
        self.last_highlighted = frame.volumes.iter().filter(|v| v.colors.has_overlay()).count();
        debug!(
            "frame {}: {} volumes, {} highlighted, {} outlines",
            self.frames,
            self.last_volume_count,
            self.last_highlighted,
            frame.outlines.len()
        );
    }
}
