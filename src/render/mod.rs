//! Seams to the rendering collaborator.
//!
//! The editor core never draws anything itself. A renderer draws the live
//! registry plus selection outlines, and answers ray queries against the
//! same boxes it draws.

pub mod cpu;
pub mod frame_log;

pub use cpu::SlabIntersector;
pub use frame_log::FrameLog;

use crate::editor::selection::Outline;
use crate::math::Ray;
use crate::volume::{VolumeId, VolumeRegistry};

/// A single ray/box hit as reported by the renderer. `face` is raw and is
/// validated by the pick resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub id: VolumeId,
    pub face: u8,
    pub distance: f32,
}

/// Ray casting against whatever the renderer currently draws.
pub trait Intersector {
    /// All hits along `ray`, nearest first.
    fn intersect(&self, ray: &Ray, registry: &VolumeRegistry) -> Vec<RayHit>;
}

/// Everything needed to draw one frame
pub struct Frame<'a> {
    pub volumes: &'a VolumeRegistry,
    pub outlines: &'a [Outline],
}

/// Draws frames on request.
pub trait FrameRenderer {
    fn render_frame(&mut self, frame: &Frame<'_>);
}
