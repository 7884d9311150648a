//! Scripted editing sessions, replayed headlessly.

use std::path::Path;

use glam::{Vec2, Vec3};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::camera::PickCamera;
use crate::core::input::EditorEvent;
use crate::core::{Error, Result};
use crate::edit::ActionMode;
use crate::render::{FrameLog, Intersector};
use crate::volume::VolumeId;

use super::controller::{ClickOutcome, EditorController};

/// One scripted input. Pointer positions are normalized device coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptStep {
    Spawn { at: [f32; 3] },
    Point { x: f32, y: f32 },
    Leave,
    Click,
    Drag { dx: f32, dy: f32 },
    Cycle { step: i32 },
    Mode { mode: ActionMode },
    Shift { held: bool },
    Tick,
    InspectSlot { slot: u8 },
    Paint { hex: String },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionScript {
    pub steps: Vec<ScriptStep>,
}

/// What a replayed session left behind
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub mode: ActionMode,
    pub volumes: usize,
    pub editable: usize,
    pub selection: Vec<VolumeId>,
    pub frames: u64,
    pub applied: usize,
    pub refused: usize,
    pub cancelled: usize,
}

impl SessionScript {
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| Error::Script(format!("{}: {e}", path.display())))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| Error::Script(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// A short tour: a cube on the ground, sliced, duplicated, stretched.
    pub fn demo() -> Self {
        use ScriptStep::*;
        Self {
            steps: vec![
                Spawn { at: [0.0, 0.0, 0.0] },
                Tick,
                Point { x: 0.0, y: 0.0 },
                Tick,
                Mode { mode: ActionMode::Duplicate },
                Click,
                Tick,
                Cycle { step: 1 },
                Click,
                Tick,
                Drag { dx: 40.0, dy: 0.0 },
                Click,
                Tick,
                Mode { mode: ActionMode::Stretch },
                Click,
                Tick,
                Mode { mode: ActionMode::Select },
                Click,
                InspectSlot { slot: 2 },
                Paint { hex: "ffa500".to_string() },
                Tick,
                Leave,
                Tick,
            ],
        }
    }

    /// Replay against `editor`, orbiting `camera` on drags.
    pub fn run<I: Intersector>(
        &self,
        editor: &mut EditorController<I>,
        camera: &mut PickCamera,
        renderer: &mut FrameLog,
    ) -> SessionSummary {
        let mut summary = SessionSummary::default();
        let mut pointer: Option<Vec2> = None;

        for (n, step) in self.steps.iter().enumerate() {
            let outcome = match step {
                ScriptStep::Spawn { at } => {
                    editor.spawn_cube(Vec3::from_array(*at));
                    None
                }
                ScriptStep::Point { x, y } => {
                    let ndc = Vec2::new(*x, *y);
                    pointer = Some(ndc);
                    editor.handle(EditorEvent::PointerMoved(ndc), camera)
                }
                ScriptStep::Leave => {
                    pointer = None;
                    editor.handle(EditorEvent::PointerLeft, camera)
                }
                ScriptStep::Click => editor.handle(EditorEvent::Click, camera),
                ScriptStep::Drag { dx, dy } => {
                    let delta = Vec2::new(*dx, *dy);
                    camera.orbit(delta);
                    editor.handle(EditorEvent::Drag(delta), camera);
                    // The view moved under a still pointer
                    pointer.and_then(|ndc| editor.handle(EditorEvent::PointerMoved(ndc), camera))
                }
                ScriptStep::Cycle { step } => editor.handle(EditorEvent::CycleAction(*step), camera),
                ScriptStep::Mode { mode } => {
                    editor.set_mode(*mode);
                    None
                }
                ScriptStep::Shift { held } => editor.handle(EditorEvent::MultiSelect(*held), camera),
                ScriptStep::Tick => {
                    editor.tick(renderer);
                    None
                }
                ScriptStep::InspectSlot { slot } => {
                    if let Err(e) = editor.inspect_slot(*slot) {
                        warn!("step {n}: {e}");
                    }
                    None
                }
                ScriptStep::Paint { hex } => {
                    editor.paint(hex);
                    None
                }
            };

            match outcome {
                Some(ClickOutcome::Applied(_)) => summary.applied += 1,
                Some(ClickOutcome::Refused(_)) => summary.refused += 1,
                Some(ClickOutcome::Cancelled) => summary.cancelled += 1,
                Some(ClickOutcome::NoTarget) | None => {}
            }
        }

        // Flush anything still pending
        editor.tick(renderer);

        summary.mode = editor.mode();
        summary.volumes = editor.registry().len();
        summary.editable = editor.registry().editable_count();
        summary.selection = editor.context().selection.ids().to_vec();
        summary.frames = renderer.frames();
        info!(
            "session done: {} steps, {} applied, {} refused, {} volumes",
            self.steps.len(),
            summary.applied,
            summary.refused,
            summary.volumes
        );
        summary
    }
}
