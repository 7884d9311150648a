//! Editor controller: routes input to pick, hover, and edit, and keeps the
//! redraw flag honest.

use glam::Vec3;
use log::{debug, trace, warn};

use crate::core::camera::PickCamera;
use crate::core::input::EditorEvent;
use crate::edit::{ActionMode, EditEngine, EditOutcome};
use crate::math::Ray;
use crate::pick::{self, PickResult};
use crate::render::{Frame, FrameRenderer, Intersector, SlabIntersector};
use crate::volume::ground::create_ground;
use crate::volume::{EditError, FaceColors, Volume, VolumeId, VolumeRegistry};

use super::config::EditorConfig;
use super::context::EditorContext;

/// What a click ended up doing
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// The click ended a drag and was swallowed
    Cancelled,
    /// Nothing under the pointer
    NoTarget,
    /// The engine refused; the registry is unchanged
    Refused(EditError),
    Applied(EditOutcome),
}

pub struct EditorController<I = SlabIntersector> {
    ctx: EditorContext,
    config: EditorConfig,
    engine: EditEngine,
    intersector: I,
}

impl EditorController<SlabIntersector> {
    /// Controller with CPU ray casting and the configured ground grid
    pub fn new(config: EditorConfig) -> Self {
        Self::with_intersector(config, SlabIntersector)
    }
}

impl<I: Intersector> EditorController<I> {
    pub fn with_intersector(config: EditorConfig, intersector: I) -> Self {
        let mut ctx = EditorContext::new(config.initial_mode);
        if config.ground.enabled {
            let ground = create_ground(&config.ground, config.ground_palette);
            debug!("populating {} ground volumes", ground.len());
            ctx.registry.extend(ground);
        }
        let engine = EditEngine::new(config.stretch_increment, config.protect_last_editable);
        Self { ctx, config, engine, intersector }
    }

    pub fn context(&self) -> &EditorContext {
        &self.ctx
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn registry(&self) -> &VolumeRegistry {
        &self.ctx.registry
    }

    pub fn mode(&self) -> ActionMode {
        self.ctx.mode()
    }

    pub fn needs_redraw(&self) -> bool {
        self.ctx.needs_redraw
    }

    /// Initial scene population outside the edit path
    pub fn populate(&mut self, volumes: impl IntoIterator<Item = Volume>) -> Vec<VolumeId> {
        let ids = self.ctx.registry.extend(volumes);
        self.ctx.needs_redraw = true;
        self.repick();
        ids
    }

    /// Add one editable cube with the default palette
    pub fn spawn_cube(&mut self, center: Vec3) -> VolumeId {
        let colors = FaceColors::new(self.config.default_palette);
        self.populate([Volume::cube(center, colors)])[0]
    }

    /// Dispatch a device-independent event. Returns the click outcome for
    /// clicks.
    pub fn handle(&mut self, event: EditorEvent, camera: &PickCamera) -> Option<ClickOutcome> {
        trace!("event {event:?}");
        match event {
            EditorEvent::PointerMoved(ndc) => {
                self.pointer_moved(camera.ray_from_ndc(ndc));
            }
            EditorEvent::PointerLeft => {
                self.pointer_left();
            }
            EditorEvent::Click => return Some(self.click()),
            EditorEvent::Drag(_) => self.drag(),
            EditorEvent::CycleAction(step) => {
                self.cycle_action(step);
            }
            EditorEvent::MultiSelect(held) => self.set_multi_select(held),
        }
        None
    }

    /// Pointer moved: pick and record the hover transition. Returns `true`
    /// if the hovered face changed.
    pub fn pointer_moved(&mut self, ray: Ray) -> bool {
        self.ctx.pointer = Some(ray);
        self.repick()
    }

    pub fn pointer_left(&mut self) -> bool {
        self.ctx.pointer = None;
        self.repick()
    }

    /// A camera drag is in progress; the click that ends it must not edit.
    pub fn drag(&mut self) {
        self.ctx.cancel_click = true;
        self.ctx.needs_redraw = true;
    }

    pub fn set_multi_select(&mut self, held: bool) {
        self.ctx.multi_select = held;
    }

    /// Step the action selector. Changing mode abandons the selection.
    pub fn cycle_action(&mut self, step: i32) -> ActionMode {
        let mode = self.ctx.selector.cycle(step);
        self.on_mode_changed();
        mode
    }

    /// Jump straight to a mode.
    pub fn set_mode(&mut self, mode: ActionMode) {
        if self.ctx.selector.set(mode) {
            self.on_mode_changed();
        }
    }

    fn on_mode_changed(&mut self) {
        debug!("mode -> {}", self.ctx.mode());
        self.ctx.selection.clear();
        self.ctx.needs_redraw = true;
    }

    /// Apply the active mode to whatever is hovered.
    pub fn click(&mut self) -> ClickOutcome {
        let cancelled = self.ctx.take_cancel();

        if !self.ctx.multi_select && !cancelled && self.ctx.selection.clear() {
            self.ctx.needs_redraw = true;
        }

        if cancelled {
            return ClickOutcome::Cancelled;
        }
        let Some(target) = self.ctx.hover.current().map(|entry| entry.target()) else {
            return ClickOutcome::NoTarget;
        };

        let mode = self.ctx.mode();
        match self.engine.apply(mode, target, &mut self.ctx.registry) {
            Ok(outcome) => {
                if let Some(id) = outcome.selected {
                    let color = self.config.selection_outline_color;
                    self.ctx.selection.push(id, &self.ctx.registry, color);
                }
                if outcome.invalidates_pick() {
                    self.ctx.selection.retain_live(&self.ctx.registry);
                    self.repick();
                }
                self.ctx.needs_redraw = true;
                ClickOutcome::Applied(outcome)
            }
            Err(e) => {
                debug!("{mode} refused: {e}");
                ClickOutcome::Refused(e)
            }
        }
    }

    /// Select a face slot in the inspector.
    pub fn inspect_slot(&mut self, slot: u8) -> Result<(), EditError> {
        self.ctx.inspector.set_active_slot(slot)?;
        self.ctx.needs_redraw = true;
        Ok(())
    }

    /// Paint the inspector's slot on the first selected volume.
    pub fn paint(&mut self, hex: &str) -> bool {
        let Some(id) = self.ctx.selection.first() else {
            warn!("paint {hex:?} ignored: nothing selected");
            return false;
        };
        let painted = self.ctx.inspector.apply_hex(id, hex, &mut self.ctx.registry);
        if painted {
            self.ctx.needs_redraw = true;
        }
        painted
    }

    /// Once per frame: settle hover colours, then draw if anything changed.
    /// Returns `true` if a frame was rendered.
    pub fn tick(&mut self, renderer: &mut impl FrameRenderer) -> bool {
        let repaint = self.ctx.hover.consume(&mut self.ctx.registry, self.config.highlight_color);
        if repaint.skipped > 0 {
            trace!("hover skipped {} removed volumes", repaint.skipped);
        }

        if !self.ctx.needs_redraw {
            return false;
        }
        renderer.render_frame(&Frame {
            volumes: &self.ctx.registry,
            outlines: self.ctx.selection.outlines(),
        });
        self.ctx.needs_redraw = false;
        true
    }

    /// Resolve the stored pointer ray against the live registry and feed
    /// the hover tracker.
    fn repick(&mut self) -> bool {
        let pick = match &self.ctx.pointer {
            Some(ray) => pick::resolve(ray, &self.ctx.registry, &self.intersector),
            None => PickResult::NONE,
        };
        let changed = self.ctx.hover.transition(pick, &self.ctx.registry);
        if changed {
            self.ctx.needs_redraw = true;
        }
        changed
    }
}
