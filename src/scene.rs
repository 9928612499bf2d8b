//! Everything the card shows, independent of the DOM: the animated pose and
//! accent colour, the pinch/hover zoom spring, auto-rotation and the
//! animation manager that drives the presets.

use crate::constants::*;
use card_core::interaction::{collapse, expand};
use card_core::{
    AnimationDescriptor, AnimationManager, AutoRotation, CardPose, Easing, Rgb, RotationConfig,
    Spring, SpringConfig,
};
use glam::{Vec2, Vec3};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub struct CardScene {
    manager: AnimationManager,
    rotation: AutoRotation,
    zoom: Spring,
    pose: Rc<Cell<CardPose>>,
    accent: Rc<Cell<Rgb>>,
    accent_rest: Rgb,
    accent_expanded: Rgb,
    expanded: bool,
    hovered: bool,
    pinch: f32,
    pinch_base: f32,
    twist_base: f32,
}

impl CardScene {
    pub fn new() -> anyhow::Result<Self> {
        let accent_rest = Rgb::from_hex(ACCENT_REST)?;
        Ok(Self {
            manager: AnimationManager::new(),
            rotation: AutoRotation::new(RotationConfig::default())?,
            zoom: Spring::new(SpringConfig::default(), Vec3::ONE)?,
            pose: Rc::new(Cell::new(CardPose::REST)),
            accent: Rc::new(Cell::new(accent_rest)),
            accent_rest,
            accent_expanded: Rgb::from_hex(ACCENT_EXPANDED)?,
            expanded: false,
            hovered: false,
            pinch: 1.0,
            pinch_base: 1.0,
            twist_base: 0.0,
        })
    }

    /// Advance animations, rotation and the zoom spring by one frame.
    /// Returns true when the auto-rotation moved.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        let dt_ms = dt_ms.clamp(0.0, MAX_FRAME_DT_MS);
        self.manager.tick(Duration::from_secs_f64(dt_ms / 1000.0));
        for err in self.manager.take_errors() {
            log::warn!("[anim] {:#}", anyhow::Error::from(err));
        }
        let rotated = self.rotation.tick(dt_ms);
        self.zoom.step((dt_ms / 1000.0) as f32);
        rotated
    }

    /// Grow and spin the card, or bring it back to rest. Returns the new state.
    pub fn toggle_expanded(&mut self) -> anyhow::Result<bool> {
        let expanding = !self.expanded;
        let from = self.pose.get();
        let pose = if expanding { expand(from) } else { collapse(from) };
        let sink = self.pose.clone();
        self.restart(
            POSE_QUEUE,
            pose.on_update(move |p: &CardPose| {
                sink.set(*p);
                Ok(())
            }),
        )?;

        let target = if expanding {
            self.accent_expanded
        } else {
            self.accent_rest
        };
        let sink = self.accent.clone();
        let fade = AnimationDescriptor::new(self.accent.get(), target)
            .duration_ms(card_core::constants::PRESET_DURATION_MS)
            .easing(Easing::EaseInOut)
            .on_update(move |c: &Rgb| {
                sink.set(*c);
                Ok(())
            });
        self.restart(ACCENT_QUEUE, fade)?;

        self.expanded = expanding;
        Ok(expanding)
    }

    /// Snapshot pinch/twist baselines at the start of a gesture.
    pub fn begin_gesture(&mut self) {
        self.pinch_base = self.pinch;
        self.twist_base = self.rotation.rotation().z;
    }

    pub fn pinch(&mut self, scale: f32) {
        self.pinch = (self.pinch_base * scale).clamp(ZOOM_MIN, ZOOM_MAX);
        self.retarget_zoom();
    }

    pub fn twist(&mut self, angle: f32) {
        let mut r = self.rotation.rotation();
        r.z = self.twist_base + angle;
        self.rotation.set_rotation(r);
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.rotation.nudge(delta);
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.retarget_zoom();
        }
    }

    pub fn toggle_rotation(&mut self) -> bool {
        self.rotation.toggle()
    }

    /// Back to the initial state: no animations, rest pose, unit zoom.
    pub fn reset(&mut self) {
        self.manager.clear();
        self.rotation.reset();
        self.zoom.snap_to(Vec3::ONE);
        self.pose.set(CardPose::REST);
        self.accent.set(self.accent_rest);
        self.expanded = false;
        self.hovered = false;
        self.pinch = 1.0;
        self.pinch_base = 1.0;
        self.twist_base = 0.0;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_animating(&self) -> bool {
        self.manager.is_running()
    }

    pub fn zoom(&self) -> f32 {
        self.zoom.value().x
    }

    pub fn pose(&self) -> CardPose {
        self.pose.get()
    }

    pub fn accent(&self) -> Rgb {
        self.accent.get()
    }

    pub fn rotation(&self) -> Vec3 {
        self.pose.get().rotation + self.rotation.rotation()
    }

    pub fn transform_css(&self) -> String {
        let r = self.rotation();
        let s = self.pose.get().scale * self.zoom.value();
        format!(
            "perspective({:.0}px) rotateX({:.4}rad) rotateY({:.4}rad) rotateZ({:.4}rad) scale3d({:.4}, {:.4}, {:.4})",
            PERSPECTIVE_PX, r.x, r.y, r.z, s.x, s.y, s.z
        )
    }

    fn retarget_zoom(&mut self) {
        let lift = if self.hovered { HOVER_LIFT } else { 1.0 };
        self.zoom.set_target(Vec3::splat(self.pinch * lift));
    }

    /// Replace whatever `id` was playing with `descriptor` and play it.
    fn restart<T: card_core::Interpolate>(
        &mut self,
        id: &str,
        descriptor: AnimationDescriptor<T>,
    ) -> anyhow::Result<()> {
        if self.manager.queue(id).is_some() {
            self.manager.remove_queue(id)?;
        }
        self.manager.create_queue(id)?;
        self.manager.enqueue(id, descriptor)?;
        self.manager.start(id)?;
        Ok(())
    }
}
