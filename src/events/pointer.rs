use crate::audio::AudioFeedback;
use crate::constants::*;
use crate::dom;
use crate::input;
use crate::scene::CardScene;
use card_core::{ClickTracker, GestureEngine, GestureHandler, GestureState, PressKind};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Routes recognised gestures onto the card scene.
pub struct CardGestures {
    pub scene: Rc<RefCell<CardScene>>,
    pub audio: Option<Rc<AudioFeedback>>,
}

impl CardGestures {
    fn blip(&self, hz: f32) {
        if let Some(a) = &self.audio {
            a.blip(hz, instant::now());
        }
    }
}

impl GestureHandler for CardGestures {
    fn on_start(&mut self, _state: &GestureState) {
        self.scene.borrow_mut().begin_gesture();
    }

    fn on_end(&mut self, state: &GestureState) {
        log::debug!(
            "[gesture] end after {:.0} ms, travelled {:.1}px",
            state.elapsed_time,
            state.distance
        );
    }

    fn on_pinch(&mut self, scale: f32) {
        self.scene.borrow_mut().pinch(scale);
    }

    fn on_rotate(&mut self, angle: f32) {
        self.scene.borrow_mut().twist(angle);
    }

    fn on_pan(&mut self, delta: Vec2) {
        self.scene.borrow_mut().pan(delta);
    }

    fn on_long_press(&mut self, position: Vec2) {
        let toggled = self.scene.borrow_mut().toggle_expanded();
        match toggled {
            Ok(expanded) => {
                log::info!(
                    "[gesture] long-press at ({:.0},{:.0}) expanded={}",
                    position.x,
                    position.y,
                    expanded
                );
                self.blip(if expanded { EXPAND_HZ } else { COLLAPSE_HZ });
            }
            Err(e) => log::warn!("[gesture] expand failed: {:#}", e),
        }
    }
}

#[derive(Clone)]
pub struct InputWiring {
    pub stage: web::HtmlElement,
    pub card: web::HtmlElement,
    pub scene: Rc<RefCell<CardScene>>,
    pub gestures: Rc<RefCell<GestureEngine<CardGestures>>>,
    pub clicks: Rc<RefCell<ClickTracker>>,
    pub audio: Option<Rc<AudioFeedback>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_hover(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let stage = w.stage.clone();
    dom::add_listener(&stage, "pointerdown", move |ev: web::PointerEvent| {
        let sample = input::pointer_sample(&ev, &w.stage);
        if let Some(a) = &w.audio {
            a.resume();
        }
        _ = w.stage.set_pointer_capture(ev.pointer_id());

        w.gestures.borrow_mut().on_pointer_down(sample);

        if ev.is_primary() {
            let press = w.clicks.borrow_mut().pointer_down(sample.position, sample.timestamp);
            match press {
                PressKind::DoubleClick => {
                    // a reset must not be followed by the long-press of the same press
                    w.gestures.borrow_mut().cancel_pending();
                    w.scene.borrow_mut().reset();
                    log::info!("[gesture] double-click reset");
                }
                PressKind::Click => {
                    if let Some(a) = &w.audio {
                        a.blip(TAP_HZ, sample.timestamp);
                    }
                }
            }
        }
        ev.prevent_default();
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let Some(window) = web::window() else {
        return;
    };
    dom::add_listener(&window, "pointermove", move |ev: web::PointerEvent| {
        if !w.gestures.borrow().is_active() {
            return;
        }
        let sample = input::pointer_sample(&ev, &w.stage);
        w.gestures.borrow_mut().on_pointer_move(&[sample]);
        if ev.is_primary() && w.clicks.borrow_mut().pointer_move(sample.position).is_some() {
            dom::set_class(&w.stage, DRAGGING_CLASS, true);
        }
    });
}

fn wire_pointerup(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    for event in ["pointerup", "pointercancel"] {
        let w = w.clone();
        let cancel = event == "pointercancel";
        dom::add_listener(&window, event, move |ev: web::PointerEvent| {
            let sample = input::pointer_sample(&ev, &w.stage);
            {
                let mut g = w.gestures.borrow_mut();
                if cancel {
                    g.on_pointer_cancel(sample);
                } else {
                    g.on_pointer_up(sample);
                }
            }
            if ev.is_primary() && w.clicks.borrow_mut().pointer_up() {
                dom::set_class(&w.stage, DRAGGING_CLASS, false);
            }
        });
    }
}

fn wire_hover(w: &InputWiring) {
    for (event, hovered) in [("pointerenter", true), ("pointerleave", false)] {
        let scene = w.scene.clone();
        dom::add_listener(&w.card, event, move |_ev: web::PointerEvent| {
            scene.borrow_mut().set_hovered(hovered);
        });
    }
}
