use super::pointer::CardGestures;
use crate::audio::AudioFeedback;
use crate::input::{action_for_key, KeyAction};
use crate::overlay;
use crate::scene::CardScene;
use card_core::GestureEngine;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    scene: &Rc<RefCell<CardScene>>,
    gestures: &Rc<RefCell<GestureEngine<CardGestures>>>,
    audio: Option<&AudioFeedback>,
) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::ToggleRotation => {
            let on = scene.borrow_mut().toggle_rotation();
            log::info!("[keys] auto-rotation={}", on);
        }
        KeyAction::Reset => {
            gestures.borrow_mut().reset();
            scene.borrow_mut().reset();
            log::info!("[keys] reset");
        }
        KeyAction::ToggleMute => match audio {
            Some(a) => {
                a.toggle_mute();
            }
            None => log::info!("[keys] no audio to mute"),
        },
        KeyAction::ToggleStats => {
            if let Some(doc) = crate::dom::window_document() {
                let visible = overlay::toggle(&doc);
                log::info!("[keys] stats={}", visible);
            }
        }
        KeyAction::ToggleExpanded => {
            let toggled = scene.borrow_mut().toggle_expanded();
            match toggled {
                Ok(expanded) => log::info!("[keys] expanded={}", expanded),
                Err(e) => log::warn!("[keys] expand failed: {:#}", e),
            }
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(
    scene: Rc<RefCell<CardScene>>,
    gestures: Rc<RefCell<GestureEngine<CardGestures>>>,
    audio: Option<Rc<AudioFeedback>>,
) {
    if let Some(window) = web::window() {
        crate::dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &scene, &gestures, audio.as_deref());
        });
    }
}
