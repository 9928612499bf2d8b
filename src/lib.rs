#![cfg(target_arch = "wasm32")]
use card_core::{ClickConfig, ClickTracker, FrameStats, GestureConfig, GestureEngine, PerformanceMonitor};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod scene;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("card-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let stage = dom::html_element(&document, STAGE_ELEMENT_ID)?;
    let card = dom::html_element(&document, CARD_ELEMENT_ID)?;
    // the browser must not claim pinch/pan for scrolling
    dom::set_style(&stage, "touch-action", "none");

    // Audio is optional: the card still works without WebAudio
    let audio = match audio::AudioFeedback::new() {
        Ok(a) => Some(Rc::new(a)),
        Err(e) => {
            log::warn!("[audio] disabled: {:#}", e);
            None
        }
    };

    let scene = Rc::new(RefCell::new(scene::CardScene::new()?));
    let gestures = Rc::new(RefCell::new(GestureEngine::new(
        GestureConfig::default(),
        events::CardGestures {
            scene: scene.clone(),
            audio: audio.clone(),
        },
    )?));
    let clicks = Rc::new(RefCell::new(ClickTracker::new(ClickConfig::default())?));

    events::wire_input_handlers(events::InputWiring {
        stage: stage.clone(),
        card: card.clone(),
        scene: scene.clone(),
        gestures: gestures.clone(),
        clicks,
        audio: audio.clone(),
    });
    events::wire_global_keydown(scene.clone(), gestures.clone(), audio);
    overlay::hide(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document,
        card,
        scene,
        gestures,
        stats: FrameStats::default(),
        monitor: PerformanceMonitor::default(),
        last_instant: Instant::now(),
        last_transform: String::new(),
        last_accent: String::new(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
