use crate::constants::*;
use crate::dom;
use crate::events::CardGestures;
use crate::overlay;
use crate::scene::CardScene;
use card_core::{FrameStats, GestureEngine, PerformanceMonitor};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub document: web::Document,
    pub card: web::HtmlElement,
    pub scene: Rc<RefCell<CardScene>>,
    pub gestures: Rc<RefCell<GestureEngine<CardGestures>>>,

    pub stats: FrameStats,
    pub monitor: PerformanceMonitor,
    pub last_instant: Instant,
    pub last_transform: String,
    pub last_accent: String,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_ms = (now - self.last_instant).as_secs_f64() * 1000.0;
        self.last_instant = now;
        let now_ms = instant::now();
        self.monitor.begin("frame", now_ms);

        // gesture callbacks borrow the scene, so tick before borrowing it here
        self.gestures.borrow_mut().tick(now_ms);

        let (transform, accent, zoom) = {
            let mut scene = self.scene.borrow_mut();
            if scene.advance(dt_ms) {
                self.stats.note_update();
            }
            (scene.transform_css(), scene.accent().to_css(), scene.zoom())
        };

        // avoid style invalidation when nothing moved
        if transform != self.last_transform {
            dom::set_style(&self.card, "transform", &transform);
            self.last_transform = transform;
        }
        if accent != self.last_accent {
            dom::set_style(&self.card, ACCENT_PROPERTY, &accent);
            self.last_accent = accent;
        }

        self.monitor.end("frame", instant::now());
        if let Some(metrics) = self.stats.frame(now_ms) {
            log::debug!("[anim] {} fps, {} rotation updates", metrics.fps, metrics.updates);
            if !overlay::is_hidden(&self.document) {
                overlay::update_stats(&self.document, metrics, self.monitor.average("frame"), zoom);
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
