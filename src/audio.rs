use crate::constants::*;
use card_core::Throttle;
use std::cell::RefCell;
use web_sys as web;

/// Short oscillator blips routed through one master gain.
pub struct AudioFeedback {
    ctx: web::AudioContext,
    master: web::GainNode,
    gate: RefCell<Throttle>,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("{} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

impl AudioFeedback {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let master = create_gain(&ctx, MASTER_GAIN, "Master")?;
        master
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| anyhow::anyhow!("connect master: {:?}", e))?;
        Ok(Self {
            ctx,
            master,
            gate: RefCell::new(Throttle::new(BLIP_MIN_INTERVAL_MS)),
        })
    }

    /// Browsers keep the context suspended until a user gesture.
    pub fn resume(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }

    pub fn is_muted(&self) -> bool {
        self.master.gain().value() <= 0.0
    }

    pub fn toggle_mute(&self) -> bool {
        let muted = !self.is_muted();
        self.master
            .gain()
            .set_value(if muted { 0.0 } else { MASTER_GAIN });
        log::info!("[audio] muted={}", muted);
        muted
    }

    /// Fire a one-shot sine blip; blips closer together than the gate interval are dropped.
    pub fn blip(&self, frequency_hz: f32, now_ms: f64) {
        if self.is_muted() || !self.gate.borrow_mut().ready(now_ms) {
            return;
        }
        let Ok(src) = web::OscillatorNode::new(&self.ctx) else {
            return;
        };
        let Ok(g) = create_gain(&self.ctx, 0.0, "Blip") else {
            return;
        };
        src.set_type(web::OscillatorType::Sine);
        src.frequency().set_value(frequency_hz);
        let t0 = self.ctx.current_time() + 0.005;
        _ = g.gain().linear_ramp_to_value_at_time(1.0, t0 + BLIP_ATTACK_SEC);
        _ = g.gain().linear_ramp_to_value_at_time(0.0, t0 + BLIP_SEC);
        _ = src.connect_with_audio_node(&g);
        _ = g.connect_with_audio_node(&self.master);
        _ = src.start_with_when(t0);
        _ = src.stop_with_when(t0 + BLIP_SEC + 0.05);
    }
}
