use crate::constants::*;
use std::cell::Cell;
use web_sys as web;

/// Synthesized sound cues for the wheel. No audio assets are loaded; every
/// cue is a short oscillator burst routed through a shared master gain.
pub struct Cues {
    ctx: web::AudioContext,
    master: web::GainNode,
    tick_tone: web::BiquadFilterNode,
    unlocked: Cell<bool>,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("[audio] {} GainNode error: {:?}", label, e);
            Err(anyhow::anyhow!("{} GainNode error: {:?}", label, e))
        }
    }
}

impl Cues {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let master = create_gain(&ctx, MASTER_GAIN, "Master")?;
        _ = master.connect_with_audio_node(&ctx.destination());

        // Tick clicks run through a lowpass so they read as a soft tock.
        let tick_tone = web::BiquadFilterNode::new(&ctx)
            .map_err(|e| anyhow::anyhow!("BiquadFilterNode error: {:?}", e))?;
        tick_tone.set_type(web::BiquadFilterType::Lowpass);
        tick_tone.frequency().set_value(TICK_LOWPASS_HZ);
        _ = tick_tone.connect_with_audio_node(&master);

        Ok(Self {
            ctx,
            master,
            tick_tone,
            unlocked: Cell::new(false),
        })
    }

    /// Must run inside a user gesture. Mobile browsers keep the context
    /// suspended until something is played from a gesture handler, so besides
    /// `resume()` a one-sample silent buffer is started.
    pub fn unlock(&self) {
        if self.unlocked.get() {
            return;
        }
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
        match self.ctx.create_buffer(1, 1, self.ctx.sample_rate()) {
            Ok(buffer) => match self.ctx.create_buffer_source() {
                Ok(src) => {
                    src.set_buffer(Some(&buffer));
                    _ = src.connect_with_audio_node(&self.ctx.destination());
                    #[allow(deprecated)]
                    _ = src.start();
                }
                Err(e) => log::warn!("[audio] unlock source error: {:?}", e),
            },
            Err(e) => log::warn!("[audio] unlock buffer error: {:?}", e),
        }
        self.unlocked.set(true);
        log::info!("[audio] unlocked");
    }

    pub fn tick(&self) {
        let t0 = self.ctx.current_time() + SCHEDULE_AHEAD_SEC;
        trigger_one_shot(
            &self.ctx,
            web::OscillatorType::Triangle,
            TICK_FREQ_HZ,
            TICK_PEAK_GAIN,
            t0,
            TICK_DURATION_SEC,
            &self.tick_tone,
        );
    }

    pub fn win(&self) {
        let t0 = self.ctx.current_time() + SCHEDULE_AHEAD_SEC;
        for (i, freq) in WIN_NOTES_HZ.iter().enumerate() {
            trigger_one_shot(
                &self.ctx,
                web::OscillatorType::Sine,
                *freq,
                WIN_PEAK_GAIN,
                t0 + i as f64 * WIN_NOTE_SPACING_SEC,
                WIN_NOTE_DURATION_SEC,
                &self.master,
            );
        }
    }
}

// Fire a simple one-shot oscillator with a linear attack/release envelope
fn trigger_one_shot(
    audio_ctx: &web::AudioContext,
    waveform: web::OscillatorType,
    frequency_hz: f32,
    peak: f32,
    t0: f64,
    duration_sec: f64,
    destination: &web::AudioNode,
) {
    if let Ok(src) = web::OscillatorNode::new(audio_ctx) {
        src.set_type(waveform);
        src.frequency().set_value(frequency_hz);
        if let Ok(g) = web::GainNode::new(audio_ctx) {
            g.gain().set_value(0.0);
            _ = g
                .gain()
                .linear_ramp_to_value_at_time(peak, t0 + ENVELOPE_ATTACK_SEC);
            _ = g.gain().linear_ramp_to_value_at_time(0.0, t0 + duration_sec);
            _ = src.connect_with_audio_node(&g);
            _ = g.connect_with_audio_node(destination);
            _ = src.start_with_when(t0);
            _ = src.stop_with_when(t0 + duration_sec + 0.02);
        }
    }
}
