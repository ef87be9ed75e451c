//! Audio system using Web Audio API
//!
//! Procedurally generated background loop - no external files needed.
//! Every call into the audio stack may be rejected by the browser
//! (autoplay policy, missing context); all failures are swallowed and
//! gameplay proceeds without sound.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// Oscillators and master gain for the running background loop
struct MusicVoice {
    gain: GainNode,
    oscillators: Vec<OscillatorNode>,
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    music: Option<MusicVoice>,
    music_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(music_volume: f32) -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            music: None,
            music_volume: music_volume.clamp(0.0, 1.0),
            muted: false,
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
        self.apply_volume();
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.apply_volume();
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.music_volume * 0.5 }
    }

    fn apply_volume(&self) {
        if let Some(voice) = &self.music {
            voice.gain.gain().set_value(self.effective_volume());
        }
    }

    /// Start the looped background track. No-op if already playing.
    pub fn start_music(&mut self) {
        if self.music.is_some() {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let Ok(gain) = ctx.create_gain() else { return };
        gain.gain().set_value(self.effective_volume());
        let _ = gain.connect_with_audio_node(&ctx.destination());

        let mut oscillators = Vec::new();

        // Two detuned saws over a bass triangle make an endless pad
        for (osc_type, freq) in [
            (OscillatorType::Triangle, 55.0),
            (OscillatorType::Sawtooth, 110.0),
            (OscillatorType::Sawtooth, 110.7),
            (OscillatorType::Sine, 165.0),
        ] {
            let Ok(osc) = ctx.create_oscillator() else {
                continue;
            };
            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            let _ = osc.connect_with_audio_node(&gain);
            let _ = osc.start();
            oscillators.push(osc);
        }

        // Slow tremolo so the pad breathes
        if let (Ok(lfo), Ok(lfo_gain)) = (ctx.create_oscillator(), ctx.create_gain()) {
            lfo.set_type(OscillatorType::Sine);
            lfo.frequency().set_value(0.25);
            lfo_gain.gain().set_value(self.effective_volume() * 0.3);
            let _ = lfo.connect_with_audio_node(&lfo_gain);
            let _ = lfo_gain.connect_with_audio_param(&gain.gain());
            let _ = lfo.start();
            oscillators.push(lfo);
        }

        self.music = Some(MusicVoice { gain, oscillators });
    }

    /// Stop and rewind the background track. The next start builds a
    /// fresh voice from the beginning of the loop.
    pub fn stop_music(&mut self) {
        if let Some(voice) = self.music.take() {
            for osc in &voice.oscillators {
                let _ = osc.stop();
            }
            let _ = voice.gain.disconnect();
        }
    }

    pub fn music_playing(&self) -> bool {
        self.music.is_some()
    }
}
