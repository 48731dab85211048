//! Session-level engine facade.
//!
//! [`Engine`] bundles the immutable session configuration (config, palette
//! and the selected waveform) and exposes every synthesis, effect and
//! encoding operation. All methods take `&self` and return caller-owned
//! buffers, so one engine may be shared across threads.

use rand::Rng;

use crate::config::EngineConfig;
use crate::effects;
use crate::error::EngineResult;
use crate::melody::{compose_random_melody, Melody};
use crate::pcm::{encode16, PcmStream};
use crate::request::{Effect, RenderOutput, RenderRequest, Source};
use crate::rng::create_component_rng;
use crate::scale::Palette;
use crate::synthesis::{generate_silence, generate_tone, generate_white_noise, Sample};
use crate::waveform::Waveform;

/// Synthesis engine for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    config: EngineConfig,
    palette: Palette,
    waveform: Waveform,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            palette: Palette::default(),
            waveform: Waveform::default(),
        }
    }
}

impl Engine {
    /// Creates an engine with the default palette and a square waveform.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Replaces the melody palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Replaces the default waveform.
    pub fn with_waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    /// Session configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Melody palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Default waveform for tones and melodies.
    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// See [`generate_silence`].
    pub fn silence(&self, duration_seconds: f64) -> EngineResult<Vec<Sample>> {
        generate_silence(duration_seconds, &self.config)
    }

    /// Tone using the engine's waveform. See [`generate_tone`].
    pub fn tone(&self, duration_seconds: f64, frequencies: &[f64]) -> EngineResult<Vec<Sample>> {
        generate_tone(duration_seconds, self.waveform, frequencies, &self.config)
    }

    /// Tone using an explicit waveform.
    pub fn tone_with(
        &self,
        duration_seconds: f64,
        waveform: Waveform,
        frequencies: &[f64],
    ) -> EngineResult<Vec<Sample>> {
        generate_tone(duration_seconds, waveform, frequencies, &self.config)
    }

    /// See [`generate_white_noise`].
    pub fn white_noise<R: Rng + ?Sized>(
        &self,
        duration_seconds: f64,
        rng: &mut R,
    ) -> EngineResult<Vec<Sample>> {
        generate_white_noise(duration_seconds, &self.config, rng)
    }

    /// Random melody from the palette using the engine's waveform.
    pub fn random_melody<R: Rng + ?Sized>(
        &self,
        note_count: usize,
        rng: &mut R,
    ) -> EngineResult<Melody> {
        compose_random_melody(note_count, &self.palette, self.waveform, &self.config, rng)
    }

    /// See [`effects::splice`].
    pub fn splice(&self, first: &[Sample], second: &[Sample]) -> Vec<Sample> {
        effects::splice(first, second)
    }

    /// Echo using the session's boundary mode. See [`effects::echo`].
    pub fn echo(&self, input: &[Sample], delay_seconds: u32) -> Vec<Sample> {
        effects::echo(input, delay_seconds, &self.config)
    }

    /// Normalize using the session's scale mode. See [`effects::normalize`].
    pub fn normalize(&self, input: &[Sample]) -> Vec<Sample> {
        effects::normalize(input, &self.config)
    }

    /// See [`effects::resample`].
    pub fn resample(&self, input: &[Sample], factor: f64) -> EngineResult<Vec<Sample>> {
        effects::resample(input, factor)
    }

    /// Amplitude scaling with the session's clamp mode. See
    /// [`effects::scale_amplitude`].
    pub fn scale_amplitude(&self, input: &[Sample], factor: f64) -> EngineResult<Vec<Sample>> {
        effects::scale_amplitude(input, factor, &self.config)
    }

    /// Encodes at the engine's sample rate. See [`encode16`].
    pub fn encode(&self, samples: &[Sample], channels: u16) -> EngineResult<PcmStream> {
        encode16(samples, self.config.sample_rate, channels)
    }

    /// Renders a single source. Stochastic sources draw from a stream
    /// derived from `seed` and `stream_key`.
    pub fn render_source(
        &self,
        source: &Source,
        seed: u32,
        stream_key: &str,
    ) -> EngineResult<Vec<Sample>> {
        match source {
            Source::Silence { duration } => self.silence(*duration),
            Source::Tone {
                duration,
                frequencies,
                waveform,
            } => self.tone_with(*duration, waveform.unwrap_or(self.waveform), frequencies),
            Source::WhiteNoise { duration } => {
                let mut rng = create_component_rng(seed, stream_key);
                self.white_noise(*duration, &mut rng)
            }
            Source::Melody { notes, waveform } => {
                let mut rng = create_component_rng(seed, stream_key);
                let melody = compose_random_melody(
                    *notes,
                    &self.palette,
                    waveform.unwrap_or(self.waveform),
                    &self.config,
                    &mut rng,
                )?;
                Ok(melody.into_samples())
            }
        }
    }

    /// Applies one effect. `index` is the effect's position in its chain.
    pub fn apply_effect(
        &self,
        samples: Vec<Sample>,
        effect: &Effect,
        seed: u32,
        index: usize,
    ) -> EngineResult<Vec<Sample>> {
        match effect {
            Effect::Splice { source } => {
                let key = format!("splice/{}", index);
                let appended = self.render_source(source, seed, &key)?;
                Ok(self.splice(&samples, &appended))
            }
            Effect::Echo { delay_seconds } => Ok(self.echo(&samples, *delay_seconds)),
            Effect::Normalize => Ok(self.normalize(&samples)),
            Effect::Resample { factor } => self.resample(&samples, *factor),
            Effect::Amplitude { factor } => self.scale_amplitude(&samples, *factor),
        }
    }

    /// Applies `effects` in order.
    pub fn apply_chain(
        &self,
        mut samples: Vec<Sample>,
        effects: &[Effect],
        seed: u32,
    ) -> EngineResult<Vec<Sample>> {
        for (index, effect) in effects.iter().enumerate() {
            samples = self.apply_effect(samples, effect, seed, index)?;
            tracing::debug!(index, samples = samples.len(), "applied effect");
        }
        Ok(samples)
    }

    /// Renders a request: source, effect chain, then 16-bit encoding.
    ///
    /// Identical requests produce byte-identical output.
    pub fn render(&self, request: &RenderRequest) -> EngineResult<RenderOutput> {
        let samples = self.render_source(&request.source, request.seed, "source")?;
        let samples = self.apply_chain(samples, &request.effects, request.seed)?;

        let pcm = self.encode(&samples, request.channels)?;
        let pcm_hash = pcm.pcm_hash();
        tracing::debug!(
            source = request.source.kind(),
            effects = request.effects.len(),
            samples = samples.len(),
            "rendered request"
        );

        Ok(RenderOutput {
            samples,
            pcm,
            pcm_hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_validates_config() {
        assert!(Engine::new(EngineConfig::default().with_volume(3.0)).is_err());
        assert!(Engine::new(EngineConfig::default()).is_ok());
    }

    #[test]
    fn test_defaults() {
        let engine = Engine::default();
        assert_eq!(engine.waveform(), Waveform::Square);
        assert_eq!(engine.palette().notes().len(), 12);
        assert_eq!(engine.config().sample_rate, 44100);
    }

    #[test]
    fn test_tone_uses_engine_waveform() {
        let engine = Engine::default().with_waveform(Waveform::Sine);
        assert_eq!(
            engine.tone(0.01, &[440.0]).unwrap(),
            engine.tone_with(0.01, Waveform::Sine, &[440.0]).unwrap()
        );
    }

    #[test]
    fn test_render_silence_with_effects() {
        let engine = Engine::default();
        let request = RenderRequest::new(Source::Silence { duration: 0.5 })
            .effect(Effect::Splice {
                source: Source::Silence { duration: 0.25 },
            })
            .effect(Effect::Resample { factor: 2.0 });

        let output = engine.render(&request).unwrap();
        assert_eq!(output.samples.len(), (22_050 + 11_025) * 2);
        assert!(output.samples.iter().all(|&s| s == 0));
        assert_eq!(output.pcm.data.len(), output.samples.len() * 2);
    }

    #[test]
    fn test_render_matches_direct_calls() {
        let engine = Engine::default();
        let request = RenderRequest::new(Source::Tone {
            duration: 0.1,
            frequencies: vec![440.0],
            waveform: Some(Waveform::Sine),
        })
        .effect(Effect::Amplitude { factor: 2.0 });

        let output = engine.render(&request).unwrap();
        let direct = engine
            .scale_amplitude(&engine.tone_with(0.1, Waveform::Sine, &[440.0]).unwrap(), 2.0)
            .unwrap();
        assert_eq!(output.samples, direct);
    }

    #[test]
    fn test_render_melody_uses_derived_stream() {
        let engine = Engine::default();
        let request = RenderRequest::new(Source::Melody {
            notes: 5,
            waveform: None,
        })
        .seed(99);

        let output = engine.render(&request).unwrap();
        let mut rng = create_component_rng(99, "source");
        let direct = engine.random_melody(5, &mut rng).unwrap();
        assert_eq!(output.samples, direct.samples);
    }

    #[test]
    fn test_render_propagates_errors() {
        let engine = Engine::default();
        let bad_source = RenderRequest::new(Source::Silence { duration: -1.0 });
        assert!(engine.render(&bad_source).is_err());

        let bad_effect = RenderRequest::new(Source::Silence { duration: 0.1 })
            .effect(Effect::Resample { factor: 0.0 });
        assert!(engine.render(&bad_effect).is_err());

        let mut no_channels = RenderRequest::new(Source::Silence { duration: 0.1 });
        no_channels.channels = 0;
        assert!(engine.render(&no_channels).is_err());
    }

    #[test]
    fn test_apply_chain_runs_in_order() {
        let engine = Engine::default();
        let chain = [
            Effect::Amplitude { factor: 2.0 },
            Effect::Splice {
                source: Source::Silence { duration: 0.0 },
            },
            Effect::Resample { factor: 2.0 },
        ];
        let out = engine.apply_chain(vec![1, 2, 3], &chain, 0).unwrap();
        assert_eq!(out, vec![2, 2, 4, 4, 6, 6]);
        assert_eq!(engine.apply_chain(vec![1, 2], &[], 0).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_noise_via_engine() {
        let engine = Engine::default();
        let a = engine.white_noise(0.1, &mut create_rng(5)).unwrap();
        let b = engine.white_noise(0.1, &mut create_rng(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }
}
