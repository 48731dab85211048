//! Tinkertone Synthesis Engine
//!
//! Generates integer PCM sample buffers from parametric waveforms, composes
//! random melodies from an equal-tempered scale, transforms buffers (splice,
//! echo, normalize, resample, amplitude) and packs them into 16-bit
//! little-endian PCM.
//!
//! The engine does no I/O: it never opens audio devices or writes files.
//! Callers receive a [`PcmStream`] (bytes plus sample rate, bit depth and
//! channel count) and hand it to whatever plays or stores it.
//!
//! # Determinism
//!
//! Every operation is a pure function of its arguments and an explicit
//! [`EngineConfig`]. Stochastic operations take the RNG as a parameter; with
//! a seeded PCG32 from [`rng::create_rng`] the output is bit-for-bit
//! reproducible.
//!
//! # Example
//!
//! ```
//! use tinkertone_engine::{rng, Engine, EngineConfig};
//!
//! let engine = Engine::new(EngineConfig::default())?;
//! let melody = engine.random_melody(12, &mut rng::create_rng(42))?;
//! let pcm = engine.encode(&melody.samples, 1)?;
//!
//! assert_eq!(pcm.data.len(), melody.samples.len() * 2);
//! # Ok::<(), tinkertone_engine::EngineError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`Engine`] - Session facade and request rendering
//! - [`config`] - Engine configuration and compatibility switches
//! - [`waveform`] - Square, sine, triangle and sawtooth functions
//! - [`scale`] - Equal-temperament scales and the melody palette
//! - [`synthesis`] - Silence, tone and white noise generators
//! - [`melody`] - Random melody composition
//! - [`effects`] - Buffer transforms
//! - [`pcm`] - 16-bit PCM encoder
//! - [`request`] - Declarative render requests
//! - [`rng`] - Deterministic RNG helpers

pub mod config;
pub mod effects;
pub mod engine;
pub mod error;
pub mod melody;
pub mod pcm;
pub mod request;
pub mod rng;
pub mod scale;
pub mod synthesis;
pub mod waveform;

// Re-export main types at crate root
pub use config::{Compat, EngineConfig, MAX_AMPLITUDE, SAMPLE_RATE};
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use melody::{Melody, MelodyNote};
pub use pcm::{encode16, PcmStream};
pub use request::{Effect, RenderOutput, RenderRequest, Source};
pub use scale::{populate_notes, Palette};
pub use synthesis::Sample;
pub use waveform::Waveform;
