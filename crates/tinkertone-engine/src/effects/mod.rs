//! Buffer effects.
//!
//! Every effect is a pure transform: it reads caller-owned buffers and
//! returns a new one. None of them clamp to the 16-bit range unless stated;
//! run the result through [`crate::pcm::encode16`] before any output.

pub mod amplitude;
pub mod echo;
pub mod normalize;
pub mod resample;
pub mod splice;

pub use amplitude::scale_amplitude;
pub use echo::echo;
pub use normalize::normalize;
pub use resample::resample;
pub use splice::splice;
