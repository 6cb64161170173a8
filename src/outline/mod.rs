//! Deterministic outline generation
//!
//! Everything that turns a seed string into vector geometry lives here. This
//! module must stay pure and deterministic:
//! - Seeded stream only, one draw per perturbation, draw order fixed
//! - No I/O, no shared state, no platform dependencies
//! - A generation call owns its stream and buffers and returns an immutable path

pub mod engine;
pub mod path;
pub mod sample;
pub mod smooth;
pub mod stream;

pub use engine::{Generator, MeatOutline, Outline, meat_outline, shell_outline};
pub use path::{Path, PathCommand};
pub use sample::{ArcSweep, ProtrusionSet, sample_arc};
pub use stream::{SeededStream, seed_hash};
