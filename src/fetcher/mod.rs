//! Sound downloading.
//!
//! - [`SoundSource`](source::SoundSource): where bytes come from
//! - [`fetch_sounds`](run::fetch_sounds): the sequential fetch loop

pub mod run;
pub mod source;

pub use run::{fetch_default_sounds, fetch_sounds, print_event, FetchEvent};
pub use source::{HttpSource, SoundSource};
