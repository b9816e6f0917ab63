//! HTTP service that lifts the audio track out of uploaded videos and, in
//! transcribe mode, runs offline speech recognition over the result.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
