// CV generation: fixed-template synthesis plus a pluggable match scorer.
// The job description gates the request but does not shape the document.

pub mod handlers;
pub mod progress;
pub mod scoring;
pub mod synthesizer;
