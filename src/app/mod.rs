// logtriage - app/mod.rs
//
// Application layer: file reading, output sinks, and the triage
// pipeline that wires the core engine to the filesystem. Everything the
// core treats as a collaborator lives here.

pub mod pipeline;
pub mod sink;
