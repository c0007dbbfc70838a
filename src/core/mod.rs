// logtriage - core/mod.rs
//
// Core engine layer: pure functions of text blob -> structured results.
// Must NOT depend on: app, I/O, or the filesystem. Collaborators hand the
// core in-memory text and consume owned result containers.

pub mod classify;
pub mod extract;
pub mod model;
pub mod report;
