// logtriage - lib.rs
//
// Library entry point, exposing all modules for integration testing and
// programmatic use. The CLI surface lives in `main.rs` and is not part
// of the library.

pub mod app;
pub mod core;
pub mod util;
