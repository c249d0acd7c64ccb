// Word of the Day - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library, directories crate, util, core model types.
// Must NOT depend on: app, ui.

pub mod config;
pub mod fs;
