// Word of the Day - app/mod.rs
//
// Application layer: session context, interaction handlers, persistence.
// Dependencies: core, platform, util.
// Must NOT depend on: ui.

pub mod session;
pub mod state;
