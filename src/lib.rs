//! TUI Frogger (workspace facade crate).
//!
//! Re-exports the member crates under `tui_frogger::{core,input,session,term,types}`
//! so binaries, tests and benches depend on one package.

pub use tui_frogger_core as core;
pub use tui_frogger_input as input;
pub use tui_frogger_session as session;
pub use tui_frogger_term as term;
pub use tui_frogger_types as types;
