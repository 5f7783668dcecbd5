//! WindowSystem service: responsibility and boundaries
//!
//! This module and its submodules are the ONLY place that talks to the window system
//! (wmctrl/xprop) and parses their text output into typed records. Everything above
//! this boundary works with `WindowRecord`, `WindowId` and `SelectionContext` and
//! never sees raw tool output. No matching or selection decisions are made here.

mod dry_run;
mod tool;
mod wmctrl;
mod x11;
mod xprop;
mod r#trait;

#[cfg(test)]
pub mod fake;

pub use self::r#trait::{create_window_system, WindowSystem};
