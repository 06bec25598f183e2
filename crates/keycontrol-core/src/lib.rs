//! # keycontrol-core
//!
//! Shared library for KeyControl containing the key name registry, the
//! platform key code tables, press request validation and the auth gate.
//!
//! It has zero dependencies on OS APIs, async runtimes or network sockets, so
//! everything here can be tested with plain `#[test]` functions.
//!
//! # Architecture overview (for beginners)
//!
//! KeyControl is a tiny HTTP service that presses keys on the machine it runs
//! on.  A caller sends `POST /press?keyCode=A&ctrl=true` and the server
//! simulates Ctrl+A.  This crate holds the part of that pipeline that does not
//! touch the outside world:
//!
//! - **`keymap`** – The key name registry (`"ENTER"` → key code) and the
//!   translation tables from the canonical key code (a USB HID Usage ID) to
//!   X11 KeySyms, Windows VK codes and macOS CGKeyCodes.
//!
//! - **`domain`** – Turning untrusted query parameters into a validated
//!   [`PressRequest`], and checking the API token.

pub mod domain;
pub mod keymap;

// Re-export the most-used types at the crate root so callers can write
// `keycontrol_core::PressRequest` instead of the full module path.
pub use domain::auth::{authorize, AuthToken};
pub use domain::press::{ModifierSet, PressKind, PressRequest, ResolvedKey, ValidationError};
pub use keymap::hid::HidKeyCode;
pub use keymap::names::resolve;
pub use keymap::KeyMapper;
