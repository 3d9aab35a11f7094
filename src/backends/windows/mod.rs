#![cfg(target_os = "windows")]

//! Windows input backends.
//!
//! - **SendInput** injection of finished record batches
//! - **Key state** queries via `GetKeyState` (message-queue view) and
//!   `GetAsyncKeyState` (hardware view)
//!
//! Most users should go through [`Simulator::windows`](crate::simulator::Simulator)
//! or [`system_sink`](crate::sink::system_sink) rather than these types directly.

pub mod key_state;
pub mod send_input;

pub use key_state::WindowsKeyState;
pub use send_input::SendInputSink;
