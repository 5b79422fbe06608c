//! Adapter module - the engine-facing side of the bot
//!
//! [`protocol`] owns the wire format: typed messages, line parsing, field
//! decoding and the accumulated [`protocol::BotState`]. [`runtime`] runs
//! the blocking read-dispatch-respond loop over injected I/O.

pub mod protocol;
pub mod runtime;

pub use protocol::{parse_line, BotState, Message, ProtocolError};
pub use runtime::{run, BotConfig};
