//! Tool handlers behind the MCP server.
//!
//! Each handler works on a plain `&mut DocEngine` and returns the text sent back to the
//! client, so handlers can be exercised without a transport.

pub mod reload;
pub mod search;
pub mod section;
pub mod topics;

pub use reload::*;
pub use search::*;
pub use section::*;
pub use topics::*;
