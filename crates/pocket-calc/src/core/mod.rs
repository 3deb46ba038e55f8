//! Calculator engine
//!
//! Everything here is free of presentation concerns: a key goes in, two
//! display strings come out.

mod engine;
mod format;
pub mod key;
mod operand;
mod operations;

pub use engine::{Calculator, DisplaySnapshot};
pub use format::{format_number, parse_number};
pub use key::{parse_sequence, Key, KeyParseError};
pub use operand::{InputBuffer, MAX_INPUT_LEN};
pub use operations::Operator;
