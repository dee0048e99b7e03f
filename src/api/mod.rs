pub mod cell;
pub mod codec;
pub mod tripcode;

pub use cell::TripcodeCell;
pub use codec::{TripcodeCodec, decode, encode, encode_short, shift};
pub use tripcode::Tripcode;
