pub mod nibble_codec;

pub use nibble_codec::{CodecOptions, NibbleCodec};
