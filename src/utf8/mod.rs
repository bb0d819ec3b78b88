//! UTF-8: разбор одного кодпоинта из байтового буфера и обратная запись

mod decode;
mod encode;

pub use decode::decode_at;
pub use decode::decode_code_at;
pub use decode::sequence_width;
pub use encode::encode;
pub use encode::encode_into;
pub use encode::Utf8Bytes;

/// маска, исключающая 2 старших бита в 2, 3, 4 байтах последовательности UTF-8
const CONT_MASK: u8 = 0b_0011_1111;
/// старшие биты байта продолжения - 10xxxxxx
const CONT_TAG: u8 = 0b_1000_0000;
