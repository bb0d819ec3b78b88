use core::ops::Deref;

use super::{CONT_MASK, CONT_TAG};
use crate::error::EncodeError;
use crate::LAST_CODE;

/// UTF-8 представление одного кодпоинта, 1 ..= 4 байт
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Utf8Bytes
{
    bytes: [u8; 4],
    len: u8,
}

impl Deref for Utf8Bytes
{
    type Target = [u8];

    #[inline(always)]
    fn deref(&self) -> &[u8]
    {
        &self.bytes[.. self.len as usize]
    }
}

impl core::fmt::Debug for Utf8Bytes
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{:02X?}", self.deref())
    }
}

/// записать кодпоинт в UTF-8
///
/// суррогаты кодируются как обычные 3-байтовые последовательности, кодпоинты выше U+10FFFF
/// кодирования не имеют
#[inline]
pub fn encode(code: u32) -> Result<Utf8Bytes, EncodeError>
{
    let mut bytes = [0; 4];

    let len = match code {
        0 ..= 0x7F => {
            bytes[0] = code as u8;
            1
        }
        0x80 ..= 0x7FF => {
            bytes[0] = 0b_1100_0000 | (code >> 6) as u8;
            bytes[1] = cont_byte(code);
            2
        }
        0x800 ..= 0xFFFF => {
            bytes[0] = 0b_1110_0000 | (code >> 12) as u8;
            bytes[1] = cont_byte(code >> 6);
            bytes[2] = cont_byte(code);
            3
        }
        0x10000 ..= LAST_CODE => {
            bytes[0] = 0b_1111_0000 | (code >> 18) as u8;
            bytes[1] = cont_byte(code >> 12);
            bytes[2] = cont_byte(code >> 6);
            bytes[3] = cont_byte(code);
            4
        }
        _ => return Err(EncodeError::OutOfRange(code)),
    };

    Ok(Utf8Bytes { bytes, len })
}

/// дописать UTF-8 представление кодпоинта в буфер, возвращает количество записанных байт
///
/// при ошибке буфер не изменяется
#[inline]
pub fn encode_into(code: u32, output: &mut Vec<u8>) -> Result<usize, EncodeError>
{
    let bytes = encode(code)?;
    output.extend_from_slice(&bytes);

    Ok(bytes.len())
}

/// младшие 6 бит значения в виде байта продолжения
#[inline(always)]
fn cont_byte(bits: u32) -> u8
{
    CONT_TAG | (bits as u8 & CONT_MASK)
}
