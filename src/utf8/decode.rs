use super::{CONT_MASK, CONT_TAG};
use crate::error::DecodeError;
use crate::INVALID_CODE;

/// количество байт в последовательности UTF-8 по первому байту, 0 - байт не может начинать последовательность
///
/// проверяется только шаблон старших бит: C0, C1 (overlong) и F5 ..= F7 (за пределами U+10FFFF)
/// считаются корректными первыми байтами
#[inline(always)]
pub fn sequence_width(first: u8) -> usize
{
    match first {
        0x00 ..= 0x7F => 1,
        0xC0 ..= 0xDF => 2,
        0xE0 ..= 0xEF => 3,
        0xF0 ..= 0xF7 => 4,
        _ => 0,
    }
}

/// прочитать кодпоинт, начинающийся с позиции offset
///
/// возвращает код и количество прочитанных байт. при ошибке не читается ни одного байта,
/// решение о том, как двигаться дальше, остаётся за вызывающим кодом
pub fn decode_at(bytes: &[u8], offset: usize) -> Result<(u32, usize), DecodeError>
{
    let first = match bytes.get(offset) {
        Some(&first) => first,
        None => return Err(DecodeError::OutOfBounds { offset }),
    };

    let width = sequence_width(first);

    match width {
        0 => return Err(DecodeError::InvalidLeadingByte { offset, byte: first }),
        1 => return Ok((first as u32, 1)),
        _ => (),
    }

    if bytes.len() - offset < width {
        return Err(DecodeError::Truncated { offset, expected: width });
    }

    let mut code = utf8_first_byte(first, width);

    for (i, &byte) in bytes[offset + 1 .. offset + width].iter().enumerate() {
        if byte & !CONT_MASK != CONT_TAG {
            return Err(DecodeError::InvalidContinuation { offset: offset + 1 + i, byte });
        }

        code = utf8_acc_cont_byte(code, byte);
    }

    Ok((code, width))
}

/// то же, что и decode_at, но ошибка записывается как INVALID_CODE (0xFFFFFFFF)
#[inline]
pub fn decode_code_at(bytes: &[u8], offset: usize) -> u32
{
    match decode_at(bytes, offset) {
        Ok((code, _)) => code,
        Err(_) => INVALID_CODE,
    }
}

/// убираем старшие биты первого байта UTF-8 последовательности: 5, 4, 3 бита значения
#[inline(always)]
fn utf8_first_byte(byte: u8, width: usize) -> u32
{
    (byte & (0x7F >> width)) as u32
}

/// убираем 2 старших бита у следующего байта последовательности и комбинируем с предыдущим значением
#[inline(always)]
fn utf8_acc_cont_byte(code: u32, byte: u8) -> u32
{
    (code << 6) | (byte & CONT_MASK) as u32
}
