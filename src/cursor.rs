use crate::error::DecodeError;
use crate::utf8::decode_at;

/// позиция в буфере в течение одного прохода нормализации
///
/// позиция только растёт и никогда не выходит за пределы буфера
pub struct ByteCursor<'a>
{
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a>
{
    #[inline(always)]
    pub fn new(bytes: &'a [u8]) -> Self
    {
        Self { bytes, position: 0 }
    }

    /// текущая позиция
    #[inline(always)]
    pub fn position(&self) -> usize
    {
        self.position
    }

    /// данные закончились?
    #[inline(always)]
    pub fn is_empty(&self) -> bool
    {
        self.position >= self.bytes.len()
    }

    /// разобрать кодпоинт в текущей позиции, не сдвигая её
    #[inline(always)]
    pub fn decode(&self) -> Result<(u32, usize), DecodeError>
    {
        decode_at(self.bytes, self.position)
    }

    /// сдвинуться на width байт, но не дальше конца буфера
    #[inline(always)]
    pub fn advance(&mut self, width: usize)
    {
        debug_assert!(width > 0);
        self.position = (self.position + width).min(self.bytes.len());
    }
}
