/// A-Z -> a-z, остальные кодпоинты не изменяются
#[inline(always)]
pub fn fold(code: u32) -> u32
{
    match code {
        0x41 ..= 0x5A => code + 0x20,
        _ => code,
    }
}

#[cfg(test)]
mod tests
{
    use super::fold;

    #[test]
    fn ascii_uppercase()
    {
        for c in 'A' ..= 'Z' {
            assert_eq!(fold(c as u32), c as u32 + 32);
        }
    }

    #[test]
    fn everything_else_is_untouched()
    {
        // границы диапазона, строчные, латиница-1 и кириллица в верхнем регистре
        for code in [0x40, 0x5B, 0x61, 0x7A, 0xC0, 0xC9, 0x0416, 0x10FFFF, u32::MAX] {
            assert_eq!(fold(code), code);
        }
    }
}
