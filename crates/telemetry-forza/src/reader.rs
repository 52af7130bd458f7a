//! Lenient little-endian field reader.
//!
//! Every read is bounds-checked on its own. When fewer bytes remain than the
//! field needs, the read consumes nothing and yields the zero value of its
//! type, so a truncated or future-version packet decodes with zeroed trailing
//! fields instead of failing. The first short read exhausts the reader: later
//! reads yield zero even if they would fit in the leftover bytes.

/// Cursor-style byte reader that never errors on short input.
#[derive(Debug, Clone)]
pub struct FieldReader<'a> {
    data: &'a [u8],
    pos: usize,
    exhausted: bool,
}

impl<'a> FieldReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            exhausted: false,
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left after the current position. Zero once a read came up short.
    pub fn remaining(&self) -> usize {
        if self.exhausted {
            return 0;
        }
        self.data.len().saturating_sub(self.pos)
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    #[inline]
    pub fn read_u8(&mut self) -> u8 {
        self.take::<1>().map(u8::from_le_bytes).unwrap_or(0)
    }

    #[inline]
    pub fn read_i8(&mut self) -> i8 {
        self.take::<1>().map(i8::from_le_bytes).unwrap_or(0)
    }

    #[inline]
    pub fn read_u16(&mut self) -> u16 {
        self.take::<2>().map(u16::from_le_bytes).unwrap_or(0)
    }

    #[inline]
    pub fn read_i16(&mut self) -> i16 {
        self.take::<2>().map(i16::from_le_bytes).unwrap_or(0)
    }

    #[inline]
    pub fn read_u32(&mut self) -> u32 {
        self.take::<4>().map(u32::from_le_bytes).unwrap_or(0)
    }

    #[inline]
    pub fn read_i32(&mut self) -> i32 {
        self.take::<4>().map(i32::from_le_bytes).unwrap_or(0)
    }

    /// Raw IEEE-754 value. Non-finite values are passed through untouched;
    /// the derived accessors decide how to present them.
    #[inline]
    pub fn read_f32(&mut self) -> f32 {
        self.take::<4>().map(f32::from_le_bytes).unwrap_or(0.0)
    }

    #[inline]
    pub fn read_i64(&mut self) -> i64 {
        self.take::<8>().map(i64::from_le_bytes).unwrap_or(0)
    }

    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        if self.exhausted {
            return None;
        }
        let bytes = self
            .pos
            .checked_add(N)
            .and_then(|end| self.data.get(self.pos..end))
            .and_then(|slice| <[u8; N]>::try_from(slice).ok());
        match bytes {
            Some(bytes) => {
                self.pos = self.pos.saturating_add(N);
                Some(bytes)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}
