//! small utilities for building big-endian test data

/// A value that can be written to a [`BeBuffer`] in big-endian byte order.
pub trait BeScalar: Copy {
    fn write_be(self, out: &mut Vec<u8>);
}

macro_rules! impl_be_scalar {
    ($($ty:ty),*) => {
        $(
            impl BeScalar for $ty {
                fn write_be(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_be_bytes());
                }
            }
        )*
    };
}

impl_be_scalar!(u8, i8, u16, i16, u32, i32);

/// A convenience type for generating a buffer of big-endian bytes.
#[derive(Debug, Clone, Default)]
pub struct BeBuffer {
    data: Vec<u8>,
}

impl BeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer contains zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return a reference to the contents of the buffer
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Write any scalar to this buffer.
    pub fn push(mut self, item: impl BeScalar) -> Self {
        item.write_be(&mut self.data);
        self
    }

    /// Write multiple scalars into the buffer
    pub fn extend<T: BeScalar>(mut self, iter: impl IntoIterator<Item = T>) -> Self {
        for item in iter {
            item.write_be(&mut self.data);
        }
        self
    }

    /// Write `value` as an unsigned integer of `size` bytes (1 to 4).
    pub fn push_sized(mut self, value: u32, size: u8) -> Self {
        assert!((1..=4).contains(&size), "invalid integer size {size}");
        let bytes = value.to_be_bytes();
        self.data.extend_from_slice(&bytes[4 - size as usize..]);
        self
    }

    /// Write `value` using the shortest compact (CFF DICT) integer encoding.
    pub fn push_compact_int(self, value: i32) -> Self {
        match value {
            -107..=107 => self.push((value + 139) as u8),
            108..=1131 => {
                let v = value - 108;
                self.push((v >> 8) as u8 + 247).push(v as u8)
            }
            -1131..=-108 => {
                let v = -value - 108;
                self.push((v >> 8) as u8 + 251).push(v as u8)
            }
            -32768..=32767 => self.push(28u8).push(value as i16),
            _ => self.push(29u8).push(value),
        }
    }

    /// Write an INDEX containing `objects`, with offsets of `off_size`
    /// bytes.
    pub fn push_index(self, off_size: u8, objects: &[&[u8]]) -> Self {
        let mut buf = self.push(objects.len() as u16);
        if objects.is_empty() {
            return buf;
        }
        buf = buf.push(off_size);
        // offsets are 1-based
        let mut offset = 1u32;
        buf = buf.push_sized(offset, off_size);
        for object in objects {
            offset += object.len() as u32;
            buf = buf.push_sized(offset, off_size);
        }
        for object in objects {
            buf.data.extend_from_slice(object);
        }
        buf
    }
}
