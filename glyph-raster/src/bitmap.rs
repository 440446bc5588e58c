//! Coverage bitmaps.

use alloc::vec::Vec;

use crate::RasterError;

/// A mutable view of an 8-bit coverage bitmap in caller owned memory.
///
/// Row `y` occupies `pixels[y * stride..y * stride + width]`. Bytes between
/// the end of a row and the start of the next are never written.
#[derive(Debug)]
pub struct BitmapMut<'a> {
    pixels: &'a mut [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> BitmapMut<'a> {
    /// Creates a view of `pixels` as a `width` by `height` bitmap whose rows
    /// start `stride` bytes apart.
    pub fn new(
        pixels: &'a mut [u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Self, RasterError> {
        let required = match height {
            0 => Some(0),
            _ => (height - 1)
                .checked_mul(stride)
                .and_then(|size| size.checked_add(width)),
        };
        if stride < width || required.map_or(true, |required| pixels.len() < required) {
            return Err(RasterError::InvalidDimensions {
                width,
                height,
                stride,
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
            stride,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the pixels of row `y`.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let start = y.checked_mul(self.stride)?;
        self.pixels.get(start..start.checked_add(self.width)?)
    }

    /// Returns the pixels of row `y` for writing.
    pub fn row_mut(&mut self, y: usize) -> Option<&mut [u8]> {
        let start = y.checked_mul(self.stride)?;
        self.pixels.get_mut(start..start.checked_add(self.width)?)
    }

    /// Sets every pixel to zero.
    pub fn clear(&mut self) {
        for y in 0..self.height {
            if let Some(row) = self.row_mut(y) {
                row.fill(0);
            }
        }
    }
}

/// An owned, tightly packed coverage bitmap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bitmap {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl Bitmap {
    /// Creates a bitmap with all pixels set to zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: alloc::vec![0; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns all pixels, row by row.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let start = y.checked_mul(self.width)?;
        self.pixels.get(start..start.checked_add(self.width)?)
    }

    /// Returns a mutable view for use as a rasterization target.
    pub fn as_bitmap_mut(&mut self) -> BitmapMut<'_> {
        BitmapMut {
            pixels: &mut self.pixels,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_dimensions() {
        let mut buf = [0u8; 20];
        assert!(BitmapMut::new(&mut buf, 4, 4, 5).is_ok());
        // last row does not need padding
        assert!(BitmapMut::new(&mut buf[..19], 4, 4, 5).is_ok());
        assert!(BitmapMut::new(&mut buf[..18], 4, 4, 5).is_err());
        assert_eq!(
            BitmapMut::new(&mut buf, 4, 2, 3).unwrap_err(),
            RasterError::InvalidDimensions {
                width: 4,
                height: 2,
                stride: 3
            }
        );
        assert!(BitmapMut::new(&mut [], 0, 0, 0).is_ok());
        assert!(BitmapMut::new(&mut buf, 1, usize::MAX, 2).is_err());
    }

    #[test]
    fn clear_leaves_padding() {
        let mut buf = [9u8; 10];
        let mut bitmap = BitmapMut::new(&mut buf, 3, 2, 5).unwrap();
        bitmap.clear();
        assert_eq!(bitmap.row(1), Some(&[0u8, 0, 0][..]));
        assert_eq!(buf, [0, 0, 0, 9, 9, 0, 0, 0, 9, 9]);
    }

    #[test]
    fn owned_bitmap_rows() {
        let mut bitmap = Bitmap::new(3, 2);
        bitmap.as_bitmap_mut().row_mut(1).unwrap()[2] = 255;
        assert_eq!(bitmap.row(0), Some(&[0u8, 0, 0][..]));
        assert_eq!(bitmap.row(1), Some(&[0u8, 0, 255][..]));
        assert_eq!(bitmap.row(2), None);
        assert_eq!(bitmap.pixels().len(), 6);
    }
}
