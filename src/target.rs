//! Physical pixel buffers and the addressable views animations draw into.
//!
//! A [`PixelBuffer`] owns the colors of one physical strip. Animations never
//! own a buffer: they hold a [`PixelTarget`], a copyable view mapping logical
//! indices `[0, len)` onto `offset + index * stride` of the buffer. Several
//! views may alias the same buffer, e.g. to split one strip between effects;
//! writes through any view are visible through every other view immediately.

use core::cell::RefCell;
use core::fmt;

use critical_section::Mutex;

use crate::OutputDriver;
use crate::color::{BLACK, Rgb};
use crate::error::{Error, Parameter};

/// Storage backing a [`PixelTarget`]
///
/// Writes go through a shared reference: implementors are responsible for
/// serializing access to the underlying pixels.
pub trait PixelStorage {
    /// Number of physical pixels
    fn len(&self) -> usize;

    /// Returns `true` if the storage holds no pixels
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read a physical pixel, out of range indices read as black
    fn read(&self, index: usize) -> Rgb;

    /// Write a physical pixel, out of range indices are ignored
    fn write(&self, index: usize, color: Rgb);

    /// Write `count` pixels starting at `offset`, `stride` apart
    fn fill(&self, offset: usize, count: usize, stride: usize, color: Rgb) {
        for i in 0..count {
            self.write(offset + i * stride, color);
        }
    }
}

/// Pixel buffer of a single physical strip
///
/// Const-constructible and `Sync`, so it can be placed in a `static`.
pub struct PixelBuffer<const N: usize> {
    pixels: Mutex<RefCell<[Rgb; N]>>,
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a buffer with all pixels off
    pub const fn new() -> Self {
        Self {
            pixels: Mutex::new(RefCell::new([BLACK; N])),
        }
    }

    /// View over the whole buffer
    pub fn target(&self) -> PixelTarget<'_> {
        PixelTarget::new(self)
    }

    /// Copy of the current pixel colors
    pub fn snapshot(&self) -> [Rgb; N] {
        critical_section::with(|cs| *self.pixels.borrow(cs).borrow())
    }

    /// Turn every pixel off
    pub fn clear(&self) {
        critical_section::with(|cs| {
            self.pixels.borrow(cs).borrow_mut().fill(BLACK);
        });
    }

    /// Push the current frame to the hardware
    pub fn show<O: OutputDriver>(&self, driver: &mut O) {
        let frame = self.snapshot();
        driver.write(&frame);
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelStorage for PixelBuffer<N> {
    fn len(&self) -> usize {
        N
    }

    fn read(&self, index: usize) -> Rgb {
        critical_section::with(|cs| {
            self.pixels
                .borrow(cs)
                .borrow()
                .get(index)
                .copied()
                .unwrap_or(BLACK)
        })
    }

    fn write(&self, index: usize, color: Rgb) {
        critical_section::with(|cs| {
            if let Some(pixel) = self.pixels.borrow(cs).borrow_mut().get_mut(index) {
                *pixel = color;
            }
        });
    }

    fn fill(&self, offset: usize, count: usize, stride: usize, color: Rgb) {
        critical_section::with(|cs| {
            let mut pixels = self.pixels.borrow(cs).borrow_mut();
            for i in 0..count {
                if let Some(pixel) = pixels.get_mut(offset + i * stride) {
                    *pixel = color;
                }
            }
        });
    }
}

/// Addressable view over a range of a pixel buffer
#[derive(Clone, Copy)]
pub struct PixelTarget<'a> {
    storage: &'a dyn PixelStorage,
    offset: usize,
    len: usize,
    stride: usize,
}

impl<'a> PixelTarget<'a> {
    /// View over all pixels of `storage`
    pub fn new(storage: &'a dyn PixelStorage) -> Self {
        Self {
            storage,
            offset: 0,
            len: storage.len(),
            stride: 1,
        }
    }

    /// Number of logical pixels in the view
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    const fn physical(&self, index: usize) -> usize {
        self.offset + index * self.stride
    }

    /// Set a pixel, failing if `index` is outside of the view
    pub fn try_set(&self, index: usize, color: Rgb) -> Result<(), Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.storage.write(self.physical(index), color);
        Ok(())
    }

    /// Set a pixel
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside of the view.
    #[track_caller]
    pub fn set(&self, index: usize, color: Rgb) {
        if let Err(err) = self.try_set(index, color) {
            panic!("{err}");
        }
    }

    /// Read a pixel back, `None` if `index` is outside of the view
    pub fn get(&self, index: usize) -> Option<Rgb> {
        (index < self.len).then(|| self.storage.read(self.physical(index)))
    }

    /// Set every pixel of the view to one color
    pub fn fill(&self, color: Rgb) {
        self.storage
            .fill(self.offset, self.len, self.stride, color);
    }

    /// View over `[start, start + len)` of this view
    pub fn subset(&self, start: usize, len: usize) -> Result<Self, Error> {
        if start.checked_add(len).is_none_or(|end| end > self.len) {
            return Err(Error::InvalidRange {
                start,
                len,
                parent_len: self.len,
            });
        }
        Ok(Self {
            storage: self.storage,
            offset: self.physical(start),
            len,
            stride: self.stride,
        })
    }

    /// View over every `step`-th pixel of this view, starting at the first
    pub fn step_by(&self, step: usize) -> Result<Self, Error> {
        if step == 0 {
            return Err(Error::InvalidParameter(Parameter::Step));
        }
        let stride = self
            .stride
            .checked_mul(step)
            .ok_or(Error::InvalidParameter(Parameter::Step))?;
        Ok(Self {
            storage: self.storage,
            offset: self.offset,
            len: self.len.div_ceil(step),
            stride,
        })
    }
}

impl fmt::Debug for PixelTarget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelTarget")
            .field("offset", &self.offset)
            .field("len", &self.len)
            .field("stride", &self.stride)
            .finish_non_exhaustive()
    }
}
