//! Flushing pixel buffers to hardware

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::SmartLedsWrite;

use crate::OutputDriver;
use crate::color::Rgb;
use crate::target::PixelBuffer;

/// Something that can push its pixels out once per loop iteration
pub trait Show {
    fn show(&mut self);
}

impl Show for () {
    fn show(&mut self) {}
}

macro_rules! impl_show_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: Show),+> Show for ($($name,)+) {
            #[allow(non_snake_case)]
            fn show(&mut self) {
                let ($($name,)+) = self;
                $($name.show();)+
            }
        }
    };
}

impl_show_for_tuple!(A);
impl_show_for_tuple!(A, B);
impl_show_for_tuple!(A, B, C);
impl_show_for_tuple!(A, B, C, D);

/// A physical strip: its pixel buffer paired with the driver writing it
pub struct Strip<'a, O: OutputDriver, const N: usize> {
    buffer: &'a PixelBuffer<N>,
    driver: O,
}

impl<'a, O: OutputDriver, const N: usize> Strip<'a, O, N> {
    pub const fn new(buffer: &'a PixelBuffer<N>, driver: O) -> Self {
        Self { buffer, driver }
    }

    pub const fn buffer(&self) -> &'a PixelBuffer<N> {
        self.buffer
    }

    pub fn driver_mut(&mut self) -> &mut O {
        &mut self.driver
    }
}

impl<O: OutputDriver, const N: usize> Show for Strip<'_, O, N> {
    fn show(&mut self) {
        self.buffer.show(&mut self.driver);
    }
}

/// Adapter driving any `smart-leds` writer (WS2812, APA102, ...)
///
/// Write errors drop the frame; the next loop iteration writes a fresh one.
pub struct SmartLedsOutput<W>(pub W);

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn write(&mut self, colors: &[Rgb]) {
        let result = self.0.write(colors.iter().copied());
        #[cfg(feature = "esp32-log")]
        if result.is_err() {
            println!("[SmartLedsOutput.write] dropped frame of {} pixels", colors.len());
        }
        let _ = result;
    }
}
