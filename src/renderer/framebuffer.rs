//! In-memory RGB565 frame buffer
//!
//! Stands in for the panel driver on a host: drawing goes through
//! `embedded-graphics`, and `present` optionally streams the raw frame to a
//! writer (file, pipe to a viewer, ...).

use std::convert::Infallible;
use std::io::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_9X15};
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};

use super::{Rgb565, Surface};

pub struct Framebuffer {
    width: u32,
    height: u32,
    /// Row-major raw RGB565 pixels
    pixels: Vec<u16>,
    frames_presented: u64,
    sink: Option<Box<dyn Write>>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
            frames_presented: 0,
            sink: None,
        }
    }

    /// Stream every presented frame to `sink`
    pub fn with_sink(mut self, sink: Box<dyn Write>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb565> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let raw = self.pixels[self.index(x, y)];
        Some(Rgb565::from(RawU16::new(raw)))
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Raw frame bytes, one native-endian u16 per pixel
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x < self.width && y < self.height {
                let i = self.index(x, y);
                self.pixels[i] = color.into_storage();
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill(color.into_storage());
        Ok(())
    }
}

impl Surface for Framebuffer {
    fn bounds(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill(&mut self, color: Rgb565) {
        let _ = self.clear(color);
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: u32, color: Rgb565) {
        let _ = Circle::with_center(Point::new(x, y), radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(self);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: u32, color: Rgb565) {
        // Mono fonts don't scale, so pick the closest size instead
        let font = if scale >= 2 { &FONT_9X15 } else { &FONT_6X10 };
        let style = MonoTextStyle::new(font, color);
        let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(self);
    }

    fn present(&mut self) {
        self.frames_presented += 1;
        let failed = match self.sink.as_mut() {
            Some(sink) => {
                let bytes: &[u8] = bytemuck::cast_slice(&self.pixels);
                sink.write_all(bytes).and_then(|_| sink.flush()).err()
            }
            None => None,
        };
        if let Some(e) = failed {
            log::warn!("Frame sink write failed, disabling: {}", e);
            self.sink = None;
        }
    }
}
