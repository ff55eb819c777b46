//! Graphics support through `embedded-graphics`
//!
//! [`Display`] is a [`DrawTarget`] for [`Rgb565`]. Drawing coordinates are
//! logical: they follow the configured [`DisplayRotation`] and are mapped
//! onto the native panel orientation before any register is written.
//! Nothing is buffered, every pixel or filled area goes straight to the
//! controller.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};

use crate::config::DisplayRotation;
use crate::driver::{Controller, Display};
use crate::error::Error;
use crate::interface::RegisterInterface;

impl<C, DI> OriginDimensions for Display<C, DI>
where
    C: Controller,
    DI: RegisterInterface,
{
    fn size(&self) -> Size {
        let (width, height) = (u32::from(self.width()), u32::from(self.height()));
        if self.rotation().is_transposed() {
            Size::new(height, width)
        } else {
            Size::new(width, height)
        }
    }
}

impl<C, DI> DrawTarget for Display<C, DI>
where
    C: Controller,
    DI: RegisterInterface,
{
    type Color = Rgb565;
    type Error = Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = (self.width(), self.height());
        let rotation = self.rotation();
        for Pixel(point, color) in pixels {
            if outside_display(point, width, height, rotation) {
                continue;
            }
            let (x, y) = find_rotation(point.x as u16, point.y as u16, width, height, rotation);
            self.pixel(x, y, color.into())?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        let (width, height) = (self.width(), self.height());
        let rotation = self.rotation();
        let top_left = area.top_left;
        let (ax, ay) = find_rotation(top_left.x as u16, top_left.y as u16, width, height, rotation);
        let (bx, by) = find_rotation(
            bottom_right.x as u16,
            bottom_right.y as u16,
            width,
            height,
            rotation,
        );
        self.fill_region(ax.min(bx), ay.min(by), ax.max(bx), ay.max(by), color.into())
    }
}

// Checks if a logical point is outside the rotated display
fn outside_display(p: Point, width: u16, height: u16, rotation: DisplayRotation) -> bool {
    if p.x < 0 || p.y < 0 {
        return true;
    }
    let (x, y) = (p.x as u32, p.y as u32);
    let (width, height) = (u32::from(width), u32::from(height));
    if rotation.is_transposed() {
        y >= width || x >= height
    } else {
        x >= width || y >= height
    }
}

// Maps a logical point onto native panel coordinates
fn find_rotation(x: u16, y: u16, width: u16, height: u16, rotation: DisplayRotation) -> (u16, u16) {
    match rotation {
        DisplayRotation::Rotate0 => (x, y),
        DisplayRotation::Rotate90 => (width - 1 - y, x),
        DisplayRotation::Rotate180 => (width - 1 - x, height - 1 - y),
        DisplayRotation::Rotate270 => (y, height - 1 - x),
    }
}
