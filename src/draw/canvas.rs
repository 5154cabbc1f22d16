//! Drawing surfaces provisioned for containers.
//!
//! A [`Canvas`] owns a Cairo image surface whose backing resolution may exceed
//! its displayed size on high-density displays. Geometry is always expressed in
//! logical pixels; [`Canvas::context`] applies the density scale.

use crate::geometry::Size;

/// Non-finite or non-positive ratios are treated as missing.
fn usable_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

/// Pixel-density compensation computed for one surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceLayout {
    /// Drawing dimensions in logical pixels (equals the measured container size)
    pub logical: Size,
    /// Backing store width in physical pixels
    pub backing_width: i32,
    /// Backing store height in physical pixels
    pub backing_height: i32,
    /// Scale applied to the drawing context (device ratio / backing ratio)
    pub scale: f64,
}

impl SurfaceLayout {
    /// Sizes a surface for a container of `width` x `height` logical pixels.
    ///
    /// When the device pixel ratio differs from the backing store ratio, the
    /// backing store grows by their quotient (truncated to whole pixels) while the
    /// displayed size stays at the measured size.
    pub fn compute(
        width: u32,
        height: u32,
        device_pixel_ratio: f64,
        backing_store_ratio: f64,
    ) -> Self {
        let device = usable_ratio(device_pixel_ratio);
        let backing = usable_ratio(backing_store_ratio);
        let logical = Size::new(width as f64, height as f64);

        if device == backing {
            return Self {
                logical,
                backing_width: clamp_dimension(logical.width),
                backing_height: clamp_dimension(logical.height),
                scale: 1.0,
            };
        }

        let scale = device / backing;
        Self {
            logical,
            backing_width: clamp_dimension((logical.width * scale).floor()),
            backing_height: clamp_dimension((logical.height * scale).floor()),
            scale,
        }
    }

    /// Whether the backing store differs from the displayed size.
    pub fn is_scaled(&self) -> bool {
        self.scale != 1.0
    }
}

fn clamp_dimension(value: f64) -> i32 {
    value.clamp(0.0, i32::MAX as f64) as i32
}

/// A per-container drawing surface.
#[derive(Debug)]
pub struct Canvas {
    surface: cairo::ImageSurface,
    layout: SurfaceLayout,
}

impl Canvas {
    /// Allocates a transparent ARGB surface with the layout's backing size.
    pub fn new(layout: SurfaceLayout) -> Result<Self, cairo::Error> {
        let surface = cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            layout.backing_width,
            layout.backing_height,
        )?;
        Ok(Self { surface, layout })
    }

    pub fn layout(&self) -> &SurfaceLayout {
        &self.layout
    }

    /// Drawing dimensions in logical pixels.
    pub fn logical_size(&self) -> Size {
        self.layout.logical
    }

    /// Backing store dimensions in physical pixels.
    pub fn backing_size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    /// Creates a drawing context whose user space is in logical pixels.
    pub fn context(&self) -> Result<cairo::Context, cairo::Error> {
        let ctx = cairo::Context::new(&self.surface)?;
        if self.layout.is_scaled() {
            ctx.scale(self.layout.scale, self.layout.scale);
        }
        Ok(ctx)
    }

    /// The underlying Cairo surface.
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Returns true if any pixel has been painted.
    ///
    /// Requires that no drawing context for this canvas is still alive.
    pub fn has_ink(&mut self) -> bool {
        self.surface.flush();
        self.surface
            .data()
            .map(|data| data.iter().any(|byte| *byte != 0))
            .unwrap_or(false)
    }

    /// Premultiplied ARGB value of the backing pixel under logical point (x, y).
    ///
    /// Returns `None` outside the surface or while a drawing context is alive.
    pub fn pixel(&mut self, x: f64, y: f64) -> Option<u32> {
        let px = (x * self.layout.scale).floor();
        let py = (y * self.layout.scale).floor();
        let (width, height) = self.backing_size();
        if px < 0.0 || py < 0.0 || px >= width as f64 || py >= height as f64 {
            return None;
        }

        let stride = self.surface.stride() as usize;
        self.surface.flush();
        let data = self.surface.data().ok()?;
        let offset = py as usize * stride + px as usize * 4;
        let bytes: [u8; 4] = data.get(offset..offset + 4)?.try_into().ok()?;
        Some(u32::from_ne_bytes(bytes))
    }
}
