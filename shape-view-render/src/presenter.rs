//! Presents a canvas into a winit window through softbuffer.

use std::num::NonZeroU32;
use std::sync::Arc;

use softbuffer::{Context, Surface};
use winit::window::Window;

use crate::canvas::Canvas;
use crate::error::RenderError;

pub struct Presenter {
    surface: Surface<Arc<Window>, Arc<Window>>,
    /// Kept alive for the lifetime of the surface
    _context: Context<Arc<Window>>,
}

impl Presenter {
    pub fn new(window: Arc<Window>) -> Result<Self, RenderError> {
        let context = Context::new(Arc::clone(&window))?;
        let surface = Surface::new(&context, window)?;
        Ok(Presenter {
            surface,
            _context: context,
        })
    }

    /// Resize the surface to the canvas and present its pixels.
    pub fn present(&mut self, canvas: &Canvas) -> Result<(), RenderError> {
        let (Some(width), Some(height)) = (
            NonZeroU32::new(canvas.width()),
            NonZeroU32::new(canvas.height()),
        ) else {
            return Err(RenderError::InvalidCanvasSize {
                width: canvas.width(),
                height: canvas.height(),
            });
        };

        self.surface.resize(width, height)?;
        let mut buffer = self.surface.buffer_mut()?;
        canvas.copy_to_xrgb(&mut buffer)?;
        buffer.present()?;
        Ok(())
    }
}
