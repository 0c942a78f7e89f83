//! Blocking image viewer window.
//!
//! Opens one window at the configured size, draws the image through a
//! softbuffer CPU surface, and returns once the window is closed (close
//! button or Escape).

use std::num::NonZeroU32;
use std::sync::Arc;

use pixel_transform::Image;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::error::DisplayError;
use crate::models::DisplaySize;
use crate::rendering::frame::compose_frame;

const WINDOW_TITLE: &str = "pixsort";

struct ViewerSurface {
    window: Arc<Window>,
    // kept alive for the surface
    _context: softbuffer::Context<Arc<Window>>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
}

struct ImageViewer<'a> {
    image: &'a Image<i32>,
    size: DisplaySize,
    surface: Option<ViewerSurface>,
    error: Option<DisplayError>,
}

/// Show `image` in a window of `size` and block until it is closed.
pub fn show_image(image: &Image<i32>, size: DisplaySize) -> Result<(), DisplayError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut viewer = ImageViewer {
        image,
        size,
        surface: None,
        error: None,
    };
    event_loop.run_app(&mut viewer)?;

    match viewer.error.take() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

impl ImageViewer<'_> {
    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<(), DisplayError> {
        let attributes = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(self.size.width, self.size.height));
        let window = Arc::new(event_loop.create_window(attributes)?);
        let context = softbuffer::Context::new(Arc::clone(&window))?;
        let surface = softbuffer::Surface::new(&context, Arc::clone(&window))?;

        tracing::info!(
            width = self.size.width,
            height = self.size.height,
            "Opened image viewer"
        );

        self.surface = Some(ViewerSurface {
            window,
            _context: context,
            surface,
        });
        Ok(())
    }

    fn draw(&mut self) -> Result<(), DisplayError> {
        let Some(viewer) = self.surface.as_mut() else {
            return Ok(());
        };
        let size = viewer.window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            // minimized
            return Ok(());
        };

        viewer.surface.resize(width, height)?;
        let frame = compose_frame(self.image, size.width, size.height);
        let mut buffer = viewer.surface.buffer_mut()?;
        buffer.copy_from_slice(&frame);
        buffer.present()?;

        tracing::trace!(width = size.width, height = size.height, "Drew frame");
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: DisplayError) {
        tracing::error!(%error, "Image viewer failed");
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for ImageViewer<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }
        if let Err(error) = self.open(event_loop) {
            self.fail(event_loop, error);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(viewer) = self.surface.as_ref() else {
            return;
        };
        if window_id != viewer.window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::debug!("Viewer closed");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape) =>
            {
                event_loop.exit();
            }
            WindowEvent::Resized(_) => viewer.window.request_redraw(),
            WindowEvent::RedrawRequested => {
                if let Err(error) = self.draw() {
                    self.fail(event_loop, error);
                }
            }
            _ => {}
        }
    }
}
