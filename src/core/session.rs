use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use super::render_context::RenderContext;
use super::surface_renderer::SurfaceRenderer;
use crate::config::SessionConfig;
use crate::error::{Error, Result};

static SESSION_LIVE: AtomicBool = AtomicBool::new(false);

/// Claim on the process-wide display session slot
#[derive(Debug)]
struct SessionGuard(());

impl SessionGuard {
    fn acquire() -> Result<Self> {
        SESSION_LIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(()))
            .map_err(|_| Error::init("display session", "another session is already open"))
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        SESSION_LIVE.store(false, Ordering::Release);
    }
}

/// The window plus the render context drawn into it
///
/// At most one session is open per process. Closing it invalidates every
/// texture bound to its render context.
pub struct DisplaySession {
    context: RenderContext,
    renderer: Option<SurfaceRenderer>,
    window: Option<Arc<Window>>,
    _guard: Option<SessionGuard>,
}

impl DisplaySession {
    /// Create the window and GPU surface described by `config`
    pub fn open(event_loop: &ActiveEventLoop, config: &SessionConfig) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(Error::init(
                "display session",
                format!("invalid viewport {}x{}", config.width, config.height),
            ));
        }

        let guard = SessionGuard::acquire()?;

        let attributes = Window::default_attributes()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(false);
        let window = event_loop
            .create_window(attributes)
            .map(Arc::new)
            .map_err(|e| Error::init("window", e))?;

        let renderer = pollster::block_on(SurfaceRenderer::new(
            window.clone(),
            config.width,
            config.height,
        ))?;

        let context = RenderContext::with_max_texture_dimension(
            config.width,
            config.height,
            renderer.max_texture_dimension(),
        );

        log::info!(
            "Opened display session \"{}\" ({}x{})",
            config.title,
            config.width,
            config.height
        );

        Ok(Self {
            context,
            renderer: Some(renderer),
            window: Some(window),
            _guard: Some(guard),
        })
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut RenderContext {
        &mut self.context
    }

    pub fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Present the render context's frame buffer
    pub fn present(&mut self) -> std::result::Result<(), wgpu::SurfaceError> {
        match &mut self.renderer {
            Some(renderer) => renderer.present(self.context.canvas().pixels()),
            None => Ok(()),
        }
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(size.width, size.height);
        }
    }

    /// Tear down the surface and window; idempotent
    pub fn close(&mut self) {
        if !self.context.is_open() {
            return;
        }

        self.context.close();
        self.renderer = None;
        self.window = None;
        self._guard = None;
        log::info!("Display session closed");
    }
}

impl Drop for DisplaySession {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_session_slot() {
        let first = SessionGuard::acquire().unwrap();
        assert!(SessionGuard::acquire().is_err());

        drop(first);
        let again = SessionGuard::acquire();
        assert!(again.is_ok());
    }
}
