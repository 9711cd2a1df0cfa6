use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use crate::config::SessionConfig;
use crate::core::{DisplaySession, KeyPress};
use crate::error::{Error, Result};
use crate::frame::FrameStats;
use crate::lessons::{
    ClipLesson, GeometryLesson, HelloLesson, KeyPressesLesson, Lesson, LessonKind, TextureLesson,
};

/// Event loop driver for a single lesson
///
/// Opens the display session on the first resume, loads the lesson's media,
/// then polls events and redraws continuously until quit. Media is always
/// released before the session closes, including after a failed start.
pub struct App<L: Lesson> {
    config: SessionConfig,
    lesson: L,
    session: Option<DisplaySession>,
    stats: FrameStats,
    failure: Option<Error>,
}

impl<L: Lesson> App<L> {
    pub fn new(lesson: L, config: SessionConfig) -> Self {
        Self {
            config,
            lesson,
            session: None,
            stats: FrameStats::new(),
            failure: None,
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let session = self
            .session
            .insert(DisplaySession::open(event_loop, &self.config)?);
        self.lesson.load_media(session.context(), &self.config)
    }

    /// Release media, then close the session; idempotent
    fn shutdown(&mut self) {
        self.lesson.release();
        if let Some(mut session) = self.session.take() {
            session.close();
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(session) = &mut self.session else {
            return;
        };

        self.lesson.render(session.context_mut());

        match session.present() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory while presenting; quitting");
                event_loop.exit();
                return;
            }
            Err(e) => log::warn!("Render error: {}", e),
        }

        if let Some(fps) = self.stats.tick() {
            log::debug!("FPS: {:.1} ({} frames)", fps, self.stats.total_frames());
        }
    }

    /// Outcome of the run once the event loop has returned
    fn finish(mut self, outcome: Result<()>) -> Result<()> {
        self.shutdown();
        match self.failure.take() {
            Some(err) => Err(err),
            None => outcome,
        }
    }
}

impl<L: Lesson> ApplicationHandler for App<L> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() || self.failure.is_some() {
            return;
        }

        if let Err(err) = self.start(event_loop) {
            log::error!("{}", err);
            self.failure = Some(err);
            self.shutdown();
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key,
                        ..
                    },
                ..
            } => self
                .lesson
                .handle_key(KeyPress::from_physical_key(physical_key)),
            WindowEvent::Resized(size) => {
                if let Some(session) = &mut self.session {
                    session.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(session) = &self.session {
            session.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

/// Run `lesson` until the user quits
pub fn run<L: Lesson>(lesson: L, config: SessionConfig) -> Result<()> {
    let event_loop = EventLoop::new().map_err(|e| Error::init("event loop", e))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(lesson, config);
    let outcome = event_loop
        .run_app(&mut app)
        .map_err(|e| Error::init("event loop", e));

    app.finish(outcome)
}

/// Run the lesson picked on the command line
pub fn run_lesson(kind: LessonKind, config: SessionConfig) -> Result<()> {
    match kind {
        LessonKind::Hello => run(HelloLesson::new(), config),
        LessonKind::KeyPresses => run(KeyPressesLesson::new(), config),
        LessonKind::Texture => run(TextureLesson::new(), config),
        LessonKind::Clip => run(ClipLesson::new(), config),
        LessonKind::Geometry => run(GeometryLesson::new(), config),
    }
}
