//! Application entry: load the font, shape the text, then show it.
//!
//! The shaped run is produced once. The window handler only lays it out and
//! paints it again when winit asks for a redraw (initial show, resize, scale
//! factor change).

use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use shape_view_fonts::FontManager;
use shape_view_render::{Canvas, GlyphRasterizer, Presenter, TextScene};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::{ViewConfig, WINDOW_TITLE};
use crate::report::write_glyph_report;
use crate::screenshot;

/// Main application state
pub struct App {
    config: ViewConfig,
    scene: TextScene,
    rasterizer: GlyphRasterizer,
}

impl App {
    /// Load the font, shape the text and print the glyph report to stdout.
    pub fn new(config: ViewConfig) -> Result<Self> {
        let fonts = FontManager::load(&config.font_file, config.face_index)
            .with_context(|| format!("failed to load font {}", config.font_file.display()))?;

        let metrics = fonts.metrics(config.font_size);
        log::info!(
            "Font metrics at {}px: ascent={:.2} descent={:.2} line_height={:.2}",
            config.font_size,
            metrics.ascent,
            metrics.descent,
            metrics.line_height()
        );

        let run = fonts
            .shape_text(&config.text, config.font_size, &config.shaping)
            .context("failed to shape text")?;
        if run.missing_glyph_count() > 0 {
            log::warn!(
                "{} of {} glyphs are missing from '{}'",
                run.missing_glyph_count(),
                run.glyph_count(),
                fonts.summary().family
            );
        }

        let mut stdout = std::io::stdout().lock();
        write_glyph_report(&run, &mut stdout).context("failed to write glyph report")?;
        stdout.flush()?;

        let scene = TextScene::new(run, config.font_size)
            .with_colors(config.foreground, config.background);
        let rasterizer = GlyphRasterizer::new(fonts.font().clone());

        Ok(App {
            config,
            scene,
            rasterizer,
        })
    }

    pub fn scene(&self) -> &TextScene {
        &self.scene
    }

    /// Write a screenshot if one was requested, otherwise open the window and
    /// block until it is closed.
    pub fn run(self) -> Result<()> {
        let App {
            config,
            scene,
            mut rasterizer,
        } = self;

        if let Some(path) = &config.screenshot {
            return screenshot::render_to_png(
                &scene,
                &mut rasterizer,
                config.width,
                config.height,
                path,
            );
        }

        let event_loop = EventLoop::new().context("failed to create event loop")?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut state = AppState::new(config, scene, rasterizer);
        event_loop.run_app(&mut state)?;

        match state.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Application state that handles events
struct AppState {
    config: ViewConfig,
    scene: TextScene,
    rasterizer: GlyphRasterizer,
    window: Option<Arc<Window>>,
    presenter: Option<Presenter>,
    /// When to close the window, from `--exit-after`
    deadline: Option<Instant>,
    /// First fatal error raised inside the event loop
    error: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: ViewConfig, scene: TextScene, rasterizer: GlyphRasterizer) -> Self {
        AppState {
            config,
            scene,
            rasterizer,
            window: None,
            presenter: None,
            deadline: None,
            error: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(
                f64::from(self.config.width),
                f64::from(self.config.height),
            ));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );
        let presenter =
            Presenter::new(Arc::clone(&window)).context("failed to create window surface")?;

        log::info!(
            "Window created: {}x{} physical, scale factor {}",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        self.deadline = self.config.exit_after.map(|d| Instant::now() + d);
        window.request_redraw();
        self.window = Some(window);
        self.presenter = Some(presenter);
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        let (Some(window), Some(presenter)) = (&self.window, &mut self.presenter) else {
            return Ok(());
        };

        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            // Minimized
            return Ok(());
        }

        let mut canvas = Canvas::new(size.width, size.height, window.scale_factor() as f32)?;
        self.scene.paint(&mut canvas, &mut self.rasterizer);
        window.pre_present_notify();
        presenter.present(&canvas)?;
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none()
            && let Err(e) = self.create_window(event_loop)
        {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                log::debug!("Resized to {}x{}", size.width, size.height);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                log::debug!("Scale factor changed to {}", scale_factor);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    self.fail(event_loop, e);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                log::info!("--exit-after elapsed, exiting");
                event_loop.exit();
            } else {
                event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
            }
        }
    }
}
