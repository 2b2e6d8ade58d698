//! Application shell for LyricPane
//!
//! Wires the frameless window, the chrome, the renderer, and the lyric
//! clock into a winit event loop. Playback position is a local clock
//! counting from application start; the active lyric line is shown in
//! the window title and advanced with `ControlFlow::WaitUntil` wakeups.

use crate::lyrics::Lyrics;
use crate::renderer::ChromeRenderer;
use crate::utils::config::Config;
use crate::utils::error::{IntoPaneError, Result};
use crate::window::{BorderStyle, WindowChrome};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId, WindowLevel};

/// Build the border style described by the configuration.
pub fn border_style_from(config: &Config) -> BorderStyle {
    let mut style = BorderStyle::new()
        .with_thickness(config.chrome.border_thickness)
        .with_radius(config.chrome.border_radius);
    if let Some(color) = config.border_color() {
        style = style.with_color(color);
    }
    style
}

pub struct LyricPaneApp {
    config: Config,
    lyrics: Option<Lyrics>,
    chrome: WindowChrome,
    started: Instant,
    current_line: Option<String>,
    window: Option<Arc<Window>>,
    renderer: Option<ChromeRenderer>,
}

impl LyricPaneApp {
    pub fn new(config: Config, lyrics: Option<Lyrics>) -> Self {
        let mut chrome = WindowChrome::new(border_style_from(&config));
        chrome.set_resize_enabled(config.chrome.resizable);

        Self {
            config,
            lyrics,
            chrome,
            started: Instant::now(),
            current_line: None,
            window: None,
            renderer: None,
        }
    }

    fn position_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let level = if self.config.window.always_on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };

        let attributes = Window::default_attributes()
            .with_title(&self.config.window.title)
            .with_inner_size(LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ))
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(true)
            .with_window_level(level);

        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .window_err("Failed to create window")?,
        );

        self.renderer = Some(ChromeRenderer::new(window.clone())?);
        self.window = Some(window);

        Ok(())
    }

    fn redraw(&mut self) {
        let Some(renderer) = &mut self.renderer else { return };

        let (width, height) = renderer.surface_size();
        let spec = self.chrome.paint_spec(width, height);
        if let Err(e) = renderer.render(&spec) {
            log::error!("Render failed: {}", e);
        }
    }

    /// Move the lyric display forward to the line active at the current
    /// position. Returns the instant of the next line change, if any.
    fn advance_lyrics(&mut self) -> Option<Instant> {
        let lyrics = self.lyrics.as_ref()?;
        let position = self.position_ms();

        let line = lyrics.line_at(position).map(|entry| entry.text.clone());
        if line != self.current_line {
            self.current_line = line;
            if let Some(window) = &self.window {
                let title = self
                    .current_line
                    .as_deref()
                    .unwrap_or(&self.config.window.title);
                window.set_title(title);
                window.request_redraw();
            }
            if let Some(text) = &self.current_line {
                log::info!("Lyric: {}", text);
            }
        }

        lyrics
            .next_change_after(position)
            .map(|next| self.started + Duration::from_millis(next))
    }
}

impl ApplicationHandler for LyricPaneApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            log::error!("Startup failed: {}", e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        if self.chrome.handle_event(&event, window.as_ref()) && self.chrome.is_gesture_active() {
            // A manual drag may have changed geometry.
            window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        match self.advance_lyrics() {
            Some(next) => event_loop.set_control_flow(ControlFlow::WaitUntil(next)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

/// Run the application until the window is closed.
pub fn run(config: Config, lyrics: Option<Lyrics>) -> Result<()> {
    let event_loop = EventLoop::new().window_err("Failed to create event loop")?;

    let mut app = LyricPaneApp::new(config, lyrics);
    event_loop
        .run_app(&mut app)
        .window_err("Event loop terminated abnormally")
}
