//! WGPU-based renderer for the frameless chrome
//!
//! Owns the device, queue, and surface for one window and draws the
//! chrome paint spec each frame. The surface is configured with an
//! alpha compositing mode so the window can be truly transparent
//! outside the rounded rectangle.

use crate::renderer::paint::RoundedRect;
use crate::utils::error::{IntoPaneError, LyricPaneError, Result};
use std::sync::Arc;
use winit::window::Window;

use super::pipeline::ChromePipeline;

/// Renderer drawing the chrome background onto a winit window.
pub struct ChromeRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    surface: wgpu::Surface<'static>,
    pipeline: ChromePipeline,
    surface_size: (u32, u32),
}

impl ChromeRenderer {
    pub fn new(window: Arc<Window>) -> Result<Self> {
        let (device, queue, surface, surface_config) =
            pollster::block_on(Self::init_wgpu(window))?;

        let surface_size = (surface_config.width, surface_config.height);
        let pipeline = ChromePipeline::new(&device, surface_config.format);

        Ok(Self {
            device,
            queue,
            surface_config,
            surface,
            pipeline,
            surface_size,
        })
    }

    /// Draw `spec` and present the frame.
    pub fn render(&mut self, spec: &RoundedRect) -> Result<()> {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure_surface();
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(LyricPaneError::Render("Out of GPU memory".to_string()));
            }
            Err(e) => {
                log::warn!("Surface texture acquisition failed: {:?}", e);
                return Ok(());
            }
        };

        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Chrome Encoder"),
            });

        self.pipeline
            .render(&self.queue, &mut encoder, &view, spec, self.surface_size);

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();

        Ok(())
    }

    /// Handle a window resize. Zero-sized updates are ignored since a
    /// surface cannot be configured with an empty extent.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.surface_size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.reconfigure_surface();
    }

    pub fn surface_size(&self) -> (u32, u32) {
        self.surface_size
    }

    /// Initialize wgpu instance, device, queue, and surface
    async fn init_wgpu(
        window: Arc<Window>,
    ) -> Result<(
        wgpu::Device,
        wgpu::Queue,
        wgpu::Surface<'static>,
        wgpu::SurfaceConfiguration,
    )> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let size = window.inner_size();
        let surface = instance
            .create_surface(window)
            .render_err("Failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .render_err("Failed to find suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("LyricPane GPU Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .render_err("Failed to create GPU device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        // An alpha-compositing mode keeps the window transparent outside
        // the rounded rectangle when the platform supports it.
        let alpha_mode = [
            wgpu::CompositeAlphaMode::PreMultiplied,
            wgpu::CompositeAlphaMode::PostMultiplied,
        ]
        .into_iter()
        .find(|mode| surface_caps.alpha_modes.contains(mode))
        .unwrap_or(surface_caps.alpha_modes[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &surface_config);

        Ok((device, queue, surface, surface_config))
    }

    fn reconfigure_surface(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }
}
