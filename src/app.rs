//! Window and event loop for the live simulation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use glam::Vec2;
use rand::rngs::StdRng;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::Config;
use crate::error::AppError;
use crate::gpu::GpuState;
use crate::output;
use crate::physics;
use crate::raster::Canvas;
use crate::seeds::SeedField;
use crate::time::FrameClock;

/// Refresh the title every this many frames.
const TITLE_INTERVAL: u64 = 30;

/// Open a window and run the simulation until it is closed.
pub fn run(config: Config) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App {
    config: Config,
    rng: StdRng,
    field: SeedField,
    clock: FrameClock,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    /// Set when setup fails inside the event loop.
    error: Option<AppError>,
}

impl App {
    fn new(config: Config) -> Self {
        let mut rng = config.rng();
        let bounds = Vec2::new(config.width as f32, config.height as f32);
        let field = SeedField::random(config.seed_count, bounds, &mut rng);
        log::info!("spawned {} seeds in {}x{}", field.len(), config.width, config.height);

        Self {
            config,
            rng,
            field,
            clock: FrameClock::new(),
            window: None,
            gpu_state: None,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window_attrs = Window::default_attributes()
            .with_title("Voronoi")
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.width,
                self.config.height,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        self.window = Some(window.clone());

        let gpu_state = pollster::block_on(GpuState::new(
            window,
            self.field.len(),
            self.config.marker_radius as f32,
        ))?;

        // The window manager may not honor the requested size.
        let (w, h) = gpu_state.size();
        self.field.set_bounds(Vec2::new(w as f32, h as f32));
        self.gpu_state = Some(gpu_state);
        Ok(())
    }

    fn reseed(&mut self) {
        self.field = SeedField::random(self.config.seed_count, self.field.bounds, &mut self.rng);
        log::info!("reseeded {} seeds", self.field.len());
    }

    /// Rasterize the current seeds on the CPU and write them next to `--output`.
    ///
    /// Cells are measured like the shader does (pixel centers, exact seed
    /// positions). Markers are drawn around the floored seed pixel, so their
    /// outline can sit one pixel off the window's.
    fn snapshot(&self) {
        let (w, h) = (self.field.bounds.x as u32, self.field.bounds.y as u32);
        let mut canvas = Canvas::new(w, h);
        canvas.render_voronoi_seed_colors(&self.field.seeds);
        canvas.render_seed_markers(
            &self.field.seeds,
            self.config.marker_radius,
            crate::color::Color32::BLACK,
        );

        let path = snapshot_path(&self.config.output, self.clock.frame());
        if let Err(e) = output::save(&canvas, &path) {
            log::error!("snapshot failed: {}", e);
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        match event.physical_key {
            PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
            PhysicalKey::Code(KeyCode::Space) => {
                self.clock.toggle_pause();
                log::info!("{}", if self.clock.is_paused() { "paused" } else { "resumed" });
            }
            PhysicalKey::Code(KeyCode::KeyR) => self.reseed(),
            PhysicalKey::Code(KeyCode::KeyS) => self.snapshot(),
            _ => {}
        }
    }

    fn update_title(&self) {
        if let Some(window) = &self.window {
            let paused = if self.clock.is_paused() { " [paused]" } else { "" };
            window.set_title(&format!(
                "Voronoi - {} seeds - {:.0} FPS{}",
                self.field.len(),
                self.clock.fps(),
                paused
            ));
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.clock.tick();
        physics::step(&mut self.field, &self.config.forces, dt);

        if let Some(gpu_state) = &mut self.gpu_state {
            gpu_state.update_instances(&self.field.instances());
            match gpu_state.render() {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (width, height) = gpu_state.size();
                    gpu_state.resize(winit::dpi::PhysicalSize { width, height })
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                }
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }

        if self.clock.frame() % TITLE_INTERVAL == 0 {
            self.update_title();
        }
    }
}

/// `dir/name.ext` becomes `dir/name-<frame>.ext`.
fn snapshot_path(output: &Path, frame: u64) -> PathBuf {
    let stem = output.file_stem().and_then(|s| s.to_str()).unwrap_or("snapshot");
    let ext = output.extension().and_then(|s| s.to_str()).unwrap_or("png");
    output.with_file_name(format!("{}-{}.{}", stem, frame, ext))
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                    let (w, h) = gpu_state.size();
                    self.field.set_bounds(Vec2::new(w as f32, h as f32));
                    log::debug!("resized to {}x{}", w, h);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, event),
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
