//! Effect builder and event loop.
//!
//! [`Effect`] owns the whole lifecycle: window creation, renderer
//! setup, sampling on mount and resize, one physics tick per redraw,
//! and teardown when the window closes. Everything runs on the winit
//! event loop thread - cursor events and frame ticks are never
//! concurrent, so a re-sample fully replaces the particle set before
//! the next draw reads it.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::config::EffectConfig;
use crate::cursor::Cursor;
use crate::error::EffectError;
use crate::particle::Particle;
use crate::physics;
use crate::render::{Instance, Renderer};
use crate::source::ImageSource;
use crate::time::FrameClock;

/// The particle effect runner.
///
/// Configure with method chaining, then call [`Effect::run`] to open a
/// window and block until it is closed:
///
/// ```ignore
/// use stipple::{Effect, ImageSource};
///
/// Effect::new(ImageSource::from_path("logo.png"))
///     .with_gap(2)
///     .with_cursor_radius(120.0)
///     .run()?;
/// ```
pub struct Effect {
    source: ImageSource,
    config: EffectConfig,
    title: String,
    window_size: (u32, u32),
}

impl Effect {
    /// Create an effect over the given source image with default
    /// tuning.
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            config: EffectConfig::default(),
            title: "stipple".to_string(),
            window_size: (1280, 720),
        }
    }

    /// Set the drawn particle radius in pixels.
    pub fn with_particle_size(mut self, size: f32) -> Self {
        self.config.particle_size = size;
        self
    }

    /// Set the sampling stride in pixels.
    pub fn with_gap(mut self, gap: u32) -> Self {
        self.config.gap = gap;
        self
    }

    /// Set the per-axis velocity cap.
    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.config.max_speed = max_speed;
        self
    }

    /// Set the per-tick vertical velocity increment.
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.config.gravity = gravity;
        self
    }

    /// Set the displacement-to-acceleration spring factor.
    pub fn with_spring(mut self, spring: f32) -> Self {
        self.config.spring = spring;
        self
    }

    /// Set the fraction of velocity retained each tick.
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.config.damping = damping;
        self
    }

    /// Set the cursor repulsion magnitude.
    pub fn with_repel_force(mut self, force: f32) -> Self {
        self.config.repel_force = force;
        self
    }

    /// Set the cursor interaction radius in pixels.
    pub fn with_cursor_radius(mut self, radius: f32) -> Self {
        self.config.cursor_radius = radius;
        self
    }

    /// Set the per-tick probability of an opacity toggle.
    pub fn with_flicker_chance(mut self, chance: f64) -> Self {
        self.config.flicker_chance = chance;
        self
    }

    /// Replace the whole tuning struct at once.
    pub fn with_config(mut self, config: EffectConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial inner window size in logical pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Run the effect. Blocks until the window is closed.
    pub fn run(self) -> Result<(), EffectError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.source, self.config, self.title, self.window_size);
        event_loop.run_app(&mut app)?;
        app.outcome
    }
}

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    source: ImageSource,
    config: EffectConfig,
    particles: Vec<Particle>,
    cursor: Cursor,
    clock: FrameClock,
    rng: SmallRng,
    title: String,
    window_size: (u32, u32),
    outcome: Result<(), EffectError>,
}

impl App {
    fn new(source: ImageSource, config: EffectConfig, title: String, window_size: (u32, u32)) -> Self {
        Self {
            window: None,
            renderer: None,
            source,
            config,
            particles: Vec::new(),
            cursor: Cursor::new(),
            clock: FrameClock::new(),
            rng: SmallRng::from_entropy(),
            title,
            window_size,
            outcome: Ok(()),
        }
    }

    /// Replace the particle set if the source has anything new for
    /// these dimensions.
    fn resample(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Some(batch) = self
            .source
            .resample(width, height, &self.config, &mut self.rng)
        {
            log::info!(
                "sampled {} particles for {}x{} surface",
                batch.len(),
                width,
                height
            );
            self.particles = batch;
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: EffectError) {
        log::error!("{error}");
        self.outcome = Err(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.window_size.0,
                self.window_size.1,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => return self.fail(event_loop, err.into()),
        };

        let renderer = match pollster::block_on(Renderer::new(
            window.clone(),
            self.config.particle_size,
        )) {
            Ok(renderer) => renderer,
            Err(err) => return self.fail(event_loop, err.into()),
        };

        let size = window.inner_size();
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.resample(size.width, size.height);

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
                self.resample(physical_size.width, physical_size.height);
            }
            WindowEvent::CursorMoved { .. } | WindowEvent::CursorLeft { .. } => {
                self.cursor.handle_event(&event);
            }
            WindowEvent::RedrawRequested => {
                physics::step(
                    &mut self.particles,
                    self.cursor.position(),
                    &self.config,
                    &mut self.rng,
                );

                if let Some(renderer) = &mut self.renderer {
                    let instances: Vec<Instance> =
                        self.particles.iter().map(Instance::from_particle).collect();
                    renderer.upload(&instances);

                    match renderer.render() {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            renderer.resize(winit::dpi::PhysicalSize {
                                width: renderer.config.width,
                                height: renderer.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => log::warn!("skipping frame: {e:?}"),
                    }
                }

                self.clock.tick();
                if self.clock.frame() % 600 == 0 {
                    log::debug!(
                        "{} particles at {:.0} fps",
                        self.particles.len(),
                        self.clock.fps()
                    );
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
