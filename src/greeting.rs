//! The greeting builder and app loop.
//!
//! `Greeting` collects the scene's configuration constants with method
//! chaining, then `run()` opens the window and blocks until it closes:
//!
//! ```ignore
//! Greeting::new()
//!     .with_ambient_count(40)
//!     .with_max_explosions(2)
//!     .with_display_duration(Duration::from_millis(3000))
//!     .run()?;
//! ```
//!
//! Per frame the app folds window events into [`Input`], dispatches this
//! frame's press (if any) to the explosion lifecycle, retires expired
//! explosions, evaluates every heart's animation and renders. Teardown is
//! plain drop order: the lifecycle discards pending retirements and the
//! audio player stops the melody.

use std::sync::Arc;
use std::time::Duration;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::ambient::{AmbientField, AmbientHeart};
use crate::anim;
use crate::audio::AudioPlayer;
use crate::burst::{Anchor, Burst, BurstConfig, Spark};
use crate::error::GreetingError;
use crate::gpu::GpuState;
use crate::interact::{press_local, Input, SurfaceRect};
use crate::lifecycle::Explosions;
use crate::spawn::SpawnContext;
use crate::time::Time;

/// Largest side of the interactive center region, pixels.
const SURFACE_SIDE_MAX_PX: f32 = 384.0;

/// Greeting configuration builder.
///
/// Use method chaining to configure, then call `.run()` to start.
pub struct Greeting {
    ambient_count: u32,
    burst: BurstConfig,
    max_explosions: usize,
    display_duration: Duration,
    window_size: (u32, u32),
    muted: bool,
}

impl Greeting {
    /// Create a greeting with default settings.
    pub fn new() -> Self {
        Self {
            ambient_count: 40,
            burst: BurstConfig::default(),
            max_explosions: 2,
            display_duration: Duration::from_millis(3000),
            window_size: (1280, 720),
            muted: false,
        }
    }

    /// Set the number of floating background hearts.
    pub fn with_ambient_count(mut self, count: u32) -> Self {
        self.ambient_count = count;
        self
    }

    /// Set the burst generation parameters.
    pub fn with_burst(mut self, burst: BurstConfig) -> Self {
        self.burst = burst;
        self
    }

    /// Set the maximum number of simultaneously active explosions.
    pub fn with_max_explosions(mut self, cap: usize) -> Self {
        self.max_explosions = cap;
        self
    }

    /// Set how long each explosion stays active.
    pub fn with_display_duration(mut self, duration: Duration) -> Self {
        self.display_duration = duration;
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Disable all audio output.
    pub fn with_muted(mut self) -> Self {
        self.muted = true;
        self
    }

    /// Run the greeting. Blocks until the window is closed.
    pub fn run(self) -> Result<(), GreetingError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    settings: Greeting,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    input: Input,
    time: Time,
    explosions: Explosions,
    ambient: Vec<AmbientHeart>,
    center_batch: Vec<Spark>,
    audio: AudioPlayer,
    error: Option<GreetingError>,
}

impl App {
    fn new(settings: Greeting) -> Self {
        let ambient = AmbientField::generate(settings.ambient_count, SpawnContext::new(0));
        let center_batch =
            Burst::generate(&settings.burst, Anchor::Center, SpawnContext::new(1)).collect();
        let explosions = Explosions::new(
            settings.max_explosions,
            settings.display_duration,
            settings.burst.clone(),
        );
        let audio = if settings.muted {
            AudioPlayer::silent()
        } else {
            AudioPlayer::new()
        };

        Self {
            settings,
            window: None,
            gpu: None,
            input: Input::new(),
            time: Time::new(),
            explosions,
            ambient,
            center_batch,
            audio,
            error: None,
        }
    }

    /// Interactive region: a square centered in the window.
    fn surface_rect(&self) -> Option<SurfaceRect> {
        let gpu = self.gpu.as_ref()?;
        let window = gpu.window_px();
        let side = (window.min_element() * 0.5).min(SURFACE_SIDE_MAX_PX);
        Some(SurfaceRect::centered_square(window, side))
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let (elapsed, _delta) = self.time.update();
        let now = self.time.now();
        let rect = self.surface_rect();

        if let Some(origin) = press_local(&self.input, rect) {
            if self.explosions.spawn(origin, now).is_some() {
                self.audio.play_pop();
            }
        }
        self.input.begin_frame();

        self.explosions.retire_expired(now);

        let mut placements = Vec::new();

        if let Some(gpu) = &self.gpu {
            let window = gpu.window_px();
            for heart in &self.ambient {
                if let Some(p) = anim::ambient_heart(heart, window, elapsed) {
                    placements.push(p);
                }
            }
        }

        if let Some(rect) = rect {
            let center = rect.center();
            placements.push(anim::center_heart(center, rect.size.x, elapsed));

            for spark in &self.center_batch {
                if let Some(p) = anim::burst_spark(spark, center, elapsed) {
                    placements.push(p);
                }
            }

            for explosion in self.explosions.iter() {
                let anchor = rect.min + explosion.origin();
                let since = now.duration_since(explosion.spawned_at()).as_secs_f32();
                for spark in explosion.sparks() {
                    if let Some(p) = anim::burst_spark(spark, anchor, since) {
                        placements.push(p);
                    }
                }
            }
        }

        if let Some(gpu) = &mut self.gpu {
            match gpu.render(elapsed, &placements) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                    width: gpu.config.width,
                    height: gpu.config.height,
                }),
                Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                Err(e) => eprintln!("Render error: {:?}", e),
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.settings.window_size;
        let window_attrs = Window::default_attributes()
            .with_title("heartburst")
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.error = Some(GreetingError::Window(e));
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GpuState::new(window.clone())) {
            Ok(gpu) => {
                window.request_redraw();
                self.window = Some(window);
                self.gpu = Some(gpu);
            }
            Err(e) => {
                self.error = Some(GreetingError::Gpu(e));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_the_scene() {
        let greeting = Greeting::new();
        assert_eq!(greeting.ambient_count, 40);
        assert_eq!(greeting.max_explosions, 2);
        assert_eq!(greeting.display_duration, Duration::from_millis(3000));
        assert_eq!(greeting.burst.count, 60);
    }

    #[test]
    fn builder_chain_overrides() {
        let greeting = Greeting::new()
            .with_ambient_count(10)
            .with_max_explosions(3)
            .with_display_duration(Duration::from_millis(1500))
            .with_window_size(640, 480)
            .with_muted();
        assert_eq!(greeting.ambient_count, 10);
        assert_eq!(greeting.max_explosions, 3);
        assert_eq!(greeting.display_duration, Duration::from_millis(1500));
        assert_eq!(greeting.window_size, (640, 480));
        assert!(greeting.muted);
    }

    #[test]
    fn app_precomputes_static_batches() {
        let app = App::new(Greeting::new().with_muted());
        assert_eq!(app.ambient.len(), 40);
        assert_eq!(app.center_batch.len(), 60);
        assert!(app.explosions.is_empty());
    }
}
