use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use vitals_engine::PerformanceMonitor;
use vitals_engine::time::Clock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Pace of the simulated display refresh.
    pub refresh_rate: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "vitals studio".to_string(),
            initial_size: LogicalSize::new(560.0, 160.0),
            refresh_rate: 60,
        }
    }
}

impl RuntimeConfig {
    fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.refresh_rate.max(1)))
    }
}

/// Entry point for the host loop.
pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `monitor` until the window closes.
    pub fn run(initial: RuntimeConfig, monitor: PerformanceMonitor) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = HostState::new(initial, monitor);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

struct HostState {
    config:     RuntimeConfig,
    monitor:    PerformanceMonitor,
    window:     Option<Window>,
    next_frame: Instant,
    shown:      Option<String>,
}

impl HostState {
    fn new(config: RuntimeConfig, monitor: PerformanceMonitor) -> Self {
        Self {
            config,
            monitor,
            window: None,
            next_frame: Instant::now(),
            shown: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        self.window = Some(window);
        Ok(())
    }

    fn became_active(&mut self) {
        self.monitor.app_did_become_active();
        self.next_frame = Instant::now();
    }

    fn toggle_pause(&mut self) {
        if self.monitor.is_paused() {
            log::info!("resuming monitoring");
            self.monitor.start_monitoring();
        } else {
            log::info!("pausing monitoring");
            self.monitor.pause_monitoring();
        }
        self.next_frame = Instant::now();
    }

    fn frame(&mut self) {
        let now = self.monitor.calculator().clock().now();
        self.monitor.on_frame(now);
        self.sync_title();
    }

    fn sync_title(&mut self) {
        let text = self.monitor.overlay_text().map(str::to_owned);
        if text != self.shown {
            if let Some(window) = &self.window {
                window.set_title(&window_title(&self.config.title, text.as_deref()));
            }
            self.shown = text;
        }
    }
}

impl ApplicationHandler for HostState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.create_window(event_loop) {
                log::error!("{e:#}");
                event_loop.exit();
                return;
            }
        }
        self.became_active();
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.monitor.app_will_resign_active();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.monitor.stop_monitoring();
                self.window = None;
                event_loop.exit();
            }

            WindowEvent::Focused(true) | WindowEvent::Occluded(false) => self.became_active(),

            WindowEvent::Focused(false) | WindowEvent::Occluded(true) => {
                self.monitor.app_will_resign_active();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && !event.repeat
                    && event.logical_key == Key::Named(NamedKey::Space)
                {
                    self.toggle_pause();
                }
            }

            WindowEvent::RedrawRequested => self.frame(),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.monitor.is_running() {
            // Paused, stopped or inactive: the overlay is gone, so drop it from the title.
            self.sync_title();
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        let now = Instant::now();
        if now >= self.next_frame {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            self.next_frame += self.config.frame_interval();
            if self.next_frame < now {
                // Fell behind; skip missed refreshes rather than bursting.
                self.next_frame = now + self.config.frame_interval();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

/// Window title showing the overlay text on one line.
fn window_title(base: &str, overlay: Option<&str>) -> String {
    match overlay {
        Some(text) => format!("{base} | {}", text.replace('\n', " | ")),
        None => base.to_string(),
    }
}
