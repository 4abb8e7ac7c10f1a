//! Window shell and frame loop.
//!
//! Ties the pieces together: winit event plumbing feeds [`Input`], the
//! frame loop advances [`Time`] and [`Simulation`], rebuilds the proximity
//! network, applies the input snapshot to the [`OrbitCamera`], and hands
//! everything to [`GpuState`] for drawing.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::camera::OrbitCamera;
use crate::config::SimulationConfig;
use crate::error::RunError;
use crate::gpu::GpuState;
use crate::input::Input;
use crate::network::NetworkBuilder;
use crate::simulation::Simulation;
use crate::time::Time;

struct App {
    config: SimulationConfig,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    simulation: Simulation,
    network: NetworkBuilder,
    camera: OrbitCamera,
    input: Input,
    time: Time,
    /// Fatal error raised during window/GPU setup; run() surfaces it.
    error: Option<RunError>,
}

impl App {
    fn new(config: SimulationConfig, simulation: Simulation) -> Self {
        Self {
            config,
            window: None,
            gpu: None,
            simulation,
            network: NetworkBuilder::new(),
            camera: OrbitCamera::new(),
            input: Input::new(),
            time: Time::new(),
            error: None,
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        if self.input.exit_pressed() {
            event_loop.exit();
            return;
        }
        if self.input.pause_pressed() {
            self.time.toggle_pause();
            log::info!(
                "simulation {}",
                if self.time.is_paused() { "paused" } else { "resumed" }
            );
        }

        let drag = self.input.drag_delta();
        if drag != glam::Vec2::ZERO {
            self.camera.apply_drag(drag.x, drag.y);
        }
        let scroll = self.input.scroll_lines();
        if scroll != 0.0 {
            self.camera.apply_zoom(scroll);
        }

        let (_, dt) = self.time.update();
        self.simulation.update(dt);
        self.network.build(
            self.simulation.particles(),
            self.config.link_radius,
        );

        if let Some(gpu) = &mut self.gpu {
            match gpu.render(
                self.network.segments(),
                self.simulation.particles(),
                &self.camera,
            ) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => gpu.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("surface out of memory, exiting");
                    event_loop.exit();
                }
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }

        self.input.begin_frame();

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("Particle Network")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.error = Some(RunError::Window(e));
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GpuState::new(window.clone(), self.config.half_extent)) {
            Ok(gpu) => {
                self.window = Some(window);
                self.gpu = Some(gpu);
            }
            Err(e) => {
                self.error = Some(RunError::Gpu(e));
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
            }
            _ => {}
        }
    }
}

/// Run the viewer until the window closes.
///
/// Validates the config, spawns the simulation, opens a window, and
/// drives the frame loop. Returns when the user closes the window or
/// presses Escape, or with an error if setup fails.
pub fn run(config: SimulationConfig) -> Result<(), RunError> {
    let simulation = Simulation::new(config.clone())?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, simulation);
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
