use anyhow::{Context, Result};
use clap::Parser;
use cubepick_common::Color;
use cubepick_input::{Action, ClickTracker, KeyBindings, screen_to_ndc};
use cubepick_render::OrbitCamera;
use cubepick_render_wgpu::WgpuRenderer;
use cubepick_scene::{Scene, SceneConfig};
use cubepick_select::{SelectionController, SelectionDisplay, SelectionLabel};
use egui::Context as EguiContext;
use glam::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "cubepick-desktop", about = "Click to select cubes in a 3D grid")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Scene configuration file (YAML)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Window-independent application state.
struct AppState {
    scene: Scene,
    controller: SelectionController,
    camera: OrbitCamera,
    label: SelectionLabel,
    keys: KeyBindings,
    clicks: ClickTracker,
    rng: StdRng,
    cursor: Vec2,
    viewport: PhysicalSize<u32>,
    started: Instant,
    background: Color,
}

impl AppState {
    fn new(config: &SceneConfig, rng: StdRng) -> Self {
        let viewport = PhysicalSize::new(1280, 720);
        Self {
            scene: Scene::from_config(config),
            controller: SelectionController::new(config.highlight),
            camera: OrbitCamera::from_config(
                &config.camera,
                viewport.width as f32 / viewport.height as f32,
            ),
            label: SelectionLabel::new(),
            keys: KeyBindings::default(),
            clicks: ClickTracker::default(),
            rng,
            cursor: Vec2::ZERO,
            viewport,
            started: Instant::now(),
            background: config.background.0,
        }
    }

    fn apply(&mut self, action: Action) {
        if let Action::Resize { width, height } = action {
            self.viewport = PhysicalSize::new(width, height);
            self.camera.resize(width, height);
        }
        self.controller.handle(
            action,
            &mut self.scene,
            &self.camera,
            &mut self.label,
            &mut self.rng,
        );
    }

    fn key_pressed(&mut self, key: &Key) {
        if let Some(name) = key_name(key) {
            let action = self.keys.action_for_key(name);
            self.apply(action);
        }
    }

    fn cursor_moved(&mut self, position: Vec2) {
        self.cursor = position;
        if let Some(delta) = self.clicks.moved(position) {
            self.camera.drag(delta.x, delta.y, self.viewport.height);
        }
    }

    fn left_button(&mut self, pressed: bool) {
        if pressed {
            self.clicks.press(self.cursor);
        } else if let Some(at) = self.clicks.release(self.cursor) {
            let ndc = screen_to_ndc(at, self.viewport.width, self.viewport.height);
            self.apply(Action::Pick(ndc));
        }
    }

    /// Per-frame update: idle animation and camera damping.
    fn update(&mut self) {
        self.scene
            .apply_idle_animation(self.started.elapsed().as_secs_f32());
        self.camera.update();
    }

    fn draw_ui(&self, ctx: &EguiContext) {
        egui::Window::new("Cube Picker")
            .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Selected:");
                    match self.label.current() {
                        SelectionDisplay::Selected { name, emphasis } => {
                            ui.label(
                                egui::RichText::new(name)
                                    .strong()
                                    .color(color32(*emphasis)),
                            );
                        }
                        SelectionDisplay::Empty => {
                            ui.label("None");
                        }
                    }
                });
                ui.separator();
                ui.small("Click: select | Esc: deselect | R: random");
                ui.small("Drag: orbit | Wheel: zoom");
            });
    }
}

/// Logical key name as understood by `KeyBindings`.
fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Named(NamedKey::Escape) => Some("Escape"),
        Key::Character(text) => Some(text.as_str()),
        _ => None,
    }
}

fn color32(color: Color) -> egui::Color32 {
    let hex = color.to_hex();
    egui::Color32::from_rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Everything that only exists once a window is up.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl Gpu {
    fn new(event_loop: &ActiveEventLoop, egui_ctx: &EguiContext, background: Color) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title("Cube Picker")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no suitable GPU adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("cubepick_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("failed to create device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("surface reports no formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = WgpuRenderer::new(
            &device,
            surface_format,
            config.width,
            config.height,
            background,
        );

        let egui_winit = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, self.config.width, self.config.height);
    }

    fn frame(&mut self, state: &AppState, egui_ctx: &EguiContext) {
        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.render(
            &self.device,
            &self.queue,
            &view,
            &state.camera,
            &state.scene,
        );

        let raw_input = self.egui_winit.take_egui_input(&self.window);
        let full_output = egui_ctx.run(raw_input, |ctx| state.draw_ui(ctx));
        self.egui_winit
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui_encoder"),
            });
        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            self.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        self.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        output.present();
    }
}

struct GpuApp {
    state: AppState,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
}

impl GpuApp {
    fn new(config: &SceneConfig) -> Self {
        Self {
            state: AppState::new(config, StdRng::from_os_rng()),
            gpu: None,
            egui_ctx: EguiContext::default(),
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }

        match Gpu::new(event_loop, &self.egui_ctx, self.state.background) {
            Ok(gpu) => {
                let size = gpu.window.inner_size();
                self.state.apply(Action::Resize {
                    width: size.width,
                    height: size.height,
                });
                self.gpu = Some(gpu);
            }
            Err(e) => {
                tracing::error!("failed to initialize graphics: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let response = gpu.egui_winit.on_window_event(&gpu.window, &event);
        if response.consumed {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                gpu.resize(new_size.width, new_size.height);
                self.state.apply(Action::Resize {
                    width: new_size.width,
                    height: new_size.height,
                });
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                self.state.key_pressed(&logical_key);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.state
                    .cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state: btn_state,
                ..
            } => {
                self.state.left_button(btn_state == ElementState::Pressed);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / 50.0,
                };
                self.state.camera.zoom(lines);
            }
            WindowEvent::RedrawRequested => {
                self.state.update();
                gpu.frame(&self.state, &self.egui_ctx);
                gpu.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = SceneConfig::load_or_default(cli.config.as_deref())
        .context("failed to load scene configuration")?;

    tracing::info!("cubepick-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(&config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
