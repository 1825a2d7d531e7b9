use anyhow::Result;
use clap::Parser;
use gridmaze_input::{Action, InputQueue};
use gridmaze_kernel::Session;
use gridmaze_render::{SceneView, build_draw_list};
use gridmaze_render_wgpu::{BoardCamera, SCENE_SHADER, WgpuRenderer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "gridmaze-desktop", about = "Grid maze desktop demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Window width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Board generation seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// WGSL file overriding the built-in scene shader
    #[arg(long)]
    shader: Option<PathBuf>,
}

/// Map a released key to an action. Movement and the camera toggle fire on
/// key release, not press.
fn map_key_release(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::ArrowRight => Some(Action::MoveRight),
        KeyCode::ArrowLeft => Some(Action::MoveLeft),
        KeyCode::ArrowUp => Some(Action::MoveUp),
        KeyCode::ArrowDown => Some(Action::MoveDown),
        KeyCode::KeyC => Some(Action::ToggleCamera),
        _ => None,
    }
}

/// Read an override shader, falling back to the built-in source on any
/// failure. A broken shader never takes the demo down.
fn load_shader_source(path: Option<&PathBuf>) -> String {
    let Some(path) = path else {
        return SCENE_SHADER.to_string();
    };
    match std::fs::read_to_string(path) {
        Ok(source) => {
            tracing::info!(path = %path.display(), "using shader override");
            source
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "shader override unreadable: {e}; using built-in shader");
            SCENE_SHADER.to_string()
        }
    }
}

struct GpuApp {
    session: Session,
    input: InputQueue,
    shader_path: Option<PathBuf>,
    initial_size: PhysicalSize<u32>,
    aspect: f32,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<WgpuRenderer>,
}

impl GpuApp {
    fn new(seed: u64, width: u32, height: u32, shader_path: Option<PathBuf>) -> Self {
        Self {
            session: Session::new(seed),
            input: InputQueue::new(),
            shader_path,
            initial_size: PhysicalSize::new(width.max(1), height.max(1)),
            aspect: width.max(1) as f32 / height.max(1) as f32,
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if matches!(key, KeyCode::Escape | KeyCode::KeyQ) {
                    tracing::info!("quit requested");
                    event_loop.exit();
                }
            }
            ElementState::Released => {
                if let Some(action) = map_key_release(key) {
                    self.input.push(action);
                }
            }
        }
    }

    fn redraw(&mut self) {
        for action in self.input.drain() {
            self.session.apply(action);
        }
        if let Some(verdict) = self.session.advance_frame() {
            // Round messages go to stdout, not the log.
            println!("{verdict}");
        }

        let (Some(surface), Some(device), Some(queue)) =
            (&self.surface, &self.device, &self.queue)
        else {
            return;
        };

        let output = match surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                if let Some(config) = &self.config {
                    surface.configure(device, config);
                }
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

        if let Some(renderer) = &self.renderer {
            let camera = BoardCamera::new(
                SceneView::for_camera(self.session.camera_alternate()),
                self.aspect,
            );
            let commands = build_draw_list(&self.session);
            renderer.render(device, queue, &view, &camera, &commands);
        }

        output.present();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Grid Maze")
            .with_inner_size(self.initial_size);
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("gridmaze_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.aspect = config.width as f32 / config.height.max(1) as f32;

        // Shader failures are logged and survived with the built-in source.
        let source = load_shader_source(self.shader_path.as_ref());
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let mut renderer =
            WgpuRenderer::new(&device, surface_format, config.width, config.height, &source);
        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            tracing::error!("shader override failed validation: {err}; using built-in shader");
            renderer = WgpuRenderer::new(
                &device,
                surface_format,
                config.width,
                config.height,
                SCENE_SHADER,
            );
        }

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    self.aspect = config.width as f32 / config.height.max(1) as f32;
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                self.handle_key(event_loop, key, key_state);
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "gridmaze-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(seed, cli.width, cli.height, cli.shader);
    event_loop.run_app(&mut app)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_moves() {
        assert_eq!(map_key_release(KeyCode::ArrowRight), Some(Action::MoveRight));
        assert_eq!(map_key_release(KeyCode::ArrowLeft), Some(Action::MoveLeft));
        assert_eq!(map_key_release(KeyCode::ArrowUp), Some(Action::MoveUp));
        assert_eq!(map_key_release(KeyCode::ArrowDown), Some(Action::MoveDown));
    }

    #[test]
    fn camera_toggle_and_unbound_keys() {
        assert_eq!(map_key_release(KeyCode::KeyC), Some(Action::ToggleCamera));
        assert_eq!(map_key_release(KeyCode::KeyW), None);
        assert_eq!(map_key_release(KeyCode::Space), None);
    }

    #[test]
    fn missing_shader_override_falls_back() {
        let missing = PathBuf::from("/nonexistent/override.wgsl");
        assert_eq!(load_shader_source(Some(&missing)), SCENE_SHADER);
    }

    #[test]
    fn no_override_uses_builtin() {
        assert_eq!(load_shader_source(None), SCENE_SHADER);
    }
}
