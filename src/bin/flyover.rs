//! Terrain Flyover Demo
//!
//! Run with: `cargo run --bin flyover [scene_config.json]`
//!
//! Generates a fresh procedural terrain, bakes its shaded texture, and
//! lets you fly over it.
//!
//! Controls:
//! - Arrow keys: Move camera (forward/back along view, strafe left/right)
//! - Mouse left-drag: Turn the camera
//! - R: Reset camera
//! - ESC: Exit

use std::sync::Arc;
use std::time::Instant;

use glam::Vec3;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowAttributes, WindowId};

use overflight_engine::camera::{Camera, update_camera};
use overflight_engine::config::SceneConfig;
use overflight_engine::input::{InputState, KeyCode};
use overflight_engine::render::{RenderConfig, RenderState, SceneUniforms};
use overflight_engine::terrain::{
    HeightmapConfig, build_terrain_mesh, generate_heightmap, generate_texture,
};

/// Translate a winit key code into the engine's generic one.
fn map_key(key: winit::keyboard::KeyCode) -> KeyCode {
    match key {
        winit::keyboard::KeyCode::ArrowUp => KeyCode::ArrowUp,
        winit::keyboard::KeyCode::ArrowDown => KeyCode::ArrowDown,
        winit::keyboard::KeyCode::ArrowLeft => KeyCode::ArrowLeft,
        winit::keyboard::KeyCode::ArrowRight => KeyCode::ArrowRight,
        winit::keyboard::KeyCode::KeyR => KeyCode::R,
        winit::keyboard::KeyCode::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

struct AppState {
    window: Arc<Window>,
    render: RenderState,
    config: SceneConfig,
    camera: Camera,
    input: InputState,

    // Timing
    start_time: Instant,
    last_frame_time: Instant,

    // FPS tracking
    frame_count: u32,
    fps_update_time: Instant,
    current_fps: f32,
}

impl AppState {
    fn new(window: Arc<Window>, config: SceneConfig) -> Self {
        let phase = config.terrain.phase.unwrap_or_else(|| {
            use rand::Rng;
            rand::thread_rng().gen_range(0.0..2.0)
        });
        println!(
            "[Flyover] Generating {}x{} terrain (phase {:.4})...",
            config.terrain.grid_width, config.terrain.grid_depth, phase
        );

        let grid = generate_heightmap(
            config.terrain.grid_width,
            config.terrain.grid_depth,
            phase,
            &HeightmapConfig::default(),
        )
        .expect("terrain dimensions from config must be non-zero");

        let image = generate_texture(&grid);
        let mesh = build_terrain_mesh(&grid, &config.terrain);
        println!(
            "[Flyover] Mesh: {} vertices, {} indices",
            mesh.vertices.len(),
            mesh.indices.len()
        );

        let mut render = RenderState::new(window.clone(), RenderConfig::default(), &mesh, &image);
        let sky = config.atmosphere.sky_color;
        render.clear_color = wgpu::Color {
            r: sky[0] as f64,
            g: sky[1] as f64,
            b: sky[2] as f64,
            a: 1.0,
        };

        let camera = config.camera();
        let now = Instant::now();

        Self {
            window,
            render,
            config,
            camera,
            input: InputState::new(),
            start_time: now,
            last_frame_time: now,
            frame_count: 0,
            fps_update_time: now,
            current_fps: 0.0,
        }
    }

    fn update(&mut self) {
        let now = Instant::now();
        let delta_time = (now - self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        // FPS tracking
        self.frame_count += 1;
        let fps_elapsed = (now - self.fps_update_time).as_secs_f32();
        if fps_elapsed >= 1.0 {
            self.current_fps = self.frame_count as f32 / fps_elapsed;
            self.frame_count = 0;
            self.fps_update_time = now;
            self.window
                .set_title(&format!("Terrain Flyover | FPS: {:.0}", self.current_fps));
        }

        update_camera(&mut self.camera, &mut self.input, delta_time);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let view_proj =
            self.camera.projection_matrix(self.render.aspect_ratio()) * self.camera.view_matrix();
        let atmosphere = &self.config.atmosphere;

        let uniforms = SceneUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            camera_pos: self.camera.position.into(),
            time: self.start_time.elapsed().as_secs_f32(),
            sun_dir: Vec3::from(atmosphere.sun_direction).normalize().into(),
            fog_density: atmosphere.fog_density,
            sky_color: atmosphere.sky_color,
            ambient: atmosphere.ambient,
        };
        self.render.write_uniforms(&uniforms);
        self.render.render()
    }

    fn handle_key(&mut self, key: winit::keyboard::KeyCode, pressed: bool) {
        let key = map_key(key);
        if key == KeyCode::R && pressed {
            self.camera.reset();
            println!("[Flyover] Camera reset");
            return;
        }
        self.input.keyboard.handle_key(key, pressed);
    }

    fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button == MouseButton::Left {
            if pressed {
                self.input.mouse.begin_drag();
            } else {
                self.input.mouse.end_drag();
            }
        }
    }

    fn handle_mouse_move(&mut self, x: f64, y: f64) {
        self.input.mouse.move_to(x, y);
    }
}

struct App {
    state: Option<AppState>,
    config: SceneConfig,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        println!("[Flyover] Creating window...");
        let window_attrs = WindowAttributes::default()
            .with_title("Terrain Flyover - Arrows to move, Drag to look")
            .with_inner_size(PhysicalSize::new(1280, 720));

        let window = Arc::new(event_loop.create_window(window_attrs).unwrap());
        self.state = Some(AppState::new(window, self.config.clone()));

        println!("[Flyover] Ready! Controls:");
        println!("  Arrow keys - Move camera");
        println!("  Left-drag  - Turn");
        println!("  R          - Reset camera");
        println!("  ESC        - Exit");
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.render.resize(new_size.width, new_size.height);
            }
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;

                if key == winit::keyboard::KeyCode::Escape && pressed {
                    event_loop.exit();
                    return;
                }

                state.handle_key(key, pressed);
            }
            WindowEvent::MouseInput { button, state: btn_state, .. } => {
                state.handle_mouse_button(button, btn_state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                state.handle_mouse_move(position.x, position.y);
            }
            WindowEvent::RedrawRequested => {
                state.update();

                match state.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let size = state.window.inner_size();
                        state.render.resize(size.width, size.height);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                    Err(e) => eprintln!("Render error: {:?}", e),
                }

                state.window.request_redraw();
            }
            _ => {}
        }
    }
}

fn main() {
    println!("=== Terrain Flyover ===");

    let config = match std::env::args().nth(1) {
        Some(path) => match SceneConfig::load(&path) {
            Ok(config) => {
                println!("[Flyover] Loaded scene config from {path}");
                config
            }
            Err(e) => {
                eprintln!("[Flyover] Failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => SceneConfig::default(),
    };

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App { state: None, config };
    event_loop.run_app(&mut app).unwrap();
}
