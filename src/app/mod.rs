use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{Key, NamedKey};
use winit::window::Window;

use crate::constants::{DRAG_FORCE_SCALE, MAX_FRAME_DT};
use crate::physics::decompose::incline_direction;
use crate::renderer::renderer::Renderer;
use crate::scene::geometry;
use crate::scene::state::SceneState;
use crate::ui::layer::{UiFrame, UiLayer};
use crate::ui::{self, UiState};

pub type AppError = Box<dyn std::error::Error + Send + Sync>;
pub type AppResult<T> = Result<T, AppError>;

/// Top-level owner of the scene, the drag state and the render stack. The
/// platform loop feeds it window events and drives one
/// `advance_frame`/`render` pair per redraw.
pub struct App {
    renderer: Renderer,
    scene: SceneState,
    ui_state: UiState,
    ui_layer: UiLayer,
    cursor: Option<Vec2>,
    dragging: bool,
    last_frame: Instant,
}

impl App {
    pub async fn initialize(window: Arc<Window>) -> AppResult<Self> {
        let renderer = Renderer::new(window.clone()).await?;
        let scene = SceneState::new();
        let ui_state = UiState::from_scene(&scene);
        let surface_format = renderer.surface_config().format;
        let ui_layer = UiLayer::new(&window, renderer.device(), surface_format);

        Ok(Self {
            renderer,
            scene,
            ui_state,
            ui_layer,
            cursor: None,
            dragging: false,
            last_frame: Instant::now(),
        })
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.renderer.resize(new_size);
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.renderer.size()
    }

    /// Give the egui layer first pick of the event; returns true when the
    /// layer consumed it.
    pub fn handle_ui_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.ui_layer.handle_event(window, event)
    }

    /// Keyboard and mouse events the UI layer left alone.
    pub fn handle_scene_event(&mut self, window: &Window, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event: key, .. }
                if key.state == ElementState::Pressed =>
            {
                self.handle_key(&key.logical_key);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(window.scale_factor());
                self.cursor = Some(Vec2::new(logical.x, logical.y));
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.dragging = self.cursor.is_some(),
                ElementState::Released => {
                    self.dragging = false;
                    self.scene.clear_applied_force();
                }
            },
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &Key) {
        match key.as_ref() {
            Key::Named(NamedKey::ArrowUp) => self.scene.tilt_up(),
            Key::Named(NamedKey::ArrowDown) => self.scene.tilt_down(),
            Key::Named(NamedKey::ArrowLeft) => self.scene.nudge_downhill(),
            Key::Named(NamedKey::ArrowRight) => self.scene.nudge_uphill(),
            Key::Character("s" | "S") => self.scene.toggle_shape(),
            Key::Character("f" | "F") => self.scene.increase_friction(),
            Key::Character("d" | "D") => self.scene.decrease_friction(),
            _ => {}
        }
    }

    /// Per-frame update: re-derive the applied force from the drag state,
    /// then advance the physics by the measured elapsed time.
    pub fn advance_frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_DT);
        self.last_frame = now;

        if let Some(force) = self.drag_force() {
            self.scene.set_applied_force(force);
        }
        self.scene.step(dt);
    }

    fn drag_force(&self) -> Option<f32> {
        let drag = self.drag_vector()?;
        Some(drag.dot(incline_direction(self.scene.incline_angle_deg)) * DRAG_FORCE_SCALE)
    }

    fn drag_vector(&self) -> Option<Vec2> {
        if !self.dragging {
            return None;
        }
        let pointer = self.cursor?;
        let center = geometry::object_center(
            self.scene.incline_angle_deg,
            self.scene.distance,
            self.scene.shape,
        );
        Some(pointer - center)
    }

    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        self.ui_state.refresh(&self.scene);

        let drag_vector = self.drag_vector();
        let frame: UiFrame = {
            let (ui_layer, ui_state, scene) = (&mut self.ui_layer, &mut self.ui_state, &self.scene);
            ui_layer.prepare(window, |ctx| {
                ui::paint::scene(ctx, scene, drag_vector);
                ui::build_controls(ctx, ui_state, scene);
            })
        };

        self.apply_panel_changes();

        let mut pending = Some(frame);
        let (renderer, ui_layer) = (&mut self.renderer, &mut self.ui_layer);
        renderer.render_with_ui(|device, queue, encoder, view| {
            if let Some(frame) = pending.take() {
                ui_layer.paint(device, queue, encoder, view, frame);
            }
        })
    }

    fn apply_panel_changes(&mut self) {
        if self.ui_state.take_reset_request() {
            self.scene.reset();
            self.ui_state.refresh(&self.scene);
            return;
        }

        self.scene.set_angle(self.ui_state.angle_deg);
        self.scene.set_friction(self.ui_state.friction);
        self.scene.set_gravity(self.ui_state.gravity);
        if self.scene.shape != self.ui_state.shape {
            self.scene.shape = self.ui_state.shape;
        }
    }
}
