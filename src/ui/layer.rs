use egui::ClippedPrimitive;
use egui_wgpu::{Renderer as EguiRenderer, ScreenDescriptor};
use egui_winit::{State as WinitState, pixels_per_point};
use wgpu::{CommandEncoder, Device, Queue, TextureFormat, TextureView};
use winit::{event::WindowEvent, window::Window};

/// The egui context plus its winit and wgpu bridges. `prepare` runs the UI
/// closure and tessellates the output; `paint` replays it into the frame's
/// encoder on top of the cleared surface.
pub struct UiLayer {
    ctx: egui::Context,
    state: WinitState,
    renderer: EguiRenderer,
    screen_desc: ScreenDescriptor,
}

/// Tessellated output of one UI pass, ready to paint.
pub struct UiFrame {
    shapes: Vec<ClippedPrimitive>,
    textures_delta: egui::TexturesDelta,
}

impl UiLayer {
    pub fn new(window: &Window, device: &Device, surface_format: TextureFormat) -> Self {
        let ctx = egui::Context::default();
        let state = WinitState::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
        );

        let mut layer = Self {
            ctx,
            state,
            renderer: EguiRenderer::new(device, surface_format, None, 1),
            screen_desc: ScreenDescriptor {
                size_in_pixels: [1, 1],
                pixels_per_point: 1.0,
            },
        };
        layer.update_screen_descriptor(window);
        layer
    }

    /// Returns true when egui consumed the event (pointer over the panel, a
    /// focused widget).
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.state.on_window_event(window, event);
        if response.repaint {
            window.request_redraw();
        }
        response.consumed
    }

    pub fn prepare<F>(&mut self, window: &Window, mut build_ui: F) -> UiFrame
    where
        F: FnMut(&egui::Context),
    {
        self.update_screen_descriptor(window);
        let raw_input = self.state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, |ctx| build_ui(ctx));
        self.state
            .handle_platform_output(window, full_output.platform_output);

        self.screen_desc.pixels_per_point = full_output.pixels_per_point;
        let shapes = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        UiFrame {
            shapes,
            textures_delta: full_output.textures_delta,
        }
    }

    pub fn paint(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        view: &TextureView,
        frame: UiFrame,
    ) {
        let UiFrame {
            shapes,
            mut textures_delta,
        } = frame;

        for (id, image_delta) in textures_delta.set.drain(..) {
            self.renderer.update_texture(device, queue, id, &image_delta);
        }

        let callback_buffers =
            self.renderer
                .update_buffers(device, queue, encoder, &shapes, &self.screen_desc);
        if !callback_buffers.is_empty() {
            queue.submit(callback_buffers);
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("ui-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.renderer.render(&mut pass, &shapes, &self.screen_desc);
        }

        for id in textures_delta.free.drain(..) {
            self.renderer.free_texture(&id);
        }
    }

    fn update_screen_descriptor(&mut self, window: &Window) {
        let size = window.inner_size();
        self.screen_desc.size_in_pixels = [size.width.max(1), size.height.max(1)];
        self.screen_desc.pixels_per_point = pixels_per_point(&self.ctx, window);
    }
}
