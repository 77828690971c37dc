use std::sync::Arc;

use pollster::block_on;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

use crate::app::App;
use crate::constants::{HEIGHT, WIDTH};

/// Native entry point: build the window, initialize the app, run the event
/// loop until the window closes.
pub fn start() {
    env_logger::init();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            log::error!("failed to create event loop: {err}");
            std::process::exit(1);
        }
    };

    let window = match WindowBuilder::new()
        .with_title("Force Components on Incline with Gravity and Friction")
        .with_inner_size(LogicalSize::new(f64::from(WIDTH), f64::from(HEIGHT)))
        .build(&event_loop)
    {
        Ok(window) => Arc::new(window),
        Err(err) => {
            log::error!("failed to create window: {err}");
            std::process::exit(1);
        }
    };

    let mut app = match block_on(App::initialize(window.clone())) {
        Ok(app) => app,
        Err(err) => {
            log::error!("failed to initialize graphics: {err}");
            std::process::exit(1);
        }
    };

    log::info!("incline scene ready");

    let result = event_loop.run(move |event, target| match event {
        Event::WindowEvent { event, .. } => {
            let consumed = app.handle_ui_event(&window, &event);
            match event {
                WindowEvent::CloseRequested => target.exit(),
                WindowEvent::Resized(new_size) => app.resize(new_size),
                WindowEvent::RedrawRequested => {
                    app.advance_frame();
                    match app.render(&window) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => app.resize(app.size()),
                        Err(wgpu::SurfaceError::OutOfMemory) => target.exit(),
                        Err(err) => log::warn!("render error: {err:?}"),
                    }
                }
                event if !consumed => app.handle_scene_event(&window, &event),
                _ => {}
            }
        }
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    });

    if let Err(err) = result {
        log::error!("event loop error: {err}");
        std::process::exit(1);
    }
}
