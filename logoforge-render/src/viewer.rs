//! Windowed viewer wiring the session, loader, and renderer together

use std::sync::Arc;
use std::time::Instant;

use image::RgbaImage;
use logoforge_core::{Error, Result};
use tracing::{info, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::camera::HeroCamera;
use crate::loader::GeometryLoader;
use crate::renderer::HeroRenderer;
use crate::session::{HeroSession, Phase};
use crate::settings::{resolve_settings, SettingsInput};

/// Interactive viewer for an extruded logo.
///
/// Owns the source image and the environment description; [`HeroViewer::run`]
/// drives the whole lifecycle. When the GPU is unavailable or the image
/// yields no geometry the viewer reports the fallback and returns cleanly.
pub struct HeroViewer {
    image: RgbaImage,
    input: SettingsInput,
    target_height: f32,
}

impl HeroViewer {
    pub fn new(image: RgbaImage, input: SettingsInput, target_height: f32) -> Self {
        Self {
            image,
            input,
            target_height,
        }
    }

    /// Run until the window closes or the session falls back
    pub fn run(self) -> Result<()> {
        let settings = resolve_settings(&self.input);
        let mut session = HeroSession::new(settings);

        let event_loop = EventLoop::new()
            .map_err(|e| Error::Render(format!("Failed to create event loop: {}", e)))?;
        let window = Arc::new(
            WindowBuilder::new()
                .with_title("logoforge")
                .with_inner_size(winit::dpi::LogicalSize::new(960.0, 640.0))
                .build(&event_loop)
                .map_err(|e| Error::Render(format!("Failed to create window: {}", e)))?,
        );

        let window_ref = window.clone();
        let mut renderer = match pollster::block_on(HeroRenderer::new(&window_ref, &settings)) {
            Ok(renderer) => renderer,
            Err(e) => {
                warn!("3D unavailable, keeping the static logo: {}", e);
                session.mark_fallback();
                return Ok(());
            }
        };

        // Surface resolution follows the capped pixel ratio, never upscaled.
        let dpr = window.scale_factor() as f32;
        let scale = (settings.effective_dpr(dpr) / dpr).min(1.0);
        let size = window.inner_size();
        renderer.resize(
            (size.width as f32 * scale) as u32,
            (size.height as f32 * scale) as u32,
        );

        session.begin_loading();
        let loader = GeometryLoader::spawn(self.image.clone(), self.target_height);

        let mut camera = HeroCamera::new(renderer.aspect_ratio());
        let mut last_frame = Instant::now();

        event_loop
            .run(move |event, target| {
                target.set_control_flow(ControlFlow::Poll);

                match event {
                    Event::AboutToWait => {
                        // A build result arriving after teardown is discarded.
                        if session.phase() == Phase::Loading && !session.is_torn_down() {
                            match loader.poll() {
                                Some(Some(mesh)) => {
                                    if let Err(e) = renderer.upload_mesh(&mesh) {
                                        warn!("mesh upload failed: {}", e);
                                        session.mark_fallback();
                                        target.exit();
                                    } else {
                                        session.mark_ready();
                                        info!(
                                            vertices = mesh.vertex_count(),
                                            faces = mesh.face_count(),
                                            "logo geometry live"
                                        );
                                    }
                                }
                                Some(None) => {
                                    info!("logo yielded no 3D geometry, keeping static logo");
                                    session.mark_fallback();
                                    target.exit();
                                }
                                None => {}
                            }
                        }

                        if session.take_due_resize(Instant::now()) {
                            let dpr = window.scale_factor() as f32;
                            let scale = (session.settings().effective_dpr(dpr) / dpr).min(1.0);
                            let size = window.inner_size();
                            renderer.resize(
                                (size.width as f32 * scale) as u32,
                                (size.height as f32 * scale) as u32,
                            );
                            camera.aspect_ratio = renderer.aspect_ratio();
                        }

                        window.request_redraw();
                    }
                    Event::WindowEvent { event, .. } => match event {
                        WindowEvent::CloseRequested => {
                            session.teardown();
                            target.exit();
                        }
                        WindowEvent::Resized(_) => {
                            session.schedule_resize(Instant::now());
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            let size = window.inner_size();
                            session.pointer_moved(
                                (position.x as f32, position.y as f32),
                                (size.width as f32, size.height as f32),
                            );
                        }
                        WindowEvent::CursorLeft { .. } => {
                            session.pointer_left();
                        }
                        WindowEvent::Focused(focused) => {
                            session.set_page_visible(focused);
                        }
                        WindowEvent::Occluded(occluded) => {
                            session.set_view_fraction(if occluded { 0.0 } else { 1.0 });
                        }
                        WindowEvent::RedrawRequested => {
                            let now = Instant::now();
                            let dt = (now - last_frame).as_secs_f32();
                            last_frame = now;

                            session.tick(dt);
                            if session.phase() == Phase::Ready {
                                let orientation = session.orientation();
                                renderer.update_frame(&camera, &orientation);
                                if let Err(e) = renderer.render() {
                                    warn!("render error: {}", e);
                                }
                            }
                        }
                        _ => {}
                    },
                    _ => {}
                }
            })
            .map_err(|e| Error::Render(format!("Event loop error: {}", e)))?;

        Ok(())
    }
}
