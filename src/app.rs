//! Windowed host: surface plumbing, event routing, and the per-frame UI.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoopWindowTarget;
use winit::keyboard::KeyCode;
use winit::window::Window;

use brewguide_core::{ItemNameProvider, RecipeCatalog, StandardNames};

use crate::config::GuideConfig;
use crate::overlay::{GuideEvent, RecipeOverlay, SoundCue};
use crate::screen::{StandScreen, SCREEN_WIDTH};

/// What the event loop should do after an event.
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Tear down and exit.
    Quit,
}

/// The demo host: one window showing a brewing screen with the guide
/// overlay docked beside it.
pub struct GuideApp {
    window: Arc<Window>,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,
    wgpu_device: wgpu::Device,
    wgpu_queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    egui_renderer: egui_wgpu::Renderer,
    screen: StandScreen,
    overlay: RecipeOverlay,
    play_sounds: bool,
}

impl GuideApp {
    /// Create the window, the GPU surface, and the UI state.
    pub fn new(
        event_loop: &EventLoopWindowTarget<()>,
        catalog: RecipeCatalog,
        config: &GuideConfig,
    ) -> Result<Self> {
        // Create window
        let window = Arc::new(
            winit::window::WindowBuilder::new()
                .with_title("Brewing Guide")
                .with_inner_size(winit::dpi::PhysicalSize::new(640, 360))
                .build(event_loop)?,
        );

        // Initialize egui
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
        );

        // Initialize wgpu
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| anyhow::anyhow!("Failed to find suitable GPU adapter"))?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Main Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
            },
            None,
        ))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let size = window.inner_size();
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &surface_config);

        // Initialize egui renderer
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1);

        let overlay = RecipeOverlay::new(catalog, Box::new(StandardNames), config.highlight_missing);

        Ok(Self {
            window,
            egui_state,
            egui_ctx,
            wgpu_device: device,
            wgpu_queue: queue,
            surface,
            surface_config,
            egui_renderer,
            screen: StandScreen::new(),
            overlay,
            play_sounds: config.play_sounds,
        })
    }

    /// Handle an event.
    pub fn handle_event(&mut self, event: &Event<()>) -> AppAction {
        match event {
            Event::WindowEvent { event, window_id } if *window_id == self.window.id() => {
                // Let egui handle the event first
                let response = self.egui_state.on_window_event(&self.window, event);
                if response.consumed {
                    return AppAction::Continue;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        return AppAction::Quit;
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        if event.state.is_pressed() {
                            if let winit::keyboard::PhysicalKey::Code(code) = event.physical_key {
                                match code {
                                    KeyCode::Escape => return AppAction::Quit,
                                    // E closes the screen like the host game
                                    // would, but never while typing a query.
                                    KeyCode::KeyE if !self.overlay.search_focused() => {
                                        return AppAction::Quit;
                                    }
                                    _ => {}
                                }
                            }
                        }
                    }
                    WindowEvent::Resized(new_size) => {
                        if new_size.width > 0 && new_size.height > 0 {
                            self.surface_config.width = new_size.width;
                            self.surface_config.height = new_size.height;
                            self.surface
                                .configure(&self.wgpu_device, &self.surface_config);
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        return self.render();
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                self.window.request_redraw();
            }
            _ => {}
        }

        AppAction::Continue
    }

    /// Render one frame and apply whatever the overlay staged.
    fn render(&mut self) -> AppAction {
        // Get surface texture
        let output = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(e) => {
                tracing::warn!("Failed to get surface texture: {}", e);
                return AppAction::Continue;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Prepare egui
        let raw_input = self.egui_state.take_egui_input(&self.window);

        // Collect staging events from the UI pass, apply them after.
        let mut events: Vec<GuideEvent> = Vec::new();
        let screen = &self.screen;
        let overlay = &mut self.overlay;

        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::none().fill(egui::Color32::from_rgb(20, 20, 30)))
                .show(ctx, |ui| {
                    let screen_origin = egui::pos2(24.0, 24.0);
                    screen.ui(ui, screen_origin);
                    let panel_origin = egui::pos2(24.0 + SCREEN_WIDTH + 20.0, 24.0);
                    let fuel = screen.fuel_present();
                    events.extend(overlay.ui(ui, panel_origin, screen, fuel));
                });
        });

        for event in &events {
            self.play_cue(event.sound());
            match event {
                GuideEvent::RecipeStaged { recipe, plan } => {
                    let moved = self.screen.apply(plan);
                    info!(
                        "Staged {} ({} slot moves)",
                        StandardNames.display_name(recipe.result),
                        moved
                    );
                }
                GuideEvent::CraftDenied { recipe, missing } => {
                    info!(
                        "Cannot stage {}: missing items ({:?})",
                        StandardNames.display_name(recipe.result),
                        missing
                    );
                }
            }
        }

        // Handle platform output
        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        // Render egui
        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_config.width, self.surface_config.height],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        let mut encoder =
            self.wgpu_device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Guide Render Encoder"),
                });

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(
                &self.wgpu_device,
                &self.wgpu_queue,
                *id,
                image_delta,
            );
        }

        self.egui_renderer.update_buffers(
            &self.wgpu_device,
            &self.wgpu_queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Guide Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.08,
                            g: 0.08,
                            b: 0.12,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.egui_renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        self.wgpu_queue.submit(std::iter::once(encoder.finish()));
        output.present();

        AppAction::Continue
    }

    /// The demo host has no mixer; cues surface in the log instead.
    fn play_cue(&self, cue: SoundCue) {
        if !self.play_sounds {
            return;
        }
        match cue {
            SoundCue::Click => info!("sound cue: click"),
            SoundCue::Denied => info!("sound cue: denied"),
        }
    }
}
