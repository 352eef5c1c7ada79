//! Sets up the main application window and event loop.

use std::sync::Arc;

use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{WindowBuilder, WindowLevel},
};

use crate::{container::Container, AppEnv, Config};

/// Opens a window and runs the application.
///
/// This function does not return until the window is closed. Failures while
/// acquiring the graphics context are fatal; the loop is not designed to
/// resume after a rendering-context failure.
pub fn open_window_and_run(config: &Config, draw: impl FnMut(&dyn AppEnv) + 'static) {
    pollster::block_on(async {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let event_loop = EventLoop::new().expect("failed to create event loop");

        let (width, height) = config.inner_size();
        let window = WindowBuilder::new()
            .with_title(config.title())
            .with_inner_size(LogicalSize::new(width, height))
            .with_visible(false)
            .build(&event_loop)
            .expect("failed to create window");
        let window = Arc::new(window);
        window.set_maximized(config.maximized());

        if config.always_on_top() {
            window.set_window_level(WindowLevel::AlwaysOnTop);
        }

        let surface = instance
            .create_surface(Arc::clone(&window))
            .expect("failed to create surface");
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("no compatible device");
        let adapter_info = adapter.get_info();
        tracing::info!(
            "GPU: {}, {:?}, {:?}",
            adapter_info.name,
            adapter_info.device_type,
            adapter_info.backend
        );

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits {
                        ..wgpu::Limits::downlevel_webgl2_defaults()
                            .using_resolution(adapter.limits())
                    },
                },
                None,
            )
            .await
            .expect("failed to request GPU device");
        device.on_uncaptured_error(Box::new(|error| {
            panic!("wgpu error: {}", error);
        }));

        let output_format = wgpu::TextureFormat::Bgra8Unorm;

        let present_mode = if surface
            .get_capabilities(&adapter)
            .present_modes
            .contains(&wgpu::PresentMode::Mailbox)
        {
            wgpu::PresentMode::Mailbox
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let mut surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: output_format,
            width: window.inner_size().width,
            height: window.inner_size().height,
            present_mode,
            desired_maximum_frame_latency: 2,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: Vec::new(),
        };
        surface.configure(&device, &surface_config);

        let texture_format_features = adapter.get_texture_format_features(output_format).flags;
        let msaa_samples = [4, 2]
            .into_iter()
            .find(|&count| texture_format_features.sample_count_supported(count))
            .unwrap_or(1);
        tracing::info!("MSAA samples: {msaa_samples}");

        let mut container = Container::new(config, draw, &device, output_format, msaa_samples);

        window.set_visible(true);

        event_loop
            .run(move |event, elwt| {
                // The adapter and instance aren't referenced elsewhere in the
                // closure, so keep them alive explicitly.
                let _ = (&instance, &adapter);

                elwt.set_control_flow(ControlFlow::Poll);

                match event {
                    Event::WindowEvent { event, .. } => {
                        container.window_event(&window, &event);
                        match event {
                            WindowEvent::Resized(size) => {
                                surface_config.width = size.width;
                                surface_config.height = size.height;
                                if surface_config.width > 0 && surface_config.height > 0 {
                                    surface.configure(&device, &surface_config);
                                }
                            }
                            WindowEvent::CloseRequested => {
                                elwt.exit();
                            }
                            WindowEvent::RedrawRequested => {
                                container.update(&window);

                                if surface_config.width > 0 && surface_config.height > 0 {
                                    let surface_texture = surface
                                        .get_current_texture()
                                        .expect("failed to acquire next swap chain texture");
                                    let output_view = surface_texture
                                        .texture
                                        .create_view(&wgpu::TextureViewDescriptor::default());

                                    container.render(
                                        &device,
                                        &queue,
                                        &output_view,
                                        [surface_config.width, surface_config.height],
                                        window.scale_factor() as f32,
                                    );

                                    surface_texture.present();
                                }
                            }
                            _ => {}
                        }
                    }
                    Event::AboutToWait => {
                        window.request_redraw();
                    }
                    _ => {}
                }
            })
            .expect("event loop error");
    });
}
