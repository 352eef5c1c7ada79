use std::{fmt, sync::Mutex};

use sphview_viz::PointCloudScene;
use sphview_viz_wgpu::PointCloudRenderer;
use winit::{event::WindowEvent, window::Window};

use crate::{
    frame_clock::FrameClock, wgpu_util::CachedTexture, AppEnv, Config, Input,
};

#[derive(Debug)]
struct AppEnvImpl<'a> {
    config: &'a Config,
    first_run: bool,
    fps: f32,
    mspf: f32,
    delta_seconds: f32,
    window_size: [f32; 2],
    input: &'a Input,
    scene: Mutex<Option<PointCloudScene>>,
}

static_assertions::assert_impl_all!(AppEnvImpl<'_>: Send, Sync);

impl AppEnv for AppEnvImpl<'_> {
    fn config(&self) -> &Config {
        self.config
    }

    fn first_run(&self) -> bool {
        self.first_run
    }

    fn fps(&self) -> f32 {
        self.fps
    }

    fn mspf(&self) -> f32 {
        self.mspf
    }

    fn delta_seconds(&self) -> f32 {
        self.delta_seconds
    }

    fn window_size(&self) -> [f32; 2] {
        self.window_size
    }

    fn input(&self) -> &Input {
        self.input
    }

    fn draw(&self, scene: PointCloudScene) {
        *self.scene.lock().unwrap() = Some(scene);
    }
}

pub struct Container<D> {
    config: Config,
    draw: D,
    input: Input,
    frame_clock: FrameClock,
    first_run: bool,
    renderer: PointCloudRenderer,
    scene: Option<PointCloudScene>,
    msaa_samples: u32,
    output_format: wgpu::TextureFormat,
    msaa_texture: CachedTexture,
    depth_texture: CachedTexture,
}

impl<D: FnMut(&dyn AppEnv)> Container<D> {
    pub fn new(
        config: &Config,
        draw: D,
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        msaa_samples: u32,
    ) -> Self {
        Self {
            config: config.clone(),
            draw,
            input: Input::new(),
            frame_clock: FrameClock::new(),
            first_run: true,
            renderer: PointCloudRenderer::new(device, output_format, msaa_samples),
            scene: None,
            msaa_samples,
            output_format,
            msaa_texture: CachedTexture::new(),
            depth_texture: CachedTexture::new(),
        }
    }

    pub fn window_event(&mut self, window: &Window, event: &WindowEvent) {
        self.input.handle_event(window, event);
    }

    /// Runs the application callback for this frame and collects the scene
    /// it submits.
    pub fn update(&mut self, window: &Window) {
        self.frame_clock.begin_frame();

        let window_size = window
            .inner_size()
            .to_logical::<f32>(window.scale_factor());

        let env = AppEnvImpl {
            config: &self.config,
            first_run: self.first_run,
            fps: self.frame_clock.fps(),
            mspf: self.frame_clock.mspf(),
            delta_seconds: self.frame_clock.delta_seconds(),
            window_size: [window_size.width, window_size.height],
            input: &self.input,
            scene: Mutex::new(None),
        };

        (self.draw)(&env);

        self.scene = env.scene.into_inner().unwrap();
        self.input.end_frame();
        self.first_run = false;
    }

    /// Renders the frame's scene: clears the frame buffer, uploads new
    /// attribute contents if the scene carries them, then draws.
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        output_view: &wgpu::TextureView,
        output_size: [u32; 2],
        scale_factor: f32,
    ) {
        let msaa_output_view = if self.msaa_samples > 1 {
            Some(self.msaa_texture.get_view(
                device,
                &wgpu::TextureDescriptor {
                    label: None,
                    size: wgpu::Extent3d {
                        width: output_size[0],
                        height: output_size[1],
                        depth_or_array_layers: 1,
                    },
                    mip_level_count: 1,
                    sample_count: self.msaa_samples,
                    dimension: wgpu::TextureDimension::D2,
                    format: self.output_format,
                    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                    view_formats: &[],
                },
            ))
        } else {
            None
        };

        let depth_texture_view = self.depth_texture.get_view(
            device,
            &wgpu::TextureDescriptor {
                label: None,
                size: wgpu::Extent3d {
                    width: output_size[0],
                    height: output_size[1],
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: self.msaa_samples,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Depth24Plus,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            },
        );

        let scene = self.scene.take();
        if let Some(scene) = &scene {
            self.renderer
                .prepare(device, queue, output_size, scale_factor, scene);
        }

        let (view, resolve_target) = match msaa_output_view {
            Some(msaa_output_view) => (msaa_output_view, Some(output_view)),
            None => (output_view, None),
        };

        let mut encoder =
            device.create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

        {
            let mut rp = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: None,
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 27.0 / 255.0,
                            g: 27.0 / 255.0,
                            b: 27.0 / 255.0,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: depth_texture_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if scene.is_some() {
                self.renderer.render(&mut rp);
            }
        }

        queue.submit([encoder.finish()]);
        self.frame_clock.end_frame();
    }
}

impl<D> fmt::Debug for Container<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container").finish_non_exhaustive()
    }
}
