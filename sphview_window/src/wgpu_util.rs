/// Caches a texture view, recreating the texture when the descriptor changes
/// (e.g. on window resize).
#[derive(Debug, Default)]
pub struct CachedTexture(Option<(wgpu::TextureDescriptor<'static>, wgpu::TextureView)>);

impl CachedTexture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_view(
        &mut self,
        device: &wgpu::Device,
        descriptor: &wgpu::TextureDescriptor<'static>,
    ) -> &wgpu::TextureView {
        let matches = matches!(&self.0, Some((cached, _)) if cached == descriptor);
        if !matches {
            let texture = device.create_texture(descriptor);
            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
            self.0 = Some((descriptor.clone(), view));
        }
        &self.0.as_ref().unwrap().1
    }
}
