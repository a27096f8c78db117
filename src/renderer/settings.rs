//! Renderer configuration

/// Static render configuration, consumed once at renderer creation.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub power_preference: wgpu::PowerPreference,
    pub vsync: bool,
    pub clear_color: wgpu::Color,
    pub depth_format: wgpu::TextureFormat,
    /// Edge length of the square shadow map. Fixed for the run and
    /// independent of the window size.
    pub shadow_map_size: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::HighPerformance,
            vsync: true,
            clear_color: wgpu::Color::BLACK,
            depth_format: wgpu::TextureFormat::Depth32Float,
            shadow_map_size: 1024,
        }
    }
}
