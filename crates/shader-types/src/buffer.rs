//! Control uniform staging and upload
//!
//! This module owns the device-visible buffer backing the [`Control`] block
//! and the bind group plumbing that exposes it to the shader. The renderer
//! that records the actual draw lives elsewhere; it only needs the buffer
//! binding declared here.

use wgpu::util::DeviceExt;

use crate::control::Control;

/// Binding slot the shader declares the control uniform at.
pub const CONTROL_BINDING: u32 = 0;

/// Device buffer holding the current [`Control`] block.
///
/// The host writes the whole 96-byte image once per frame; the shader reads
/// it after the queue orders the write against the corresponding dispatch.
pub struct ControlBuffer {
    buffer: wgpu::Buffer,
}

impl ControlBuffer {
    /// Allocate the uniform buffer and seed it with an initial block.
    pub fn new(device: &wgpu::Device, control: &Control) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Control Buffer"),
            contents: control.as_bytes(),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        Self { buffer }
    }

    /// Overwrite the device copy with a new block.
    ///
    /// Every field is transferred; there is no partial update.
    pub fn write(&self, queue: &wgpu::Queue, control: &Control) {
        tracing::debug!(time = control.time, size = control.size, "uploading control uniform");
        queue.write_buffer(&self.buffer, 0, control.as_bytes());
    }

    /// Bind group layout entry for the control uniform.
    pub fn layout_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(Control::SIZE as u64),
            },
            count: None,
        }
    }

    /// Bind group entry pointing at the whole buffer.
    pub fn bind_group_entry(&self, binding: u32) -> wgpu::BindGroupEntry<'_> {
        wgpu::BindGroupEntry {
            binding,
            resource: self.buffer.as_entire_binding(),
        }
    }

    /// The underlying buffer, for callers that assemble bind groups manually.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }
}
