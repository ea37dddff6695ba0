//! Host-side declaration of the `Control` uniform block
//!
//! This module contains the GPU buffer structure used to pass camera, timing
//! and tuning parameters to the ray marching shader. The type must be Pod and
//! laid out exactly as the device-side declaration expects.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Uniform block shared verbatim between the host and the ray marching shader.
///
/// The layout follows the shading-language uniform convention: `vec3<f32>`
/// fields occupy 16 bytes (12 used, 4 padding), scalars occupy 4 bytes. The
/// device-side mirror is [`Control::WGSL_DECL`]:
///
/// ```wgsl
/// struct Control {
///     camera: vec3<f32>,
///     _pad0: f32,
///     focus: vec3<f32>,
///     _pad1: f32,
///     size: i32,
///     minimum_step_distance: f32,
///     zoom: f32,
///     time: f32,
///     p1: f32, p2: f32, p3: f32, p4: f32,
///     p5: f32, p6: f32, p7: f32, p8: f32,
///     p9: f32, pa: f32, pb: f32, pc: f32,
/// }
/// ```
///
/// The pad lanes are spelled out on both sides: a WGSL `vec3<f32>` has size
/// 12, so without them a following scalar would pack into the trailing pad
/// and shift every scalar offset by 4.
///
/// Field order, offsets and the 96-byte total are a binary contract with that
/// declaration. Do not reorder, retype or remove fields without updating the
/// shader side in lockstep. The host overwrites the whole block between
/// frames; there is no partial-update path.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Control {
    /// World-space camera position, offset 0
    pub camera: [f32; 3],
    pub _pad0: f32,
    /// Look-at target position, offset 16
    pub focus: [f32; 3],
    pub _pad1: f32,
    /// Viewport/texture dimension, offset 32
    pub size: i32,
    /// Lower bound for the ray marching step, offset 36
    pub minimum_step_distance: f32,
    /// Field-of-view scale factor, offset 40
    pub zoom: f32,
    /// Animation clock in seconds, offset 44
    pub time: f32,
    /// Free shader tuning slots, offsets 48..92. Their meaning is defined
    /// entirely by the shader; this layer treats them as opaque floats.
    pub p1: f32,
    pub p2: f32,
    pub p3: f32,
    pub p4: f32,
    pub p5: f32,
    pub p6: f32,
    pub p7: f32,
    pub p8: f32,
    pub p9: f32,
    pub pa: f32,
    pub pb: f32,
    pub pc: f32,
}

// Layout drift breaks the shader silently, so pin the size at compile time.
const _: () = assert!(
    std::mem::size_of::<Control>() == Control::SIZE,
    "Control must be exactly 96 bytes to match the device-side declaration"
);

impl Control {
    /// Total byte size of the block, part of the host/device contract.
    pub const SIZE: usize = 96;

    /// Canonical device-side declaration of the block.
    ///
    /// Shader sources should splice this in rather than re-declaring the
    /// struct by hand; the layout tests parse this exact text and check
    /// every member offset against the host struct.
    pub const WGSL_DECL: &'static str = "\
struct Control {
    camera: vec3<f32>,
    _pad0: f32,
    focus: vec3<f32>,
    _pad1: f32,
    size: i32,
    minimum_step_distance: f32,
    zoom: f32,
    time: f32,
    p1: f32,
    p2: f32,
    p3: f32,
    p4: f32,
    p5: f32,
    p6: f32,
    p7: f32,
    p8: f32,
    p9: f32,
    pa: f32,
    pb: f32,
    pc: f32,
}
";

    /// Create a control block with the given camera setup and all tuning
    /// scalars zeroed. The host is expected to populate every remaining
    /// field before the block is uploaded.
    pub fn new(camera: Vec3, focus: Vec3, size: i32) -> Self {
        Self {
            camera: camera.into(),
            focus: focus.into(),
            size,
            ..Self::zeroed()
        }
    }

    /// Camera position as a math-friendly vector.
    pub fn camera(&self) -> Vec3 {
        Vec3::from(self.camera)
    }

    /// Set the camera position, leaving the padding lane untouched.
    pub fn set_camera(&mut self, camera: Vec3) {
        self.camera = camera.into();
    }

    /// Focal target as a math-friendly vector.
    pub fn focus(&self) -> Vec3 {
        Vec3::from(self.focus)
    }

    /// Set the focal target, leaving the padding lane untouched.
    pub fn set_focus(&mut self, focus: Vec3) {
        self.focus = focus.into();
    }

    /// Byte image of the block as it will be handed to the queue.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for Control {
    fn default() -> Self {
        Self::zeroed()
    }
}
