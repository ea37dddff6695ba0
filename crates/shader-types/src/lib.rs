//! Shared host/device types for the ray marching shader
//!
//! The only wire format here is the [`Control`] uniform block: a fixed-layout
//! aggregate the host fills in each frame and the shader reads verbatim. The
//! crate pins the layout, gives typed access to the opaque tuning slots and
//! owns the staging buffer the bytes are handed off through.

pub mod buffer;
pub mod control;
pub mod slot;

pub use buffer::{ControlBuffer, CONTROL_BINDING};
pub use control::Control;
pub use slot::ParamSlot;
