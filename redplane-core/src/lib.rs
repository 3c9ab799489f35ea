#![crate_name = "redplane_core"]

pub mod codec;
pub mod error;
pub mod image_io;
mod macros;
pub mod pixel_buffer;
pub mod utilities;
