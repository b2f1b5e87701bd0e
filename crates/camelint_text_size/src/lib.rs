//! Byte offsets and ranges into UTF-8 source text.
//!
//! Offsets are `u32`; a single source file larger than 4 GiB is not supported.

mod range;
mod size;

pub use crate::range::TextRange;
pub use crate::size::TextSize;

#[cfg(target_pointer_width = "16")]
compile_error!("text-size assumes usize >= u32 and does not work on 16-bit targets");
