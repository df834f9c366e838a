//! Host side mirrors of the shader vector types (`float2`, `int3`, `uint4`, ...)
//!
//! Every vector has the exact byte layout of its shader counterpart, so it can be written to a
//! GPU buffer as is. Conversions between element kinds follow the shading language's rules for
//! which casts are implicit and which are explicit, but they are only defined on the device.

pub mod catalog;
pub mod errors;
pub mod log;
pub mod maths;

pub use catalog::{ConversionKind, ConversionMode, ConversionRule, ElementKind, ShaderVector, TargetLanguage, VectorType};
pub use errors::{Result, ShaderTypeError};
pub use maths::convert::{convert_on_host, ExplicitInto, VectorConversion};
pub use maths::element::Element;
pub use maths::vector::*;

pub mod project
{
    use ash::vk;

    pub const APP_NAME: &str = "Vk Shader Types";
    pub const VERSION_MAJOR: u32 = 0;
    pub const VERSION_MINOR: u32 = 1;

    /// Version packed the way Vulkan packs application versions
    pub const fn version() -> u32 { vk::make_api_version(0, VERSION_MAJOR, VERSION_MINOR, 0) }
}
