use crate::log;
use ash::vk;
use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, ShaderTypeError>;

#[derive(Debug)]
pub enum ShaderTypeError
{
    /// A shader-side type name that is not in the vector catalog
    UnknownTypeName(String),
    /// A component count outside 2, 3 and 4
    ComponentCount(u8),
    /// A Vulkan format with no vector type counterpart
    UnsupportedFormat(vk::Format),
    /// Raw bytes that cannot be viewed as a slice of vectors
    ByteLayout(bytemuck::PodCastError),
}

impl log::ProjectError for ShaderTypeError
{
    fn title(&self) -> String
    {
        String::from(match *self {
            ShaderTypeError::UnknownTypeName(_) | ShaderTypeError::ComponentCount(_) => "Catalog",
            ShaderTypeError::UnsupportedFormat(_) => "Format",
            ShaderTypeError::ByteLayout(_) => "Layout",
        })
    }
}

impl Display for ShaderTypeError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match *self {
            ShaderTypeError::UnknownTypeName(ref name) => write!(f, "No vector type named '{}'", name),
            ShaderTypeError::ComponentCount(count) => write!(f, "Vectors have 2 to 4 components, not {}", count),
            ShaderTypeError::UnsupportedFormat(ref format) => {
                write!(f, "Format {:?} (code {}) has no vector type", format, format.as_raw())
            }
            ShaderTypeError::ByteLayout(ref err) => write!(f, "Cannot view bytes as vectors: {}", err),
        }
    }
}

impl std::error::Error for ShaderTypeError
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)>
    {
        match *self {
            ShaderTypeError::ByteLayout(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<bytemuck::PodCastError> for ShaderTypeError
{
    fn from(err: bytemuck::PodCastError) -> Self { ShaderTypeError::ByteLayout(err) }
}
