use crate::catalog::ShaderVector;
use crate::errors::{Result, ShaderTypeError};
use crate::maths::vector::*;
use ash::vk;
use bytemuck::Pod;
use std::ffi::c_void;

macro_rules! assert_layout {
    ($($V:ty: $E:ty),* $(,)?) => {
        $(
            const _: () = assert!(size_of::<$V>() == <$V as ShaderVector>::TYPE.byte_size());
            const _: () = assert!(align_of::<$V>() == align_of::<$E>());
        )*
    };
}

assert_layout!(
    Float2: f32,
    Float3: f32,
    Float4: f32,
    Double2: f64,
    Double3: f64,
    Double4: f64,
    Int2: i32,
    Int3: i32,
    Int4: i32,
    UInt2: u32,
    UInt3: u32,
    UInt4: u32,
);

/// Size of a vector in bytes, always components times the element size
pub const fn byte_size<V: ShaderVector>() -> usize { size_of::<V>() }

/// Reinterpret the bytes of one value as another type of the same layout
///
/// This is the only place bytes get reinterpreted between types. Size and alignment are checked at
/// compile time; field order is checked by the bridge tests.
pub fn transmute_layout<A: Pod, B: Pod>(value: A) -> B
{
    const {
        assert!(size_of::<A>() == size_of::<B>(), "layouts differ in size");
        assert!(align_of::<A>() == align_of::<B>(), "layouts differ in alignment");
    };
    bytemuck::cast(value)
}

/// View vectors as the raw bytes a GPU buffer expects
pub fn as_bytes<V: ShaderVector>(values: &[V]) -> &[u8] { bytemuck::cast_slice(values) }

/// View raw bytes as vectors without copying
///
/// Fails when the length is not a whole number of vectors or the bytes are not aligned for `V`.
pub fn from_bytes<V: ShaderVector>(bytes: &[u8]) -> Result<&[V]> { Ok(bytemuck::try_cast_slice(bytes)?) }

/// Copy vectors out of bytes of any alignment, for example a buffer read back from the GPU
pub fn read_unaligned<V: ShaderVector>(bytes: &[u8]) -> Result<Vec<V>>
{
    let chunks = bytes.chunks_exact(size_of::<V>());
    if !chunks.remainder().is_empty() {
        return Err(ShaderTypeError::ByteLayout(bytemuck::PodCastError::OutputSliceWouldHaveSlop));
    }
    Ok(chunks.map(bytemuck::pod_read_unaligned).collect())
}

/// Copy vectors into memory mapped from a GPU allocation
///
/// # Safety
/// `dst` must be valid for writes of `size_of_val(values)` bytes and must not overlap `values`
pub unsafe fn copy_to_mapped<V: ShaderVector>(dst: *mut c_void, values: &[V])
{
    std::ptr::copy_nonoverlapping(values.as_ptr(), dst.cast::<V>(), values.len());
}

/// Vertex attribute reading a `V` at `offset` bytes into each vertex
pub fn attribute_description<V: ShaderVector>(binding: u32, location: u32, offset: u32) -> vk::VertexInputAttributeDescription
{
    vk::VertexInputAttributeDescription::default()
        .binding(binding)
        .location(location)
        .format(V::TYPE.vk_format())
        .offset(offset)
}

/// Per-vertex binding whose stride is the size of `T`
pub fn binding_description<T: Pod>(binding: u32) -> vk::VertexInputBindingDescription
{
    vk::VertexInputBindingDescription::default()
        .binding(binding)
        .stride(size_of::<T>() as u32)
        .input_rate(vk::VertexInputRate::VERTEX)
}
