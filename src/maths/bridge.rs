//! Lossless conversions between the shader vectors and host math types
//!
//! Most `glam` vectors share the exact layout of their shader counterparts and are reinterpreted
//! in place. `glam::Vec4` is over-aligned on SIMD targets and Vulkan offsets and extents have
//! their own field names, so those are copied component by component.

use crate::maths::layout::transmute_layout;
use crate::maths::vector::*;
use ash::vk;

macro_rules! reinterpret_bridge {
    ($($V:ty => $H:ty),* $(,)?) => {
        $(
            impl From<$H> for $V
            {
                fn from(v: $H) -> Self { transmute_layout(v) }
            }

            impl From<$V> for $H
            {
                fn from(v: $V) -> Self { transmute_layout(v) }
            }
        )*

    };
}

reinterpret_bridge!(
    Float2 => glam::Vec2,
    Float3 => glam::Vec3,
    Double2 => glam::DVec2,
    Double3 => glam::DVec3,
    Double4 => glam::DVec4,
    Int2 => glam::IVec2,
    Int3 => glam::IVec3,
    Int4 => glam::IVec4,
    UInt2 => glam::UVec2,
    UInt3 => glam::UVec3,
    UInt4 => glam::UVec4,
);

impl From<glam::Vec4> for Float4
{
    fn from(v: glam::Vec4) -> Self { Float4::from_array(v.to_array()) }
}

impl From<Float4> for glam::Vec4
{
    fn from(v: Float4) -> Self { glam::Vec4::from_array(v.to_array()) }
}

impl From<vk::Offset2D> for Int2
{
    fn from(offset: vk::Offset2D) -> Self { Int2::new(offset.x, offset.y) }
}

impl From<Int2> for vk::Offset2D
{
    fn from(v: Int2) -> Self { vk::Offset2D { x: v.x(), y: v.y() } }
}

impl From<vk::Offset3D> for Int3
{
    fn from(offset: vk::Offset3D) -> Self { Int3::new(offset.x, offset.y, offset.z) }
}

impl From<Int3> for vk::Offset3D
{
    fn from(v: Int3) -> Self { vk::Offset3D { x: v.x(), y: v.y(), z: v.z() } }
}

impl From<vk::Extent2D> for UInt2
{
    fn from(extent: vk::Extent2D) -> Self { UInt2::new(extent.width, extent.height) }
}

impl From<UInt2> for vk::Extent2D
{
    fn from(v: UInt2) -> Self { vk::Extent2D { width: v.x(), height: v.y() } }
}

impl From<vk::Extent3D> for UInt3
{
    fn from(extent: vk::Extent3D) -> Self { UInt3::new(extent.width, extent.height, extent.depth) }
}

impl From<UInt3> for vk::Extent3D
{
    fn from(v: UInt3) -> Self { vk::Extent3D { width: v.x(), height: v.y(), depth: v.z() } }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::maths::element::Element;

    /// Distinct values with the extremes of each element kind
    pub(super) trait Sample: Element
    {
        const VALUES: [Self; 6];
    }

    impl Sample for f32
    {
        const VALUES: [Self; 6] = [f32::MIN, -2.5, f32::MIN_POSITIVE, 1.0, 7.25, f32::MAX];
    }

    impl Sample for f64
    {
        const VALUES: [Self; 6] = [f64::MIN, -2.5, f64::EPSILON, 1.0, 7.25, f64::MAX];
    }

    impl Sample for i32
    {
        const VALUES: [Self; 6] = [i32::MIN, -7, 0, 1, 42, i32::MAX];
    }

    impl Sample for u32
    {
        const VALUES: [Self; 6] = [0, 1, 7, 42, u32::MAX - 1, u32::MAX];
    }

    /// Every sample value at every component position, never repeated within one vector
    pub(super) fn samples<T: Sample, const N: usize>() -> Vec<Vector<T, N>>
    {
        (0..T::VALUES.len())
            .map(|start| Vector::from_array(std::array::from_fn(|i| T::VALUES[(start + i) % T::VALUES.len()])))
            .collect()
    }

    #[test]
    fn float4_is_copied_per_component()
    {
        for v in samples::<f32, 4>() {
            let host = glam::Vec4::from(v);
            assert_eq!(host.to_array(), v.to_array());
            assert_eq!((host.x, host.y, host.z, host.w), (v.x(), v.y(), v.z(), v.w()));
            assert_eq!(Float4::from(host), v);
        }
        assert_eq!(align_of::<Float4>(), align_of::<f32>());
    }

    #[test]
    fn float2_round_trips_exactly()
    {
        let host: glam::Vec2 = Float2::new(3.0, -1.5).into();
        assert_eq!(host, glam::Vec2::new(3.0, -1.5));
        assert_eq!(Float2::from(host), Float2::new(3.0, -1.5));
    }

    #[test]
    fn extreme_values_survive_the_round_trip()
    {
        for v in [Float4::new(f32::MAX, f32::MIN, -0.0, f32::MIN_POSITIVE), Float4::zero(), Float4::fill(-1.0)] {
            let back = Float4::from(glam::Vec4::from(v));
            assert_eq!(back.to_array().map(f32::to_bits), v.to_array().map(f32::to_bits));
        }

        let ints = Int3::new(i32::MIN, 0, i32::MAX);
        assert_eq!(Int3::from(glam::IVec3::from(ints)), ints);

        let uints = UInt2::new(u32::MAX, 0);
        assert_eq!(glam::UVec2::from(uints), glam::UVec2::new(u32::MAX, 0));

        let doubles = Double3::new(f64::MAX, -f64::EPSILON, 0.0);
        assert_eq!(Double3::from(glam::DVec3::from(doubles)), doubles);
    }

    #[test]
    fn component_order_is_preserved()
    {
        let host = glam::Vec4::from(Float4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(host.to_array(), [1.0, 2.0, 3.0, 4.0]);

        let host = glam::DVec2::from(Double2::unit_y());
        assert_eq!((host.x, host.y), (0.0, 1.0));
    }

    #[test]
    fn vulkan_offsets_and_extents()
    {
        let offset: vk::Offset2D = Int2::new(-4, 9).into();
        assert_eq!((offset.x, offset.y), (-4, 9));
        assert_eq!(Int2::from(offset), Int2::new(-4, 9));

        let extent = vk::Extent3D { width: 640, height: 480, depth: 1 };
        assert_eq!(UInt3::from(extent), UInt3::new(640, 480, 1));
        assert_eq!(vk::Extent3D::from(UInt3::from(extent)), extent);

        let extent: vk::Extent2D = UInt2::new(1920, 1080).into();
        assert_eq!(UInt2::from(extent), UInt2::new(1920, 1080));

        let offset = vk::Offset3D::from(Int3::unit_z());
        assert_eq!(offset, vk::Offset3D { x: 0, y: 0, z: 1 });
    }
}
