use vk_shader_types::catalog::{self, ConversionKind, ConversionMode};
use vk_shader_types::maths::layout;
use vk_shader_types::*;

fn assert_layout<V: ShaderVector>(expected: usize)
{
    assert_eq!(layout::byte_size::<V>(), expected, "{}", V::TYPE);
    assert_eq!(V::TYPE.byte_size(), expected, "{}", V::TYPE);
}

#[test]
fn byte_size_is_components_times_element_for_the_whole_family()
{
    assert_layout::<Float2>(8);
    assert_layout::<Float3>(12);
    assert_layout::<Float4>(16);
    assert_layout::<Double2>(16);
    assert_layout::<Double3>(24);
    assert_layout::<Double4>(32);
    assert_layout::<Int2>(8);
    assert_layout::<Int3>(12);
    assert_layout::<Int4>(16);
    assert_layout::<UInt2>(8);
    assert_layout::<UInt3>(12);
    assert_layout::<UInt4>(16);
}

#[test]
fn float2_through_host_vector_keeps_exact_components()
{
    let host: glam::Vec2 = Float2::new(3.0, -1.5).into();
    let back = Float2::from(host);
    assert_eq!((back.x(), back.y()), (3.0, -1.5));
}

#[test]
fn unit_vectors_of_float2()
{
    assert_eq!(Float2::unit_x(), Float2::new(1.0, 0.0));
    assert_eq!(Float2::unit_y(), Float2::new(0.0, 1.0));
    assert_eq!(Float2::zero(), Float2::from(0.0f32));
    assert_eq!(Float2::one(), Float2::from(1.0f32));
}

#[test]
fn device_only_conversions_do_not_panic_on_the_host()
{
    let wide: Double2 = Float2::new(3.0, -1.5).into();
    let int: Int2 = Float2::new(3.0, -1.5).explicit_into();
    let uint: UInt2 = Float2::new(3.0, -1.5).explicit_into();
    assert_eq!(wide, Double2::default());
    assert_eq!(int, Int2::default());
    assert_eq!(uint, UInt2::default());
}

#[test]
fn rust_conversions_agree_with_the_catalog()
{
    let widening = catalog::find_conversion(Float2::TYPE, Double2::TYPE).unwrap();
    assert_eq!(widening.mode, ConversionMode::Implicit);
    assert_eq!(widening.kind, ConversionKind::DeviceOnlyIntrinsic);
    assert_eq!(<Float2 as VectorConversion<Double2>>::RULE, *widening);

    for target in [Int2::TYPE, UInt2::TYPE] {
        let narrowing = catalog::find_conversion(Float2::TYPE, target).unwrap();
        assert_eq!(narrowing.mode, ConversionMode::Explicit);
    }
}

#[test]
fn translator_can_resolve_names_and_members()
{
    let ty = VectorType::from_name("vec2").unwrap();
    assert_eq!(ty, Float2::TYPE);
    assert_eq!(ty.name(TargetLanguage::Hlsl), "float2");
    assert_eq!(ty.field_names(), ["x", "y"]);
    assert_eq!(ty.host_native(), "glam::Vec2");

    let err = VectorType::from_name("float5").unwrap_err();
    assert!(matches!(err, ShaderTypeError::UnknownTypeName(_)));
}

#[test]
fn vertex_data_uploads_as_bytes()
{
    let positions = [Float2::new(-0.5, -0.5), Float2::new(0.5, -0.5), Float2::new(0.5, 0.5)];
    let bytes = layout::as_bytes(&positions);
    assert_eq!(bytes.len(), 24);

    let restored: Vec<Float2> = layout::read_unaligned(bytes).unwrap();
    assert_eq!(restored, positions);
}
