//! Conversions between vector types of different element kinds
//!
//! Exact widening (`float2` to `double2`, `int2` to `double2`, `uint2` to `double2`) is a `From`
//! impl, every other pair at the same size goes through [`ExplicitInto`]. Both only have a meaning
//! on the device: code that evaluates them on the host gets the zero vector back. They exist so
//! host written kernels type check before they are translated.
//!
//! ```
//! use vk_shader_types::{Double2, ExplicitInto, Float2, Int2};
//!
//! let wide: Double2 = Float2::new(1.5, -2.0).into();
//! let truncated: Int2 = Float2::new(1.5, -2.0).explicit_into();
//! assert_eq!(wide, Double2::zero());
//! assert_eq!(truncated, Int2::zero());
//! ```
//!
//! Narrowing is never reachable through `From`/`Into`:
//!
//! ```compile_fail
//! use vk_shader_types::{Float2, Int2};
//!
//! let truncated: Int2 = Float2::new(1.5, -2.0).into();
//! ```
//!
//! ```compile_fail
//! use vk_shader_types::{Double3, Float3};
//!
//! let narrowed = Float3::from(Double3::one());
//! ```

use crate::catalog::{ConversionKind, ConversionMode, ConversionRule, ShaderVector};
use crate::maths::vector::Vector;
use crate::warn;

/// A conversion the shading language defines between two vector types of the same size
pub trait VectorConversion<Target: ShaderVector>: ShaderVector
{
    const RULE: ConversionRule = ConversionRule::between(Self::TYPE, Target::TYPE.element());

    /// Component-wise result the conversion has on the device
    fn device_semantics(self) -> Target;
}

/// Conversion that needs to be spelled out, the counterpart of a cast in shader code
pub trait ExplicitInto<Target>
{
    fn explicit_into(self) -> Target;
}

/// Evaluate a conversion from host code
///
/// Device-only conversions return `Target::default()` and log a warning. Their result is
/// undefined by contract and must not be relied on.
pub fn convert_on_host<S, T>(source: S) -> T
where
    S: VectorConversion<T>,
    T: ShaderVector + Default,
{
    match S::RULE.kind {
        ConversionKind::HostComputable => source.device_semantics(),
        ConversionKind::DeviceOnlyIntrinsic => {
            warn!("{} evaluated in host code, returning the default value", S::RULE);
            T::default()
        }
    }
}

macro_rules! conversion {
    (implicit, $S:ty => $T:ty, $N:literal) => {
        conversion!(@semantics $S => $T, $N);
        const _: () = assert!(matches!(
            <Vector<$S, $N> as VectorConversion<Vector<$T, $N>>>::RULE.mode,
            ConversionMode::Implicit
        ));

        impl From<Vector<$S, $N>> for Vector<$T, $N>
        {
            fn from(v: Vector<$S, $N>) -> Self { convert_on_host(v) }
        }
    };
    (explicit, $S:ty => $T:ty, $N:literal) => {
        conversion!(@semantics $S => $T, $N);
        const _: () = assert!(matches!(
            <Vector<$S, $N> as VectorConversion<Vector<$T, $N>>>::RULE.mode,
            ConversionMode::Explicit
        ));

        impl ExplicitInto<Vector<$T, $N>> for Vector<$S, $N>
        {
            fn explicit_into(self) -> Vector<$T, $N> { convert_on_host(self) }
        }
    };
    (@semantics $S:ty => $T:ty, $N:literal) => {
        impl VectorConversion<Vector<$T, $N>> for Vector<$S, $N>
        {
            fn device_semantics(self) -> Vector<$T, $N> { self.map(|c| c as $T) }
        }
    };
}

macro_rules! conversions {
    ($mode:ident: $($S:ty => $T:ty),* $(,)?) => {
        $(
            conversion!($mode, $S => $T, 2);
            conversion!($mode, $S => $T, 3);
            conversion!($mode, $S => $T, 4);
        )*
    };
}

conversions!(implicit: f32 => f64, i32 => f64, u32 => f64);

conversions!(explicit:
    f32 => i32,
    f32 => u32,
    f64 => f32,
    f64 => i32,
    f64 => u32,
    i32 => f32,
    i32 => u32,
    u32 => f32,
    u32 => i32,
);

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::catalog::{conversion_rules, find_conversion};
    use crate::maths::vector::*;

    #[test]
    fn widening_on_host_yields_default()
    {
        let wide: Double2 = Float2::new(3.0, -1.5).into();
        assert_eq!(wide, Double2::default());

        let wide = Double4::from(Int4::new(1, 2, 3, 4));
        assert_eq!(wide, Double4::zero());

        let wide = Double3::from(UInt3::fill(u32::MAX));
        assert_eq!(wide, Double3::zero());
    }

    #[test]
    fn explicit_on_host_yields_default()
    {
        let narrow: Int2 = Float2::new(3.7, -1.5).explicit_into();
        assert_eq!(narrow, Int2::zero());

        let narrow: UInt4 = Double4::one().explicit_into();
        assert_eq!(narrow, UInt4::zero());

        let reinterpreted: UInt3 = Int3::fill(-1).explicit_into();
        assert_eq!(reinterpreted, UInt3::zero());
    }

    #[test]
    fn device_semantics_are_component_wise()
    {
        let wide: Double2 = Float2::new(3.0, -1.5).device_semantics();
        assert_eq!(wide, Double2::new(3.0, -1.5));

        let truncated: Int2 = Float2::new(3.7, -1.5).device_semantics();
        assert_eq!(truncated, Int2::new(3, -1));

        let narrowed: Float3 = Double3::new(0.5, 1e300, -2.0).device_semantics();
        assert_eq!(narrowed, Float3::new(0.5, f32::INFINITY, -2.0));
    }

    #[test]
    fn associated_rule_matches_table()
    {
        fn check<S: VectorConversion<T>, T: ShaderVector>()
        {
            assert_eq!(find_conversion(S::TYPE, T::TYPE), Some(&S::RULE));
        }

        check::<Float2, Double2>();
        check::<Int3, Double3>();
        check::<Float4, UInt4>();
        check::<Double2, Float2>();
        check::<UInt3, Int3>();
        check::<Int4, Float4>();
    }

    #[test]
    fn every_table_rule_is_device_only()
    {
        assert!(conversion_rules().iter().all(|rule| rule.kind == ConversionKind::DeviceOnlyIntrinsic));
    }
}
