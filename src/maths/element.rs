use crate::catalog::ElementKind;
use bytemuck::Pod;
use std::fmt::Debug;

/// Scalar type that can make up the components of a shader vector
pub trait Element: Pod + Default + PartialEq + Debug
{
    const KIND: ElementKind;
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! element {
    ($T:ty: $kind:ident, $zero:literal, $one:literal) => {
        impl Element for $T
        {
            const KIND: ElementKind = ElementKind::$kind;
            const ZERO: Self = $zero;
            const ONE: Self = $one;
        }
    };
}

element!(f32: Float, 0.0, 1.0);
element!(f64: Double, 0.0, 1.0);
element!(i32: Int, 0, 1);
element!(u32: UInt, 0, 1);
