use crate::maths::element::Element;
use bytemuck::{Pod, Zeroable};
use derive_more::{From, IntoIterator};
use std::ops::Index;

/// Fixed size vector laid out exactly like the shader type of the same element and size
///
/// The components live in a plain array so the struct has no padding and no alignment beyond
/// that of `T`. Values are never mutated after construction.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, From, IntoIterator)]
#[into_iterator(owned, ref)]
pub struct Vector<T, const SIZE: usize>([T; SIZE]);

pub type Float2 = Vector<f32, 2>;
pub type Float3 = Vector<f32, 3>;
pub type Float4 = Vector<f32, 4>;
pub type Double2 = Vector<f64, 2>;
pub type Double3 = Vector<f64, 3>;
pub type Double4 = Vector<f64, 4>;
pub type Int2 = Vector<i32, 2>;
pub type Int3 = Vector<i32, 3>;
pub type Int4 = Vector<i32, 4>;
pub type UInt2 = Vector<u32, 2>;
pub type UInt3 = Vector<u32, 3>;
pub type UInt4 = Vector<u32, 4>;

// SAFETY: repr(transparent) over [T; SIZE], which has no padding when T is Pod
unsafe impl<T: Zeroable, const SIZE: usize> Zeroable for Vector<T, SIZE> {}
unsafe impl<T: Pod, const SIZE: usize> Pod for Vector<T, SIZE> {}

impl<T, const SIZE: usize> Vector<T, SIZE>
{
    pub const fn from_array(values: [T; SIZE]) -> Self { Vector(values) }

    pub const fn as_array(&self) -> &[T; SIZE] { &self.0 }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, SIZE> { Vector(self.0.map(f)) }
}

impl<T: Copy, const SIZE: usize> Vector<T, SIZE>
{
    pub fn to_array(self) -> [T; SIZE] { self.0 }
}

impl<T: Element, const SIZE: usize> Vector<T, SIZE>
{
    /// Broadcast a single scalar to every component
    pub fn fill(v: T) -> Self { Vector([v; SIZE]) }

    pub fn zero() -> Self { Self::fill(T::ZERO) }

    pub fn one() -> Self { Self::fill(T::ONE) }

    /// The vector with one at `axis` and zero elsewhere, `None` when `axis` is out of range
    pub fn unit(axis: usize) -> Option<Self>
    {
        if axis >= SIZE {
            return None;
        }
        let mut values = [T::ZERO; SIZE];
        values[axis] = T::ONE;
        Some(Vector(values))
    }
}

impl<T: Element, const SIZE: usize> Default for Vector<T, SIZE>
{
    fn default() -> Self { Self::zero() }
}

/// Scalar to vector promotion, lets a bare scalar stand in wherever `impl Into<Vector<T, SIZE>>`
/// is accepted
impl<T: Element, const SIZE: usize> From<T> for Vector<T, SIZE>
{
    fn from(v: T) -> Self { Self::fill(v) }
}

impl<T, const SIZE: usize> Index<usize> for Vector<T, SIZE>
{
    type Output = T;

    fn index(&self, index: usize) -> &T { &self.0[index] }
}

impl<T: Copy> Vector<T, 2>
{
    pub const fn new(x: T, y: T) -> Self { Vector([x, y]) }

    pub fn x(&self) -> T { self.0[0] }
    pub fn y(&self) -> T { self.0[1] }
}

impl<T: Copy> Vector<T, 3>
{
    pub const fn new(x: T, y: T, z: T) -> Self { Vector([x, y, z]) }

    pub fn x(&self) -> T { self.0[0] }
    pub fn y(&self) -> T { self.0[1] }
    pub fn z(&self) -> T { self.0[2] }
}

impl<T: Copy> Vector<T, 4>
{
    pub const fn new(x: T, y: T, z: T, w: T) -> Self { Vector([x, y, z, w]) }

    pub fn x(&self) -> T { self.0[0] }
    pub fn y(&self) -> T { self.0[1] }
    pub fn z(&self) -> T { self.0[2] }
    pub fn w(&self) -> T { self.0[3] }
}

impl<T: Element> Vector<T, 2>
{
    pub fn unit_x() -> Self { Self::new(T::ONE, T::ZERO) }
    pub fn unit_y() -> Self { Self::new(T::ZERO, T::ONE) }
}

impl<T: Element> Vector<T, 3>
{
    pub fn unit_x() -> Self { Self::new(T::ONE, T::ZERO, T::ZERO) }
    pub fn unit_y() -> Self { Self::new(T::ZERO, T::ONE, T::ZERO) }
    pub fn unit_z() -> Self { Self::new(T::ZERO, T::ZERO, T::ONE) }
}

impl<T: Element> Vector<T, 4>
{
    pub fn unit_x() -> Self { Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO) }
    pub fn unit_y() -> Self { Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO) }
    pub fn unit_z() -> Self { Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO) }
    pub fn unit_w() -> Self { Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE) }
}
