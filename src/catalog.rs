//! Closed catalog of the shader vector types and the conversions between them
//!
//! A shader translator uses this table to decide which conversions are legal, whether they need
//! an explicit cast, and which member names and formats to emit. Conversions are not resolved by
//! trait lookup at translation time, only through [`conversion_rules`].

use crate::errors::{Result, ShaderTypeError};
use crate::maths::element::Element;
use crate::maths::vector::Vector;
use ash::vk;
use bytemuck::Pod;
use derive_more::Display;

const COMPONENT_NAMES: [&str; 4] = ["x", "y", "z", "w"];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum ElementKind
{
    #[display("float")]
    Float,
    #[display("double")]
    Double,
    #[display("int")]
    Int,
    #[display("uint")]
    UInt,
}

impl ElementKind
{
    pub const ALL: [ElementKind; 4] = [ElementKind::Float, ElementKind::Double, ElementKind::Int, ElementKind::UInt];

    pub const fn byte_size(self) -> usize
    {
        match self {
            ElementKind::Double => 8,
            ElementKind::Float | ElementKind::Int | ElementKind::UInt => 4,
        }
    }

    /// Every value of `self` is exactly representable in `target`
    pub const fn widens_exactly_to(self, target: ElementKind) -> bool
    {
        matches!(
            (self, target),
            (ElementKind::Float, ElementKind::Double)
                | (ElementKind::Int, ElementKind::Double)
                | (ElementKind::UInt, ElementKind::Double)
        )
    }

    const fn glsl_prefix(self) -> &'static str
    {
        match self {
            ElementKind::Float => "",
            ElementKind::Double => "d",
            ElementKind::Int => "i",
            ElementKind::UInt => "u",
        }
    }
}

/// Shading language whose type names the catalog emits
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display)]
pub enum TargetLanguage
{
    #[default]
    #[display("HLSL")]
    Hlsl,
    #[display("GLSL")]
    Glsl,
}

impl TargetLanguage
{
    pub const ALL: [TargetLanguage; 2] = [TargetLanguage::Hlsl, TargetLanguage::Glsl];
}

/// A vector type identified by element kind and component count
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
#[display("{element}{components}")]
pub struct VectorType
{
    element:    ElementKind,
    components: u8,
}

impl VectorType
{
    pub const ALL: [VectorType; 12] = [
        VectorType::of(ElementKind::Float, 2),
        VectorType::of(ElementKind::Float, 3),
        VectorType::of(ElementKind::Float, 4),
        VectorType::of(ElementKind::Double, 2),
        VectorType::of(ElementKind::Double, 3),
        VectorType::of(ElementKind::Double, 4),
        VectorType::of(ElementKind::Int, 2),
        VectorType::of(ElementKind::Int, 3),
        VectorType::of(ElementKind::Int, 4),
        VectorType::of(ElementKind::UInt, 2),
        VectorType::of(ElementKind::UInt, 3),
        VectorType::of(ElementKind::UInt, 4),
    ];

    /// Catalog entry for `element` with `components` members, only 2, 3 and 4 exist
    pub fn new(element: ElementKind, components: u8) -> Result<Self>
    {
        match components {
            2..=4 => Ok(VectorType::of(element, components)),
            _ => Err(ShaderTypeError::ComponentCount(components)),
        }
    }

    /// Callers guarantee `components` is in 2..=4
    const fn of(element: ElementKind, components: u8) -> Self { VectorType { element, components } }

    pub const fn element(self) -> ElementKind { self.element }

    pub const fn components(self) -> u8 { self.components }

    pub const fn byte_size(self) -> usize { self.components as usize * self.element.byte_size() }

    /// Member names in declared order
    pub fn field_names(self) -> &'static [&'static str] { &COMPONENT_NAMES[..self.components as usize] }

    pub fn name(self, language: TargetLanguage) -> String
    {
        match language {
            TargetLanguage::Hlsl => self.to_string(),
            TargetLanguage::Glsl => format!("{}vec{}", self.element.glsl_prefix(), self.components),
        }
    }

    /// Look up a type by its name in any supported shading language
    pub fn from_name(name: &str) -> Result<Self>
    {
        VectorType::ALL
            .into_iter()
            .find(|ty| TargetLanguage::ALL.into_iter().any(|language| ty.name(language) == name))
            .ok_or_else(|| ShaderTypeError::UnknownTypeName(name.to_string()))
    }

    pub const fn vk_format(self) -> vk::Format
    {
        match (self.element, self.components) {
            (ElementKind::Float, 2) => vk::Format::R32G32_SFLOAT,
            (ElementKind::Float, 3) => vk::Format::R32G32B32_SFLOAT,
            (ElementKind::Float, _) => vk::Format::R32G32B32A32_SFLOAT,
            (ElementKind::Double, 2) => vk::Format::R64G64_SFLOAT,
            (ElementKind::Double, 3) => vk::Format::R64G64B64_SFLOAT,
            (ElementKind::Double, _) => vk::Format::R64G64B64A64_SFLOAT,
            (ElementKind::Int, 2) => vk::Format::R32G32_SINT,
            (ElementKind::Int, 3) => vk::Format::R32G32B32_SINT,
            (ElementKind::Int, _) => vk::Format::R32G32B32A32_SINT,
            (ElementKind::UInt, 2) => vk::Format::R32G32_UINT,
            (ElementKind::UInt, 3) => vk::Format::R32G32B32_UINT,
            (ElementKind::UInt, _) => vk::Format::R32G32B32A32_UINT,
        }
    }

    pub fn from_vk_format(format: vk::Format) -> Result<Self>
    {
        VectorType::ALL
            .into_iter()
            .find(|ty| ty.vk_format() == format)
            .ok_or(ShaderTypeError::UnsupportedFormat(format))
    }

    /// Name of the `glam` vector bridged to this type
    pub const fn host_native(self) -> &'static str
    {
        match (self.element, self.components) {
            (ElementKind::Float, 2) => "glam::Vec2",
            (ElementKind::Float, 3) => "glam::Vec3",
            (ElementKind::Float, _) => "glam::Vec4",
            (ElementKind::Double, 2) => "glam::DVec2",
            (ElementKind::Double, 3) => "glam::DVec3",
            (ElementKind::Double, _) => "glam::DVec4",
            (ElementKind::Int, 2) => "glam::IVec2",
            (ElementKind::Int, 3) => "glam::IVec3",
            (ElementKind::Int, _) => "glam::IVec4",
            (ElementKind::UInt, 2) => "glam::UVec2",
            (ElementKind::UInt, 3) => "glam::UVec3",
            (ElementKind::UInt, _) => "glam::UVec4",
        }
    }
}

/// Rust types that stand for a catalog entry
pub trait ShaderVector: Pod
{
    const TYPE: VectorType;
}

impl<T: Element> ShaderVector for Vector<T, 2>
{
    const TYPE: VectorType = VectorType::of(T::KIND, 2);
}

impl<T: Element> ShaderVector for Vector<T, 3>
{
    const TYPE: VectorType = VectorType::of(T::KIND, 3);
}

impl<T: Element> ShaderVector for Vector<T, 4>
{
    const TYPE: VectorType = VectorType::of(T::KIND, 4);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum ConversionMode
{
    #[display("implicit")]
    Implicit,
    #[display("explicit")]
    Explicit,
}

/// Whether a conversion has a meaning when evaluated by host code
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum ConversionKind
{
    #[display("host")]
    HostComputable,
    /// Only defined inside GPU executed code, host evaluation yields the default value
    #[display("device-only")]
    DeviceOnlyIntrinsic,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
#[display("{source} -> {target} ({mode}, {kind})")]
pub struct ConversionRule
{
    pub source: VectorType,
    pub target: VectorType,
    pub mode:   ConversionMode,
    pub kind:   ConversionKind,
}

impl ConversionRule
{
    /// Rule between two element kinds at the same component count
    ///
    /// Exact widening is implicit, every other pair needs an explicit cast. Both run only on the
    /// device.
    pub const fn between(source: VectorType, target: ElementKind) -> Self
    {
        ConversionRule {
            source,
            target: VectorType::of(target, source.components),
            mode: if source.element.widens_exactly_to(target) {
                ConversionMode::Implicit
            } else {
                ConversionMode::Explicit
            },
            kind: ConversionKind::DeviceOnlyIntrinsic,
        }
    }
}

const RULE_COUNT: usize = VectorType::ALL.len() * (ElementKind::ALL.len() - 1);

static CONVERSION_RULES: [ConversionRule; RULE_COUNT] = build_conversion_rules();

const fn build_conversion_rules() -> [ConversionRule; RULE_COUNT]
{
    let placeholder = ConversionRule::between(VectorType::ALL[0], ElementKind::Float);
    let mut rules = [placeholder; RULE_COUNT];
    let mut next = 0;
    let mut s = 0;
    while s < VectorType::ALL.len() {
        let source = VectorType::ALL[s];
        let mut t = 0;
        while t < ElementKind::ALL.len() {
            let target = ElementKind::ALL[t];
            if !same_kind(source.element, target) {
                rules[next] = ConversionRule::between(source, target);
                next += 1;
            }
            t += 1;
        }
        s += 1;
    }
    rules
}

const fn same_kind(a: ElementKind, b: ElementKind) -> bool { a as u8 == b as u8 }

/// Every legal conversion between distinct vector types
pub fn conversion_rules() -> &'static [ConversionRule] { &CONVERSION_RULES }

pub fn find_conversion(source: VectorType, target: VectorType) -> Option<&'static ConversionRule>
{
    CONVERSION_RULES.iter().find(|rule| rule.source == source && rule.target == target)
}

pub fn implicit_conversions() -> impl Iterator<Item = &'static ConversionRule>
{
    CONVERSION_RULES.iter().filter(|rule| rule.mode == ConversionMode::Implicit)
}

pub fn explicit_conversions() -> impl Iterator<Item = &'static ConversionRule>
{
    CONVERSION_RULES.iter().filter(|rule| rule.mode == ConversionMode::Explicit)
}

/// A lossless implicit conversion to a host type in both directions
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HostBridge
{
    pub vector:        VectorType,
    pub host_type:     &'static str,
    /// Bytes are reinterpreted rather than copied per component
    pub reinterpreted: bool,
}

impl HostBridge
{
    pub const fn kind(&self) -> ConversionKind { ConversionKind::HostComputable }

    pub const fn mode(&self) -> ConversionMode { ConversionMode::Implicit }
}

static HOST_BRIDGES: [HostBridge; 16] = build_host_bridges();

const fn per_component(vector: VectorType, host_type: &'static str) -> HostBridge
{
    HostBridge { vector, host_type, reinterpreted: false }
}

/// `glam::Vec4` is 16 byte aligned on SIMD targets while `float4` is aligned like `float`
const fn over_aligned(vector: VectorType) -> bool
{
    matches!((vector.element, vector.components), (ElementKind::Float, 4))
}

const fn build_host_bridges() -> [HostBridge; 16]
{
    let mut bridges = [per_component(VectorType::ALL[0], ""); 16];
    let mut i = 0;
    while i < VectorType::ALL.len() {
        let vector = VectorType::ALL[i];
        bridges[i] = HostBridge { vector, host_type: vector.host_native(), reinterpreted: !over_aligned(vector) };
        i += 1;
    }
    // Vulkan offsets and extents name their fields differently, so they are copied per component
    bridges[12] = per_component(VectorType::of(ElementKind::Int, 2), "ash::vk::Offset2D");
    bridges[13] = per_component(VectorType::of(ElementKind::Int, 3), "ash::vk::Offset3D");
    bridges[14] = per_component(VectorType::of(ElementKind::UInt, 2), "ash::vk::Extent2D");
    bridges[15] = per_component(VectorType::of(ElementKind::UInt, 3), "ash::vk::Extent3D");
    bridges
}

pub fn host_bridges() -> &'static [HostBridge] { &HOST_BRIDGES }
