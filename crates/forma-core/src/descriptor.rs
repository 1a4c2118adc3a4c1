//! Type descriptors: a static description of structured types.
//!
//! The schema introspector never inspects live values. Each model type
//! registers a descriptor at build time via [`describe_struct!`] or
//! [`describe_enum!`], listing its fields by their serialized names and
//! their declared Rust types. Declared types map onto [`TypeRef`] through
//! the [`Describe`] trait:
//!
//! | Rust type                                   | `TypeRef`                 |
//! |---------------------------------------------|---------------------------|
//! | `String`, `&str`, `char`                    | `Primitive(String)`       |
//! | `i8`..`i32`, `u8`..`u32`                    | `Primitive(Integer)`      |
//! | `i64`, `u64`, `isize`, `usize`              | `Primitive(Long)`         |
//! | `f32`, `f64`                                | `Primitive(Float)`        |
//! | `bool`                                      | `Primitive(Boolean)`      |
//! | `chrono` date/time types                    | `Primitive(Date)`         |
//! | `Option<T>`, `Box<T>`                       | same as `T`               |
//! | `Vec<T>`, `[T; N]`                          | `Sequence(T)`             |
//! | `describe_enum!` types                      | `Enum`                    |
//! | `describe_struct!` types                    | `Struct`                  |

use std::fmt;

/// Scalar kinds a declared type can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    /// Integers of 32 bits or fewer.
    Integer,
    /// 64-bit integers; eligible for the epoch-millisecond date heuristic.
    Long,
    Float,
    Boolean,
    Date,
}

/// Name and symbolic values of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumRef {
    pub name: &'static str,
    pub values: &'static [&'static str],
}

/// Lazily resolved reference to a structured type.
///
/// Resolution is deferred so that a type graph containing cycles can be
/// described; detecting the cycle is the introspector's job.
#[derive(Clone, Copy)]
pub struct StructRef {
    pub name: &'static str,
    resolve: fn() -> StructDescriptor,
}

impl StructRef {
    #[must_use]
    pub const fn new(name: &'static str, resolve: fn() -> StructDescriptor) -> Self {
        Self { name, resolve }
    }

    #[must_use]
    pub fn resolve(&self) -> StructDescriptor {
        (self.resolve)()
    }
}

impl fmt::Debug for StructRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructRef").field("name", &self.name).finish()
    }
}

impl PartialEq for StructRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// A declared field type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    Primitive(Primitive),
    Enum(EnumRef),
    Sequence(Box<TypeRef>),
    Struct(StructRef),
}

/// One declared field of a structured type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub ty: TypeRef,
}

impl FieldDescriptor {
    #[must_use]
    pub const fn new(name: &'static str, ty: TypeRef) -> Self {
        Self { name, ty }
    }
}

/// A structured type: its name and its fields in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDescriptor {
    pub name: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl StructDescriptor {
    #[must_use]
    pub const fn new(name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        Self { name, fields }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Maps a declared Rust type onto a [`TypeRef`].
pub trait Describe {
    fn type_ref() -> TypeRef;
}

/// Structured types with a registered descriptor.
pub trait DescribeStruct {
    const NAME: &'static str;
    fn descriptor() -> StructDescriptor;
}

/// Enumerations with registered symbolic values.
pub trait DescribeEnum {
    const NAME: &'static str;
    const VALUES: &'static [&'static str];
}

macro_rules! describe_primitive {
    ($kind:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl Describe for $ty {
                fn type_ref() -> TypeRef {
                    TypeRef::Primitive(Primitive::$kind)
                }
            }
        )+
    };
}

describe_primitive!(String: String, &str, char);
describe_primitive!(Integer: i8, i16, i32, u8, u16, u32);
describe_primitive!(Long: i64, u64, isize, usize);
describe_primitive!(Float: f32, f64);
describe_primitive!(Boolean: bool);
describe_primitive!(
    Date: chrono::NaiveDate,
    chrono::NaiveDateTime,
    chrono::DateTime<chrono::Utc>,
    chrono::DateTime<chrono::FixedOffset>,
);

impl<T: Describe> Describe for Option<T> {
    fn type_ref() -> TypeRef {
        T::type_ref()
    }
}

impl<T: Describe> Describe for Box<T> {
    fn type_ref() -> TypeRef {
        T::type_ref()
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn type_ref() -> TypeRef {
        TypeRef::Sequence(Box::new(T::type_ref()))
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn type_ref() -> TypeRef {
        TypeRef::Sequence(Box::new(T::type_ref()))
    }
}

/// Register a struct's descriptor.
///
/// Field names are the serialized names (the keys documents carry), each
/// paired with the declared Rust type of the field.
///
/// ```
/// use forma_core::describe_struct;
/// use forma_core::descriptor::{DescribeStruct, TypeRef, Primitive};
///
/// pub struct Tile { pub id: String, pub weight: i32 }
/// describe_struct!(Tile { "_id" => String, "weight" => i32 });
///
/// let d = Tile::descriptor();
/// assert_eq!(d.fields[1].ty, TypeRef::Primitive(Primitive::Integer));
/// ```
#[macro_export]
macro_rules! describe_struct {
    ($ty:ident { $($field:literal => $fty:ty),* $(,)? }) => {
        impl $crate::descriptor::DescribeStruct for $ty {
            const NAME: &'static str = stringify!($ty);

            fn descriptor() -> $crate::descriptor::StructDescriptor {
                $crate::descriptor::StructDescriptor::new(
                    stringify!($ty),
                    vec![
                        $($crate::descriptor::FieldDescriptor::new(
                            $field,
                            <$fty as $crate::descriptor::Describe>::type_ref(),
                        )),*
                    ],
                )
            }
        }

        impl $crate::descriptor::Describe for $ty {
            fn type_ref() -> $crate::descriptor::TypeRef {
                $crate::descriptor::TypeRef::Struct($crate::descriptor::StructRef::new(
                    stringify!($ty),
                    <$ty as $crate::descriptor::DescribeStruct>::descriptor,
                ))
            }
        }
    };
}

/// Register an enum's name and symbolic values.
#[macro_export]
macro_rules! describe_enum {
    ($ty:ident [$($value:literal),* $(,)?]) => {
        impl $crate::descriptor::DescribeEnum for $ty {
            const NAME: &'static str = stringify!($ty);
            const VALUES: &'static [&'static str] = &[$($value),*];
        }

        impl $crate::descriptor::Describe for $ty {
            fn type_ref() -> $crate::descriptor::TypeRef {
                $crate::descriptor::TypeRef::Enum($crate::descriptor::EnumRef {
                    name: <$ty as $crate::descriptor::DescribeEnum>::NAME,
                    values: <$ty as $crate::descriptor::DescribeEnum>::VALUES,
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    struct Node {
        label: String,
        children: Vec<Node>,
    }
    describe_struct!(Node { "label" => String, "children" => Vec<Node> });

    #[allow(dead_code)]
    enum Color {
        Red,
        Green,
    }
    describe_enum!(Color["red", "green"]);

    #[test]
    fn option_and_box_are_transparent() {
        assert_eq!(
            <Option<i64>>::type_ref(),
            TypeRef::Primitive(Primitive::Long)
        );
        assert_eq!(
            <Box<Option<bool>>>::type_ref(),
            TypeRef::Primitive(Primitive::Boolean)
        );
    }

    #[test]
    fn nested_sequences_nest() {
        assert_eq!(
            <Vec<Vec<u8>>>::type_ref(),
            TypeRef::Sequence(Box::new(TypeRef::Sequence(Box::new(
                TypeRef::Primitive(Primitive::Integer)
            ))))
        );
    }

    #[test]
    fn chrono_types_are_dates() {
        assert_eq!(
            <chrono::DateTime<chrono::Utc>>::type_ref(),
            TypeRef::Primitive(Primitive::Date)
        );
        assert_eq!(
            chrono::NaiveDate::type_ref(),
            TypeRef::Primitive(Primitive::Date)
        );
    }

    #[test]
    fn self_referential_struct_is_describable() {
        let d = Node::descriptor();
        assert_eq!(d.name, "Node");
        let TypeRef::Sequence(inner) = &d.field("children").unwrap().ty else {
            panic!("children should be a sequence");
        };
        let TypeRef::Struct(node) = inner.as_ref() else {
            panic!("element should be a struct");
        };
        assert_eq!(node.name, "Node");
        assert_eq!(node.resolve().fields.len(), 2);
    }

    #[test]
    fn enum_descriptor_carries_values() {
        assert_eq!(
            Color::type_ref(),
            TypeRef::Enum(EnumRef {
                name: "Color",
                values: &["red", "green"],
            })
        );
    }
}
