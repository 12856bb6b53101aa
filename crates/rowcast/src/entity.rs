use rowcast_core::row::{Row, Value};
use rowcast_core::Result;

/// One resolved field of a mappable struct.
pub struct FieldBinding<T: 'static> {
    /// Normalized field name: lowercase, underscores removed. Column names
    /// normalize the same way before matching.
    pub name: &'static str,

    /// Whether the field is an `Option`, i.e. accepts NULL explicitly.
    pub nullable: bool,

    /// Writes a coerced value into the field. Returns `false` when the
    /// value was dropped because its kind does not coerce.
    pub set: fn(&mut T, Value) -> bool,
}

/// Registration-time capability descriptor for a mappable struct.
///
/// Recorded once per type by `#[derive(FromRow)]` and consulted by the
/// materializer in place of any runtime introspection: the field table
/// drives the populate path, the constructor slots drive strategy
/// selection.
pub struct Descriptor<T: 'static> {
    /// Fields in declaration order.
    pub fields: &'static [FieldBinding<T>],

    /// Parameterless constructor, used by the populate path.
    pub default: Option<fn() -> T>,

    /// Positional constructor over all fields in declaration order.
    /// Preferred over the populate path when present.
    pub positional: Option<fn(Row) -> Result<T>>,
}

/// A struct with a registered [`Descriptor`]. Implemented by
/// `#[derive(FromRow)]`.
pub trait Entity: Sized + 'static {
    fn descriptor() -> &'static Descriptor<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Dummy {
        n: i64,
    }

    fn set_n(instance: &mut Dummy, value: Value) -> bool {
        match value {
            Value::I64(v) => {
                instance.n = v;
                true
            }
            _ => false,
        }
    }

    // The field table lives in a static, so the descriptor types must be
    // well-formed at the 'static lifetime.
    static DESCRIPTOR: Descriptor<Dummy> = Descriptor {
        fields: &[FieldBinding {
            name: "n",
            nullable: false,
            set: set_n,
        }],
        default: Some(Dummy::default),
        positional: None,
    };

    #[test]
    fn descriptor_holds_a_static_field_table() {
        assert_eq!(DESCRIPTOR.fields.len(), 1);
        assert_eq!(DESCRIPTOR.fields[0].name, "n");
        assert!(!DESCRIPTOR.fields[0].nullable);

        let mut dummy = DESCRIPTOR.default.unwrap()();
        assert!((DESCRIPTOR.fields[0].set)(&mut dummy, Value::I64(7)));
        assert_eq!(dummy.n, 7);
        assert!(!(DESCRIPTOR.fields[0].set)(&mut dummy, Value::from("x")));
    }
}
