mod bindings;
pub use bindings::binding_resolutions;

pub(crate) mod compose;

use crate::entity::Entity;
use rowcast_core::{row::Row, Error, Result};

/// Constructs and populates one instance from one row.
///
/// Strategy selection: the positional constructor when the type records
/// one, else default-then-populate through the binding cache, else the type
/// is unmappable.
pub fn materialize<T: Entity>(row: Row) -> Result<T> {
    let descriptor = T::descriptor();

    if let Some(positional) = descriptor.positional {
        return positional(row);
    }

    let Some(default) = descriptor.default else {
        return Err(Error::construction(std::any::type_name::<T>()));
    };

    let bindings = bindings::resolve::<T>(&row);
    let mut instance = default();

    for (index, (_, value)) in row.into_columns().enumerate() {
        let Some(slot) = bindings.slot(index) else {
            // Unmatched column: value dropped, mapping continues.
            continue;
        };
        if value.is_null() && !bindings.is_nullable(index) {
            continue;
        }
        // A kind mismatch drops the value; the field keeps its default.
        let _ = (descriptor.fields[slot].set)(&mut instance, value);
    }

    Ok(instance)
}
