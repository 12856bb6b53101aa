use std::any::TypeId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, RwLock};

use crate::entity::{Descriptor, Entity};
use rowcast_core::row::Row;

/// Resolved column bindings for one target type: column index to field
/// slot, plus which indices bind to nullable fields.
///
/// Built from the first row observed for a type, then shared read-only for
/// the life of the process; the row shape for a given query/type pairing is
/// assumed stable.
pub(crate) struct Bindings {
    slots: Box<[Option<usize>]>,
    nullable: Box<[bool]>,
}

impl Bindings {
    pub(crate) fn slot(&self, index: usize) -> Option<usize> {
        self.slots.get(index).copied().flatten()
    }

    pub(crate) fn is_nullable(&self, index: usize) -> bool {
        self.nullable.get(index).copied().unwrap_or(false)
    }

    fn build<T>(descriptor: &Descriptor<T>, row: &Row) -> Self {
        let mut slots = Vec::with_capacity(row.len());
        let mut nullable = Vec::with_capacity(row.len());

        for (name, _) in row.columns() {
            RESOLUTIONS.fetch_add(1, Ordering::Relaxed);
            let normalized = normalize(name);
            let slot = descriptor
                .fields
                .iter()
                .position(|field| field.name == normalized);
            slots.push(slot);
            nullable.push(slot.is_some_and(|slot| descriptor.fields[slot].nullable));
        }

        Bindings {
            slots: slots.into_boxed_slice(),
            nullable: nullable.into_boxed_slice(),
        }
    }
}

type Cache = RwLock<HashMap<TypeId, Arc<Bindings>>>;

static CACHE: OnceLock<Cache> = OnceLock::new();
static RESOLUTIONS: AtomicU64 = AtomicU64::new(0);

/// Total column-to-field resolution lookups performed process-wide.
///
/// Moves only on binding-cache misses and stays flat while repeated mapping
/// of a known shape hits the cache. Exposed for instrumentation.
pub fn binding_resolutions() -> u64 {
    RESOLUTIONS.load(Ordering::Relaxed)
}

/// Returns the bindings for `T`, resolving them from `row` on first use.
///
/// First writer wins: concurrent resolvers for the same type compute
/// identical content, so the losing insert is discarded, not an error.
pub(crate) fn resolve<T: Entity>(row: &Row) -> Arc<Bindings> {
    let cache = CACHE.get_or_init(Default::default);
    let key = TypeId::of::<T>();

    if let Some(found) = cache.read().expect("binding cache poisoned").get(&key) {
        return Arc::clone(found);
    }

    let built = Arc::new(Bindings::build(T::descriptor(), row));
    let mut cache = cache.write().expect("binding cache poisoned");
    Arc::clone(cache.entry(key).or_insert(built))
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_case_and_underscore_insensitive() {
        assert_eq!(normalize("FOO_BAR"), "foobar");
        assert_eq!(normalize("foo_bar"), "foobar");
        assert_eq!(normalize("FooBar"), "foobar");
        assert_eq!(normalize("__leading"), "leading");
    }
}
