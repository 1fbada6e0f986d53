// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

//! Process-wide entity map registry.
//!
//! Static callers reach a map through [`Entity::entity_map`] and never touch
//! this module. The registry serves dynamic callers that hold only a type
//! parameter and want a uniform `&'static dyn EntityMap<T>`, or a fast
//! failure when the type was never registered.
//!
//! Registration is idempotent and guarded: the table itself is published
//! through a `OnceLock`, and each key is inserted at most once under the
//! write lock. Lookups take the read side of an `RwLock` and return an
//! already-published immutable reference.

use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    sync::{OnceLock, RwLock}
};

use crate::{
    error::Error,
    map::{Entity, EntityMap}
};

type MapTable = RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>;

fn table() -> &'static MapTable {
    static TABLE: OnceLock<MapTable> = OnceLock::new();
    TABLE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Register the entity map for `T`.
///
/// Idempotent: concurrent and repeated calls for the same type leave the
/// first published map in place.
pub fn register<T: Entity>() {
    let map: &'static dyn EntityMap<T> = T::entity_map();
    let mut guard = table().write().unwrap_or_else(|poisoned| poisoned.into_inner());
    guard
        .entry(TypeId::of::<T>())
        .or_insert_with(|| Box::new(map));
}

/// Look up the registered entity map for `T`.
///
/// # Errors
///
/// [`Error::NoMappingFound`] with the type name when `T` was never
/// registered.
pub fn lookup<T: 'static>() -> Result<&'static dyn EntityMap<T>, Error> {
    let guard = table().read().unwrap_or_else(|poisoned| poisoned.into_inner());
    guard
        .get(&TypeId::of::<T>())
        .and_then(|entry| entry.downcast_ref::<&'static dyn EntityMap<T>>())
        .copied()
        .ok_or(Error::NoMappingFound {
            type_name: type_name::<T>()
        })
}
