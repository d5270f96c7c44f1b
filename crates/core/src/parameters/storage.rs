//! Parameter storage
//!
//! Provides `ParameterStore`, a fixed-capacity name → value map used to
//! configure the controller, scheduler, mixer and loop at startup.

use super::error::ParameterError;
use bitflags::bitflags;
use heapless::index_map::FnvIndexMap;
use heapless::String;

/// Maximum parameter name length
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters
pub const MAX_PARAMS: usize = 32;

bitflags! {
    /// Parameter flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParamFlags: u8 {
        /// Parameter is omitted from listings
        const HIDDEN = 0b00000001;
        /// Parameter cannot be changed after registration
        const READ_ONLY = 0b00000010;
    }
}

/// Parameter value types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Boolean parameter
    Bool(bool),
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit floating point
    Float(f32),
}

impl ParamValue {
    /// True if `other` holds the same variant
    pub fn same_type(&self, other: &ParamValue) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }

    /// Numeric view of the value (`Bool` maps to 0.0 / 1.0)
    pub fn as_f32(&self) -> f32 {
        match *self {
            ParamValue::Bool(b) => {
                if b {
                    1.0
                } else {
                    0.0
                }
            }
            ParamValue::Int(v) => v as f32,
            ParamValue::Float(v) => v,
        }
    }
}

/// Parameter metadata
#[derive(Debug, Clone)]
pub struct ParamMetadata {
    /// Parameter flags
    pub flags: ParamFlags,
}

/// Parameter store
///
/// Stores parameters as key-value pairs with metadata (flags). Registration
/// is idempotent so parameter groups can register their defaults in any
/// order without clobbering values set earlier.
pub struct ParameterStore {
    parameters: FnvIndexMap<String<PARAM_NAME_LEN>, ParamValue, MAX_PARAMS>,
    metadata: FnvIndexMap<String<PARAM_NAME_LEN>, ParamMetadata, MAX_PARAMS>,
    dirty: bool,
}

fn key(name: &str) -> Result<String<PARAM_NAME_LEN>, ParameterError> {
    let mut key = String::<PARAM_NAME_LEN>::new();
    key.push_str(name)
        .map_err(|_| ParameterError::InvalidName)?;
    Ok(key)
}

impl ParameterStore {
    /// Create a new empty parameter store
    pub fn new() -> Self {
        Self {
            parameters: FnvIndexMap::new(),
            metadata: FnvIndexMap::new(),
            dirty: false,
        }
    }

    /// Get parameter value
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let key = key(name).ok()?;
        self.parameters.get(&key)
    }

    /// Set parameter value
    ///
    /// The new value must have the registered type. Marks the store dirty.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<(), ParameterError> {
        let key = key(name)?;

        let current = self
            .parameters
            .get(&key)
            .ok_or(ParameterError::UnknownParameter)?;
        if !current.same_type(&value) {
            return Err(ParameterError::TypeMismatch);
        }

        if let Some(meta) = self.metadata.get(&key) {
            if meta.flags.contains(ParamFlags::READ_ONLY) {
                return Err(ParameterError::ReadOnly);
            }
        }

        self.parameters
            .insert(key, value)
            .map_err(|_| ParameterError::StoreFull)?;
        self.dirty = true;
        Ok(())
    }

    /// Register a new parameter with default value and flags
    ///
    /// If the parameter already exists, this is a no-op.
    pub fn register(
        &mut self,
        name: &str,
        default_value: ParamValue,
        flags: ParamFlags,
    ) -> Result<(), ParameterError> {
        let key = key(name)?;

        if self.parameters.contains_key(&key) {
            return Ok(());
        }

        self.parameters
            .insert(key.clone(), default_value)
            .map_err(|_| ParameterError::StoreFull)?;
        self.metadata
            .insert(key, ParamMetadata { flags })
            .map_err(|_| ParameterError::StoreFull)?;
        self.dirty = true;
        Ok(())
    }

    /// Check if parameter is hidden
    pub fn is_hidden(&self, name: &str) -> bool {
        match key(name) {
            Ok(key) => self
                .metadata
                .get(&key)
                .map(|meta| meta.flags.contains(ParamFlags::HIDDEN))
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    /// Get all parameter names (excluding hidden parameters)
    pub fn iter_names(&self) -> impl Iterator<Item = &String<PARAM_NAME_LEN>> {
        self.parameters
            .keys()
            .filter(|name| !self.is_hidden(name.as_str()))
    }

    /// Get parameter count (excluding hidden parameters)
    pub fn count(&self) -> usize {
        self.iter_names().count()
    }

    /// Check if store has changes since the last `clear_dirty`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear dirty flag (after the new values have been applied)
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Get total parameter count (including hidden parameters)
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a numeric parameter, falling back to `default` and clamping to range
pub(crate) fn load_float(store: &ParameterStore, name: &str, default: f32, min: f32, max: f32) -> f32 {
    match store.get(name) {
        Some(ParamValue::Float(v)) if !v.is_nan() => v.clamp(min, max),
        Some(ParamValue::Int(v)) => (*v as f32).clamp(min, max),
        _ => default,
    }
}

/// Read an integer parameter, falling back to `default` and clamping to range
pub(crate) fn load_int(store: &ParameterStore, name: &str, default: i32, min: i32, max: i32) -> i32 {
    match store.get(name) {
        Some(ParamValue::Int(v)) => (*v).clamp(min, max),
        Some(ParamValue::Float(v)) if !v.is_nan() => (*v as i32).clamp(min, max),
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_store_new() {
        let store = ParameterStore::new();
        assert_eq!(store.count(), 0);
        assert!(store.is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_register_and_get() {
        let mut store = ParameterStore::new();
        store
            .register("WP_RADIUS", ParamValue::Float(50.0), ParamFlags::empty())
            .unwrap();
        assert_eq!(store.get("WP_RADIUS"), Some(&ParamValue::Float(50.0)));
        assert!(store.is_dirty());
    }

    #[test]
    fn test_set_known_parameter() {
        let mut store = ParameterStore::new();
        store
            .register("NAV_TICK_MS", ParamValue::Int(10), ParamFlags::empty())
            .unwrap();
        store.clear_dirty();
        store.set("NAV_TICK_MS", ParamValue::Int(20)).unwrap();
        assert_eq!(store.get("NAV_TICK_MS"), Some(&ParamValue::Int(20)));
        assert!(store.is_dirty());
    }

    #[test]
    fn test_set_unknown() {
        let mut store = ParameterStore::new();
        assert_eq!(
            store.set("UNKNOWN", ParamValue::Int(1)),
            Err(ParameterError::UnknownParameter)
        );
    }

    #[test]
    fn test_set_type_mismatch() {
        let mut store = ParameterStore::new();
        store
            .register("NAV_POS_P", ParamValue::Float(0.8), ParamFlags::empty())
            .unwrap();
        assert_eq!(
            store.set("NAV_POS_P", ParamValue::Bool(true)),
            Err(ParameterError::TypeMismatch)
        );
    }

    #[test]
    fn test_name_too_long() {
        let mut store = ParameterStore::new();
        assert_eq!(
            store.register(
                "THIS_NAME_IS_FAR_TOO_LONG",
                ParamValue::Int(1),
                ParamFlags::empty()
            ),
            Err(ParameterError::InvalidName)
        );
    }

    #[test]
    fn test_register_idempotent() {
        let mut store = ParameterStore::new();
        store
            .register("TEST", ParamValue::Int(42), ParamFlags::empty())
            .unwrap();
        store.set("TEST", ParamValue::Int(100)).unwrap();
        store
            .register("TEST", ParamValue::Int(42), ParamFlags::empty())
            .unwrap();
        assert_eq!(store.get("TEST"), Some(&ParamValue::Int(100)));
    }

    #[test]
    fn test_hidden_not_counted() {
        let mut store = ParameterStore::new();
        store
            .register("A", ParamValue::Int(1), ParamFlags::empty())
            .unwrap();
        store
            .register("B", ParamValue::Bool(true), ParamFlags::HIDDEN)
            .unwrap();
        assert!(store.is_hidden("B"));
        assert_eq!(store.count(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_read_only() {
        let mut store = ParameterStore::new();
        store
            .register("READONLY", ParamValue::Int(42), ParamFlags::READ_ONLY)
            .unwrap();
        assert_eq!(
            store.set("READONLY", ParamValue::Int(100)),
            Err(ParameterError::ReadOnly)
        );
    }

    #[test]
    fn test_load_helpers_clamp_and_default() {
        let mut store = ParameterStore::new();
        store
            .register("F", ParamValue::Float(500.0), ParamFlags::empty())
            .unwrap();
        store
            .register("I", ParamValue::Int(-3), ParamFlags::empty())
            .unwrap();

        assert_eq!(load_float(&store, "F", 1.0, 0.0, 100.0), 100.0);
        assert_eq!(load_float(&store, "MISSING", 1.0, 0.0, 100.0), 1.0);
        assert_eq!(load_int(&store, "I", 5, 0, 10), 0);
        assert_eq!(load_int(&store, "MISSING", 5, 0, 10), 5);
    }

    #[test]
    fn test_param_value_as_f32() {
        assert_eq!(ParamValue::Bool(true).as_f32(), 1.0);
        assert_eq!(ParamValue::Int(-4).as_f32(), -4.0);
        assert_eq!(ParamValue::Float(0.25).as_f32(), 0.25);
    }
}
