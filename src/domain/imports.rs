use crate::utils::error::{Result, SettingsError};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Callable registered under an import path, invoked by the bootstrap
/// process when it wires up the server.
pub type Hook = Arc<dyn Fn() -> Result<()> + Send + Sync>;

/// A named hook. The name is what settings documents refer to and what
/// diagnostic output shows; the callable itself has no data form.
#[derive(Clone)]
pub struct ImportFn {
    name: String,
    hook: Hook,
}

impl ImportFn {
    pub fn new(
        name: impl Into<String>,
        hook: impl Fn() -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            hook: Arc::new(hook),
        }
    }

    pub fn from_hook(name: impl Into<String>, hook: Hook) -> Self {
        Self {
            name: name.into(),
            hook,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the hook, attributing any failure to the hook's name.
    pub fn call(&self) -> Result<()> {
        (self.hook)().map_err(|e| SettingsError::HookError {
            name: self.name.clone(),
            message: e.to_string(),
        })
    }
}

impl fmt::Debug for ImportFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportFn").field("name", &self.name).finish()
    }
}

/// Mapping from a module path to the callables it exposes.
///
/// Keys are unique and unordered; the sequence under each key keeps
/// registration order. A path may be present with no callables at all.
#[derive(Debug, Clone, Default)]
pub struct ImportMap {
    entries: HashMap<String, Vec<ImportFn>>,
}

impl ImportMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a callable under `path`, creating the path on first use.
    pub fn register(&mut self, path: impl Into<String>, f: ImportFn) {
        self.entries.entry(path.into()).or_default().push(f);
    }

    /// Inserts a whole sequence for `path`, replacing any previous one.
    pub fn insert(&mut self, path: impl Into<String>, fns: Vec<ImportFn>) {
        self.entries.insert(path.into(), fns);
    }

    pub fn get(&self, path: &str) -> Option<&[ImportFn]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ImportFn])> {
        self.entries
            .iter()
            .map(|(path, fns)| (path.as_str(), fns.as_slice()))
    }

    /// Number of import paths, not symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn symbol_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Declarative view: path to symbol names, in registration order.
    pub fn manifest(&self) -> HashMap<String, Vec<String>> {
        self.entries
            .iter()
            .map(|(path, fns)| {
                let names = fns.iter().map(|f| f.name().to_string()).collect();
                (path.clone(), names)
            })
            .collect()
    }
}

impl Serialize for ImportMap {
    // Serialized as the manifest view; live callables cannot round-trip.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, fns) in &self.entries {
            let names: Vec<&str> = fns.iter().map(ImportFn::name).collect();
            map.serialize_entry(path, &names)?;
        }
        map.end()
    }
}

/// Name-to-hook table the embedding application fills before resolving a
/// settings document.
#[derive(Clone, Default)]
pub struct HookRegistry {
    hooks: HashMap<String, Hook>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn() -> Result<()> + Send + Sync + 'static,
    ) {
        self.hooks.insert(name.into(), Arc::new(hook));
    }

    pub fn get(&self, name: &str) -> Option<&Hook> {
        self.hooks.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("hooks", &self.hooks.keys().collect::<Vec<_>>())
            .finish()
    }
}
