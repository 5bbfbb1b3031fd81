use crate::domain::imports::ImportMap;
use crate::domain::model::Port;

/// Read-only view of a settings value, as consumed by the server bootstrap
/// process: the port decides the listening address, the imports decide the
/// path-to-callable registrations. Where a typed base settings shape exists
/// it composes here rather than being redefined.
pub trait SettingsProvider: Send + Sync {
    fn port(&self) -> Option<&Port>;
    fn imports(&self) -> &ImportMap;
    fn extra(&self, key: &str) -> Option<&serde_json::Value>;
}
