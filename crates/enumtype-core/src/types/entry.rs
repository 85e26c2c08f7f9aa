use serde::Serialize;

///
/// EnumEntry
/// One member of an allowed value set: the stored key and its display label.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct EnumEntry {
    pub key: &'static str,
    pub label: &'static str,
}

impl EnumEntry {
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}
