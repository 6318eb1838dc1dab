use serde::Deserialize;

/// The `name` field every registry entry carries; other fields are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct NamedJsonObject {
    name: String
}


impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}
