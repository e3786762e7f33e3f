/// Authenticated principal embedded in issued tokens.
///
/// Never carries credentials. Only `id` ends up in the authoritative `sub`
/// claim; the names are informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl Identity {
    pub fn new(id: i64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// "First Last", as carried in the access token `name` claim.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
