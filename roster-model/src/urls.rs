use crate::ids::ItemId;

/// Artwork location convention keyed on the item id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlTemplate(String);

impl ImageUrlTemplate {
    pub const PLACEHOLDER: &'static str = "{id}";
    pub const DEFAULT: &'static str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/home/{id}.png";

    /// Templates without a `{id}` placeholder get the id appended as a
    /// `{id}.png` path segment.
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        if template.contains(Self::PLACEHOLDER) {
            Self(template)
        } else {
            Self(format!(
                "{}/{}.png",
                template.trim_end_matches('/'),
                Self::PLACEHOLDER
            ))
        }
    }

    pub fn render(&self, id: &ItemId) -> String {
        self.0.replace(Self::PLACEHOLDER, id.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ImageUrlTemplate {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}
