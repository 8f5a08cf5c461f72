use crate::{
    catalog::CatalogEntry, color::ItemStyle, error::Result, ids::ItemId,
    urls::ImageUrlTemplate,
};

/// Catalog entry prepared for display. Created once from a [`CatalogEntry`]
/// and never edited afterwards; [`DisplayItem::with_style`] produces a new
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayItem {
    id: ItemId,
    name: String,
    url: String,
    image_url: String,
    style: Option<ItemStyle>,
}

impl DisplayItem {
    pub fn from_entry(
        entry: &CatalogEntry,
        template: &ImageUrlTemplate,
    ) -> Result<Self> {
        let id = ItemId::from_resource_url(&entry.url)?;
        Ok(Self {
            image_url: template.render(&id),
            id,
            name: entry.name.clone(),
            url: entry.url.clone(),
            style: None,
        })
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resource URL the id was derived from.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn style(&self) -> Option<&ItemStyle> {
        self.style.as_ref()
    }

    /// Style to paint with: the extracted one, or the fallback pair.
    pub fn style_or_fallback(&self) -> ItemStyle {
        self.style.unwrap_or_else(ItemStyle::fallback)
    }

    pub fn with_style(&self, style: ItemStyle) -> Self {
        Self {
            style: Some(style),
            ..self.clone()
        }
    }
}
