/// Entry of the remote catalog listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    pub name: String,
    pub url: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One page of the paginated catalog endpoint. Only `results` is consumed;
/// the paging links are kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogPage {
    #[cfg_attr(feature = "serde", serde(default))]
    pub count: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub next: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub previous: Option<String>,
    pub results: Vec<CatalogEntry>,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn decodes_results_and_ignores_unknown_fields() {
        let page: CatalogPage = serde_json::from_str(
            r#"{
                "count": 1302,
                "next": null,
                "previous": null,
                "extra": true,
                "results": [
                    {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(page.count, Some(1302));
        assert_eq!(
            page.results,
            vec![CatalogEntry::new(
                "bulbasaur",
                "https://pokeapi.co/api/v2/pokemon/1/"
            )]
        );
    }
}
