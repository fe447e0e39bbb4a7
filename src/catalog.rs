//! Static cocktail catalog: model types, fetch, and lookups
//!
//! The catalog is a read-only JSON document fetched once per page. A
//! cocktail's name is the sole join key between the catalog and the
//! `name` query parameter on the detail route.

use serde::{Deserialize, Serialize};

use crate::color::lighten;

/// Path of the static catalog document.
pub const CATALOG_URL: &str = "/data/cocktails.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cocktail {
    pub name: String,
    pub description: String,
    pub recipe: Recipe,
    pub color: String,
    pub recommended: bool,
    pub glass_path: String,
    // Optional presentation fields; absent entries fall back client-side.
    #[serde(rename = "textColor", default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(rename = "hoverColor", default, skip_serializing_if = "Option::is_none")]
    pub hover_color: Option<String>,
    #[serde(rename = "backColor", default, skip_serializing_if = "Option::is_none")]
    pub back_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "category")]
    pub name: String,
    pub cocktails: Vec<Cocktail>,
}

impl Cocktail {
    /// Product image path: explicit catalog field, or the `/images/<name>.png`
    /// naming convention.
    pub fn image_path(&self) -> String {
        self.image
            .clone()
            .unwrap_or_else(|| format!("/images/{}.png", self.name))
    }

    pub fn text_color(&self) -> String {
        self.text_color.clone().unwrap_or_else(|| "#212529".to_string())
    }

    pub fn hover_color(&self) -> String {
        self.hover_color.clone().unwrap_or_else(|| lighten(&self.color))
    }

    pub fn back_color(&self) -> String {
        self.back_color.clone().unwrap_or_else(|| "#ff0000".to_string())
    }
}

/// Fetch the catalog document. Each page fetches independently; there is no
/// shared cache across views.
pub async fn fetch_catalog() -> Result<Vec<Category>, String> {
    let response = gloo_net::http::Request::get(CATALOG_URL)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    response.json::<Vec<Category>>().await.map_err(|e| e.to_string())
}

/// Case-sensitive exact-name search across all categories, in catalog order.
pub fn find_cocktail<'a>(
    catalog: &'a [Category],
    name: &str,
) -> Option<(&'a Category, &'a Cocktail)> {
    catalog.iter().find_map(|category| {
        category
            .cocktails
            .iter()
            .find(|c| c.name == name)
            .map(|c| (category, c))
    })
}

/// Flatten to the recommended cocktails, preserving catalog order.
pub fn recommended(catalog: &[Category]) -> Vec<(String, Cocktail)> {
    catalog
        .iter()
        .flat_map(|category| {
            category
                .cocktails
                .iter()
                .filter(|c| c.recommended)
                .map(|c| (category.name.clone(), c.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Vec<Category> {
        serde_json::from_str(
            r##"[
              {
                "category": "Classic Cocktails",
                "cocktails": [
                  {
                    "name": "Mojito",
                    "description": "Mint, lime, and rum over crushed ice.",
                    "recipe": {
                      "ingredients": ["White rum", "Mint", "Lime", "Sugar", "Soda"],
                      "steps": ["Muddle mint and lime", "Add rum and ice", "Top with soda"]
                    },
                    "color": "#98FF98",
                    "recommended": true,
                    "glass_path": "/models/highball.glb"
                  },
                  {
                    "name": "Old Fashioned",
                    "description": "Bourbon, bitters, sugar.",
                    "recipe": {
                      "ingredients": ["Bourbon", "Angostura bitters", "Sugar cube"],
                      "steps": ["Muddle sugar with bitters", "Stir with ice"]
                    },
                    "color": "#B5651D",
                    "recommended": false,
                    "glass_path": "/models/rocks.glb",
                    "textColor": "#FFF8E7",
                    "image": "/images/old-fashioned-alt.png"
                  }
                ]
              },
              {
                "category": "Tropical Cocktails",
                "cocktails": [
                  {
                    "name": "Pina Colada",
                    "description": "Pineapple, coconut, rum.",
                    "recipe": {
                      "ingredients": ["Rum", "Pineapple juice", "Coconut cream"],
                      "steps": ["Blend with ice"]
                    },
                    "color": "#FFF5B7",
                    "recommended": true,
                    "glass_path": "/models/hurricane.glb"
                  }
                ]
              }
            ]"##,
        )
        .expect("sample catalog parses")
    }

    #[test]
    fn test_parse_optional_fields() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "Classic Cocktails");
        let mojito = &catalog[0].cocktails[0];
        assert!(mojito.text_color.is_none());
        assert!(mojito.image.is_none());
        let old_fashioned = &catalog[0].cocktails[1];
        assert_eq!(old_fashioned.text_color.as_deref(), Some("#FFF8E7"));
    }

    #[test]
    fn test_find_cocktail_exact_match() {
        let catalog = sample_catalog();
        let (category, cocktail) = find_cocktail(&catalog, "Mojito").unwrap();
        assert_eq!(category.name, "Classic Cocktails");
        assert_eq!(cocktail.recipe.ingredients.len(), 5);
        assert_eq!(cocktail.recipe.steps[0], "Muddle mint and lime");
    }

    #[test]
    fn test_find_cocktail_is_case_sensitive() {
        let catalog = sample_catalog();
        assert!(find_cocktail(&catalog, "mojito").is_none());
        assert!(find_cocktail(&catalog, "Negroni").is_none());
    }

    #[test]
    fn test_recommended_preserves_order() {
        let catalog = sample_catalog();
        let picks = recommended(&catalog);
        assert_eq!(picks.len(), 2);
        assert_eq!(picks[0].1.name, "Mojito");
        assert_eq!(picks[1].1.name, "Pina Colada");
        assert_eq!(picks[1].0, "Tropical Cocktails");
    }

    #[test]
    fn test_shipped_catalog_matches_model_and_url() {
        // The document served at CATALOG_URL ships from public/, whose
        // contents are copied to the site root at build time.
        let raw = include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/public/data/cocktails.json"
        ));
        let catalog: Vec<Category> = serde_json::from_str(raw).expect("shipped catalog parses");
        assert_eq!(CATALOG_URL, "/data/cocktails.json");
        assert!(!catalog.is_empty());
        assert!(catalog.iter().all(|c| !c.cocktails.is_empty()));
        assert!(!recommended(&catalog).is_empty());
    }

    #[test]
    fn test_presentation_defaults() {
        let catalog = sample_catalog();
        let mojito = &catalog[0].cocktails[0];
        assert_eq!(mojito.image_path(), "/images/Mojito.png");
        assert_eq!(mojito.text_color(), "#212529");
        // Hover color derives from the base color when unset.
        assert_eq!(mojito.hover_color(), lighten("#98FF98"));

        let old_fashioned = &catalog[0].cocktails[1];
        assert_eq!(old_fashioned.image_path(), "/images/old-fashioned-alt.png");
        assert_eq!(old_fashioned.text_color(), "#FFF8E7");
    }
}
