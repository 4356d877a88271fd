use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PLACEHOLDER_THUMB: &str = "https://via.placeholder.com/150";

/// Drink as returned by TheCocktailDB, passed through untouched
pub type Drink = serde_json::Map<String, Value>;

/// Upstream body: `{"drinks": [...] | null}`
#[derive(Debug, Default, Deserialize)]
pub struct DrinksResponse {
    #[serde(default)]
    pub drinks: Option<Vec<Drink>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedCocktail {
    pub id: i64,
    #[schema(value_type = Object)]
    pub cocktail_id: Value,
    pub str_drink: String,
    pub str_drink_thumb: String,
    pub saved_at: String,
}

impl SavedCocktail {
    /// Builds the placeholder bookmark; no drink data is fetched
    pub fn placeholder(id: i64, cocktail_id: Value, saved_at: String) -> Self {
        let label = match &cocktail_id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        Self {
            id,
            cocktail_id,
            str_drink: format!("Cóctel {}", label),
            str_drink_thumb: PLACEHOLDER_THUMB.to_string(),
            saved_at,
        }
    }
}

#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct SaveCocktailRequest {
    #[serde(rename = "cocktailId")]
    #[schema(value_type = Object)]
    pub cocktail_id: Option<Value>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Nombre (o parte del nombre) del cóctel
    pub name: Option<String>,
}
