use actix_web::web;
use serde_json::Value;

use crate::database::Store;
use crate::models::{Drink, SavedCocktail};
use crate::services::CocktailLookup;
use crate::utils::{iso_now, AppError, IdGenerator};

pub const NAME_REQUIRED: &str = "El parámetro \"name\" es requerido";
pub const COCKTAIL_ID_REQUIRED: &str = "El cocktailId es requerido";

/// JSON truthiness: missing, null, false, 0 and "" count as absent
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// `name` from the raw query string; repeated values are joined with commas
pub fn name_from_query(query_string: &str) -> Option<String> {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(query_string).ok()?;
    let names: Vec<String> = pairs
        .into_inner()
        .into_iter()
        .filter(|(key, _)| key == "name")
        .map(|(_, value)| value)
        .collect();

    if names.is_empty() {
        None
    } else {
        Some(names.join(","))
    }
}

/// JSON scalar as text: strings verbatim, anything else in JSON form
pub fn present_text(value: Option<Value>) -> Option<String> {
    if !is_present(value.as_ref()) {
        return None;
    }
    match value {
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
        None => None,
    }
}

/// Busca cócteles por nombre; `drinks: null` se convierte en lista vacía
pub async fn search(lookup: &dyn CocktailLookup, name: Option<&str>) -> Result<Vec<Drink>, AppError> {
    let name = match name {
        Some(n) if !n.is_empty() => n,
        _ => return Err(AppError::Validation(NAME_REQUIRED.to_string())),
    };

    let drinks = lookup
        .search_by_name(name)
        .await
        .map_err(|e| AppError::Upstream(format!("Error al buscar cócteles: {}", e)))?;

    Ok(drinks.unwrap_or_default())
}

/// Obtiene un cóctel aleatorio (primer elemento de `drinks`)
pub async fn random(lookup: &dyn CocktailLookup) -> Result<Option<Drink>, AppError> {
    let drinks = lookup
        .random()
        .await
        .map_err(|e| AppError::Upstream(format!("Error al obtener cóctel aleatorio: {}", e)))?;

    Ok(drinks.and_then(|d| d.into_iter().next()))
}

/// Guarda un marcador con nombre e imagen de relleno
pub async fn save(store: &dyn Store, ids: &IdGenerator, cocktail_id: Option<Value>) -> Result<SavedCocktail, AppError> {
    if !is_present(cocktail_id.as_ref()) {
        return Err(AppError::Validation(COCKTAIL_ID_REQUIRED.to_string()));
    }
    let cocktail_id = cocktail_id.unwrap_or(Value::Null);

    let cocktail = SavedCocktail::placeholder(ids.next_id(), cocktail_id, iso_now());
    store.insert_saved(cocktail.clone()).await?;

    Ok(cocktail)
}
