use async_trait::async_trait;
use std::time::Duration;

use crate::models::{Drink, DrinksResponse};

pub const COCKTAILDB_API_BASE: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// Upstream cocktail lookup. `Ok(None)` means the service answered `drinks: null`.
#[async_trait]
pub trait CocktailLookup: Send + Sync {
    async fn search_by_name(&self, name: &str) -> Result<Option<Vec<Drink>>, String>;

    async fn random(&self) -> Result<Option<Vec<Drink>>, String>;
}

/// TheCocktailDB client
pub struct CocktailDbClient {
    client: reqwest::Client,
    base_url: String,
}

impl CocktailDbClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, String> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn search_url(&self, name: &str) -> String {
        format!("{}/search.php?s={}", self.base_url, urlencoding::encode(name))
    }

    pub fn random_url(&self) -> String {
        format!("{}/random.php", self.base_url)
    }

    async fn fetch_drinks(&self, url: &str) -> Result<Option<Vec<Drink>>, String> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("Request failed with status code {}", response.status().as_u16()));
        }

        let body: DrinksResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse CocktailDB response: {}", e))?;

        Ok(body.drinks)
    }
}

#[async_trait]
impl CocktailLookup for CocktailDbClient {
    async fn search_by_name(&self, name: &str) -> Result<Option<Vec<Drink>>, String> {
        log::info!("🍸 Fetching CocktailDB search: {}", name);
        let drinks = self.fetch_drinks(&self.search_url(name)).await?;
        log::info!("✅ CocktailDB returned {} drinks for '{}'", drinks.as_ref().map_or(0, Vec::len), name);
        Ok(drinks)
    }

    async fn random(&self) -> Result<Option<Vec<Drink>>, String> {
        log::info!("🍸 Fetching CocktailDB random drink");
        self.fetch_drinks(&self.random_url()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, web, App, HttpResponse, HttpServer};

    /// Local HTTP server answering every request with `status` and `body`
    fn local_upstream(status: u16, body: &'static str) -> String {
        let server = HttpServer::new(move || {
            App::new().default_service(web::to(move || async move {
                HttpResponse::build(StatusCode::from_u16(status).unwrap())
                    .content_type("application/json")
                    .body(body)
            }))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}", addr)
    }

    fn client(base: &str) -> CocktailDbClient {
        CocktailDbClient::new(base, None).unwrap()
    }

    #[test]
    fn test_search_url_is_encoded() {
        let c = client(COCKTAILDB_API_BASE);
        assert_eq!(
            c.search_url("piña colada"),
            "https://www.thecocktaildb.com/api/json/v1/1/search.php?s=pi%C3%B1a%20colada"
        );
        assert_eq!(
            c.search_url("a&b=c"),
            "https://www.thecocktaildb.com/api/json/v1/1/search.php?s=a%26b%3Dc"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let c = client("http://localhost:9999/api/");
        assert_eq!(c.random_url(), "http://localhost:9999/api/random.php");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_error() {
        // nothing listens on port 9 locally
        let c = CocktailDbClient::new("http://127.0.0.1:9", Some(Duration::from_secs(2))).unwrap();
        assert!(c.random().await.is_err());
    }

    #[actix_web::test]
    async fn test_non_success_status_is_error() {
        let c = client(&local_upstream(503, "{}"));
        assert_eq!(c.random().await, Err("Request failed with status code 503".to_string()));
    }

    #[actix_web::test]
    async fn test_invalid_json_is_error() {
        let c = client(&local_upstream(200, "<html>not json</html>"));
        let err = c.search_by_name("margarita").await.unwrap_err();
        assert!(err.starts_with("Failed to parse CocktailDB response"), "{}", err);
    }

    #[actix_web::test]
    async fn test_null_drinks_is_none() {
        let c = client(&local_upstream(200, r#"{"drinks": null}"#));
        assert_eq!(c.search_by_name("zzzz").await, Ok(None));
    }

    #[actix_web::test]
    async fn test_drinks_passed_through() {
        let c = client(&local_upstream(200, r#"{"drinks": [{"idDrink": "11007", "strDrink": "Margarita"}]}"#));
        let drinks = c.random().await.unwrap().unwrap();
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0]["strDrink"], "Margarita");
    }

    #[tokio::test]
    #[ignore] // Requires network access to TheCocktailDB
    async fn test_live_search_margarita() {
        let c = client(COCKTAILDB_API_BASE);
        let drinks = c.search_by_name("margarita").await.unwrap();
        assert!(drinks.map_or(false, |d| !d.is_empty()));
    }
}
