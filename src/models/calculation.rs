//! Calculation request and response models
//!
//! The `POST /calculate` contract of the calculation service, and the form
//! state that assembles a request from the user's selections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::cocktail::{
    default_variation, preselect_spirits, Cocktail, CocktailDetail, SpiritCatalog,
    DEFAULT_TARGET_ABV,
};
use crate::error::{FreezerError, FreezerResult};
use crate::measure::{BatchSize, Quantity, Unit};

/// Body of `POST /calculate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub cocktail: String,
    pub variation: String,
    /// Spirit type -> chosen brand
    pub spirits: BTreeMap<String, String>,
    pub target_volume_ml: f64,
    pub target_abv: f64,
}

/// Successful `POST /calculate` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponse {
    /// Spirit type -> ml
    pub ingredients: BTreeMap<String, f64>,
    /// Spirit type -> oz
    #[serde(default)]
    pub ingredients_oz: BTreeMap<String, f64>,
    pub water_ml: f64,
    pub water_oz: f64,
    pub initial_abv: f64,
    pub final_abv: f64,
    pub total_volume_ml: f64,
    pub total_volume_oz: f64,
    #[serde(default)]
    pub spirit_brands: BTreeMap<String, String>,
    pub cocktail_name: String,
    pub variation_name: String,
    #[serde(default)]
    pub garnish: String,
}

/// Error body returned with a non-2xx status
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceErrorBody {
    pub error: String,
}

impl CalculateResponse {
    /// Decode a response body given its HTTP status
    ///
    /// Non-2xx statuses become `FreezerError::Service` carrying the service's
    /// message, or a generic one when the body is not the usual error shape.
    pub fn from_http(status: u16, body: &str) -> FreezerResult<Self> {
        if (200..300).contains(&status) {
            return Ok(serde_json::from_str(body)?);
        }

        let message = serde_json::from_str::<ServiceErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| "Calculation failed".to_string());
        tracing::warn!("Calculation service returned {}: {}", status, message);
        Err(FreezerError::Service(message))
    }

    /// Amount of one ingredient in both units
    ///
    /// When the service omitted the ounce figure it is derived from ml.
    pub fn ingredient(&self, spirit_type: &str) -> Option<Quantity> {
        let ml = *self.ingredients.get(spirit_type)?;
        Some(match self.ingredients_oz.get(spirit_type) {
            Some(oz) => Quantity::new(ml, *oz),
            None => Quantity::from_ml(ml),
        })
    }

    /// Ingredients in response order with their amounts
    pub fn ingredient_quantities(&self) -> Vec<(&str, Quantity)> {
        self.ingredients
            .keys()
            .filter_map(|name| self.ingredient(name).map(|q| (name.as_str(), q)))
            .collect()
    }

    pub fn water(&self) -> Quantity {
        Quantity::new(self.water_ml, self.water_oz)
    }

    pub fn total_volume(&self) -> Quantity {
        Quantity::new(self.total_volume_ml, self.total_volume_oz)
    }
}

// ============================================================================
// Calculation Form
// ============================================================================

/// Selections collected before a calculation is requested
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationForm {
    pub cocktail: Option<String>,
    pub variation: Option<String>,
    /// Spirit types the chosen variation needs, once its detail is loaded
    pub required_spirits: Option<Vec<String>>,
    pub spirits: BTreeMap<String, String>,
    pub batch: BatchSize,
    pub target_abv: f64,
}

impl Default for CalculationForm {
    fn default() -> Self {
        Self {
            cocktail: None,
            variation: None,
            required_spirits: None,
            spirits: BTreeMap::new(),
            batch: BatchSize::default(),
            target_abv: DEFAULT_TARGET_ABV,
        }
    }
}

impl CalculationForm {
    pub fn new(unit: Unit) -> Self {
        Self {
            batch: BatchSize::new(unit),
            ..Self::default()
        }
    }

    /// Pick a cocktail, applying its classic strength, default batch size, and
    /// default variation
    pub fn select_cocktail(&mut self, cocktail: &Cocktail) {
        self.cocktail = Some(cocktail.id.clone());
        if let Some(abv) = cocktail.initial_target_abv() {
            self.target_abv = abv;
        }
        self.batch.select_cocktail(cocktail.serving_size_ml);
        self.variation = default_variation(&cocktail.id).map(str::to_string);
        self.required_spirits = None;
        self.spirits.clear();
    }

    /// Pick a variation and pre-select the first brand of each spirit it needs
    ///
    /// Returns false when the detail does not list the variation.
    pub fn select_variation(
        &mut self,
        variation_id: &str,
        detail: &CocktailDetail,
        catalog: &SpiritCatalog,
    ) -> bool {
        self.variation = Some(variation_id.to_string());
        match detail.variations.get(variation_id) {
            Some(variation) => {
                self.spirits = preselect_spirits(&variation.ingredients, catalog);
                self.required_spirits = Some(variation.ingredients.clone());
                true
            }
            None => {
                self.required_spirits = None;
                self.spirits.clear();
                false
            }
        }
    }

    /// Choose a brand for one spirit type
    pub fn choose_spirit(&mut self, spirit_type: &str, brand: &str) {
        self.spirits.insert(spirit_type.to_string(), brand.to_string());
    }

    /// Spirit types still missing a brand
    fn missing_spirits<'a>(&self, required: &'a [String]) -> Vec<&'a str> {
        required
            .iter()
            .filter(|s| !self.spirits.contains_key(*s))
            .map(String::as_str)
            .collect()
    }

    pub fn can_calculate(&self) -> bool {
        self.build_request().is_ok()
    }

    /// Assemble the calculate request, or report what is missing
    pub fn build_request(&self) -> FreezerResult<CalculateRequest> {
        let cocktail = self
            .cocktail
            .clone()
            .ok_or_else(|| FreezerError::Incomplete("no cocktail selected".to_string()))?;
        let variation = self
            .variation
            .clone()
            .ok_or_else(|| FreezerError::Incomplete("no variation selected".to_string()))?;

        let required = self.required_spirits.as_deref().ok_or_else(|| {
            FreezerError::Incomplete("variation details not loaded".to_string())
        })?;
        let missing = self.missing_spirits(required);
        if !missing.is_empty() {
            return Err(FreezerError::Incomplete(format!(
                "no brand chosen for {}",
                missing.join(", ")
            )));
        }

        if self.batch.volume.is_nan() || self.batch.volume <= 0.0 {
            return Err(FreezerError::Incomplete(
                "batch volume must be positive".to_string(),
            ));
        }

        Ok(CalculateRequest {
            cocktail,
            variation,
            spirits: self.spirits.clone(),
            target_volume_ml: self.batch.volume_ml(),
            target_abv: self.target_abv,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cocktail::{SpiritOption, VariationDetail};

    fn response_json() -> &'static str {
        r#"{
            "ingredients": {"gin": 400.5, "vermouth_dry": 80.1},
            "ingredients_oz": {"gin": 13.54, "vermouth_dry": 2.71},
            "water_ml": 140.4,
            "water_oz": 4.75,
            "initial_abv": 41.9,
            "final_abv": 24.0,
            "total_volume_ml": 621.0,
            "total_volume_oz": 21.0,
            "spirit_brands": {"gin": "Tanqueray", "vermouth_dry": "Dolin Dry"},
            "cocktail_name": "Martini",
            "variation_name": "Classic 5:1",
            "garnish": "Lemon twist"
        }"#
    }

    fn martini() -> Cocktail {
        serde_json::from_str(
            r#"{"id": "martini", "name": "Martini",
                "variations": [{"id": "classic", "name": "Classic 5:1"}],
                "presets": {"classic": {"name": "Classic", "abv": 26}},
                "serving_size_ml": 90}"#,
        )
        .unwrap()
    }

    fn martini_detail() -> CocktailDetail {
        let mut variations = BTreeMap::new();
        variations.insert(
            "classic".to_string(),
            VariationDetail {
                name: "Classic 5:1".to_string(),
                ingredients: vec!["gin".to_string(), "vermouth_dry".to_string()],
            },
        );
        CocktailDetail {
            id: "martini".to_string(),
            name: "Martini".to_string(),
            variations,
            garnish: String::new(),
        }
    }

    fn catalog() -> SpiritCatalog {
        let mut catalog = SpiritCatalog::new();
        catalog.insert(
            "gin".to_string(),
            vec![SpiritOption { brand: "Tanqueray".to_string(), abv: 47.3 }],
        );
        catalog
    }

    #[test]
    fn test_from_http_success() {
        let response = CalculateResponse::from_http(200, response_json()).unwrap();
        assert_eq!(response.cocktail_name, "Martini");
        assert_eq!(response.ingredient("gin"), Some(Quantity::new(400.5, 13.54)));
        assert_eq!(response.water(), Quantity::new(140.4, 4.75));
        assert_eq!(response.total_volume().oz, 21.0);
    }

    #[test]
    fn test_from_http_error_body() {
        let err = CalculateResponse::from_http(404, r#"{"error": "Cocktail not found"}"#)
            .unwrap_err();
        assert!(matches!(err, FreezerError::Service(ref m) if m == "Cocktail not found"));

        let err = CalculateResponse::from_http(500, "<html>").unwrap_err();
        assert_eq!(err.to_string(), "Calculation service error: Calculation failed");
    }

    #[test]
    fn test_from_http_bad_json() {
        let err = CalculateResponse::from_http(200, "{}").unwrap_err();
        assert!(matches!(err, FreezerError::Json(_)));
    }

    #[test]
    fn test_ingredient_without_oz_is_derived() {
        let mut response = CalculateResponse::from_http(200, response_json()).unwrap();
        response.ingredients_oz.clear();
        assert_eq!(response.ingredient("gin"), Some(Quantity::new(400.5, 13.5)));
        assert_eq!(response.ingredient("campari"), None);
    }

    #[test]
    fn test_ingredient_quantities_order() {
        let response = CalculateResponse::from_http(200, response_json()).unwrap();
        let names: Vec<&str> = response
            .ingredient_quantities()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["gin", "vermouth_dry"]);
    }

    #[test]
    fn test_form_select_cocktail() {
        let mut form = CalculationForm::default();
        form.select_cocktail(&martini());
        assert_eq!(form.cocktail.as_deref(), Some("martini"));
        assert_eq!(form.variation.as_deref(), Some("classic"));
        assert_eq!(form.target_abv, 26.0);
        assert_eq!(form.batch.volume, 18.0);
    }

    #[test]
    fn test_form_build_request() {
        let mut form = CalculationForm::new(Unit::Ml);
        assert!(!form.can_calculate());

        form.select_cocktail(&martini());
        assert!(form.select_variation("classic", &martini_detail(), &catalog()));
        assert_eq!(form.spirits.get("gin").map(String::as_str), Some("Tanqueray"));

        let err = form.build_request().unwrap_err();
        assert_eq!(err.to_string(), "Recipe not ready: no brand chosen for vermouth_dry");

        form.choose_spirit("vermouth_dry", "Dolin Dry");
        let request = form.build_request().unwrap();
        assert_eq!(request.target_volume_ml, 540.0);
        assert_eq!(request.target_abv, 26.0);
        assert_eq!(request.spirits.len(), 2);
    }

    #[test]
    fn test_form_request_volume_in_oz() {
        let mut form = CalculationForm::default();
        form.select_cocktail(&martini());
        form.select_variation("classic", &martini_detail(), &catalog());
        form.choose_spirit("vermouth_dry", "Dolin Dry");
        let request = form.build_request().unwrap();
        assert!((request.target_volume_ml - 18.0 * 29.5735).abs() < 1e-9);
    }

    #[test]
    fn test_form_rejects_zero_volume() {
        let mut form = CalculationForm::default();
        form.select_cocktail(&martini());
        form.select_variation("classic", &martini_detail(), &catalog());
        form.choose_spirit("vermouth_dry", "Dolin Dry");
        form.batch.set_volume(0.0);
        assert!(!form.can_calculate());
    }

    #[test]
    fn test_form_unknown_variation() {
        let mut form = CalculationForm::default();
        form.select_cocktail(&martini());
        assert!(!form.select_variation("dirty", &martini_detail(), &catalog()));
        assert_eq!(form.required_spirits, None);
        assert!(!form.can_calculate());
    }

    #[test]
    fn test_form_waits_for_variation_details() {
        let mut form = CalculationForm::default();
        form.select_cocktail(&martini());
        assert_eq!(form.variation.as_deref(), Some("classic"));
        assert_eq!(form.required_spirits, None);

        let err = form.build_request().unwrap_err();
        assert_eq!(err.to_string(), "Recipe not ready: variation details not loaded");
        assert!(!form.can_calculate());

        form.select_variation("classic", &martini_detail(), &catalog());
        form.choose_spirit("vermouth_dry", "Dolin Dry");
        assert!(form.can_calculate());

        form.select_cocktail(&martini());
        assert!(!form.can_calculate());
    }

    #[test]
    fn test_request_serializes_contract_fields() {
        let request = CalculateRequest {
            cocktail: "martini".to_string(),
            variation: "classic".to_string(),
            spirits: BTreeMap::new(),
            target_volume_ml: 750.0,
            target_abv: 24.0,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["target_volume_ml"], 750.0);
        assert_eq!(value["cocktail"], "martini");
    }
}
