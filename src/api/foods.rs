//! Food Endpoints
//!
//! `/foods` collection: list, create, update, delete.

use async_trait::async_trait;
use gloo_net::http::Request;

use food_dashboard_core::{ApiError, ApiResult, Food, FoodApi, FoodId, NewFood};

use super::{decode, ensure_ok, network_error, HttpFoodApi};

#[async_trait(?Send)]
impl FoodApi for HttpFoodApi {
    async fn list_foods(&self) -> ApiResult<Vec<Food>> {
        let url = self.url("foods");
        log::debug!("[API] GET {}", url);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        decode(ensure_ok(response)?).await
    }

    async fn create_food(&self, food: &NewFood) -> ApiResult<Food> {
        let url = self.url("foods");
        log::debug!("[API] POST {}", url);
        let response = Request::post(&url)
            .json(food)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        decode(ensure_ok(response)?).await
    }

    async fn update_food(&self, id: FoodId, food: &Food) -> ApiResult<Food> {
        let url = self.url(&format!("foods/{}", id));
        log::debug!("[API] PUT {}", url);
        let response = Request::put(&url)
            .json(food)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        decode(ensure_ok(response)?).await
    }

    async fn delete_food(&self, id: FoodId) -> ApiResult<()> {
        let url = self.url(&format!("foods/{}", id));
        log::debug!("[API] DELETE {}", url);
        let response = Request::delete(&url).send().await.map_err(network_error)?;
        ensure_ok(response)?;
        Ok(())
    }
}
