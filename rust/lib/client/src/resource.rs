//! Standard actions shared by every resource.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::envelope::{AutocompleteItem, ListParams, PaginatedResponse, Response};
use crate::error::ApiError;
use crate::transport::{ApiClient, RequestOptions};

/// Client for one resource. Records travel as `serde_json::Value` unless
/// the caller asks for a concrete type through the `*_as` methods.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    api: ApiClient,
    resource: &'static str,
}

impl ResourceClient {
    pub fn new(api: ApiClient, resource: &'static str) -> Self {
        Self { api, resource }
    }

    /// Resource name as used in paths (before kebab-casing).
    pub fn resource(&self) -> &'static str {
        self.resource
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Call any action on this resource.
    pub async fn call<P, R>(&self, action: &str, params: &P, options: &RequestOptions) -> Result<R, ApiError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.api.call(self.resource, action, params, options).await
    }

    /// Custom action returning a single-record envelope.
    pub async fn action<P: Serialize + ?Sized>(&self, action: &str, params: &P) -> Result<Response<Value>, ApiError> {
        self.call(action, params, &RequestOptions::default()).await
    }

    /// Custom action that carries file payloads (`options.fileUpload`).
    pub async fn upload<P: Serialize + ?Sized>(&self, action: &str, params: &P) -> Result<Response<Value>, ApiError> {
        self.call(action, params, &RequestOptions::file_upload()).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<PaginatedResponse<Value>, ApiError> {
        self.list_as(params).await
    }

    pub async fn list_as<T: DeserializeOwned>(&self, params: &ListParams) -> Result<PaginatedResponse<T>, ApiError> {
        self.call("list", params, &RequestOptions::default()).await
    }

    pub async fn get(&self, id: &str) -> Result<Response<Value>, ApiError> {
        self.get_as(id).await
    }

    pub async fn get_as<T: DeserializeOwned>(&self, id: &str) -> Result<Response<T>, ApiError> {
        self.call("get", &json!({ "id": id }), &RequestOptions::default()).await
    }

    /// Create a record. `attributes` must serialize to a JSON object.
    pub async fn create<A: Serialize + ?Sized>(&self, attributes: &A) -> Result<Response<Value>, ApiError> {
        let params = object_params(attributes)?;
        self.call("create", &params, &RequestOptions::default()).await
    }

    /// Update a record. Params are the attributes plus `id`.
    pub async fn update<A: Serialize + ?Sized>(&self, id: &str, attributes: &A) -> Result<Response<Value>, ApiError> {
        let mut params = object_params(attributes)?;
        params.insert("id".to_string(), Value::String(id.to_string()));
        self.call("update", &params, &RequestOptions::default()).await
    }

    pub async fn delete(&self, id: &str) -> Result<Response<Value>, ApiError> {
        self.call("delete", &json!({ "id": id }), &RequestOptions::default()).await
    }

    /// Search suggestions for relation pickers.
    pub async fn autocomplete(
        &self,
        query: &str,
        filters: &Map<String, Value>,
    ) -> Result<Response<Vec<AutocompleteItem>>, ApiError> {
        let mut params = filters.clone();
        params.insert("query".to_string(), Value::String(query.to_string()));
        self.call("autocomplete", &params, &RequestOptions::default()).await
    }
}

fn object_params<A: Serialize + ?Sized>(attributes: &A) -> Result<Map<String, Value>, ApiError> {
    match serde_json::to_value(attributes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ApiError::InvalidParams(format!("expected an object, got {}", other))),
        Err(e) => Err(ApiError::InvalidParams(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_params_rejects_scalars() {
        assert!(object_params(&json!({"name": "Villa"})).is_ok());
        assert!(matches!(object_params(&json!(42)), Err(ApiError::InvalidParams(_))));
    }
}
