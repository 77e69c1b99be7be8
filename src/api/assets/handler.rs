use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::api::assets::store::Asset;
use crate::config::state::AppState;
use crate::exceptions::exception::{AppException, ValidationErrors};
use crate::utils::api_response::{format_standard_api_response, ApiResponse};

const MAX_NAME_LENGTH: usize = 255;

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct NewAssetRequest {
    pub name: Option<String>,
    pub asset_tag: Option<String>,
    pub serial: Option<String>,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// List every asset
pub async fn index(State(state): State<AppState>) -> Json<ApiResponse> {
    let assets: Vec<Asset> = state.assets.all().await;
    let total: usize = assets.len();

    Json(format_standard_api_response(
        "success",
        json!({ "total": total, "rows": assets }),
        None::<String>,
    ))
}

/// Fetch a single asset; unknown or malformed ids are a missing model
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse>, AppException> {
    let asset: Asset = match id.parse::<u64>() {
        Ok(numeric) => state.assets.find(numeric).await,
        Err(_) => None,
    }
    .ok_or_else(|| AppException::model_not_found::<Asset>([id.as_str()]))?;

    Ok(Json(format_standard_api_response(
        "success",
        json!(asset),
        None::<String>,
    )))
}

/// Create an asset after validating the payload
pub async fn store(
    State(state): State<AppState>,
    payload: Result<Json<NewAssetRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, AppException> {
    let Json(payload) = payload?;

    let mut errors: ValidationErrors = ValidationErrors::new();

    let name: String = payload.name.unwrap_or_default().trim().to_owned();
    if name.is_empty() {
        errors.add("name", "The name field is required.");
    } else if name.chars().count() > MAX_NAME_LENGTH {
        errors.add(
            "name",
            format!("The name may not be greater than {MAX_NAME_LENGTH} characters."),
        );
    }

    let asset_tag: String = payload.asset_tag.unwrap_or_default().trim().to_owned();
    if asset_tag.is_empty() {
        errors.add("asset_tag", "The asset tag field is required.");
    } else if state.assets.tag_taken(&asset_tag).await {
        errors.add("asset_tag", "The asset tag has already been taken.");
    }

    if !errors.is_empty() {
        return Err(AppException::validation(errors));
    }

    let serial: Option<String> = payload
        .serial
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty());
    // The tag may have been claimed since the check above
    let asset: Asset = state
        .assets
        .insert_unique(name, asset_tag, serial)
        .await
        .ok_or_else(|| {
            AppException::validation(
                ValidationErrors::new().with("asset_tag", "The asset tag has already been taken."),
            )
        })?;
    info!(asset_id = asset.id, "Asset created");

    Ok(Json(format_standard_api_response(
        "success",
        json!(asset),
        "Asset created successfully.",
    )))
}
