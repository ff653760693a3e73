use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use liftdesk_auth::{AdminUser, AuthUser};
use liftdesk_domain::gallery::{ImageCategory, ImageVisibility};

use crate::domain::repository::GymImageChanges;
use crate::error::ApiError;
use crate::handlers::common::GymImageDto;
use crate::response::Envelope;
use crate::state::AppState;
use crate::usecase::gallery::{
    DeleteImageUseCase, ListGalleryUseCase, UpdateImageUseCase, UploadImageInput,
    UploadImageUseCase,
};

// ── GET /api/images ──────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct GalleryListQuery {
    pub category: Option<String>,
}

pub async fn list_images(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Query(query): Query<GalleryListQuery>,
) -> Result<Json<Envelope<Vec<GymImageDto>>>, ApiError> {
    // Anonymous visitors and members only see PUBLIC images.
    let include_admin_only = auth.map(|a| a.role.is_admin()).unwrap_or(false);
    let category = query.category.as_deref().and_then(ImageCategory::parse);
    let usecase = ListGalleryUseCase {
        gallery: state.gallery_repo(),
    };
    let images = usecase.execute(category, include_admin_only).await?;
    Ok(Envelope::data(
        images.into_iter().map(GymImageDto::new).collect(),
    ))
}

// ── POST /api/images ─────────────────────────────────────────────────────────

pub async fn upload_image(
    _admin: AdminUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Envelope<GymImageDto>>), ApiError> {
    let mut file_name = None;
    let mut bytes = Vec::new();
    let mut title = None;
    let mut category = None;
    let mut visibility = ImageVisibility::Public;
    let mut sort_order = 0;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(e.to_string()))?
    {
        match field.name() {
            Some("file") | Some("image") => {
                file_name = field.file_name().map(str::to_owned);
                bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Validation(e.to_string()))?
                    .to_vec();
            }
            Some("title") => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::Validation(e.to_string()))?,
                );
            }
            Some("category") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::Validation(e.to_string()))?;
                category = ImageCategory::parse(&text);
            }
            Some("visibility") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::Validation(e.to_string()))?;
                if let Some(parsed) = ImageVisibility::parse(&text) {
                    visibility = parsed;
                }
            }
            Some("sortOrder") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::Validation(e.to_string()))?;
                sort_order = text.parse().unwrap_or(0);
            }
            _ => {}
        }
    }

    let file_name =
        file_name.ok_or_else(|| ApiError::Validation("Image file is required".to_owned()))?;
    let category = category
        .ok_or_else(|| ApiError::Validation("A valid image category is required".to_owned()))?;

    let usecase = UploadImageUseCase {
        gallery: state.gallery_repo(),
        store: state.images.clone(),
        max_bytes: state.config.max_upload_bytes,
    };
    let image = usecase
        .execute(UploadImageInput {
            file_name,
            bytes,
            title: title.filter(|t| !t.trim().is_empty()),
            category,
            visibility,
            sort_order,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Envelope::with_message("Image uploaded successfully", GymImageDto::new(image)),
    ))
}

// ── PUT /api/images/{id} ─────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateImageRequest {
    pub title: Option<String>,
    pub category: Option<ImageCategory>,
    pub visibility: Option<ImageVisibility>,
    pub sort_order: Option<i32>,
}

pub async fn update_image(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateImageRequest>,
) -> Result<Json<Envelope<GymImageDto>>, ApiError> {
    let usecase = UpdateImageUseCase {
        gallery: state.gallery_repo(),
    };
    let image = usecase
        .execute(
            id,
            GymImageChanges {
                title: body.title,
                category: body.category,
                visibility: body.visibility,
                sort_order: body.sort_order,
            },
        )
        .await?;
    Ok(Envelope::with_message(
        "Image updated successfully",
        GymImageDto::new(image),
    ))
}

// ── DELETE /api/images/{id} ──────────────────────────────────────────────────

pub async fn delete_image(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let usecase = DeleteImageUseCase {
        gallery: state.gallery_repo(),
        store: state.images.clone(),
    };
    usecase.execute(id).await?;
    Ok(Envelope::message("Image deleted successfully"))
}
