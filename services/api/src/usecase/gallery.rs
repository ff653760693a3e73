use chrono::Utc;
use uuid::Uuid;

use liftdesk_domain::gallery::{ImageCategory, ImageVisibility};

use crate::domain::repository::{GalleryRepository, GymImageChanges, ImageStore};
use crate::domain::types::GymImage;
use crate::error::ApiError;

const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Stored files are served under this route by the static file layer.
pub const UPLOADS_PREFIX: &str = "/uploads/";

// ── ListGallery ──────────────────────────────────────────────────────────────

pub struct ListGalleryUseCase<G: GalleryRepository> {
    pub gallery: G,
}

impl<G: GalleryRepository> ListGalleryUseCase<G> {
    pub async fn execute(
        &self,
        category: Option<ImageCategory>,
        include_admin_only: bool,
    ) -> Result<Vec<GymImage>, ApiError> {
        self.gallery.list(category, !include_admin_only).await
    }
}

// ── UploadImage ──────────────────────────────────────────────────────────────

pub struct UploadImageInput {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub title: Option<String>,
    pub category: ImageCategory,
    pub visibility: ImageVisibility,
    pub sort_order: i32,
}

pub struct UploadImageUseCase<G: GalleryRepository, S: ImageStore> {
    pub gallery: G,
    pub store: S,
    pub max_bytes: usize,
}

impl<G: GalleryRepository, S: ImageStore> UploadImageUseCase<G, S> {
    pub async fn execute(&self, input: UploadImageInput) -> Result<GymImage, ApiError> {
        if input.bytes.is_empty() {
            return Err(ApiError::Validation("Image file is required".to_owned()));
        }
        if input.bytes.len() > self.max_bytes {
            return Err(ApiError::Validation(format!(
                "Image must be smaller than {} MB",
                self.max_bytes / (1024 * 1024)
            )));
        }
        let ext = input
            .file_name
            .rsplit('.')
            .next()
            .map(str::to_ascii_lowercase)
            .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
            .ok_or_else(|| {
                ApiError::Validation("Only JPEG, PNG and WebP images are allowed".to_owned())
            })?;

        let stored_name = self.store.save(&ext, &input.bytes).await?;
        let image = GymImage {
            id: Uuid::now_v7(),
            title: input.title,
            category: input.category,
            image_url: format!("{UPLOADS_PREFIX}{stored_name}"),
            visibility: input.visibility,
            sort_order: input.sort_order,
            uploaded_at: Utc::now(),
        };
        self.gallery.create(&image).await?;
        Ok(image)
    }
}

// ── UpdateImage ──────────────────────────────────────────────────────────────

pub struct UpdateImageUseCase<G: GalleryRepository> {
    pub gallery: G,
}

impl<G: GalleryRepository> UpdateImageUseCase<G> {
    pub async fn execute(
        &self,
        image_id: Uuid,
        changes: GymImageChanges,
    ) -> Result<GymImage, ApiError> {
        if self.gallery.find_by_id(image_id).await?.is_none() {
            return Err(ApiError::NotFound("Image"));
        }
        self.gallery.update(image_id, changes).await
    }
}

// ── DeleteImage ──────────────────────────────────────────────────────────────

pub struct DeleteImageUseCase<G: GalleryRepository, S: ImageStore> {
    pub gallery: G,
    pub store: S,
}

impl<G: GalleryRepository, S: ImageStore> DeleteImageUseCase<G, S> {
    pub async fn execute(&self, image_id: Uuid) -> Result<(), ApiError> {
        let image = self
            .gallery
            .delete(image_id)
            .await?
            .ok_or(ApiError::NotFound("Image"))?;
        if let Some(name) = image.image_url.strip_prefix(UPLOADS_PREFIX) {
            self.store.remove(name).await?;
        }
        Ok(())
    }
}
