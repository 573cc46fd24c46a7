//! Multipart bodies for product create/update.

use crate::api::error::ApiError;
use reqwest::multipart::{Form, Part};
use std::path::{Path, PathBuf};

/// Field name repeated once per uploaded image.
pub const IMAGES_FIELD: &str = "images";

/// A validated product form, images still referenced by path.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub category: String,
    pub description: String,
    pub images: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name);
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Reads an image from disk, keeping its file name (and so its extension).
    pub async fn read(path: &Path) -> Result<Self, ApiError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self::new(file_name, bytes))
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// One entry of the multipart body.
#[derive(Debug, PartialEq)]
pub enum MultipartField<'a> {
    Text { name: &'static str, value: String },
    File { name: &'static str, upload: &'a ImageUpload },
}

impl MultipartField<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            MultipartField::Text { name, .. } | MultipartField::File { name, .. } => name,
        }
    }
}

/// Product fields plus the image bytes, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub category: String,
    pub description: String,
    pub images: Vec<ImageUpload>,
}

impl ProductPayload {
    /// Reads every image the draft references.
    pub async fn load(draft: ProductDraft) -> Result<Self, ApiError> {
        let mut images = Vec::with_capacity(draft.images.len());
        for path in &draft.images {
            images.push(ImageUpload::read(path).await?);
        }
        Ok(Self {
            name: draft.name,
            price: draft.price,
            quantity: draft.quantity,
            category: draft.category,
            description: draft.description,
            images,
        })
    }

    /// Body layout: the text fields, then one `images` part per upload.
    pub fn fields(&self) -> Vec<MultipartField<'_>> {
        let mut fields = vec![
            MultipartField::Text {
                name: "name",
                value: self.name.clone(),
            },
            MultipartField::Text {
                name: "price",
                value: self.price.to_string(),
            },
            MultipartField::Text {
                name: "quantity",
                value: self.quantity.to_string(),
            },
            MultipartField::Text {
                name: "category",
                value: self.category.clone(),
            },
            MultipartField::Text {
                name: "description",
                value: self.description.clone(),
            },
        ];
        fields.extend(self.images.iter().map(|upload| MultipartField::File {
            name: IMAGES_FIELD,
            upload,
        }));
        fields
    }

    pub fn to_form(&self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for field in self.fields() {
            form = match field {
                MultipartField::Text { name, value } => form.text(name, value),
                MultipartField::File { name, upload } => {
                    let part = Part::bytes(upload.bytes.clone())
                        .file_name(upload.file_name.clone())
                        .mime_str(upload.content_type)?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}
