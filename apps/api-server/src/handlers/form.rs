//! Multipart decoding for the post creation form.
//!
//! Produces a validated [`CreatePost`] before any domain logic runs. Genre
//! fields are read off the wire and dropped; the command has nowhere to put
//! them.

use std::collections::HashMap;

use actix_multipart::{Field, Multipart};
use futures::StreamExt;

use postagem_core::domain::{Attachment, CreatePost};

use crate::middleware::error::AppError;

pub const FILE_FIELD: &str = "file";
pub const CAPTION_FIELDS: [&str; 2] = ["titulo", "legenda"];
pub const DESCRIPTION_FIELD: &str = "descricao";
pub const USER_ID_FIELD: &str = "usuario.id";
pub const CATEGORY_ID_FIELD: &str = "categoria.id";
pub const STATUS_FIELD: &str = "statusPostagem";

/// Cap on a single text part.
pub const MAX_TEXT_BYTES: usize = 64 * 1024;

const TEXT_FIELDS: [&str; 6] = [
    CAPTION_FIELDS[0],
    CAPTION_FIELDS[1],
    DESCRIPTION_FIELD,
    USER_ID_FIELD,
    CATEGORY_ID_FIELD,
    STATUS_FIELD,
];

/// Size limits applied while buffering the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLimits {
    pub max_file_bytes: usize,
    pub max_text_bytes: usize,
}

impl FormLimits {
    pub fn new(max_file_bytes: usize) -> Self {
        Self {
            max_file_bytes,
            max_text_bytes: MAX_TEXT_BYTES,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("malformed multipart payload: {0}")]
    Malformed(String),

    #[error("field '{field}' exceeds the limit of {limit} bytes")]
    TooLarge { field: String, limit: usize },

    #[error("invalid form: {}", .0.join(", "))]
    Invalid(Vec<String>),
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Malformed(_) => AppError::BadRequest(err.to_string()),
            FormError::TooLarge { .. } => AppError::PayloadTooLarge(err.to_string()),
            FormError::Invalid(errors) => AppError::Validation(errors),
        }
    }
}

/// Matches `genero`, `genero.id`, `genero_id`, `generoId` and friends.
fn is_genre_field(name: &str) -> bool {
    name.to_ascii_lowercase().starts_with("genero")
}

/// Decode the multipart body of `POST /postagem/create`.
pub async fn decode_create_post(
    mut payload: Multipart,
    limits: FormLimits,
) -> Result<CreatePost, FormError> {
    let mut text: HashMap<String, String> = HashMap::new();
    let mut attachment = None;
    let mut errors = Vec::new();
    // Fields already reported as undecodable; not reported again as missing
    let mut undecodable: Vec<String> = Vec::new();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| FormError::Malformed(e.to_string()))?;
        let name = field.name().unwrap_or_default().to_string();

        if name == FILE_FIELD {
            let filename = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .unwrap_or_default()
                .to_string();
            let bytes = read_limited(&mut field, &name, limits.max_file_bytes).await?;

            // Browsers send an empty, unnamed part when no file was chosen
            if filename.is_empty() && bytes.is_empty() {
                continue;
            }
            attachment = Some(Attachment { filename, bytes });
        } else if TEXT_FIELDS.contains(&name.as_str()) {
            let bytes = read_limited(&mut field, &name, limits.max_text_bytes).await?;
            match String::from_utf8(bytes) {
                Ok(value) => {
                    text.insert(name, value);
                }
                Err(_) => {
                    errors.push(format!("{name} must be valid UTF-8 text"));
                    undecodable.push(name);
                }
            }
        } else {
            if is_genre_field(&name) {
                tracing::warn!(field = %name, "Ignoring genre field; posts have no genre");
            } else {
                tracing::debug!(field = %name, "Ignoring unknown form field");
            }
            drain(&mut field).await?;
        }
    }

    let reported = |field: &str| undecodable.iter().any(|f| f == field);

    let caption = CAPTION_FIELDS.iter().find_map(|key| text.remove(*key));
    if caption.is_none() && !CAPTION_FIELDS.iter().any(|key| reported(*key)) {
        errors.push(format!("{} is required", CAPTION_FIELDS[0]));
    }
    let description = text.remove(DESCRIPTION_FIELD);
    if description.is_none() && !reported(DESCRIPTION_FIELD) {
        errors.push(format!("{DESCRIPTION_FIELD} is required"));
    }
    let user_id = parse_id(
        text.remove(USER_ID_FIELD),
        USER_ID_FIELD,
        reported(USER_ID_FIELD),
        &mut errors,
    );
    let category_id = parse_id(
        text.remove(CATEGORY_ID_FIELD),
        CATEGORY_ID_FIELD,
        reported(CATEGORY_ID_FIELD),
        &mut errors,
    );

    match (caption, description, user_id, category_id) {
        (Some(caption), Some(description), Some(user_id), Some(category_id))
            if errors.is_empty() =>
        {
            Ok(CreatePost {
                caption,
                description,
                user_id,
                category_id,
                status: text.remove(STATUS_FIELD),
                attachment,
            })
        }
        _ => Err(FormError::Invalid(errors)),
    }
}

fn parse_id(
    raw: Option<String>,
    field: &str,
    already_reported: bool,
    errors: &mut Vec<String>,
) -> Option<i64> {
    let raw = raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let Some(raw) = raw else {
        if !already_reported {
            errors.push(format!("{field} is required"));
        }
        return None;
    };

    match raw.parse::<i64>() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.push(format!("{field} must be an integer"));
            None
        }
    }
}

async fn read_limited(field: &mut Field, name: &str, limit: usize) -> Result<Vec<u8>, FormError> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| FormError::Malformed(e.to_string()))?;
        if buf.len() + chunk.len() > limit {
            return Err(FormError::TooLarge {
                field: name.to_string(),
                limit,
            });
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

async fn drain(field: &mut Field) -> Result<(), FormError> {
    while let Some(chunk) = field.next().await {
        chunk.map_err(|e| FormError::Malformed(e.to_string()))?;
    }
    Ok(())
}
