// src/images.rs
use base64::Engine;

/// Upper bound on the decoded image, matching the upload hint in the form.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Checks an inline `data:image/...;base64,...` payload and returns its media type.
pub fn validate_data_url(data_url: &str) -> Result<mime::Mime, String> {
    let rest = data_url
        .trim()
        .strip_prefix("data:")
        .ok_or("Image must be an inline data URL")?;
    let (header, payload) = rest.split_once(',').ok_or("Image data is malformed")?;
    let media_type = header
        .strip_suffix(";base64")
        .ok_or("Image must be base64 encoded")?;

    let mime: mime::Mime = media_type
        .parse()
        .map_err(|_| format!("Unrecognised image type: {media_type}"))?;
    if mime.type_() != mime::IMAGE {
        return Err(format!("{mime} is not an image"));
    }

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|_| "Image data is not valid base64".to_string())?;
    if bytes.is_empty() {
        return Err("Image is empty".into());
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err("Image is larger than 5MB".into());
    }
    Ok(mime)
}
