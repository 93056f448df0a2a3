//! Downloading restaurant images from the CDN.

use std::path::Path;

use tracing::debug;

use crate::{error::SaveError, model::Restaurant};

/// The raw bytes behind `url`.
pub async fn fetch_image(http: &reqwest::Client, url: &str) -> Result<Vec<u8>, SaveError> {
    debug!(url, "fetching image");
    let response = http.get(url).send().await?;
    if !response.status().is_success() {
        return Err(SaveError::ResponseError(response.status()));
    }
    Ok(response.bytes().await?.to_vec())
}

/// Write the image of `restaurant` to `path`, replacing any existing file.
pub async fn save_image(
    http: &reqwest::Client,
    restaurant: &Restaurant,
    path: impl AsRef<Path>,
) -> Result<(), SaveError> {
    let url = restaurant
        .image_uri
        .as_deref()
        .ok_or(SaveError::MissingImage)?;
    let bytes = fetch_image(http, url).await?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
