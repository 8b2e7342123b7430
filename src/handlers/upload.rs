use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::IntoResponse,
};
use http::{header, HeaderMap, HeaderValue};
use log::{info, warn};

use crate::{
    archive::{self, ARCHIVE_NAME},
    config::{Config, FILES_FIELD},
    error::UploadError,
    models::{base_name, UploadedFile},
};

/// Drain the whole multipart body, keeping the named file parts of `files`.
///
/// Filenames are cut down to their last path component. Parts under other
/// names, or without a filename, are read and dropped so the body limit
/// still covers them.
pub async fn read_files(
    multipart: &mut Multipart,
    config: &Config,
) -> Result<Vec<UploadedFile>, UploadError> {
    let too_large = || UploadError::TooLarge {
        max: config.max_upload_size_label(),
    };
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|err| {
        warn!("Rejecting multipart body: {}", err);
        too_large()
    })? {
        let file_name = match (field.name(), field.file_name()) {
            (Some(FILES_FIELD), Some(name)) => Some(base_name(name))
                .filter(|base| !base.is_empty())
                .map(str::to_string),
            _ => None,
        };

        let contents = field.bytes().await.map_err(|err| {
            warn!("Rejecting multipart body: {}", err);
            too_large()
        })?;

        if let Some(file_name) = file_name {
            files.push(UploadedFile::new(file_name, contents));
        }
    }

    Ok(files)
}

async fn upload(
    config: Arc<Config>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Vec<u8>, UploadError> {
    let mut multipart = multipart.map_err(|rejection| {
        warn!("Rejecting upload: {}", rejection);
        UploadError::TooLarge {
            max: config.max_upload_size_label(),
        }
    })?;

    let files = read_files(&mut multipart, &config).await?;

    if files.len() != config.required_files {
        return Err(UploadError::WrongCount {
            expected: config.required_files,
            actual: files.len(),
        });
    }

    for file in &files {
        info!("Archiving file: {} ({} bytes)", file.file_name, file.contents.len());
    }

    let upload_dir = config.upload_dir.clone();
    tokio::task::spawn_blocking(move || archive::bundle(&upload_dir, &files))
        .await
        .map_err(|err| UploadError::Internal(anyhow::anyhow!("Archive task failed: {}", err)))?
}

pub async fn upload_handler(
    State(config): State<Arc<Config>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, UploadError> {
    let archive = upload(config, multipart).await?;
    info!("Archive built successfully ({} bytes)", archive.len());

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/zip"));
    let disposition = format!("attachment; filename={}", ARCHIVE_NAME);
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition).map_err(anyhow::Error::from)?,
    );

    Ok((headers, archive))
}

pub async fn method_not_allowed() -> UploadError {
    UploadError::MethodNotAllowed
}
