//! Serving uploaded media and collected static assets straight from disk.
//!
//! Only mounted in development mode; production deployments hand these
//! prefixes to a dedicated file server or CDN.
use std::path::{Component, Path, PathBuf};

use axum::{
    body::Body,
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE, IF_MODIFIED_SINCE, LAST_MODIFIED},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::Response,
};
use time::{
    format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime,
    PrimitiveDateTime, UtcOffset,
};
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use tracing::debug;

/// IMF-fixdate, the preferred HTTP date format.
const HTTP_DATE: &[BorrowedFormatItem<'_>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// RFC 850 dates, once the two-digit year has been widened.
const RFC_850_DATE: &[BorrowedFormatItem<'_>] =
    format_description!("[day]-[month repr:short]-[year] [hour]:[minute]:[second] GMT");

/// ANSI C `asctime()` dates.
const ASCTIME_DATE: &[BorrowedFormatItem<'_>] = format_description!(
    "[weekday repr:short] [month repr:short] [day padding:space] [hour]:[minute]:[second] [year]"
);

/// A URL prefix backed by a directory on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMount {
    /// The URL prefix, e.g. `/media/`.
    pub url_prefix: String,
    /// The directory files are read from.
    pub document_root: PathBuf,
}

impl FileMount {
    /// Mount `document_root` under `url_prefix`.
    pub fn new(url_prefix: impl Into<String>, document_root: impl Into<PathBuf>) -> Self {
        Self {
            url_prefix: url_prefix.into(),
            document_root: document_root.into(),
        }
    }

    /// Whether the prefix points at this process rather than another host.
    pub fn is_local(&self) -> bool {
        !(self.url_prefix.contains("://") || self.url_prefix.starts_with("//"))
    }

    /// The axum route this mount is registered under, e.g. `/media/{*path}`.
    pub fn route_path(&self) -> String {
        format!("/{}/{{*path}}", self.url_prefix.trim_matches('/'))
    }
}

/// Reduce a requested path to plain components below the document root.
pub fn sanitize_relative_path(requested_path: &str) -> Result<PathBuf, errors::FileServeError> {
    let requested = Path::new(requested_path.trim_start_matches('/'));
    let mut sanitized = PathBuf::new();

    for component in requested.components() {
        match component {
            Component::Normal(part) => sanitized.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(errors::FileServeError::InvalidPath);
            }
        }
    }

    if sanitized.as_os_str().is_empty() {
        return Err(errors::FileServeError::InvalidPath);
    }

    Ok(sanitized)
}

/// Respond with the file at `requested_path` under the mount's document root.
pub async fn serve_file(
    mount: &FileMount,
    requested_path: &str,
    headers: &HeaderMap,
) -> Result<Response, errors::FileServeError> {
    let relative = sanitize_relative_path(requested_path)?;
    let path = mount.document_root.join(&relative);
    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|_| errors::FileServeError::NotFound)?;
    // No directory listings.
    if !metadata.is_file() {
        return Err(errors::FileServeError::NotFound);
    }

    let modified = metadata
        .modified()
        .ok()
        .map(OffsetDateTime::from)
        .and_then(|at| at.replace_nanosecond(0).ok());

    if let Some(modified) = modified {
        let since = headers
            .get(IF_MODIFIED_SINCE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_http_date);
        if since.is_some_and(|since| since >= modified) {
            debug!(path = %relative.display(), "file not modified");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::NOT_MODIFIED;
            response
                .headers_mut()
                .insert(LAST_MODIFIED, HeaderValue::from_str(&format_http_date(modified)?)?);
            return Ok(response);
        }
    }

    let file = File::open(&path).await?;
    debug!(
        path = %relative.display(),
        size = metadata.len(),
        "serving file"
    );
    let mut response = Response::new(Body::from_stream(ReaderStream::new(file)));

    let content_type = mime_guess::from_path(&path).first_or_octet_stream();
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_str(content_type.essence_str())?,
    );
    response.headers_mut().insert(
        CONTENT_LENGTH,
        HeaderValue::from_str(&metadata.len().to_string())?,
    );
    if let Some(modified) = modified {
        response
            .headers_mut()
            .insert(LAST_MODIFIED, HeaderValue::from_str(&format_http_date(modified)?)?);
    }

    Ok(response)
}

/// Render `at` as an IMF-fixdate.
fn format_http_date(at: OffsetDateTime) -> Result<String, time::error::Format> {
    at.to_offset(UtcOffset::UTC).format(HTTP_DATE)
}

/// Parse any of the three date formats HTTP recipients must accept.
fn parse_http_date(value: &str) -> Option<OffsetDateTime> {
    let value = value.trim();
    PrimitiveDateTime::parse(value, HTTP_DATE)
        .ok()
        .or_else(|| parse_rfc_850_date(value, OffsetDateTime::now_utc().year()))
        .or_else(|| PrimitiveDateTime::parse(value, ASCTIME_DATE).ok())
        .map(PrimitiveDateTime::assume_utc)
}

/// Parse `Sunday, 06-Nov-94 08:49:37 GMT`. Four-digit years are tolerated.
fn parse_rfc_850_date(value: &str, current_year: i32) -> Option<PrimitiveDateTime> {
    // The weekday is spelled out in full and adds nothing to the date.
    let (_, rest) = value.split_once(", ")?;
    let (date, time_of_day) = rest.split_once(' ')?;
    let (day_month, year) = date.rsplit_once('-')?;
    if !year.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let year = match year.len() {
        2 => widen_two_digit_year(year.parse().ok()?, current_year),
        4 => year.parse().ok()?,
        _ => return None,
    };
    PrimitiveDateTime::parse(&format!("{day_month}-{year:04} {time_of_day}"), RFC_850_DATE).ok()
}

/// Two-digit years more than 50 years ahead belong to the previous century.
const fn widen_two_digit_year(last_two: i32, current_year: i32) -> i32 {
    let year = current_year - current_year.rem_euclid(100) + last_two;
    if year > current_year + 50 {
        year - 100
    } else {
        year
    }
}

pub mod errors {
    use thiserror::Error;

    /// Errors raised while serving a file from a mount.
    #[derive(Debug, Error)]
    pub enum FileServeError {
        /// The requested path is empty or leaves the document root.
        #[error("invalid path")]
        InvalidPath,
        /// Nothing, or a directory, lives at the requested path.
        #[error("file not found")]
        NotFound,
        /// The file exists but could not be read.
        #[error("i/o error: {0}")]
        Io(#[from] std::io::Error),
        /// A response header could not be encoded.
        #[error("invalid header value")]
        HeaderValue(#[from] axum::http::header::InvalidHeaderValue),
        /// The modification time could not be rendered as an HTTP date.
        #[error("could not format date: {0}")]
        DateFormat(#[from] time::error::Format),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn sanitize_prevents_traversal() {
        assert!(sanitize_relative_path("../etc/passwd").is_err());
        assert!(sanitize_relative_path("/../../abc").is_err());
        assert!(sanitize_relative_path("a/../b").is_err());
        assert!(sanitize_relative_path("..").is_err());
    }

    #[test]
    fn sanitize_drops_current_dir_components() {
        assert_eq!(
            sanitize_relative_path("./images/./logo.png").unwrap(),
            PathBuf::from("images/logo.png")
        );
    }

    #[test]
    fn sanitize_rejects_empty() {
        assert!(sanitize_relative_path("").is_err());
        assert!(sanitize_relative_path("/").is_err());
        assert!(sanitize_relative_path("./").is_err());
    }

    #[test]
    fn absolute_prefixes_are_not_local() {
        assert!(FileMount::new("/static/", "staticfiles").is_local());
        assert!(FileMount::new("static/", "staticfiles").is_local());
        assert!(!FileMount::new("https://cdn.example.com/static/", "staticfiles").is_local());
        assert!(!FileMount::new("//cdn.example.com/static/", "staticfiles").is_local());
    }

    #[test]
    fn route_path_normalises_slashes() {
        assert_eq!(FileMount::new("/media/", "m").route_path(), "/media/{*path}");
        assert_eq!(FileMount::new("media", "m").route_path(), "/media/{*path}");
        assert_eq!(
            FileMount::new("/assets/static/", "s").route_path(),
            "/assets/static/{*path}"
        );
    }

    #[test]
    fn http_dates_use_imf_fixdate() {
        let at = datetime!(2024-03-05 07:08:09 UTC);
        let formatted = format_http_date(at).unwrap();
        assert_eq!(formatted, "Tue, 05 Mar 2024 07:08:09 GMT");
        assert_eq!(parse_http_date(&formatted), Some(at));
        assert_eq!(parse_http_date("yesterday"), None);
    }

    #[test]
    fn rfc_850_dates_are_accepted() {
        assert_eq!(
            parse_rfc_850_date("Tuesday, 05-Mar-24 07:08:09 GMT", 2026),
            Some(datetime!(2024-03-05 07:08:09))
        );
        assert_eq!(
            parse_http_date("Friday, 01-Jan-2100 00:00:00 GMT"),
            Some(datetime!(2100-01-01 00:00:00 UTC))
        );
        assert_eq!(parse_rfc_850_date("Sunday, 06-Nov-194 08:49:37 GMT", 2026), None);
        assert_eq!(parse_rfc_850_date("Sunday, 06-Nov-+4 08:49:37 GMT", 2026), None);
    }

    #[test]
    fn asctime_dates_are_accepted() {
        assert_eq!(
            parse_http_date("Tue Mar  5 07:08:09 2024"),
            Some(datetime!(2024-03-05 07:08:09 UTC))
        );
        assert_eq!(
            parse_http_date("Sat Nov 16 08:49:37 2024"),
            Some(datetime!(2024-11-16 08:49:37 UTC))
        );
    }

    #[test]
    fn two_digit_years_stay_within_fifty_years_ahead() {
        assert_eq!(widen_two_digit_year(26, 2026), 2026);
        assert_eq!(widen_two_digit_year(76, 2026), 2076);
        assert_eq!(widen_two_digit_year(77, 2026), 1977);
        assert_eq!(widen_two_digit_year(94, 2026), 1994);
        assert_eq!(widen_two_digit_year(10, 2080), 2010);
    }
}
