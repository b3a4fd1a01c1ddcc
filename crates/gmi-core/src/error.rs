//! Error type for the install workflow.
//!
//! Causes are kept apart for logging; the worker flattens every variant except
//! [`InstallError::AddonsDirNotFound`] into one "error during install" status.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallError {
    /// Neither the registry nor any Steam library yielded an addons directory.
    #[error("Garry's Mod addons folder not found.")]
    AddonsDirNotFound,

    /// Server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },

    /// Transport failure reported by libcurl (DNS, connect, TLS, reset...).
    #[error("GET {url} failed: {source}")]
    Curl {
        url: String,
        #[source]
        source: curl::Error,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("archive {}: {source}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

impl InstallError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        InstallError::Io {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_mentions_url_and_code() {
        let e = InstallError::Http {
            url: "http://127.0.0.1/a.zip".into(),
            code: 404,
        };
        assert_eq!(e.to_string(), "GET http://127.0.0.1/a.zip returned HTTP 404");
    }

    #[test]
    fn io_error_keeps_context() {
        let e = InstallError::io(
            "copy a -> b",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(e.to_string(), "copy a -> b: denied");
    }
}
