//! Single-stream HTTP GET of one archive to a local file.

use crate::config::DownloadConfig;
use crate::error::InstallError;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Downloads `url` into `dest` (truncating it), following redirects.
/// Returns the number of bytes written. Any non-2xx status is an error.
pub fn download_to_file(url: &str, dest: &Path, opts: &DownloadConfig) -> Result<u64, InstallError> {
    let curl_err = |source: curl::Error| InstallError::Curl {
        url: url.to_string(),
        source,
    };

    let mut file = File::create(dest)
        .map_err(|e| InstallError::io(format!("create {}", dest.display()), e))?;

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.max_redirections(10).map_err(curl_err)?;
    easy.fail_on_error(false).map_err(curl_err)?;
    easy.connect_timeout(Duration::from_secs(opts.connect_timeout_secs))
        .map_err(curl_err)?;
    if let Some(sz) = opts.buffer_size {
        easy.buffer_size(sz).map_err(curl_err)?;
    }

    let mut written: u64 = 0;
    let mut write_error: Option<io::Error> = None;
    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| match file.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_error = Some(e);
                    Ok(0) // abort transfer
                }
            })
            .map_err(curl_err)?;
        transfer.perform()
    };

    if let Some(e) = write_error {
        return Err(InstallError::io(format!("write {}", dest.display()), e));
    }
    performed.map_err(curl_err)?;

    let code = easy.response_code().map_err(curl_err)?;
    if !(200..300).contains(&code) {
        return Err(InstallError::Http {
            url: url.to_string(),
            code,
        });
    }

    file.flush()
        .map_err(|e| InstallError::io(format!("flush {}", dest.display()), e))?;
    tracing::debug!(url, bytes = written, "download complete");
    Ok(written)
}
