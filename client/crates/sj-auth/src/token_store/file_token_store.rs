use crate::{AuthError, AuthResult, Credential, TokenStore};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// On-disk layout: a single `token` key, absent when logged out.
#[derive(Debug, Default, Serialize, Deserialize)]
struct TokenFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<Credential>,
}

/// Token store persisted as one JSON file per API origin.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store scoped to the origin of `base_url`, e.g.
    /// `https://journeys.example` -> `<dir>/https_journeys.example_443.json`.
    #[track_caller]
    pub fn for_origin(dir: &Path, base_url: &str) -> AuthResult<Self> {
        let url =
            Url::parse(base_url).map_err(|e| AuthError::invalid_origin(base_url, e.to_string()))?;

        let host = url
            .host_str()
            .ok_or_else(|| AuthError::invalid_origin(base_url, "URL has no host"))?;
        let port = url
            .port_or_known_default()
            .ok_or_else(|| AuthError::invalid_origin(base_url, "URL has no port"))?;

        let file_name = format!("{}_{}_{}.json", url.scheme(), sanitize(host), port);
        Ok(Self::new(dir.join(file_name)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes to a temp file, syncs, then renames over the real file so a
    /// crash mid-write never leaves a half-written token behind.
    fn write_atomic(&self, contents: &str) -> AuthResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AuthError::token_store(parent.to_path_buf(), e))?;
        }

        let temp_path = self
            .path
            .with_extension(format!("json.tmp.{}", std::process::id()));

        {
            let mut file = open_private(&temp_path)
                .map_err(|e| AuthError::token_store(temp_path.clone(), e))?;
            file.write_all(contents.as_bytes())
                .map_err(|e| AuthError::token_store(temp_path.clone(), e))?;
            file.sync_all()
                .map_err(|e| AuthError::token_store(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            AuthError::token_store(self.path.clone(), e)
        })
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> AuthResult<Option<Credential>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AuthError::token_store(self.path.clone(), e)),
        };

        match serde_json::from_str::<TokenFile>(&contents) {
            Ok(file) => Ok(file.token),
            Err(e) => {
                warn!(
                    "Token file corrupted at {:?}, treating as signed out: {e}",
                    self.path
                );
                Ok(None)
            }
        }
    }

    fn set(&self, credential: &Credential) -> AuthResult<()> {
        let file = TokenFile {
            token: Some(credential.clone()),
        };
        let contents = serde_json::to_string_pretty(&file)?;
        self.write_atomic(&contents)?;
        debug!("Persisted credential to {:?}", self.path);
        Ok(())
    }

    fn clear(&self) -> AuthResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed credential file {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::token_store(self.path.clone(), e)),
        }
    }
}

fn sanitize(host: &str) -> String {
    host.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    fs::File::create(path)
}
