use std::path::Path;

use crate::{
    document::Document,
    error::{ConfigError, Error, IoError},
};

use log::debug;
use tokio::{fs::File, io::AsyncReadExt};

/// One-shot file loader: the whole input is read into a single buffer
/// before any processing starts.
#[derive(Debug, Default)]
pub struct FileReader;

impl FileReader {
    pub fn new() -> Self {
        Self
    }

    pub async fn load<P: AsRef<Path>>(&self, path: P) -> Result<Document, Error> {
        let path = path.as_ref();

        let mut file = match File::open(path).await {
            Ok(file) => file,
            Err(error) => return Err(ConfigError::File(error.kind()).into()),
        };

        let mut buffer = String::new();
        file.read_to_string(&mut buffer)
            .await
            .map_err(|error| IoError::File(error.kind()))?;

        debug!("read {} bytes from {}", buffer.len(), path.display());
        Ok(Document::new(buffer))
    }
}
