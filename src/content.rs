//! Where `create` and `update` read artifact content from.

use crate::error::CliError;
use crate::resolve::ArtifactType;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Readable artifact content, either a user file or a buffered copy of stdin.
///
/// The content is never parsed locally; the registry validates it.
#[derive(Debug)]
pub struct ContentSource {
    file: File,
    origin: String,
}

impl ContentSource {
    /// Open `path` when given, otherwise buffer standard input
    pub fn resolve(path: Option<&Path>) -> Result<Self, CliError> {
        match path.filter(|p| !p.as_os_str().is_empty()) {
            Some(p) => Self::open(p),
            None => {
                tracing::info!("Reading file content from stdin");
                Self::from_reader(io::stdin().lock())
            }
        }
    }

    pub fn open(path: &Path) -> Result<Self, CliError> {
        tracing::info!("Opening file: {}", path.display());
        let file = File::open(path).map_err(|source| CliError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(ContentSource {
            file,
            origin: path.display().to_string(),
        })
    }

    /// Copy everything from `reader` into an anonymous temporary file
    pub fn from_reader(mut reader: impl Read) -> Result<Self, CliError> {
        let mut file = tempfile::tempfile().map_err(CliError::Stdin)?;
        io::copy(&mut reader, &mut file).map_err(CliError::Stdin)?;
        file.seek(SeekFrom::Start(0)).map_err(CliError::Stdin)?;
        Ok(ContentSource {
            file,
            origin: "<stdin>".to_string(),
        })
    }

    /// Human readable origin, for log lines
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// `Content-Type` for the upload, from the declared type or the file extension
    pub fn content_type(&self, artifact_type: Option<ArtifactType>) -> &'static str {
        if let Some(t) = artifact_type {
            return match t {
                ArtifactType::Protobuf => "application/x-protobuf",
                ArtifactType::GraphQl => "application/graphql",
                ArtifactType::Wsdl | ArtifactType::Xsd | ArtifactType::Xml => "application/xml",
                ArtifactType::Avro
                | ArtifactType::Json
                | ArtifactType::OpenApi
                | ArtifactType::AsyncApi
                | ArtifactType::KConnect => "application/json",
            };
        }
        match Path::new(&self.origin).extension().and_then(|e| e.to_str()) {
            Some("proto") => "application/x-protobuf",
            Some("yaml") | Some("yml") => "application/x-yaml",
            Some("xml") | Some("xsd") | Some("wsdl") => "application/xml",
            Some("graphql") | Some("gql") => "application/graphql",
            _ => "application/json",
        }
    }

    /// Drain the content into memory
    pub fn read_all(mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Streaming request body, the file handle is closed once the upload ends
    pub fn into_body(self) -> reqwest::Body {
        reqwest::Body::from(tokio::fs::File::from_std(self.file))
    }
}
