use crate::config::{AuthConfig, ConfigStore, FileConfigStore, RegistryInstanceConfig};
use crate::content::ContentSource;
use crate::error::{ApiError, CliError};
use crate::model::{
    ArtifactMetadata, ArtifactSearchResults, EditableMetadata, VersionSearchResults,
};
use crate::resolve::ArtifactType;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, RequestBuilder, Response, Url,
};
use std::env;

/// Optional headers for artifact creation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateArtifactOptions {
    pub artifact_type: Option<ArtifactType>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

/// How `download` addresses content
#[derive(Debug, Clone, PartialEq)]
pub enum ContentRef {
    GlobalId(i64),
    ContentId(i64),
    Hash(String),
}

/// Operations of the registry instance API used by the CLI
#[async_trait]
pub trait RegistryApi: Send + Sync {
    async fn create_artifact(
        &self,
        group: &str,
        content: ContentSource,
        options: CreateArtifactOptions,
    ) -> Result<ArtifactMetadata, ApiError>;

    async fn get_latest_artifact(&self, group: &str, artifact_id: &str) -> Result<Bytes, ApiError>;

    async fn get_artifact_version(
        &self,
        group: &str,
        artifact_id: &str,
        version: &str,
    ) -> Result<Bytes, ApiError>;

    async fn update_artifact(
        &self,
        group: &str,
        artifact_id: &str,
        content: ContentSource,
    ) -> Result<ArtifactMetadata, ApiError>;

    async fn delete_artifact(&self, group: &str, artifact_id: &str) -> Result<(), ApiError>;

    async fn delete_artifacts_in_group(&self, group: &str) -> Result<(), ApiError>;

    async fn list_artifacts_in_group(
        &self,
        group: &str,
        limit: u32,
        offset: u32,
    ) -> Result<ArtifactSearchResults, ApiError>;

    async fn list_artifact_versions(
        &self,
        group: &str,
        artifact_id: &str,
    ) -> Result<VersionSearchResults, ApiError>;

    async fn get_artifact_metadata(
        &self,
        group: &str,
        artifact_id: &str,
    ) -> Result<ArtifactMetadata, ApiError>;

    async fn update_artifact_metadata(
        &self,
        group: &str,
        artifact_id: &str,
        metadata: &EditableMetadata,
    ) -> Result<(), ApiError>;

    async fn get_content(&self, reference: &ContentRef) -> Result<Bytes, ApiError>;
}

/// Opens a [`RegistryApi`] for a resolved registry id
pub trait Connector {
    fn connect(&self, registry_id: &str) -> Result<Box<dyn RegistryApi>, CliError>;
}

/// Connector that looks registry ids up in the CLI configuration.
///
/// An id that is itself an `http(s)://` URL is used directly, without auth.
pub struct HttpConnector {
    store: Box<dyn ConfigStore>,
}

impl HttpConnector {
    pub fn new(store: Box<dyn ConfigStore>) -> Self {
        HttpConnector { store }
    }

    pub fn from_env() -> Self {
        Self::new(Box::new(FileConfigStore::from_env()))
    }
}

impl Connector for HttpConnector {
    fn connect(&self, registry_id: &str) -> Result<Box<dyn RegistryApi>, CliError> {
        if registry_id.starts_with("http://") || registry_id.starts_with("https://") {
            let instance = RegistryInstanceConfig {
                id: registry_id.to_string(),
                url: registry_id.to_string(),
                auth: AuthConfig::None,
            };
            return Ok(Box::new(RegistryClient::new(&instance)?));
        }

        let cfg = self.store.load()?;
        let instance = cfg
            .find_registry(registry_id)
            .ok_or_else(|| CliError::UnknownRegistry {
                id: registry_id.to_string(),
                known: cfg.registry_ids(),
            })?;
        Ok(Box::new(RegistryClient::new(instance)?))
    }
}

pub struct RegistryClient {
    pub id: String,
    pub base_url: Url,
    pub client: Client,
}

impl RegistryClient {
    pub fn new(cfg: &RegistryInstanceConfig) -> Result<Self, CliError> {
        let conn_err = |reason: String| CliError::Connection {
            registry: cfg.id.clone(),
            reason,
        };
        let read_env = |var: &str| {
            env::var(var).map_err(|_| conn_err(format!("environment variable {var} is not set")))
        };

        let mut headers = HeaderMap::new();
        let auth_value = match &cfg.auth {
            AuthConfig::None => None,
            AuthConfig::Basic {
                username,
                password_env,
            } => {
                let pw = read_env(password_env)?;
                let token = base64::encode_config(format!("{username}:{pw}"), base64::STANDARD);
                Some(format!("Basic {token}"))
            }
            AuthConfig::Token { token_env } => Some(read_env(token_env)?),
            AuthConfig::Bearer { token_env } => Some(format!("Bearer {}", read_env(token_env)?)),
        };
        if let Some(value) = auth_value {
            let hv = HeaderValue::from_str(&value)
                .map_err(|e| conn_err(format!("invalid credentials: {e}")))?;
            headers.insert(AUTHORIZATION, hv);
        }

        let base_url = Url::parse(cfg.url.trim_end_matches('/'))
            .map_err(|e| conn_err(format!("invalid url '{}': {e}", cfg.url)))?;
        if base_url.cannot_be_a_base() {
            return Err(conn_err(format!("invalid url '{}'", cfg.url)));
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| conn_err(e.to_string()))?;
        tracing::debug!("connecting to registry '{}' at {}", cfg.id, base_url);
        Ok(RegistryClient {
            id: cfg.id.clone(),
            base_url,
            client,
        })
    }

    /// Append percent-encoded path segments to the base URL
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.bytes().await?;
        Err(ApiError::from_response(status.as_u16(), &body))
    }
}

#[async_trait]
impl RegistryApi for RegistryClient {
    async fn create_artifact(
        &self,
        group: &str,
        content: ContentSource,
        options: CreateArtifactOptions,
    ) -> Result<ArtifactMetadata, ApiError> {
        let url = self.endpoint(&["groups", group, "artifacts"]);
        tracing::debug!("uploading {} to {url}", content.origin());
        let mut req = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content.content_type(options.artifact_type));
        if let Some(t) = options.artifact_type {
            req = req.header("X-Registry-ArtifactType", t.as_str());
        }
        if let Some(id) = &options.artifact_id {
            req = req.header("X-Registry-ArtifactId", id);
        }
        if let Some(version) = &options.version {
            req = req.header("X-Registry-Version", version);
        }
        let resp = self.send(req.body(content.into_body())).await?;
        Ok(resp.json().await?)
    }

    async fn get_latest_artifact(&self, group: &str, artifact_id: &str) -> Result<Bytes, ApiError> {
        let url = self.endpoint(&["groups", group, "artifacts", artifact_id]);
        let resp = self.send(self.client.get(url)).await?;
        Ok(resp.bytes().await?)
    }

    async fn get_artifact_version(
        &self,
        group: &str,
        artifact_id: &str,
        version: &str,
    ) -> Result<Bytes, ApiError> {
        let url = self.endpoint(&["groups", group, "artifacts", artifact_id, "versions", version]);
        let resp = self.send(self.client.get(url)).await?;
        Ok(resp.bytes().await?)
    }

    async fn update_artifact(
        &self,
        group: &str,
        artifact_id: &str,
        content: ContentSource,
    ) -> Result<ArtifactMetadata, ApiError> {
        let url = self.endpoint(&["groups", group, "artifacts", artifact_id]);
        tracing::debug!("uploading {} to {url}", content.origin());
        let req = self
            .client
            .put(url)
            .header(CONTENT_TYPE, content.content_type(None))
            .body(content.into_body());
        let resp = self.send(req).await?;
        Ok(resp.json().await?)
    }

    async fn delete_artifact(&self, group: &str, artifact_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["groups", group, "artifacts", artifact_id]);
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn delete_artifacts_in_group(&self, group: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["groups", group, "artifacts"]);
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn list_artifacts_in_group(
        &self,
        group: &str,
        limit: u32,
        offset: u32,
    ) -> Result<ArtifactSearchResults, ApiError> {
        let url = self.endpoint(&["groups", group, "artifacts"]);
        let req = self
            .client
            .get(url)
            .query(&[("limit", limit), ("offset", offset)]);
        let resp = self.send(req).await?;
        Ok(resp.json().await?)
    }

    async fn list_artifact_versions(
        &self,
        group: &str,
        artifact_id: &str,
    ) -> Result<VersionSearchResults, ApiError> {
        let url = self.endpoint(&["groups", group, "artifacts", artifact_id, "versions"]);
        let resp = self.send(self.client.get(url)).await?;
        Ok(resp.json().await?)
    }

    async fn get_artifact_metadata(
        &self,
        group: &str,
        artifact_id: &str,
    ) -> Result<ArtifactMetadata, ApiError> {
        let url = self.endpoint(&["groups", group, "artifacts", artifact_id, "meta"]);
        let resp = self.send(self.client.get(url)).await?;
        Ok(resp.json().await?)
    }

    async fn update_artifact_metadata(
        &self,
        group: &str,
        artifact_id: &str,
        metadata: &EditableMetadata,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&["groups", group, "artifacts", artifact_id, "meta"]);
        self.send(self.client.put(url).json(metadata)).await?;
        Ok(())
    }

    async fn get_content(&self, reference: &ContentRef) -> Result<Bytes, ApiError> {
        let url = match reference {
            ContentRef::GlobalId(id) => self.endpoint(&["ids", "globalIds", &id.to_string()]),
            ContentRef::ContentId(id) => self.endpoint(&["ids", "contentIds", &id.to_string()]),
            ContentRef::Hash(hash) => self.endpoint(&["ids", "contentHashes", hash]),
        };
        let resp = self.send(self.client.get(url)).await?;
        Ok(resp.bytes().await?)
    }
}
