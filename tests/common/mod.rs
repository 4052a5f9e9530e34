#![allow(dead_code)]

use apicurio_artifacts::config::{Config, ConfigStore};
use apicurio_artifacts::content::ContentSource;
use apicurio_artifacts::error::{ApiError, CliError};
use apicurio_artifacts::factory::Factory;
use apicurio_artifacts::model::{
    ArtifactMetadata, ArtifactSearchResults, EditableMetadata, SearchedVersion,
    VersionSearchResults,
};
use apicurio_artifacts::prompt::Prompter;
use apicurio_artifacts::registry::{
    Connector, ContentRef, CreateArtifactOptions, RegistryApi,
};
use async_trait::async_trait;
use bytes::Bytes;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Config store that counts how often it is read
#[derive(Clone, Default)]
pub struct CountingStore {
    pub cfg: Arc<Mutex<Config>>,
    pub loads: Arc<AtomicUsize>,
}

impl CountingStore {
    pub fn selecting(id: &str) -> Self {
        let store = CountingStore::default();
        store.cfg.lock().unwrap().selected_registry = Some(id.to_string());
        store
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ConfigStore for CountingStore {
    fn load(&self) -> Result<Config, CliError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.cfg.lock().unwrap().clone())
    }

    fn save(&self, cfg: &Config) -> Result<(), CliError> {
        *self.cfg.lock().unwrap() = cfg.clone();
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create {
        group: String,
        options: CreateArtifactOptions,
        content: Vec<u8>,
    },
    GetLatest { group: String, id: String },
    GetVersion { group: String, id: String, version: String },
    Update { group: String, id: String, content: Vec<u8> },
    Delete { group: String, id: String },
    DeleteAll { group: String },
    List { group: String, limit: u32, offset: u32 },
    Versions { group: String, id: String },
    GetMeta { group: String, id: String },
    UpdateMeta { group: String, id: String, metadata: EditableMetadata },
    Content(ContentRef),
}

/// Registry API double that records every call
#[derive(Clone, Default)]
pub struct RecordingApi {
    pub calls: Arc<Mutex<Vec<Call>>>,
    pub content: Bytes,
    /// When set, every call fails with this status and body
    pub failure: Option<(u16, String)>,
}

impl RecordingApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some((status, body)) => Err(ApiError::from_response(*status, body.as_bytes())),
            None => Ok(()),
        }
    }

    fn metadata(group: &str, id: &str) -> ArtifactMetadata {
        ArtifactMetadata {
            group_id: Some(group.to_string()),
            id: Some(id.to_string()),
            version: Some("1".to_string()),
            global_id: Some(1),
            ..Default::default()
        }
    }
}

#[async_trait]
impl RegistryApi for RecordingApi {
    async fn create_artifact(
        &self,
        group: &str,
        content: ContentSource,
        options: CreateArtifactOptions,
    ) -> Result<ArtifactMetadata, ApiError> {
        let id = options
            .artifact_id
            .clone()
            .unwrap_or_else(|| "generated-id".to_string());
        self.record(Call::Create {
            group: group.to_string(),
            options,
            content: content.read_all().unwrap(),
        })?;
        Ok(Self::metadata(group, &id))
    }

    async fn get_latest_artifact(&self, group: &str, artifact_id: &str) -> Result<Bytes, ApiError> {
        self.record(Call::GetLatest {
            group: group.to_string(),
            id: artifact_id.to_string(),
        })?;
        Ok(self.content.clone())
    }

    async fn get_artifact_version(
        &self,
        group: &str,
        artifact_id: &str,
        version: &str,
    ) -> Result<Bytes, ApiError> {
        self.record(Call::GetVersion {
            group: group.to_string(),
            id: artifact_id.to_string(),
            version: version.to_string(),
        })?;
        Ok(self.content.clone())
    }

    async fn update_artifact(
        &self,
        group: &str,
        artifact_id: &str,
        content: ContentSource,
    ) -> Result<ArtifactMetadata, ApiError> {
        self.record(Call::Update {
            group: group.to_string(),
            id: artifact_id.to_string(),
            content: content.read_all().unwrap(),
        })?;
        Ok(Self::metadata(group, artifact_id))
    }

    async fn delete_artifact(&self, group: &str, artifact_id: &str) -> Result<(), ApiError> {
        self.record(Call::Delete {
            group: group.to_string(),
            id: artifact_id.to_string(),
        })
    }

    async fn delete_artifacts_in_group(&self, group: &str) -> Result<(), ApiError> {
        self.record(Call::DeleteAll {
            group: group.to_string(),
        })
    }

    async fn list_artifacts_in_group(
        &self,
        group: &str,
        limit: u32,
        offset: u32,
    ) -> Result<ArtifactSearchResults, ApiError> {
        self.record(Call::List {
            group: group.to_string(),
            limit,
            offset,
        })?;
        Ok(ArtifactSearchResults::default())
    }

    async fn list_artifact_versions(
        &self,
        group: &str,
        artifact_id: &str,
    ) -> Result<VersionSearchResults, ApiError> {
        self.record(Call::Versions {
            group: group.to_string(),
            id: artifact_id.to_string(),
        })?;
        Ok(VersionSearchResults {
            count: 2,
            versions: vec![
                SearchedVersion {
                    version: Some("1".into()),
                    global_id: Some(1),
                    ..Default::default()
                },
                SearchedVersion {
                    version: Some("2".into()),
                    global_id: Some(5),
                    ..Default::default()
                },
            ],
        })
    }

    async fn get_artifact_metadata(
        &self,
        group: &str,
        artifact_id: &str,
    ) -> Result<ArtifactMetadata, ApiError> {
        self.record(Call::GetMeta {
            group: group.to_string(),
            id: artifact_id.to_string(),
        })?;
        let mut meta = Self::metadata(group, artifact_id);
        let edited = self.calls().into_iter().rev().find_map(|c| match c {
            Call::UpdateMeta { metadata, .. } => Some(metadata),
            _ => None,
        });
        if let Some(edit) = edited {
            meta.name = edit.name;
            meta.description = edit.description;
        }
        Ok(meta)
    }

    async fn update_artifact_metadata(
        &self,
        group: &str,
        artifact_id: &str,
        metadata: &EditableMetadata,
    ) -> Result<(), ApiError> {
        self.record(Call::UpdateMeta {
            group: group.to_string(),
            id: artifact_id.to_string(),
            metadata: metadata.clone(),
        })
    }

    async fn get_content(&self, reference: &ContentRef) -> Result<Bytes, ApiError> {
        self.record(Call::Content(reference.clone()))?;
        Ok(self.content.clone())
    }
}

/// Hands out the same [`RecordingApi`] and remembers which ids were used
#[derive(Clone, Default)]
pub struct FakeConnector {
    pub api: RecordingApi,
    pub connected: Arc<Mutex<Vec<String>>>,
}

impl Connector for FakeConnector {
    fn connect(&self, registry_id: &str) -> Result<Box<dyn RegistryApi>, CliError> {
        self.connected.lock().unwrap().push(registry_id.to_string());
        Ok(Box::new(self.api.clone()))
    }
}

/// Prompter with a fixed answer
#[derive(Clone, Default)]
pub struct ScriptedPrompter {
    pub interactive: bool,
    pub answer: bool,
    pub asked: Arc<Mutex<Vec<String>>>,
}

impl Prompter for ScriptedPrompter {
    fn can_prompt(&self) -> bool {
        self.interactive
    }

    fn confirm(&self, message: &str) -> Result<bool, CliError> {
        self.asked.lock().unwrap().push(message.to_string());
        Ok(self.answer)
    }
}

/// Output sink that can be read back after the command ran
#[derive(Clone, Default)]
pub struct SharedBuf(pub Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn bytes(&self) -> Vec<u8> {
        self.0.lock().unwrap().clone()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.bytes()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Everything a test needs to drive a command and inspect its effects
pub struct Harness {
    pub store: CountingStore,
    pub connector: FakeConnector,
    pub prompter: ScriptedPrompter,
    pub out: SharedBuf,
}

impl Harness {
    /// Registry `dev` selected, interactive terminal that answers yes
    pub fn new() -> Self {
        Harness {
            store: CountingStore::selecting("dev"),
            connector: FakeConnector::default(),
            prompter: ScriptedPrompter {
                interactive: true,
                answer: true,
                ..Default::default()
            },
            out: SharedBuf::default(),
        }
    }

    pub fn factory(&self) -> Factory {
        Factory {
            config: Box::new(self.store.clone()),
            connector: Box::new(self.connector.clone()),
            prompter: Box::new(self.prompter.clone()),
            out: Box::new(self.out.clone()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.connector.api.calls()
    }

    pub fn connected(&self) -> Vec<String> {
        self.connector.connected.lock().unwrap().clone()
    }
}

/// Typed error behind an `anyhow::Error`
pub fn cli_error(err: &anyhow::Error) -> &CliError {
    err.downcast_ref::<CliError>()
        .unwrap_or_else(|| panic!("expected CliError, got {err:?}"))
}
