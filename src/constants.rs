//! Process-wide constants shared by every artifact command.

/// Group used whenever `--group` is left empty
pub const DEFAULT_ARTIFACT_GROUP: &str = "default";

/// Artifact types accepted by `--type`, in the order they are reported to the user
pub const ALLOWED_ARTIFACT_TYPES: [&str; 10] = [
    "AVRO", "PROTOBUF", "JSON", "OPENAPI", "ASYNCAPI", "GRAPHQL", "KCONNECT", "WSDL", "XSD", "XML",
];

/// Indentation used for pretty-printed JSON output
pub const DEFAULT_JSON_INDENT: &str = "  ";

/// Environment variable overriding the location of the CLI configuration file
pub const CONFIG_PATH_ENV: &str = "APICURIO_ARTIFACTS_CONFIG";

/// Path of the configuration file relative to the user's config directory
pub const CONFIG_FILE: &str = "apicurio/artifacts.yaml";

/// Permission bits for files written by `get` and `download`
pub const OUTPUT_FILE_MODE: u32 = 0o600;

/// Default page size for `list`
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Upper bound accepted by the registry for a single page
pub const MAX_PAGE_LIMIT: u32 = 1000;

/// Comma separated allow-list, used verbatim in error messages
pub fn allowed_artifact_types_as_string() -> String {
    ALLOWED_ARTIFACT_TYPES.join(", ")
}
