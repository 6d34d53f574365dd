//! Operational helpers: logging setup and telemetry byte sources.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use erangel_types::{config::OpsConfig, telemetry::Telemetry, ErangelError, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_tracing(config: &OpsConfig) -> Result<()> {
    let filter = log_filter(&config.log_level)?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| ErangelError::Ops(format!("tracing init error: {err}")))?;
    Ok(())
}

/// Unparseable levels fall back to `info`.
fn log_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|err| ErangelError::Ops(format!("failed to create log filter: {err}")))
}

/// Anything that can hand over a complete telemetry document.
///
/// Implementations must deliver the whole payload; decoding never starts on a
/// partial buffer.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    fn describe(&self) -> String;
    async fn fetch(&self) -> Result<Vec<u8>>;
}

/// Telemetry document stored on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TelemetrySource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(bytes)
    }
}

/// Already-buffered document, mostly for tests and piping.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    bytes: Vec<u8>,
}

impl MemorySource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

#[async_trait]
impl TelemetrySource for MemorySource {
    fn describe(&self) -> String {
        format!("<memory: {} bytes>", self.bytes.len())
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

/// Fetch the full document from `source`, then decode and aggregate it.
pub async fn load_telemetry<S: TelemetrySource + ?Sized>(source: &S) -> Result<Telemetry> {
    let bytes = source.fetch().await?;
    info!(
        "Fetched {} bytes of telemetry from {}",
        bytes.len(),
        source.describe()
    );
    erangel_telemetry::parse_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_source_round_trip() {
        let source = MemorySource::new(
            r#"[{"_T":"LogMatchStart"},{"_T":"LogPlayerPosition","character":{"name":"A","accountId":"acc1"}}]"#,
        );
        let telemetry = load_telemetry(&source).await.expect("load telemetry");
        assert!(telemetry.match_started);
        assert_eq!(telemetry.player("acc1").unwrap().history, vec![1]);
    }

    #[tokio::test]
    async fn missing_file_is_read_failure() {
        let source = FileSource::new("/nonexistent/erangel/telemetry.json");
        let err = load_telemetry(&source).await.unwrap_err();
        assert!(matches!(err, ErangelError::ReadFailure(_)));
    }

    #[tokio::test]
    async fn file_source_reads_whole_document() {
        let path = std::env::temp_dir().join("erangel-file-source-test.json");
        tokio::fs::write(&path, br#"[{"_T":"LogMatchDefinition","matchId":"m1","pingQuality":"high"}]"#)
            .await
            .expect("write temp telemetry");

        let source = FileSource::new(&path);
        assert_eq!(source.path(), path.as_path());
        let telemetry = load_telemetry(&source).await.expect("load telemetry");
        assert_eq!(telemetry.match_id, "m1");
        assert_eq!(telemetry.ping_quality, "high");
        assert!(!telemetry.match_started);

        tokio::fs::remove_file(&path).await.expect("cleanup temp telemetry");
    }

    #[test]
    fn invalid_level_falls_back_to_info() {
        let filter = log_filter("erangel=verbose").expect("fallback filter");
        assert_eq!(filter.to_string(), "info");
        let filter = log_filter("erangel_telemetry=debug").expect("valid filter");
        assert_eq!(filter.to_string(), "erangel_telemetry=debug");
    }

    #[test]
    fn tracing_initialises_once() {
        // only this test installs the global subscriber in this binary
        let config = OpsConfig {
            log_level: "erangel=verbose".into(),
        };
        init_tracing(&config).expect("first init with fallback level");
        let second = init_tracing(&config);
        assert!(matches!(second, Err(ErangelError::Ops(_))));
    }
}
