use anyhow::{Context, Result};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Builder for setting up telemetry (logging and metrics).
pub struct TelemetryBuilder {
    service_name: String,
    service_version: String,
    enable_metrics: bool,
    json: bool,
    log_level: String,
}

impl TelemetryBuilder {
    /// Starts a builder for the given service.
    #[must_use]
    pub fn new(service_name: impl Into<String>, service_version: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: service_version.into(),
            enable_metrics: false,
            json: true,
            log_level: "info".to_string(),
        }
    }

    /// Installs an in-process Prometheus recorder when `enabled`.
    #[must_use]
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.enable_metrics = enabled;
        self
    }

    /// Chooses JSON or human-readable log lines.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Sets the filter used when `RUST_LOG` is not set.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Initializes the global subscriber and, if enabled, the metrics recorder.
    ///
    /// Returns the Prometheus handle used to render collected metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tracing subscriber cannot be initialized
    /// - The metrics recorder cannot be installed
    pub fn init(self) -> Result<Option<PrometheusHandle>> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let fmt_layer = if self.json {
            fmt::layer().json().with_span_events(FmtSpan::CLOSE).boxed()
        } else {
            fmt::layer().with_target(true).boxed()
        };

        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Failed to init subscriber")?;

        let handle = if self.enable_metrics {
            let handle = PrometheusBuilder::new()
                .add_global_label("service", self.service_name.clone())
                .add_global_label("version", self.service_version.clone())
                .install_recorder()
                .context("Failed to install Prometheus recorder")?;
            Some(handle)
        } else {
            None
        };

        tracing::debug!(
            service = %self.service_name,
            version = %self.service_version,
            metrics = self.enable_metrics,
            "Telemetry initialized"
        );

        Ok(handle)
    }
}
