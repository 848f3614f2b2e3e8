use life_batteries::config::AssessmentConfig;
use life_batteries::workflows::assessment::{
    LogNotifier, NotificationRecord, NotifyError, OrderingMode, Question, QuestionCatalog,
    QuestionOrdering, RandomOrdering, ResultsNotifier, SeededOrdering,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Posts each record as a form to the configured webhook on a background task.
#[derive(Clone)]
pub(crate) struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
    pending: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl WebhookNotifier {
    pub(crate) fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| NotifyError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
            pending: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Wait for every in-flight delivery.
    pub(crate) async fn drain(&self) {
        let handles: Vec<JoinHandle<()>> = match self.pending.lock() {
            Ok(mut guard) => guard.drain(..).collect(),
            Err(_) => return,
        };

        for handle in handles {
            if let Err(err) = handle.await {
                warn!(%err, "webhook delivery task aborted");
            }
        }
    }
}

impl ResultsNotifier for WebhookNotifier {
    fn notify(&self, record: NotificationRecord) -> Result<(), NotifyError> {
        let runtime = Handle::try_current()
            .map_err(|err| NotifyError::Transport(format!("no async runtime: {err}")))?;

        let client = self.client.clone();
        let url = self.url.clone();
        let fields = record.form_fields();
        let handle = runtime.spawn(async move {
            match client.post(&url).form(&fields).send().await {
                Ok(response) if response.status().is_success() => {
                    info!(status = %response.status(), "results delivered to webhook");
                }
                Ok(response) => {
                    warn!(status = %response.status(), "webhook rejected results");
                }
                Err(err) => {
                    warn!(%err, "webhook delivery failed");
                }
            }
        });

        self.pending
            .lock()
            .map_err(|_| NotifyError::Transport("pending delivery list poisoned".to_string()))?
            .push(handle);
        Ok(())
    }
}

/// Notifier chosen from configuration: webhook when a URL is set, logs otherwise.
#[derive(Clone)]
pub(crate) enum ConfiguredNotifier {
    Webhook(WebhookNotifier),
    Log(LogNotifier),
}

impl ConfiguredNotifier {
    pub(crate) fn from_config(config: &AssessmentConfig) -> Result<Self, NotifyError> {
        match &config.webhook_url {
            Some(url) => Ok(Self::Webhook(WebhookNotifier::new(
                url.clone(),
                config.webhook_timeout,
            )?)),
            None => Ok(Self::Log(LogNotifier)),
        }
    }

    pub(crate) async fn drain(&self) {
        if let Self::Webhook(webhook) = self {
            webhook.drain().await;
        }
    }
}

impl ResultsNotifier for ConfiguredNotifier {
    fn notify(&self, record: NotificationRecord) -> Result<(), NotifyError> {
        match self {
            Self::Webhook(webhook) => webhook.notify(record),
            Self::Log(log) => log.notify(record),
        }
    }
}

/// Random ordering unless a seed pins the sequence.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ConfiguredOrdering {
    Random(RandomOrdering),
    Seeded(SeededOrdering),
}

impl ConfiguredOrdering {
    pub(crate) fn new(mode: OrderingMode, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(SeededOrdering::new(mode, seed)),
            None => Self::Random(RandomOrdering::new(mode)),
        }
    }
}

impl QuestionOrdering for ConfiguredOrdering {
    fn arrange(&self, catalog: &QuestionCatalog) -> Vec<Question> {
        match self {
            Self::Random(ordering) => ordering.arrange(catalog),
            Self::Seeded(ordering) => ordering.arrange(catalog),
        }
    }
}

pub(crate) fn parse_ordering(raw: &str) -> Result<OrderingMode, String> {
    raw.parse::<OrderingMode>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_configured_ordering_is_stable() {
        let catalog = QuestionCatalog::standard();
        let ordering = ConfiguredOrdering::new(OrderingMode::Shuffled, Some(5));
        assert_eq!(ordering.arrange(&catalog), ordering.arrange(&catalog));
    }

    #[test]
    fn log_notifier_is_used_without_webhook() {
        let config = AssessmentConfig {
            ordering: OrderingMode::default(),
            webhook_url: None,
            webhook_timeout: Duration::from_secs(1),
        };
        let notifier = ConfiguredNotifier::from_config(&config).expect("notifier builds");
        assert!(matches!(notifier, ConfiguredNotifier::Log(_)));
    }

    #[test]
    fn webhook_outside_runtime_reports_transport_error() {
        let notifier = WebhookNotifier::new("http://127.0.0.1:9/hook", Duration::from_secs(1))
            .expect("client builds");
        let record = NotificationRecord {
            first_name: "Camille".to_string(),
            last_name: "Martin".to_string(),
            email: "camille@example.com".to_string(),
            phone: "Non renseigné".to_string(),
            timestamp: "2025-01-01T00:00:00.000Z".to_string(),
            results: "{}".to_string(),
        };

        assert!(matches!(
            notifier.notify(record),
            Err(NotifyError::Transport(_))
        ));
    }

    #[test]
    fn parse_ordering_rejects_unknown_modes() {
        assert_eq!(parse_ordering("blocks"), Ok(OrderingMode::BatteryBlocks));
        assert!(parse_ordering("sideways").is_err());
    }
}
