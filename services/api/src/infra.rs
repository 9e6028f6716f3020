use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use recruiting_mock::config::AuthConfig;
use recruiting_mock::recruiting::{ApiKeyPolicy, Clock, RecruitingService};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wall clock backing `dateApplied` in live responses.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub(crate) fn recruiting_service(auth: &AuthConfig) -> RecruitingService<SystemClock> {
    RecruitingService::new(
        ApiKeyPolicy::new(auth.api_key_prefix.clone()),
        Arc::new(SystemClock),
    )
}
