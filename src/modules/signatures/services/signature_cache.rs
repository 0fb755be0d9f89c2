use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::core::SubmissionError;
use crate::modules::gateways::SignatureApi;
use crate::modules::signatures::models::Signature;

/// In-memory copy of the signature list and the current default.
///
/// Filled only by an explicit [`refresh`](Self::refresh). A failed refresh
/// keeps the previous contents.
#[derive(Debug, Clone, Default)]
pub struct SignatureCache {
    signatures: Vec<Signature>,
    default_id: Option<i64>,
    refreshed_at: Option<DateTime<Utc>>,
}

impl SignatureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the cache with a known list; the default is taken from the
    /// `is_default` flags
    pub fn from_signatures(signatures: Vec<Signature>) -> Self {
        let default_id = signatures.iter().find(|s| s.is_default).map(|s| s.id);
        Self {
            signatures,
            default_id,
            refreshed_at: Some(Utc::now()),
        }
    }

    /// Reload the list and the default signature from the backend
    pub async fn refresh(&mut self, api: &dyn SignatureApi) -> Result<usize, SubmissionError> {
        let loaded = async {
            let signatures = api.list_signatures().await?;
            let default = api.default_signature().await?;
            Ok::<_, SubmissionError>((signatures, default))
        }
        .await;

        match loaded {
            Ok((signatures, default)) => {
                debug!(
                    count = signatures.len(),
                    default_id = ?default.as_ref().map(|s| s.id),
                    "Signature cache refreshed"
                );
                self.signatures = signatures;
                self.default_id = default.map(|s| s.id);
                self.refreshed_at = Some(Utc::now());
                Ok(self.signatures.len())
            }
            Err(e) => {
                warn!(error = %e, "Signature refresh failed, keeping cached list");
                Err(e)
            }
        }
    }

    pub fn find(&self, id: i64) -> Option<&Signature> {
        self.signatures.iter().find(|s| s.id == id)
    }

    /// Newest first, as returned by the backend
    pub fn all(&self) -> &[Signature] {
        &self.signatures
    }

    pub fn default_signature(&self) -> Option<&Signature> {
        self.default_id.and_then(|id| self.find(id))
    }

    pub fn is_loaded(&self) -> bool {
        self.refreshed_at.is_some()
    }
}
