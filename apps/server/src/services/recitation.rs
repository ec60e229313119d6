//! The recitation drill session and its completion records.

use std::sync::Arc;

use asma_core::store::{append_record, decode_records, RECORDS_KEY};
use asma_core::{
    CompletionRecord, Effect, ListenToken, RecitationConfig, RecitationError, RecitationSession,
    RecognitionErrorKind,
};
use tokio::sync::Mutex;

use crate::db::Database;
use crate::error::Result;
use crate::models::RecitationResponse;

/// Owns the single recitation session.
pub struct RecitationService {
    db: Arc<Database>,
    session: Mutex<RecitationSession>,
}

impl RecitationService {
    pub fn new(db: Arc<Database>, config: RecitationConfig) -> Self {
        Self {
            db,
            session: Mutex::new(RecitationSession::new(config)),
        }
    }

    pub async fn snapshot(&self) -> RecitationResponse {
        let session = self.session.lock().await;
        RecitationResponse {
            session: session.snapshot(),
            effects: Vec::new(),
        }
    }

    pub async fn start(&self) -> Result<RecitationResponse> {
        self.apply(|session| session.start()).await
    }

    pub async fn pause(&self) -> Result<RecitationResponse> {
        self.apply(|session| session.pause()).await
    }

    pub async fn skip(&self) -> Result<RecitationResponse> {
        self.apply(|session| session.skip()).await
    }

    pub async fn reset(&self) -> Result<RecitationResponse> {
        self.apply(|session| Ok(session.reset())).await
    }

    pub async fn on_result(
        &self,
        token: ListenToken,
        transcript: &str,
    ) -> Result<RecitationResponse> {
        self.apply(|session| session.on_result(token, transcript))
            .await
    }

    pub async fn on_error(
        &self,
        token: ListenToken,
        kind: &RecognitionErrorKind,
    ) -> Result<RecitationResponse> {
        self.apply(|session| session.on_error(token, kind)).await
    }

    pub async fn on_end(&self, token: ListenToken) -> Result<RecitationResponse> {
        self.apply(|session| Ok(session.on_end(token))).await
    }

    /// Stored completion records, oldest first.
    pub async fn records(&self) -> Result<Vec<CompletionRecord>> {
        let raw = self.db.get_value(RECORDS_KEY).await?;
        Ok(decode_records(raw.as_deref()))
    }

    /// Run one transition and persist any completion it produced.
    ///
    /// The transition runs on a copy that replaces the session only once the
    /// record is stored, so a failed write leaves the session where it was.
    async fn apply<F>(&self, transition: F) -> Result<RecitationResponse>
    where
        F: FnOnce(&mut RecitationSession) -> std::result::Result<Vec<Effect>, RecitationError>,
    {
        let mut session = self.session.lock().await;
        let mut next = session.clone();
        let effects = transition(&mut next)?;

        for effect in &effects {
            if let Effect::Completed { record } = effect {
                self.store_record(record.clone()).await?;
            }
        }

        *session = next;
        Ok(RecitationResponse {
            session: session.snapshot(),
            effects,
        })
    }

    async fn store_record(&self, record: CompletionRecord) -> Result<()> {
        tracing::debug!(completion_time = record.completion_time, "storing completion record");
        let raw = self.db.get_value(RECORDS_KEY).await?;
        let value = append_record(raw.as_deref(), record)?;
        self.db.put_value(RECORDS_KEY, &value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asma_core::RecitationPhase;

    #[tokio::test]
    async fn test_failed_record_write_keeps_session() {
        // No migrations: every write fails until the table exists.
        let db = Arc::new(Database::connect("sqlite::memory:").await.unwrap());
        let service = RecitationService::new(db.clone(), RecitationConfig::default());

        service.start().await.unwrap();
        for _ in 0..98 {
            service.skip().await.unwrap();
        }

        assert!(service.skip().await.is_err());
        let snapshot = service.snapshot().await.session;
        assert_eq!(snapshot.phase, RecitationPhase::Reciting);
        assert_eq!(snapshot.position, 98);

        db.run_migrations().await.unwrap();
        let response = service.skip().await.unwrap();
        assert_eq!(response.session.phase, RecitationPhase::Completed);
        assert_eq!(service.records().await.unwrap().len(), 1);
    }
}
