use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use super::gateway_trait::{PersistenceGateway, SettingsApi, SignatureApi, VendorApi};
use crate::config::BackendConfig;
use crate::core::{AppError, ImageUpload, Result, SubmissionError};
use crate::modules::invoices::models::{
    InvoiceId, InvoiceRecord, InvoiceSubmission, PersistedInvoice,
};
use crate::modules::settings::models::{CompanySettings, CompanySettingsUpdate};
use crate::modules::signatures::models::{Signature, SignatureDetails};
use crate::modules::taxes::HstGstSettings;
use crate::modules::vendors::models::{Vendor, VendorDetails};

/// JSON-over-HTTP client for the invoicing backend
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    success: bool,
    invoice_id: Option<InvoiceId>,
    #[serde(default)]
    pdf_path: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct NextNumberResponse {
    invoice_number: String,
}

#[derive(Deserialize)]
struct CreatedResponse {
    id: i64,
}

#[derive(Deserialize)]
struct LogoResponse {
    logo_url: String,
}

#[derive(Serialize)]
struct HstGstRequest<'a> {
    number: &'a str,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> std::result::Result<T, SubmissionError> {
        debug!(path = %path, "GET");
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(SubmissionError::from_transport)?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> std::result::Result<T, SubmissionError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        debug!(path = %path, "POST");
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(SubmissionError::from_transport)?;
        decode(response).await
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> std::result::Result<T, SubmissionError> {
        debug!(path = %path, "POST multipart");
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .map_err(SubmissionError::from_transport)?;
        decode(response).await
    }
}

fn image_part(upload: ImageUpload) -> std::result::Result<Part, SubmissionError> {
    Part::bytes(upload.bytes)
        .file_name(upload.file_name)
        .mime_str(&upload.content_type)
        .map_err(SubmissionError::from_transport)
}

async fn decode<T: DeserializeOwned>(response: Response) -> std::result::Result<T, SubmissionError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(SubmissionError::from_transport)?;
    interpret(status, &body)
}

/// An `{"error": ...}` body wins over the status code; otherwise any
/// non-success status is a network failure.
fn interpret<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> std::result::Result<T, SubmissionError> {
    if let Ok(ErrorBody { error }) = serde_json::from_str::<ErrorBody>(body) {
        return Err(SubmissionError::ServerRejected(error));
    }

    if !status.is_success() {
        return Err(SubmissionError::NetworkFailure(format!(
            "Backend returned {}",
            status
        )));
    }

    serde_json::from_str(body).map_err(|e| {
        SubmissionError::NetworkFailure(format!("Invalid response from backend: {}", e))
    })
}

#[async_trait]
impl PersistenceGateway for HttpBackend {
    async fn submit(
        &self,
        submission: &InvoiceSubmission,
    ) -> std::result::Result<PersistedInvoice, SubmissionError> {
        let response: SubmitResponse = self
            .post_json("/api/invoices", submission)
            .await
            .map_err(|e| {
                error!(
                    invoice_number = %submission.invoice_number,
                    error = %e,
                    "Invoice submission failed"
                );
                e
            })?;

        let invoice_id = match (response.success, response.invoice_id) {
            (true, Some(id)) => id,
            _ => return Err(SubmissionError::ServerRejected("Unknown error".to_string())),
        };

        info!(
            invoice_id = %invoice_id,
            invoice_number = %submission.invoice_number,
            "Invoice stored by backend"
        );

        Ok(PersistedInvoice {
            invoice_id,
            artifact_path: response.pdf_path.unwrap_or_default(),
            message: response.message,
        })
    }

    async fn next_invoice_number(&self) -> std::result::Result<String, SubmissionError> {
        let response: NextNumberResponse = self.get("/api/next-invoice-number").await?;
        Ok(response.invoice_number)
    }

    async fn list_invoices(&self) -> std::result::Result<Vec<InvoiceRecord>, SubmissionError> {
        self.get("/api/invoices").await
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[async_trait]
impl VendorApi for HttpBackend {
    async fn list_vendors(&self) -> std::result::Result<Vec<Vendor>, SubmissionError> {
        self.get("/api/vendors").await
    }

    async fn create_vendor(
        &self,
        details: &VendorDetails,
    ) -> std::result::Result<i64, SubmissionError> {
        let created: CreatedResponse = self.post_json("/api/vendors", details).await?;
        Ok(created.id)
    }

    async fn update_vendor(
        &self,
        id: i64,
        details: &VendorDetails,
    ) -> std::result::Result<(), SubmissionError> {
        let response = self
            .client
            .put(self.url(&format!("/api/vendors/{}", id)))
            .json(details)
            .send()
            .await
            .map_err(SubmissionError::from_transport)?;
        decode::<serde_json::Value>(response).await?;
        Ok(())
    }

    async fn delete_vendor(&self, id: i64) -> std::result::Result<(), SubmissionError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/vendors/{}", id)))
            .send()
            .await
            .map_err(SubmissionError::from_transport)?;
        decode::<serde_json::Value>(response).await?;
        Ok(())
    }
}

#[async_trait]
impl SignatureApi for HttpBackend {
    async fn list_signatures(&self) -> std::result::Result<Vec<Signature>, SubmissionError> {
        self.get("/api/signatures").await
    }

    async fn default_signature(&self) -> std::result::Result<Option<Signature>, SubmissionError> {
        self.get("/api/signatures/default").await
    }

    async fn upload_signature(
        &self,
        upload: ImageUpload,
        details: &SignatureDetails,
    ) -> std::result::Result<Signature, SubmissionError> {
        let form = Form::new()
            .part("signature", image_part(upload)?)
            .text("name", details.name.clone())
            .text("position", details.position.clone());

        self.post_form("/api/signatures/upload", form).await
    }

    async fn set_default_signature(&self, id: i64) -> std::result::Result<(), SubmissionError> {
        let response = self
            .client
            .post(self.url(&format!("/api/signatures/{}/set-default", id)))
            .send()
            .await
            .map_err(SubmissionError::from_transport)?;
        decode::<serde_json::Value>(response).await?;
        Ok(())
    }

    async fn edit_signature(
        &self,
        id: i64,
        details: &SignatureDetails,
    ) -> std::result::Result<(), SubmissionError> {
        self.post_json::<_, serde_json::Value>(&format!("/api/signatures/{}/edit", id), details)
            .await?;
        Ok(())
    }

    async fn delete_signature(&self, id: i64) -> std::result::Result<(), SubmissionError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/signatures/{}/delete", id)))
            .send()
            .await
            .map_err(SubmissionError::from_transport)?;
        decode::<serde_json::Value>(response).await?;
        Ok(())
    }
}

#[async_trait]
impl SettingsApi for HttpBackend {
    async fn company_settings(&self) -> std::result::Result<CompanySettings, SubmissionError> {
        self.get("/api/settings/company").await
    }

    async fn update_company_settings(
        &self,
        update: &CompanySettingsUpdate,
    ) -> std::result::Result<(), SubmissionError> {
        self.post_json::<_, serde_json::Value>("/api/settings/company", update)
            .await?;
        Ok(())
    }

    async fn upload_logo(&self, upload: ImageUpload) -> std::result::Result<String, SubmissionError> {
        let form = Form::new().part("logo", image_part(upload)?);
        let response: LogoResponse = self.post_form("/api/settings/logo", form).await?;
        Ok(response.logo_url)
    }

    async fn hst_gst_settings(&self) -> std::result::Result<HstGstSettings, SubmissionError> {
        self.get("/api/settings/hst-gst").await
    }

    async fn set_hst_gst_number(&self, number: &str) -> std::result::Result<(), SubmissionError> {
        self.post_json::<_, serde_json::Value>("/api/hst-gst", &HstGstRequest { number })
            .await?;
        Ok(())
    }
}
