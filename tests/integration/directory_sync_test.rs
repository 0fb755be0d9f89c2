//! Vendor, signature and company settings management
//!
//! Every change goes to the backend first and the matching cache is
//! reloaded afterwards.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use helpers::*;
use invoice_desk::core::{AppError, SubmissionError, ValidationError};
use invoice_desk::gateways::{HttpBackend, SettingsApi};
use invoice_desk::settings::SettingsService;
use invoice_desk::signatures::{SignatureCache, SignatureDetails, SignatureService};
use invoice_desk::vendors::{VendorCache, VendorDetails, VendorService};

#[actix_web::test]
async fn test_vendor_lifecycle_over_http() {
    let state = Arc::new(MockBackend::default().with_vendor(1, "Zephyr Foods", "", ""));
    let srv = spawn_mock_backend(state.clone());
    let backend = Arc::new(HttpBackend::new(&backend_config(&srv)).unwrap());
    let service = VendorService::new(backend.clone());
    let mut cache = VendorCache::new();

    let id = service
        .add_vendor(
            &mut cache,
            VendorDetails::new("Acme Farms", "1 Orchard Rd", "555-0100"),
        )
        .await
        .unwrap();
    assert_eq!(id, 2);

    // Backend sorts by name
    let names: Vec<&str> = cache.all().iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Acme Farms", "Zephyr Foods"]);

    service
        .update_vendor(&mut cache, id, VendorDetails::new("Acme Farms Ltd", "2 Orchard Rd", ""))
        .await
        .unwrap();
    let vendor = cache.find(id).unwrap();
    assert_eq!(vendor.name, "Acme Farms Ltd");
    assert_eq!(vendor.address, "2 Orchard Rd");

    service.delete_vendor(&mut cache, id).await.unwrap();
    assert!(cache.find(id).is_none());
    assert_eq!(cache.all().len(), 1);
}

#[actix_web::test]
async fn test_vendor_errors() {
    let state = Arc::new(MockBackend::default());
    let srv = spawn_mock_backend(state.clone());
    let backend = Arc::new(HttpBackend::new(&backend_config(&srv)).unwrap());
    let service = VendorService::new(backend.clone());
    let mut cache = VendorCache::new();

    let err = service
        .add_vendor(&mut cache, VendorDetails::new("  ", "", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(ValidationError::InvalidInput(_))));
    assert!(state.vendors.lock().unwrap().is_empty());

    let err = service
        .update_vendor(&mut cache, 99, VendorDetails::new("Ghost", "", ""))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Vendor not found");
}

#[tokio::test]
async fn test_failed_refresh_keeps_cached_vendors() {
    let backend = Arc::new(InMemoryBackend::new().with_vendor(3, "Birch Mill"));
    let mut cache = VendorCache::new();
    cache.refresh(backend.as_ref()).await.unwrap();

    backend.set_offline(true);
    let err = cache.refresh(backend.as_ref()).await.unwrap_err();
    assert!(matches!(err, SubmissionError::NetworkFailure(_)));
    assert_eq!(cache.find(3).map(|v| v.name.as_str()), Some("Birch Mill"));
}

#[tokio::test]
async fn test_saved_vendor_reported_when_reload_fails() {
    let backend = Arc::new(InMemoryBackend::new().with_vendor(3, "Birch Mill"));
    let service = VendorService::new(backend.clone());
    let mut cache = VendorCache::new();
    cache.refresh(backend.as_ref()).await.unwrap();

    backend.set_lists_offline(true);
    let id = service
        .add_vendor(&mut cache, VendorDetails::new("Acme Farms", "", ""))
        .await
        .unwrap();
    assert_eq!(id, 4);
    assert_eq!(backend.vendors.lock().unwrap().len(), 2);

    // Stale until the next successful refresh
    assert!(cache.find(id).is_none());

    service
        .update_vendor(&mut cache, id, VendorDetails::new("Acme Farms Ltd", "", ""))
        .await
        .unwrap();
    service.delete_vendor(&mut cache, 3).await.unwrap();
    assert_eq!(cache.find(3).map(|v| v.name.as_str()), Some("Birch Mill"));

    backend.set_lists_offline(false);
    cache.refresh(backend.as_ref()).await.unwrap();
    let names: Vec<&str> = cache.all().iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Acme Farms Ltd"]);
}

#[tokio::test]
async fn test_saved_signature_reported_when_reload_fails() {
    let backend = Arc::new(InMemoryBackend::new().with_signature(1, "Jane Roe", true));
    let service = SignatureService::new(backend.clone());
    let mut cache = SignatureCache::new();
    cache.refresh(backend.as_ref()).await.unwrap();

    backend.set_lists_offline(true);
    let uploaded = service
        .upload(&mut cache, png_upload("sam.png"), SignatureDetails::new("Sam", "Clerk"))
        .await
        .unwrap();
    assert_eq!(backend.signatures.lock().unwrap().len(), 2);
    assert!(cache.find(uploaded.id).is_none());

    service.set_default(&mut cache, uploaded.id).await.unwrap();
    service
        .edit(&mut cache, uploaded.id, SignatureDetails::new("Sam Clerk", "Clerk"))
        .await
        .unwrap();
    service.delete(&mut cache, 1).await.unwrap();
    assert_eq!(cache.default_signature().map(|s| s.id), Some(1));
}

#[tokio::test]
async fn test_signature_upload_and_default() {
    let backend = Arc::new(InMemoryBackend::new().with_signature(1, "Jane Roe", true));
    let service = SignatureService::new(backend.clone());
    let mut cache = SignatureCache::new();

    let uploaded = service
        .upload(
            &mut cache,
            png_upload("sam.png"),
            SignatureDetails::new("", "Clerk"),
        )
        .await
        .unwrap();
    assert_eq!(uploaded.name, "Unknown");
    assert_eq!(cache.all().len(), 2);
    assert_eq!(cache.default_signature().map(|s| s.id), Some(1));

    service.set_default(&mut cache, uploaded.id).await.unwrap();
    assert_eq!(cache.default_signature().map(|s| s.id), Some(uploaded.id));
    assert_eq!(
        cache.default_signature().map(|s| s.image_link()).as_deref(),
        Some("/signatures/sam.png")
    );

    service
        .edit(&mut cache, uploaded.id, SignatureDetails::new("Sam Clerk", "Clerk"))
        .await
        .unwrap();
    assert_eq!(cache.find(uploaded.id).unwrap().label(), "Sam Clerk (Clerk)");

    service.delete(&mut cache, 1).await.unwrap();
    assert!(cache.find(1).is_none());
}

#[tokio::test]
async fn test_non_image_upload_rejected_locally() {
    let backend = Arc::new(InMemoryBackend::new());
    let service = SignatureService::new(backend.clone());
    let mut cache = SignatureCache::new();

    let err = service
        .upload(&mut cache, text_upload("notes.txt"), SignatureDetails::new("Sam", ""))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid input: File must be an image");
    assert!(backend.uploads.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn test_default_signature_over_http() {
    let state = Arc::new(
        MockBackend::default()
            .with_signature(1, "Jane Roe", "jane.png", false)
            .with_signature(2, "Sam Clerk", r"C:\app\signatures\sam.png", true),
    );
    let srv = spawn_mock_backend(state.clone());
    let backend = HttpBackend::new(&backend_config(&srv)).unwrap();

    let mut cache = SignatureCache::new();
    assert_eq!(cache.refresh(&backend).await.unwrap(), 2);

    let default = cache.default_signature().unwrap();
    assert_eq!(default.id, 2);
    assert_eq!(default.image_file_name(), "sam.png");
}

#[actix_web::test]
async fn test_hst_gst_set_and_clear() {
    let state = Arc::new(MockBackend::default());
    let srv = spawn_mock_backend(state.clone());
    let backend = Arc::new(HttpBackend::new(&backend_config(&srv)).unwrap());
    let settings = SettingsService::new(backend.clone());

    assert!(settings.set_hst_gst("   ").await.is_err());

    settings.set_hst_gst(" 747957900 RT0001 ").await.unwrap();
    let hst = settings.hst_gst().await.unwrap();
    assert_eq!(hst.number(), Some("747957900 RT0001"));

    settings.clear_hst_gst().await.unwrap();
    let hst = settings.hst_gst().await.unwrap();
    assert_eq!(hst.number(), None);
}

#[tokio::test]
async fn test_company_settings_and_logo() {
    let backend = Arc::new(InMemoryBackend::new());
    let settings = SettingsService::new(backend.clone());

    let url = settings.upload_logo(png_upload("logo.png")).await.unwrap();
    assert_eq!(url, "/logo.png");
    assert!(settings.upload_logo(text_upload("logo.txt")).await.is_err());

    let mut update = settings.load().await.unwrap().to_update();
    assert_eq!(update.default_logo_path.as_deref(), Some("/logo.png"));
    update.company_name = "Maple Wood Ranch".to_string();
    settings.save(&update).await.unwrap();

    let company = settings.load().await.unwrap();
    assert_eq!(company.company_name.as_deref(), Some("Maple Wood Ranch"));
    assert_eq!(company.logo_link().as_deref(), Some("/logo.png"));
}

#[actix_web::test]
async fn test_signature_upload_edit_delete_over_http() {
    let state = Arc::new(MockBackend::default().with_signature(1, "Jane Roe", "jane.png", true));
    let srv = spawn_mock_backend(state.clone());
    let backend = Arc::new(HttpBackend::new(&backend_config(&srv)).unwrap());
    let service = SignatureService::new(backend.clone());
    let mut cache = SignatureCache::new();

    let uploaded = service
        .upload(
            &mut cache,
            png_upload("sam.png"),
            SignatureDetails::new("Sam Clerk", "Clerk"),
        )
        .await
        .unwrap();
    assert_eq!(uploaded.id, 2);
    assert_eq!(uploaded.name, "Sam Clerk");
    assert_eq!(uploaded.position, "Clerk");
    assert_eq!(uploaded.image_path, "sam.png");
    assert!(!uploaded.is_default);

    let uploads = state.uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].path, "/api/signatures/upload");
    let file = uploads[0].part("signature").unwrap();
    assert_eq!(file.file_name.as_deref(), Some("sam.png"));
    assert_eq!(file.content_type.as_deref(), Some("image/png"));
    assert_eq!(file.data, png_upload("sam.png").bytes);
    assert_eq!(uploads[0].part("name").unwrap().text(), "Sam Clerk");
    assert_eq!(uploads[0].part("position").unwrap().text(), "Clerk");

    // Cache reloaded from the listing, which stores the full path
    assert_eq!(cache.all().len(), 2);
    assert_eq!(cache.default_signature().map(|s| s.id), Some(1));
    assert_eq!(cache.find(2).unwrap().image_file_name(), "sam.png");

    service
        .edit(&mut cache, 2, SignatureDetails::new("Samuel Clerk", "Manager"))
        .await
        .unwrap();
    {
        let signatures = state.signatures.lock().unwrap();
        assert_eq!(signatures[1]["name"], "Samuel Clerk");
        assert_eq!(signatures[1]["position"], "Manager");
    }
    assert_eq!(cache.find(2).unwrap().label(), "Samuel Clerk (Manager)");

    service.delete(&mut cache, 1).await.unwrap();
    assert_eq!(state.signatures.lock().unwrap().len(), 1);
    assert!(cache.find(1).is_none());
    assert!(cache.default_signature().is_none());
}

#[actix_web::test]
async fn test_logo_upload_and_company_settings_over_http() {
    let state = Arc::new(MockBackend::default());
    let srv = spawn_mock_backend(state.clone());
    let backend = Arc::new(HttpBackend::new(&backend_config(&srv)).unwrap());
    let settings = SettingsService::new(backend.clone());

    let url = settings.upload_logo(png_upload("logo.png")).await.unwrap();
    assert_eq!(url, "/logo.png");

    let uploads = state.uploads();
    assert_eq!(uploads[0].path, "/api/settings/logo");
    let logo = uploads[0].part("logo").unwrap();
    assert_eq!(logo.file_name.as_deref(), Some("logo.png"));
    assert_eq!(logo.content_type.as_deref(), Some("image/png"));

    let company = settings.load().await.unwrap();
    assert_eq!(company.default_logo_url.as_deref(), Some("/logo.png"));
    assert_eq!(company.logo_link().as_deref(), Some("/logo.png"));
    assert!(company.company_name.is_none());

    let mut update = company.to_update();
    update.company_name = "Maple Wood Ranch".to_string();
    update.default_shipping_terms = "Net 30".to_string();
    settings.save(&update).await.unwrap();

    let sent = state.company_updates.lock().unwrap()[0].clone();
    assert_eq!(sent["company_name"], "Maple Wood Ranch");
    assert_eq!(sent["company_phone"], "");
    assert_eq!(sent["default_logo_path"], "/logo.png");
    assert_eq!(sent["default_shipping_terms"], "Net 30");

    // The logo URL leaves the stored file untouched
    assert_eq!(
        state.company.lock().unwrap()["default_logo_path"],
        r"C:\invoice-app\public\logo.png"
    );

    let company = settings.load().await.unwrap();
    assert_eq!(company.company_name.as_deref(), Some("Maple Wood Ranch"));
    assert_eq!(company.default_shipping_terms.as_deref(), Some("Net 30"));
    assert_eq!(company.logo_link().as_deref(), Some("/logo.png"));
}

#[actix_web::test]
async fn test_backend_upload_rejection_is_verbatim() {
    let state = Arc::new(MockBackend::default());
    let srv = spawn_mock_backend(state.clone());
    let backend = HttpBackend::new(&backend_config(&srv)).unwrap();

    let err = backend.upload_logo(text_upload("logo.txt")).await.unwrap_err();
    assert_eq!(
        err,
        SubmissionError::ServerRejected("File must be an image".to_string())
    );
    assert_eq!(state.uploads()[0].part("logo").unwrap().text(), "not an image");
}
