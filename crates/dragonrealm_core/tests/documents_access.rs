use chrono::Utc;
use dragonrealm_core::{Document, DocumentError, DocumentService, TokenService};

fn seeded_service() -> DocumentService {
    let mut documents = DocumentService::new(TokenService::new("test-secret"));
    documents.add_document(1, Document::new("hoard-ledger.pdf", "2026-08-01", "1.2 MB"));
    documents.add_document(1, Document::new("wing-maintenance.md", "2026-08-03", "4 KB"));
    documents
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[test]
fn missing_header_is_missing_token() {
    let documents = seeded_service();

    let err = documents.list(None).unwrap_err();
    assert_eq!(err, DocumentError::MissingToken);
    assert_eq!(err.to_string(), "No token provided");
}

#[test]
fn header_without_a_token_is_invalid() {
    let documents = seeded_service();

    let err = documents.list(Some("Bearer")).unwrap_err();
    assert_eq!(err, DocumentError::InvalidToken);
    assert_eq!(err.to_string(), "Invalid token");
}

#[test]
fn garbage_token_is_invalid() {
    let documents = seeded_service();

    let err = documents.list(Some(&bearer("not-a-token"))).unwrap_err();
    assert_eq!(err, DocumentError::InvalidToken);
}

#[test]
fn token_signed_elsewhere_is_invalid() {
    let documents = seeded_service();
    let foreign = TokenService::new("other-secret")
        .issue(1, Utc::now())
        .unwrap();

    let err = documents.list(Some(&bearer(&foreign))).unwrap_err();
    assert_eq!(err, DocumentError::InvalidToken);
}

#[test]
fn valid_token_lists_that_users_documents() {
    let documents = seeded_service();
    let token = TokenService::new("test-secret").issue(1, Utc::now()).unwrap();

    let listed = documents.list(Some(&bearer(&token))).unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "hoard-ledger.pdf");
}

#[test]
fn valid_token_for_user_without_documents_lists_empty() {
    let documents = seeded_service();
    let token = TokenService::new("test-secret").issue(2, Utc::now()).unwrap();

    assert!(documents.list(Some(&bearer(&token))).unwrap().is_empty());
}
