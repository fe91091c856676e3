//! Use-case tests against in-memory implementations.

use std::sync::{Arc, Mutex};

use platform::mailer::{MailError, Mailer};

use crate::application::config::AccessConfig;
use crate::application::grant_token::parse_grant_token;
use crate::application::{
    IssueGrantInput, IssueGrantUseCase, RedeemCodeInput, RedeemCodeUseCase, RequestAccessInput,
    RequestAccessUseCase,
};
use crate::domain::entity::AccessGrant;
use crate::domain::repository::GrantRepository;
use crate::domain::value_object::{access_code::AccessCode, email::Email};
use crate::error::{AccessError, AccessResult};
use kernel::id::GrantId;

// ============================================================================
// In-memory fakes
// ============================================================================

#[derive(Clone, Default)]
struct MemGrantRepository {
    grants: Arc<Mutex<Vec<AccessGrant>>>,
}

impl MemGrantRepository {
    fn grant_for(&self, email: &str) -> Option<AccessGrant> {
        self.grants
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.email.as_str() == email)
            .cloned()
    }
}

impl GrantRepository for MemGrantRepository {
    async fn create(&self, grant: &AccessGrant) -> AccessResult<()> {
        let mut grants = self.grants.lock().unwrap();
        if grants.iter().any(|g| g.email == grant.email) {
            return Err(AccessError::DuplicateRequest);
        }
        grants.push(grant.clone());
        Ok(())
    }

    async fn find_by_code(&self, code: &AccessCode) -> AccessResult<Option<AccessGrant>> {
        Ok(self
            .grants
            .lock()
            .unwrap()
            .iter()
            .find(|g| &g.access_code == code)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AccessResult<Option<AccessGrant>> {
        Ok(self
            .grants
            .lock()
            .unwrap()
            .iter()
            .find(|g| &g.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AccessResult<bool> {
        Ok(self
            .grants
            .lock()
            .unwrap()
            .iter()
            .any(|g| &g.email == email))
    }

    async fn mark_redeemed(&self, grant_id: &GrantId) -> AccessResult<bool> {
        // Check-and-set under one lock, mirroring the conditional UPDATE
        let mut grants = self.grants.lock().unwrap();
        if let Some(grant) = grants.iter_mut().find(|g| &g.grant_id == grant_id) {
            if !grant.is_redeemed() {
                grant.redeem();
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Wrapper that yields after the code lookup, so two in-flight redemptions
/// both see an unredeemed grant before either marks it.
struct SlowLookupRepository {
    inner: MemGrantRepository,
}

impl GrantRepository for SlowLookupRepository {
    async fn create(&self, grant: &AccessGrant) -> AccessResult<()> {
        self.inner.create(grant).await
    }

    async fn find_by_code(&self, code: &AccessCode) -> AccessResult<Option<AccessGrant>> {
        let found = self.inner.find_by_code(code).await;
        tokio::task::yield_now().await;
        found
    }

    async fn find_by_email(&self, email: &Email) -> AccessResult<Option<AccessGrant>> {
        self.inner.find_by_email(email).await
    }

    async fn exists_by_email(&self, email: &Email) -> AccessResult<bool> {
        self.inner.exists_by_email(email).await
    }

    async fn mark_redeemed(&self, grant_id: &GrantId) -> AccessResult<bool> {
        self.inner.mark_redeemed(grant_id).await
    }
}

#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<(String, String, String)>>,
    fail: bool,
}

impl RecordingMailer {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn sent(&self) -> Vec<(String, String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl Mailer for RecordingMailer {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::Transport("connection refused".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string(), body.to_string()));
        Ok(())
    }
}

fn test_config() -> Arc<AccessConfig> {
    Arc::new(AccessConfig {
        admin_email: "admin@portfolio.test".to_string(),
        public_base_url: "http://localhost:8080".to_string(),
        ..AccessConfig::development()
    })
}

// ============================================================================
// Request Access
// ============================================================================

#[tokio::test]
async fn request_access_mails_admin_a_verification_link() {
    let repo = Arc::new(MemGrantRepository::default());
    let mailer = Arc::new(RecordingMailer::default());
    let use_case = RequestAccessUseCase::new(repo.clone(), mailer.clone(), test_config());

    let output = use_case
        .execute(RequestAccessInput {
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
        })
        .await
        .unwrap();

    assert!(output.success.contains("request has been received"));

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    let (to, subject, body) = &sent[0];
    assert_eq!(to, "admin@portfolio.test");
    assert_eq!(subject, "New access request");
    assert!(body.contains("hi"));
    assert!(body.contains("/api/access/verify-access-request?email=a%40b.com"));

    // Nothing persisted yet
    assert!(repo.grant_for("a@b.com").is_none());
}

#[tokio::test]
async fn request_access_collects_all_validation_reasons() {
    let use_case = RequestAccessUseCase::new(
        Arc::new(MemGrantRepository::default()),
        Arc::new(RecordingMailer::default()),
        test_config(),
    );

    let err = use_case
        .execute(RequestAccessInput {
            email: "not-an-email".to_string(),
            message: "   ".to_string(),
        })
        .await
        .unwrap_err();

    match err {
        AccessError::Validation(reasons) => {
            assert_eq!(reasons.len(), 2);
            assert!(reasons.iter().any(|r| r.contains("email")));
            assert!(reasons.iter().any(|r| r.contains("Message")));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn request_access_rejects_duplicate_email() {
    let repo = Arc::new(MemGrantRepository::default());
    repo.create(&AccessGrant::new(Email::new("a@b.com").unwrap()))
        .await
        .unwrap();

    let mailer = Arc::new(RecordingMailer::default());
    let use_case = RequestAccessUseCase::new(repo, mailer.clone(), test_config());

    let err = use_case
        .execute(RequestAccessInput {
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AccessError::DuplicateRequest));
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn request_access_surfaces_mail_failure() {
    // Nothing was persisted, so the caller must learn the mail never left
    let use_case = RequestAccessUseCase::new(
        Arc::new(MemGrantRepository::default()),
        Arc::new(RecordingMailer::failing()),
        test_config(),
    );

    let err = use_case
        .execute(RequestAccessInput {
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AccessError::Delivery(_)));
}

// ============================================================================
// Issue Grant (admin verification)
// ============================================================================

#[tokio::test]
async fn issue_grant_persists_and_mails_the_code() {
    let repo = Arc::new(MemGrantRepository::default());
    let mailer = Arc::new(RecordingMailer::default());
    let use_case = IssueGrantUseCase::new(repo.clone(), mailer.clone());

    let output = use_case
        .execute(IssueGrantInput {
            email: "a@b.com".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(output.email, "a@b.com");
    assert!(output.success.contains("a@b.com"));

    let grant = repo.grant_for("a@b.com").expect("grant persisted");
    assert_eq!(grant.access_code.as_str().len(), 8);
    assert!(!grant.is_redeemed());

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "a@b.com");
    assert!(sent[0].2.contains(grant.access_code.as_str()));
}

#[tokio::test]
async fn issue_grant_keeps_first_code_on_duplicate() {
    let repo = Arc::new(MemGrantRepository::default());
    let mailer = Arc::new(RecordingMailer::default());
    let use_case = IssueGrantUseCase::new(repo.clone(), mailer.clone());

    use_case
        .execute(IssueGrantInput {
            email: "a@b.com".to_string(),
        })
        .await
        .unwrap();
    let first_code = repo.grant_for("a@b.com").unwrap().access_code;

    let err = use_case
        .execute(IssueGrantInput {
            email: "a@b.com".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AccessError::DuplicateRequest));
    assert_eq!(repo.grant_for("a@b.com").unwrap().access_code, first_code);
    assert_eq!(mailer.sent().len(), 1);
}

#[tokio::test]
async fn issue_grant_survives_mail_failure() {
    let repo = Arc::new(MemGrantRepository::default());
    let use_case = IssueGrantUseCase::new(repo.clone(), Arc::new(RecordingMailer::failing()));

    let output = use_case
        .execute(IssueGrantInput {
            email: "a@b.com".to_string(),
        })
        .await;

    // The grant stands even though the mail never left
    assert!(output.is_ok());
    assert!(repo.grant_for("a@b.com").is_some());
}

#[tokio::test]
async fn issue_grant_rejects_malformed_email() {
    let repo = Arc::new(MemGrantRepository::default());
    let use_case = IssueGrantUseCase::new(repo.clone(), Arc::new(RecordingMailer::default()));

    let err = use_case
        .execute(IssueGrantInput {
            email: "nope".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AccessError::Validation(_)));
    assert!(repo.grants.lock().unwrap().is_empty());
}

// ============================================================================
// Redeem Code
// ============================================================================

#[tokio::test]
async fn redeem_correct_code_returns_signed_token() {
    let repo = Arc::new(MemGrantRepository::default());
    let config = test_config();

    let grant = AccessGrant::new(Email::new("a@b.com").unwrap());
    let code = grant.access_code.as_str().to_string();
    repo.create(&grant).await.unwrap();

    let use_case = RedeemCodeUseCase::new(repo.clone(), config.clone());
    let output = use_case
        .execute(RedeemCodeInput { access_code: code })
        .await
        .unwrap();

    assert_eq!(output.email, "a@b.com");
    assert_eq!(
        parse_grant_token(&output.grant_token, &config.grant_secret),
        Some("a@b.com".to_string())
    );
    assert!(repo.grant_for("a@b.com").unwrap().is_redeemed());
}

#[tokio::test]
async fn redeem_wrong_code_is_rejected() {
    let repo = Arc::new(MemGrantRepository::default());
    repo.create(&AccessGrant::new(Email::new("a@b.com").unwrap()))
        .await
        .unwrap();

    let use_case = RedeemCodeUseCase::new(repo.clone(), test_config());
    let err = use_case
        .execute(RedeemCodeInput {
            access_code: "WRONG123".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AccessError::IncorrectAccessCode));
    assert!(!repo.grant_for("a@b.com").unwrap().is_redeemed());
}

#[tokio::test]
async fn redeem_same_code_twice_fails_the_second_time() {
    let repo = Arc::new(MemGrantRepository::default());
    let grant = AccessGrant::new(Email::new("a@b.com").unwrap());
    let code = grant.access_code.as_str().to_string();
    repo.create(&grant).await.unwrap();

    let use_case = RedeemCodeUseCase::new(repo.clone(), test_config());
    use_case
        .execute(RedeemCodeInput {
            access_code: code.clone(),
        })
        .await
        .unwrap();

    let err = use_case
        .execute(RedeemCodeInput { access_code: code })
        .await
        .unwrap_err();

    assert!(matches!(err, AccessError::IncorrectAccessCode));
}

#[tokio::test]
async fn concurrent_redemptions_consume_the_code_once() {
    let inner = MemGrantRepository::default();
    let grant = AccessGrant::new(Email::new("a@b.com").unwrap());
    let code = grant.access_code.as_str().to_string();
    inner.create(&grant).await.unwrap();

    let repo = Arc::new(SlowLookupRepository { inner });
    let use_case = RedeemCodeUseCase::new(repo, test_config());

    let (first, second) = tokio::join!(
        use_case.execute(RedeemCodeInput {
            access_code: code.clone(),
        }),
        use_case.execute(RedeemCodeInput { access_code: code }),
    );

    let outcomes = [first, second];
    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    let loser = outcomes.iter().find(|r| r.is_err()).unwrap();
    assert!(matches!(
        loser.as_ref().unwrap_err(),
        AccessError::IncorrectAccessCode
    ));
}

#[tokio::test]
async fn redeem_malformed_code_gets_the_generic_rejection() {
    let use_case = RedeemCodeUseCase::new(Arc::new(MemGrantRepository::default()), test_config());

    for bad in ["", "   ", "has spaces", "bad-code!"] {
        let err = use_case
            .execute(RedeemCodeInput {
                access_code: bad.to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AccessError::IncorrectAccessCode));
    }
}
