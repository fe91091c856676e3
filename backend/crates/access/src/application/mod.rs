pub mod config;
pub mod grant_token;
pub mod issue_grant;
pub mod redeem_code;
pub mod request_access;

pub use issue_grant::{IssueGrantInput, IssueGrantOutput, IssueGrantUseCase};
pub use redeem_code::{RedeemCodeInput, RedeemCodeOutput, RedeemCodeUseCase};
pub use request_access::{RequestAccessInput, RequestAccessOutput, RequestAccessUseCase};
