//! Application Configuration
//!
//! Configuration for the Access application layer.

use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Access application configuration
#[derive(Debug, Clone)]
pub struct AccessConfig {
    /// Address the admin verification mail goes to
    pub admin_email: String,
    /// Base URL used to build the verification link
    pub public_base_url: String,
    /// Grant cookie name
    pub grant_cookie_name: String,
    /// Secret key for HMAC-signing grant tokens (32 bytes)
    pub grant_secret: [u8; 32],
    /// How long the grant cookie stays valid in the browser
    pub grant_cookie_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            admin_email: "admin@localhost".to_string(),
            public_base_url: "http://localhost:8080".to_string(),
            grant_cookie_name: "access_granted".to_string(),
            grant_secret: [0u8; 32],
            grant_cookie_ttl: Duration::from_secs(30 * 60), // 30 minutes
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AccessConfig {
    /// Create config with a random grant secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            grant_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Grant cookie Max-Age in seconds
    pub fn grant_cookie_ttl_secs(&self) -> i64 {
        self.grant_cookie_ttl.as_secs() as i64
    }

    /// Cookie settings for the grant token
    pub fn cookie_config(&self) -> platform::cookie::CookieConfig {
        platform::cookie::CookieConfig {
            name: self.grant_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.grant_cookie_ttl_secs()),
        }
    }
}
