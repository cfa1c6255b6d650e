//! Base URL resolution: the externally reachable origin used to build
//! absolute URLs for metadata and internal API calls.

use actix_web::HttpRequest;
use actix_web::http::header;

use crate::config::Environment;

/// Hard-coded final fallbacks.
pub const PRODUCTION_FALLBACK: &str = "https://example.com";
pub const DEVELOPMENT_FALLBACK: &str = "http://localhost:3000";

/// The environment-derived tiers of the base-URL fallback chain, resolved in
/// declaration order after the request's host header.
#[derive(Debug, Clone)]
pub struct BaseUrls {
    /// `NEXT_PUBLIC_BASE_URL`
    pub public_base_url: Option<String>,
    /// `NEXT_PUBLIC_APP_URL`
    pub public_app_url: Option<String>,
    /// `VERCEL_URL` - the platform deployment hostname, always https.
    pub deployment_url: Option<String>,
    pub production: bool,
}

impl BaseUrls {
    pub fn from_env(environment: Environment) -> Self {
        fn non_empty(var: &str) -> Option<String> {
            std::env::var(var).ok().filter(|v| !v.trim().is_empty())
        }

        Self {
            public_base_url: non_empty("NEXT_PUBLIC_BASE_URL"),
            public_app_url: non_empty("NEXT_PUBLIC_APP_URL"),
            deployment_url: non_empty("VERCEL_URL"),
            production: environment.is_production(),
        }
    }

    /// Resolve the origin (`scheme://host`, no trailing slash). Never fails:
    /// every tier falls through to the next and the last always answers.
    pub fn resolve(&self, host_header: Option<&str>) -> String {
        if let Some(host) = host_header.map(str::trim).filter(|h| !h.is_empty()) {
            return format!("{}://{}", scheme_for(host), host);
        }

        if let Some(value) = &self.public_base_url {
            return normalize(value);
        }
        if let Some(value) = &self.public_app_url {
            return normalize(value);
        }
        if let Some(value) = &self.deployment_url {
            return format!("https://{value}");
        }

        if self.production {
            PRODUCTION_FALLBACK.to_owned()
        } else {
            DEVELOPMENT_FALLBACK.to_owned()
        }
    }
}

/// The inbound `Host` header, when present.
pub fn host_header(req: &HttpRequest) -> Option<&str> {
    req.headers().get(header::HOST).and_then(|v| v.to_str().ok())
}

/// `http` for local hosts, `https` for everything else.
fn scheme_for(host: &str) -> &'static str {
    if host.contains("localhost") || host.starts_with("127.") {
        "http"
    } else {
        "https"
    }
}

/// Strip a trailing slash and prepend a scheme when missing.
fn normalize(value: &str) -> String {
    let trimmed = value.trim();
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_owned()
    } else {
        format!("{}://{}", scheme_for(trimmed), trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(production: bool) -> BaseUrls {
        BaseUrls {
            public_base_url: None,
            public_app_url: None,
            deployment_url: None,
            production,
        }
    }

    #[test]
    fn host_header_wins_with_scheme_heuristic() {
        let urls = bare(true);
        assert_eq!(
            urls.resolve(Some("localhost:3000")),
            "http://localhost:3000"
        );
        assert_eq!(urls.resolve(Some("127.0.0.1:8080")), "http://127.0.0.1:8080");
        assert_eq!(urls.resolve(Some("example.com")), "https://example.com");
    }

    #[test]
    fn env_base_url_is_normalized() {
        let urls = BaseUrls {
            public_base_url: Some("myapp.com/".to_owned()),
            ..bare(false)
        };
        assert_eq!(urls.resolve(None), "https://myapp.com");
    }

    #[test]
    fn env_base_url_keeps_existing_scheme() {
        let urls = BaseUrls {
            public_base_url: Some("http://localhost:4000/".to_owned()),
            ..bare(false)
        };
        assert_eq!(urls.resolve(None), "http://localhost:4000");
    }

    #[test]
    fn app_url_is_second_tier() {
        let urls = BaseUrls {
            public_app_url: Some("app.example.com".to_owned()),
            ..bare(false)
        };
        assert_eq!(urls.resolve(None), "https://app.example.com");
    }

    #[test]
    fn deployment_url_is_always_https() {
        let urls = BaseUrls {
            deployment_url: Some("my-branch.vercel.app".to_owned()),
            ..bare(false)
        };
        assert_eq!(urls.resolve(None), "https://my-branch.vercel.app");
    }

    #[test]
    fn hard_coded_fallbacks_per_environment() {
        assert_eq!(bare(true).resolve(None), PRODUCTION_FALLBACK);
        assert_eq!(bare(false).resolve(None), DEVELOPMENT_FALLBACK);
    }

    #[test]
    fn precedence_follows_declaration_order() {
        let urls = BaseUrls {
            public_base_url: Some("first.com".to_owned()),
            public_app_url: Some("second.com".to_owned()),
            deployment_url: Some("third.vercel.app".to_owned()),
            production: true,
        };
        assert_eq!(urls.resolve(None), "https://first.com");
        assert_eq!(urls.resolve(Some("host.com")), "https://host.com");
    }
}
