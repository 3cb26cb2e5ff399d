use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub firebase: FirebaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

/// Connection details for the two external collaborators: the Firestore
/// document store holding the admin role collection, and the Identity
/// Toolkit endpoint behind account deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirebaseConfig {
    pub project_id: String,
    pub firestore_base_url: String,
    pub identity_base_url: String,
    /// Collection where the existence of a document keyed by uid marks that
    /// identity as an admin.
    pub admin_collection: String,
    pub api_key: Option<String>,
    /// Service bearer token for the REST calls. None when pointed at an
    /// emulator, which accepts unauthenticated requests.
    pub service_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("ADMIN_API_PORT").or_else(|_| env::var("PORT")) {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        // Firebase overrides
        if let Ok(v) = env::var("FIREBASE_PROJECT_ID") {
            self.firebase.project_id = v;
        }
        if let Ok(v) = env::var("FIREBASE_FIRESTORE_BASE_URL") {
            self.firebase.firestore_base_url = v;
        }
        if let Ok(v) = env::var("FIREBASE_IDENTITY_BASE_URL") {
            self.firebase.identity_base_url = v;
        }
        if let Ok(v) = env::var("FIREBASE_ADMIN_COLLECTION") {
            self.firebase.admin_collection = v;
        }
        if let Ok(v) = env::var("FIREBASE_API_KEY") {
            self.firebase.api_key = Some(v);
        }
        if let Ok(v) = env::var("FIREBASE_SERVICE_TOKEN") {
            self.firebase.service_token = Some(v);
        }

        // Security overrides
        if let Ok(v) = env::var("ADMIN_API_JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("SECURITY_JWT_EXPIRY_HOURS") {
            self.security.jwt_expiry_hours = v.parse().unwrap_or(self.security.jwt_expiry_hours);
        }
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v.split(',').map(|s| s.trim().to_string()).collect();
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 3000 },
            firebase: FirebaseConfig {
                project_id: "demo-admin-api".to_string(),
                // Emulator defaults; point at the hosted services via env vars
                firestore_base_url: "http://localhost:8080/v1".to_string(),
                identity_base_url: "http://localhost:9099".to_string(),
                admin_collection: "admin".to_string(),
                api_key: None,
                service_token: None,
            },
            security: SecurityConfig {
                jwt_secret: "dev-secret-change-me".to_string(),
                jwt_expiry_hours: 24 * 7, // 1 week
                enable_cors: true,
                cors_origins: vec![
                    "http://localhost:3000".to_string(),
                    "http://localhost:5173".to_string(),
                ],
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig { port: 3000 },
            firebase: FirebaseConfig {
                project_id: String::new(),
                firestore_base_url: "https://firestore.googleapis.com/v1".to_string(),
                identity_base_url: "https://identitytoolkit.googleapis.com".to_string(),
                admin_collection: "admin".to_string(),
                api_key: None,
                service_token: None,
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_hours: 24,
                enable_cors: true,
                cors_origins: vec!["https://staging.example.com".to_string()],
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 3000 },
            firebase: FirebaseConfig {
                project_id: String::new(),
                firestore_base_url: "https://firestore.googleapis.com/v1".to_string(),
                identity_base_url: "https://identitytoolkit.googleapis.com".to_string(),
                admin_collection: "admin".to_string(),
                api_key: None,
                service_token: None,
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_hours: 4,
                enable_cors: true,
                cors_origins: vec!["https://app.example.com".to_string()],
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
