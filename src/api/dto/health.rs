//! DTOs for the health endpoint.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
    /// Enabled sizes; never affects the overall status.
    pub sizes: CheckStatus,
}

impl HealthChecks {
    pub fn all_ok(&self) -> bool {
        self.database.status == CheckState::Ok
    }
}

#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: CheckState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: CheckState::Ok,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: CheckState::Error,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let response = HealthResponse {
            status: ServiceStatus::Degraded,
            version: "0.1.0",
            checks: HealthChecks {
                database: CheckStatus::error("Database error"),
                sizes: CheckStatus::ok("Enabled: 300x250"),
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["checks"]["database"]["status"], "error");
        assert_eq!(json["checks"]["sizes"]["message"], "Enabled: 300x250");
        assert!(!response.checks.all_ok());
    }

    #[test]
    fn test_status_follows_database() {
        let checks = HealthChecks {
            database: CheckStatus::ok("Connected, 0 ads"),
            sizes: CheckStatus::ok("Enabled: 728x90"),
        };
        assert!(checks.all_ok());

        let checks = HealthChecks {
            database: CheckStatus::error("Database error: pool timed out"),
            sizes: CheckStatus::ok("Enabled: 728x90"),
        };
        assert!(!checks.all_ok());
    }
}
