use crate::dto::HealthRes;

/// Simple health service for the Users API.
///
/// Reports liveness only; the in-memory store has no dependency that can become unhealthy.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Static method to check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Users API is alive".into(),
        }
    }
}
