use crate::wire::HealthRes;

/// Health check shared by the API surfaces.
///
/// Reports liveness together with the current number of stored posts.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Builds the health response for a store holding `count` posts.
    pub fn check_health(count: usize) -> HealthRes {
        HealthRes { ok: true, count }
    }
}
