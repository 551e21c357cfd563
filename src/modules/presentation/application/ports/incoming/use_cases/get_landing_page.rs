use async_trait::async_trait;

use crate::presentation::application::domain::landing::LandingPage;

/// Never fails as a whole; each section reports its own error.
#[async_trait]
pub trait GetLandingPageUseCase: Send + Sync {
    async fn execute(&self) -> LandingPage;
}
