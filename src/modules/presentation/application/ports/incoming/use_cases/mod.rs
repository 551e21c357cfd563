mod get_landing_page;

pub use get_landing_page::GetLandingPageUseCase;
