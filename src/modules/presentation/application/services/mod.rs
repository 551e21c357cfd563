mod landing_page_service;
mod typewriter_stream;

pub use landing_page_service::LandingPageService;
pub use typewriter_stream::typewriter_frames;
