pub mod icons;
pub mod landing;
pub mod typewriter;
