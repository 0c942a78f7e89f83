pub mod frame;
pub mod viewer;

pub use frame::compose_frame;
pub use viewer::show_image;
