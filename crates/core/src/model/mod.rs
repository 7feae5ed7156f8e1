pub mod frame;
pub mod viewport;

pub use frame::Frame;
pub use viewport::Viewport;
