mod app;
mod shutdown;

pub use app::{create_app, create_router};
pub use shutdown::shutdown_signal;
