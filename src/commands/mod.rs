mod create;
mod detect;

pub use create::run_create;
pub use detect::run_detect;
