pub mod activity;
pub mod signup;

pub use activity::Activity;
pub use signup::Signup;
