pub mod input;
pub mod user;

pub use input::{CreateUserInput, UpdateUserInput};
pub use user::User;
