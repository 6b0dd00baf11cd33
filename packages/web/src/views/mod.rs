mod login;
pub use login::Login;

mod todos;
pub use todos::Todos;
