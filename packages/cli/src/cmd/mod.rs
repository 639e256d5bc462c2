pub mod login;
pub mod products;
