pub mod password;
pub mod payloads;
pub mod token;
