pub mod dto;
pub mod login;
