pub mod mapper;
pub mod ports;
pub mod services;
