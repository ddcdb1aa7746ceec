#![allow(dead_code)]

pub mod records;
pub mod scripted_gateway;

pub const API_SECRET: &str = "api_secret";
