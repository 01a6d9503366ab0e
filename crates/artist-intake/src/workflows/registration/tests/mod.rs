mod common;
mod service;
mod store;
