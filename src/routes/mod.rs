//! Route modules for the PDF Archive Server

pub mod search;
pub mod upload;
