//! Audit-log view logic

pub mod pagination;
pub mod ports;
pub mod text_filter;
pub mod view;
