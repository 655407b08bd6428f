//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate stores, views and boundary calls into use-case APIs.
//! - Keep callers decoupled from storage and transport details.

pub mod diary_service;
pub mod diet_service;
pub mod document_service;
pub mod quest_service;
pub mod session_service;
pub mod todo_service;
