//! Pet Sync API Library
//!
//! A small REST API for managing pet records. Each created pet and its
//! owning contact are synchronized with the HubSpot CRM and persisted in
//! PostgreSQL.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `crm_client`: HubSpot CRM API client.
//! - `db`: Database connection and pool management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Data models.
//! - `repositories`: Per-entity data access over the pool.

pub mod config;
pub mod crm_client;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
