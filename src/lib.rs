// Core game logic modules
pub mod core;

// Upstream search API clients
pub mod clients;

// Signed session cookie
pub mod session;

// Configuration
pub mod config;

// Error taxonomy
pub mod error;

// API models (requests/responses)
pub mod models;

// HTTP routes
pub mod routes;

// Application state
pub mod state;
