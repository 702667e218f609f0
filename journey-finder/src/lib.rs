//! Train journey finder server.
//!
//! A web application that answers: "How can I get from station A to
//! station B, directly or with one change, and what will it cost?"

pub mod config;
pub mod domain;
pub mod planner;
pub mod store;
pub mod web;
