//! Train-to-bus switch planner server.
//!
//! A web application that answers: "I'm on the next outbound train; at which
//! station should I get off, and which bus should I catch, to reach my
//! destination soonest?"

pub mod board;
pub mod config;
pub mod domain;
pub mod ptv;
pub mod switch;
pub mod web;
