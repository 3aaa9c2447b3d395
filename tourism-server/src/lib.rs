//! Tourism route planner server.
//!
//! A web application that answers: "I'm driving from A to B - what is
//! worth stopping for along the way, and in what order should I visit it?"

pub mod catalog;
pub mod domain;
pub mod geo;
pub mod geocode;
pub mod planner;
pub mod web;
