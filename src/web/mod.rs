//! HTML front end: page handlers rendered with Askama

pub mod handlers;
