extern crate actix_web;
extern crate awc;
extern crate futures;
extern crate serde_json;
#[macro_use] extern crate serde_derive;
#[macro_use] extern crate failure;
extern crate percent_encoding;
extern crate chrono;
extern crate config;
#[macro_use] extern crate log;

pub mod web;
pub mod app;
pub mod settings;
