#![allow(dead_code)]

pub mod vendor_server;
