//! Types and client for Gitee's v5 API
//! https://gitee.com/api/v5/swagger

mod branch;
pub mod client;
mod common;
mod repo;
mod user;

pub use branch::*;
pub use client::Client;
pub use common::*;
pub use repo::*;
pub use user::*;
