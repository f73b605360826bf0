// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::{dtos, screen, services};
pub use client::{Client, ClientDelegate, ClientInner};
pub use client_builder::ClientBuilder;
pub use client_event::ClientEvent;

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client;
mod client_builder;
mod client_event;

pub mod domain;
pub mod infra;
