//! Request/response services layered over a [`crate::storage::RecordStore`].

pub mod services;
