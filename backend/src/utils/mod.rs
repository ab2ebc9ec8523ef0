//! Collection of general utility functions and common helpers.
//!
//! This module serves as a home for small, reusable building blocks that do
//! not fit into other specific domain modules: the password hasher and the
//! bearer-token codec.

pub mod jwt;
pub mod password;
