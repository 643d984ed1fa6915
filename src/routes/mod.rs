pub(crate) mod auth;
pub(crate) mod data;
pub(crate) mod health;
pub(crate) mod public;
pub(crate) mod stocks;
