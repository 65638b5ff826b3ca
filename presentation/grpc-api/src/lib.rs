//! gRPC binding of the product catalog.
//!
//! `proto` holds the wire messages and the generated client and server;
//! `product` adapts the business use cases to the generated server trait;
//! `router` assembles the tonic server around it.

pub mod proto;
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod service;
}
pub mod router;
