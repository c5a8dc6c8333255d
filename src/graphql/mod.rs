//! Capa GraphQL
//!
//! Schema estático del marketplace y sus resolvers, construidos con
//! async-graphql. El repositorio se inyecta como data del schema.

pub mod schema;
