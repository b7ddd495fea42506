//! Identity Event Store — `EventRepository` implementations.

pub mod in_memory_event_repository;
