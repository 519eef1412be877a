//! # Board Actor
//!
//! A single-owner store built on the Actor Model. One [`ResourceActor`] task owns
//! every record of a given type and processes requests strictly one after
//! another; everything else talks to it through a cloneable [`ResourceClient`].
//!
//! ## Why an actor rather than a lock?
//!
//! The store has exactly one shared mutable resource: the collection itself.
//! Appends, flag flips and full listings must never interleave. Giving the
//! collection to a single task and sending it messages gives that serialization
//! without any `Mutex` around the data, and an `async` caller simply awaits the
//! reply.
//!
//! ## Core Concepts
//!
//! - [`ActorEntity`] - what a record type must provide: id, creation payload,
//!   custom actions, runtime context and error type.
//! - [`ResourceActor`] - owns records in insertion order and answers
//!   [`ResourceRequest`]s (`Create`, `Get`, `List`, `Action`).
//! - [`ResourceClient`] - the async, cloneable sending half.
//! - [`ActorClient`] - trait giving entity-specific clients default `get`/`list`.
//! - [`FrameworkError`] - mailbox failures, unknown ids, boxed entity errors.
//!
//! ## Context Injection
//!
//! Dependencies are handed to `run(context)` rather than `new()`, and reach
//! every hook by reference. An entity that stamps creation time, for example,
//! takes its clock from the context.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task.
//! - Requests are processed sequentially, so no lock guards the store.
//! - The mailbox is bounded; callers wait when it is full.
//! - The loop ends when the last client is dropped.
//!
//! ## Testing
//!
//! See [`mock`] for a scripted [`MockClient`](mock::MockClient) that exercises
//! client wrappers without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
