//! # Kiosko Admin Core
//!
//! Domain layer of the Kiosko operator tooling. The crate is organized the
//! way requests flow:
//!
//! 1. A frontend resolves a use-case through the [`Registry`].
//! 2. The use-case delegates to exactly one service call.
//! 3. The service forwards to a repository (occasionally reshaping the
//!    result, e.g. deriving [`entities::LinkType`]).
//! 4. The repository translates between wire envelopes and domain shapes
//!    over the shared [`kiosko_client::ApiClient`].
//!
//! Every read re-fetches from the server and every write is fire-and-forget:
//! nothing is cached, versioned, or reconciled client-side. Mutations report
//! server-judged success as a boolean; transport failures surface as errors
//! and are never collapsed into "no data".

pub mod adverts;
pub mod campaigns;
pub mod editor;
pub mod entities;
pub mod errors;
pub mod exports;
pub mod files;
pub mod games;
pub mod highlights;
pub mod publications;
pub mod registry;
pub mod repository;
pub mod supplements;
pub mod usecases;

pub use errors::Error;
pub use registry::Registry;
pub use repository::CrudRepository;
