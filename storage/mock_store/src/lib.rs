//! In-memory [`LocationStore`](use_cases::locations::store::LocationStore),
//! used by tests and by the `memory` storage backend. Distances are computed
//! with the haversine formula over a spherical earth.

mod store;

pub use store::MemoryRepository;
