//! Record store adapters
//!
//! Two adapters implement the domain store ports:
//!
//! - [`MemoryStore`] keeps everything behind one `RwLock`; it backs the
//!   test suite and the demo mode of the server binary.
//! - [`PgStore`] persists to PostgreSQL through SQLx. Queries use the
//!   runtime API so the workspace builds without a live database.
//!
//! Both adapters enforce the store-side invariants: referential checks at
//! invoice creation, invoice-number uniqueness in the active set, the
//! atomic linked-invoice guard on person deletion, and the credit-note
//! edit gate on posted invoices.

pub mod error;
pub mod memory;
pub mod pool;
pub mod postgres;

pub use memory::MemoryStore;
pub use pool::connect_pool;
pub use postgres::PgStore;
