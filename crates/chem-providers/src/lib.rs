//! chem-providers: cliente remoto de compuestos (PubChem PUG REST).
//!
//! - `provider`: contrato `CompoundProvider` que usan resolver y ensamblador.
//! - `pubchem`: implementación sobre un `Transport`.
//! - `transport`: costura HTTP; `UreqTransport` para red real.
//! - `mock_transport`: respuestas guionizadas para tests.
pub mod config;
pub mod mock_transport;
pub mod payload;
pub mod provider;
pub mod pubchem;
pub mod transport;

pub use config::PubChemConfig;
pub use mock_transport::MockTransport;
pub use provider::{CompoundProvider, IdentifierList, PropertyPayload};
pub use pubchem::PubChemClient;
pub use transport::{HttpResponse, Transport, UreqTransport};
