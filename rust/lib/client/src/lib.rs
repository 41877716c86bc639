//! staykit HTTP client.
//!
//! Every resource of the platform is exposed as a small client whose
//! methods all go through one transport: `POST {base}/{resource}/{action}`
//! with a JSON body `{"params": ..., "options": {...}}`. Resource and
//! action names are kebab-cased on the wire.
//!
//! # Usage
//!
//! ```ignore
//! use staykit_client::{ListParams, Sdk};
//!
//! let sdk = Sdk::new("https://api.example.com");
//! let page = sdk.booking().list(&ListParams::default().per_page(20)).await?;
//! let item = sdk.property().get("prop_1").await?;
//! sdk.booking().cancel(&serde_json::json!({"id": "bk_1"})).await?;
//! ```

pub mod envelope;
pub mod error;
pub mod path;
pub mod resource;
pub mod resources;
pub mod transport;

pub use envelope::{AutocompleteItem, ListParams, PaginatedResponse, Pagination, Response};
pub use error::ApiError;
pub use path::to_kebab_case;
pub use resource::ResourceClient;
pub use resources::*;
pub use transport::{ApiClient, RequestOptions};
