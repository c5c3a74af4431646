//! Samovar client library
//!
//! Client-side core of the table-ordering platform: persistent session
//! store, typed HTTP API client, live notification bridge, cart and
//! checkout state, and role-gated navigation. Feature frontends compose
//! these pieces; all business decisions stay on the backend.

pub mod cart;
pub mod config;
pub mod error;
pub mod http;
pub mod live;
pub mod nav;
pub mod session;

pub use cart::{Cart, CartLine, CartPolicy, CheckoutTotals, TipChoice, SERVICE_FEE_PERCENT};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::ApiClient;
pub use live::{ConnectionState, LiveBridge, LiveConfig, LiveError, Subscription};
pub use nav::{guard, NavDecision, Route};
pub use session::{SessionError, SessionStore};
